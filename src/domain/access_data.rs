//! The locally persisted authenticated-session record.

use serde::{Deserialize, Serialize};

/// How the current session was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SignInMethod {
    Federated,
    Password,
    #[default]
    None,
}

/// Session state owned exclusively by the auth worker.
///
/// Created empty at worker initialization, loaded from the secure store at
/// startup, mutated in place on every successful sign-in/link/refresh,
/// cleared on sign-out and at the top of a new attempt, and persisted to the
/// secure store on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccessData {
    /// Short-lived opaque access token; empty when signed out.
    pub access_token: String,
    /// The identity provider's user id.
    pub provider_user_id: String,
    pub method: SignInMethod,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AccessData {
    /// True when a non-empty access token is held.
    pub fn is_signed_in(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Resets to the signed-out state.
    pub fn clear(&mut self) {
        *self = AccessData::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_signed_out() {
        let data = AccessData::default();
        assert!(!data.is_signed_in());
        assert_eq!(data.method, SignInMethod::None);
    }

    #[test]
    fn clear_resets_every_field() {
        let mut data = AccessData {
            access_token: "tok".into(),
            provider_user_id: "uid".into(),
            method: SignInMethod::Password,
            given_name: Some("Ada".into()),
            family_name: None,
            email: Some("ada@example.com".into()),
        };
        data.clear();
        assert_eq!(data, AccessData::default());
    }

    #[test]
    fn wire_round_trip_preserves_all_fields() {
        let data = AccessData {
            access_token: "tok".into(),
            provider_user_id: "uid".into(),
            method: SignInMethod::Federated,
            given_name: Some("Ada".into()),
            family_name: Some("Lovelace".into()),
            email: Some("ada@example.com".into()),
        };
        let bytes = serde_json::to_vec(&data).unwrap();
        let back: AccessData = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, data);
    }
}
