//! Error translation: backend-specific conditions into the domain taxonomy.
//!
//! Pure functions: the same input condition always yields the same
//! [`WorkerError`] kind. Anything unmapped becomes a generic failure with
//! the cause attached, never a silent drop.

use serde::Deserialize;

use crate::domain::WorkerError;
use crate::gateway::TransportError;
use crate::ports::{ProviderError, StoreError};

/// Error body shape the gateway returns alongside non-success statuses.
/// Parsed best-effort; an unparseable body falls back to the raw text.
#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    error: GatewayErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GatewayErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

/// Translates a non-success gateway status plus error body.
pub fn translate_status(status: u16, body: &[u8], path: &str) -> WorkerError {
    let detail = serde_json::from_slice::<GatewayErrorBody>(body)
        .ok()
        .map(|b| b.error);

    match status {
        400 | 422 => {
            let fields = detail
                .and_then(|d| d.field)
                .map(|f| vec![f])
                .unwrap_or_default();
            WorkerError::InvalidParameters { fields }
        }
        401 => WorkerError::Unauthorized,
        403 => WorkerError::Forbidden,
        404 => {
            let (field, value) = match detail {
                Some(d) => (
                    d.field.unwrap_or_else(|| "resource".to_string()),
                    d.value.unwrap_or_else(|| path.to_string()),
                ),
                None => ("resource".to_string(), path.to_string()),
            };
            WorkerError::not_found(field, value)
        }
        409 => WorkerError::ExistingAccount,
        429 => WorkerError::LockedOut,
        _ => {
            let message = detail
                .and_then(|d| d.message)
                .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());
            WorkerError::failure(format!("gateway returned {status}: {message}"))
        }
    }
}

/// Translates a transport-level failure (no status line was received).
pub fn translate_transport(error: TransportError) -> WorkerError {
    WorkerError::network(error.to_string())
}

/// Translates an identity-provider failure.
pub fn translate_provider(error: ProviderError) -> WorkerError {
    match error {
        ProviderError::InvalidCredential | ProviderError::WeakPassword => {
            WorkerError::invalid_parameters(["credential"])
        }
        ProviderError::EmailInUse => WorkerError::ExistingAccount,
        ProviderError::UserDisabled => WorkerError::Forbidden,
        ProviderError::TooManyRequests => WorkerError::LockedOut,
        ProviderError::WrongPassword
        | ProviderError::ExpiredToken
        | ProviderError::InvalidToken => WorkerError::Unauthorized,
        ProviderError::NoSuchUser { email } => WorkerError::not_found("user", email),
        ProviderError::Network(cause) => WorkerError::network(cause),
        ProviderError::UnknownProvider(provider) => {
            WorkerError::failure(format!("unknown provider: {provider}"))
        }
        ProviderError::Other(cause) => WorkerError::failure(cause),
    }
}

/// Translates a document/blob store failure.
pub fn translate_store(error: StoreError) -> WorkerError {
    match error {
        StoreError::NotFound { path } => WorkerError::not_found("document", path),
        StoreError::PermissionDenied => WorkerError::Forbidden,
        StoreError::Network(cause) => WorkerError::network(cause),
        StoreError::Backend(cause) => WorkerError::failure(cause),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn status_404_carries_field_and_value_from_body() {
        let body = br#"{"error":{"field":"account","value":"a-9"}}"#;
        let err = translate_status(404, body, "/accounts/a-9");
        assert_eq!(err, WorkerError::not_found("account", "a-9"));
    }

    #[test]
    fn status_404_without_body_falls_back_to_path() {
        let err = translate_status(404, b"", "/accounts/a-9");
        assert_eq!(err, WorkerError::not_found("resource", "/accounts/a-9"));
    }

    #[test]
    fn status_409_is_existing_account() {
        assert_eq!(translate_status(409, b"", "/accounts"), WorkerError::ExistingAccount);
    }

    #[test]
    fn status_400_extracts_offending_field() {
        let body = br#"{"error":{"field":"name"}}"#;
        let err = translate_status(400, body, "/accounts");
        assert_eq!(err, WorkerError::invalid_parameters(["name"]));
    }

    #[test]
    fn server_errors_attach_cause() {
        let body = br#"{"error":{"message":"db down"}}"#;
        match translate_status(503, body, "/accounts") {
            WorkerError::Failure { cause } => assert!(cause.contains("db down")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn email_in_use_is_always_existing_account() {
        assert_eq!(
            translate_provider(ProviderError::EmailInUse),
            WorkerError::ExistingAccount
        );
    }

    #[test]
    fn unmapped_provider_error_keeps_cause() {
        match translate_provider(ProviderError::Other("odd condition".into())) {
            WorkerError::Failure { cause } => assert_eq!(cause, "odd condition"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn transport_errors_are_network() {
        let err = translate_transport(TransportError::Timeout { timeout_secs: 30 });
        assert!(matches!(err, WorkerError::Network { .. }));
    }

    #[test]
    fn store_not_found_keeps_path() {
        let err = translate_store(StoreError::NotFound { path: "cms/terms".into() });
        assert_eq!(err, WorkerError::not_found("document", "cms/terms"));
    }

    proptest! {
        // Translation is total and deterministic over the status space.
        #[test]
        fn every_status_translates_to_the_same_kind(status in 100u16..600) {
            let a = translate_status(status, b"", "/p");
            let b = translate_status(status, b"", "/p");
            prop_assert_eq!(a, b);
        }
    }
}
