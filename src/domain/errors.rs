//! The unified error taxonomy every worker translates into.
//!
//! Backend-specific failures (gateway statuses, identity-provider codes,
//! document-store errors) never cross the worker boundary raw. They are
//! mapped into this closed set so callers can render a user-facing message
//! without knowing which backend produced the failure.

use thiserror::Error;

/// Domain-level failure returned by every worker operation.
///
/// The set is closed on purpose: an unmapped backend condition becomes
/// [`WorkerError::Failure`] with the original cause attached, never a new
/// variant and never a silent drop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    /// One or more required parameters were missing or malformed.
    #[error("invalid parameters: {}", fields.join(", "))]
    InvalidParameters { fields: Vec<String> },

    /// An account already exists for the supplied credentials.
    #[error("an account already exists for these credentials")]
    ExistingAccount,

    /// The caller is known but not allowed to perform the operation.
    #[error("access forbidden")]
    Forbidden,

    /// Too many attempts; the backend has temporarily locked the caller out.
    #[error("temporarily locked out")]
    LockedOut,

    /// The caller is not (or no longer) authenticated.
    #[error("not authorized")]
    Unauthorized,

    /// No record matched the given field/value pair.
    #[error("no {field} found matching '{value}'")]
    NotFound { field: String, value: String },

    /// The backend could not be reached at all.
    #[error("network failure: {cause}")]
    Network { cause: String },

    /// A condition the translator has no information about.
    #[error("unknown error")]
    Unknown,

    /// A lower-level failure with the cause attached.
    #[error("backend failure: {cause}")]
    Failure { cause: String },
}

impl WorkerError {
    /// Creates an `InvalidParameters` error for the named fields.
    pub fn invalid_parameters<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WorkerError::InvalidParameters {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a `NotFound` error carrying the searched field and value.
    pub fn not_found(field: impl Into<String>, value: impl Into<String>) -> Self {
        WorkerError::NotFound {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a `Network` error with the transport cause attached.
    pub fn network(cause: impl Into<String>) -> Self {
        WorkerError::Network { cause: cause.into() }
    }

    /// Creates a generic `Failure` with the underlying cause attached.
    pub fn failure(cause: impl Into<String>) -> Self {
        WorkerError::Failure { cause: cause.into() }
    }

    /// True when the error came from input validation rather than a backend.
    pub fn is_validation(&self) -> bool {
        matches!(self, WorkerError::InvalidParameters { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameters_lists_fields_in_message() {
        let err = WorkerError::invalid_parameters(["username", "password"]);
        assert_eq!(format!("{}", err), "invalid parameters: username, password");
    }

    #[test]
    fn not_found_carries_field_and_value() {
        let err = WorkerError::not_found("account", "a-42");
        assert_eq!(format!("{}", err), "no account found matching 'a-42'");
    }

    #[test]
    fn validation_predicate_only_matches_invalid_parameters() {
        assert!(WorkerError::invalid_parameters(["id"]).is_validation());
        assert!(!WorkerError::Unauthorized.is_validation());
        assert!(!WorkerError::failure("boom").is_validation());
    }
}
