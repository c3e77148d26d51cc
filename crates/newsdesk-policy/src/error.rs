//! Error types for policy and workflow decisions
//!
//! This module defines the failure taxonomy of the core: denials are
//! expected, user-facing outcomes; stale state is a retriable condition
//! signaled to the caller. Nothing in here is a crash.

use thiserror::Error;

/// Policy decision error types.
///
/// Every failure the core can express is a typed condition for the caller
/// to map to a transport-level response. The core has no fatal errors and
/// never partially applies a transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Policy evaluation said no.
    ///
    /// Expected and user-facing; not a server error and not worth logging
    /// as one.
    #[error("Permission denied: {action}")]
    Denied {
        /// The action that was refused.
        action: String,
    },

    /// Role identifier not found in configuration or the built-in table.
    ///
    /// Permission resolution never raises this; unknown roles resolve to
    /// the empty set and fail closed. It is reported by the strict
    /// resolution API for callers that want the distinction.
    #[error("Unknown role: {role}")]
    UnknownRole {
        /// The identifier that did not resolve.
        role: String,
    },

    /// A transition lost a concurrent race on the same article.
    ///
    /// The caller re-fetches and re-evaluates, at most once automatically,
    /// then surfaces this to the user.
    #[error("Article state changed concurrently")]
    StaleState,

    /// Attempted to delete one of the built-in system roles.
    #[error("System roles cannot be deleted")]
    ProtectedRole {
        /// The protected role's identifier.
        slug: String,
    },

    /// Attempted to delete a role that principals are still assigned.
    #[error("Reassign users before deleting this role")]
    RoleInUse {
        /// The role's identifier.
        slug: String,
        /// How many principals still reference it.
        assigned: usize,
    },

    /// An administrator attempted to deactivate their own account.
    #[error("You cannot deactivate your own account")]
    SelfDeactivation,
}

/// Result type for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

impl PolicyError {
    /// Build a denial for a named action.
    pub fn denied(action: impl Into<String>) -> Self {
        Self::Denied {
            action: action.into(),
        }
    }

    /// Whether the caller may retry after re-fetching state.
    ///
    /// Only stale state is retriable; denials are final for the inputs
    /// they were evaluated against.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PolicyError::StaleState)
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            PolicyError::Denied { .. } => 403,
            PolicyError::UnknownRole { .. } => 404,
            PolicyError::StaleState => 409,
            PolicyError::RoleInUse { .. } => 409,
            PolicyError::ProtectedRole { .. } => 422,
            PolicyError::SelfDeactivation => 422,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            PolicyError::Denied { .. } => "DENIED",
            PolicyError::UnknownRole { .. } => "UNKNOWN_ROLE",
            PolicyError::StaleState => "STALE_STATE",
            PolicyError::ProtectedRole { .. } => "PROTECTED_ROLE",
            PolicyError::RoleInUse { .. } => "ROLE_IN_USE",
            PolicyError::SelfDeactivation => "SELF_DEACTIVATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_constructor() {
        let err = PolicyError::denied("articles.approve");
        assert_eq!(
            err,
            PolicyError::Denied {
                action: "articles.approve".to_string()
            }
        );
        assert_eq!(err.to_string(), "Permission denied: articles.approve");
    }

    #[test]
    fn test_only_stale_state_is_retryable() {
        assert!(PolicyError::StaleState.is_retryable());
        assert!(!PolicyError::denied("articles.edit").is_retryable());
        assert!(!PolicyError::SelfDeactivation.is_retryable());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(PolicyError::denied("x").status_code(), 403);
        assert_eq!(
            PolicyError::UnknownRole {
                role: "stringer".into()
            }
            .status_code(),
            404
        );
        assert_eq!(PolicyError::StaleState.status_code(), 409);
        assert_eq!(
            PolicyError::ProtectedRole {
                slug: "admin".into()
            }
            .status_code(),
            422
        );
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(PolicyError::StaleState.error_code(), "STALE_STATE");
        assert_eq!(
            PolicyError::RoleInUse {
                slug: "columnist".into(),
                assigned: 2
            }
            .error_code(),
            "ROLE_IN_USE"
        );
    }
}
