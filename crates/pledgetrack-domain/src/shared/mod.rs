use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the id is empty or whitespace only.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(UserId);
define_id!(PledgeId);
define_id!(FeedbackId);

/// Certificate ids are human-facing (`ECO-1A2B3C4D`) rather than raw UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CertificateId(String);

impl CertificateId {
    pub const PREFIX: &'static str = "ECO-";

    pub fn new() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(format!("{}{}", Self::PREFIX, simple[..8].to_uppercase()))
    }

    pub fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for CertificateId {
    fn default() -> Self {
        Self::new()
    }
}

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1xxx)
    NotAuthenticated = 1001,

    // Resource Not Found (2xxx)
    NotFound = 2001,

    // Business Logic (3xxx)
    NotEligible = 3001,

    // Data & Persistence (4xxx)
    StoreUnavailable = 4001,
    DataIntegrityError = 4003,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::NotAuthenticated | ErrorCode::StoreUnavailable => ErrorSeverity::Warning,

            ErrorCode::NotFound
            | ErrorCode::NotEligible
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::DataIntegrityError | ErrorCode::InfrastructureError => ErrorSeverity::Error,
        }
    }

    /// Check if the caller may retry the same request
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::StoreUnavailable | ErrorCode::InfrastructureError
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not eligible: {message}")]
    NotEligible { remaining: u32, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::NotAuthenticated(_) => ErrorCode::NotAuthenticated,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
            DomainError::NotFound(_) => ErrorCode::NotFound,
            DomainError::NotEligible { .. } => ErrorCode::NotEligible,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::NotAuthenticated(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::StoreUnavailable(msg)
            | DomainError::NotFound(msg)
            | DomainError::Validation(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::Infrastructure(msg) => msg,
            DomainError::NotEligible { message, .. } => message,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_id_format() {
        let id = CertificateId::new();
        let s = id.as_str();

        assert!(s.starts_with("ECO-"));
        assert_eq!(s.len(), 12);
        assert!(s[4..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_blank_ids() {
        assert!(UserId::from_string("").is_blank());
        assert!(UserId::from_string("   ").is_blank());
        assert!(!PledgeId::from_string("p-1").is_blank());
    }

    #[test]
    fn test_store_unavailable_is_recoverable() {
        let err = DomainError::StoreUnavailable("connection refused".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.code().code(), 4001);
        assert_eq!(err.format_with_code(), "[4001] Store unavailable: connection refused");
    }

    #[test]
    fn test_caller_errors_are_not_recoverable() {
        assert!(!DomainError::NotAuthenticated("no user".to_string()).is_recoverable());
        assert!(!DomainError::InvalidInput("no pledge".to_string()).is_recoverable());

        let not_eligible = DomainError::NotEligible {
            remaining: 3,
            message: "3 more".to_string(),
        };
        assert!(!not_eligible.is_recoverable());
        assert_eq!(not_eligible.message(), "3 more");
    }
}
