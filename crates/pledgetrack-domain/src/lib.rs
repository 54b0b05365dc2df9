// Domain layer - Pure business logic
// No dependencies on infrastructure or application layers

pub mod certificate;
pub mod check_in;
pub mod eligibility;
pub mod feedback;
pub mod pledge;
pub mod shared;

// Re-exports for convenience
pub use shared::{CertificateId, DomainError, FeedbackId, PledgeId, UserId};
