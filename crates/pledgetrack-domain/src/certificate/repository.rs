use async_trait::async_trait;

use super::Certificate;
use crate::shared::{CertificateId, DomainError, PledgeId};

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    /// Persist `certificate` and mark its pledge completed in one step.
    ///
    /// If the pledge already has a certificate, nothing is written and the
    /// existing certificate is returned instead.
    async fn issue(&self, certificate: &Certificate) -> Result<Certificate, DomainError>;

    async fn find_by_id(&self, id: &CertificateId) -> Result<Option<Certificate>, DomainError>;

    async fn find_by_pledge(&self, pledge_id: &PledgeId)
        -> Result<Option<Certificate>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
