use log::info;
use std::sync::Arc;

use crate::application::dtos::{CertificateDto, CertificateVerificationDto};
use pledgetrack_domain::certificate::{Certificate, CertificateRepository};
use pledgetrack_domain::pledge::PledgeRepository;
use pledgetrack_domain::shared::{CertificateId, DomainError};

pub struct CertificateQueries {
    certificate_repo: Arc<dyn CertificateRepository>,
    pledge_repo: Arc<dyn PledgeRepository>,
}

impl CertificateQueries {
    pub fn new(
        certificate_repo: Arc<dyn CertificateRepository>,
        pledge_repo: Arc<dyn PledgeRepository>,
    ) -> Self {
        Self {
            certificate_repo,
            pledge_repo,
        }
    }

    pub async fn get_certificate(&self, certificate_id: &str) -> Result<CertificateDto, DomainError> {
        let certificate = self.load(certificate_id).await?;
        Ok(CertificateDto::from(&certificate))
    }

    /// Public verification lookup for `/verify/{certificateId}`.
    pub async fn verify_certificate(
        &self,
        certificate_id: &str,
    ) -> Result<CertificateVerificationDto, DomainError> {
        let certificate = self.load(certificate_id).await?;

        let pledge = self
            .pledge_repo
            .find_by_id(certificate.pledge_id())
            .await?
            .ok_or_else(|| {
                DomainError::DataIntegrity(format!(
                    "Certificate {} references missing pledge {}",
                    certificate.id(),
                    certificate.pledge_id()
                ))
            })?;

        info!("[certificate] verified {}", certificate.id());

        Ok(CertificateVerificationDto::new(&certificate, &pledge))
    }

    async fn load(&self, certificate_id: &str) -> Result<Certificate, DomainError> {
        // Ids are issued upper-case; accept whatever case the link was typed in.
        let id = CertificateId::from_string(&certificate_id.trim().to_ascii_uppercase());

        self.certificate_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Certificate not found: {}", certificate_id)))
    }
}
