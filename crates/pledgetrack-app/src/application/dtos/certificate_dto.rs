use serde::{Deserialize, Serialize};

use pledgetrack_domain::certificate::Certificate;
use pledgetrack_domain::pledge::Pledge;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDto {
    pub certificate_id: String,
    pub pledge_id: String,
    pub user_id: String,
    pub recipient_name: String,
    pub recipient_email: String,
    pub issue_date: String,
    pub verification_url: String,
}

impl From<&Certificate> for CertificateDto {
    fn from(certificate: &Certificate) -> Self {
        Self {
            certificate_id: certificate.id().as_str().to_string(),
            pledge_id: certificate.pledge_id().as_str().to_string(),
            user_id: certificate.user_id().as_str().to_string(),
            recipient_name: certificate.recipient_name().to_string(),
            recipient_email: certificate.recipient_email().to_string(),
            issue_date: certificate.issue_date().to_rfc3339(),
            verification_url: certificate.verification_url().to_string(),
        }
    }
}

/// Public view of a certificate: no e-mail, no user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateVerificationDto {
    pub certificate_id: String,
    pub recipient_name: String,
    pub issue_date: String,
    pub mode_of_transport: String,
}

impl CertificateVerificationDto {
    pub fn new(certificate: &Certificate, pledge: &Pledge) -> Self {
        Self {
            certificate_id: certificate.id().as_str().to_string(),
            recipient_name: certificate.recipient_name().to_string(),
            issue_date: certificate.issue_date().to_rfc3339(),
            mode_of_transport: pledge.mode_of_transport().to_string(),
        }
    }
}
