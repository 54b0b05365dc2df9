use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::CertificateDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCertificateCommand {
    pub user_id: String,
    pub pledge_id: String,
}

impl Command for IssueCertificateCommand {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCertificateResult {
    pub certificate: CertificateDto,
    /// True when the pledge already had a certificate and nothing was written.
    pub already_issued: bool,
}
