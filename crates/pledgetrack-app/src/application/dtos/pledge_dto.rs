use serde::{Deserialize, Serialize};

use super::DATE_FORMAT;
use pledgetrack_domain::pledge::Pledge;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PledgeDto {
    pub id: String,
    pub name: String,
    pub roll_no: String,
    pub mode_of_transport: String,
    pub pledge_date: String, // YYYY-MM-DD
    pub user_id: String,
    pub user_email: String,
    pub status: String, // active | completed | expired
    pub created_at: String,
}

impl From<&Pledge> for PledgeDto {
    fn from(pledge: &Pledge) -> Self {
        Self {
            id: pledge.id().as_str().to_string(),
            name: pledge.name().to_string(),
            roll_no: pledge.roll_no().to_string(),
            mode_of_transport: pledge.mode_of_transport().to_string(),
            pledge_date: pledge.pledge_date().format(DATE_FORMAT).to_string(),
            user_id: pledge.user_id().as_str().to_string(),
            user_email: pledge.user_email().to_string(),
            status: pledge.status().as_str().to_string(),
            created_at: pledge.created_at().to_rfc3339(),
        }
    }
}
