use serde::{Deserialize, Serialize};

use super::DATE_FORMAT;
use pledgetrack_domain::check_in::CheckInEvent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInDto {
    pub id: String,
    pub user_id: String,
    pub pledge_id: String,
    pub check_in_date: String, // YYYY-MM-DD
    pub tasks: Vec<String>,
    pub notes: String,
    pub created_at: String,
}

impl From<&CheckInEvent> for CheckInDto {
    fn from(event: &CheckInEvent) -> Self {
        Self {
            id: event.id().to_string(),
            user_id: event.user_id().as_str().to_string(),
            pledge_id: event.pledge_id().as_str().to_string(),
            check_in_date: event.check_in_date().format(DATE_FORMAT).to_string(),
            tasks: event.tasks().to_vec(),
            notes: event.notes().to_string(),
            created_at: event.created_at().to_rfc3339(),
        }
    }
}
