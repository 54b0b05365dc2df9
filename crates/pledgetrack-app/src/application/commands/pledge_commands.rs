use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::PledgeDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePledgeCommand {
    pub user_id: String,
    pub name: String,
    pub roll_no: String,
    pub mode_of_transport: String,
    /// `YYYY-MM-DD`; defaults to today.
    #[serde(default)]
    pub pledge_date: Option<String>,
    pub user_email: String,
}

impl Command for CreatePledgeCommand {}

pub type CreatePledgeResult = PledgeDto;
