use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::CheckInDto;

/// Record today's check-in for a pledge. Repeating it on the same UTC day
/// returns the stored check-in unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCheckInCommand {
    pub user_id: String,
    pub pledge_id: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Command for RecordCheckInCommand {}

pub type RecordCheckInResult = CheckInDto;
