use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::FeedbackDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackCommand {
    pub user_id: String,
    pub user_email: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
}

impl Command for SubmitFeedbackCommand {}

pub type SubmitFeedbackResult = FeedbackDto;

/// Admin-only in practice; the caller checks the role before dispatching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFeedbackCommand {
    pub feedback_id: String,
}

impl Command for DeleteFeedbackCommand {}

pub type DeleteFeedbackResult = ();
