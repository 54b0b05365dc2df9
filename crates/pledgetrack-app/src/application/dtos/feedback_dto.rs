use serde::{Deserialize, Serialize};

use pledgetrack_domain::feedback::Feedback;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDto {
    pub id: String,
    pub rating: u8,
    pub comment: String,
    pub user_id: String,
    pub user_email: String,
    pub user_name: String,
    pub created_at: String,
}

impl From<&Feedback> for FeedbackDto {
    fn from(feedback: &Feedback) -> Self {
        Self {
            id: feedback.id().as_str().to_string(),
            rating: feedback.rating(),
            comment: feedback.comment().to_string(),
            user_id: feedback.user_id().as_str().to_string(),
            user_email: feedback.user_email().to_string(),
            user_name: feedback.user_name().to_string(),
            created_at: feedback.created_at().to_rfc3339(),
        }
    }
}

/// One page of feedback, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPageDto {
    pub feedback: Vec<FeedbackDto>,
    pub has_more: bool,
    pub next_page: Option<u32>,
    pub total: u64,
}
