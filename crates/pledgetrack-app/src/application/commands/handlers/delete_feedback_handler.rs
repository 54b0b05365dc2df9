use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::feedback_commands::*;
use pledgetrack_domain::feedback::FeedbackRepository;
use pledgetrack_domain::shared::{DomainError, FeedbackId};

pub struct DeleteFeedbackCommandHandler {
    feedback_repo: Arc<dyn FeedbackRepository>,
}

impl DeleteFeedbackCommandHandler {
    pub fn new(feedback_repo: Arc<dyn FeedbackRepository>) -> Self {
        Self { feedback_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteFeedbackCommand> for DeleteFeedbackCommandHandler {
    type Result = DeleteFeedbackResult;

    async fn handle(&self, cmd: DeleteFeedbackCommand) -> Result<Self::Result, DomainError> {
        let feedback_id = FeedbackId::from_string(cmd.feedback_id.trim());
        if feedback_id.is_blank() {
            return Err(DomainError::InvalidInput(
                "A feedback id is required to delete feedback".to_string(),
            ));
        }

        if !self.feedback_repo.delete(&feedback_id).await? {
            return Err(DomainError::NotFound(format!(
                "Feedback not found: {}",
                feedback_id
            )));
        }

        info!("[feedback] deleted {}", feedback_id);
        Ok(())
    }
}
