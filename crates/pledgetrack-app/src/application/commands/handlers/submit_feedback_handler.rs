use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::feedback_commands::*;
use crate::application::dtos::FeedbackDto;
use pledgetrack_domain::feedback::{Feedback, FeedbackRepository};
use pledgetrack_domain::shared::{DomainError, UserId};

pub struct SubmitFeedbackCommandHandler {
    feedback_repo: Arc<dyn FeedbackRepository>,
    clock: Arc<dyn Clock>,
}

impl SubmitFeedbackCommandHandler {
    pub fn new(feedback_repo: Arc<dyn FeedbackRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            feedback_repo,
            clock,
        }
    }
}

#[async_trait]
impl CommandHandler<SubmitFeedbackCommand> for SubmitFeedbackCommandHandler {
    type Result = SubmitFeedbackResult;

    async fn handle(&self, cmd: SubmitFeedbackCommand) -> Result<Self::Result, DomainError> {
        let feedback = Feedback::new(
            cmd.rating,
            cmd.comment,
            UserId::from_string(&cmd.user_id),
            cmd.user_email,
            cmd.user_name,
            self.clock.now(),
        )?;

        self.feedback_repo.save(&feedback).await?;

        info!(
            "[feedback] {} rated {} by user {}",
            feedback.id(),
            feedback.rating(),
            feedback.user_id()
        );

        Ok(FeedbackDto::from(&feedback))
    }
}
