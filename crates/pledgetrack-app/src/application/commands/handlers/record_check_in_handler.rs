use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::commands::check_in_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::dtos::CheckInDto;
use pledgetrack_domain::check_in::{CheckInEvent, CheckInRepository, StoredCheckIn};
use pledgetrack_domain::shared::{DomainError, PledgeId, UserId};

/// Records at most one check-in per user, pledge and UTC day.
pub struct RecordCheckInCommandHandler {
    check_in_repo: Arc<dyn CheckInRepository>,
    clock: Arc<dyn Clock>,
}

impl RecordCheckInCommandHandler {
    pub fn new(check_in_repo: Arc<dyn CheckInRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            check_in_repo,
            clock,
        }
    }
}

#[async_trait]
impl CommandHandler<RecordCheckInCommand> for RecordCheckInCommandHandler {
    type Result = RecordCheckInResult;

    async fn handle(&self, cmd: RecordCheckInCommand) -> Result<Self::Result, DomainError> {
        let event = CheckInEvent::new(
            UserId::from_string(&cmd.user_id),
            PledgeId::from_string(&cmd.pledge_id),
            self.clock.now(),
            cmd.tasks,
            cmd.notes.unwrap_or_default(),
        )?;

        let StoredCheckIn {
            event: stored,
            inserted,
        } = self.check_in_repo.insert_if_absent(&event).await?;

        if inserted {
            info!(
                "[check-in] recorded {} ({} tasks)",
                stored.id(),
                stored.tasks().len()
            );
        } else {
            info!(
                "[check-in] {} already recorded today, returning stored check-in",
                stored.id()
            );
        }

        Ok(CheckInDto::from(&stored))
    }
}
