use async_trait::async_trait;
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::pledge_commands::*;
use crate::application::dtos::PledgeDto;
use pledgetrack_domain::check_in::CHECK_IN_DATE_FORMAT;
use pledgetrack_domain::pledge::{Pledge, PledgeRepository};
use pledgetrack_domain::shared::{DomainError, UserId};

pub struct CreatePledgeCommandHandler {
    pledge_repo: Arc<dyn PledgeRepository>,
    clock: Arc<dyn Clock>,
}

impl CreatePledgeCommandHandler {
    pub fn new(pledge_repo: Arc<dyn PledgeRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { pledge_repo, clock }
    }

    fn pledge_date(&self, raw: Option<&str>) -> Result<NaiveDate, DomainError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(self.clock.today()),
            Some(s) => NaiveDate::parse_from_str(s, CHECK_IN_DATE_FORMAT).map_err(|_| {
                DomainError::InvalidInput(format!("Pledge date must be YYYY-MM-DD, got {}", s))
            }),
        }
    }
}

#[async_trait]
impl CommandHandler<CreatePledgeCommand> for CreatePledgeCommandHandler {
    type Result = CreatePledgeResult;

    async fn handle(&self, cmd: CreatePledgeCommand) -> Result<Self::Result, DomainError> {
        let pledge_date = self.pledge_date(cmd.pledge_date.as_deref())?;

        let pledge = Pledge::new(
            cmd.name,
            cmd.roll_no,
            cmd.mode_of_transport,
            pledge_date,
            UserId::from_string(&cmd.user_id),
            cmd.user_email,
        )?;

        self.pledge_repo.save(&pledge).await?;

        info!(
            "[pledge] created {} for user {} ({})",
            pledge.id(),
            pledge.user_id(),
            pledge.mode_of_transport()
        );

        Ok(PledgeDto::from(&pledge))
    }
}
