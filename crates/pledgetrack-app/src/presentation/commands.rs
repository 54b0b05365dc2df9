//! Transport-facing operations.
//!
//! One function per operation; each maps domain failures to
//! [`CommandError`] so an HTTP or IPC layer can return it as-is.

use crate::application::commands::certificate_commands::*;
use crate::application::commands::check_in_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::feedback_commands::*;
use crate::application::commands::pledge_commands::*;
use crate::application::dtos::{
    CertificateDto, CertificateVerificationDto, CheckInDto, DayStatusDto, EligibilityDto,
    FeedbackDto, FeedbackPageDto, PledgeDto, StatsDto,
};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

pub async fn record_check_in(
    state: &AppState,
    command: RecordCheckInCommand,
) -> Result<CheckInDto, CommandError> {
    log::debug!(
        "[check-in] record_check_in user={} pledge={}",
        command.user_id,
        command.pledge_id
    );

    Ok(state
        .command_handlers
        .record_check_in
        .handle(command)
        .await?)
}

pub async fn check_eligibility(
    state: &AppState,
    user_id: &str,
    pledge_id: &str,
) -> Result<EligibilityDto, CommandError> {
    Ok(state
        .queries
        .eligibility
        .check_eligibility(user_id, pledge_id)
        .await?)
}

pub async fn get_weekly_progress(
    state: &AppState,
    user_id: &str,
    pledge_id: &str,
) -> Result<Vec<DayStatusDto>, CommandError> {
    Ok(state
        .queries
        .eligibility
        .get_weekly_progress(user_id, pledge_id)
        .await?)
}

pub async fn create_pledge(
    state: &AppState,
    command: CreatePledgeCommand,
) -> Result<PledgeDto, CommandError> {
    Ok(state.command_handlers.create_pledge.handle(command).await?)
}

pub async fn get_pledge(state: &AppState, pledge_id: &str) -> Result<PledgeDto, CommandError> {
    Ok(state.queries.pledge.get_pledge(pledge_id).await?)
}

pub async fn list_pledges(state: &AppState) -> Result<Vec<PledgeDto>, CommandError> {
    Ok(state.queries.pledge.list_pledges().await?)
}

pub async fn list_pledges_for_user(
    state: &AppState,
    user_id: &str,
) -> Result<Vec<PledgeDto>, CommandError> {
    if user_id.trim().is_empty() {
        return Err(CommandError::not_authenticated(
            "A user id is required to list your pledges",
        ));
    }

    Ok(state.queries.pledge.list_pledges_for_user(user_id).await?)
}

pub async fn count_pledges(state: &AppState) -> Result<u64, CommandError> {
    Ok(state.queries.pledge.count_pledges().await?)
}

pub async fn issue_certificate(
    state: &AppState,
    command: IssueCertificateCommand,
) -> Result<IssueCertificateResult, CommandError> {
    Ok(state
        .command_handlers
        .issue_certificate
        .handle(command)
        .await?)
}

pub async fn get_certificate(
    state: &AppState,
    certificate_id: &str,
) -> Result<CertificateDto, CommandError> {
    Ok(state
        .queries
        .certificate
        .get_certificate(certificate_id)
        .await?)
}

pub async fn verify_certificate(
    state: &AppState,
    certificate_id: &str,
) -> Result<CertificateVerificationDto, CommandError> {
    Ok(state
        .queries
        .certificate
        .verify_certificate(certificate_id)
        .await?)
}

pub async fn get_stats(state: &AppState) -> Result<StatsDto, CommandError> {
    Ok(state.queries.stats.get_stats().await?)
}

pub async fn submit_feedback(
    state: &AppState,
    command: SubmitFeedbackCommand,
) -> Result<FeedbackDto, CommandError> {
    Ok(state
        .command_handlers
        .submit_feedback
        .handle(command)
        .await?)
}

pub async fn list_feedback(
    state: &AppState,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<FeedbackPageDto, CommandError> {
    Ok(state.queries.feedback.list_feedback(page, limit).await?)
}

pub async fn delete_feedback(
    state: &AppState,
    command: DeleteFeedbackCommand,
) -> Result<(), CommandError> {
    log::debug!("[feedback] delete_feedback id={}", command.feedback_id);

    Ok(state
        .command_handlers
        .delete_feedback
        .handle(command)
        .await?)
}
