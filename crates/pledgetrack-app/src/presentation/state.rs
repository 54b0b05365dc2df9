use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::commands::handlers::*;
use crate::application::queries::{
    CertificateQueries, EligibilityQueries, FeedbackQueries, PledgeQueries, StatsQueries,
};
use pledgetrack_domain::certificate::CertificateRepository;
use pledgetrack_domain::check_in::CheckInRepository;
use pledgetrack_domain::feedback::FeedbackRepository;
use pledgetrack_domain::pledge::PledgeRepository;
use pledgetrack_infrastructure::config::AppConfig;

/// Command handlers container
pub struct CommandHandlers {
    pub record_check_in: Arc<RecordCheckInCommandHandler>,
    pub create_pledge: Arc<CreatePledgeCommandHandler>,
    pub issue_certificate: Arc<IssueCertificateCommandHandler>,
    pub submit_feedback: Arc<SubmitFeedbackCommandHandler>,
    pub delete_feedback: Arc<DeleteFeedbackCommandHandler>,
}

pub struct Runtime {
    pub pool: Arc<SqlitePool>,
    pub config: AppConfig,
    pub clock: Arc<dyn Clock>,
}

pub struct Repositories {
    pub check_in: Arc<dyn CheckInRepository>,
    pub pledge: Arc<dyn PledgeRepository>,
    pub certificate: Arc<dyn CertificateRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
}

pub struct Queries {
    pub eligibility: Arc<EligibilityQueries>,
    pub pledge: Arc<PledgeQueries>,
    pub certificate: Arc<CertificateQueries>,
    pub feedback: Arc<FeedbackQueries>,
    pub stats: Arc<StatsQueries>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

impl AppState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        crate::presentation::bootstrap::build_app_state(config).await
    }
}
