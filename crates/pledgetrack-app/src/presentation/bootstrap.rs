use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::clock::{Clock, SystemClock};
use crate::application::commands::handlers::*;
use crate::application::queries::{
    CertificateQueries, EligibilityQueries, FeedbackQueries, PledgeQueries, StatsQueries,
};
use crate::presentation::state::{AppState, CommandHandlers, Queries, Repositories, Runtime};
use pledgetrack_domain::certificate::CertificateRepository;
use pledgetrack_domain::check_in::CheckInRepository;
use pledgetrack_domain::feedback::FeedbackRepository;
use pledgetrack_domain::pledge::PledgeRepository;
use pledgetrack_infrastructure::config::AppConfig;
use pledgetrack_infrastructure::logging;
use pledgetrack_infrastructure::persistence::{
    repositories::{
        SqliteCertificateRepository, SqliteCheckInRepository, SqliteFeedbackRepository,
        SqlitePledgeRepository,
    },
    Database,
};

/// Load configuration, start logging, then open the store.
pub async fn init(config_path: Option<&Path>) -> anyhow::Result<AppState> {
    let config = AppConfig::load(config_path)?;
    logging::init_logger(&config.log_dir, config.log_level)?;

    build_app_state(config).await
}

pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let startup_started_at = Instant::now();

    info!(
        database_path = %config.database_path.display(),
        "Connecting to database..."
    );
    let started_at = Instant::now();
    let database = Database::from_config(&config).await?;
    info!(
        "✓ Database connection established ({}ms)",
        started_at.elapsed().as_millis()
    );

    info!("Running migrations...");
    let started_at = Instant::now();
    database.run_migrations().await?;
    info!(
        "✓ Migrations completed ({}ms)",
        started_at.elapsed().as_millis()
    );

    let state = assemble(database, config, Arc::new(SystemClock));

    info!(
        "✓ Application state ready ({}ms total)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(state)
}

/// Wire repositories, queries and handlers over an open, migrated database.
pub fn assemble(database: Database, config: AppConfig, clock: Arc<dyn Clock>) -> AppState {
    let pool = Arc::new(database.pool().clone());

    let check_in_repo =
        Arc::new(SqliteCheckInRepository::new(pool.clone())) as Arc<dyn CheckInRepository>;
    let pledge_repo =
        Arc::new(SqlitePledgeRepository::new(pool.clone())) as Arc<dyn PledgeRepository>;
    let certificate_repo = Arc::new(SqliteCertificateRepository::new(pool.clone()))
        as Arc<dyn CertificateRepository>;
    let feedback_repo =
        Arc::new(SqliteFeedbackRepository::new(pool.clone())) as Arc<dyn FeedbackRepository>;

    let queries = Queries {
        eligibility: Arc::new(EligibilityQueries::new(check_in_repo.clone(), clock.clone())),
        pledge: Arc::new(PledgeQueries::new(pledge_repo.clone())),
        certificate: Arc::new(CertificateQueries::new(
            certificate_repo.clone(),
            pledge_repo.clone(),
        )),
        feedback: Arc::new(FeedbackQueries::new(feedback_repo.clone())),
        stats: Arc::new(StatsQueries::new(
            pledge_repo.clone(),
            certificate_repo.clone(),
            feedback_repo.clone(),
            clock.clone(),
        )),
    };

    let command_handlers = CommandHandlers {
        record_check_in: Arc::new(RecordCheckInCommandHandler::new(
            check_in_repo.clone(),
            clock.clone(),
        )),
        create_pledge: Arc::new(CreatePledgeCommandHandler::new(
            pledge_repo.clone(),
            clock.clone(),
        )),
        issue_certificate: Arc::new(IssueCertificateCommandHandler::new(
            check_in_repo.clone(),
            pledge_repo.clone(),
            certificate_repo.clone(),
            clock.clone(),
        )),
        submit_feedback: Arc::new(SubmitFeedbackCommandHandler::new(
            feedback_repo.clone(),
            clock.clone(),
        )),
        delete_feedback: Arc::new(DeleteFeedbackCommandHandler::new(feedback_repo.clone())),
    };

    AppState {
        runtime: Runtime {
            pool,
            config,
            clock,
        },
        repositories: Repositories {
            check_in: check_in_repo,
            pledge: pledge_repo,
            certificate: certificate_repo,
            feedback: feedback_repo,
        },
        queries,
        command_handlers,
    }
}
