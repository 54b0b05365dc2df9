use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::dtos::{StatsDto, DATE_FORMAT};
use pledgetrack_domain::certificate::CertificateRepository;
use pledgetrack_domain::feedback::FeedbackRepository;
use pledgetrack_domain::pledge::PledgeRepository;
use pledgetrack_domain::shared::DomainError;

/// Aggregate counters, computed on demand from the stores.
pub struct StatsQueries {
    pledge_repo: Arc<dyn PledgeRepository>,
    certificate_repo: Arc<dyn CertificateRepository>,
    feedback_repo: Arc<dyn FeedbackRepository>,
    clock: Arc<dyn Clock>,
}

impl StatsQueries {
    pub fn new(
        pledge_repo: Arc<dyn PledgeRepository>,
        certificate_repo: Arc<dyn CertificateRepository>,
        feedback_repo: Arc<dyn FeedbackRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            pledge_repo,
            certificate_repo,
            feedback_repo,
            clock,
        }
    }

    pub async fn get_stats(&self) -> Result<StatsDto, DomainError> {
        let pledges = self.pledge_repo.find_all().await?;
        let total_certificates = self.certificate_repo.count().await?;
        let total_feedback = self.feedback_repo.count().await?;
        let average_rating = self.feedback_repo.average_rating().await?.unwrap_or(0.0);

        let mut pledges_by_transport: BTreeMap<String, u64> = BTreeMap::new();
        let mut pledges_by_date: BTreeMap<String, u64> = BTreeMap::new();

        for pledge in &pledges {
            *pledges_by_transport
                .entry(pledge.mode_of_transport().to_string())
                .or_default() += 1;
            *pledges_by_date
                .entry(pledge.created_at().format(DATE_FORMAT).to_string())
                .or_default() += 1;
        }

        debug!(
            "[stats] {} pledges, {} certificates",
            pledges.len(),
            total_certificates
        );

        Ok(StatsDto {
            total_pledges: pledges.len() as u64,
            total_certificates,
            total_feedback,
            average_rating,
            pledges_by_transport,
            pledges_by_date,
            last_updated: self.clock.now().to_rfc3339(),
        })
    }
}
