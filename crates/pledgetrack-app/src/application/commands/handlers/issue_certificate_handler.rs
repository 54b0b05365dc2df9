use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::commands::certificate_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::dtos::CertificateDto;
use pledgetrack_domain::certificate::{Certificate, CertificateRepository};
use pledgetrack_domain::check_in::CheckInRepository;
use pledgetrack_domain::eligibility::EligibilityResult;
use pledgetrack_domain::pledge::PledgeRepository;
use pledgetrack_domain::shared::{DomainError, PledgeId, UserId};

/// Issues the completion certificate once the streak requirement is met.
///
/// Eligibility is recomputed from stored check-ins on every call. Issuing
/// twice returns the first certificate.
pub struct IssueCertificateCommandHandler {
    check_in_repo: Arc<dyn CheckInRepository>,
    pledge_repo: Arc<dyn PledgeRepository>,
    certificate_repo: Arc<dyn CertificateRepository>,
    clock: Arc<dyn Clock>,
}

impl IssueCertificateCommandHandler {
    pub fn new(
        check_in_repo: Arc<dyn CheckInRepository>,
        pledge_repo: Arc<dyn PledgeRepository>,
        certificate_repo: Arc<dyn CertificateRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            check_in_repo,
            pledge_repo,
            certificate_repo,
            clock,
        }
    }
}

#[async_trait]
impl CommandHandler<IssueCertificateCommand> for IssueCertificateCommandHandler {
    type Result = IssueCertificateResult;

    async fn handle(&self, cmd: IssueCertificateCommand) -> Result<Self::Result, DomainError> {
        let user_id = UserId::from_string(&cmd.user_id);
        let pledge_id = PledgeId::from_string(&cmd.pledge_id);

        if user_id.is_blank() {
            return Err(DomainError::NotAuthenticated(
                "A user id is required to issue a certificate".to_string(),
            ));
        }
        if pledge_id.is_blank() {
            return Err(DomainError::InvalidInput(
                "A pledge id is required to issue a certificate".to_string(),
            ));
        }

        let check_ins = self
            .check_in_repo
            .find_by_user_and_pledge(&user_id, &pledge_id)
            .await?;
        let eligibility = EligibilityResult::from_check_ins(&check_ins);

        if !eligibility.eligible {
            info!(
                "[certificate] user {} not eligible for pledge {} ({}/{} days)",
                user_id, pledge_id, eligibility.consecutive_days, eligibility.days_required
            );
            return Err(DomainError::NotEligible {
                remaining: eligibility.remaining_days(),
                message: eligibility.message,
            });
        }

        if let Some(existing) = self.certificate_repo.find_by_pledge(&pledge_id).await? {
            if existing.user_id() != &user_id {
                warn!(
                    "[certificate] user {} asked for certificate {} held by another user",
                    user_id,
                    existing.id()
                );
                return Err(DomainError::InvalidInput(format!(
                    "Pledge {} does not belong to this user",
                    pledge_id
                )));
            }

            info!(
                "[certificate] pledge {} already has certificate {}",
                pledge_id,
                existing.id()
            );
            return Ok(IssueCertificateResult {
                certificate: CertificateDto::from(&existing),
                already_issued: true,
            });
        }

        let pledge = self
            .pledge_repo
            .find_by_id(&pledge_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Pledge not found: {}", pledge_id)))?;

        if !pledge.is_owned_by(&user_id) {
            return Err(DomainError::InvalidInput(format!(
                "Pledge {} does not belong to this user",
                pledge_id
            )));
        }

        let candidate = Certificate::issue(&pledge, self.clock.now());
        let stored = self.certificate_repo.issue(&candidate).await?;
        // A concurrent request may have won the insert.
        let already_issued = stored.id() != candidate.id();

        info!(
            "[certificate] issued {} to {} for pledge {}",
            stored.id(),
            stored.recipient_name(),
            pledge_id
        );

        Ok(IssueCertificateResult {
            certificate: CertificateDto::from(&stored),
            already_issued,
        })
    }
}
