use std::sync::Arc;

use crate::application::dtos::{FeedbackDto, FeedbackPageDto};
use pledgetrack_domain::feedback::FeedbackRepository;
use pledgetrack_domain::shared::DomainError;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct FeedbackQueries {
    feedback_repo: Arc<dyn FeedbackRepository>,
}

impl FeedbackQueries {
    pub fn new(feedback_repo: Arc<dyn FeedbackRepository>) -> Self {
        Self { feedback_repo }
    }

    /// Pages start at 1. Missing or zero values fall back to the first page
    /// and [`DEFAULT_PAGE_SIZE`]; larger sizes are capped at [`MAX_PAGE_SIZE`].
    pub async fn list_feedback(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<FeedbackPageDto, DomainError> {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        let skip = u64::from(page - 1) * u64::from(limit);

        let feedback = self
            .feedback_repo
            .find_page(skip, u64::from(limit))
            .await?;
        let total = self.feedback_repo.count().await?;
        let has_more = total > skip + u64::from(limit);

        Ok(FeedbackPageDto {
            feedback: feedback.iter().map(FeedbackDto::from).collect(),
            has_more,
            next_page: has_more.then(|| page.saturating_add(1)),
            total,
        })
    }
}
