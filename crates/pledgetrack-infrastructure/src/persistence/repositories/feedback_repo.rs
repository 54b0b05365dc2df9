use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use pledgetrack_domain::feedback::{Feedback, FeedbackRepository};
use pledgetrack_domain::shared::{DomainError, FeedbackId, UserId};

#[derive(FromRow)]
struct FeedbackRow {
    id: String,
    rating: i64,
    comment: String,
    user_id: String,
    user_email: String,
    user_name: String,
    created_at: DateTime<Utc>,
}

impl FeedbackRow {
    fn try_into_feedback(self) -> Result<Feedback, DomainError> {
        let rating = u8::try_from(self.rating).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Invalid rating {} for feedback {}",
                self.rating, self.id
            ))
        })?;

        Ok(Feedback::restore(
            FeedbackId::from_string(&self.id),
            rating,
            self.comment,
            UserId::from_string(&self.user_id),
            self.user_email,
            self.user_name,
            self.created_at,
        ))
    }
}

pub struct SqliteFeedbackRepository {
    base: SqliteRepositoryBase,
}

impl SqliteFeedbackRepository {
    const SELECT_QUERY: &'static str = r#"
            SELECT
                id, rating, comment, user_id, user_email, user_name, created_at
            FROM feedback
        "#;

    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl FeedbackRepository for SqliteFeedbackRepository {
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO feedback (
                id, rating, comment, user_id, user_email, user_name, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(feedback.id().as_str())
                    .bind(i64::from(feedback.rating()))
                    .bind(feedback.comment())
                    .bind(feedback.user_id().as_str())
                    .bind(feedback.user_email())
                    .bind(feedback.user_name())
                    .bind(feedback.created_at()),
                "Save feedback",
            )
            .await?;

        Ok(())
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Feedback>, DomainError> {
        // Ties on created_at fall back to id so pages never overlap.
        let query = format!(
            "{} ORDER BY created_at DESC, id DESC LIMIT ?1 OFFSET ?2",
            Self::SELECT_QUERY
        );

        let rows: Vec<FeedbackRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(i64::try_from(limit).unwrap_or(i64::MAX))
                    .bind(i64::try_from(offset).unwrap_or(i64::MAX)),
                "Find feedback page",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_feedback()).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.base
            .count("SELECT COUNT(*) FROM feedback", "Count feedback")
            .await
    }

    async fn average_rating(&self) -> Result<Option<f64>, DomainError> {
        sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(rating) FROM feedback")
            .fetch_one(self.base.pool())
            .await
            .to_store_err("Average feedback rating")
    }

    async fn delete(&self, id: &FeedbackId) -> Result<bool, DomainError> {
        let result = self
            .base
            .execute(
                sqlx::query("DELETE FROM feedback WHERE id = ?1").bind(id.as_str()),
                "Delete feedback",
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
