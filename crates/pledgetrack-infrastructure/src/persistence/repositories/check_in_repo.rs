use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use pledgetrack_domain::check_in::{
    CheckInEvent, CheckInRepository, StoredCheckIn, CHECK_IN_DATE_FORMAT,
};
use pledgetrack_domain::shared::{DomainError, PledgeId, UserId};

#[derive(FromRow)]
struct CheckInRow {
    id: String,
    user_id: String,
    pledge_id: String,
    check_in_date: String,
    tasks: String,
    notes: String,
    created_at: DateTime<Utc>,
}

impl CheckInRow {
    fn try_into_event(self) -> Result<CheckInEvent, DomainError> {
        let date = NaiveDate::parse_from_str(&self.check_in_date, CHECK_IN_DATE_FORMAT).map_err(
            |e| {
                DomainError::DataIntegrity(format!(
                    "Invalid check_in_date: {} ({})",
                    self.check_in_date, e
                ))
            },
        )?;

        let tasks: Vec<String> = serde_json::from_str(&self.tasks).map_err(|e| {
            DomainError::DataIntegrity(format!("Invalid tasks for check-in {}: {}", self.id, e))
        })?;

        Ok(CheckInEvent::restore(
            self.id,
            UserId::from_string(&self.user_id),
            PledgeId::from_string(&self.pledge_id),
            date,
            tasks,
            self.notes,
            self.created_at,
        ))
    }
}

pub struct SqliteCheckInRepository {
    base: SqliteRepositoryBase,
}

impl SqliteCheckInRepository {
    // DATE() keeps rows written with a time component on their calendar day.
    const SELECT_QUERY: &'static str = r#"
            SELECT
                id,
                user_id,
                pledge_id,
                DATE(check_in_date) AS check_in_date,
                tasks,
                notes,
                created_at
            FROM daily_check_ins
        "#;

    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl CheckInRepository for SqliteCheckInRepository {
    async fn find_by_user_and_pledge(
        &self,
        user_id: &UserId,
        pledge_id: &PledgeId,
    ) -> Result<Vec<CheckInEvent>, DomainError> {
        let query = format!(
            "{} WHERE user_id = ?1 AND pledge_id = ?2 ORDER BY check_in_date DESC",
            Self::SELECT_QUERY
        );

        let rows: Vec<CheckInRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(pledge_id.as_str()),
                "Find check-ins by user and pledge",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_event()).collect()
    }

    async fn insert_if_absent(&self, event: &CheckInEvent) -> Result<StoredCheckIn, DomainError> {
        let insert = r#"
            INSERT INTO daily_check_ins (
                id,
                user_id,
                pledge_id,
                check_in_date,
                tasks,
                notes,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT DO NOTHING
        "#;

        let tasks = serde_json::to_string(event.tasks())
            .map_err(|e| DomainError::Infrastructure(format!("Serialize check-in tasks: {}", e)))?;
        let date = event.check_in_date().format(CHECK_IN_DATE_FORMAT).to_string();

        let result = self
            .base
            .execute(
                sqlx::query(insert)
                    .bind(event.id())
                    .bind(event.user_id().as_str())
                    .bind(event.pledge_id().as_str())
                    .bind(date.as_str())
                    .bind(tasks.as_str())
                    .bind(event.notes())
                    .bind(event.created_at()),
                "Insert check-in",
            )
            .await?;

        let inserted = result.rows_affected() == 1;
        debug!(
            "[check-in] insert_if_absent id={} inserted={}",
            event.id(),
            inserted
        );

        // Read back whichever row won: ours, or the one already stored for this day.
        let query = format!(
            "{} WHERE user_id = ?1 AND pledge_id = ?2 AND DATE(check_in_date) = ?3 LIMIT 1",
            Self::SELECT_QUERY
        );

        let row: Option<CheckInRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query)
                    .bind(event.user_id().as_str())
                    .bind(event.pledge_id().as_str())
                    .bind(date.as_str()),
                "Load stored check-in",
            )
            .await?;

        let stored = row
            .ok_or_else(|| {
                DomainError::DataIntegrity(format!(
                    "Check-in {} missing after insert",
                    event.id()
                ))
            })?
            .try_into_event()?;

        Ok(StoredCheckIn {
            event: stored,
            inserted,
        })
    }
}
