use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use pledgetrack_domain::check_in::CHECK_IN_DATE_FORMAT;
use pledgetrack_domain::pledge::{Pledge, PledgeRepository, PledgeStatus};
use pledgetrack_domain::shared::{DomainError, PledgeId, UserId};

#[derive(FromRow)]
struct PledgeRow {
    id: String,
    name: String,
    roll_no: String,
    mode_of_transport: String,
    pledge_date: String,
    user_id: String,
    user_email: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl PledgeRow {
    fn try_into_pledge(self) -> Result<Pledge, DomainError> {
        let pledge_date = NaiveDate::parse_from_str(&self.pledge_date, CHECK_IN_DATE_FORMAT)
            .map_err(|e| {
                DomainError::DataIntegrity(format!(
                    "Invalid pledge_date: {} ({})",
                    self.pledge_date, e
                ))
            })?;
        let status: PledgeStatus = self.status.parse()?;

        Ok(Pledge::restore(
            PledgeId::from_string(&self.id),
            self.name,
            self.roll_no,
            self.mode_of_transport,
            pledge_date,
            UserId::from_string(&self.user_id),
            self.user_email,
            status,
            self.created_at,
        ))
    }
}

pub struct SqlitePledgeRepository {
    base: SqliteRepositoryBase,
}

impl SqlitePledgeRepository {
    const SELECT_QUERY: &'static str = r#"
            SELECT
                id, name, roll_no, mode_of_transport, pledge_date,
                user_id, user_email, status, created_at
            FROM pledges
        "#;

    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl PledgeRepository for SqlitePledgeRepository {
    async fn save(&self, pledge: &Pledge) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO pledges (
                id, name, roll_no, mode_of_transport, pledge_date,
                user_id, user_email, status, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(id) DO UPDATE SET
                name = ?2,
                roll_no = ?3,
                mode_of_transport = ?4,
                pledge_date = ?5,
                user_email = ?7,
                status = ?8
        "#;

        let pledge_date = pledge.pledge_date().format(CHECK_IN_DATE_FORMAT).to_string();

        self.base
            .execute(
                sqlx::query(query)
                    .bind(pledge.id().as_str())
                    .bind(pledge.name())
                    .bind(pledge.roll_no())
                    .bind(pledge.mode_of_transport())
                    .bind(pledge_date.as_str())
                    .bind(pledge.user_id().as_str())
                    .bind(pledge.user_email())
                    .bind(pledge.status().as_str())
                    .bind(pledge.created_at()),
                "Save pledge",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PledgeId) -> Result<Option<Pledge>, DomainError> {
        let query = format!("{} WHERE id = ?1", Self::SELECT_QUERY);

        let row: Option<PledgeRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(id.as_str()),
                "Find pledge by ID",
            )
            .await?;

        row.map(|r| r.try_into_pledge()).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Pledge>, DomainError> {
        let query = format!("{} ORDER BY created_at DESC", Self::SELECT_QUERY);

        let rows: Vec<PledgeRow> = self
            .base
            .fetch_all(sqlx::query_as(&query), "Find all pledges")
            .await?;

        rows.into_iter().map(|r| r.try_into_pledge()).collect()
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Pledge>, DomainError> {
        let query = format!(
            "{} WHERE user_id = ?1 ORDER BY created_at DESC",
            Self::SELECT_QUERY
        );

        let rows: Vec<PledgeRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(user_id.as_str()),
                "Find pledges by user",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_pledge()).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.base
            .count("SELECT COUNT(*) FROM pledges", "Count pledges")
            .await
    }
}
