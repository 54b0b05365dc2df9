use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use pledgetrack_domain::certificate::{Certificate, CertificateRepository};
use pledgetrack_domain::pledge::PledgeStatus;
use pledgetrack_domain::shared::{CertificateId, DomainError, PledgeId, UserId};

#[derive(FromRow)]
struct CertificateRow {
    id: String,
    pledge_id: String,
    user_id: String,
    recipient_name: String,
    recipient_email: String,
    issue_date: DateTime<Utc>,
    verification_url: String,
}

impl CertificateRow {
    fn into_certificate(self) -> Certificate {
        Certificate::restore(
            CertificateId::from_string(&self.id),
            PledgeId::from_string(&self.pledge_id),
            UserId::from_string(&self.user_id),
            self.recipient_name,
            self.recipient_email,
            self.issue_date,
            self.verification_url,
        )
    }
}

pub struct SqliteCertificateRepository {
    base: SqliteRepositoryBase,
}

impl SqliteCertificateRepository {
    const SELECT_QUERY: &'static str = r#"
            SELECT
                id, pledge_id, user_id, recipient_name, recipient_email,
                issue_date, verification_url
            FROM certificates
        "#;

    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl CertificateRepository for SqliteCertificateRepository {
    async fn issue(&self, certificate: &Certificate) -> Result<Certificate, DomainError> {
        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .to_store_err("Begin certificate transaction")?;

        let updated = sqlx::query("UPDATE pledges SET status = ?1 WHERE id = ?2")
            .bind(PledgeStatus::Completed.as_str())
            .bind(certificate.pledge_id().as_str())
            .execute(&mut *tx)
            .await
            .to_store_err("Mark pledge completed")?;

        if updated.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(DomainError::NotFound(format!(
                "Pledge not found: {}",
                certificate.pledge_id()
            )));
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO certificates (
                id, pledge_id, user_id, recipient_name, recipient_email,
                issue_date, verification_url
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(pledge_id) DO NOTHING
            "#,
        )
        .bind(certificate.id().as_str())
        .bind(certificate.pledge_id().as_str())
        .bind(certificate.user_id().as_str())
        .bind(certificate.recipient_name())
        .bind(certificate.recipient_email())
        .bind(certificate.issue_date())
        .bind(certificate.verification_url())
        .execute(&mut *tx)
        .await
        .to_store_err("Insert certificate")?;

        let query = format!("{} WHERE pledge_id = ?1", Self::SELECT_QUERY);
        let row: CertificateRow = sqlx::query_as(&query)
            .bind(certificate.pledge_id().as_str())
            .fetch_one(&mut *tx)
            .await
            .to_store_err("Load issued certificate")?;

        tx.commit().await.to_store_err("Commit certificate")?;

        if inserted.rows_affected() == 1 {
            info!(
                "[certificate] issued {} for pledge {}",
                row.id, row.pledge_id
            );
        } else {
            debug!(
                "[certificate] pledge {} already had certificate {}",
                row.pledge_id, row.id
            );
        }

        Ok(row.into_certificate())
    }

    async fn find_by_id(&self, id: &CertificateId) -> Result<Option<Certificate>, DomainError> {
        let query = format!("{} WHERE id = ?1", Self::SELECT_QUERY);

        let row: Option<CertificateRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(id.as_str()),
                "Find certificate by ID",
            )
            .await?;

        Ok(row.map(|r| r.into_certificate()))
    }

    async fn find_by_pledge(
        &self,
        pledge_id: &PledgeId,
    ) -> Result<Option<Certificate>, DomainError> {
        let query = format!("{} WHERE pledge_id = ?1", Self::SELECT_QUERY);

        let row: Option<CertificateRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(pledge_id.as_str()),
                "Find certificate by pledge",
            )
            .await?;

        Ok(row.map(|r| r.into_certificate()))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.base
            .count("SELECT COUNT(*) FROM certificates", "Count certificates")
            .await
    }
}
