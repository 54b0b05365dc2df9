#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sqlx::SqlitePool;

use pledgetrack_domain::pledge::{Pledge, PledgeStatus};
use pledgetrack_domain::shared::{PledgeId, UserId};
use pledgetrack_infrastructure::persistence::Database;

/// Fresh in-memory SQLite database with migrations applied.
pub async fn setup_in_memory_db() -> SqlitePool {
    let db = Database::in_memory().await.expect("Open in-memory database");
    db.run_migrations().await.expect("Run migrations");
    db.pool().clone()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid timestamp")
}

pub fn pledge_for(user: &str, name: &str, transport: &str, created_at: DateTime<Utc>) -> Pledge {
    Pledge::restore(
        PledgeId::new(),
        name.to_string(),
        "21CS042".to_string(),
        transport.to_string(),
        created_at.date_naive(),
        UserId::from_string(user),
        format!("{}@example.org", user),
        PledgeStatus::Active,
        created_at,
    )
}
