use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, PledgeId, UserId};

/// Date format used for check-in identities and persisted day keys.
pub const CHECK_IN_DATE_FORMAT: &str = "%Y-%m-%d";

/// One user's confirmation of pledge activity on one calendar day.
///
/// Events are append-only: they are created once per `(user, pledge, day)`
/// and never updated in place. The day is stored without a time component;
/// anything finer than a calendar day is stripped on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInEvent {
    id: String,
    user_id: UserId,
    pledge_id: PledgeId,
    check_in_date: NaiveDate,
    tasks: Vec<String>,
    notes: String,
    created_at: DateTime<Utc>,
}

impl CheckInEvent {
    /// Create a new check-in for the UTC calendar day containing `at`.
    pub fn new(
        user_id: UserId,
        pledge_id: PledgeId,
        at: DateTime<Utc>,
        tasks: Vec<String>,
        notes: String,
    ) -> Result<Self, DomainError> {
        if user_id.is_blank() {
            return Err(DomainError::NotAuthenticated(
                "A user id is required to record a check-in".to_string(),
            ));
        }
        if pledge_id.is_blank() {
            return Err(DomainError::InvalidInput(
                "A pledge id is required to record a check-in".to_string(),
            ));
        }

        let check_in_date = at.date_naive();

        Ok(Self {
            id: Self::identity(&user_id, &pledge_id, check_in_date),
            user_id,
            pledge_id,
            check_in_date,
            tasks,
            notes,
            created_at: at,
        })
    }

    /// Restore a check-in from persistence
    pub fn restore(
        id: String,
        user_id: UserId,
        pledge_id: PledgeId,
        check_in_date: NaiveDate,
        tasks: Vec<String>,
        notes: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            pledge_id,
            check_in_date,
            tasks,
            notes,
            created_at,
        }
    }

    /// Deterministic identity for the single event allowed per day.
    ///
    /// Parts are joined with `_`. Any backslash or `_` inside an id is escaped
    /// with a backslash, so distinct triples never share an identity.
    pub fn identity(user_id: &UserId, pledge_id: &PledgeId, date: NaiveDate) -> String {
        format!(
            "{}_{}_{}",
            escape_identity_part(user_id.as_str()),
            escape_identity_part(pledge_id.as_str()),
            date.format(CHECK_IN_DATE_FORMAT)
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn pledge_id(&self) -> &PledgeId {
        &self.pledge_id
    }

    pub fn check_in_date(&self) -> NaiveDate {
        self.check_in_date
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn escape_identity_part(part: &str) -> String {
    let mut escaped = String::with_capacity(part.len());
    for c in part.chars() {
        if c == '\\' || c == '_' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
