use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::{DomainError, PledgeId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PledgeStatus {
    Active,
    Completed,
    Expired,
}

impl PledgeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PledgeStatus::Active => "active",
            PledgeStatus::Completed => "completed",
            PledgeStatus::Expired => "expired",
        }
    }
}

impl FromStr for PledgeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(PledgeStatus::Active),
            "completed" => Ok(PledgeStatus::Completed),
            "expired" => Ok(PledgeStatus::Expired),
            other => Err(DomainError::DataIntegrity(format!(
                "Unknown pledge status: {}",
                other
            ))),
        }
    }
}

/// An eco-friendly transport pledge submitted by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pledge {
    id: PledgeId,
    name: String,
    roll_no: String,
    mode_of_transport: String,
    pledge_date: NaiveDate,
    user_id: UserId,
    user_email: String,
    status: PledgeStatus,
    created_at: DateTime<Utc>,
}

impl Pledge {
    pub fn new(
        name: String,
        roll_no: String,
        mode_of_transport: String,
        pledge_date: NaiveDate,
        user_id: UserId,
        user_email: String,
    ) -> Result<Self, DomainError> {
        if user_id.is_blank() {
            return Err(DomainError::NotAuthenticated(
                "A user id is required to submit a pledge".to_string(),
            ));
        }

        let name = name.trim().to_string();
        let roll_no = roll_no.trim().to_string();
        let mode_of_transport = mode_of_transport.trim().to_string();
        let user_email = user_email.trim().to_lowercase();

        for (field, value) in [
            ("name", &name),
            ("roll number", &roll_no),
            ("mode of transport", &mode_of_transport),
            ("email", &user_email),
        ] {
            if value.is_empty() {
                return Err(DomainError::InvalidInput(format!(
                    "Pledge {} cannot be empty",
                    field
                )));
            }
        }

        if !is_valid_email(&user_email) {
            return Err(DomainError::InvalidInput(format!(
                "Please use a valid email address: {}",
                user_email
            )));
        }

        Ok(Self {
            id: PledgeId::new(),
            name,
            roll_no,
            mode_of_transport,
            pledge_date,
            user_id,
            user_email,
            status: PledgeStatus::Active,
            created_at: Utc::now(),
        })
    }

    /// Restore pledge from persistence
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: PledgeId,
        name: String,
        roll_no: String,
        mode_of_transport: String,
        pledge_date: NaiveDate,
        user_id: UserId,
        user_email: String,
        status: PledgeStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            roll_no,
            mode_of_transport,
            pledge_date,
            user_id,
            user_email,
            status,
            created_at,
        }
    }

    pub fn id(&self) -> &PledgeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_no(&self) -> &str {
        &self.roll_no
    }

    pub fn mode_of_transport(&self) -> &str {
        &self.mode_of_transport
    }

    pub fn pledge_date(&self) -> NaiveDate {
        self.pledge_date
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn status(&self) -> PledgeStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// Accepts `local@domain.tld` with no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() => match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pledge_with_email(email: &str) -> Result<Pledge, DomainError> {
        Pledge::new(
            "Asha".to_string(),
            "21CS042".to_string(),
            "Bicycle".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            UserId::from_string("user-1"),
            email.to_string(),
        )
    }

    #[test]
    fn test_new_pledge_is_active_and_normalised() {
        let pledge = pledge_with_email("  Asha@Example.COM ").unwrap();

        assert_eq!(pledge.status(), PledgeStatus::Active);
        assert_eq!(pledge.user_email(), "asha@example.com");
        assert_eq!(pledge.mode_of_transport(), "Bicycle");
        assert!(pledge.is_owned_by(&UserId::from_string("user-1")));
    }

    #[test]
    fn test_invalid_emails_rejected() {
        for email in ["", "asha", "asha@", "@example.com", "asha@example", "as ha@example.com"] {
            let result = pledge_with_email(email);
            assert!(
                matches!(result, Err(DomainError::InvalidInput(_))),
                "expected {:?} to be rejected",
                email
            );
        }
    }

    #[test]
    fn test_missing_user_is_not_authenticated() {
        let result = Pledge::new(
            "Asha".to_string(),
            "21CS042".to_string(),
            "Bus".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            UserId::from_string(""),
            "asha@example.com".to_string(),
        );

        assert!(matches!(result, Err(DomainError::NotAuthenticated(_))));
    }

    #[test]
    fn test_blank_transport_rejected() {
        let result = Pledge::new(
            "Asha".to_string(),
            "21CS042".to_string(),
            "   ".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            UserId::from_string("user-1"),
            "asha@example.com".to_string(),
        );

        match result {
            Err(DomainError::InvalidInput(msg)) => assert!(msg.contains("mode of transport")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_status_round_trip_and_unknown() {
        assert_eq!("completed".parse::<PledgeStatus>().unwrap(), PledgeStatus::Completed);
        assert!(matches!(
            "archived".parse::<PledgeStatus>(),
            Err(DomainError::DataIntegrity(_))
        ));
    }
}
