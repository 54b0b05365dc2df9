use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pledge::Pledge;
use crate::shared::{CertificateId, PledgeId, UserId};

/// Record of a completion certificate issued for a pledge.
///
/// At most one certificate exists per pledge. Rendering the document itself
/// happens outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    id: CertificateId,
    pledge_id: PledgeId,
    user_id: UserId,
    recipient_name: String,
    recipient_email: String,
    issue_date: DateTime<Utc>,
    verification_url: String,
}

impl Certificate {
    /// Issue a certificate for `pledge`, addressed to the pledge's author.
    pub fn issue(pledge: &Pledge, issue_date: DateTime<Utc>) -> Self {
        let id = CertificateId::new();
        let verification_url = Self::verification_path(&id);

        Self {
            id,
            pledge_id: pledge.id().clone(),
            user_id: pledge.user_id().clone(),
            recipient_name: pledge.name().to_string(),
            recipient_email: pledge.user_email().to_string(),
            issue_date,
            verification_url,
        }
    }

    /// Restore certificate from persistence
    pub fn restore(
        id: CertificateId,
        pledge_id: PledgeId,
        user_id: UserId,
        recipient_name: String,
        recipient_email: String,
        issue_date: DateTime<Utc>,
        verification_url: String,
    ) -> Self {
        Self {
            id,
            pledge_id,
            user_id,
            recipient_name,
            recipient_email,
            issue_date,
            verification_url,
        }
    }

    pub fn verification_path(id: &CertificateId) -> String {
        format!("/verify/{}", id.as_str())
    }

    pub fn id(&self) -> &CertificateId {
        &self.id
    }

    pub fn pledge_id(&self) -> &PledgeId {
        &self.pledge_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    pub fn recipient_email(&self) -> &str {
        &self.recipient_email
    }

    pub fn issue_date(&self) -> DateTime<Utc> {
        self.issue_date
    }

    pub fn verification_url(&self) -> &str {
        &self.verification_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_issue_copies_recipient_from_pledge() {
        let pledge = Pledge::new(
            "Ravi Kumar".to_string(),
            "22EE017".to_string(),
            "Metro".to_string(),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            UserId::from_string("user-7"),
            "ravi@example.org".to_string(),
        )
        .unwrap();
        let now = Utc::now();

        let certificate = Certificate::issue(&pledge, now);

        assert_eq!(certificate.pledge_id(), pledge.id());
        assert_eq!(certificate.user_id().as_str(), "user-7");
        assert_eq!(certificate.recipient_name(), "Ravi Kumar");
        assert_eq!(certificate.recipient_email(), "ravi@example.org");
        assert_eq!(certificate.issue_date(), now);
        assert!(certificate.id().as_str().starts_with("ECO-"));
        assert_eq!(
            certificate.verification_url(),
            format!("/verify/{}", certificate.id())
        );
    }
}
