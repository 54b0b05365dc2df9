use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, FeedbackId, UserId};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A star rating and comment left by a signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    id: FeedbackId,
    rating: u8,
    comment: String,
    user_id: UserId,
    user_email: String,
    user_name: String,
    created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(
        rating: u8,
        comment: String,
        user_id: UserId,
        user_email: String,
        user_name: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if user_id.is_blank() {
            return Err(DomainError::NotAuthenticated(
                "A user id is required to submit feedback".to_string(),
            ));
        }

        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(DomainError::InvalidInput(format!(
                "Rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, rating
            )));
        }

        let comment = comment.trim().to_string();
        if comment.is_empty() {
            return Err(DomainError::InvalidInput(
                "Feedback comment cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: FeedbackId::new(),
            rating,
            comment,
            user_id,
            user_email: user_email.trim().to_lowercase(),
            user_name: user_name.trim().to_string(),
            created_at,
        })
    }

    /// Restore feedback from persistence
    pub fn restore(
        id: FeedbackId,
        rating: u8,
        comment: String,
        user_id: UserId,
        user_email: String,
        user_name: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            rating,
            comment,
            user_id,
            user_email,
            user_name,
            created_at,
        }
    }

    pub fn id(&self) -> &FeedbackId {
        &self.id
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn feedback(rating: u8, comment: &str, user: &str) -> Result<Feedback, DomainError> {
        Feedback::new(
            rating,
            comment.to_string(),
            UserId::from_string(user),
            " Asha@Example.org ".to_string(),
            "Asha Rao".to_string(),
            Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_new_feedback_is_trimmed() {
        let fb = feedback(4, "  Loved the streak tracker  ", "user-1").unwrap();

        assert_eq!(fb.rating(), 4);
        assert_eq!(fb.comment(), "Loved the streak tracker");
        assert_eq!(fb.user_email(), "asha@example.org");
    }

    #[test]
    fn test_rating_bounds() {
        assert!(feedback(MIN_RATING, "ok", "user-1").is_ok());
        assert!(feedback(MAX_RATING, "ok", "user-1").is_ok());

        for rating in [0, 6] {
            match feedback(rating, "ok", "user-1") {
                Err(DomainError::InvalidInput(msg)) => assert!(msg.contains("between 1 and 5")),
                other => panic!("Expected InvalidInput for rating {}, got {:?}", rating, other),
            }
        }
    }

    #[test]
    fn test_blank_comment_rejected() {
        assert!(matches!(
            feedback(3, "   ", "user-1"),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_user_is_not_authenticated() {
        assert!(matches!(
            feedback(3, "ok", ""),
            Err(DomainError::NotAuthenticated(_))
        ));
    }
}
