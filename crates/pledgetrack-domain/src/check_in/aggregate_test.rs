#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::{DomainError, PledgeId, UserId};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_new_check_in_strips_time_of_day() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 23, 59, 0).unwrap();

        let event = CheckInEvent::new(
            UserId::from_string("user-1"),
            PledgeId::from_string("pledge-1"),
            at,
            vec!["Cycled to work".to_string()],
            String::new(),
        )
        .unwrap();

        assert_eq!(
            event.check_in_date(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert_eq!(event.created_at(), at);
        assert_eq!(event.tasks(), &["Cycled to work".to_string()]);
    }

    #[test]
    fn test_identity_is_deterministic_per_day() {
        let user_id = UserId::from_string("user-1");
        let pledge_id = PledgeId::from_string("pledge-1");

        let morning = CheckInEvent::new(
            user_id.clone(),
            pledge_id.clone(),
            Utc.with_ymd_and_hms(2024, 1, 5, 0, 1, 0).unwrap(),
            vec![],
            String::new(),
        )
        .unwrap();
        let evening = CheckInEvent::new(
            user_id,
            pledge_id,
            Utc.with_ymd_and_hms(2024, 1, 5, 23, 59, 0).unwrap(),
            vec!["Walked".to_string()],
            "late".to_string(),
        )
        .unwrap();

        assert_eq!(morning.id(), "user-1_pledge-1_2024-01-05");
        assert_eq!(morning.id(), evening.id());
    }

    #[test]
    fn test_identity_keeps_underscored_ids_apart() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

        let first = CheckInEvent::identity(
            &UserId::from_string("a_b"),
            &PledgeId::from_string("c"),
            date,
        );
        let second = CheckInEvent::identity(
            &UserId::from_string("a"),
            &PledgeId::from_string("b_c"),
            date,
        );
        let backslashed = CheckInEvent::identity(
            &UserId::from_string("a\\"),
            &PledgeId::from_string("_c"),
            date,
        );

        assert_eq!(first, "a\\_b_c_2024-01-05");
        assert_eq!(second, "a_b\\_c_2024-01-05");
        assert_ne!(first, second);
        assert_ne!(backslashed, first);
        assert_ne!(backslashed, second);
    }

    #[test]
    fn test_missing_user_is_not_authenticated() {
        let result = CheckInEvent::new(
            UserId::from_string(""),
            PledgeId::from_string("pledge-1"),
            Utc::now(),
            vec![],
            String::new(),
        );

        assert!(matches!(result, Err(DomainError::NotAuthenticated(_))));
    }

    #[test]
    fn test_missing_pledge_is_invalid_input() {
        let result = CheckInEvent::new(
            UserId::from_string("user-1"),
            PledgeId::from_string("  "),
            Utc::now(),
            vec![],
            String::new(),
        );

        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }
}
