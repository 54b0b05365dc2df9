use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::check_in::CheckInEvent;

/// Number of days shown in the weekly progress view.
pub const WEEK_LENGTH: u32 = 7;

/// Completion status for one calendar day of the weekly view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub day_name: String, // Mon, Tue, ...
    pub day_number: u32,
    pub completed: bool,
    pub tasks: Vec<String>,
}

/// Project check-ins onto the seven days ending at `today`, oldest first.
///
/// Independent of streak continuity: a sparse week is valid output, and an
/// empty history still yields seven incomplete days.
pub fn weekly_progress(check_ins: &[CheckInEvent], today: NaiveDate) -> Vec<DayStatus> {
    let by_day: HashMap<NaiveDate, &CheckInEvent> = check_ins
        .iter()
        .map(|c| (c.check_in_date(), c))
        .collect();

    (0..WEEK_LENGTH as i64)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let check_in = by_day.get(&date);

            DayStatus {
                date,
                day_name: date.format("%a").to_string(),
                day_number: date.day(),
                completed: check_in.is_some(),
                tasks: check_in.map(|c| c.tasks().to_vec()).unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{PledgeId, UserId};
    use chrono::{TimeZone, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn check_in_on(date: NaiveDate, tasks: &[&str]) -> CheckInEvent {
        let at = Utc.from_utc_datetime(&date.and_hms_opt(14, 30, 0).unwrap());
        CheckInEvent::new(
            UserId::from_string("user-1"),
            PledgeId::from_string("pledge-1"),
            at,
            tasks.iter().map(|t| t.to_string()).collect(),
            String::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_history_yields_seven_incomplete_days() {
        let today = day(2024, 1, 7);

        let progress = weekly_progress(&[], today);

        assert_eq!(progress.len(), 7);
        assert!(progress.iter().all(|d| !d.completed && d.tasks.is_empty()));
        assert_eq!(progress[0].date, day(2024, 1, 1));
        assert_eq!(progress[6].date, today);
    }

    #[test]
    fn test_sparse_week_marks_only_checked_days() {
        let today = day(2024, 1, 7);
        let check_ins = vec![
            check_in_on(day(2024, 1, 1), &["Walked to campus"]),
            check_in_on(day(2024, 1, 3), &["Took the bus"]),
            check_in_on(day(2024, 1, 5), &[]),
        ];

        let progress = weekly_progress(&check_ins, today);

        let completed: Vec<bool> = progress.iter().map(|d| d.completed).collect();
        assert_eq!(completed, vec![true, false, true, false, true, false, false]);
        assert_eq!(progress[0].tasks, vec!["Walked to campus".to_string()]);
        assert_eq!(progress[2].tasks, vec!["Took the bus".to_string()]);
        assert!(progress[4].tasks.is_empty());
    }

    #[test]
    fn test_day_labels() {
        // 2024-01-01 was a Monday.
        let progress = weekly_progress(&[], day(2024, 1, 7));

        let names: Vec<&str> = progress.iter().map(|d| d.day_name.as_str()).collect();
        assert_eq!(names, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

        let numbers: Vec<u32> = progress.iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_history_outside_window_is_ignored() {
        let today = day(2024, 3, 2);
        let check_ins: Vec<CheckInEvent> = (0..20)
            .map(|i| check_in_on(day(2024, 1, 1) + Duration::days(i), &["old"]))
            .collect();

        let progress = weekly_progress(&check_ins, today);

        assert_eq!(progress.len(), 7);
        assert!(progress.iter().all(|d| !d.completed));
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let today = day(2024, 3, 2);
        let check_ins = vec![check_in_on(day(2024, 2, 29), &["Carpooled"])];

        let progress = weekly_progress(&check_ins, today);

        assert_eq!(progress[0].date, day(2024, 2, 25));
        assert_eq!(progress[4].date, day(2024, 2, 29));
        assert!(progress[4].completed);
        assert_eq!(progress[4].day_number, 29);
        assert_eq!(progress[6].day_number, 2);
    }
}
