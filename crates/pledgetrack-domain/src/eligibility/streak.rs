use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::check_in::CheckInEvent;

/// Consecutive check-in days needed before a certificate can be issued.
pub const DAYS_REQUIRED: u32 = 7;

/// Certificate eligibility derived from a user's check-ins on one pledge.
///
/// Never persisted; recompute after every check-in write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub days_completed: u32,
    pub consecutive_days: u32,
    pub days_required: u32,
    pub message: String,
}

impl EligibilityResult {
    pub fn from_check_ins(check_ins: &[CheckInEvent]) -> Self {
        Self::from_days(check_ins.iter().map(|c| c.check_in_date()))
    }

    /// Evaluate eligibility over calendar days.
    ///
    /// Duplicate days collapse into one. Only the run that starts at the most
    /// recent day is measured: the scan stops at the first gap, so an older
    /// qualifying run behind a short recent one does not count.
    pub fn from_days(days: impl IntoIterator<Item = NaiveDate>) -> Self {
        let distinct: BTreeSet<NaiveDate> = days.into_iter().collect();
        let days_completed = distinct.len() as u32;

        if days_completed < DAYS_REQUIRED {
            let remaining = DAYS_REQUIRED - days_completed;
            return Self {
                eligible: false,
                days_completed,
                consecutive_days: days_completed,
                days_required: DAYS_REQUIRED,
                message: format!(
                    "You need to complete {} more day{} of daily check-ins to earn your certificate",
                    remaining,
                    plural(remaining)
                ),
            };
        }

        let newest_first: Vec<NaiveDate> = distinct.into_iter().rev().collect();
        let consecutive_days = most_recent_run(&newest_first, DAYS_REQUIRED);
        let eligible = consecutive_days >= DAYS_REQUIRED;

        let message = if eligible {
            format!(
                "Congratulations! You have completed {} consecutive days and are eligible to generate your certificate!",
                DAYS_REQUIRED
            )
        } else {
            let remaining = DAYS_REQUIRED - consecutive_days;
            format!(
                "You need {} more consecutive day{} to earn your certificate.",
                remaining,
                plural(remaining)
            )
        };

        Self {
            eligible,
            days_completed,
            consecutive_days,
            days_required: DAYS_REQUIRED,
            message,
        }
    }

    /// Consecutive days still missing before the certificate unlocks.
    pub fn remaining_days(&self) -> u32 {
        self.days_required.saturating_sub(self.consecutive_days)
    }
}

/// Length of the run starting at `newest_first[0]`, capped once `target` is hit.
fn most_recent_run(newest_first: &[NaiveDate], target: u32) -> u32 {
    if newest_first.is_empty() {
        return 0;
    }

    let mut current = 1u32;
    let mut longest = 1u32;

    for pair in newest_first.windows(2) {
        let diff_days = (pair[0] - pair[1]).num_days().abs();

        if diff_days == 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            break;
        }

        if longest >= target {
            break;
        }
    }

    longest
}

fn plural(count: u32) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
