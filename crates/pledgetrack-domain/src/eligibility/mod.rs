//! Certificate eligibility: streak evaluation and the weekly progress view.
//!
//! Both are pure functions over check-ins already fetched from a
//! [`CheckInRepository`](crate::check_in::CheckInRepository).

mod progress;
mod streak;

pub use progress::{weekly_progress, DayStatus, WEEK_LENGTH};
pub use streak::{EligibilityResult, DAYS_REQUIRED};
