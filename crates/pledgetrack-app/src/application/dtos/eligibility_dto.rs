use serde::{Deserialize, Serialize};

use super::DATE_FORMAT;
use pledgetrack_domain::eligibility::{DayStatus, EligibilityResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityDto {
    pub eligible: bool,
    pub days_completed: u32,
    pub consecutive_days: u32,
    pub days_required: u32,
    pub remaining_days: u32,
    pub message: String,
}

impl From<EligibilityResult> for EligibilityDto {
    fn from(result: EligibilityResult) -> Self {
        Self {
            remaining_days: result.remaining_days(),
            eligible: result.eligible,
            days_completed: result.days_completed,
            consecutive_days: result.consecutive_days,
            days_required: result.days_required,
            message: result.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatusDto {
    pub date: String,     // YYYY-MM-DD
    pub day_name: String, // Mon, Tue, ...
    pub day_number: u32,
    pub completed: bool,
    pub tasks: Vec<String>,
}

impl From<DayStatus> for DayStatusDto {
    fn from(day: DayStatus) -> Self {
        Self {
            date: day.date.format(DATE_FORMAT).to_string(),
            day_name: day.day_name,
            day_number: day.day_number,
            completed: day.completed,
            tasks: day.tasks,
        }
    }
}
