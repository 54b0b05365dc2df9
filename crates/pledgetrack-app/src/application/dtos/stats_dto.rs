use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_pledges: u64,
    pub total_certificates: u64,
    pub total_feedback: u64,
    /// 0 when there is no feedback yet.
    pub average_rating: f64,
    pub pledges_by_transport: BTreeMap<String, u64>,
    pub pledges_by_date: BTreeMap<String, u64>, // YYYY-MM-DD -> count
    pub last_updated: String,
}
