use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::UnixTime;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, ToSchema)]
pub struct PerfCounterValue {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, ToSchema)]
pub struct PerfCounterCategoryValues {
    pub category: String,
    pub counters: Vec<PerfCounterValue>,
}

/// Request counter values since server start.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, ToSchema)]
pub struct PerfCounterQueryResult {
    pub server_start_time: UnixTime,
    pub categories: Vec<PerfCounterCategoryValues>,
}
