use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct HealthStatus {
    pub message: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            message: "hello".to_string(),
        }
    }
}
