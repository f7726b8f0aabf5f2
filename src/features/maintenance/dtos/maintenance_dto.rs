use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::MAINTENANCE_MESSAGE;

/// Body of every maintenance answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceResponseDto {
    pub message: String,
    /// Seconds until the site is expected back, mirrors `Retry-After`
    pub retry_after: u64,
}

impl MaintenanceResponseDto {
    pub fn new(retry_after: u64) -> Self {
        Self {
            message: MAINTENANCE_MESSAGE.to_string(),
            retry_after,
        }
    }
}
