use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreHealth {
    pub is_healthy: bool,
    pub total_campaigns: u32,
    pub total_submissions: u32,
    pub total_wallets: u32,
    pub error_count: u32,
    pub data_integrity_ok: bool,
    pub checked_at: DateTime<Utc>,
}
