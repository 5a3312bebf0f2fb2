use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Singleton letterhead fields rendered at the top of every exported report.
/// Stored at a fixed S3 key; see [`crate::s3_keys::PRACTICE_SETTINGS`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PracticeSettings {
    pub practice_name: String,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
