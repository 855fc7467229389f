use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoardConfig {
    pub admin_user: String,
    pub timestamp_offset_minutes: i32,
    pub timestamp_format: String,
    pub max_content_length: usize
}
