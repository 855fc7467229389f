use chrono::FixedOffset;
use crate::config::structs::board_config::BoardConfig;

impl BoardConfig {
    pub fn timestamp_offset(&self) -> Option<FixedOffset>
    {
        FixedOffset::east_opt(self.timestamp_offset_minutes.checked_mul(60)?)
    }

    pub fn is_admin(&self, user_name: &str) -> bool
    {
        !self.admin_user.is_empty() && user_name == self.admin_user
    }
}
