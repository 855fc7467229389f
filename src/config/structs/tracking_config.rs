use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct TrackingConfig {
    pub pepper: String,
    pub cookie_http_only: bool,
    pub cookie_secure: bool
}

impl std::fmt::Debug for TrackingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("TrackingConfig")
            .field("pepper", &"<redacted>")
            .field("cookie_http_only", &self.cookie_http_only)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}
