use sha1::{Digest, Sha1};

pub const TRACKING_COOKIE_NAME: &str = "tracking_id";
pub const TRACKING_COOKIE_LIFETIME_HOURS: i64 = 24;
pub const TRACKING_ID_SEPARATOR: char = '_';
pub const TRACKING_SEED_BYTES: usize = 8;

/// Lowercase hex SHA-1 over `original_id ++ user_name ++ pepper`.
///
/// The three fields are concatenated without any delimiter. Issued cookies
/// depend on this exact byte layout, so it must not change.
pub fn keyed_digest(original_id: &str, user_name: &str, pepper: &str) -> String
{
    let mut hasher = Sha1::new();
    hasher.update(original_id.as_bytes());
    hasher.update(user_name.as_bytes());
    hasher.update(pepper.as_bytes());
    hex::encode(hasher.finalize().as_slice())
}
