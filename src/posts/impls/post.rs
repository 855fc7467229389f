use std::fmt::Write;
use chrono::{DateTime, FixedOffset, Utc};
use crate::posts::structs::new_post::NewPost;
use crate::posts::structs::post::Post;

impl Post {
    pub fn from_new(id: i64, new_post: NewPost, created_at: DateTime<Utc>) -> Post
    {
        Post {
            id,
            content: new_post.content,
            tracking_cookie: new_post.tracking_cookie,
            posted_by: new_post.posted_by,
            created_at,
            updated_at: created_at,
        }
    }

    /// The author and the admin user may delete a post. Anonymous viewers never can.
    pub fn is_deletable_by(&self, user_name: &str, admin_user: &str) -> bool
    {
        if user_name.is_empty() {
            return false;
        }
        user_name == self.posted_by || user_name == admin_user
    }

    /// Falls back to RFC 3339 when `format` is not a valid strftime pattern.
    pub fn formatted_created_at(&self, offset: FixedOffset, format: &str) -> String
    {
        let local = self.created_at.with_timezone(&offset);
        let mut formatted = String::new();
        match write!(formatted, "{}", local.format(format)) {
            Ok(()) => formatted,
            Err(_) => local.to_rfc3339(),
        }
    }
}

/// Seconds since the epoch, as stored in the posts table.
pub fn timestamp_from_seconds(seconds: i64) -> DateTime<Utc>
{
    DateTime::from_timestamp(seconds, 0).unwrap_or_default()
}
