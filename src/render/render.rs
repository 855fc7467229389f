use std::fmt::Write;
use chrono::{Offset, Utc};
use crate::config::structs::board_config::BoardConfig;
use crate::posts::structs::post::Post;

pub const POSTS_PATH: &str = "/posts";
pub const DELETE_PATH: &str = "/posts/delete";

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes `content` and turns its line breaks into `<br>`.
pub fn content_to_html(content: &str) -> String {
    content
        .lines()
        .map(escape_html)
        .collect::<Vec<String>>()
        .join("<br>")
}

pub fn render_posts_page(posts: &[Post], user_name: &str, board: &BoardConfig) -> String {
    let offset = board.timestamp_offset().unwrap_or_else(|| Utc.fix());
    let is_admin = board.is_admin(user_name);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n<title>Secret Board</title>\n</head>\n<body>\n");
    html.push_str("<h1>Secret Board</h1>\n");
    if !user_name.is_empty() {
        let _ = writeln!(html, "<p class=\"user\">{}</p>", escape_html(user_name));
    }
    let _ = writeln!(
        html,
        "<form method=\"post\" action=\"{}\">\n<textarea name=\"content\" rows=\"4\" cols=\"60\" maxlength=\"{}\"></textarea>\n<button type=\"submit\">Post</button>\n</form>",
        POSTS_PATH,
        board.max_content_length
    );
    for post in posts {
        html.push_str("<div class=\"post\">\n");
        let _ = writeln!(
            html,
            "<p class=\"post-header\">#{} ID:{} {}</p>",
            post.id,
            escape_html(post.tracking_cookie.original_id()),
            escape_html(&post.formatted_created_at(offset, &board.timestamp_format))
        );
        if is_admin {
            let _ = writeln!(html, "<p class=\"posted-by\">{}</p>", escape_html(&post.posted_by));
        }
        let _ = writeln!(html, "<p class=\"content\">{}</p>", content_to_html(&post.content));
        if post.is_deletable_by(user_name, &board.admin_user) {
            let _ = writeln!(
                html,
                "<form method=\"post\" action=\"{}\">\n<input type=\"hidden\" name=\"id\" value=\"{}\">\n<button type=\"submit\">Delete</button>\n</form>",
                DELETE_PATH,
                post.id
            );
        }
        html.push_str("</div>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}
