use serde::Deserialize;

/// Form body for `POST /posts` and `POST /posts/delete`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PostsForm {
    pub content: Option<String>,
    pub id: Option<String>
}
