use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PostsQuery {
    pub delete: Option<String>
}
