use crate::http::structs::posts_query::PostsQuery;

impl PostsQuery {
    /// Legacy `?delete=1` switch on `POST /posts`.
    pub fn is_delete(&self) -> bool
    {
        self.delete.as_deref() == Some("1")
    }
}
