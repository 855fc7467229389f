use crate::http::errors::BoardError;
use crate::http::structs::posts_form::PostsForm;

impl PostsForm {
    /// Submitted content, `None` when it is missing or only whitespace.
    pub fn content(&self) -> Option<&str>
    {
        self.content
            .as_deref()
            .filter(|content| !content.trim().is_empty())
    }

    pub fn post_id(&self) -> Result<i64, BoardError>
    {
        let id = self.id.as_deref().map(str::trim).unwrap_or_default();
        id.parse::<i64>()
            .map_err(|_| BoardError::BadRequest(format!("invalid post id \"{id}\"")))
    }
}
