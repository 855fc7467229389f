use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigPosts {
    pub table_name: String,
    pub column_id: String,
    pub column_content: String,
    pub column_tracking_cookie: String,
    pub column_posted_by: String,
    pub column_created_at: String,
    pub column_updated_at: String
}
