use serde::{Deserialize, Serialize};
use crate::config::structs::database_structure_config_posts::DatabaseStructureConfigPosts;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfig {
    pub posts: DatabaseStructureConfigPosts
}
