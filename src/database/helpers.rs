use crate::config::structs::database_structure_config_posts::DatabaseStructureConfigPosts;
use crate::database::enums::database_drivers::DatabaseDrivers;

pub fn quote_identifier(engine: DatabaseDrivers, identifier: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", identifier),
        DatabaseDrivers::pgsql => identifier.to_string(),
    }
}

/// Bind placeholder for the 1-based parameter `index`.
pub fn placeholder(engine: DatabaseDrivers, index: usize) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => String::from("?"),
        DatabaseDrivers::pgsql => format!("${}", index),
    }
}

fn id_column_definition(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::sqlite3 => "INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL",
        DatabaseDrivers::mysql => "BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY",
        DatabaseDrivers::pgsql => "BIGSERIAL PRIMARY KEY",
    }
}

fn short_text_type(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => "TEXT",
        DatabaseDrivers::mysql => "VARCHAR(256)",
    }
}

fn timestamp_type(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::sqlite3 => "INTEGER",
        DatabaseDrivers::mysql | DatabaseDrivers::pgsql => "BIGINT",
    }
}

pub fn build_create_posts_table_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfigPosts) -> String {
    let q = |identifier: &str| quote_identifier(engine, identifier);
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({} {}, {} TEXT NOT NULL, {} {} NOT NULL, {} {} NOT NULL, {} {} NOT NULL DEFAULT 0, {} {} NOT NULL DEFAULT 0)",
        q(structure.table_name.as_str()),
        q(structure.column_id.as_str()), id_column_definition(engine),
        q(structure.column_content.as_str()),
        q(structure.column_tracking_cookie.as_str()), short_text_type(engine),
        q(structure.column_posted_by.as_str()), short_text_type(engine),
        q(structure.column_created_at.as_str()), timestamp_type(engine),
        q(structure.column_updated_at.as_str()), timestamp_type(engine)
    )
}

pub fn build_insert_post_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfigPosts) -> String {
    let q = |identifier: &str| quote_identifier(engine, identifier);
    let returning = match engine {
        DatabaseDrivers::pgsql => format!(" RETURNING {}", q(structure.column_id.as_str())),
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => String::new(),
    };
    format!(
        "INSERT INTO {} ({}, {}, {}, {}, {}) VALUES ({}, {}, {}, {}, {}){}",
        q(structure.table_name.as_str()),
        q(structure.column_content.as_str()),
        q(structure.column_tracking_cookie.as_str()),
        q(structure.column_posted_by.as_str()),
        q(structure.column_created_at.as_str()),
        q(structure.column_updated_at.as_str()),
        placeholder(engine, 1),
        placeholder(engine, 2),
        placeholder(engine, 3),
        placeholder(engine, 4),
        placeholder(engine, 5),
        returning
    )
}

fn select_columns(engine: DatabaseDrivers, structure: &DatabaseStructureConfigPosts) -> String {
    [
        &structure.column_id,
        &structure.column_content,
        &structure.column_tracking_cookie,
        &structure.column_posted_by,
        &structure.column_created_at,
        &structure.column_updated_at,
    ]
        .iter()
        .map(|column| quote_identifier(engine, column))
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn build_select_posts_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfigPosts) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {} DESC",
        select_columns(engine, structure),
        quote_identifier(engine, &structure.table_name),
        quote_identifier(engine, &structure.column_id)
    )
}

pub fn build_select_post_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfigPosts) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = {}",
        select_columns(engine, structure),
        quote_identifier(engine, &structure.table_name),
        quote_identifier(engine, &structure.column_id),
        placeholder(engine, 1)
    )
}

pub fn build_delete_post_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfigPosts) -> String {
    format!(
        "DELETE FROM {} WHERE {} = {}",
        quote_identifier(engine, &structure.table_name),
        quote_identifier(engine, &structure.column_id),
        placeholder(engine, 1)
    )
}
