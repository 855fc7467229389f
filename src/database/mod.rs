//! Post persistence with SQLite, MySQL and PostgreSQL backends.
//!
//! Table and column names come from `database_structure.posts` in the
//! configuration; [`helpers`] turns them into engine specific SQL.

pub mod enums;
pub mod errors;
pub mod helpers;
pub mod impls;
pub mod structs;
pub mod traits;

#[cfg(test)]
mod tests;
