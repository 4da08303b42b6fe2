//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus whatever input types its repository accepts.

pub mod like_history;
pub mod project;
