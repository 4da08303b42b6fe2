//! Request handlers.
//!
//! Handlers stay thin: they validate input, delegate to the repositories in
//! `folio_db`, and map failures through [`AppError`](crate::error::AppError).

pub mod admin;
pub mod config;
pub mod project;
