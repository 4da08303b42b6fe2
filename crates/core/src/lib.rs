//! Domain types, constants, and pure validation logic for the portfolio
//! catalog. No I/O lives here; the `db` and `api` crates build on it.

pub mod engagement;
pub mod error;
pub mod project;
pub mod rate_limit;
pub mod types;
