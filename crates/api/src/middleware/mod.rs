//! Request extractors that guard and annotate handlers.
//!
//! - [`origin::ClientOrigin`] -- The caller's address, used to key cooldowns and limits.
//! - [`rate_limit::AdminRateLimit`] -- Counts an admin attempt; rejects past the limit.
//! - [`admin::RequireAdmin`] -- Requires a valid `x-admin` secret.

pub mod admin;
pub mod origin;
pub mod rate_limit;
