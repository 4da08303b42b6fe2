//! Admin secret hashing and verification.

pub mod admin_secret;
