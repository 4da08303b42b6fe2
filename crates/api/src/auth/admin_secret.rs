//! Shared admin secret gate.
//!
//! The operator's secret is never stored in plaintext: configuration carries
//! an Argon2id PHC string and each submitted secret is verified against it.
//! Salt and parameters travel inside the PHC string.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Why a submitted admin secret was refused.
#[derive(Debug, thiserror::Error)]
pub enum AdminDenial {
    /// No secret, or an empty one, was supplied.
    #[error("admin secret missing")]
    Missing,

    /// A secret was supplied but does not match.
    #[error("admin secret mismatch")]
    Mismatch,

    /// Verification itself failed.
    #[error("admin secret verification failed: {0}")]
    Hash(argon2::password_hash::Error),
}

/// Hash a plaintext secret using Argon2id with a random salt.
///
/// Returns the PHC-formatted string expected in `ADMIN_SECRET_HASH`.
pub fn hash_secret(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verifies submitted secrets against the configured hash. Stateless.
#[derive(Debug, Clone)]
pub struct AdminGate {
    hash: String,
}

impl AdminGate {
    /// Build a gate from a PHC hash string. A malformed hash is rejected here
    /// so misconfiguration surfaces at startup rather than on first request.
    pub fn new(hash: impl Into<String>) -> Result<Self, argon2::password_hash::Error> {
        let hash = hash.into();
        PasswordHash::new(&hash)?;
        Ok(Self { hash })
    }

    pub fn verify(&self, submitted: Option<&str>) -> Result<(), AdminDenial> {
        let submitted = match submitted {
            Some(s) if !s.is_empty() => s,
            _ => return Err(AdminDenial::Missing),
        };

        let parsed = PasswordHash::new(&self.hash).map_err(AdminDenial::Hash)?;
        match Argon2::default().verify_password(submitted.as_bytes(), &parsed) {
            Ok(()) => Ok(()),
            Err(argon2::password_hash::Error::Password) => Err(AdminDenial::Mismatch),
            Err(e) => Err(AdminDenial::Hash(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_secret("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(
            hash.starts_with("$argon2id$"),
            "expected argon2id PHC prefix"
        );

        let gate = AdminGate::new(hash).expect("hash should parse");
        assert!(gate.verify(Some("correct-horse-battery-staple")).is_ok());
    }

    #[test]
    fn test_wrong_secret_is_mismatch() {
        let gate = AdminGate::new(hash_secret("real-secret").unwrap()).unwrap();
        assert!(matches!(
            gate.verify(Some("wrong-secret")),
            Err(AdminDenial::Mismatch)
        ));
    }

    #[test]
    fn test_missing_or_empty_secret() {
        let gate = AdminGate::new(hash_secret("real-secret").unwrap()).unwrap();
        assert!(matches!(gate.verify(None), Err(AdminDenial::Missing)));
        assert!(matches!(gate.verify(Some("")), Err(AdminDenial::Missing)));
    }

    #[test]
    fn test_same_secret_hashes_differently() {
        let a = hash_secret("salted").unwrap();
        let b = hash_secret("salted").unwrap();
        assert_ne!(a, b, "each hash gets a fresh salt");
    }

    #[test]
    fn test_malformed_hash_rejected_at_construction() {
        assert!(AdminGate::new("plaintext-secret").is_err());
    }
}
