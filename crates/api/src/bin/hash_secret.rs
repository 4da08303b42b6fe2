//! Print the Argon2id PHC hash of an admin secret read from stdin.
//!
//! ```text
//! $ printf '%s' "$SECRET" | folio-hash-secret
//! $argon2id$v=19$m=19456,t=2,p=1$...
//! ```
//!
//! The output is the value for `ADMIN_SECRET_HASH`. One trailing newline is
//! stripped from the input.

use std::io::Read;

fn main() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let secret = input
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&input);
    if secret.is_empty() {
        anyhow::bail!("no secret provided on stdin");
    }

    let hash = folio_api::auth::admin_secret::hash_secret(secret)
        .map_err(|e| anyhow::anyhow!("failed to hash secret: {e}"))?;
    println!("{hash}");
    Ok(())
}
