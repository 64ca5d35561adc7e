use anyhow::{Result, anyhow};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

/// How passwords are stored and checked. `Hashed` is the normal posture;
/// `Plaintext` reproduces the demo variant that stored passwords verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialScheme {
    Hashed,
    Plaintext,
}

impl CredentialScheme {
    /// Transform a password into its stored form. Argon2 runs with its
    /// default (fixed) cost parameters.
    pub fn seal(&self, password: &str) -> Result<String> {
        match self {
            Self::Hashed => {
                let salt = SaltString::generate(&mut OsRng);
                let hash = Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map_err(|e| anyhow!("password hash failed: {e}"))?;
                Ok(hash.to_string())
            }
            Self::Plaintext => Ok(password.to_owned()),
        }
    }

    /// Check a supplied password against the stored credential. Any failure
    /// (unparseable hash included) reads as a mismatch.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        match self {
            Self::Hashed => match PasswordHash::new(stored) {
                Ok(parsed) => Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            },
            Self::Plaintext => password == stored,
        }
    }
}
