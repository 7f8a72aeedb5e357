//! Salted password hashes.
//!
//! Stored form: `sha256$<salt-hex>$<digest-hex>`, where the digest is
//! SHA-256 over the salt bytes followed by the UTF-8 password.

use std::fmt;

use constant_time_eq::constant_time_eq;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;
const DIGEST_LEN: usize = 32;

/// Errors raised while handling passwords and their hashes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// Plaintext password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Stored hash did not match `sha256$<salt>$<digest>`.
    #[error("stored password hash is malformed")]
    Malformed,
}

/// Plaintext password, wiped from memory on drop.
pub struct PlainPassword(Zeroizing<String>);

impl PlainPassword {
    /// Wrap a plaintext password.
    ///
    /// # Errors
    /// Returns [`PasswordHashError::EmptyPassword`] for empty input.
    pub fn new(value: impl Into<String>) -> Result<Self, PasswordHashError> {
        let value = Zeroizing::new(value.into());
        if value.is_empty() {
            return Err(PasswordHashError::EmptyPassword);
        }
        Ok(Self(value))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword(**redacted**)")
    }
}

/// Salted SHA-256 password hash.
///
/// A single digest round is cheap to brute-force if the stored hashes leak;
/// moving to a memory-hard KDF needs a new scheme tag in the stored form.
///
/// # Examples
/// ```
/// use event_api::domain::{PasswordHash, PlainPassword};
///
/// let password = PlainPassword::new("correct horse").expect("non-empty");
/// let hash = PasswordHash::hash(&password);
/// assert!(hash.verify(&password));
/// assert!(!hash.verify(&PlainPassword::new("wrong").expect("non-empty")));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    salt: Vec<u8>,
    digest: [u8; DIGEST_LEN],
}

impl PasswordHash {
    /// Hash `password` with a fresh random salt.
    #[must_use]
    pub fn hash(password: &PlainPassword) -> Self {
        let mut salt = vec![0_u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        Self::with_salt(password, salt)
    }

    fn with_salt(password: &PlainPassword, salt: Vec<u8>) -> Self {
        let digest = digest(&salt, password);
        Self { salt, digest }
    }

    /// Parse a hash in its stored form.
    ///
    /// # Errors
    /// Returns [`PasswordHashError::Malformed`] when the scheme, salt, or
    /// digest cannot be decoded.
    pub fn from_stored(stored: &str) -> Result<Self, PasswordHashError> {
        let mut parts = stored.split('$');
        let (Some(SCHEME), Some(salt_hex), Some(digest_hex), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(PasswordHashError::Malformed);
        };
        let salt = hex::decode(salt_hex).map_err(|_| PasswordHashError::Malformed)?;
        if salt.is_empty() {
            return Err(PasswordHashError::Malformed);
        }
        let mut digest = [0_u8; DIGEST_LEN];
        hex::decode_to_slice(digest_hex, &mut digest).map_err(|_| PasswordHashError::Malformed)?;
        Ok(Self { salt, digest })
    }

    /// Render the stored form.
    #[must_use]
    pub fn to_stored(&self) -> String {
        format!(
            "{SCHEME}${}${}",
            hex::encode(&self.salt),
            hex::encode(self.digest)
        )
    }

    /// Whether `password` produced this hash.
    #[must_use]
    pub fn verify(&self, password: &PlainPassword) -> bool {
        let candidate = digest(&self.salt, password);
        constant_time_eq(&candidate, &self.digest)
    }
}

fn digest(salt: &[u8], password: &PlainPassword) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(**redacted**)")
    }
}
