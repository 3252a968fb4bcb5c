use std::fmt;

use chrono::Utc;
use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::addon::domain::model::enums::addon_domain_error::AddonDomainError;

pub const GENERATED_PASSWORD_LENGTH: usize = 64;

/// Secret for a freshly created tenant account: a SHA-256 digest rendered as
/// 64 lowercase hex characters.
#[derive(Clone, Eq, PartialEq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn generate() -> Self {
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy);

        let mut hasher = Sha256::new();
        hasher.update(Uuid::new_v4().as_bytes());
        hasher.update(b"__");
        hasher.update(Utc::now().timestamp_nanos_opt().unwrap_or_default().to_le_bytes());
        hasher.update(entropy);

        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn new(value: String) -> Result<Self, AddonDomainError> {
        let well_formed = value.len() == GENERATED_PASSWORD_LENGTH
            && value
                .bytes()
                .all(|byte| byte.is_ascii_digit() || (b'a'..=b'f').contains(&byte));

        if !well_formed {
            return Err(AddonDomainError::InvalidGeneratedPassword);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GeneratedPassword(***)")
    }
}
