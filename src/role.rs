//! Operator role kept in local storage, sealed with a passphrase.
//!
//! The check made here only shapes the UI. The backend enforces the same rule
//! and its 401/403 answer is the one that counts.

use aes_gcm::aead::{rand_core::RngCore, Aead, OsRng};
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use crate::storage::{LocalStorage, StorageError};

pub const ROLE_STORAGE_KEY: &str = "role";
pub const SUPERADMIN: &str = "superadmin";

const ENVELOPE_VERSION: u8 = 1;
const PBKDF2_ITERATIONS: u32 = 10_000;

#[derive(Debug, Error)]
pub enum RoleError {
    #[error("failed to seal role: {0}")]
    Seal(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    v: u8,
    salt: String,
    iv: String,
    data: String,
}

pub struct RoleCipher {
    secret: String,
}

impl RoleCipher {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }

    fn derive_key(&self, salt: &[u8]) -> [u8; 32] {
        let mut key = [0u8; 32];
        pbkdf2_hmac::<Sha256>(self.secret.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
        key
    }

    pub fn seal(&self, role: &str) -> Result<String, RoleError> {
        let mut salt = [0u8; 16];
        OsRng.fill_bytes(&mut salt);
        let mut iv = [0u8; 12];
        OsRng.fill_bytes(&mut iv);

        let key = self.derive_key(&salt);
        let cipher = Aes256Gcm::new_from_slice(&key).map_err(|e| RoleError::Seal(e.to_string()))?;
        let data = cipher
            .encrypt(Nonce::from_slice(&iv), role.as_bytes())
            .map_err(|e| RoleError::Seal(e.to_string()))?;

        let envelope = Envelope {
            v: ENVELOPE_VERSION,
            salt: B64.encode(salt),
            iv: B64.encode(iv),
            data: B64.encode(data),
        };
        let json = serde_json::to_vec(&envelope).map_err(|e| RoleError::Seal(e.to_string()))?;
        Ok(B64.encode(json))
    }

    /// Returns the role, or `None` when the value is malformed, sealed with
    /// another secret, or tampered with.
    pub fn open(&self, sealed: &str) -> Option<String> {
        let json = B64.decode(sealed.trim()).ok()?;
        let envelope: Envelope = serde_json::from_slice(&json).ok()?;
        if envelope.v != ENVELOPE_VERSION {
            return None;
        }
        let salt = B64.decode(&envelope.salt).ok()?;
        let iv = B64.decode(&envelope.iv).ok()?;
        let data = B64.decode(&envelope.data).ok()?;
        if iv.len() != 12 || data.is_empty() {
            return None;
        }
        let key = self.derive_key(&salt);
        let cipher = Aes256Gcm::new_from_slice(&key).ok()?;
        let plain = cipher.decrypt(Nonce::from_slice(&iv), data.as_slice()).ok()?;
        String::from_utf8(plain).ok()
    }
}

/// Reads and unseals the stored role. Anything unreadable counts as no role.
pub fn current_role(storage: &LocalStorage, cipher: &RoleCipher) -> Option<String> {
    match storage.get_item(ROLE_STORAGE_KEY) {
        Ok(Some(sealed)) => {
            let role = cipher.open(&sealed);
            if role.is_none() {
                log::warn!("stored role could not be unsealed");
            }
            role
        }
        Ok(None) => None,
        Err(err) => {
            log::error!("failed to read stored role: {}", err);
            None
        }
    }
}

pub fn store_role(storage: &LocalStorage, cipher: &RoleCipher, role: &str) -> Result<(), RoleError> {
    let sealed = cipher.seal(role)?;
    storage.set_item(ROLE_STORAGE_KEY, &sealed)?;
    Ok(())
}

/// Gates privileged mutations on a single role value.
#[derive(Debug, Clone)]
pub struct RoleGate {
    required: String,
}

impl Default for RoleGate {
    fn default() -> Self {
        Self::new(SUPERADMIN)
    }
}

impl RoleGate {
    pub fn new(required: impl Into<String>) -> Self {
        Self { required: required.into() }
    }

    pub fn allows(&self, role: Option<&str>) -> bool {
        role == Some(self.required.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_then_open() {
        let cipher = RoleCipher::new("s3cret");
        let sealed = cipher.seal(SUPERADMIN).unwrap();
        assert_ne!(sealed, SUPERADMIN);
        assert_eq!(cipher.open(&sealed).as_deref(), Some(SUPERADMIN));
    }

    #[test]
    fn wrong_secret_opens_nothing() {
        let sealed = RoleCipher::new("one").seal("admin").unwrap();
        assert_eq!(RoleCipher::new("two").open(&sealed), None);
    }

    #[test]
    fn plain_text_is_not_a_role() {
        assert_eq!(RoleCipher::new("s").open(SUPERADMIN), None);
        assert_eq!(RoleCipher::new("s").open(""), None);
    }

    #[test]
    fn stored_role_round_trip() {
        let storage = LocalStorage::open_in_memory().unwrap();
        let cipher = RoleCipher::new("k");
        assert_eq!(current_role(&storage, &cipher), None);
        store_role(&storage, &cipher, "admin").unwrap();
        assert_eq!(current_role(&storage, &cipher).as_deref(), Some("admin"));
    }

    #[test]
    fn gate_allows_only_superadmin() {
        let gate = RoleGate::default();
        assert!(gate.allows(Some("superadmin")));
        assert!(!gate.allows(Some("admin")));
        assert!(!gate.allows(Some("SuperAdmin")));
        assert!(!gate.allows(None));
    }
}
