//! File-backed user store
//!
//! JSON-on-disk list of enrolled users. This is the credential-store
//! collaborator around the OTP engine: it owns persistence of the shared
//! secret, the engine itself never touches a file.

use crate::error::StoreError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::warn;

/// An enrolled user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Account identifier, matched case-insensitively
    pub email: String,

    /// Base64-encoded SHA-256 of the password
    pub password_hash: String,

    /// Base32-encoded shared TOTP secret
    pub totp_secret: String,

    /// Whether login requires an authenticator code
    pub mfa_enabled: bool,
}

impl User {
    /// Create a user, hashing the password on the way in
    pub fn new(email: String, password: &str, totp_secret: String, mfa_enabled: bool) -> Self {
        Self {
            email,
            password_hash: hash_password(password),
            totp_secret,
            mfa_enabled,
        }
    }

    /// Check a password against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        self.password_hash == hash_password(password)
    }
}

/// Demo-grade hash; production credential storage wants argon2 or scrypt
fn hash_password(password: &str) -> String {
    BASE64.encode(Sha256::digest(password.as_bytes()))
}

/// JSON file-backed user list
///
/// Loads once at open; every mutation rewrites the file.
pub struct JsonUserStore {
    path: PathBuf,
    users: Vec<User>,
}

impl JsonUserStore {
    /// Open a store at `path`, loading existing users if the file exists
    ///
    /// A missing or unreadable file starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let users = Self::load(&path);
        Self { path, users }
    }

    fn load(path: &Path) -> Vec<User> {
        if !path.exists() {
            return Vec::new();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(users) => users,
                Err(e) => {
                    warn!(
                        "users file {} is malformed, starting empty: {}",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("could not read users file {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(&self.users)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Find a user by email, case-insensitively
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    pub fn exists(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Insert or replace a user, then persist
    pub fn save(&mut self, user: User) -> Result<(), StoreError> {
        self.users
            .retain(|u| !u.email.eq_ignore_ascii_case(&user.email));
        self.users.push(user);
        self.persist()
    }

    /// Remove a user; returns whether one was removed
    pub fn delete(&mut self, email: &str) -> Result<bool, StoreError> {
        let before = self.users.len();
        self.users.retain(|u| !u.email.eq_ignore_ascii_case(email));

        if self.users.len() != before {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }
}
