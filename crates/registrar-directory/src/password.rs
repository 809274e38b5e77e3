// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Password hashing and confirmation.
//!
//! Stored passwords are the base64 encoding of their SHA-256 digest, the
//! same form the record files carry.

use crate::error::DirectoryError;
use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

/// Returns the base64-encoded SHA-256 digest of `password`.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    STANDARD.encode(digest)
}

/// Checks that a password and its confirmation are non-empty and equal,
/// and returns the hash to store.
pub fn confirm_password(password: &str, repeat: &str) -> Result<String, DirectoryError> {
    if password.is_empty() || repeat.is_empty() {
        return Err(DirectoryError::InvalidPassword);
    }
    let hash = hash_password(password);
    if hash != hash_password(repeat) {
        return Err(DirectoryError::PasswordMismatch);
    }
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_base64_sha256() {
        assert_eq!(
            hash_password("pw"),
            "MMlS+rEiw/l1nwKm2Vw3WLJGtP7iOZV7LU/uRuJhcMQ="
        );
        assert_eq!(hash_password("pw"), hash_password("pw"));
        assert_ne!(hash_password("pw"), hash_password("pW"));
    }

    #[test]
    fn test_confirm_password() {
        assert_eq!(confirm_password("pw", "pw").unwrap(), hash_password("pw"));
        assert!(matches!(
            confirm_password("", "pw"),
            Err(DirectoryError::InvalidPassword)
        ));
        assert!(matches!(
            confirm_password("pw", ""),
            Err(DirectoryError::InvalidPassword)
        ));
        assert!(matches!(
            confirm_password("pw", "px"),
            Err(DirectoryError::PasswordMismatch)
        ));
    }
}
