use serde_json::Value;
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest of the UTF-8 bytes of `s`.
pub fn hash_sha256<S: AsRef<str>>(s: S) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_ref().as_bytes());
    hex::encode(hasher.finalize())
}

/// Hashes a dynamically typed value. Only JSON strings are hashed, anything
/// else yields `None`.
pub fn hash_sha256_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(hash_sha256(s)),
        other => {
            tracing::debug!("not a string instance: {}", other);
            None
        }
    }
}
