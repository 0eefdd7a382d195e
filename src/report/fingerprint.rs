use crate::types::result::Message;
use sha2::{Digest, Sha256};

/// Rendering used for a missing rule id, message or line in the hash key.
const ABSENT: &str = "null";

/// Hash function behind issue fingerprints.
pub trait FingerprintHasher: Send + Sync {
    fn digest_hex(&self, input: &[u8]) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl FingerprintHasher for Sha256Hasher {
    fn digest_hex(&self, input: &[u8]) -> String {
        let digest = Sha256::digest(input);
        format!("{digest:x}")
    }
}

/// Fingerprint of one diagnostic, keyed on rule id, message text, file path
/// and line, concatenated without separators.
pub fn compute(hasher: &dyn FingerprintHasher, path: &str, message: &Message) -> String {
    hasher.digest_hex(key(path, message).as_bytes())
}

fn key(path: &str, message: &Message) -> String {
    let line = message
        .line
        .map(|line| line.to_string())
        .unwrap_or_else(|| ABSENT.to_string());
    format!(
        "{}{}{}{}",
        message.rule_id.as_deref().unwrap_or(ABSENT),
        message.message.as_deref().unwrap_or(ABSENT),
        path,
        line
    )
}
