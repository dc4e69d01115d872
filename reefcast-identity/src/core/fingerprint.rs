//! Descriptor-based device fingerprinting — the terminal, must-not-fail
//! strategy of the resolver chain.

use crate::core::mac;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The fixed-order set of device/build strings fed to the fingerprint hash.
///
/// Concatenation order is the declared field order and is part of the
/// identity contract: reordering (or renaming a value into a different
/// slot) changes every derived identity on the device. Values come fresh
/// from the platform adapter on each call; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptors {
    /// Hardware manufacturer, e.g. `"Acme"`.
    pub manufacturer: String,
    /// Marketing model name, e.g. `"X1"`.
    pub model: String,
    /// Internal board identifier.
    pub board: String,
    /// Full OS/firmware build fingerprint string.
    pub build_fingerprint: String,
}

impl DeviceDescriptors {
    /// Concatenates the descriptors in contract order.
    fn joined(&self) -> String {
        let mut s = String::with_capacity(
            self.manufacturer.len()
                + self.model.len()
                + self.board.len()
                + self.build_fingerprint.len(),
        );
        s.push_str(&self.manufacturer);
        s.push_str(&self.model);
        s.push_str(&self.board);
        s.push_str(&self.build_fingerprint);
        s
    }
}

/// Derives a deterministic pseudo-MAC from the device descriptors.
///
/// SHA-256 over the concatenated descriptors, hex-encoded, truncated to the
/// first 12 hex digits and formatted as a canonical MAC string. The hash is
/// for stability and shaping only, not a security boundary.
///
/// This function cannot fail: the digest always yields 12 valid hex digits,
/// and a SHA-256 prefix of real descriptor input does not collide with the
/// placeholder addresses in practice. Identical descriptor content and
/// order always produce the identical address.
pub fn fingerprint_mac(descriptors: &DeviceDescriptors) -> String {
    let digest = Sha256::digest(descriptors.joined().as_bytes());
    let prefix = hex::encode(&digest[..6]);

    debug_assert!(mac::canonicalize(&prefix).is_ok());
    format!(
        "{}:{}:{}:{}:{}:{}",
        &prefix[0..2],
        &prefix[2..4],
        &prefix[4..6],
        &prefix[6..8],
        &prefix[8..10],
        &prefix[10..12]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DeviceDescriptors {
        DeviceDescriptors {
            manufacturer: "Acme".to_string(),
            model: "X1".to_string(),
            board: "b1".to_string(),
            build_fingerprint: "f1".to_string(),
        }
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        assert_eq!(fingerprint_mac(&sample()), fingerprint_mac(&sample()));
    }

    #[test]
    fn test_fingerprint_is_canonical_mac_shaped() {
        let re = regex::Regex::new("^([0-9a-f]{2}:){5}[0-9a-f]{2}$").unwrap();
        assert!(re.is_match(&fingerprint_mac(&sample())));
    }

    #[test]
    fn test_fingerprint_sensitive_to_each_descriptor() {
        let base = fingerprint_mac(&sample());

        let mut d = sample();
        d.manufacturer = "Acme2".to_string();
        assert_ne!(fingerprint_mac(&d), base);

        let mut d = sample();
        d.model = "X2".to_string();
        assert_ne!(fingerprint_mac(&d), base);

        let mut d = sample();
        d.board = "b2".to_string();
        assert_ne!(fingerprint_mac(&d), base);

        let mut d = sample();
        d.build_fingerprint = "f2".to_string();
        assert_ne!(fingerprint_mac(&d), base);
    }

    #[test]
    fn test_fingerprint_survives_empty_descriptors() {
        let empty = DeviceDescriptors {
            manufacturer: String::new(),
            model: String::new(),
            board: String::new(),
            build_fingerprint: String::new(),
        };
        let re = regex::Regex::new("^([0-9a-f]{2}:){5}[0-9a-f]{2}$").unwrap();
        assert!(re.is_match(&fingerprint_mac(&empty)));
    }
}
