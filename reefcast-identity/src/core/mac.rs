//! Canonical MAC-shaped identifier formatting and validation.
//!
//! Every candidate the resolver considers passes through [`accept`]:
//! canonicalization into the lowercase colon-separated six-octet form,
//! then rejection of the placeholder values some OS APIs report instead
//! of a real hardware address.

use crate::{ProbeError, Result};

/// The all-zero address, reported by APIs that have no address to give.
pub const NULL_MAC: &str = "00:00:00:00:00:00";

/// The generic address the OS substitutes when hardware MAC access is
/// privacy-restricted. Syntactically valid, shared by every device on such
/// an OS build, so accepting it would collapse many devices onto one
/// identity.
pub const PRIVACY_MAC: &str = "02:00:00:00:00:00";

/// Normalizes a raw MAC-like string into `xx:xx:xx:xx:xx:xx` form.
///
/// Accepts colon-separated, dash-separated, or bare 12-digit hex input in
/// either case. Anything whose hex payload is not exactly twelve hex digits
/// is rejected as [`ProbeError::InvalidFormat`].
pub fn canonicalize(raw: &str) -> Result<String> {
    let payload: String = raw.chars().filter(|c| *c != ':' && *c != '-').collect();

    if payload.len() != 12 || !payload.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ProbeError::InvalidFormat(raw.to_string()));
    }

    let payload = payload.to_ascii_lowercase();
    let octets: Vec<&str> = (0..6).map(|i| &payload[i * 2..i * 2 + 2]).collect();
    Ok(octets.join(":"))
}

/// Rejects canonical values known to carry no device-distinguishing
/// information.
pub fn reject_placeholder(canonical: &str) -> Result<()> {
    if canonical == NULL_MAC || canonical == PRIVACY_MAC {
        return Err(ProbeError::PlaceholderRejected(canonical.to_string()));
    }
    Ok(())
}

/// Full candidate validation: canonicalize, then reject placeholders.
pub fn accept(raw: &str) -> Result<String> {
    let canonical = canonicalize(raw)?;
    reject_placeholder(&canonical)?;
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_colon_separated() {
        assert_eq!(
            canonicalize("AA:BB:CC:DD:EE:FF").unwrap(),
            "aa:bb:cc:dd:ee:ff"
        );
    }

    #[test]
    fn test_canonicalize_dash_separated() {
        assert_eq!(
            canonicalize("aa-bb-cc-dd-ee-ff").unwrap(),
            "aa:bb:cc:dd:ee:ff"
        );
    }

    #[test]
    fn test_canonicalize_bare_hex() {
        assert_eq!(canonicalize("0123456789ab").unwrap(), "01:23:45:67:89:ab");
    }

    #[test]
    fn test_canonicalize_rejects_short_payload() {
        assert!(matches!(
            canonicalize("aa:bb:cc:dd:ee"),
            Err(ProbeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_canonicalize_rejects_long_payload() {
        assert!(matches!(
            canonicalize("aa:bb:cc:dd:ee:ff:00"),
            Err(ProbeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_canonicalize_rejects_non_hex() {
        assert!(matches!(
            canonicalize("gg:bb:cc:dd:ee:ff"),
            Err(ProbeError::InvalidFormat(_))
        ));
        assert!(matches!(
            canonicalize(""),
            Err(ProbeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_reject_null_mac() {
        assert!(matches!(
            accept("00:00:00:00:00:00"),
            Err(ProbeError::PlaceholderRejected(_))
        ));
        // Separator and case variants normalize to the same placeholder.
        assert!(accept("00-00-00-00-00-00").is_err());
        assert!(accept("000000000000").is_err());
    }

    #[test]
    fn test_reject_privacy_mac() {
        assert!(matches!(
            accept("02:00:00:00:00:00"),
            Err(ProbeError::PlaceholderRejected(_))
        ));
    }

    #[test]
    fn test_accept_real_address() {
        assert_eq!(accept("F4-5C-89-9B-12-30").unwrap(), "f4:5c:89:9b:12:30");
    }
}
