//! The identity resolution strategy chain.
//!
//! Strategies run in fixed priority order; each either yields an accepted
//! canonical address or a [`ProbeError`], and the first acceptance wins.
//! The chain terminates in the descriptor fingerprint, which cannot fail,
//! so [`IdentityResolver::resolve`] never errors and never panics.

use crate::core::mac;
use crate::{fingerprint_mac, PlatformInfo, ProbeError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interface-name prefixes probed as wireless adapters, tried before the
/// ethernet-named ones.
const WIRELESS_PREFIXES: &[&str] = &["wlan", "wl", "wifi"];

/// Interface-name prefixes probed as wired adapters.
const ETHERNET_PREFIXES: &[&str] = &["eth", "en"];

/// The per-install identifier every instance of the reference emulator
/// image reports. Shared across emulators, so it must not seed an identity.
const EMULATOR_INSTALL_ID: &str = "9774d56d682e549c";

/// Which strategy produced a resolved identity.
///
/// Provenance only: no caller-visible behavior differs by source, but it is
/// retained for diagnostics and support tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentitySource {
    /// Hardware address of the connected Wi-Fi adapter.
    WifiHardware,
    /// Hardware address of an enumerated network interface.
    InterfaceHardware,
    /// Direct formatting of the platform's persisted install identifier.
    InstallationIdDerived,
    /// Deterministic hash of the device/build descriptors.
    FingerprintHash,
}

impl fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::WifiHardware => "wifi-hardware",
            Self::InterfaceHardware => "interface-hardware",
            Self::InstallationIdDerived => "installation-id-derived",
            Self::FingerprintHash => "fingerprint-hash",
        };
        f.write_str(s)
    }
}

/// A resolved device identity: a canonical MAC-shaped value plus the
/// strategy that produced it.
///
/// `value` always matches `xx:xx:xx:xx:xx:xx` with lowercase hex octets and
/// is never a placeholder address. For fixed platform signals, repeated
/// resolution yields the same value and source; this stability is what lets
/// the value gate authentication state across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    /// Canonical MAC-shaped identifier.
    pub value: String,
    /// Strategy that produced `value`.
    pub source: IdentitySource,
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.source)
    }
}

/// Resolves a stable, MAC-shaped device identifier from platform signals.
///
/// Holds no mutable state and owns no persistence; each call to
/// [`resolve`](Self::resolve) is an independent computation over freshly
/// read signals. Callers that want to avoid repeated OS probes should cache
/// the returned [`DeviceIdentity`] themselves.
pub struct IdentityResolver<P> {
    platform: P,
}

impl<P: PlatformInfo> IdentityResolver<P> {
    /// Creates a resolver over the given platform adapter.
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Resolves the device identity. Never fails: when every hardware and
    /// install-id probe comes up empty, the descriptor fingerprint supplies
    /// the result.
    pub fn resolve(&self) -> DeviceIdentity {
        let resolved = self
            .wifi_address()
            .map(|value| DeviceIdentity {
                value,
                source: IdentitySource::WifiHardware,
            })
            .or_else(|_| {
                self.named_interface_address().map(|value| DeviceIdentity {
                    value,
                    source: IdentitySource::InterfaceHardware,
                })
            })
            .or_else(|_| {
                self.any_interface_address().map(|value| DeviceIdentity {
                    value,
                    source: IdentitySource::InterfaceHardware,
                })
            })
            .or_else(|_| {
                self.install_id_address().map(|value| DeviceIdentity {
                    value,
                    source: IdentitySource::InstallationIdDerived,
                })
            });

        match resolved {
            Ok(identity) => identity,
            Err(_) => {
                let descriptors = self.platform.device_descriptors();
                DeviceIdentity {
                    value: fingerprint_mac(&descriptors),
                    source: IdentitySource::FingerprintHash,
                }
            }
        }
    }

    /// Strategy 1: the connected Wi-Fi adapter's hardware address.
    fn wifi_address(&self) -> Result<String> {
        if !self.platform.is_wifi_connected() {
            debug!("wifi strategy skipped: not connected");
            return Err(ProbeError::Unavailable);
        }
        let raw = self
            .platform
            .wifi_hardware_address()
            .ok_or(ProbeError::Unavailable)?;
        mac::accept(&raw).map_err(|e| {
            debug!("wifi address rejected: {e}");
            e
        })
    }

    /// Strategy 2: interfaces with conventional wireless names, then
    /// conventional ethernet names.
    fn named_interface_address(&self) -> Result<String> {
        let interfaces = self.platform.network_interfaces();
        for prefixes in [WIRELESS_PREFIXES, ETHERNET_PREFIXES] {
            for iface in &interfaces {
                if !prefixes.iter().any(|p| iface.name.starts_with(p)) {
                    continue;
                }
                if let Some(candidate) = Self::acceptable_address(iface) {
                    return Ok(candidate);
                }
            }
        }
        Err(ProbeError::Unavailable)
    }

    /// Strategy 3: any enumerated interface, in enumeration order.
    fn any_interface_address(&self) -> Result<String> {
        self.platform
            .network_interfaces()
            .iter()
            .find_map(Self::acceptable_address)
            .ok_or(ProbeError::Unavailable)
    }

    /// Strategy 4: direct formatting of the persisted install identifier.
    ///
    /// Not a hash: the id is padded or truncated to twelve characters and
    /// canonicalized, so a non-hex id fails validation and falls through.
    /// Stability across reinstalls is only as good as the underlying
    /// platform id, which generally does not survive one.
    fn install_id_address(&self) -> Result<String> {
        let id = self
            .platform
            .persisted_install_id()
            .ok_or(ProbeError::Unavailable)?;
        if id.is_empty() || id == EMULATOR_INSTALL_ID {
            debug!("install id strategy skipped: absent or emulator default");
            return Err(ProbeError::Unavailable);
        }

        let mut payload: String = id.chars().take(12).collect();
        while payload.len() < 12 {
            payload.push('0');
        }
        mac::accept(&payload).map_err(|e| {
            debug!("install id rejected: {e}");
            e
        })
    }

    fn acceptable_address(iface: &crate::NetworkInterface) -> Option<String> {
        let raw = iface.hardware_address.as_deref()?;
        match mac::accept(raw) {
            Ok(canonical) => Some(canonical),
            Err(e) => {
                debug!("interface {} rejected: {e}", iface.name);
                None
            }
        }
    }
}
