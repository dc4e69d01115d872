//! The platform contract the resolver probes for raw identity signals.

use crate::DeviceDescriptors;
use serde::{Deserialize, Serialize};

/// One enumerated network interface, as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterface {
    /// OS interface name, e.g. `"wlan0"` or `"eth0"`.
    pub name: String,
    /// Raw hardware address in whatever shape the OS reports it, or `None`
    /// when the interface has no address or the OS withholds it.
    pub hardware_address: Option<String>,
}

/// Raw device signals supplied by a platform adapter.
///
/// One implementation exists per platform (set-top OS, smart-TV web
/// runtime, desktop host); the resolver core is parameterized over this
/// trait and contains all shared priority and validation logic.
///
/// All methods are synchronous, read-only probes. Implementations must
/// absorb their own OS errors — a permission denial or null interface list
/// becomes `None` or an empty `Vec`, never a panic. In particular, on OS
/// builds that privacy-restrict MAC visibility, [`wifi_hardware_address`]
/// must return `None` rather than the OS's generic placeholder; the
/// resolver's placeholder rejection is a second line of defense, not the
/// primary mechanism.
///
/// Some of these probes are documented as expensive or disk-touching on
/// their host OS, so callers should resolve off their UI thread.
///
/// [`wifi_hardware_address`]: PlatformInfo::wifi_hardware_address
pub trait PlatformInfo {
    /// Whether the device currently has an active Wi-Fi connection.
    fn is_wifi_connected(&self) -> bool;

    /// The Wi-Fi adapter's hardware address. Only meaningful while
    /// connected; may legitimately be a placeholder value.
    fn wifi_hardware_address(&self) -> Option<String>;

    /// All enumerated network interfaces, in OS enumeration order.
    fn network_interfaces(&self) -> Vec<NetworkInterface>;

    /// The platform's persisted per-install identifier, if one exists.
    /// Generally does not survive a reinstall or factory reset.
    fn persisted_install_id(&self) -> Option<String>;

    /// Device/build descriptor strings for the fingerprint fallback.
    fn device_descriptors(&self) -> DeviceDescriptors;
}
