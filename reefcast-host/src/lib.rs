//! Desktop/embedded-Linux platform adapter for Reefcast device identity.
//!
//! Implements [`PlatformInfo`] with real OS probes: `pnet` datalink for
//! interface enumeration, the `mac_address` crate for adapter addresses,
//! DMI sysfs entries for device descriptors, and a config-dir file for the
//! per-install identifier. TV and set-top builds ship their own adapters;
//! this one backs development hosts and the Linux-based reference player.

use log::debug;
use pnet::datalink;
use reefcast_identity::{DeviceDescriptors, NetworkInterface, PlatformInfo};
use std::env;
use std::fs;
use std::path::PathBuf;

fn is_wireless_name(name: &str) -> bool {
    name.starts_with("wlan") || name.starts_with("wl") || name.starts_with("wifi")
}

/// Platform adapter for desktop and embedded-Linux hosts.
///
/// All probes absorb their own OS errors into `None`/empty returns, per the
/// [`PlatformInfo`] contract; nothing here panics or propagates an error.
pub struct HostPlatform {
    install_id_path: Option<PathBuf>,
}

impl HostPlatform {
    /// Creates an adapter using the standard per-user config location for
    /// the install identifier.
    pub fn new() -> Self {
        Self {
            install_id_path: dirs::config_dir().map(|d| d.join("reefcast").join("install-id")),
        }
    }

    /// Creates an adapter that persists the install identifier at `path`.
    pub fn with_install_id_path(path: PathBuf) -> Self {
        Self {
            install_id_path: Some(path),
        }
    }

    /// Reads the persisted install id, creating one on first use — the
    /// host-side stand-in for the OS-owned per-install identifier. Does
    /// not survive removal of the config directory, which mirrors the
    /// reinstall behavior of the TV platforms.
    fn read_or_create_install_id(&self) -> Option<String> {
        let path = self.install_id_path.as_ref()?;

        if let Ok(existing) = fs::read_to_string(path) {
            let existing = existing.trim();
            if !existing.is_empty() {
                return Some(existing.to_string());
            }
        }

        let fresh = uuid::Uuid::new_v4().simple().to_string();
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return None;
            }
        }
        match fs::write(path, &fresh) {
            Ok(()) => Some(fresh),
            Err(e) => {
                debug!("could not persist install id: {e}");
                None
            }
        }
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformInfo for HostPlatform {
    fn is_wifi_connected(&self) -> bool {
        datalink::interfaces()
            .iter()
            .any(|i| is_wireless_name(&i.name) && i.is_up() && !i.ips.is_empty())
    }

    fn wifi_hardware_address(&self) -> Option<String> {
        let iface = datalink::interfaces()
            .into_iter()
            .find(|i| is_wireless_name(&i.name) && i.is_up())?;

        // Prefer the dedicated OS lookup; fall back to what datalink saw.
        match mac_address::mac_address_by_name(&iface.name) {
            Ok(Some(mac)) => Some(mac.to_string()),
            _ => iface.mac.map(|m| m.to_string()),
        }
    }

    fn network_interfaces(&self) -> Vec<NetworkInterface> {
        datalink::interfaces()
            .into_iter()
            .filter(|i| !i.is_loopback())
            .map(|i| NetworkInterface {
                name: i.name.clone(),
                hardware_address: i.mac.map(|m| m.to_string()),
            })
            .collect()
    }

    fn persisted_install_id(&self) -> Option<String> {
        self.read_or_create_install_id()
    }

    fn device_descriptors(&self) -> DeviceDescriptors {
        let host = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_default();

        DeviceDescriptors {
            manufacturer: dmi_field("sys_vendor"),
            model: dmi_field("product_name"),
            board: dmi_field("board_name"),
            build_fingerprint: format!("{}/{}/{}", env::consts::OS, env::consts::ARCH, host),
        }
    }
}

/// Reads one DMI identity field, or empty when the platform has none.
#[cfg(target_os = "linux")]
fn dmi_field(name: &str) -> String {
    fs::read_to_string(format!("/sys/class/dmi/id/{name}"))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

#[cfg(not(target_os = "linux"))]
fn dmi_field(_name: &str) -> String {
    String::new()
}
