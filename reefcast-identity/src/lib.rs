//! Device identity resolution for the Reefcast streaming client.
//!
//! Modern TV and mobile platforms give applications no reliable,
//! privacy-unrestricted hardware MAC address, yet the Reefcast backend
//! keys authentication and entitlements on a MAC-shaped device
//! identifier. This crate derives one: an ordered chain of strategies
//! probes real hardware addresses first and falls back to a deterministic
//! descriptor fingerprint, so resolution always succeeds and, for fixed
//! device signals, always yields the same value.
//!
//! The primary entry point is [`IdentityResolver`], parameterized by a
//! platform adapter implementing [`PlatformInfo`]. The `reefcast-host`
//! crate supplies the adapter for desktop/embedded-Linux hosts; TV
//! builds ship their own.
//!
//! Types are re-exported from their respective sub-modules for
//! convenience; consumers should import from the crate root rather than
//! the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    error::{ProbeError, Result},
    fingerprint::{fingerprint_mac, DeviceDescriptors},
    mac::{NULL_MAC, PRIVACY_MAC},
    provider::{NetworkInterface, PlatformInfo},
    resolver::{DeviceIdentity, IdentityResolver, IdentitySource},
};
