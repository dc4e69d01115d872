//! Internal domain modules for the Reefcast identity library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod error;
pub mod fingerprint;
pub mod mac;
pub mod provider;
pub mod resolver;

#[doc(inline)]
pub use error::{ProbeError, Result};
#[doc(inline)]
pub use fingerprint::{fingerprint_mac, DeviceDescriptors};
#[doc(inline)]
pub use mac::{NULL_MAC, PRIVACY_MAC};
#[doc(inline)]
pub use provider::{NetworkInterface, PlatformInfo};
#[doc(inline)]
pub use resolver::{DeviceIdentity, IdentityResolver, IdentitySource};
