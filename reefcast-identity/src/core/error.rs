//! Error types for the Reefcast identity library.

use thiserror::Error;

/// Why a single resolution strategy failed to produce an accepted candidate.
///
/// None of these are resolution failures: the strategy chain always
/// terminates in the descriptor fingerprint, which cannot fail, so
/// [`crate::IdentityResolver::resolve`] has no error path. `Unavailable` is
/// the expected outcome for most strategies on most devices and is never
/// logged above `debug` level.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The strategy could not produce a candidate at all (no connection,
    /// empty interface list, missing install id, restricted OS API).
    #[error("probe unavailable")]
    Unavailable,

    /// A candidate was produced but is not a well-formed six-octet address.
    #[error("not a valid MAC-shaped value: {0}")]
    InvalidFormat(String),

    /// A candidate was well-formed but matches a known placeholder that
    /// carries no device-distinguishing information.
    #[error("placeholder address rejected: {0}")]
    PlaceholderRejected(String),
}

/// Convenience alias that pins the error type to [`ProbeError`].
pub type Result<T> = std::result::Result<T, ProbeError>;
