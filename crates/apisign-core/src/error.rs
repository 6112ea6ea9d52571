//! Error types for signing and verification.
//!
//! All failures are represented by [`SignError`], with one variant per
//! terminal outcome of a sign or check call. Each variant carries a stable
//! numeric code so host applications can map failures onto their own
//! response formats without matching on message text.

/// Errors that can occur while signing or verifying a request.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    /// A required sign parameter is missing or unusable.
    #[error("invalid sign parameters: {0}")]
    Params(String),

    /// The application key was not found in the credential store.
    #[error("app key not found: {0}")]
    AppKeyNotFound(String),

    /// The application key exists but is disabled.
    #[error("app key disabled: {0}")]
    AppKeyDisabled(String),

    /// The application key exists but its expiry is in the past.
    #[error("app key expired: {0}")]
    AppKeyExpired(String),

    /// The recomputed signature does not match the provided one.
    #[error("signature verification failed")]
    SignVerifyFail,

    /// The request timestamp falls outside the freshness window.
    #[error("signature timestamp outside the freshness window")]
    SignTimeout,

    /// An invalid configuration value, such as an unknown algorithm name.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SignError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::Config(_) => 4000,
            Self::Params(_) => 4001,
            Self::AppKeyNotFound(_) => 4002,
            Self::AppKeyDisabled(_) => 4003,
            Self::AppKeyExpired(_) => 4004,
            Self::SignVerifyFail => 4005,
            Self::SignTimeout => 4006,
        }
    }
}

/// Convenience result type for signing operations.
pub type SignResult<T> = Result<T, SignError>;
