//! Typed configuration for the signing service.
//!
//! The host application loads [`ApiSignConfig`] from wherever it keeps its
//! configuration (a JSON file, an environment layer) and passes it to the
//! service at construction. The library never reads process-global state.

use std::fmt;
use std::str::FromStr;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::credential::AppCredential;
use crate::error::SignError;

/// Digest algorithm used to derive signatures.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// MD5. Only for compatibility with legacy deployments.
    Md5,
    /// SHA-1. Only for compatibility with legacy deployments.
    Sha1,
    /// SHA-256, the default.
    #[default]
    Sha256,
    /// SHA-512.
    Sha512,
}

impl Algorithm {
    /// Compute the lowercase hex digest of `data` with this algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use apisign_core::Algorithm;
    ///
    /// assert_eq!(
    ///     Algorithm::Sha256.digest_hex(b""),
    ///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    /// );
    /// ```
    #[must_use]
    pub fn digest_hex(self, data: &[u8]) -> String {
        match self {
            Self::Md5 => hex::encode(Md5::digest(data)),
            Self::Sha1 => hex::encode(Sha1::digest(data)),
            Self::Sha256 => hex::encode(Sha256::digest(data)),
            Self::Sha512 => hex::encode(Sha512::digest(data)),
        }
    }

    /// The algorithm name as it appears in configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            other => Err(SignError::Config(format!(
                "unsupported digest algorithm: {other}"
            ))),
        }
    }
}

/// Credential store variant selector.
///
/// Adding a store variant means adding a member here and teaching
/// [`build_store`](crate::build_store) how to construct it. Hosts with their
/// own backing store can bypass the selector entirely and hand the service a
/// store instance directly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    /// Fixed in-memory table loaded from [`ApiSignConfig::credentials`].
    #[default]
    Memory,
}

/// Maps the four logical sign fields to the parameter names the host
/// actually receives from headers, query, or body.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FieldMap {
    /// Parameter carrying the application key.
    pub app_key: String,
    /// Parameter carrying the request timestamp, in epoch seconds.
    pub timestamp: String,
    /// Parameter carrying the per-request nonce string.
    pub noncestr: String,
    /// Parameter carrying the signature itself.
    pub signature: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            app_key: "appKey".to_owned(),
            timestamp: "timestamp".to_owned(),
            noncestr: "noncestr".to_owned(),
            signature: "signature".to_owned(),
        }
    }
}

/// Configuration for the signing service. Immutable after load.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ApiSignConfig {
    /// Which credential store variant to build.
    pub driver: DriverKind,
    /// Digest algorithm for signatures.
    pub encrypt: Algorithm,
    /// Freshness window in seconds for inbound timestamps. `0` disables the
    /// check.
    pub timeout: u64,
    /// Table name hint for store-backed drivers.
    pub table: String,
    /// Logical-to-actual field name mapping.
    pub fields: FieldMap,
    /// Credential records consumed by the in-memory store.
    pub credentials: Vec<AppCredential>,
}

impl Default for ApiSignConfig {
    fn default() -> Self {
        Self {
            driver: DriverKind::default(),
            encrypt: Algorithm::default(),
            timeout: 60,
            table: "app_sign".to_owned(),
            fields: FieldMap::default(),
            credentials: Vec::new(),
        }
    }
}
