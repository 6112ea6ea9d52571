//! Application credential records.
//!
//! Credentials are created and managed by the host's credential source; the
//! library only reads them through the store abstraction.

use chrono::NaiveDateTime;

/// Enabled/disabled state of an application key.
///
/// Serialized as the numeric status column of the backing table: `1` is
/// enabled, any other value is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum CredentialStatus {
    /// Key is disabled; every sign and check call fails.
    Disabled,
    /// Key is active.
    Enabled,
}

impl From<u8> for CredentialStatus {
    fn from(value: u8) -> Self {
        if value == 1 { Self::Enabled } else { Self::Disabled }
    }
}

impl From<CredentialStatus> for u8 {
    fn from(value: CredentialStatus) -> Self {
        match value {
            CredentialStatus::Disabled => 0,
            CredentialStatus::Enabled => 1,
        }
    }
}

/// A single application credential.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppCredential {
    /// Public identifier of the calling application.
    pub app_key: String,
    /// Shared secret used as signing key material.
    pub app_secret: String,
    /// Human-readable application name.
    #[serde(default)]
    pub app_name: String,
    /// Enabled/disabled status.
    pub status: CredentialStatus,
    /// Absolute expiry at second resolution; `None` never expires.
    #[serde(default, with = "expiry_format")]
    pub expired_at: Option<NaiveDateTime>,
}

impl AppCredential {
    /// Whether the key is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.status == CredentialStatus::Enabled
    }

    /// Whether the key is expired as of `now`.
    ///
    /// A key expires when its expiry is strictly earlier than `now`; a key
    /// expiring exactly at `now` is still valid for that second.
    #[must_use]
    pub fn is_expired_at(&self, now: NaiveDateTime) -> bool {
        self.expired_at.is_some_and(|expiry| expiry < now)
    }
}

/// Serde adapter for the `"YYYY-MM-DD HH:MM:SS"` expiry format used by the
/// credential source.
mod expiry_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(expiry) => serializer.serialize_str(&expiry.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|text| {
                NaiveDateTime::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
            })
            .transpose()
    }
}
