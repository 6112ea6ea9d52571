//! The sign/check service.
//!
//! [`ApiSignService`] owns the immutable configuration and a handle to the
//! credential store, and performs the stateless sign and check operations.
//! Each call is a pure computation over its input mapping plus a read-only
//! credential lookup; the service is safe to share across threads.

use std::fmt;
use std::sync::Arc;

use apisign_core::{
    ApiSignConfig, AppCredential, CredentialStore, SignError, SignResult, build_store,
};
use chrono::{Local, SubsecRound, Utc};
use serde_json::{Map, Value};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::canonical_query_string;

/// Deterministic signer/verifier over request parameter mappings.
#[derive(Clone)]
pub struct ApiSignService {
    config: ApiSignConfig,
    store: Arc<dyn CredentialStore>,
}

impl fmt::Debug for ApiSignService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSignService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiSignService {
    /// Create a service with the store selected by `config.driver`.
    #[must_use]
    pub fn new(config: ApiSignConfig) -> Self {
        let store = build_store(&config);
        Self { config, store }
    }

    /// Create a service around a caller-provided credential store.
    ///
    /// Use this to back lookups with a database or any other source without
    /// touching the signing flow.
    pub fn with_store(config: ApiSignConfig, store: Arc<dyn CredentialStore>) -> Self {
        Self { config, store }
    }

    /// The configuration this service was built with.
    #[must_use]
    pub fn config(&self) -> &ApiSignConfig {
        &self.config
    }

    /// The credential store backing lookups.
    #[must_use]
    pub fn store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }

    /// Derive the signature for `data`.
    ///
    /// The signature field, if present, is ignored. The remaining mapping
    /// is canonicalized, flattened to its query-string form, suffixed with
    /// the application secret, and digested with the configured algorithm.
    /// The caller's mapping is left untouched.
    ///
    /// # Errors
    ///
    /// - [`SignError::Params`] if the app key, timestamp, or noncestr
    ///   parameter is absent or null
    /// - [`SignError::AppKeyNotFound`], [`SignError::AppKeyDisabled`], or
    ///   [`SignError::AppKeyExpired`] from credential resolution
    pub fn sign(&self, data: &Map<String, Value>) -> SignResult<String> {
        let fields = &self.config.fields;

        let mut payload = data.clone();
        payload.remove(&fields.signature);

        for name in [&fields.app_key, &fields.timestamp, &fields.noncestr] {
            if is_missing(payload.get(name)) {
                return Err(SignError::Params(format!("missing {name}")));
            }
        }

        let app_key = payload
            .get(&fields.app_key)
            .and_then(scalar_text)
            .ok_or_else(|| SignError::Params(format!("missing {}", fields.app_key)))?;

        let credential = self.resolve_credential(&app_key)?;

        let canonical = canonical_query_string(&payload);
        debug!(app_key = %app_key, canonical = %canonical, "canonicalized request data");

        let mut input = canonical;
        input.push_str(&credential.app_secret);
        Ok(self.config.encrypt.digest_hex(input.as_bytes()))
    }

    /// Verify the signature carried in `data`.
    ///
    /// The expected signature is recomputed over the same mapping, compared
    /// in constant time, and the timestamp is then checked against the
    /// configured freshness window (`timeout` of `0` disables that check).
    ///
    /// # Errors
    ///
    /// - [`SignError::Params`] if the signature parameter is absent or
    ///   empty, or the timestamp is not numeric
    /// - every failure [`sign`](Self::sign) can produce
    /// - [`SignError::SignVerifyFail`] on signature mismatch
    /// - [`SignError::SignTimeout`] when the timestamp falls outside the
    ///   freshness window
    pub fn check(&self, data: &Map<String, Value>) -> SignResult<()> {
        let fields = &self.config.fields;

        let provided = data
            .get(&fields.signature)
            .filter(|value| !is_falsy(value))
            .ok_or_else(|| SignError::Params(format!("missing {}", fields.signature)))?;

        let expected = self.sign(data)?;

        // A non-string signature value can never match a derived hex digest.
        let matches = provided
            .as_str()
            .is_some_and(|text| bool::from(text.as_bytes().ct_eq(expected.as_bytes())));
        if !matches {
            debug!(expected = %expected, "signature mismatch");
            return Err(SignError::SignVerifyFail);
        }

        if self.config.timeout > 0 {
            let timestamp = data
                .get(&fields.timestamp)
                .and_then(timestamp_seconds)
                .ok_or_else(|| SignError::Params(format!("invalid {}", fields.timestamp)))?;
            let now = Utc::now().timestamp();
            let window = i64::try_from(self.config.timeout).unwrap_or(i64::MAX);
            if timestamp.saturating_add(window) < now || timestamp.saturating_sub(window) > now {
                debug!(timestamp, now, window, "timestamp outside freshness window");
                return Err(SignError::SignTimeout);
            }
        }

        debug!("signature verified");
        Ok(())
    }

    /// Resolve and validate the credential for `app_key`.
    fn resolve_credential(&self, app_key: &str) -> SignResult<AppCredential> {
        let credential = self.store.lookup(app_key)?;
        if !credential.is_enabled() {
            return Err(SignError::AppKeyDisabled(app_key.to_owned()));
        }
        // Expiry is second-resolution wall-clock time.
        let now = Local::now().naive_local().trunc_subsecs(0);
        if credential.is_expired_at(now) {
            return Err(SignError::AppKeyExpired(app_key.to_owned()));
        }
        Ok(credential)
    }
}

/// A parameter is missing when absent or explicitly null.
fn is_missing(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Textual form of a scalar identity value; app keys may arrive as strings
/// or numbers depending on how the host decoded the request.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(num) => Some(num.to_string()),
        _ => None,
    }
}

/// The falsiness rules the deployed host applied to the signature parameter.
#[allow(clippy::float_cmp)]
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(num) => num.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Parse a timestamp parameter as epoch seconds; integers and numeric
/// strings are accepted.
fn timestamp_seconds(value: &Value) -> Option<i64> {
    match value {
        Value::Number(num) => num
            .as_i64()
            .or_else(|| num.as_f64().map(|secs| secs as i64)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(|secs| secs as i64))
        }
        _ => None,
    }
}
