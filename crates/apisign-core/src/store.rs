//! Credential store abstraction and the in-memory reference store.
//!
//! [`CredentialStore`] is the seam between the signer/verifier and whatever
//! actually holds application credentials. Implementations may be backed by
//! a database table, a configuration file, or any other source; the signing
//! flow only ever needs lookup by key.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{ApiSignConfig, DriverKind};
use crate::credential::AppCredential;
use crate::error::{SignError, SignResult};

/// Trait for resolving application credentials by app key.
pub trait CredentialStore: Send + Sync {
    /// Retrieve the credential for `app_key`.
    ///
    /// # Errors
    ///
    /// Returns [`SignError::AppKeyNotFound`] if the key is not recognized.
    fn lookup(&self, app_key: &str) -> SignResult<AppCredential>;
}

/// In-memory credential store built from configured records.
///
/// Lookups are indexed by app key. The store performs no writes after
/// construction, so it is safe to share across threads.
///
/// # Examples
///
/// ```
/// use apisign_core::{AppCredential, CredentialStore, StaticCredentialStore};
///
/// let store = StaticCredentialStore::new(vec![AppCredential {
///     app_key: "1661408635".to_owned(),
///     app_secret: "D81668E7B3F24F4DAB32E5B88EAE27AC".to_owned(),
///     app_name: "default".to_owned(),
///     status: 1.into(),
///     expired_at: None,
/// }]);
///
/// let cred = store.lookup("1661408635").unwrap();
/// assert_eq!(cred.app_secret, "D81668E7B3F24F4DAB32E5B88EAE27AC");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    credentials: HashMap<String, AppCredential>,
}

impl StaticCredentialStore {
    /// Create a store from an iterator of credential records.
    ///
    /// When two records share an app key, the later one wins.
    pub fn new(credentials: impl IntoIterator<Item = AppCredential>) -> Self {
        Self {
            credentials: credentials
                .into_iter()
                .map(|cred| (cred.app_key.clone(), cred))
                .collect(),
        }
    }

    /// Build the store from the `credentials` section of the configuration.
    #[must_use]
    pub fn from_config(config: &ApiSignConfig) -> Self {
        Self::new(config.credentials.iter().cloned())
    }
}

impl CredentialStore for StaticCredentialStore {
    fn lookup(&self, app_key: &str) -> SignResult<AppCredential> {
        self.credentials
            .get(app_key)
            .cloned()
            .ok_or_else(|| SignError::AppKeyNotFound(app_key.to_owned()))
    }
}

/// Construct the credential store selected by `config.driver`.
#[must_use]
pub fn build_store(config: &ApiSignConfig) -> Arc<dyn CredentialStore> {
    match config.driver {
        DriverKind::Memory => Arc::new(StaticCredentialStore::from_config(config)),
    }
}
