//! Deterministic API request signing and verification.
//!
//! Given a request's parameters as a JSON mapping, this crate derives a
//! signature from a per-application secret and verifies inbound signatures
//! against a configurable freshness window.
//!
//! # Overview
//!
//! A signature is the hex digest of the request's canonical query-string
//! form with the application secret appended. Canonicalization sorts every
//! mapping by key at every nesting level, so signer and verifier agree on
//! the representation no matter what order parameters arrived in. The
//! application secret is resolved through a pluggable credential store
//! keyed by app key; verification additionally rejects timestamps outside
//! the configured window.
//!
//! # Usage
//!
//! ```rust
//! use apisign::{ApiSignConfig, ApiSignService, AppCredential, CredentialStatus};
//! use serde_json::{Map, json};
//!
//! let config = ApiSignConfig {
//!     credentials: vec![AppCredential {
//!         app_key: "1661408635".to_owned(),
//!         app_secret: "D81668E7B3F24F4DAB32E5B88EAE27AC".to_owned(),
//!         app_name: "default".to_owned(),
//!         status: CredentialStatus::Enabled,
//!         expired_at: None,
//!     }],
//!     ..ApiSignConfig::default()
//! };
//! let service = ApiSignService::new(config);
//!
//! let mut data = Map::new();
//! data.insert("appKey".to_owned(), json!("1661408635"));
//! data.insert("timestamp".to_owned(), json!(chrono::Utc::now().timestamp()));
//! data.insert("noncestr".to_owned(), json!("abc"));
//!
//! let signature = service.sign(&data)?;
//! data.insert("signature".to_owned(), json!(signature));
//! service.check(&data)?;
//! # Ok::<(), apisign::SignError>(())
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - deterministic canonicalization and query-string
//!   serialization
//! - [`service`] - the sign/check service

pub mod canonical;
pub mod service;

pub use apisign_core::{
    Algorithm, ApiSignConfig, AppCredential, CredentialStatus, CredentialStore, DriverKind,
    FieldMap, SignError, SignResult, StaticCredentialStore, build_store,
};
pub use canonical::{canonical_query_string, sort_data};
pub use service::ApiSignService;
