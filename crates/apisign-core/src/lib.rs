//! Core building blocks for API request signing.
//!
//! This crate provides the foundation shared across the apisign workspace:
//! the typed configuration surface, the application credential model, the
//! pluggable credential store abstraction, and the error taxonomy. The
//! signing and verification flow itself lives in the `apisign` crate.

mod config;
mod credential;
mod error;
mod store;

pub use config::{Algorithm, ApiSignConfig, DriverKind, FieldMap};
pub use credential::{AppCredential, CredentialStatus};
pub use error::{SignError, SignResult};
pub use store::{CredentialStore, StaticCredentialStore, build_store};
