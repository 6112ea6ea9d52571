//! End-to-end tests for the apisign workspace.
//!
//! Everything here goes through the public API the way a host application
//! would: load a configuration, build the service, then sign and verify
//! request mappings.

use std::sync::Once;

use apisign::{ApiSignConfig, ApiSignService, AppCredential, CredentialStatus};
use serde_json::{Map, Value, json};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// App key of the default test credential.
pub const APP_KEY: &str = "1661408635";

/// Secret of the default test credential.
pub const APP_SECRET: &str = "D81668E7B3F24F4DAB32E5B88EAE27AC";

/// The default test credential record.
#[must_use]
pub fn test_credential() -> AppCredential {
    AppCredential {
        app_key: APP_KEY.to_owned(),
        app_secret: APP_SECRET.to_owned(),
        app_name: "default".to_owned(),
        status: CredentialStatus::Enabled,
        expired_at: None,
    }
}

/// Configuration holding the default test credential, otherwise defaults.
#[must_use]
pub fn base_config() -> ApiSignConfig {
    ApiSignConfig {
        credentials: vec![test_credential()],
        ..ApiSignConfig::default()
    }
}

/// Service over the base configuration.
#[must_use]
pub fn service() -> ApiSignService {
    init_tracing();
    ApiSignService::new(base_config())
}

/// A minimal valid request mapping with the given timestamp.
#[must_use]
pub fn request_data(timestamp: i64) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert("appKey".to_owned(), json!(APP_KEY));
    data.insert("timestamp".to_owned(), json!(timestamp));
    data.insert("noncestr".to_owned(), json!("abc"));
    data
}

mod test_canonical;
mod test_check;
