//! HTTP transport construction
//!
//! The trust policy comes from the external platform verifier; this module
//! never assembles certificate configuration itself. The contract is "give
//! me a transport that already enforces the platform's declared trust
//! policy".

use std::time::Duration;

use bookworm_core::prelude::*;
use rustls::ClientConfig;
use rustls_platform_verifier::ConfigVerifierExt;

use crate::config::SearchSettings;

const USER_AGENT: &str = concat!("bookworm/", env!("CARGO_PKG_VERSION"));

/// Build the shared [`reqwest::Client`] used for all search requests.
///
/// Certificate verification is delegated to the operating system's verifier
/// via `rustls-platform-verifier`. The only tuning applied here is an
/// optional overall timeout from settings; when unset, the transport's
/// defaults stand.
///
/// # Errors
///
/// Returns [`Error::Config`] if the client cannot be constructed.
pub fn build_client(settings: &SearchSettings) -> Result<reqwest::Client> {
    let tls = ClientConfig::with_platform_verifier();

    let mut builder = reqwest::Client::builder()
        .use_preconfigured_tls(tls)
        .user_agent(USER_AGENT);

    if let Some(secs) = settings.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_settings() {
        let client = build_client(&SearchSettings::default());
        assert!(client.is_ok());
    }

    #[test]
    fn builds_with_timeout() {
        let settings = SearchSettings {
            timeout_secs: Some(10),
            ..Default::default()
        };
        assert!(build_client(&settings).is_ok());
    }
}
