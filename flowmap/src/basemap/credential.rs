//! Mapbox credential lookup.
//!
//! The credential is resolved once during startup and handed to
//! [`BasemapSelector`](super::BasemapSelector). A missing credential is the
//! normal case and is never an error.

use tracing::debug;

use crate::config::ConfigFile;

/// Environment variable holding the Mapbox access token.
pub const MAPBOX_API_KEY_ENV: &str = "MAPBOX_API_KEY";

/// Where a credential was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    ConfigFile,
}

/// Pick the first non-blank credential, environment first.
pub fn resolve_credential(
    env_value: Option<String>,
    stored_value: Option<&str>,
) -> Option<(String, CredentialSource)> {
    let from_env = env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(|v| (v, CredentialSource::Environment));

    from_env.or_else(|| {
        stored_value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| (v.to_string(), CredentialSource::ConfigFile))
    })
}

/// Resolve the Mapbox credential from `MAPBOX_API_KEY` or the config file.
pub fn mapbox_credential(config: &ConfigFile) -> Option<String> {
    let resolved = resolve_credential(
        std::env::var(MAPBOX_API_KEY_ENV).ok(),
        config.basemap.mapbox_api_key.as_deref(),
    );

    match &resolved {
        Some((_, source)) => debug!(?source, "Mapbox credential found"),
        None => debug!("No Mapbox credential found"),
    }

    resolved.map(|(key, _)| key)
}
