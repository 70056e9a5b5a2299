//! Startup validation
//!
//! Verifies the execution context before any document is touched: the
//! configured generation backend must answer a cheap probe. A failure here
//! aborts the whole run with setup guidance, so a half-configured machine
//! never produces a batch of silently unmodified documents.

use anyhow::{bail, Result};
use std::time::Duration;

use crate::config::BackendConfig;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Probe the generation backend's model listing endpoint.
pub async fn check_backend(backend: &BackendConfig) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()?;

    let url = format!("{}/api/tags", backend.endpoint.trim_end_matches('/'));
    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => Ok(()),
        Ok(response) => bail!(
            "generation backend at {} answered with status {}",
            backend.endpoint,
            response.status()
        ),
        Err(err) => bail!(
            "generation backend at {} is unreachable: {err}",
            backend.endpoint
        ),
    }
}
