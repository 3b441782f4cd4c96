//! Per-request API key resolution.
//!
//! Probe order: local env var, then Google Secret Manager over REST. Probes
//! never propagate their failures — an unavailable provider logs and yields
//! nothing, and only the terminal "no key from anywhere" case is an error,
//! surfaced by the caller. Resolution runs fresh on every request so a
//! rotated key is picked up without a restart.

use std::env;
use std::time::Duration;

use anyhow::Context;
use base64::Engine as _;

use crate::config::Config;

const API_KEY_ENV: &str = "OPENAI_API_KEY";
const SECRET_NAME: &str = "openai-api-key";
const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

pub async fn resolve_api_key(config: &Config) -> Option<String> {
    if config.functions_emulator {
        // Local emulator: the key comes from the environment (.env is loaded
        // at startup) or not at all.
        match env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Some(key),
            _ => {
                tracing::error!("OPENAI_API_KEY is not set in the local emulator environment");
                None
            }
        }
    } else {
        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.is_empty() {
                tracing::info!("Using API key from environment variable");
                return Some(key);
            }
        }

        tracing::info!(
            project_id = %config.google_cloud_project,
            "Trying to fetch API key from Secret Manager"
        );
        match fetch_from_secret_manager(&config.google_cloud_project).await {
            Ok(key) => Some(key),
            Err(e) => {
                tracing::error!(error = %e, "Unable to obtain OpenAI API key");
                None
            }
        }
    }
}

/// Access `projects/{project}/secrets/openai-api-key/versions/latest` through
/// the Secret Manager REST API, authenticating with the GCE metadata server.
async fn fetch_from_secret_manager(project_id: &str) -> anyhow::Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let token: serde_json::Value = client
        .get(METADATA_TOKEN_URL)
        .header("Metadata-Flavor", "Google")
        .send()
        .await
        .context("metadata server unreachable")?
        .error_for_status()?
        .json()
        .await?;
    let access_token = token["access_token"]
        .as_str()
        .context("metadata server returned no access token")?;

    let url = format!(
        "https://secretmanager.googleapis.com/v1/projects/{project_id}/secrets/{SECRET_NAME}/versions/latest:access"
    );
    let secret: serde_json::Value = client
        .get(&url)
        .bearer_auth(access_token)
        .send()
        .await
        .context("Secret Manager unreachable")?
        .error_for_status()
        .context("Secret Manager rejected the request")?
        .json()
        .await?;

    let data = secret["payload"]["data"]
        .as_str()
        .context("secret version has no payload")?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(data)
        .context("secret payload is not valid base64")?;
    let key = String::from_utf8(bytes).context("secret payload is not UTF-8")?;

    Ok(key.trim().to_string())
}
