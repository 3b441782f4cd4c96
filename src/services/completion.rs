//! OpenAI chat-completion client. Exactly one attempt per request; failures
//! surface to the handler as a 500 with the stringified cause. The API key is
//! sent only as the auth header and never echoed into error messages.

use std::time::Duration;

use crate::config::Config;
use crate::services::prompt::SYSTEM_PERSONA;

pub async fn generate_analysis(
    config: &Config,
    api_key: &str,
    prompt: &str,
) -> anyhow::Result<String> {
    // 30-second timeout so a stalled upstream can't hold the request until
    // the platform deadline kills it.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = client
        .post(&config.openai_api_url)
        .bearer_auth(api_key)
        .json(&serde_json::json!({
            "model": config.openai_model,
            "messages": [
                { "role": "system", "content": SYSTEM_PERSONA },
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.8,
            "max_tokens": 600,
            "top_p": 0.95,
            "frequency_penalty": 0.5,
            "presence_penalty": 0.5,
        }))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("OpenAI API error {}: {}", status, body);
    }

    let body: serde_json::Value = response.json().await?;
    extract_analysis(&body)
        .ok_or_else(|| anyhow::anyhow!("OpenAI response contained no message content"))
}

/// First choice's message content, trimmed.
fn extract_analysis(body: &serde_json::Value) -> Option<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.trim().to_string())
}
