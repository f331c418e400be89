//! Ollama language model backend.

use crate::collaborators::LanguageModel;
use crate::config::OllamaConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Local generation can be slow; completion calls block until the model
// finishes or this elapses.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Blocking client for Ollama's /api/generate endpoint
pub struct OllamaClient {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    /// Create a client from connection settings
    pub fn new(config: &OllamaConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Check whether the server answers at all
    pub fn is_available(&self) -> bool {
        self.client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(Duration::from_secs(2))
            .send()
            .map(|resp| resp.status().is_success())
            .unwrap_or(false)
    }
}

impl LanguageModel for OllamaClient {
    fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        log::debug!("Sending completion request to {url} (model={})", self.model);

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()?
            .error_for_status()?;

        let body: GenerateResponse = response.json()?;
        Ok(body.response)
    }
}
