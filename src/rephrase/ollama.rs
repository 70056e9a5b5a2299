//! Ollama-compatible generation backend
//!
//! Drives a local Ollama-style inference server through its non-streaming
//! `/api/generate` endpoint. The decoding configuration is forwarded in the
//! request options; the length bounds are stated in the prompt since the
//! wire format has no minimum-length knob.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::{DecodingConfig, GenerateError, LengthBounds, Paraphraser};
use crate::config::BackendConfig;

/// Ollama generate response format
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    /// The generated text
    response: String,

    /// Error message if any
    error: Option<String>,
}

pub struct OllamaParaphraser {
    client: Client,
    endpoint: String,
    model: String,
    pace: Duration,
}

impl OllamaParaphraser {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
        pace: Duration,
    ) -> Result<Self, GenerateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerateError::Request(e.to_string()))?;

        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            endpoint,
            model: model.into(),
            pace,
        })
    }

    pub fn from_config(backend: &BackendConfig) -> Result<Self, GenerateError> {
        Self::new(
            backend.endpoint.as_str(),
            backend.model.as_str(),
            Duration::from_secs(backend.timeout_secs),
            Duration::from_millis(backend.pace_ms),
        )
    }

    fn prompt(text: &str, bounds: LengthBounds) -> String {
        format!(
            "Rewrite the following passage in different words while keeping its meaning. \
            Use between {} and {} words. Reply with the rewritten passage only.\n\n{}",
            bounds.min_words.max(1),
            bounds.max_words.max(1),
            text
        )
    }

    async fn request(&self, body: &serde_json::Value) -> Result<String, GenerateError> {
        let url = format!("{}/api/generate", self.endpoint);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| GenerateError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(GenerateError::Backend(error));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::InvalidResponse(e.to_string()))?;

        if let Some(error) = payload.error {
            return Err(GenerateError::Backend(error));
        }

        Ok(payload.response)
    }
}

#[async_trait]
impl Paraphraser for OllamaParaphraser {
    async fn generate(
        &self,
        text: &str,
        bounds: LengthBounds,
        decoding: &DecodingConfig,
    ) -> Result<String, GenerateError> {
        // Decoding knobs the wire format has no name for keep their
        // upstream names; the server ignores options it does not know.
        let body = json!({
            "model": self.model,
            "prompt": Self::prompt(text, bounds),
            "stream": false,
            "options": {
                "temperature": decoding.temperature,
                "top_k": decoding.top_k,
                "top_p": decoding.top_p,
                "repeat_penalty": decoding.repetition_penalty,
                "num_beams": decoding.num_beams,
                "do_sample": decoding.do_sample,
                "length_penalty": decoding.length_penalty,
                "no_repeat_ngram_size": decoding.no_repeat_ngram_size,
            },
        });

        let result = self.request(&body).await;

        // Pacing: one fixed pause per call, successful or not, so a batch
        // never hammers a rate-limited server.
        tokio::time::sleep(self.pace).await;

        result
    }
}
