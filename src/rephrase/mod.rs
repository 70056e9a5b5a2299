//! Paraphrasing capability
//!
//! The boundary between the document pipeline and the external
//! text-generation model. The pipeline only ever sees the [`Paraphraser`]
//! trait and the [`rephrase`] adapter, so tests substitute deterministic
//! stubs and backends can be swapped without touching document code.

mod ollama;

pub use ollama::OllamaParaphraser;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by generation backends.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("request to generation backend failed: {0}")]
    Request(String),

    #[error("generation backend returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("generation backend reported an error: {0}")]
    Backend(String),
}

/// Fixed decoding configuration forwarded to the generation backend.
///
/// These are opaque hyperparameters controlling the model's
/// determinism/diversity trade-off; the pipeline never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodingConfig {
    pub num_beams: u32,
    pub do_sample: bool,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    pub length_penalty: f32,
    pub no_repeat_ngram_size: u32,
}

impl Default for DecodingConfig {
    fn default() -> Self {
        Self {
            num_beams: 5,
            do_sample: true,
            temperature: 0.6,
            top_k: 50,
            top_p: 0.95,
            repetition_penalty: 2.5,
            length_penalty: 1.0,
            no_repeat_ngram_size: 3,
        }
    }
}

/// Target word-count bounds derived from the input text: 0.8x-1.2x of its
/// word count. Prevents degenerate over-compression or runaway expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min_words: usize,
    pub max_words: usize,
}

impl LengthBounds {
    pub fn for_text(text: &str) -> Self {
        let words = text.split_whitespace().count();
        Self {
            min_words: (words as f32 * 0.8) as usize,
            max_words: (words as f32 * 1.2) as usize,
        }
    }
}

/// The external text-generation capability: text in, text out.
///
/// Implementations own their pacing policy; the shipped backend sleeps a
/// configured duration after each call to stay under external rate limits.
#[async_trait]
pub trait Paraphraser: Send + Sync {
    async fn generate(
        &self,
        text: &str,
        bounds: LengthBounds,
        decoding: &DecodingConfig,
    ) -> Result<String, GenerateError>;
}

/// Rephrase one paragraph's text, degrading gracefully.
///
/// Empty or whitespace-only input is returned unchanged. Any backend
/// failure is reported and the original text is returned; this function
/// never propagates an error upward.
pub async fn rephrase(text: &str, paraphraser: &dyn Paraphraser, decoding: &DecodingConfig) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let bounds = LengthBounds::for_text(text);
    match paraphraser.generate(text, bounds, decoding).await {
        Ok(rephrased) => rephrased.trim().to_string(),
        Err(err) => {
            eprintln!("Error rephrasing text: {err}");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(&'static str);

    #[async_trait]
    impl Paraphraser for Canned {
        async fn generate(
            &self,
            _text: &str,
            _bounds: LengthBounds,
            _decoding: &DecodingConfig,
        ) -> Result<String, GenerateError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl Paraphraser for Failing {
        async fn generate(
            &self,
            _text: &str,
            _bounds: LengthBounds,
            _decoding: &DecodingConfig,
        ) -> Result<String, GenerateError> {
            Err(GenerateError::Request("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_blank_input_returned_unchanged() {
        let decoding = DecodingConfig::default();
        let stub = Canned("should never be used");

        assert_eq!(rephrase("", &stub, &decoding).await, "");
        assert_eq!(rephrase("   ", &stub, &decoding).await, "   ");
        assert_eq!(rephrase("\t\n", &stub, &decoding).await, "\t\n");
    }

    #[tokio::test]
    async fn test_backend_output_is_trimmed() {
        let decoding = DecodingConfig::default();
        let stub = Canned("  A fast brown fox runs.\n");

        let out = rephrase("The quick brown fox.", &stub, &decoding).await;
        assert_eq!(out, "A fast brown fox runs.");
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back_to_original() {
        let decoding = DecodingConfig::default();

        let out = rephrase("The quick brown fox.", &Failing, &decoding).await;
        assert_eq!(out, "The quick brown fox.");
    }

    #[test]
    fn test_length_bounds() {
        let bounds = LengthBounds::for_text("one two three four five six seven eight nine ten");
        assert_eq!(bounds.min_words, 8);
        assert_eq!(bounds.max_words, 12);

        let short = LengthBounds::for_text("word");
        assert_eq!(short.min_words, 0);
        assert_eq!(short.max_words, 1);
    }

    #[test]
    fn test_decoding_defaults() {
        let decoding = DecodingConfig::default();
        assert_eq!(decoding.num_beams, 5);
        assert!(decoding.do_sample);
        assert_eq!(decoding.temperature, 0.6);
        assert_eq!(decoding.top_k, 50);
        assert_eq!(decoding.top_p, 0.95);
        assert_eq!(decoding.repetition_penalty, 2.5);
        assert_eq!(decoding.length_penalty, 1.0);
        assert_eq!(decoding.no_repeat_ngram_size, 3);
    }
}
