//! redocx: Batch rephrasing tool for .docx files
//!
//! This library provides functionality for reading Microsoft Word documents,
//! rewriting their paragraph text through an external text-generation model,
//! and writing new documents that preserve the original formatting.

pub mod batch;
pub mod config;
pub mod document;
pub mod preflight;
pub mod rephrase;

// Re-export commonly used types
pub use batch::{run_batch, BatchSummary};
pub use config::{BackendConfig, Config};
pub use document::{load_source_document, SourceDocument};
pub use rephrase::{DecodingConfig, LengthBounds, Paraphraser};
