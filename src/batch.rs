//! Batch driver
//!
//! Enumerates the input directory, runs the per-file pipeline (load,
//! rephrase paragraph by paragraph, write), and tallies the outcome. Files
//! are processed strictly one after another; a failure in one file never
//! aborts the batch.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::document::io::{is_docx, output_document_path};
use crate::document::loader::load_source_document;
use crate::document::writer::{build_output_document, save_document};
use crate::rephrase::{rephrase, Paraphraser};

/// Outcome of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files rephrased and saved.
    pub processed: usize,
    /// Files that errored during load, rephrase, or write.
    pub failed: usize,
    /// Directory entries without the supported extension.
    pub skipped: usize,
}

/// Process every supported file in the configured input directory.
///
/// Preconditions (both abort before any file is touched): the input
/// directory must already exist — a freshly created one is an error with
/// instructions — and the output directory must be creatable. Per-file
/// errors are reported, counted, and skipped over.
pub async fn run_batch(config: &Config, paraphraser: &dyn Paraphraser) -> Result<BatchSummary> {
    let (work_list, unsupported) = collect_input_files(&config.input_dir)?;

    let mut summary = BatchSummary {
        skipped: unsupported.len(),
        ..BatchSummary::default()
    };

    for path in &unsupported {
        println!("Skipping unsupported file: {}", display_name(path));
    }

    if work_list.is_empty() {
        println!(
            "No .docx files found in '{}'",
            config.input_dir.display()
        );
        println!(
            "Please place your .docx files in the '{}' directory and run redocx again.",
            config.input_dir.display()
        );
        return Ok(summary);
    }

    println!("Found {} .docx files to process:", work_list.len());
    for path in &work_list {
        println!("- {}", display_name(path));
    }

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory '{}'",
            config.output_dir.display()
        )
    })?;

    for path in &work_list {
        match process_file(path, config, paraphraser).await {
            Ok(output_path) => {
                println!(
                    "Document {} rephrased successfully. Output saved to: {}",
                    display_name(path),
                    output_path.display()
                );
                summary.processed += 1;
            }
            Err(err) => {
                eprintln!("Error processing {}: {err:#}", display_name(path));
                summary.failed += 1;
            }
        }
    }

    println!();
    println!("Processing complete!");
    println!("Successfully processed: {} files", summary.processed);
    if summary.failed > 0 {
        println!("Failed to process: {} files", summary.failed);
    }
    if summary.skipped > 0 {
        println!("Skipped unsupported: {} files", summary.skipped);
    }

    Ok(summary)
}

/// Run the pipeline for a single file and return the output path.
async fn process_file(
    input_path: &Path,
    config: &Config,
    paraphraser: &dyn Paraphraser,
) -> Result<PathBuf> {
    println!("Processing {}...", display_name(input_path));

    let source = load_source_document(input_path)?;

    let total = source.paragraphs.len();
    let mut rephrased = Vec::with_capacity(total);
    for (index, paragraph) in source.paragraphs.iter().enumerate() {
        println!("Processing paragraph {}/{}...", index + 1, total);
        rephrased.push(rephrase(&paragraph.text(), paraphraser, &config.decoding).await);
    }

    let docx = build_output_document(&source, &rephrased);
    let output_path = output_document_path(&config.output_dir, input_path);
    save_document(docx, &output_path)?;

    Ok(output_path)
}

/// Split the input directory into supported work files and skipped entries.
///
/// Unsupported extensions are skips, not failures: they are surfaced to the
/// operator and counted separately so the final tally never hides them.
fn collect_input_files(input_dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    if !input_dir.exists() {
        fs::create_dir_all(input_dir).with_context(|| {
            format!("failed to create input directory '{}'", input_dir.display())
        })?;
        bail!(
            "input directory '{}' did not exist and has been created.\n\
            Place your .docx files there and run redocx again.",
            input_dir.display()
        );
    }

    let mut supported = Vec::new();
    let mut unsupported = Vec::new();
    for entry in fs::read_dir(input_dir)
        .with_context(|| format!("failed to list input directory '{}'", input_dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if is_docx(&path) {
            supported.push(path);
        } else {
            unsupported.push(path);
        }
    }

    supported.sort();
    unsupported.sort();
    Ok((supported, unsupported))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("<unnamed>")
        .to_string()
}
