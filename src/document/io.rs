//! File I/O operations and validation
//!
//! This module handles input file validation and output path naming.

use anyhow::{bail, Result};
use chrono::Local;
use std::fs::File;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// True when the path carries the supported `.docx` extension.
pub fn is_docx(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("docx"))
        .unwrap_or(false)
}

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    // Check file extension
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        bail!(
            "Unsupported file format: .{}\n\
            redocx only supports Word .docx files (not .doc, .xlsx, .zip, etc.)",
            extension
        );
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            bail!(
                "This appears to be an Excel file (.xlsx).\n\
                redocx only supports Word documents (.docx)."
            );
        }

        bail!(
            "Invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document."
        );
    }

    Ok(())
}

/// Output path for a rephrased document:
/// `<output_dir>/rephrased_<stem>_<YYYYMMDD_HHMMSS>.docx`.
pub fn output_document_path(output_dir: &Path, input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    output_dir.join(format!("rephrased_{stem}_{timestamp}.docx"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use regex::Regex;

    #[test]
    fn test_is_docx() {
        assert!(is_docx(Path::new("input/report.docx")));
        assert!(is_docx(Path::new("input/REPORT.DOCX")));
        assert!(!is_docx(Path::new("input/report.doc")));
        assert!(!is_docx(Path::new("input/notes.txt")));
        assert!(!is_docx(Path::new("input/no-extension")));
    }

    #[test]
    fn test_output_document_path_pattern() {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^rephrased_report_\d{8}_\d{6}\.docx$").unwrap());

        let path = output_document_path(Path::new("output"), Path::new("input/report.docx"));
        assert_eq!(path.parent(), Some(Path::new("output")));

        let name = path.file_name().and_then(|n| n.to_str()).unwrap();
        assert!(PATTERN.is_match(name), "unexpected output name: {name}");
    }

    #[test]
    fn test_validate_rejects_wrong_extension() {
        let err = validate_docx_file(Path::new("notes.txt")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }
}
