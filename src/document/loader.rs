//! Document loading
//!
//! This module contains the `load_source_document()` function that parses a
//! DOCX file into our internal `SourceDocument` representation: non-blank
//! paragraphs with per-run formatting, the named style set, and the section
//! geometry the writer copies onto the output document.

use anyhow::{Context, Result};
use std::path::Path;

use super::fields;
use super::io::validate_docx_file;
use super::models::*;

/// Parse a .docx file into a `SourceDocument`.
///
/// Validates the container first, then extracts:
/// 1. every paragraph whose combined run text is non-blank,
/// 2. the named style definitions,
/// 3. the page geometry of the document-level (final) section.
///
/// Any validation or parse failure is returned to the caller; the batch
/// driver records it and moves on to the next file.
pub fn load_source_document(file_path: &Path) -> Result<SourceDocument> {
    validate_docx_file(file_path)?;

    let file_data = std::fs::read(file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    let docx = docx_rs::read_docx(&file_data)
        .with_context(|| format!("failed to parse {}", file_path.display()))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let paragraph = extract_paragraph(para);
            if !paragraph.text().trim().is_empty() {
                paragraphs.push(paragraph);
            }
        }
    }

    Ok(SourceDocument {
        file_path: file_path.to_string_lossy().to_string(),
        paragraphs,
        styles: extract_styles(&docx.styles),
        geometry: extract_geometry(&docx.document.section_property),
    })
}

/// Extract one paragraph with style, alignment, and formatted runs.
fn extract_paragraph(para: &docx_rs::Paragraph) -> SourceParagraph {
    let style = para.property.style.as_ref().map(|s| s.val.clone());
    let alignment = para
        .property
        .alignment
        .as_ref()
        .and_then(|jc| fields::quoted_value(&format!("{jc:?}")));

    let mut runs = Vec::new();
    for child in &para.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            let text = extract_run_text(run);
            if !text.is_empty() {
                runs.push(FormattedRun {
                    text,
                    formatting: extract_run_formatting(run),
                });
            }
        }
    }

    SourceParagraph {
        style,
        alignment,
        runs,
    }
}

/// Extract text from a run using docx-rs features
fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {
                // Other run children carry no text we preserve
            }
        }
    }

    text
}

/// Extract the formatting tuple from a run.
///
/// Boolean toggles are read from the run properties directly; color, size,
/// underline type, and font name sit behind private fields and are
/// recovered from Debug output (see `fields`).
fn extract_run_formatting(run: &docx_rs::Run) -> TextFormatting {
    let props = &run.run_property;
    let mut formatting = TextFormatting {
        bold: props.bold.is_some(),
        italic: props.italic.is_some(),
        ..TextFormatting::default()
    };

    formatting.underline = props
        .underline
        .as_ref()
        .map(|u| fields::quoted_value(&format!("{u:?}")).unwrap_or_else(|| "single".to_string()));

    formatting.color = props
        .color
        .as_ref()
        .and_then(|c| fields::quoted_value(&format!("{c:?}")));

    formatting.font_size = props
        .sz
        .as_ref()
        .and_then(|sz| fields::uint_value(&format!("{sz:?}")))
        .map(|size| size as usize);

    formatting.font_name = props.fonts.as_ref().and_then(|fonts| {
        let debug = format!("{fonts:?}");
        fields::named_quoted(&debug, "ascii").or_else(|| fields::quoted_value(&debug))
    });

    formatting
}

/// Collect the named style definitions of the source document.
fn extract_styles(styles: &docx_rs::Styles) -> Vec<NamedStyle> {
    styles
        .styles
        .iter()
        .filter_map(|style| {
            let debug = format!("{style:?}");
            let style_id = fields::named_quoted(&debug, "style_id")?;
            let name = fields::named_quoted(&debug, "name").unwrap_or_else(|| style_id.clone());
            let kind = match fields::named_ident(&debug, "style_type") {
                Some("Character") => StyleKind::Character,
                Some("Table") => StyleKind::Table,
                Some("Numbering") => StyleKind::Numbering,
                _ => StyleKind::Paragraph,
            };
            Some(NamedStyle {
                style_id,
                name,
                kind,
            })
        })
        .collect()
}

/// Read the page geometry of the document-level section.
///
/// docx-rs exposes a single section property per document (the final
/// `w:sectPr`), so a multi-section source collapses to the geometry of its
/// last section here.
fn extract_geometry(section: &docx_rs::SectionProperty) -> SectionGeometry {
    let debug = format!("{section:?}");
    SectionGeometry {
        page_width: fields::named_uint(&debug, "w").map(|v| v as u32),
        page_height: fields::named_uint(&debug, "h").map(|v| v as u32),
        margin_top: fields::named_uint(&debug, "top").map(|v| v as i32),
        margin_left: fields::named_uint(&debug, "left").map(|v| v as i32),
        margin_bottom: fields::named_uint(&debug, "bottom").map(|v| v as i32),
        margin_right: fields::named_uint(&debug, "right").map(|v| v as i32),
        header_distance: fields::named_uint(&debug, "header").map(|v| v as i32),
        footer_distance: fields::named_uint(&debug, "footer").map(|v| v as i32),
    }
}
