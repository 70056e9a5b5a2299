//! Output document assembly
//!
//! Builds a fresh document from the parsed source and the rephrased
//! paragraph texts: named styles and page geometry are copied over, then
//! one output paragraph per non-blank source paragraph is emitted with the
//! source style/alignment and re-segmented runs.

use anyhow::{Context, Result};
use docx_rs::{AlignmentType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use super::fields;
use super::models::*;
use super::resegment::resegment_runs;

/// Assemble the output document for one source file.
///
/// `rephrased` holds one replacement text per source paragraph, in order.
pub fn build_output_document(source: &SourceDocument, rephrased: &[String]) -> Docx {
    let mut docx = Docx::new();
    docx = copy_styles(docx, &source.styles);
    docx = copy_geometry(docx, &source.geometry);

    for (paragraph, text) in source.paragraphs.iter().zip(rephrased) {
        docx = docx.add_paragraph(build_paragraph(paragraph, text));
    }

    docx
}

/// Persist the assembled document.
pub fn save_document(docx: Docx, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    docx.build()
        .pack(file)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    Ok(())
}

/// Copy every source style whose id is not already present in a fresh
/// document's default style set.
fn copy_styles(mut docx: Docx, styles: &[NamedStyle]) -> Docx {
    let default_ids: HashSet<String> = Docx::new()
        .styles
        .styles
        .iter()
        .filter_map(|style| fields::named_quoted(&format!("{style:?}"), "style_id"))
        .collect();

    let mut copied: HashSet<&str> = HashSet::new();
    for style in styles {
        if default_ids.contains(&style.style_id) || !copied.insert(style.style_id.as_str()) {
            continue;
        }
        docx = docx.add_style(
            Style::new(&style.style_id, style_type(style.kind)).name(&style.name),
        );
    }

    docx
}

/// Apply the source page geometry to the output document's section.
///
/// docx-rs writes a single document-level section, so this is the last
/// output section regardless of how many sections the source had. Missing
/// values keep the output defaults.
fn copy_geometry(mut docx: Docx, geometry: &SectionGeometry) -> Docx {
    if let (Some(width), Some(height)) = (geometry.page_width, geometry.page_height) {
        docx = docx.page_size(width, height);
    }

    let mut margin = PageMargin::new();
    if let Some(top) = geometry.margin_top {
        margin = margin.top(top);
    }
    if let Some(left) = geometry.margin_left {
        margin = margin.left(left);
    }
    if let Some(bottom) = geometry.margin_bottom {
        margin = margin.bottom(bottom);
    }
    if let Some(right) = geometry.margin_right {
        margin = margin.right(right);
    }
    if let Some(header) = geometry.header_distance {
        margin = margin.header(header);
    }
    if let Some(footer) = geometry.footer_distance {
        margin = margin.footer(footer);
    }

    docx.page_margin(margin)
}

fn build_paragraph(source: &SourceParagraph, rephrased: &str) -> Paragraph {
    let mut paragraph = Paragraph::new();

    if let Some(style) = &source.style {
        paragraph = paragraph.style(style);
    }
    if let Some(alignment) = &source.alignment {
        paragraph = paragraph.align(alignment_type(alignment));
    }

    for run in resegment_runs(rephrased, &source.runs) {
        paragraph = paragraph.add_run(build_run(&run));
    }

    paragraph
}

fn build_run(source: &FormattedRun) -> Run {
    let mut run = Run::new().add_text(source.text.as_str());
    let formatting = &source.formatting;

    if formatting.bold {
        run = run.bold();
    }
    if formatting.italic {
        run = run.italic();
    }
    if let Some(line_type) = &formatting.underline {
        run = run.underline(line_type.as_str());
    }
    if let Some(name) = &formatting.font_name {
        run = run.fonts(RunFonts::new().ascii(name.as_str()));
    }
    if let Some(size) = formatting.font_size {
        run = run.size(size);
    }
    if let Some(color) = &formatting.color {
        run = run.color(color.as_str());
    }

    run
}

fn style_type(kind: StyleKind) -> StyleType {
    match kind {
        StyleKind::Paragraph => StyleType::Paragraph,
        StyleKind::Character => StyleType::Character,
        StyleKind::Table => StyleType::Table,
        StyleKind::Numbering => StyleType::Numbering,
    }
}

/// Map an OOXML `w:jc` value onto the writer's alignment type.
fn alignment_type(value: &str) -> AlignmentType {
    match value {
        "center" => AlignmentType::Center,
        "right" | "end" => AlignmentType::Right,
        "both" | "justify" | "justified" | "distribute" => AlignmentType::Both,
        _ => AlignmentType::Left,
    }
}
