//! Style, alignment, and page geometry preservation tests at the
//! loader/writer level.

use docx_rs::{AlignmentType, Docx, PageMargin, Paragraph, Run, Style, StyleType};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use redocx::document::load_source_document;
use redocx::document::models::{
    SourceParagraph, FormattedRun, TextFormatting, SectionGeometry, SourceDocument, StyleKind,
};
use redocx::document::writer::{build_output_document, save_document};

fn write_docx(path: &Path, docx: Docx) {
    let file = File::create(path).expect("failed to create fixture file");
    docx.build().pack(file).expect("failed to write fixture");
}

/// The main document part of a packed .docx, as a string.
fn document_xml(path: &Path) -> String {
    let file = File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    xml
}

fn styled_fixture() -> Docx {
    Docx::new()
        .add_style(Style::new("FancyQuote", StyleType::Paragraph).name("Fancy Quote"))
        .page_size(12240, 15840)
        .page_margin(
            PageMargin::new()
                .top(1440)
                .left(1800)
                .bottom(1440)
                .right(1800)
                .header(720)
                .footer(720),
        )
        .add_paragraph(
            Paragraph::new()
                .style("FancyQuote")
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text("Stay hungry, stay foolish.")),
        )
}

#[test]
fn test_loader_reads_custom_styles_and_paragraph_attributes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("styled.docx");
    write_docx(&path, styled_fixture());

    let document = load_source_document(&path).unwrap();

    let fancy = document
        .styles
        .iter()
        .find(|style| style.style_id == "FancyQuote")
        .expect("custom style should be extracted");
    assert_eq!(fancy.name, "Fancy Quote");
    assert_eq!(fancy.kind, StyleKind::Paragraph);

    assert_eq!(document.paragraphs.len(), 1);
    let paragraph = &document.paragraphs[0];
    assert_eq!(paragraph.style.as_deref(), Some("FancyQuote"));
    assert_eq!(paragraph.alignment.as_deref(), Some("center"));
}

#[test]
fn test_writer_carries_style_alignment_and_geometry_through() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("styled.docx");
    write_docx(&source_path, styled_fixture());

    let source = load_source_document(&source_path).unwrap();
    let rephrased = vec!["Remain hungry, remain foolish.".to_string()];

    let output_path = dir.path().join("out.docx");
    save_document(build_output_document(&source, &rephrased), &output_path).unwrap();

    let output = load_source_document(&output_path).unwrap();

    assert!(output
        .styles
        .iter()
        .any(|style| style.style_id == "FancyQuote"));

    assert_eq!(output.paragraphs.len(), 1);
    let paragraph = &output.paragraphs[0];
    assert_eq!(paragraph.style.as_deref(), Some("FancyQuote"));
    assert_eq!(paragraph.alignment.as_deref(), Some("center"));
    assert_eq!(
        paragraph.runs[0].text.trim_end(),
        "Remain hungry, remain foolish."
    );

    // Whatever geometry the loader saw must survive the rewrite unchanged.
    assert_eq!(output.geometry, source.geometry);
}

#[test]
fn test_writer_emits_copied_geometry_into_the_section() {
    let source = SourceDocument {
        file_path: String::new(),
        paragraphs: vec![SourceParagraph {
            style: None,
            alignment: Some("center".to_string()),
            runs: vec![FormattedRun {
                text: "Body text here.".to_string(),
                formatting: TextFormatting::default(),
            }],
        }],
        styles: Vec::new(),
        geometry: SectionGeometry {
            page_width: Some(12240),
            page_height: Some(15840),
            margin_top: Some(1440),
            margin_left: Some(1800),
            margin_bottom: Some(1440),
            margin_right: Some(1800),
            header_distance: Some(720),
            footer_distance: Some(720),
        },
    };

    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("out.docx");
    let rephrased = vec!["Body text here.".to_string()];
    save_document(build_output_document(&source, &rephrased), &output_path).unwrap();

    let xml = document_xml(&output_path);
    assert!(xml.contains(r#"w:w="12240""#), "page width missing: {xml}");
    assert!(xml.contains(r#"w:h="15840""#), "page height missing");
    assert!(xml.contains(r#"w:top="1440""#), "top margin missing");
    assert!(xml.contains(r#"w:left="1800""#), "left margin missing");
    assert!(xml.contains(r#"w:header="720""#), "header distance missing");
    assert!(xml.contains(r#"w:footer="720""#), "footer distance missing");
    assert!(xml.contains(r#"<w:jc w:val="center"#), "alignment missing");
}

#[test]
fn test_writer_output_with_no_paragraphs_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("empty.docx");
    write_docx(&source_path, Docx::new());

    let source = load_source_document(&source_path).unwrap();
    assert!(source.paragraphs.is_empty());

    let output_path = dir.path().join("out.docx");
    save_document(build_output_document(&source, &[]), &output_path).unwrap();

    let output = load_source_document(&output_path).unwrap();
    assert!(output.paragraphs.is_empty());
}
