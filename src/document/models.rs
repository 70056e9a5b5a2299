//! Core data structures for document representation
//!
//! This module defines the types used to represent the source document
//! during one pipeline invocation: paragraphs, formatted runs, named styles,
//! and section geometry. All of them are read-only source material; the
//! output document is assembled fresh by the writer.

/// A parsed source document: non-blank paragraphs plus the style and
/// section metadata that is carried over to the output document.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub file_path: String,
    pub paragraphs: Vec<SourceParagraph>,
    pub styles: Vec<NamedStyle>,
    pub geometry: SectionGeometry,
}

/// One non-blank paragraph. Identity is its position in the document.
#[derive(Debug, Clone, Default)]
pub struct SourceParagraph {
    /// Paragraph style id (`w:pStyle`), if any.
    pub style: Option<String>,
    /// Paragraph alignment (`w:jc` value such as "center"), if any.
    pub alignment: Option<String>,
    pub runs: Vec<FormattedRun>,
}

impl SourceParagraph {
    /// Combined text of all runs, in document order.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// A contiguous span of text sharing one formatting tuple. Runs are the
/// unit of style preservation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedRun {
    pub text: String,
    pub formatting: TextFormatting,
}

impl FormattedRun {
    /// Number of whitespace-separated words in this run; the run's weight
    /// during re-segmentation.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// The formatting tuple copied verbatim from each original run to its
/// replacement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormatting {
    pub bold: bool,
    pub italic: bool,
    /// Underline line type ("single", "double", ...), when underlined.
    pub underline: Option<String>,
    pub font_name: Option<String>,
    /// Font size in half-points (`w:sz`).
    pub font_size: Option<usize>,
    /// Font color as a hex string without leading '#'.
    pub color: Option<String>,
}

/// A named style definition carried from the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedStyle {
    pub style_id: String,
    pub name: String,
    pub kind: StyleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StyleKind {
    #[default]
    Paragraph,
    Character,
    Table,
    Numbering,
}

/// Page geometry of the source document's final section, in twips.
/// Values absent from the source stay `None` and leave the output
/// document's defaults untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionGeometry {
    pub page_width: Option<u32>,
    pub page_height: Option<u32>,
    pub margin_top: Option<i32>,
    pub margin_left: Option<i32>,
    pub margin_bottom: Option<i32>,
    pub margin_right: Option<i32>,
    pub header_distance: Option<i32>,
    pub footer_distance: Option<i32>,
}
