//! Minimal PDF 1.4 writer for the portfolio document.
//!
//! Layout is expressed in millimetres on an A4 page grid and converted to
//! PDF points at emit time. Every page carries the fixed branding header;
//! each section opens with an accent-color title band followed by wrapped
//! body text. Overlong bodies continue onto a fresh page (with the repeated
//! header) once the bottom break margin is reached.
//!
//! Text is written as Latin-1 bytes in literal strings against
//! /WinAnsiEncoding core fonts. Input is expected to be pre-sanitized; any
//! straggler outside Latin-1 still degrades to '?' here rather than
//! corrupting the stream.

use chrono::{DateTime, Utc};

use crate::errors::EngineError;
use crate::render::metrics::{get_metrics, CoreFont};

// ────────────────────────────────────────────────────────────────────────────
// Page grid
// ────────────────────────────────────────────────────────────────────────────

const PAGE_W_MM: f32 = 210.0;
const PAGE_H_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
/// Auto page break once the cursor reaches this far from the bottom edge.
const PAGE_BREAK_MARGIN_MM: f32 = 15.0;
/// Points per millimetre.
const MM_TO_PT: f32 = 72.0 / 25.4;

const HEADER_FONT_PT: f32 = 10.0;
const TITLE_FONT_PT: f32 = 16.0;
const BODY_FONT_PT: f32 = 12.0;

const HEADER_CELL_H_MM: f32 = 10.0;
const HEADER_GAP_MM: f32 = 5.0;
const TITLE_BAND_H_MM: f32 = 12.0;
const TITLE_GAP_MM: f32 = 10.0;
const BODY_LINE_H_MM: f32 = 10.0;

/// Fixed branding line repeated at the top of every page.
pub const BRANDING_HEADER: &str = "PROFESSIONAL PROPERTY PORTFOLIO | PREPARED BY RAPHEAL";

const HEADER_GRAY: [f32; 3] = [0.392157, 0.392157, 0.392157];
/// Section band accent, RGB (30, 55, 110).
const ACCENT: [f32; 3] = [0.117647, 0.215686, 0.431373];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const BLACK: [f32; 3] = [0.0, 0.0, 0.0];

// ────────────────────────────────────────────────────────────────────────────
// Document builder
// ────────────────────────────────────────────────────────────────────────────

/// In-progress portfolio document: one content stream per page plus a
/// top-down cursor in millimetres.
pub struct PortfolioPdf {
    pages: Vec<Vec<u8>>,
    cursor_y_mm: f32,
    created_at: DateTime<Utc>,
}

impl PortfolioPdf {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            pages: Vec::new(),
            cursor_y_mm: MARGIN_MM,
            created_at,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Adds one report section: a fresh page, the title band, then the
    /// wrapped body. `\n` in the body is honored; blank lines survive as
    /// vertical space.
    pub fn add_section(&mut self, title: &str, body: &str) {
        self.start_page();
        self.draw_title_band(title);
        self.draw_body(body);
    }

    fn start_page(&mut self) {
        let mut content = Vec::new();
        draw_page_header(&mut content);
        self.pages.push(content);
        self.cursor_y_mm = MARGIN_MM + HEADER_CELL_H_MM + HEADER_GAP_MM;
        tracing::debug!(page = self.pages.len(), "page started");
    }

    fn draw_title_band(&mut self, title: &str) {
        let y = self.cursor_y_mm;
        if let Some(content) = self.pages.last_mut() {
            fill_rect(
                content,
                ACCENT,
                MARGIN_MM,
                y,
                PAGE_W_MM - 2.0 * MARGIN_MM,
                TITLE_BAND_H_MM,
            );
            show_text(
                content,
                CoreFont::HelveticaBold,
                TITLE_FONT_PT,
                WHITE,
                MARGIN_MM,
                baseline_in_cell(y, TITLE_BAND_H_MM, TITLE_FONT_PT),
                // two leading spaces inset the title inside the band
                &format!("  {title}"),
            );
        }
        self.cursor_y_mm = y + TITLE_BAND_H_MM + TITLE_GAP_MM;
    }

    fn draw_body(&mut self, body: &str) {
        let metrics = get_metrics(&CoreFont::Helvetica);
        let max_width_em = (PAGE_W_MM - 2.0 * MARGIN_MM) * MM_TO_PT / BODY_FONT_PT;

        for paragraph in body.split('\n') {
            for line in metrics.wrap_paragraph(paragraph, max_width_em) {
                if self.cursor_y_mm + BODY_LINE_H_MM > PAGE_H_MM - PAGE_BREAK_MARGIN_MM {
                    self.start_page();
                }
                let y = self.cursor_y_mm;
                if !line.is_empty() {
                    if let Some(content) = self.pages.last_mut() {
                        show_text(
                            content,
                            CoreFont::Helvetica,
                            BODY_FONT_PT,
                            BLACK,
                            MARGIN_MM,
                            baseline_in_cell(y, BODY_LINE_H_MM, BODY_FONT_PT),
                            &line,
                        );
                    }
                }
                self.cursor_y_mm = y + BODY_LINE_H_MM;
            }
        }
    }

    /// Serializes the document: header, objects, xref, trailer. Consumes the
    /// builder; a document with no pages is unrenderable.
    pub fn render(self) -> Result<Vec<u8>, EngineError> {
        if self.pages.is_empty() {
            return Err(EngineError::Render("document has no pages".to_string()));
        }

        let page_count = self.pages.len();
        // Objects: 1 catalog, 2 page tree, 3-4 fonts, 5 info, then
        // (page, content) pairs.
        let total_objects = 5 + 2 * page_count;
        let mut objects: Vec<Vec<u8>> = Vec::with_capacity(total_objects);

        objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());

        let kids: String = (0..page_count).map(|i| format!("{} 0 R ", 6 + 2 * i)).collect();
        objects.push(
            format!("<< /Type /Pages /Kids [ {kids}] /Count {page_count} >>").into_bytes(),
        );

        objects.push(
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_vec(),
        );
        objects.push(
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
                .to_vec(),
        );

        objects.push(
            format!(
                "<< /Producer (engine {}) /CreationDate (D:{}Z) >>",
                env!("CARGO_PKG_VERSION"),
                self.created_at.format("%Y%m%d%H%M%S")
            )
            .into_bytes(),
        );

        for (i, content) in self.pages.iter().enumerate() {
            objects.push(
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                    PAGE_W_MM * MM_TO_PT,
                    PAGE_H_MM * MM_TO_PT,
                    7 + 2 * i
                )
                .into_bytes(),
            );

            let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            stream.extend_from_slice(content);
            stream.extend_from_slice(b"\nendstream");
            objects.push(stream);
        }

        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let mut offsets = Vec::with_capacity(total_objects);
        for (i, object) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
            out.extend_from_slice(object);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_start = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", total_objects + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R /Info 5 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
                total_objects + 1
            )
            .as_bytes(),
        );

        Ok(out)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Drawing primitives
// ────────────────────────────────────────────────────────────────────────────

fn draw_page_header(content: &mut Vec<u8>) {
    let metrics = get_metrics(&CoreFont::HelveticaBold);
    let width_mm = metrics.measure_str(BRANDING_HEADER) * HEADER_FONT_PT / MM_TO_PT;
    let x = PAGE_W_MM - MARGIN_MM - width_mm;
    show_text(
        content,
        CoreFont::HelveticaBold,
        HEADER_FONT_PT,
        HEADER_GRAY,
        x,
        baseline_in_cell(MARGIN_MM, HEADER_CELL_H_MM, HEADER_FONT_PT),
        BRANDING_HEADER,
    );
}

fn show_text(
    content: &mut Vec<u8>,
    font: CoreFont,
    size_pt: f32,
    color: [f32; 3],
    x_mm: f32,
    baseline_mm: f32,
    text: &str,
) {
    let font_id = match font {
        CoreFont::Helvetica => "F1",
        CoreFont::HelveticaBold => "F2",
    };
    put(
        content,
        &format!(
            "{:.3} {:.3} {:.3} rg BT /{} {:.2} Tf {:.2} {:.2} Td (",
            color[0],
            color[1],
            color[2],
            font_id,
            size_pt,
            x_mm * MM_TO_PT,
            (PAGE_H_MM - baseline_mm) * MM_TO_PT
        ),
    );
    put_escaped_latin1(content, text);
    put(content, ") Tj ET\n");
}

fn fill_rect(content: &mut Vec<u8>, color: [f32; 3], x_mm: f32, y_mm: f32, w_mm: f32, h_mm: f32) {
    put(
        content,
        &format!(
            "{:.3} {:.3} {:.3} rg {:.2} {:.2} {:.2} {:.2} re f\n",
            color[0],
            color[1],
            color[2],
            x_mm * MM_TO_PT,
            (PAGE_H_MM - y_mm - h_mm) * MM_TO_PT,
            w_mm * MM_TO_PT,
            h_mm * MM_TO_PT
        ),
    );
}

/// Baseline for text vertically centered in a cell: the baseline sits about
/// 35% of the font size below the cell's vertical center.
fn baseline_in_cell(cell_top_mm: f32, cell_h_mm: f32, size_pt: f32) -> f32 {
    cell_top_mm + cell_h_mm / 2.0 + 0.35 * size_pt / MM_TO_PT
}

fn put(content: &mut Vec<u8>, ops: &str) {
    content.extend_from_slice(ops.as_bytes());
}

/// Writes `text` as escaped Latin-1 literal-string bytes. Characters beyond
/// Latin-1 degrade to '?' instead of failing the render.
fn put_escaped_latin1(content: &mut Vec<u8>, text: &str) {
    for ch in text.chars() {
        let byte = if (ch as u32) <= 0xFF { ch as u32 as u8 } else { b'?' };
        match byte {
            b'\\' | b'(' | b')' => {
                content.push(b'\\');
                content.push(byte);
            }
            _ => content.push(byte),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
