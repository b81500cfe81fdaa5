//! Portfolio generation - orchestrates the full pipeline.
//!
//! Flow: snapshot -> financial derivations -> nine sections -> PDF bytes ->
//! artifact. One synchronous unit of work, no suspension points: it either
//! completes with the full byte stream or fails with no partial document.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::errors::EngineError;
use crate::models::snapshot::PortfolioSnapshot;
use crate::render::pdf::PortfolioPdf;
use crate::report::sections::{assemble_sections, SECTION_COUNT};

/// MIME type of the generated artifact.
pub const ARTIFACT_MIME: &str = "application/pdf";

/// The finished document plus the delivery metadata the embedding layer
/// needs to expose it (download trigger, attachment, etc.). The engine
/// itself performs no disk or network I/O.
#[derive(Debug, Clone)]
pub struct PortfolioArtifact {
    /// `Portfolio_<client name>.pdf`
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Bytes,
}

/// Generates the nine-section portfolio for one snapshot, stamped with the
/// current time.
pub fn generate_portfolio(snapshot: &PortfolioSnapshot) -> Result<PortfolioArtifact, EngineError> {
    generate_portfolio_at(snapshot, Utc::now())
}

/// Same as [`generate_portfolio`] with an explicit document timestamp, for
/// reproducible output.
pub fn generate_portfolio_at(
    snapshot: &PortfolioSnapshot,
    created_at: DateTime<Utc>,
) -> Result<PortfolioArtifact, EngineError> {
    info!(client = %snapshot.client.name, "assembling portfolio sections");
    let sections = assemble_sections(snapshot);
    debug_assert_eq!(sections.len(), SECTION_COUNT);

    let mut pdf = PortfolioPdf::new(created_at);
    for section in &sections {
        pdf.add_section(&section.title, &section.body);
    }
    let pages = pdf.page_count();
    let bytes = pdf.render()?;
    info!(
        sections = sections.len(),
        pages,
        size = bytes.len(),
        "portfolio rendered"
    );

    Ok(PortfolioArtifact {
        filename: format!("Portfolio_{}.pdf", snapshot.client.name),
        mime: ARTIFACT_MIME,
        bytes: Bytes::from(bytes),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use std::io::Write;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    fn count(haystack: &[u8], needle: &str) -> usize {
        let needle = needle.as_bytes();
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_default_session_end_to_end() {
        let snapshot = PortfolioSnapshot::default();
        let artifact = generate_portfolio_at(&snapshot, timestamp()).expect("generate");

        assert_eq!(artifact.filename, "Portfolio_Jane Doe.pdf");
        assert_eq!(artifact.mime, "application/pdf");
        assert!(artifact.bytes.starts_with(b"%PDF-1.4"));
        assert!(artifact.bytes.ends_with(b"%%EOF\n"));

        // Nine sections, each short enough for exactly one page.
        assert_eq!(count(&artifact.bytes, "/Type /Page /Parent"), 9);

        // Uncompressed content streams carry the section text verbatim.
        assert_eq!(count(&artifact.bytes, "OFFER PRICE: $78,906"), 1);
        assert_eq!(count(&artifact.bytes, "PROJECTED INSTANT EQUITY: $16,094"), 1);
        assert_eq!(count(&artifact.bytes, "MARKET AVERAGE BASED ON COMPS: $91,667"), 1);
    }

    #[test]
    fn test_generation_is_deterministic_for_fixed_timestamp() {
        let snapshot = PortfolioSnapshot::default();
        let a = generate_portfolio_at(&snapshot, timestamp()).expect("first");
        let b = generate_portfolio_at(&snapshot, timestamp()).expect("second");
        assert_eq!(a.bytes, b.bytes);
    }

    #[test]
    fn test_field_map_boundary_to_artifact() {
        let snapshot = PortfolioSnapshot::from_fields(json!({
            "client": { "name": "John Roe" }
        }))
        .expect("snapshot");
        let artifact = generate_portfolio_at(&snapshot, timestamp()).expect("generate");
        assert_eq!(artifact.filename, "Portfolio_John Roe.pdf");
        assert_eq!(count(&artifact.bytes, "CLIENT: John Roe"), 1);
    }

    #[test]
    fn test_typographic_input_never_fails_generation() {
        let mut snapshot = PortfolioSnapshot::default();
        snapshot.client.stated_needs =
            "\u{201C}Turn-key\u{201D} \u{2014} school boundaries \u{2192} priority \u{5BB6}"
                .to_string();
        snapshot.market.narrative = Some("\u{2022} Deficit \u{2013} 1,635 units".to_string());

        let artifact = generate_portfolio_at(&snapshot, timestamp()).expect("generate");
        assert_eq!(count(&artifact.bytes, "\"Turn-key\" - school boundaries ? priority ?"), 1);
        assert_eq!(count(&artifact.bytes, "* Deficit - 1,635 units"), 1);
    }

    #[test]
    fn test_artifact_round_trips_to_disk() {
        let snapshot = PortfolioSnapshot::default();
        let artifact = generate_portfolio_at(&snapshot, timestamp()).expect("generate");

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(&artifact.filename);
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(&artifact.bytes).expect("write");

        let read_back = std::fs::read(&path).expect("read");
        assert_eq!(read_back.len(), artifact.bytes.len());
        assert!(read_back.starts_with(b"%PDF-1.4"));
    }
}
