//! Output-encoding sanitation for free text.
//!
//! The document renderer writes Latin-1 text. User-entered text routinely
//! carries typographic punctuation (pasted from word processors) and the
//! occasional character with no Latin-1 representation at all. This module
//! is the mandatory gate in front of the renderer: a fixed substitution
//! table downgrades typographic punctuation to plain ASCII, and anything
//! still outside Latin-1 becomes a placeholder. Generation never fails on
//! unencodable input.

/// Placeholder for characters with no Latin-1 representation.
pub const REPLACEMENT: char = '?';

/// Sanitizes one text field for document output. Idempotent: sanitized text
/// passes through unchanged.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2013}' | '\u{2014}' => out.push('-'),  // en / em dash
            '\u{2018}' | '\u{2019}' => out.push('\''), // curly single quotes
            '\u{201C}' | '\u{201D}' => out.push('"'),  // curly double quotes
            '\u{2022}' => out.push('*'),               // bullet
            c if (c as u32) <= 0xFF => out.push(c),
            _ => out.push(REPLACEMENT),
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_passes_through() {
        let text = "Direct-to-seller advantage (FSBO).";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn test_typographic_punctuation_is_downgraded() {
        assert_eq!(
            sanitize("\u{2018}Safety Tax\u{2019} \u{2013} deferred \u{2014} maintenance"),
            "'Safety Tax' - deferred - maintenance"
        );
        assert_eq!(sanitize("\u{201C}turn-key\u{201D}"), "\"turn-key\"");
        assert_eq!(sanitize("\u{2022} item"), "* item");
    }

    #[test]
    fn test_latin1_characters_are_kept() {
        // U+00E9 is representable in Latin-1 and must survive.
        assert_eq!(sanitize("café"), "café");
    }

    #[test]
    fn test_unrepresentable_characters_become_placeholder() {
        assert_eq!(sanitize("price \u{2192} value"), "price ? value");
        assert_eq!(sanitize("家"), "?");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "plain text",
            "\u{2018}quoted\u{2019} \u{2013} dashed \u{2022} bulleted",
            "mixed café \u{2192} 家",
        ];
        for input in inputs {
            let once = sanitize(input);
            let twice = sanitize(&once);
            assert_eq!(once, twice, "sanitize must be idempotent for {input:?}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }
}
