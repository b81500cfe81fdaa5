//! Static font-metric tables for the two core fonts the document uses.
//!
//! Character widths are in em units (relative to font size), taken from the
//! Adobe core-font metrics. The renderer needs them for two things: right-
//! aligning the page header and greedy word-wrap of body text. Static tables
//! cover ASCII 0x20..=0x7E; everything else (the sanitized Latin-1 range)
//! falls back to an average width, which is accurate enough for wrapping.
//! Index = (char as usize) - 32.

// ────────────────────────────────────────────────────────────────────────────
// Core font enum
// ────────────────────────────────────────────────────────────────────────────

/// The two PDF base-14 fonts this document is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreFont {
    /// Body text.
    Helvetica,
    /// Page header and section titles.
    HelveticaBold,
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one core font.
///
/// All widths are in em units at 1em. `widths[i]` = width of ASCII character
/// `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub font: CoreFont,
    widths: [f32; 95],
    /// Fallback width for characters outside 0x20..=0x7E.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Greedy word-wrap of one paragraph (no embedded newlines) at
    /// `max_width_em`. Returns the wrapped lines; an empty or
    /// whitespace-only paragraph yields one empty line, so blank lines in
    /// the source survive as vertical space.
    ///
    /// Tokens are delimited by single spaces, so runs of interior spaces
    /// keep their width and reappear in the output; a line break consumes
    /// the space run it lands on. A single token wider than the line is
    /// hard-split at the character that would overflow, so pathological
    /// input cannot produce an unbounded line.
    pub fn wrap_paragraph(&self, text: &str, max_width_em: f32) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![String::new()];
        }

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_w = 0.0_f32;

        // An empty token is the gap between two consecutive spaces.
        for token in text.split(' ') {
            let token_w = self.measure_str(token);

            if current.is_empty() {
                if token_w > max_width_em {
                    self.hard_split(token, max_width_em, &mut lines, &mut current, &mut current_w);
                } else {
                    current.push_str(token);
                    current_w = token_w;
                }
            } else if current_w + self.space_width + token_w > max_width_em {
                lines.push(std::mem::take(&mut current));
                current_w = 0.0;
                if token_w > max_width_em {
                    self.hard_split(token, max_width_em, &mut lines, &mut current, &mut current_w);
                } else {
                    current.push_str(token);
                    current_w = token_w;
                }
            } else {
                current.push(' ');
                current.push_str(token);
                current_w += self.space_width + token_w;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Splits an oversized token into full-width chunks; the last chunk
    /// stays open as the current line.
    fn hard_split(
        &self,
        word: &str,
        max_width_em: f32,
        lines: &mut Vec<String>,
        current: &mut String,
        current_w: &mut f32,
    ) {
        let mut chunk = String::new();
        let mut w = 0.0_f32;
        for ch in word.chars() {
            let cw = self.char_width(ch);
            if !chunk.is_empty() && w + cw > max_width_em {
                lines.push(std::mem::take(&mut chunk));
                w = 0.0;
            }
            chunk.push(ch);
            w += cw;
        }
        *current = chunk;
        *current_w = w;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica - body text.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    font: CoreFont::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.530,
    space_width: 0.278,
};

/// Helvetica-Bold - page header and section titles.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: CoreFont::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.560,
    space_width: 0.278,
};

/// Returns the static metric table for a core font.
pub fn get_metrics(font: &CoreFont) -> &'static FontMetricTable {
    match font {
        CoreFont::Helvetica => &HELVETICA_TABLE,
        CoreFont::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(&CoreFont::Helvetica);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_known_word() {
        let metrics = get_metrics(&CoreFont::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "MONTHLY CARRY & NET SHEET";
        let regular = get_metrics(&CoreFont::Helvetica).measure_str(text);
        let bold = get_metrics(&CoreFont::HelveticaBold).measure_str(text);
        assert!(bold > regular, "bold {bold} should exceed regular {regular}");
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let metrics = get_metrics(&CoreFont::Helvetica);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_short_paragraph_is_single_line() {
        let metrics = get_metrics(&CoreFont::Helvetica);
        let lines = metrics.wrap_paragraph("OFFER PRICE: $78,906", 44.0);
        assert_eq!(lines, vec!["OFFER PRICE: $78,906".to_string()]);
    }

    #[test]
    fn test_wrap_empty_paragraph_is_one_blank_line() {
        let metrics = get_metrics(&CoreFont::Helvetica);
        assert_eq!(metrics.wrap_paragraph("", 44.0), vec![String::new()]);
        assert_eq!(metrics.wrap_paragraph("   ", 44.0), vec![String::new()]);
    }

    #[test]
    fn test_wrap_long_paragraph_produces_multiple_lines() {
        let metrics = get_metrics(&CoreFont::Helvetica);
        let text = "word ".repeat(60);
        let lines = metrics.wrap_paragraph(text.trim(), 44.0);
        assert!(lines.len() > 1, "expected wrapping, got {} line(s)", lines.len());
        // No wrapped line may exceed the budget
        for line in &lines {
            assert!(
                metrics.measure_str(line) <= 44.0 + 1e-3,
                "line too wide: {line:?}"
            );
        }
    }

    #[test]
    fn test_wrap_keeps_interior_space_runs() {
        let metrics = get_metrics(&CoreFont::Helvetica);
        // Runs of interior spaces are part of the text, not collapsible
        // separators; a fitting line must come back verbatim.
        let lines = metrics.wrap_paragraph("CLIENT:  Jane  Doe", 44.0);
        assert_eq!(lines, vec!["CLIENT:  Jane  Doe".to_string()]);
    }

    #[test]
    fn test_wrap_space_runs_count_toward_line_width() {
        let metrics = get_metrics(&CoreFont::Helvetica);
        let padded = "aa  bb  cc  dd  ee  ff  gg  hh";
        let narrow = metrics.wrap_paragraph(padded, 6.0);
        assert!(narrow.len() > 1, "padded text must wrap at 6em");
        for line in &narrow {
            assert!(
                metrics.measure_str(line) <= 6.0 + 1e-3,
                "line too wide: {line:?}"
            );
        }
    }

    #[test]
    fn test_wrap_preserves_all_words_in_order() {
        let metrics = get_metrics(&CoreFont::Helvetica);
        let text = "The 44105 market has a 1,635-unit supply deficit in every direction you look";
        let lines = metrics.wrap_paragraph(text, 12.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_oversized_token_is_hard_split() {
        let metrics = get_metrics(&CoreFont::Helvetica);
        let token = "x".repeat(400);
        let lines = metrics.wrap_paragraph(&token, 20.0);
        assert!(lines.len() > 1, "giant token must split across lines");
        for line in &lines {
            assert!(metrics.measure_str(line) <= 20.0 + 1e-3);
        }
        let total: usize = lines.iter().map(|l| l.len()).sum();
        assert_eq!(total, 400, "hard split must not drop characters");
    }
}
