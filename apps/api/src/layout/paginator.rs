//! Pagination engine — greedy line wrapping over fixed-size pages.
//!
//! Converts pre-split source lines into `Placement`s (page index, vertical
//! position, line text) given layout parameters, a `TextMeasure` capability,
//! and a starting cursor for the first page (space above the text block is
//! already consumed by the header image).
//!
//! The scan is an explicit state-advance machine: `ScanState::push_word`
//! consumes one word and emits at most one placement, so the wrap/break
//! logic is unit-testable without any PDF machinery. The whole engine is a
//! pure function over its inputs — no randomness, no locale dependence.

use serde::Serialize;

use crate::layout::font_metrics::TextMeasure;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Page geometry and typography, fixed for one run.
///
/// Invariants: `margin < page_width / 2`, `margin < page_height / 2`,
/// `line_height > 0`.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutParams {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub font_size: f32,
    pub line_height: f32,
}

impl LayoutParams {
    /// Production geometry for the sale deed: 600×800pt page, 50pt margin,
    /// 12pt type at 1.5× line height.
    pub fn deed_default() -> Self {
        let font_size = 12.0;
        LayoutParams {
            page_width: 600.0,
            page_height: 800.0,
            margin: 50.0,
            font_size,
            line_height: font_size * 1.5,
        }
    }

    /// Maximum allowed measured width for one line.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Cursor position at the top of a fresh page.
    pub fn top_cursor(&self) -> f32 {
        self.page_height - self.margin
    }
}

/// One line of text assigned to a page and vertical offset, ready to draw.
/// Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub page: usize,
    pub y: f32,
    pub text: String,
}

/// Engine output: ordered placements plus the final page count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLayout {
    pub placements: Vec<Placement>,
    pub page_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Scan state
// ────────────────────────────────────────────────────────────────────────────

/// Mutable scan position: the candidate line being built, the active page,
/// and the vertical cursor. Advances monotonically; never backtracks.
pub struct ScanState<'a> {
    params: &'a LayoutParams,
    measure: &'a dyn TextMeasure,
    pending: Option<String>,
    page: usize,
    cursor: f32,
}

impl<'a> ScanState<'a> {
    pub fn new(params: &'a LayoutParams, measure: &'a dyn TextMeasure, start_cursor: f32) -> Self {
        ScanState {
            params,
            measure,
            pending: None,
            page: 0,
            cursor: start_cursor,
        }
    }

    /// Advances the scan by one word. Returns a placement when the word does
    /// not fit on the candidate line, closing that line.
    ///
    /// A word is kept on the current line iff the measured width of
    /// `"{line} {word}"` is strictly below the content width. Words are never
    /// split: the first word of a line is accepted unconditionally, so a
    /// single word wider than the content width still occupies its own line,
    /// overflowing. That is the documented behavior, not a defect to correct.
    pub fn push_word(&mut self, word: &str) -> Option<Placement> {
        match self.pending.take() {
            None => {
                self.pending = Some(word.to_string());
                None
            }
            Some(mut line) => {
                let candidate = self
                    .measure
                    .text_width(&format!("{line} {word}"), self.params.font_size);
                if candidate < self.params.content_width() {
                    line.push(' ');
                    line.push_str(word);
                    self.pending = Some(line);
                    None
                } else {
                    self.pending = Some(word.to_string());
                    Some(self.place(line))
                }
            }
        }
    }

    /// Closes the candidate line at an explicit line break in the source
    /// text. Returns the placement for whatever had accumulated, if anything.
    pub fn break_line(&mut self) -> Option<Placement> {
        self.pending.take().map(|line| self.place(line))
    }

    /// Pages seen so far, counting the initial page even when nothing was
    /// placed on it.
    pub fn page_count(&self) -> usize {
        self.page + 1
    }

    /// Emits one line at the current cursor, starting a new page first when
    /// the remaining vertical space is under one line height. The cursor
    /// then advances by exactly one line height — spacing is uniform
    /// regardless of glyph extents.
    fn place(&mut self, text: String) -> Placement {
        if self.cursor < self.params.margin + self.params.line_height {
            self.page += 1;
            self.cursor = self.params.top_cursor();
        }
        let placement = Placement {
            page: self.page,
            y: self.cursor,
            text,
        };
        self.cursor -= self.params.line_height;
        placement
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Driver
// ────────────────────────────────────────────────────────────────────────────

/// Paginates pre-split source lines. `start_cursor` is the first page's
/// writing position (below the header image); subsequent pages start at
/// `page_height - margin`.
///
/// Empty input yields zero placements and a single blank page.
pub fn paginate(
    source_lines: &[&str],
    params: &LayoutParams,
    measure: &dyn TextMeasure,
    start_cursor: f32,
) -> TextLayout {
    let mut state = ScanState::new(params, measure, start_cursor);
    let mut placements = Vec::new();

    for line in source_lines {
        for word in line.split_whitespace() {
            if let Some(placement) = state.push_word(word) {
                placements.push(placement);
            }
        }
        if let Some(placement) = state.break_line() {
            placements.push(placement);
        }
    }

    TextLayout {
        page_count: state.page_count(),
        placements,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::FixedWidthMetrics;

    // 10pt per character, 100pt content width → lines wrap once the candidate
    // (including separating spaces) reaches 10 characters.
    const ADVANCE: f32 = 10.0;

    fn make_params() -> LayoutParams {
        LayoutParams {
            page_width: 120.0,
            page_height: 100.0,
            margin: 10.0,
            font_size: 12.0,
            line_height: 10.0,
        }
    }

    fn measure() -> FixedWidthMetrics {
        FixedWidthMetrics { advance: ADVANCE }
    }

    fn run(lines: &[&str], start_cursor: f32) -> TextLayout {
        let params = make_params();
        paginate(lines, &params, &measure(), start_cursor)
    }

    #[test]
    fn test_fitting_line_emits_single_placement() {
        let layout = run(&["abc defg"], 90.0);
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.placements[0].text, "abc defg");
        assert_eq!(layout.placements[0].page, 0);
        assert_eq!(layout.placements[0].y, 90.0);
        assert_eq!(layout.page_count, 1);
    }

    #[test]
    fn test_wrap_preserves_words_in_order() {
        let source = "alpha beta gamma delta epsilon zeta eta theta";
        let layout = run(&[source], 90.0);
        assert!(layout.placements.len() > 1, "line should have wrapped");

        let rejoined: Vec<&str> = layout
            .placements
            .iter()
            .flat_map(|p| p.text.split(' '))
            .collect();
        let original: Vec<&str> = source.split(' ').collect();
        assert_eq!(rejoined, original, "no word dropped, duplicated, or reordered");
    }

    #[test]
    fn test_no_placement_exceeds_content_width() {
        let params = make_params();
        let m = measure();
        let layout = paginate(
            &["one two three four five six seven eight nine ten"],
            &params,
            &m,
            90.0,
        );
        for p in &layout.placements {
            let w = m.text_width(&p.text, params.font_size);
            assert!(
                w < params.content_width(),
                "placement '{}' measures {w}, over content width",
                p.text
            );
        }
    }

    #[test]
    fn test_overlong_word_placed_alone_and_overflows() {
        let params = make_params();
        let m = measure();
        // "abcdefghijkl" is 120pt wide against a 100pt content width.
        let layout = paginate(&["aa abcdefghijkl bb"], &params, &m, 90.0);
        let overlong = layout
            .placements
            .iter()
            .find(|p| p.text == "abcdefghijkl")
            .expect("overlong word must be the sole content of its placement");
        assert!(m.text_width(&overlong.text, params.font_size) > params.content_width());
    }

    #[test]
    fn test_first_page_starts_at_given_cursor() {
        let layout = run(&["aaa", "bbb"], 55.0);
        assert_eq!(layout.placements[0].y, 55.0);
        assert_eq!(layout.placements[1].y, 45.0);
    }

    #[test]
    fn test_page_break_resets_cursor_to_top() {
        let params = make_params();
        // start_cursor 35 leaves room for two lines (cursor 35 and 25; at 15
        // the margin+line_height=20 check fails) before breaking.
        let lines: Vec<&str> = vec!["aaa"; 4];
        let layout = paginate(&lines, &params, &measure(), 35.0);

        assert_eq!(layout.placements[0].page, 0);
        assert_eq!(layout.placements[1].page, 0);
        assert_eq!(layout.placements[2].page, 1);
        assert_eq!(
            layout.placements[2].y,
            params.top_cursor(),
            "first placement of a new page sits at pageHeight - margin"
        );
        assert_eq!(layout.page_count, 2);
    }

    #[test]
    fn test_three_short_lines_single_page_uniform_spacing() {
        let layout = run(&["one", "two", "abc def"], 90.0);
        assert_eq!(layout.placements.len(), 3);
        for (i, p) in layout.placements.iter().enumerate() {
            assert_eq!(p.page, 0);
            assert_eq!(p.y, 90.0 - i as f32 * 10.0);
        }
        assert_eq!(layout.page_count, 1);
    }

    #[test]
    fn test_empty_input_yields_blank_single_page() {
        let layout = run(&[], 90.0);
        assert!(layout.placements.is_empty());
        assert_eq!(layout.page_count, 1);
    }

    #[test]
    fn test_whitespace_only_line_places_nothing() {
        let layout = run(&["   "], 90.0);
        assert!(layout.placements.is_empty());
        assert_eq!(layout.page_count, 1);
    }

    #[test]
    fn test_determinism() {
        let lines = ["alpha beta gamma delta epsilon", "zeta eta", "theta iota kappa"];
        let a = run(&lines, 65.0);
        let b = run(&lines, 65.0);
        assert_eq!(a, b, "identical inputs must yield identical layouts");
    }

    #[test]
    fn test_multi_page_fill() {
        // A full page holds 8 lines (cursor 90 down to 20); 20 one-word
        // source lines spread over 3 pages.
        let lines: Vec<&str> = vec!["word"; 20];
        let layout = run(&lines, 90.0);
        assert_eq!(layout.placements.len(), 20);
        assert_eq!(layout.placements[7].page, 0);
        assert_eq!(layout.placements[8].page, 1);
        assert_eq!(layout.placements[15].page, 1);
        assert_eq!(layout.placements[16].page, 2);
        assert_eq!(layout.page_count, 3);
    }

    #[test]
    fn test_start_cursor_already_below_margin_breaks_immediately() {
        // Header image consumed nearly the whole first page.
        let layout = run(&["aaa"], 15.0);
        assert_eq!(layout.placements[0].page, 1);
        assert_eq!(layout.placements[0].y, 90.0);
        assert_eq!(layout.page_count, 2);
    }
}
