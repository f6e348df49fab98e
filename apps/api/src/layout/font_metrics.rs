//! Text measurement for the pagination engine.
#![allow(dead_code)]
//!
//! `TextMeasure` is the injected capability the paginator consumes — it never
//! sees a font object, only a width function. The production implementation is
//! a static Helvetica width table (standard AFM values, per-mille of the font
//! size), covering ASCII 0x20..=0x7E. Index = (char as usize) - 32.
//!
//! Sanitization upstream guarantees the paginated text is printable ASCII, so
//! the non-ASCII fallback width exists only as a safety net.

// ────────────────────────────────────────────────────────────────────────────
// Measurement capability
// ────────────────────────────────────────────────────────────────────────────

/// Maps (text, font size) to a rendered width in the same unit system as the
/// page dimensions (PDF points). Implementations must be pure: identical
/// inputs always yield identical widths.
pub trait TextMeasure: Send + Sync {
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

// ────────────────────────────────────────────────────────────────────────────
// Helvetica
// ────────────────────────────────────────────────────────────────────────────

/// Width of each printable ASCII glyph in Helvetica, in 1/1000 of the font
/// size (standard AFM values for the base-14 font the assembler uses).
///
/// Slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
     278,  278,  355,  556,  556,  889,  667,  191,  333,  333,  389,  584,  278,  333,  278,  278,
    // 0     1     2     3     4     5     6     7     8     9
     556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
    // :     ;     <     =     >     ?     @
     278,  278,  584,  584,  584,  556, 1015,
    // A     B     C     D     E     F     G     H     I     J     K     L     M
     667,  667,  722,  722,  667,  611,  778,  722,  278,  500,  667,  556,  833,
    // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
     722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
    // [     \     ]     ^     _     `
     278,  278,  278,  469,  556,  333,
    // a     b     c     d     e     f     g     h     i     j     k     l     m
     556,  556,  500,  556,  556,  278,  556,  556,  222,  222,  500,  222,  833,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
     556,  556,  556,  556,  333,  500,  278,  556,  500,  722,  500,  500,  500,
    // {     |     }     ~
     334,  260,  334,  584,
];

/// Fallback per-mille width for characters outside the table (should not
/// appear after sanitization).
const FALLBACK_WIDTH: u16 = 556;

/// Helvetica measurement backed by the static AFM table.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl TextMeasure for HelveticaMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let millis: u32 = text
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    HELVETICA_WIDTHS[code - 32] as u32
                } else {
                    FALLBACK_WIDTH as u32
                }
            })
            .sum();
        millis as f32 * font_size / 1000.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Synthetic measurement for tests
// ────────────────────────────────────────────────────────────────────────────

/// Fixed-advance measurement: every character is `advance` points wide
/// regardless of font size. Makes wrap boundaries exact in unit tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthMetrics {
    pub advance: f32,
}

impl TextMeasure for FixedWidthMetrics {
    fn text_width(&self, text: &str, _font_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_zero_width() {
        assert_eq!(HelveticaMetrics.text_width("", 12.0), 0.0);
    }

    #[test]
    fn test_single_space_width() {
        // space = 278/1000 * 12pt = 3.336pt
        let w = HelveticaMetrics.text_width(" ", 12.0);
        assert!((w - 3.336).abs() < 1e-4, "space should be 3.336pt, got {w}");
    }

    #[test]
    fn test_known_word_width() {
        // "Deed" = D(722) + e(556) + e(556) + d(556) = 2390 millis
        let w = HelveticaMetrics.text_width("Deed", 10.0);
        assert!((w - 23.90).abs() < 1e-3, "Deed should be 23.90pt, got {w}");
    }

    #[test]
    fn test_width_scales_linearly_with_font_size() {
        let at_12 = HelveticaMetrics.text_width("sale deed", 12.0);
        let at_24 = HelveticaMetrics.text_width("sale deed", 24.0);
        assert!((at_24 - 2.0 * at_12).abs() < 1e-3);
    }

    #[test]
    fn test_non_ascii_uses_fallback() {
        let w = HelveticaMetrics.text_width("é", 10.0);
        assert!((w - 5.56).abs() < 1e-4, "non-ASCII should use fallback width");
    }

    #[test]
    fn test_fixed_width_ignores_font_size() {
        let m = FixedWidthMetrics { advance: 10.0 };
        assert_eq!(m.text_width("abcd", 12.0), 40.0);
        assert_eq!(m.text_width("abcd", 99.0), 40.0);
    }
}
