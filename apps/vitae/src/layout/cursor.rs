//! Cursor/page state for one generation pass.
//!
//! The cursor is the single source of truth for the vertical write position
//! and the page break decision. It also owns the page buffer: every write
//! appends a positioned draw instruction to the current page. A cursor is
//! created per document and consumed by [`Cursor::finalize`], after which no
//! further writes are possible.
//!
//! Coordinates are millimetres from the top-left corner of the page.

use tracing::trace;

use crate::layout::style_profile::{Align, Margins, Rgb, StyleProfile};
use crate::layout::wrap::{text_width, FontSpec};

/// Baseline offset from the top of a line box, as a fraction of the font size.
const ASCENT: f32 = 0.8;

// ────────────────────────────────────────────────────────────────────────────
// Draw instructions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontSpec,
    pub color: Rgb,
}

/// One positioned drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        baseline: f32,
        text: String,
        style: TextStyle,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
        color: Rgb,
    },
    /// Clickable area; `y` is the top edge.
    Link {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        uri: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text of every text instruction on the page, in write order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageGeometry {
    pub fn from_profile(profile: &StyleProfile) -> Self {
        Self {
            width: profile.page_width,
            height: profile.page_height,
            margins: profile.margins,
        }
    }
}

/// Finalized output of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedLayout {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

/// Horizontal extent of a written piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placed {
    pub x: f32,
    pub width: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Cursor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Cursor {
    y: f32,
    page_index: usize,
    geometry: PageGeometry,
    pages: Vec<Page>,
}

impl Cursor {
    pub fn new(profile: &StyleProfile) -> Self {
        Self::with_geometry(PageGeometry::from_profile(profile))
    }

    pub fn with_geometry(geometry: PageGeometry) -> Self {
        Self {
            y: geometry.margins.top,
            page_index: 0,
            geometry,
            pages: vec![Page::default()],
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn left(&self) -> f32 {
        self.geometry.margins.left
    }

    pub fn right(&self) -> f32 {
        self.geometry.width - self.geometry.margins.right
    }

    pub fn content_width(&self) -> f32 {
        self.right() - self.left()
    }

    /// Lowest position content may reach on a page.
    pub fn bottom_limit(&self) -> f32 {
        self.geometry.height - self.geometry.margins.bottom
    }

    pub fn at_page_top(&self) -> bool {
        self.y <= self.geometry.margins.top
    }

    /// Starts a new page first if a block of `required` height would cross the
    /// bottom margin. Returns whether a page break happened.
    ///
    /// A fresh page never breaks again: a block taller than a whole page is
    /// written and overflows instead.
    pub fn ensure_space(&mut self, required: f32) -> bool {
        if self.y + required > self.bottom_limit() && !self.at_page_top() {
            self.new_page();
            true
        } else {
            false
        }
    }

    pub fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.page_index += 1;
        self.y = self.geometry.margins.top;
        trace!(page = self.page_index, "Page break");
    }

    pub fn advance(&mut self, delta: f32) {
        self.y += delta;
    }

    /// Writes one line of text whose line box starts at the current position.
    ///
    /// `x` is the left edge, centre or right edge depending on `align`.
    /// Does not check for space and does not advance.
    pub fn write(&mut self, text: &str, x: f32, style: TextStyle, align: Align) -> Placed {
        let width = text_width(text, &style.font);
        if text.trim().is_empty() {
            return Placed { x, width: 0.0 };
        }
        let left = match align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };
        let baseline = self.y + style.font.size_mm() * ASCENT;
        self.push(DrawOp::Text {
            x: left,
            baseline,
            text: text.to_string(),
            style,
        });
        Placed { x: left, width }
    }

    /// Horizontal rule at the current position.
    pub fn rule(&mut self, x1: f32, x2: f32, thickness: f32, color: Rgb) {
        let y = self.y;
        self.push(DrawOp::Rule {
            x1,
            x2,
            y,
            thickness,
            color,
        });
    }

    /// Clickable area over a line box starting at the current position.
    pub fn link(&mut self, placed: Placed, height: f32, uri: &str) {
        if uri.is_empty() || placed.width <= 0.0 {
            return;
        }
        let y = self.y;
        self.push(DrawOp::Link {
            x: placed.x,
            y,
            width: placed.width,
            height,
            uri: uri.to_string(),
        });
    }

    /// Ends the pass. With `footer` set and more than one page, every page is
    /// stamped with "Page N of M" centred in the bottom margin.
    pub fn finalize(mut self, footer: Option<TextStyle>) -> PagedLayout {
        let total = self.pages.len();
        if let Some(style) = footer.filter(|_| total > 1) {
            let center = self.geometry.width / 2.0;
            let baseline = self.geometry.height - self.geometry.margins.bottom / 2.0;
            for (index, page) in self.pages.iter_mut().enumerate() {
                let text = format!("Page {} of {}", index + 1, total);
                let width = text_width(&text, &style.font);
                page.ops.push(DrawOp::Text {
                    x: center - width / 2.0,
                    baseline,
                    text,
                    style,
                });
            }
        }
        PagedLayout {
            geometry: self.geometry,
            pages: self.pages,
        }
    }

    fn push(&mut self, op: DrawOp) {
        // pages is never empty: created with one page, only ever grows
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{FontFamily, FontWeight};
    use crate::layout::style_profile::default_profile;

    fn body_style() -> TextStyle {
        TextStyle {
            font: FontSpec::new(FontFamily::Helvetica, FontWeight::Regular, 10.0),
            color: Rgb::BLACK,
        }
    }

    fn cursor() -> Cursor {
        Cursor::new(default_profile())
    }

    // ── ensure_space ────────────────────────────────────────────────────────

    #[test]
    fn test_new_cursor_starts_at_top_margin() {
        let c = cursor();
        assert_eq!(c.y(), default_profile().margins.top);
        assert_eq!(c.page_index(), 0);
        assert_eq!(c.page_count(), 1);
        assert!(c.at_page_top());
    }

    #[test]
    fn test_ensure_space_no_break_when_block_fits() {
        let mut c = cursor();
        assert!(!c.ensure_space(10.0));
        assert_eq!(c.page_index(), 0);
    }

    #[test]
    fn test_ensure_space_breaks_before_overflow() {
        let mut c = cursor();
        let limit = c.bottom_limit();
        c.advance(limit - c.y() - 3.0);
        assert!(c.ensure_space(5.0));
        assert_eq!(c.page_index(), 1);
        assert_eq!(c.page_count(), 2);
        assert_eq!(c.y(), default_profile().margins.top);
    }

    #[test]
    fn test_ensure_space_exact_fit_does_not_break() {
        let mut c = cursor();
        let remaining = c.bottom_limit() - c.y();
        assert!(!c.ensure_space(remaining));
    }

    #[test]
    fn test_oversized_block_on_fresh_page_does_not_loop() {
        let mut c = cursor();
        assert!(!c.ensure_space(10_000.0));
        assert_eq!(c.page_count(), 1);
    }

    #[test]
    fn test_tracked_writes_never_cross_bottom_limit() {
        let mut c = cursor();
        let heights = [4.7, 12.0, 0.5, 33.3, 7.25, 19.0, 2.0, 48.0];
        for step in 0..400 {
            let h = heights[step % heights.len()];
            c.ensure_space(h);
            c.write("line", c.left(), body_style(), Align::Left);
            c.advance(h);
            assert!(
                c.y() <= c.bottom_limit() + 1e-3,
                "step {step}: y {} exceeds {}",
                c.y(),
                c.bottom_limit()
            );
        }
        assert!(c.page_count() > 1);
    }

    // ── write ───────────────────────────────────────────────────────────────

    #[test]
    fn test_write_does_not_advance() {
        let mut c = cursor();
        let y = c.y();
        c.write("Hello", c.left(), body_style(), Align::Left);
        assert_eq!(c.y(), y);
    }

    #[test]
    fn test_write_alignment_positions() {
        let mut c = cursor();
        let right = c.right();
        let placed = c.write("2021", right, body_style(), Align::Right);
        assert!((placed.x + placed.width - right).abs() < 1e-4);

        let center = 105.0;
        let placed = c.write("Ada", center, body_style(), Align::Center);
        assert!((placed.x + placed.width / 2.0 - center).abs() < 1e-4);
    }

    #[test]
    fn test_blank_write_emits_nothing() {
        let mut c = cursor();
        c.write("   ", c.left(), body_style(), Align::Left);
        let layout = c.finalize(None);
        assert!(layout.pages[0].ops.is_empty());
    }

    #[test]
    fn test_writes_land_on_current_page() {
        let mut c = cursor();
        c.write("first", c.left(), body_style(), Align::Left);
        c.new_page();
        c.write("second", c.left(), body_style(), Align::Left);
        let layout = c.finalize(None);
        assert_eq!(layout.pages[0].texts().collect::<Vec<_>>(), vec!["first"]);
        assert_eq!(layout.pages[1].texts().collect::<Vec<_>>(), vec!["second"]);
    }

    #[test]
    fn test_link_skipped_for_empty_uri() {
        let mut c = cursor();
        let placed = c.write("x", c.left(), body_style(), Align::Left);
        c.link(placed, 4.0, "");
        let layout = c.finalize(None);
        assert_eq!(layout.pages[0].ops.len(), 1);
    }

    // ── finalize ────────────────────────────────────────────────────────────

    #[test]
    fn test_finalize_single_page_has_no_page_numbers() {
        let c = cursor();
        let layout = c.finalize(Some(body_style()));
        assert!(layout.pages[0].ops.is_empty());
    }

    #[test]
    fn test_finalize_stamps_page_numbers_on_every_page() {
        let mut c = cursor();
        c.new_page();
        c.new_page();
        let layout = c.finalize(Some(body_style()));
        assert_eq!(layout.pages.len(), 3);
        for (i, page) in layout.pages.iter().enumerate() {
            let texts: Vec<&str> = page.texts().collect();
            assert_eq!(texts, vec![format!("Page {} of 3", i + 1)]);
        }
    }
}
