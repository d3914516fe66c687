//! Page layout stage.
//!
//! Reports are laid out as positioned text and rectangle ops on A4 pages,
//! in millimetres with y growing downwards from the top edge. The layout
//! is a pure function of its input: page-break decisions depend only on
//! the cursor exceeding the fixed near-bottom threshold, so pagination and
//! row counts are assertable without parsing the written PDF back.

pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
/// Left edge of the header and detail content.
pub const MARGIN_LEFT_MM: f64 = 20.0;
/// Cursor position at the top of a fresh page.
pub const MARGIN_TOP_MM: f64 = 20.0;
/// Right edge of the content area.
pub const MARGIN_RIGHT_MM: f64 = 190.0;
/// Cursor position past which the next block starts on a fresh page.
pub const PAGE_BREAK_MM: f64 = 270.0;
/// Vertical step between header lines.
pub const LINE_MM: f64 = 7.0;

pub const BLACK: (u8, u8, u8) = (0, 0, 0);
pub const WHITE: (u8, u8, u8) = (255, 255, 255);
/// Table header band fill.
pub const HEADER_BLUE: (u8, u8, u8) = (41, 128, 185);
/// Alternating row shading.
pub const ROW_GREY: (u8, u8, u8) = (245, 245, 245);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// A single line of text, positioned by its baseline.
#[derive(Debug, Clone)]
pub struct TextOp {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub style: FontStyle,
    pub color: (u8, u8, u8),
    pub text: String,
}

/// A filled rectangle, positioned by its top-left corner.
#[derive(Debug, Clone)]
pub struct RectOp {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: (u8, u8, u8),
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub rects: Vec<RectOp>,
    pub texts: Vec<TextOp>,
}

/// Cursor-driven builder accumulating pages top to bottom.
#[derive(Debug)]
pub struct LayoutBuilder {
    pages: Vec<Page>,
    cursor: f64,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            cursor: MARGIN_TOP_MM,
        }
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn set_cursor(&mut self, y: f64) {
        self.cursor = y;
    }

    pub fn advance(&mut self, dy: f64) {
        self.cursor += dy;
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn break_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor = MARGIN_TOP_MM;
    }

    /// Start a fresh page when the cursor has passed the near-bottom
    /// threshold. Evaluated once per block by the callers.
    pub fn break_if_near_bottom(&mut self) {
        if self.cursor > PAGE_BREAK_MM {
            self.break_page();
        }
    }

    /// Place a line of text with its baseline on the current cursor.
    pub fn text(&mut self, x: f64, size: f64, style: FontStyle, text: impl Into<String>) {
        self.text_colored(x, size, style, BLACK, text);
    }

    pub fn text_colored(
        &mut self,
        x: f64,
        size: f64,
        style: FontStyle,
        color: (u8, u8, u8),
        text: impl Into<String>,
    ) {
        let y = self.cursor;
        self.text_at(x, y, size, style, color, text);
    }

    /// Place text at an explicit baseline, independent of the cursor.
    pub fn text_at(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        style: FontStyle,
        color: (u8, u8, u8),
        text: impl Into<String>,
    ) {
        self.current_page().texts.push(TextOp {
            x,
            y,
            size,
            style,
            color,
            text: text.into(),
        });
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: (u8, u8, u8)) {
        self.current_page().rects.push(RectOp {
            x,
            y,
            width,
            height,
            fill,
        });
    }

    fn current_page(&mut self) -> &mut Page {
        self.pages.last_mut().unwrap()
    }

    pub fn finish(self) -> Vec<Page> {
        self.pages
    }
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Baseline-to-baseline distance for a font size, in mm.
pub fn line_height_mm(size: f64) -> f64 {
    size * PT_TO_MM * 1.3
}

const PT_TO_MM: f64 = 25.4 / 72.0;
/// Average Helvetica glyph advance as a fraction of the font size.
const AVG_GLYPH_FRACTION: f64 = 0.45;

/// Greedy word wrap against a fixed content width. Words longer than a
/// whole line are split hard.
pub fn wrap_text(text: &str, width_mm: f64, size: f64) -> Vec<String> {
    let budget = ((width_mm / (size * PT_TO_MM * AVG_GLYPH_FRACTION)) as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > budget {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len > budget {
            // Hard-split an oversized word across lines.
            for ch in word.chars() {
                if current_len == budget {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                current.push(ch);
                current_len += 1;
            }
            continue;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
