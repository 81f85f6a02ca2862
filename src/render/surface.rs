//! Drawing surface abstraction
//!
//! The renderer describes the layout through this small capability
//! interface instead of talking to a graphics backend directly, so the
//! geometry and text layout are testable without rasterizing anything.
//! `RasterSurface` (raster module) is the real backend; the recording
//! surface here is the test double.

/// RGBA color, straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Horizontal anchor for text placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Left,
    Center,
}

/// Font settings for one text draw
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub bold: bool,
    pub anchor: TextAnchor,
}

impl TextStyle {
    pub const fn bold(size: f64, color: Color, anchor: TextAnchor) -> Self {
        Self {
            size,
            color,
            bold: true,
            anchor,
        }
    }

    pub const fn regular(size: f64, color: Color, anchor: TextAnchor) -> Self {
        Self {
            size,
            color,
            bold: false,
            anchor,
        }
    }
}

/// 2-D drawing capability required by the layout renderer
///
/// Coordinates are pixels with the origin at the top-left. Text `y` is
/// the baseline, matching the browser-canvas convention the layout
/// offsets were designed around.
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, line_width: f64, color: Color);

    fn fill_circle(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Color,
        outline: Color,
        outline_width: f64,
    );

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);

    /// Advance width of `text` in pixels under `style`
    fn measure_text(&self, text: &str, style: &TextStyle) -> f64;
}

// ============================================
// Recording surface (test double)
// ============================================

/// One recorded draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    StrokeRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        line_width: f64,
        color: Color,
    },
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Color,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        size: f64,
        anchor: TextAnchor,
    },
}

/// Surface that records draw calls instead of rasterizing
///
/// Text width is approximated as 0.6 × font size per character, which
/// is close enough to a real sans-serif for wrap decisions in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded text contents, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

const APPROX_CHAR_WIDTH_RATIO: f64 = 0.6;

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, line_width: f64, color: Color) {
        self.calls.push(DrawCall::StrokeRect {
            x,
            y,
            w,
            h,
            line_width,
            color,
        });
    }

    fn fill_circle(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Color,
        _outline: Color,
        _outline_width: f64,
    ) {
        self.calls.push(DrawCall::FillCircle {
            cx,
            cy,
            radius,
            fill,
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            size: style.size,
            anchor: style.anchor,
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        text.chars().count() as f64 * style.size * APPROX_CHAR_WIDTH_RATIO
    }
}
