//! Raster drawing backend
//!
//! Implements `Surface` on an RGBA image buffer: alpha-blended fills
//! via imageproc's `Blend` canvas, text and metrics via ab_glyph, PNG
//! export via the image crate. Fonts are loaded from disk; without a
//! usable font file the backend cannot measure text and refuses to
//! start rather than failing mid-draw.

use crate::error::{Result, YardproofError};
use crate::render::surface::{Color, Surface, TextAnchor, TextStyle};
use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_text_mut, Blend,
};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

/// Well-known regular-weight font locations, tried in order when no
/// font path is configured
const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Regular + bold font pair for the canvas
///
/// `FontArc` clones are cheap (shared data), so one loaded set serves
/// a whole batch.
#[derive(Debug, Clone)]
pub struct FontSet {
    regular: FontArc,
    bold: FontArc,
}

impl FontSet {
    /// Load fonts from an explicit path or the system search list
    ///
    /// A `-Bold` sibling (DejaVuSans-Bold.ttf next to DejaVuSans.ttf,
    /// Arial Bold next to Arial) is used for bold text when present;
    /// otherwise bold falls back to the regular face.
    pub fn load(font_path: Option<&Path>) -> Result<Self> {
        let regular_path = match font_path {
            Some(p) => {
                if !p.exists() {
                    return Err(YardproofError::Render(format!(
                        "font file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => FONT_SEARCH_PATHS
                .iter()
                .map(|p| PathBuf::from(*p))
                .find(|p| p.exists())
                .ok_or_else(|| {
                    YardproofError::Render(
                        "no usable font found; set one with `yardproof config --set-font`"
                            .to_string(),
                    )
                })?,
        };

        let regular = load_font(&regular_path)?;
        let bold = bold_sibling(&regular_path)
            .and_then(|p| load_font(&p).ok())
            .unwrap_or_else(|| regular.clone());

        Ok(Self { regular, bold })
    }

    fn font_for(&self, style: &TextStyle) -> &FontArc {
        if style.bold {
            &self.bold
        } else {
            &self.regular
        }
    }
}

fn load_font(path: &Path) -> Result<FontArc> {
    let data = std::fs::read(path)?;
    FontArc::try_from_vec(data)
        .map_err(|e| YardproofError::Render(format!("invalid font {}: {e}", path.display())))
}

/// `foo.ttf` -> `foo-Bold.ttf` if it exists on disk
fn bold_sibling(path: &Path) -> Option<PathBuf> {
    let stem = path.file_stem()?.to_str()?;
    let ext = path.extension()?.to_str()?;
    let candidate = path.with_file_name(format!("{stem}-Bold.{ext}"));
    candidate.exists().then_some(candidate)
}

/// Rasterizing `Surface` backed by an RGBA buffer
pub struct RasterSurface {
    canvas: Blend<RgbaImage>,
    width: u32,
    height: u32,
    fonts: FontSet,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, fonts: FontSet) -> Self {
        Self {
            canvas: Blend(RgbaImage::new(width, height)),
            width,
            height,
            fonts,
        }
    }

    /// Encode the finished canvas as PNG bytes
    pub fn into_png(self) -> Result<Vec<u8>> {
        let image = self.canvas.0;
        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer)
            .write_image(
                image.as_raw(),
                self.width,
                self.height,
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| YardproofError::Render(format!("PNG encode failed: {e}")))?;
        Ok(buffer)
    }

    /// Direct access to the pixel buffer (for tests and previews)
    pub fn image(&self) -> &RgbaImage {
        &self.canvas.0
    }

    fn measure_with(&self, font: &FontArc, text: &str, size: f64) -> f64 {
        let scale = PxScale::from(size as f32);
        let scaled = font.as_scaled(scale);
        let mut width = 0.0f32;
        let mut previous: Option<ab_glyph::GlyphId> = None;
        for ch in text.chars() {
            let glyph = font.glyph_id(ch);
            if let Some(prev) = previous {
                width += scaled.kern(prev, glyph);
            }
            width += scaled.h_advance(glyph);
            previous = Some(glyph);
        }
        width as f64
    }
}

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}

impl Surface for RasterSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if w < 1.0 || h < 1.0 {
            return;
        }
        let rect = Rect::at(x.round() as i32, y.round() as i32)
            .of_size(w.round().max(1.0) as u32, h.round().max(1.0) as u32);
        draw_filled_rect_mut(&mut self.canvas, rect, to_rgba(color));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, line_width: f64, color: Color) {
        // Four bars centered on the rectangle edges
        let lw = line_width.max(1.0);
        let half = lw / 2.0;
        let bars = [
            (x - half, y - half, w + lw, lw),
            (x - half, y + h - half, w + lw, lw),
            (x - half, y - half, lw, h + lw),
            (x + w - half, y - half, lw, h + lw),
        ];
        for (bx, by, bw, bh) in bars {
            self.fill_rect(bx, by, bw, bh, color);
        }
    }

    fn fill_circle(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Color,
        outline: Color,
        outline_width: f64,
    ) {
        let center = (cx.round() as i32, cy.round() as i32);
        let r = radius.round() as i32;
        draw_filled_circle_mut(&mut self.canvas, center, r, to_rgba(fill));

        // Ring of 1px hollow circles straddling the edge
        let half = (outline_width / 2.0).round() as i32;
        for offset in -half..=half {
            if r + offset > 0 {
                draw_hollow_circle_mut(&mut self.canvas, center, r + offset, to_rgba(outline));
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        let font = self.fonts.font_for(style).clone();
        let scale = PxScale::from(style.size as f32);

        let anchored_x = match style.anchor {
            TextAnchor::Left => x,
            TextAnchor::Center => x - self.measure_with(&font, text, style.size) / 2.0,
        };
        // Surface y is the baseline; imageproc wants the glyph-box top
        let ascent = font.as_scaled(scale).ascent() as f64;

        draw_text_mut(
            &mut self.canvas,
            to_rgba(style.color),
            anchored_x.round() as i32,
            (y - ascent).round() as i32,
            scale,
            &font,
            text,
        );
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        self.measure_with(self.fonts.font_for(style), text, style.size)
    }
}
