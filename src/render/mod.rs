//! Virtual layout rendering
//!
//! Produces the schematic layout image for a matched product: diagram
//! on the left 60% of the canvas, info panel on the right 40%. The
//! drawing goes through the `Surface` trait; `generate_virtual_layout`
//! is the rasterizing entry point the CLI uses.

pub mod diagram;
pub mod info_panel;
pub mod layout;
pub mod raster;
pub mod surface;
pub mod text;

pub use diagram::{compute_diagram_geometry, render_diagram, DiagramGeometry};
pub use info_panel::render_info_panel;
pub use layout::Region;
pub use raster::{FontSet, RasterSurface};
pub use surface::{Color, DrawCall, RecordingSurface, Surface, TextAnchor, TextStyle};
pub use text::wrap_text;

use crate::catalog::Product;
use crate::error::Result;
use chrono::NaiveDate;

/// Canvas size for one render call
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas_width: layout::CANVAS_WIDTH,
            canvas_height: layout::CANVAS_HEIGHT,
        }
    }
}

/// Finished layout image: encoded PNG plus the product it was made for
///
/// Ownership passes to the caller; the renderer keeps no reference.
#[derive(Debug, Clone)]
pub struct LayoutImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub product: Product,
}

/// Draw the full layout onto any surface
///
/// Validates the product once up front, then fills the background and
/// renders both panels. Pure in everything but the surface mutation;
/// the footer date is injected rather than read from a clock.
pub fn render_layout(
    surface: &mut dyn Surface,
    product: &Product,
    options: &RenderOptions,
    generated_on: NaiveDate,
) -> Result<()> {
    product.validate()?;

    let width = options.canvas_width;
    let height = options.canvas_height;

    surface.fill_rect(
        0.0,
        0.0,
        width as f64,
        height as f64,
        layout::BACKGROUND,
    );

    let diagram_region = Region::diagram(width, height);
    render_diagram(surface, product, &diagram_region);

    let info_region = Region::info_panel(width, height);
    render_info_panel(surface, product, &info_region, width, height, generated_on);

    Ok(())
}

/// Render a product to a PNG layout image
pub fn generate_virtual_layout(
    product: &Product,
    options: &RenderOptions,
    fonts: &FontSet,
    generated_on: NaiveDate,
) -> Result<LayoutImage> {
    let mut surface = RasterSurface::new(options.canvas_width, options.canvas_height, fonts.clone());
    render_layout(&mut surface, product, options, generated_on)?;

    Ok(LayoutImage {
        png: surface.into_png()?,
        width: options.canvas_width,
        height: options.canvas_height,
        product: product.clone(),
    })
}
