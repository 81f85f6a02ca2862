//! Schematic diagram rendering
//!
//! Maps the product's real-world footprints (feet) into the diagram
//! region (pixels): aspect-preserving fit of the setup area with a
//! fixed margin, actual size nested at the same center, labels and
//! anchor markers around the setup rectangle. Geometry is computed as
//! a pure value first and drawn afterwards.

use crate::catalog::Product;
use crate::render::layout::{self, Region};
use crate::render::surface::{Surface, TextAnchor, TextStyle};

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PixelRect {
    fn centered(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        Self {
            x: cx - w / 2.0,
            y: cy - h / 2.0,
            w,
            h,
        }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

/// Resolved diagram geometry for one product in one region
#[derive(Debug, Clone)]
pub struct DiagramGeometry {
    /// Pixels per foot
    pub scale: f64,
    pub center: (f64, f64),
    pub setup: PixelRect,
    pub actual: PixelRect,
    /// Anchor marker centers, inset from each setup-rect corner
    pub anchors: [(f64, f64); 4],
}

/// Compute the diagram geometry
///
/// Scale fits the larger setup dimension into the region minus the
/// fixed margin; both rectangles share the region center, so the
/// actual-size rectangle stays inside the setup rectangle as long as
/// the catalog invariant (actual ⊆ setup) holds.
pub fn compute_diagram_geometry(product: &Product, region: &Region) -> DiagramGeometry {
    let setup_area = product.setup_area;
    let actual_size = product.actual_size;

    let max_dimension = setup_area.length.max(setup_area.width);
    let scale = ((region.w - layout::DIAGRAM_MARGIN) / max_dimension)
        .min((region.h - layout::DIAGRAM_MARGIN) / max_dimension);

    let (cx, cy) = region.center();

    let setup = PixelRect::centered(cx, cy, setup_area.length * scale, setup_area.width * scale);
    let actual = PixelRect::centered(
        cx,
        cy,
        actual_size.length * scale,
        actual_size.width * scale,
    );

    let inset = layout::ANCHOR_INSET;
    let anchors = [
        (setup.x + inset, setup.y + inset),
        (setup.x + setup.w - inset, setup.y + inset),
        (setup.x + inset, setup.y + setup.h - inset),
        (setup.x + setup.w - inset, setup.y + setup.h - inset),
    ];

    DiagramGeometry {
        scale,
        center: (cx, cy),
        setup,
        actual,
        anchors,
    }
}

/// Draw the diagram into `region`
pub fn render_diagram(surface: &mut dyn Surface, product: &Product, region: &Region) {
    let geometry = compute_diagram_geometry(product, region);
    let (cx, cy) = geometry.center;
    let setup = geometry.setup;
    let actual = geometry.actual;

    // Setup area (outer), then actual size nested on top
    surface.fill_rect(setup.x, setup.y, setup.w, setup.h, layout::SETUP_FILL);
    surface.stroke_rect(
        setup.x,
        setup.y,
        setup.w,
        setup.h,
        layout::SETUP_STROKE_WIDTH,
        layout::SETUP_STROKE,
    );
    surface.fill_rect(actual.x, actual.y, actual.w, actual.h, layout::ACTUAL_FILL);
    surface.stroke_rect(
        actual.x,
        actual.y,
        actual.w,
        actual.h,
        layout::ACTUAL_STROKE_WIDTH,
        layout::ACTUAL_STROKE,
    );

    surface.draw_text(
        "JUMPING AREA",
        cx,
        cy,
        &TextStyle::bold(
            layout::JUMP_LABEL_FONT_SIZE,
            layout::TEXT_WHITE,
            TextAnchor::Center,
        ),
    );

    // Dimension lines above the setup rectangle
    let dimension_style = TextStyle::bold(
        layout::DIMENSION_FONT_SIZE,
        layout::TEXT_DARK,
        TextAnchor::Center,
    );
    surface.draw_text(
        &format!(
            "{}' × {}' Setup Area",
            product.setup_area.length, product.setup_area.width
        ),
        cx,
        setup.y - layout::DIMENSION_LINE1_OFFSET,
        &dimension_style,
    );
    surface.draw_text(
        &format!("{} sq ft required", product.setup_area.sq_ft),
        cx,
        setup.y - layout::DIMENSION_LINE2_OFFSET,
        &dimension_style,
    );

    surface.draw_text(
        "↓ Entrance / Exit",
        cx,
        setup.y + setup.h + layout::ENTRANCE_OFFSET,
        &TextStyle::bold(
            layout::ENTRANCE_FONT_SIZE,
            layout::ENTRANCE_BLUE,
            TextAnchor::Center,
        ),
    );

    for (ax, ay) in geometry.anchors {
        surface.fill_circle(
            ax,
            ay,
            layout::ANCHOR_RADIUS,
            layout::ANCHOR_RED,
            layout::ANCHOR_OUTLINE,
            layout::ANCHOR_OUTLINE_WIDTH,
        );
    }
}
