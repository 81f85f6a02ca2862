//! Info panel rendering
//!
//! Right-hand 40% of the canvas: word-wrapped product name, the fixed
//! spec/requirements list, and a footer with the generation date. The
//! date is injected by the caller so rendering stays a pure function.

use crate::catalog::Product;
use crate::render::layout::{self, Region};
use crate::render::surface::{Surface, TextAnchor, TextStyle};
use crate::render::text::wrap_text;
use chrono::NaiveDate;

/// Fixed requirement bullets shown for every inflatable
const REQUIREMENT_LINES: &[&str] = &[
    "• Continuous blower power",
    "• 4 anchor points required",
    "• Level ground surface",
    "• Clearance for entrance ramp",
];

/// The ordered spec lines under the product name
///
/// Blank entries render as empty lines; spacing is part of the fixed
/// layout.
pub fn build_spec_lines(product: &Product) -> Vec<String> {
    let mut lines = vec![
        format!("Setup Area: {}", product.setup_area.dimension_label()),
        format!("Total Space: {} sq ft", product.setup_area.sq_ft),
        String::new(),
        format!("Actual Size: {}", product.actual_size.dimension_label()),
        format!("Jumping Area: {} sq ft", product.actual_size.sq_ft),
        String::new(),
        format!("Category: {}", product.category.label().to_uppercase()),
        String::new(),
        "Requirements:".to_string(),
    ];
    lines.extend(REQUIREMENT_LINES.iter().map(|s| s.to_string()));
    lines
}

/// Draw the info panel into `region`
///
/// `canvas_width`/`canvas_height` are the full canvas dimensions, used
/// only for the footer caption.
pub fn render_info_panel(
    surface: &mut dyn Surface,
    product: &Product,
    region: &Region,
    canvas_width: u32,
    canvas_height: u32,
    generated_on: NaiveDate,
) {
    surface.fill_rect(
        region.x,
        region.y,
        region.w,
        region.h,
        layout::PANEL_BACKGROUND,
    );

    let text_x = region.x + layout::INFO_PADDING;
    let wrap_width = region.w - 2.0 * layout::INFO_PADDING;

    // Product name, wrapped to the panel width
    let name_style = TextStyle::bold(
        layout::NAME_FONT_SIZE,
        layout::TEXT_DARK,
        TextAnchor::Left,
    );
    let mut current_y = region.y + layout::NAME_TOP_OFFSET;
    for line in wrap_text(surface, &product.name, wrap_width, &name_style) {
        surface.draw_text(&line, text_x, current_y, &name_style);
        current_y += layout::NAME_LINE_HEIGHT;
    }
    current_y += layout::NAME_BLOCK_GAP;

    // Spec list
    let spec_style = TextStyle::regular(
        layout::SPEC_FONT_SIZE,
        layout::TEXT_BODY,
        TextAnchor::Left,
    );
    for line in build_spec_lines(product) {
        if !line.is_empty() {
            surface.draw_text(&line, text_x, current_y, &spec_style);
        }
        current_y += layout::SPEC_LINE_HEIGHT;
    }

    // Footer pinned to the panel bottom
    let footer_style = TextStyle::regular(
        layout::FOOTER_FONT_SIZE,
        layout::TEXT_MUTED,
        TextAnchor::Left,
    );
    let footer_y = region.y + region.h - layout::FOOTER_BOTTOM_OFFSET;
    surface.draw_text(
        &format!("Virtual Layout • {canvas_width}×{canvas_height}"),
        text_x,
        footer_y,
        &footer_style,
    );
    surface.draw_text(
        &format!("Generated: {}", generated_on.format("%-m/%-d/%Y")),
        text_x,
        footer_y + layout::FOOTER_LINE_GAP,
        &footer_style,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Footprint};
    use crate::render::surface::RecordingSurface;

    fn product() -> Product {
        Product {
            id: None,
            name: "Pirate Ship Castle".to_string(),
            category: Category::BounceHouse,
            setup_area: Footprint {
                length: 20.0,
                width: 18.0,
                height: Some(16.0),
                sq_ft: 360.0,
            },
            actual_size: Footprint {
                length: 15.0,
                width: 13.0,
                height: Some(14.0),
                sq_ft: 195.0,
            },
        }
    }

    #[test]
    fn test_spec_lines_order_and_content() {
        let lines = build_spec_lines(&product());

        assert_eq!(lines[0], "Setup Area: 20' × 18' × 16'");
        assert_eq!(lines[1], "Total Space: 360 sq ft");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Actual Size: 15' × 13' × 14'");
        assert_eq!(lines[4], "Jumping Area: 195 sq ft");
        assert_eq!(lines[6], "Category: BOUNCE HOUSE");
        assert_eq!(lines[8], "Requirements:");
        assert_eq!(lines.len(), 13);
        assert!(lines[9..].iter().all(|l| l.starts_with('•')));
    }

    #[test]
    fn test_spec_lines_omit_missing_height() {
        let mut p = product();
        p.setup_area.height = None;
        let lines = build_spec_lines(&p);
        assert_eq!(lines[0], "Setup Area: 20' × 18'");
    }

    #[test]
    fn test_panel_renders_name_and_footer() {
        let mut surface = RecordingSurface::new();
        let region = Region::info_panel(2000, 1000);
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        render_info_panel(&mut surface, &product(), &region, 2000, 1000, date);

        let texts = surface.texts();
        assert!(texts.contains(&"Pirate Ship Castle"));
        assert!(texts.contains(&"Requirements:"));
        assert!(texts.contains(&"Generated: 8/7/2026"));
        assert!(texts.iter().any(|t| t.starts_with("Virtual Layout •")));
    }

    #[test]
    fn test_long_name_wraps_to_multiple_lines() {
        let mut surface = RecordingSurface::new();
        let region = Region::info_panel(2000, 1000);
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let mut p = product();
        p.name = "Tropical Paradise Mega Adventure Combo Bounce House".to_string();
        render_info_panel(&mut surface, &p, &region, 2000, 1000, date);

        // 51 chars at 42px bold won't fit 720px on one line
        let name_lines = surface
            .texts()
            .iter()
            .filter(|t| t.contains("Tropical") || t.contains("Adventure") || t.contains("Combo"))
            .count();
        assert!(name_lines >= 2);
    }
}
