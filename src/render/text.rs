//! Greedy word wrapping
//!
//! Backend-agnostic: line-break decisions come from the surface's text
//! measurement, so wrapped output matches whatever font the surface
//! actually renders with.

use crate::render::surface::{Surface, TextStyle};

/// Word-wrap `text` to `max_width` pixels
///
/// Greedy: the first word starts the line; each following word is
/// tentatively appended and the line is committed once the measured
/// tentative width exceeds `max_width`. A single over-wide word still
/// gets its own line rather than being split.
pub fn wrap_text(
    surface: &dyn Surface,
    text: &str,
    max_width: f64,
    style: &TextStyle,
) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();

    for word in words {
        let tentative = format!("{current} {word}");
        if surface.measure_text(&tentative, style) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = tentative;
        }
    }
    lines.push(current);

    lines
}
