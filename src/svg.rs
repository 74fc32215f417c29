//! SVG rendering of the ratio preview.
//!
//! Draws the container, the padded area the preview may occupy, and the
//! fitted preview box centered inside it, labelled with the simplified
//! ratio and its decimal.
//!
//! # Example
//!
//! ```
//! use aspectcalc::{Dimensions, Size, svg::render_preview_svg};
//!
//! let svg = render_preview_svg(Size::new(500, 500), Dimensions::new(16.0, 9.0));
//! assert!(svg.contains("16:9"));
//! assert!(svg.contains("400×225"));
//! ```

use crate::fit::{DEFAULT_PADDING, Size, center_offset, fit_scale_padded};
use crate::ratio::Dimensions;

/// Maximum drawn width of the container panel.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum drawn height of the container panel.
const MAX_PANEL_H: f64 = 200.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above the panel.
const LABEL_H: f64 = 22.0;
/// Height of annotation text area below the panel.
const ANNOTATION_H: f64 = 22.0;

/// Render a preview of `content` fitted into `container` with
/// [`DEFAULT_PADDING`].
pub fn render_preview_svg(container: Size, content: Dimensions) -> String {
    render_preview_svg_padded(container, content, DEFAULT_PADDING)
}

/// Render a preview of `content` fitted into `container` with `padding`.
///
/// Invalid content or an empty container renders the container alone with
/// an explanatory label.
pub fn render_preview_svg_padded(container: Size, content: Dimensions, padding: f64) -> String {
    let preview = fit_scale_padded(
        container.width as f64,
        container.height as f64,
        content.width as f64,
        content.height as f64,
        padding,
    );

    let label = match content.reduce() {
        Ok(ratio) => format!("{ratio}  ({})", ratio.decimal_label()),
        Err(e) => format!("{e}"),
    };

    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + MAX_PANEL_H + ANNOTATION_H + MARGIN_TOP;
    let center_x = total_w / 2.0;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .container { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .padding { fill: none; stroke: #aaa; stroke-width: 1; stroke-dasharray: 4,2; }
  .preview { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .container { fill: #2d2d2d; stroke: #555; }
    .padding { stroke: #666; }
    .preview { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let y = MARGIN_TOP;
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        y + 14.0,
        escape_xml(&label)
    ));
    svg.push('\n');

    let panel_y = y + LABEL_H;
    let (pw, ph, scale) = scale_to_panel(container);
    let panel_x = center_x - pw / 2.0;
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="container" rx="2"/>"#,
        panel_x, panel_y, pw, ph
    ));
    svg.push('\n');

    let padding = if padding.is_finite() {
        padding.clamp(0.0, 0.5)
    } else {
        0.0
    };
    if padding > 0.0 && padding < 0.5 {
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="padding"/>"#,
            panel_x + pw * padding,
            panel_y + ph * padding,
            pw * (1.0 - 2.0 * padding),
            ph * (1.0 - 2.0 * padding)
        ));
        svg.push('\n');
    }

    if !preview.is_empty() {
        let (ox, oy) = center_offset(preview, container.width, container.height);
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="preview" rx="1"/>"#,
            panel_x + ox as f64 * scale,
            panel_y + oy as f64 * scale,
            preview.width as f64 * scale,
            preview.height as f64 * scale
        ));
        svg.push('\n');
    }

    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        panel_y + MAX_PANEL_H + 14.0,
        escape_xml(&format!(
            "preview {}×{} in {}×{}",
            preview.width, preview.height, container.width, container.height
        ))
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Scale the container to fit within MAX_PANEL_W × MAX_PANEL_H, preserving
/// aspect ratio.
fn scale_to_panel(size: Size) -> (f64, f64, f64) {
    let w = size.width as f64;
    let h = size.height as f64;
    if w == 0.0 || h == 0.0 {
        return (MAX_PANEL_W, MAX_PANEL_H, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
