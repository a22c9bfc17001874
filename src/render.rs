use crate::models::IconDesign;
use crate::raster::{fill_disc, new_canvas, stroke_polyline, to_rgb_image};
use image::RgbImage;

/// Draws `design` onto a fresh canvas: background, stroked polyline, then
/// the accent disc on top.
pub fn render_icon(design: &IconDesign) -> Result<RgbImage, Box<dyn std::error::Error>> {
    let mut canvas = new_canvas(design.size, design.background)?;
    stroke_polyline(&mut canvas, &design.polyline, design.foreground);
    fill_disc(
        &mut canvas,
        design.accent.center,
        design.accent.radius,
        design.foreground,
    );
    to_rgb_image(&canvas)
}
