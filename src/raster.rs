//! Drawing primitives on a tiny-skia pixmap.
//!
//! Anti-aliasing is off, so every pixel is either fully covered by a shape
//! or left untouched and the finished icon holds only the design colors.
//! A pixel is covered when its center lies inside the shape.

use crate::models::{Point, Polyline};
use image::{Rgb, RgbImage};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Allocates a square canvas filled with `background`.
pub fn new_canvas(
    size: u32,
    background: Rgb<u8>,
) -> Result<Pixmap, Box<dyn std::error::Error>> {
    let mut pixmap = Pixmap::new(size, size).ok_or("canvas size must be non-zero")?;
    let Rgb([r, g, b]) = background;
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));
    Ok(pixmap)
}

fn solid_paint(color: Rgb<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    let Rgb([r, g, b]) = color;
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = false;
    paint
}

/// Strokes `line` with rounded joints and flat ends. Fewer than two points,
/// or points that all coincide, draw nothing.
pub fn stroke_polyline(canvas: &mut Pixmap, line: &Polyline, color: Rgb<u8>) {
    let Some((first, rest)) = line.points.split_first() else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for point in rest {
        pb.line_to(point.x as f32, point.y as f32);
    }
    let Some(path) = pb.finish() else {
        return;
    };

    let stroke = Stroke {
        width: line.width as f32,
        line_cap: LineCap::Butt,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    canvas.stroke_path(&path, &solid_paint(color), &stroke, Transform::identity(), None);
}

/// Fills the disc of `radius` pixels around `center`.
pub fn fill_disc(canvas: &mut Pixmap, center: Point, radius: u32, color: Rgb<u8>) {
    let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
    else {
        return;
    };
    canvas.fill_path(
        &path,
        &solid_paint(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

/// Copies the canvas into an RGB image, dropping alpha.
pub fn to_rgb_image(canvas: &Pixmap) -> Result<RgbImage, Box<dyn std::error::Error>> {
    let data = canvas
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue()]
        })
        .collect();
    RgbImage::from_raw(canvas.width(), canvas.height(), data)
        .ok_or_else(|| "canvas and image sizes differ".into())
}
