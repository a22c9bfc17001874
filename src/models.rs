use image::Rgb;

/// Where the generated icon is written, relative to the working directory.
pub const OUTPUT_PATH: &str = "Tracker/Assets.xcassets/AppIcon.appiconset/1024.png";

/// A pixel coordinate on the canvas. May lie outside of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A connected line through `points`, stroked `width` pixels wide with
/// rounded joints and flat ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub width: u32,
}

/// The filled disc capping the end of the polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccentCircle {
    pub center: Point,
    pub radius: u32,
}

/// Everything needed to draw one square icon.
#[derive(Clone, Debug, PartialEq)]
pub struct IconDesign {
    pub size: u32,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    pub polyline: Polyline,
    pub accent: AccentCircle,
}

impl IconDesign {
    /// The Tracker app icon: a white rising line with a dot on the latest
    /// point, on a muted green (#597366) background.
    pub fn tracker() -> Self {
        let points = vec![
            Point::new(150, 700),
            Point::new(350, 600),
            Point::new(550, 750),
            Point::new(850, 350),
        ];
        let end = points[points.len() - 1];

        Self {
            size: 1024,
            background: Rgb([89, 115, 102]),
            foreground: Rgb([255, 255, 255]),
            polyline: Polyline { points, width: 100 },
            accent: AccentCircle {
                center: end,
                radius: 80,
            },
        }
    }
}
