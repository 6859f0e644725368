//! Traits and supporting types for the drawing surface the annotation widget
//! draws on. These are interface definitions only; any backend that can hold
//! a bitmap and trace paths (software rasterizer, GPU canvas, a recorder for
//! tests) can implement them.

use crate::error::Result;

/// A raw RGBA bitmap. Row-major, 4 bytes per pixel, straight (non-premultiplied)
/// alpha. Length must be `width * height * 4`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ImageData {
    /// Creates a fully transparent bitmap of the given dimensions.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }
}

/// A source of pixels the surface can composite, e.g. the background image
/// supplied by the hosting collaborator. The widget never loads or decodes
/// images itself.
pub trait ImageSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Returns a view over straight-alpha RGBA pixels.
    /// Length must be width * height * 4.
    fn data_rgba(&self) -> Option<&[u8]>;
}

impl ImageSource for ImageData {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn data_rgba(&self) -> Option<&[u8]> {
        Some(self.data.as_slice())
    }
}

/// Stroke and fill styling. Colors are CSS-style strings (`"#rrggbb"`,
/// `"#rrggbbaa"`, `"rgb(r,g,b)"`, `"rgba(r,g,b,a)"`).
pub trait SurfaceStyles {
    /// Sets the paint used for strokes.
    fn set_stroke_color(&mut self, color: &str) -> Result<()>;
    /// Returns the current stroke paint.
    fn stroke_color(&self) -> Result<String>;

    /// Sets stroke thickness in pixels.
    fn set_line_width(&mut self, value: f64) -> Result<()>;
    /// Returns the current stroke thickness.
    fn line_width(&self) -> Result<f64>;

    /// Sets the paint used to fill the enclosed region.
    fn set_fill_color(&mut self, color: &str) -> Result<()>;
    /// Returns the current fill paint.
    fn fill_color(&self) -> Result<String>;
}

/// Path construction and painting. The current path persists across `stroke`
/// and `fill`; only `begin_path` discards it. A `line_to` with no current
/// subpath starts one at that point.
pub trait SurfacePaths {
    /// Starts a new empty path, discarding any path built so far.
    fn begin_path(&mut self) -> Result<()>;
    /// Moves the current point without drawing.
    fn move_to(&mut self, x: f64, y: f64) -> Result<()>;
    /// Adds a straight segment from the current point to (x, y).
    fn line_to(&mut self, x: f64, y: f64) -> Result<()>;
    /// Closes the current subpath with a straight line back to its start.
    fn close_path(&mut self) -> Result<()>;
    /// Strokes the current path with the stroke paint. The path is kept.
    fn stroke(&mut self) -> Result<()>;
    /// Fills the current path with the fill paint. The path is kept.
    fn fill(&mut self) -> Result<()>;
}

/// The bitmap itself: fixed dimensions, clear-all, and snapshots for export.
pub trait SurfaceBitmap {
    /// Pixel width, fixed at construction.
    fn width(&self) -> u32;
    /// Pixel height, fixed at construction.
    fn height(&self) -> u32;

    /// Erases every drawn stroke and fill, restoring the background. Does not
    /// disturb the current path, so a stroke in progress continues cleanly.
    fn clear(&mut self) -> Result<()>;

    /// Returns the full current bitmap (background plus everything drawn).
    fn snapshot(&self) -> Result<ImageData>;
}

/// The complete surface contract the pencil tool and exporter draw against.
pub trait DrawingSurface: SurfaceStyles + SurfacePaths + SurfaceBitmap {}

impl<T> DrawingSurface for T where T: SurfaceStyles + SurfacePaths + SurfaceBitmap {}
