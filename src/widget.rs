//! Widget assembly: configuration, the drawing surface, the pencil tool, and
//! the operations the host invokes (pointer routing, clear, export).

use log::{debug, warn};

use crate::api::DrawingSurface;
use crate::error::{Result, SegpadError};
use crate::event::{self, PointerEvent};
use crate::export::{self, MaskSink};
use crate::geom::BoundingRect;
use crate::pencil::PencilTool;

#[cfg(feature = "cairo")]
use crate::api::ImageSource;
#[cfg(feature = "cairo")]
use crate::backends::cairo::RasterSurface;

/// Construction-time inputs supplied by the hosting collaborator, plus the
/// widget's drawing style. Dimensions must match the background image's
/// natural pixel size; the widget never measures the image itself.
#[derive(Clone, Debug)]
pub struct SegmenterConfig {
    pub width: u32,
    pub height: u32,
    /// Locator for the background image, used in the markup fragment.
    pub image_url: String,
    pub title: String,
    pub stroke_color: String,
    pub line_width: f64,
    pub fill_color: String,
}

impl SegmenterConfig {
    pub fn new(width: u32, height: u32, image_url: impl Into<String>) -> Self {
        Self {
            width,
            height,
            image_url: image_url.into(),
            title: "Simple Segmenter".to_string(),
            stroke_color: "#ff0000".to_string(),
            line_width: 2.0,
            fill_color: "rgba(255,0,0,0.2)".to_string(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SegpadError::Other(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "canvas dimensions must be positive",
            ))));
        }
        Ok(())
    }
}

/// A single annotation session: one surface, one pencil, one config.
/// Multiple independent instances can coexist; nothing is shared.
pub struct Segmenter<S: DrawingSurface> {
    config: SegmenterConfig,
    surface: S,
    tool: PencilTool,
}

impl<S: DrawingSurface> Segmenter<S> {
    /// Assembles a widget around an already-constructed surface, applying the
    /// configured drawing style to it.
    pub fn with_surface(config: SegmenterConfig, mut surface: S) -> Result<Self> {
        config.validate()?;
        if surface.width() != config.width || surface.height() != config.height {
            warn!(
                "surface is {}x{} but the widget was configured {}x{}",
                surface.width(),
                surface.height(),
                config.width,
                config.height
            );
        }
        surface.set_stroke_color(&config.stroke_color)?;
        surface.set_line_width(config.line_width)?;
        surface.set_fill_color(&config.fill_color)?;
        debug!(
            "initialized {}x{} annotation widget",
            config.width, config.height
        );
        Ok(Self {
            config,
            surface,
            tool: PencilTool::new(),
        })
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn tool(&self) -> &PencilTool {
        &self.tool
    }

    /// Routes one raw pointer event to the pencil. The bounding rectangle
    /// must be freshly queried for this event; the canvas may have moved.
    pub fn handle_pointer(&mut self, event: &PointerEvent, rect: &BoundingRect) -> Result<()> {
        event::dispatch(&mut self.tool, &mut self.surface, event, rect)
    }

    /// Erases all drawn pixels, restoring the background. Deliberately leaves
    /// the pencil's state alone: clearing mid-stroke only removes pixels.
    pub fn clear(&mut self) -> Result<()> {
        self.surface.clear()
    }

    /// Snapshots the bitmap and emits it to the sink as a PNG data URL.
    pub fn export_mask(&self, sink: &mut dyn MaskSink) -> Result<()> {
        export::export_mask(&self.surface, sink)
    }

    /// Renders the embeddable markup fragment for this widget.
    #[cfg(feature = "html")]
    pub fn render_html(&self) -> Result<String> {
        crate::html::render_fragment(&self.config)
    }
}

#[cfg(feature = "cairo")]
impl Segmenter<RasterSurface> {
    /// Builds a raster-backed widget. `background` carries the image's pixels
    /// if the collaborator wants them composited into exports; it is expected
    /// to match the configured dimensions.
    pub fn new(config: SegmenterConfig, background: Option<&dyn ImageSource>) -> Result<Self> {
        config.validate()?;
        if let Some(image) = background {
            if image.width() != config.width || image.height() != config.height {
                warn!(
                    "background image is {}x{} but the canvas is {}x{}",
                    image.width(),
                    image.height(),
                    config.width,
                    config.height
                );
            }
        }
        let surface = RasterSurface::new(config.width, config.height, background)?;
        Self::with_surface(config, surface)
    }
}
