//! segpad: an embeddable freehand image-annotation widget.
//!
//! A drawing surface is overlaid on a background image; a pencil tool traces
//! pointer events into a stroked, closed, filled mask region; an exporter
//! serializes the bitmap to a PNG data URL and hands it to the hosting
//! environment through a typed sink. The surface is a set of narrow traits so
//! backends are pluggable: a recording surface for tests, and a cairo raster
//! surface (feature `cairo`) for real bitmaps. The embeddable markup fragment
//! lives behind the `html` feature.

pub mod api;
pub mod backends;
pub mod error;
pub mod event;
pub mod export;
pub mod geom;
#[cfg(feature = "html")]
pub mod html;
pub mod pencil;
pub mod widget;

pub use api::{DrawingSurface, ImageData, ImageSource, SurfaceBitmap, SurfacePaths, SurfaceStyles};
pub use error::{Result, SegpadError};
pub use event::{PointerEvent, PointerKind, Tool, dispatch};
pub use export::{MaskSink, encode_data_url};
pub use geom::{BoundingRect, Point};
pub use pencil::PencilTool;
pub use widget::{Segmenter, SegmenterConfig};

#[cfg(feature = "cairo")]
pub use backends::cairo::RasterSurface;
pub use backends::recording::{RecordingSurface, SurfaceOp};
