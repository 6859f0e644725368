//! Recording backend: captures the command stream a tool issues without
//! rasterizing anything. Used to test event routing and the pencil state
//! machine.

use crate::api::{ImageData, SurfaceBitmap, SurfacePaths, SurfaceStyles};
use crate::error::Result;

/// One drawing command as received by the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Stroke,
    Fill,
    Clear,
}

/// A surface that records every command in arrival order.
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<SurfaceOp>,
    stroke_color: String,
    line_width: f64,
    fill_color: String,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            stroke_color: "#ff0000".to_string(),
            line_width: 2.0,
            fill_color: "rgba(255,0,0,0.2)".to_string(),
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<SurfaceOp> {
        self.ops
    }

    fn record(&mut self, op: SurfaceOp) {
        self.ops.push(op);
    }
}

impl SurfaceStyles for RecordingSurface {
    fn set_stroke_color(&mut self, color: &str) -> Result<()> {
        self.stroke_color = color.to_string();
        Ok(())
    }

    fn stroke_color(&self) -> Result<String> {
        Ok(self.stroke_color.clone())
    }

    fn set_line_width(&mut self, value: f64) -> Result<()> {
        self.line_width = value;
        Ok(())
    }

    fn line_width(&self) -> Result<f64> {
        Ok(self.line_width)
    }

    fn set_fill_color(&mut self, color: &str) -> Result<()> {
        self.fill_color = color.to_string();
        Ok(())
    }

    fn fill_color(&self) -> Result<String> {
        Ok(self.fill_color.clone())
    }
}

impl SurfacePaths for RecordingSurface {
    fn begin_path(&mut self) -> Result<()> {
        self.record(SurfaceOp::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.record(SurfaceOp::MoveTo { x, y });
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.record(SurfaceOp::LineTo { x, y });
        Ok(())
    }

    fn close_path(&mut self) -> Result<()> {
        self.record(SurfaceOp::ClosePath);
        Ok(())
    }

    fn stroke(&mut self) -> Result<()> {
        self.record(SurfaceOp::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        self.record(SurfaceOp::Fill);
        Ok(())
    }
}

impl SurfaceBitmap for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) -> Result<()> {
        self.record(SurfaceOp::Clear);
        Ok(())
    }

    // No rasterization happens here, so the snapshot is a transparent bitmap
    // of the configured size.
    fn snapshot(&self) -> Result<ImageData> {
        Ok(ImageData::blank(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut s = RecordingSurface::new(10, 10);
        s.begin_path().unwrap();
        s.move_to(1.0, 2.0).unwrap();
        s.line_to(3.0, 4.0).unwrap();
        s.stroke().unwrap();

        assert_eq!(
            s.ops(),
            &[
                SurfaceOp::BeginPath,
                SurfaceOp::MoveTo { x: 1.0, y: 2.0 },
                SurfaceOp::LineTo { x: 3.0, y: 4.0 },
                SurfaceOp::Stroke,
            ]
        );
    }

    #[test]
    fn carries_the_default_annotation_styles() {
        let s = RecordingSurface::new(10, 10);
        assert_eq!(s.stroke_color().unwrap(), "#ff0000");
        assert_eq!(s.line_width().unwrap(), 2.0);
        assert_eq!(s.fill_color().unwrap(), "rgba(255,0,0,0.2)");
    }

    #[test]
    fn snapshot_is_transparent_and_sized() {
        let s = RecordingSurface::new(3, 2);
        let snap = s.snapshot().unwrap();
        assert_eq!(snap.width, 3);
        assert_eq!(snap.height, 2);
        assert_eq!(snap.data.len(), 24);
        assert!(snap.data.iter().all(|&b| b == 0));
    }
}
