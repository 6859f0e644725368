//! Cairo backend behind the optional `cairo` feature: an `ImageSurface`-backed
//! bitmap that composites the background image, rasterizes the pencil's
//! strokes and fills, and produces RGBA snapshots for export.
//!
//! Path semantics follow the HTML canvas: `stroke`/`fill` keep the current
//! path (the pencil re-strokes the accumulated path on every move), only
//! `begin_path` discards it, and a `line_to` with no subpath starts one.

use cairo::{Context, Format, ImageSurface, Operator};

use crate::api::{ImageData, ImageSource, SurfaceBitmap, SurfacePaths, SurfaceStyles};
use crate::error::{Result, SegpadError};

/// Rasterizing drawing surface with a fixed pixel size and an optional
/// background composited below everything drawn.
pub struct RasterSurface {
    surface: ImageSurface,
    ctx: Context,
    width: u32,
    height: u32,
    background: Option<ImageSurface>,
    stroke_color: String,
    fill_color: String,
    has_subpath: bool,
}

impl RasterSurface {
    /// Creates a surface of the given pixel dimensions. Fails if the host
    /// graphics stack cannot provide a drawing context; per the error design,
    /// that failure is terminal for the widget instance.
    pub fn new(width: u32, height: u32, background: Option<&dyn ImageSource>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_input("canvas dimensions must be positive"));
        }

        let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)?;
        let ctx = Context::new(&surface)?;
        ctx.set_line_width(2.0);

        let mut raster = Self {
            surface,
            ctx,
            width,
            height,
            background: None,
            stroke_color: "#ff0000".to_string(),
            fill_color: "rgba(255,0,0,0.2)".to_string(),
            has_subpath: false,
        };

        if let Some(image) = background {
            raster.background = Some(image_surface_from_rgba(image)?);
            raster.paint_background()?;
        }

        Ok(raster)
    }

    fn paint_background(&self) -> Result<()> {
        if let Some(bg) = &self.background {
            self.ctx.save()?;
            self.ctx.set_source_surface(bg, 0.0, 0.0)?;
            self.ctx.paint()?;
            self.ctx.restore()?;
        }
        Ok(())
    }

    fn apply_paint(&self, color: &str) {
        let (r, g, b, a) = parse_color(color);
        self.ctx.set_source_rgba(r, g, b, a);
    }
}

impl SurfaceStyles for RasterSurface {
    fn set_stroke_color(&mut self, color: &str) -> Result<()> {
        self.stroke_color = color.to_string();
        Ok(())
    }

    fn stroke_color(&self) -> Result<String> {
        Ok(self.stroke_color.clone())
    }

    fn set_line_width(&mut self, value: f64) -> Result<()> {
        self.ctx.set_line_width(value);
        Ok(())
    }

    fn line_width(&self) -> Result<f64> {
        Ok(self.ctx.line_width())
    }

    fn set_fill_color(&mut self, color: &str) -> Result<()> {
        self.fill_color = color.to_string();
        Ok(())
    }

    fn fill_color(&self) -> Result<String> {
        Ok(self.fill_color.clone())
    }
}

impl SurfacePaths for RasterSurface {
    fn begin_path(&mut self) -> Result<()> {
        self.ctx.new_path();
        self.has_subpath = false;
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.ctx.move_to(x, y);
        self.has_subpath = true;
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        if !self.has_subpath {
            self.ctx.move_to(x, y);
            self.has_subpath = true;
        } else {
            self.ctx.line_to(x, y);
        }
        Ok(())
    }

    fn close_path(&mut self) -> Result<()> {
        self.ctx.close_path();
        Ok(())
    }

    fn stroke(&mut self) -> Result<()> {
        self.apply_paint(&self.stroke_color);
        self.ctx.stroke_preserve()?;
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        self.apply_paint(&self.fill_color);
        self.ctx.fill_preserve()?;
        Ok(())
    }
}

impl SurfaceBitmap for RasterSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    // Erases pixels only. The current path lives in the context, not the
    // bitmap, so a stroke in progress keeps accumulating afterwards.
    fn clear(&mut self) -> Result<()> {
        self.ctx.save()?;
        self.ctx.set_operator(Operator::Clear);
        self.ctx.paint()?;
        self.ctx.restore()?;
        self.paint_background()
    }

    fn snapshot(&self) -> Result<ImageData> {
        self.surface.flush();

        // Paint into a scratch surface so the pixel data can be borrowed
        // without fighting the live context's reference.
        let mut copy = ImageSurface::create(Format::ARgb32, self.width as i32, self.height as i32)?;
        {
            let copy_ctx = Context::new(&copy)?;
            copy_ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            copy_ctx.paint()?;
        }
        copy.flush();

        let stride = copy.stride() as usize;
        let data = copy
            .data()
            .map_err(|err| SegpadError::Backend(Box::new(err)))?;

        let mut out = vec![0u8; (self.width as usize) * (self.height as usize) * 4];
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                let src = y * stride + x * 4;
                // Cairo ARgb32 is premultiplied alpha, native-endian (BGRA on
                // little-endian); exports carry straight-alpha RGBA.
                let b = data[src] as u32;
                let g = data[src + 1] as u32;
                let r = data[src + 2] as u32;
                let a = data[src + 3] as u32;
                let dst = (y * self.width as usize + x) * 4;
                if a == 0 {
                    out[dst..dst + 4].copy_from_slice(&[0, 0, 0, 0]);
                } else {
                    out[dst] = (((r * 255 + a / 2) / a).min(255)) as u8;
                    out[dst + 1] = (((g * 255 + a / 2) / a).min(255)) as u8;
                    out[dst + 2] = (((b * 255 + a / 2) / a).min(255)) as u8;
                    out[dst + 3] = a as u8;
                }
            }
        }

        Ok(ImageData {
            width: self.width,
            height: self.height,
            data: out,
        })
    }
}

fn invalid_input(msg: &str) -> SegpadError {
    SegpadError::Other(Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        msg.to_string(),
    )))
}

/// Converts straight-alpha RGBA pixels into a premultiplied ARgb32 surface.
fn image_surface_from_rgba(image: &dyn ImageSource) -> Result<ImageSurface> {
    let width = image.width();
    let height = image.height();
    let data = image
        .data_rgba()
        .ok_or_else(|| invalid_input("image source lacks RGBA data"))?;

    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| invalid_input("image dimensions overflow"))?;
    if data.len() != expected {
        return Err(invalid_input("RGBA buffer length does not match width*height*4"));
    }

    let mut buf = vec![0u8; expected];
    for (i, chunk) in data.chunks_exact(4).enumerate() {
        let r = chunk[0] as u16;
        let g = chunk[1] as u16;
        let b = chunk[2] as u16;
        let a = chunk[3] as u16;
        let pr = (r * a + 127) / 255;
        let pg = (g * a + 127) / 255;
        let pb = (b * a + 127) / 255;
        let idx = i * 4;
        // Cairo ARgb32 expects premultiplied alpha with native-endian (BGRA on little-endian).
        buf[idx] = pb as u8;
        buf[idx + 1] = pg as u8;
        buf[idx + 2] = pr as u8;
        buf[idx + 3] = a as u8;
    }

    let stride = (width * 4) as i32;
    let surface =
        ImageSurface::create_for_data(buf, Format::ARgb32, width as i32, height as i32, stride)?;
    Ok(surface)
}

fn parse_color(color: &str) -> (f64, f64, f64, f64) {
    let c = color.trim();
    if let Some(hex) = c.strip_prefix('#') {
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[1..2], 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[2..3], 16).unwrap_or(0);
                return (
                    (r * 17) as f64 / 255.0,
                    (g * 17) as f64 / 255.0,
                    (b * 17) as f64 / 255.0,
                    1.0,
                );
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                return (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0);
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                let a = u8::from_str_radix(&hex[6..8], 16).unwrap_or(255);
                return (
                    r as f64 / 255.0,
                    g as f64 / 255.0,
                    b as f64 / 255.0,
                    a as f64 / 255.0,
                );
            }
            _ => {}
        }
    }

    if let Some(body) = c.strip_prefix("rgba(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() == 4 {
            let r = parts[0].parse::<f64>().unwrap_or(0.0);
            let g = parts[1].parse::<f64>().unwrap_or(0.0);
            let b = parts[2].parse::<f64>().unwrap_or(0.0);
            let a = parts[3].parse::<f64>().unwrap_or(1.0);
            return (r / 255.0, g / 255.0, b / 255.0, a.clamp(0.0, 1.0));
        }
    }

    if let Some(body) = c.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() == 3 {
            let r = parts[0].parse::<f64>().unwrap_or(0.0);
            let g = parts[1].parse::<f64>().unwrap_or(0.0);
            let b = parts[2].parse::<f64>().unwrap_or(0.0);
            return (r / 255.0, g / 255.0, b / 255.0, 1.0);
        }
    }

    // Fallback to opaque black if parsing fails.
    (0.0, 0.0, 0.0, 1.0)
}
