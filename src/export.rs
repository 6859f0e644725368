//! Mask export: serializes a surface snapshot to a PNG data URL and hands it
//! to the hosting environment through a typed sink.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use log::debug;
use png::{ColorType, Encoder as PngEncoder};

use crate::api::{DrawingSurface, ImageData};
use crate::error::{Result, SegpadError};

/// Receiver for exported masks. Implemented by the hosting collaborator;
/// called once per export trigger with the encoded bitmap. The widget does
/// not observe the handoff's outcome beyond error propagation.
pub trait MaskSink {
    fn mask_ready(&mut self, data_url: &str) -> Result<()>;
}

/// Encodes an RGBA bitmap as a self-contained `data:image/png;base64,` URL.
pub fn encode_data_url(image: &ImageData) -> Result<String> {
    let expected = (image.width as usize)
        .checked_mul(image.height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| {
            SegpadError::Other(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "image dimensions overflow",
            )))
        })?;
    if image.data.len() != expected {
        return Err(SegpadError::Other(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "RGBA buffer length does not match width*height*4",
        ))));
    }

    let mut png_bytes = Vec::new();
    let mut encoder = PngEncoder::new(&mut png_bytes, image.width, image.height);
    encoder.set_color(ColorType::Rgba);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.data)?;
    writer.finish()?;

    let encoded = BASE64_STANDARD.encode(png_bytes);
    Ok(format!("data:image/png;base64,{}", encoded))
}

/// Snapshots the surface and emits the encoded mask to the sink.
pub fn export_mask<S: DrawingSurface>(surface: &S, sink: &mut dyn MaskSink) -> Result<()> {
    let snapshot = surface.snapshot()?;
    let data_url = encode_data_url(&snapshot)?;
    debug!(
        "exported {}x{} mask ({} encoded bytes)",
        snapshot.width,
        snapshot.height,
        data_url.len()
    );
    sink.mask_ready(&data_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    pub(crate) struct CaptureSink {
        pub last: Option<String>,
        pub calls: usize,
    }

    impl MaskSink for CaptureSink {
        fn mask_ready(&mut self, data_url: &str) -> Result<()> {
            self.last = Some(data_url.to_string());
            self.calls += 1;
            Ok(())
        }
    }

    #[test]
    fn encodes_a_png_data_url() {
        let img = ImageData {
            width: 2,
            height: 1,
            data: vec![255, 0, 0, 255, 0, 0, 0, 0],
        };
        let url = encode_data_url(&img).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn rejects_a_mismatched_buffer() {
        let img = ImageData {
            width: 2,
            height: 2,
            data: vec![0; 3],
        };
        assert!(encode_data_url(&img).is_err());
    }

    #[test]
    fn exports_an_untouched_surface() {
        use crate::backends::recording::RecordingSurface;

        let surface = RecordingSurface::new(4, 4);
        let mut sink = CaptureSink::default();
        export_mask(&surface, &mut sink).unwrap();

        assert_eq!(sink.calls, 1);
        let url = sink.last.unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
