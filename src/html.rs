//! Markup fragment emission using a streaming XML writer. The fragment is
//! what the hosting collaborator embeds in its output surface: a heading, the
//! canvas inside its container, and the export/clear buttons (host-wired by
//! id; the fragment carries no script).

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Result, SegpadError};
use crate::widget::SegmenterConfig;

/// Ids the host uses to wire button clicks to `export_mask` / `clear`.
pub const EXPORT_BUTTON_ID: &str = "export-mask";
pub const CLEAR_BUTTON_ID: &str = "clear-mask";

/// Renders the embeddable fragment for the given configuration.
pub fn render_fragment(config: &SegmenterConfig) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Start(BytesStart::new("h1")))?;
    writer.write_event(Event::Text(BytesText::new(&config.title)))?;
    writer.write_event(Event::End(BytesEnd::new("h1")))?;

    let mut container = BytesStart::new("div");
    container.push_attribute(("id", "container"));
    writer.write_event(Event::Start(container))?;

    let mut canvas = BytesStart::new("canvas");
    canvas.push_attribute(("id", "mask-canvas"));
    let width_attr = config.width.to_string();
    let height_attr = config.height.to_string();
    canvas.push_attribute(("width", width_attr.as_str()));
    canvas.push_attribute(("height", height_attr.as_str()));
    let style_attr = format!(
        "cursor:crosshair; background-image:url({})",
        config.image_url
    );
    canvas.push_attribute(("style", style_attr.as_str()));
    writer.write_event(Event::Start(canvas))?;
    writer.write_event(Event::End(BytesEnd::new("canvas")))?;

    writer.write_event(Event::End(BytesEnd::new("div")))?;

    write_button(&mut writer, EXPORT_BUTTON_ID, "Get Segmentation Mask")?;
    write_button(&mut writer, CLEAR_BUTTON_ID, "Clear Segmentation")?;

    let out = writer.into_inner();
    String::from_utf8(out).map_err(|err| SegpadError::Other(Box::new(err)))
}

fn write_button<W: std::io::Write>(writer: &mut Writer<W>, id: &str, label: &str) -> Result<()> {
    let mut button = BytesStart::new("button");
    button.push_attribute(("id", id));
    writer.write_event(Event::Start(button))?;
    writer.write_event(Event::Text(BytesText::new(label)))?;
    writer.write_event(Event::End(BytesEnd::new("button")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment() -> String {
        let config = SegmenterConfig::new(640, 480, "scan.png");
        render_fragment(&config).expect("render fragment")
    }

    #[test]
    fn writes_the_canvas_with_pixel_dimensions() {
        let out = fragment();
        assert!(out.contains("<canvas id=\"mask-canvas\" width=\"640\" height=\"480\""));
    }

    #[test]
    fn styles_the_canvas_with_cursor_and_background() {
        let out = fragment();
        assert!(out.contains("cursor:crosshair"));
        assert!(out.contains("background-image:url(scan.png)"));
    }

    #[test]
    fn includes_heading_container_and_buttons() {
        let out = fragment();
        assert!(out.contains("<h1>Simple Segmenter</h1>"));
        assert!(out.contains("<div id=\"container\">"));
        assert!(out.contains("<button id=\"export-mask\">Get Segmentation Mask</button>"));
        assert!(out.contains("<button id=\"clear-mask\">Clear Segmentation</button>"));
    }

    #[test]
    fn honors_a_custom_title() {
        let mut config = SegmenterConfig::new(100, 100, "scan.png");
        config.title = "Lesion Outliner".to_string();
        let out = render_fragment(&config).unwrap();
        assert!(out.contains("<h1>Lesion Outliner</h1>"));
    }
}
