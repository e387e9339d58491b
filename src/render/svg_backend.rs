//! SVG backend: pure string building, no native dependencies.
//!
//! Point markers carry their marker class and a `<title>` child, so the
//! written document keeps per-point hover text in any SVG viewer.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{ChartError, ChartResult};
use crate::render::{FrameLayer, LayerKind, RenderFrame, Renderer, TextHAlign};

const FONT_FAMILY: &str = "sans-serif";

#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the last successful `render` call.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    #[must_use]
    pub fn into_document(self) -> Option<String> {
        self.document
    }

    /// Writes the last rendered document, creating parent directories.
    pub fn write_to(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let Some(document) = self.document.as_deref() else {
            return Err(ChartError::InvalidData("nothing rendered yet".to_owned()));
        };
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, document)?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = Some(render_document(frame));
        Ok(())
    }
}

/// Serializes a validated frame into a standalone SVG document.
#[must_use]
pub fn render_document(frame: &RenderFrame) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let width = frame.viewport.width;
    let height = frame.viewport.height;

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
        frame.background.to_hex()
    );
    for layer in &frame.layers {
        if layer.is_empty() {
            continue;
        }
        write_layer(&mut out, layer);
    }
    out.push_str("</svg>\n");
    out
}

fn write_layer(out: &mut String, layer: &FrameLayer) {
    let _ = writeln!(out, r#"<g class="{}">"#, layer_class(layer.kind));

    for line in &layer.lines {
        let _ = writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2),
            line.color.to_hex(),
            num(line.color.alpha),
            num(line.stroke_width),
        );
    }

    for polyline in &layer.polylines {
        let points = polyline
            .points
            .iter()
            .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            out,
            r#"<polyline class="line {}" points="{points}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            polyline.series.column(),
            polyline.color.to_hex(),
            num(polyline.stroke_width),
        );
    }

    for circle in &layer.circles {
        let class = circle
            .tag
            .map(|tag| format!(r#" class="{}""#, tag.series.marker_class()))
            .unwrap_or_default();
        let _ = write!(
            out,
            r#"<circle{class} cx="{}" cy="{}" r="{}" fill="{}""#,
            num(circle.cx),
            num(circle.cy),
            num(circle.radius),
            circle.fill_color.to_hex(),
        );
        match &circle.title {
            Some(title) => {
                let _ = writeln!(out, "><title>{}</title></circle>", escape(title));
            }
            None => out.push_str("/>\n"),
        }
    }

    for rect in &layer.rects {
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" fill-opacity="{}""#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            num(rect.corner_radius),
            rect.fill_color.to_hex(),
            num(rect.fill_color.alpha),
        );
        if rect.border_width > 0.0 {
            let _ = write!(
                out,
                r#" stroke="{}" stroke-width="{}""#,
                rect.border_color.to_hex(),
                num(rect.border_width)
            );
        }
        out.push_str("/>\n");
    }

    for text in &layer.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}" fill="{}" text-anchor="{anchor}">{}</text>"#,
            num(text.x),
            num(text.y),
            num(text.font_size_px),
            text.color.to_hex(),
            escape(&text.text),
        );
    }

    out.push_str("</g>\n");
}

fn layer_class(kind: LayerKind) -> &'static str {
    match kind {
        LayerKind::Axis => "axis",
        LayerKind::Series => "series",
        LayerKind::Labels => "labels",
        LayerKind::Markers => "markers",
        LayerKind::Tooltip => "tooltip",
    }
}

/// Shortest fixed form with at most three decimals.
fn num(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
