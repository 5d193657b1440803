use std::fmt::Write as _;
use std::io::Write;

use crate::error::Result;
use crate::geometry::Rect;
use crate::render::core::{DrawOp, Frame, Shadow};

/// Writes frames as standalone SVG documents.
pub struct SvgRenderer {
    font_family: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
        }
    }
}

impl SvgRenderer {
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
        }
    }

    pub fn render(&self, writer: &mut impl Write, frame: &Frame) -> Result<()> {
        let document = self.to_document(frame);
        writer.write_all(document.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn to_document(&self, frame: &Frame) -> String {
        let mut out = String::new();
        let (w, h) = (num(frame.size.width), num(frame.size.height));
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let mut filters = 0usize;
        self.write_ops(&mut out, &frame.ops, frame, &mut filters, 1);
        out.push_str("</svg>\n");
        out
    }

    fn write_ops(
        &self,
        out: &mut String,
        ops: &[DrawOp],
        frame: &Frame,
        filters: &mut usize,
        depth: usize,
    ) {
        let indent = "  ".repeat(depth);
        for op in ops {
            match op {
                DrawOp::Clear => {
                    let _ = writeln!(
                        out,
                        r#"{indent}<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
                        num(frame.size.width),
                        num(frame.size.height)
                    );
                }
                DrawOp::Image { href, rect } => {
                    let _ = writeln!(
                        out,
                        r#"{indent}<image href="{}" {} preserveAspectRatio="none"/>"#,
                        escape(href),
                        rect_attrs(rect)
                    );
                }
                DrawOp::FillRect {
                    rect,
                    color,
                    corner_radius,
                    shadow,
                } => {
                    let filter = self.write_filter(out, shadow.as_ref(), filters, &indent);
                    let radius = if *corner_radius > 0.0 {
                        format!(r#" rx="{}""#, num(*corner_radius))
                    } else {
                        String::new()
                    };
                    let _ = writeln!(
                        out,
                        r#"{indent}<rect {}{radius} fill="{}"{filter}/>"#,
                        rect_attrs(rect),
                        escape(color)
                    );
                }
                DrawOp::StrokeRect {
                    rect,
                    color,
                    line_width,
                    shadow,
                } => {
                    let filter = self.write_filter(out, shadow.as_ref(), filters, &indent);
                    let _ = writeln!(
                        out,
                        r#"{indent}<rect {} fill="none" stroke="{}" stroke-width="{}"{filter}/>"#,
                        rect_attrs(rect),
                        escape(color),
                        num(*line_width)
                    );
                }
                DrawOp::Text {
                    text,
                    position,
                    font_px,
                    color,
                } => {
                    let _ = writeln!(
                        out,
                        r#"{indent}<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="bold" fill="{}">{}</text>"#,
                        num(position.x),
                        num(position.y),
                        escape(&self.font_family),
                        num(*font_px),
                        escape(color),
                        escape(text)
                    );
                }
                DrawOp::Group {
                    translate,
                    rotate_deg,
                    ops,
                } => {
                    let _ = writeln!(
                        out,
                        r#"{indent}<g transform="translate({} {}) rotate({})">"#,
                        num(translate.x),
                        num(translate.y),
                        num(*rotate_deg)
                    );
                    self.write_ops(out, ops, frame, filters, depth + 1);
                    let _ = writeln!(out, "{indent}</g>");
                }
            }
        }
    }

    /// Emit a drop-shadow filter definition and return the attribute referencing it.
    fn write_filter(
        &self,
        out: &mut String,
        shadow: Option<&Shadow>,
        filters: &mut usize,
        indent: &str,
    ) -> String {
        let Some(shadow) = shadow else {
            return String::new();
        };
        *filters += 1;
        let id = format!("shadow-{}", *filters);
        let _ = writeln!(
            out,
            r#"{indent}<filter id="{id}"><feDropShadow dx="0" dy="{}" stdDeviation="{}" flood-color="{}"/></filter>"#,
            num(shadow.offset_y),
            num(shadow.blur / 2.0),
            escape(&shadow.color)
        );
        format!(r#" filter="url(#{id})""#)
    }
}

fn rect_attrs(rect: &Rect) -> String {
    format!(
        r#"x="{}" y="{}" width="{}" height="{}""#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height)
    )
}

/// Round to hundredths so float noise does not leak into the markup.
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::layout::layout;
    use crate::model::{FurnitureItem, RoomDimensions};
    use crate::render::SceneRenderer;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(168.00000000000003), "168");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(2.456), "2.46");
    }

    #[test]
    fn document_contains_room_and_fit_outline() {
        let sofa = Catalog::builtin().get("1").cloned().unwrap();
        let room = RoomDimensions::new(4.0, 2.0, 2.5);
        let scene = layout(&room, 600.0, 60.0, Some(&sofa)).unwrap();
        let frame = SceneRenderer::with_default().frame(&scene);

        let mut out = Vec::new();
        SvgRenderer::default().render(&mut out, &frame).unwrap();
        let svg = String::from_utf8(out).unwrap();

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="600""#));
        assert!(svg.contains(
            r##"<rect x="60" y="180" width="480" height="240" fill="none" stroke="#4F46E5""##
        ));
        assert!(svg.contains(r##"stroke="#059669""##));
        assert!(svg.contains("3-Seater Sofa (2.2m × 0.95m)</text>"));
        assert!(svg.contains(r#"rotate(-90)"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_and_urls_are_escaped() {
        let item = FurnitureItem::new("x", "Tom & Jerry <Sofa>", 1.0, 1.0, 1.0, "a.jpg?w=1&q=2");
        let room = RoomDimensions::new(3.0, 3.0, 2.5);
        let scene = layout(&room, 600.0, 60.0, Some(&item)).unwrap();
        let svg = SvgRenderer::default().to_document(&SceneRenderer::with_default().frame(&scene));

        assert!(svg.contains("Tom &amp; Jerry &lt;Sofa&gt;"));
        assert!(svg.contains(r#"href="a.jpg?w=1&amp;q=2""#));
        assert!(!svg.contains("Tom & Jerry"));
    }
}
