use blake3::Hash;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::layout::{Label, SceneLayout};

/// Colors used when painting a scene. Values are CSS color strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub fits: String,
    pub no_fit: String,
    pub room_stroke: String,
    pub room_fill: String,
    pub label_text: String,
    pub label_background: String,
    pub shadow: String,
    pub item_shadow: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fits: "#059669".to_string(),
            no_fit: "#DC2626".to_string(),
            room_stroke: "#4F46E5".to_string(),
            room_fill: "rgba(255, 255, 255, 0.9)".to_string(),
            label_text: "#4B5563".to_string(),
            label_background: "white".to_string(),
            shadow: "rgba(0, 0, 0, 0.2)".to_string(),
            item_shadow: "rgba(0, 0, 0, 0.1)".to_string(),
        }
    }
}

impl Palette {
    pub fn fit_color(&self, fits: bool) -> &str {
        if fits {
            self.fits.as_str()
        } else {
            self.no_fit.as_str()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shadow {
    pub color: String,
    pub blur: f64,
    pub offset_y: f64,
}

/// Single drawing instruction, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Clear,
    Image {
        href: String,
        rect: Rect,
    },
    FillRect {
        rect: Rect,
        color: String,
        corner_radius: f64,
        shadow: Option<Shadow>,
    },
    StrokeRect {
        rect: Rect,
        color: String,
        line_width: f64,
        shadow: Option<Shadow>,
    },
    Text {
        text: String,
        position: Point,
        font_px: f64,
        color: String,
    },
    /// Ops drawn after translating to `translate` and rotating by `rotate_deg`.
    Group {
        translate: Point,
        rotate_deg: f64,
        ops: Vec<DrawOp>,
    },
}

/// Complete picture for one square canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub size: Size,
    pub ops: Vec<DrawOp>,
}

impl Frame {
    pub fn content_hash(&self) -> Result<Hash> {
        let bytes = serde_json::to_vec(self)?;
        Ok(blake3::hash(&bytes))
    }

    /// Image URLs referenced anywhere in the frame.
    pub fn image_refs(&self) -> Vec<&str> {
        fn collect<'a>(ops: &'a [DrawOp], out: &mut Vec<&'a str>) {
            for op in ops {
                match op {
                    DrawOp::Image { href, .. } => out.push(href),
                    DrawOp::Group { ops, .. } => collect(ops, out),
                    _ => {}
                }
            }
        }
        let mut refs = Vec::new();
        collect(&self.ops, &mut refs);
        refs
    }
}

/// Renderer runtime parameters.
#[derive(Debug, Clone, Default)]
pub struct RendererSettings {
    pub palette: Palette,
    /// Photo stretched over the whole canvas behind the room.
    pub background_image: Option<String>,
}

/// Turns solved scene layouts into frames.
pub struct SceneRenderer {
    settings: RendererSettings,
}

impl SceneRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    pub fn frame(&self, scene: &SceneLayout) -> Frame {
        let palette = &self.settings.palette;
        let mut ops = vec![DrawOp::Clear];

        if let Some(href) = &self.settings.background_image {
            ops.push(DrawOp::Image {
                href: href.clone(),
                rect: Rect::new(0.0, 0.0, scene.canvas.width, scene.canvas.height),
            });
        }

        ops.push(DrawOp::FillRect {
            rect: scene.room_rect,
            color: palette.room_fill.clone(),
            corner_radius: 0.0,
            shadow: None,
        });
        ops.push(DrawOp::StrokeRect {
            rect: scene.room_rect,
            color: palette.room_stroke.clone(),
            line_width: 3.0,
            shadow: Some(Shadow {
                color: palette.shadow.clone(),
                blur: 8.0,
                offset_y: 0.0,
            }),
        });
        ops.push(label_op(&scene.length_label, palette, &palette.label_text));
        ops.push(label_op(&scene.width_label, palette, &palette.label_text));

        if let Some(item) = &scene.item {
            let color = palette.fit_color(item.fits);
            ops.push(DrawOp::FillRect {
                rect: item.rect,
                color: palette.item_shadow.clone(),
                corner_radius: 0.0,
                shadow: Some(Shadow {
                    color: palette.shadow.clone(),
                    blur: 12.0,
                    offset_y: 4.0,
                }),
            });
            ops.push(DrawOp::Image {
                href: item.image.clone(),
                rect: item.rect,
            });
            ops.push(DrawOp::StrokeRect {
                rect: item.rect,
                color: color.to_string(),
                line_width: 3.0,
                shadow: None,
            });
            ops.push(label_op(&item.label, palette, color));
        }

        Frame {
            size: scene.canvas,
            ops,
        }
    }

    /// Frame shown before any room dimensions were submitted.
    pub fn placeholder(&self, canvas_size: f64, message: &str) -> Frame {
        let font_px = crate::layout::DIMENSION_FONT_PX;
        let width = crate::layout::measure_text(message, font_px);
        Frame {
            size: Size::square(canvas_size),
            ops: vec![
                DrawOp::Clear,
                DrawOp::Text {
                    text: message.to_string(),
                    position: Point::new((canvas_size - width) / 2.0, canvas_size / 2.0),
                    font_px,
                    color: self.settings.palette.label_text.clone(),
                },
            ],
        }
    }
}

fn label_op(label: &Label, palette: &Palette, text_color: &str) -> DrawOp {
    DrawOp::Group {
        translate: label.origin,
        rotate_deg: label.rotation_deg,
        ops: vec![
            DrawOp::FillRect {
                rect: label.background,
                color: palette.label_background.clone(),
                corner_radius: label.corner_radius,
                shadow: None,
            },
            DrawOp::Text {
                text: label.text.clone(),
                position: label.baseline,
                font_px: label.font_px,
                color: text_color.to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::layout::layout;
    use crate::model::RoomDimensions;

    fn wardrobe_scene(room: RoomDimensions) -> SceneLayout {
        let wardrobe = Catalog::builtin().get("4").cloned().unwrap();
        layout(&room, 600.0, 60.0, Some(&wardrobe)).unwrap()
    }

    #[test]
    fn room_only_frame_paint_order() {
        let scene = layout(&RoomDimensions::new(4.0, 2.0, 2.5), 600.0, 60.0, None).unwrap();
        let frame = SceneRenderer::with_default().frame(&scene);

        assert_eq!(frame.ops.len(), 5);
        assert_eq!(frame.ops[0], DrawOp::Clear);
        assert!(matches!(frame.ops[1], DrawOp::FillRect { .. }));
        assert!(matches!(frame.ops[2], DrawOp::StrokeRect { .. }));
        assert!(matches!(frame.ops[4], DrawOp::Group { rotate_deg, .. } if rotate_deg == -90.0));
        assert!(frame.image_refs().is_empty());
    }

    #[test]
    fn item_outline_uses_fit_color() {
        let renderer = SceneRenderer::with_default();

        let too_low = renderer.frame(&wardrobe_scene(RoomDimensions::new(2.0, 1.0, 1.8)));
        let tall_enough = renderer.frame(&wardrobe_scene(RoomDimensions::new(2.0, 1.0, 2.4)));

        let outline = |frame: &Frame| {
            frame
                .ops
                .iter()
                .rev()
                .find_map(|op| match op {
                    DrawOp::StrokeRect { color, .. } => Some(color.clone()),
                    _ => None,
                })
                .unwrap()
        };
        assert_eq!(outline(&too_low), "#DC2626");
        assert_eq!(outline(&tall_enough), "#059669");
    }

    #[test]
    fn background_and_item_images_are_referenced() {
        let mut renderer = SceneRenderer::with_default();
        renderer.settings_mut().background_image = Some("room.jpg".to_string());
        let frame = renderer.frame(&wardrobe_scene(RoomDimensions::new(3.0, 3.0, 2.5)));

        let refs = frame.image_refs();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0], "room.jpg");
        assert!(refs[1].contains("photo-1595428774223"));
    }

    #[test]
    fn identical_frames_hash_equal() {
        let renderer = SceneRenderer::with_default();
        let scene = wardrobe_scene(RoomDimensions::new(3.0, 3.0, 2.5));
        let a = renderer.frame(&scene).content_hash().unwrap();
        let b = renderer.frame(&scene).content_hash().unwrap();
        let other = renderer
            .placeholder(600.0, "Enter room dimensions to see visualization")
            .content_hash()
            .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, other);
    }
}
