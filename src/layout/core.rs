use serde::Serialize;

use crate::error::{FitError, Result};
use crate::fit::fits;
use crate::geometry::{Point, Rect, Size};
use crate::model::{FurnitureItem, RoomDimensions, format_meters};
use crate::width::display_width;

/// Font size of the room length/width labels.
pub const DIMENSION_FONT_PX: f64 = 16.0;
/// Font size of the selected item caption.
pub const ITEM_FONT_PX: f64 = 14.0;

const AVERAGE_ADVANCE: f64 = 0.6;
const DIMENSION_LABEL_PADDING: f64 = 6.0;
const DIMENSION_LABEL_HEIGHT: f64 = 24.0;
const DIMENSION_LABEL_OFFSET: f64 = 28.0;
const ITEM_LABEL_PADDING: f64 = 8.0;
const ITEM_LABEL_HEIGHT: f64 = 28.0;
const ITEM_LABEL_GAP: f64 = 4.0;
const ITEM_LABEL_RADIUS: f64 = 6.0;
const ITEM_LABEL_BASELINE: f64 = 19.0;

/// Approximate rendered width of bold sans-serif text.
pub fn measure_text(text: &str, font_px: f64) -> f64 {
    display_width(text) as f64 * font_px * AVERAGE_ADVANCE
}

/// Text placed on a background box.
///
/// `background` and `baseline` are relative to `origin`, after rotating by
/// `rotation_deg` around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub font_px: f64,
    pub origin: Point,
    pub rotation_deg: f64,
    pub background: Rect,
    pub corner_radius: f64,
    pub baseline: Point,
}

impl Label {
    fn dimension(text: String, origin: Point, rotation_deg: f64, top: f64, baseline: f64) -> Self {
        let width = measure_text(&text, DIMENSION_FONT_PX);
        Self {
            background: Rect::new(
                -width / 2.0 - DIMENSION_LABEL_PADDING,
                top,
                width + DIMENSION_LABEL_PADDING * 2.0,
                DIMENSION_LABEL_HEIGHT,
            ),
            baseline: Point::new(-width / 2.0, baseline),
            text,
            font_px: DIMENSION_FONT_PX,
            origin,
            rotation_deg,
            corner_radius: 0.0,
        }
    }

    fn caption(text: String, anchor: Rect) -> Self {
        let width = measure_text(&text, ITEM_FONT_PX);
        let top = -(ITEM_LABEL_HEIGHT + ITEM_LABEL_GAP);
        Self {
            background: Rect::new(
                0.0,
                top,
                width + ITEM_LABEL_PADDING * 2.0,
                ITEM_LABEL_HEIGHT,
            ),
            baseline: Point::new(ITEM_LABEL_PADDING, top + ITEM_LABEL_BASELINE),
            text,
            font_px: ITEM_FONT_PX,
            origin: Point::new(anchor.x, anchor.y),
            rotation_deg: 0.0,
            corner_radius: ITEM_LABEL_RADIUS,
        }
    }
}

/// Selected furniture item positioned inside the room rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedItem {
    pub id: String,
    pub name: String,
    pub image: String,
    pub rect: Rect,
    pub fits: bool,
    pub label: Label,
}

/// Solved pixel layout for one canvas frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub canvas: Size,
    /// Pixels per meter.
    pub scale: f64,
    pub room: RoomDimensions,
    pub room_rect: Rect,
    pub length_label: Label,
    pub width_label: Label,
    pub item: Option<PlacedItem>,
}

/// Lay out `room` on a square canvas, centering `selected` inside it.
pub fn layout(
    room: &RoomDimensions,
    canvas_size: f64,
    padding: f64,
    selected: Option<&FurnitureItem>,
) -> Result<SceneLayout> {
    let drawable = canvas_size - padding * 2.0;
    if !canvas_size.is_finite() || !padding.is_finite() || padding < 0.0 || drawable <= 0.0 {
        return Err(FitError::InvalidCanvas {
            canvas_size,
            padding,
        });
    }

    let extent = room.floor_extent();
    // Also catches NaN.
    if !(extent > 0.0) {
        return Err(FitError::DegenerateRoom);
    }

    let scale = drawable / extent;
    let canvas = Size::square(canvas_size);
    let room_rect = Rect::centered_in(
        Rect::new(0.0, 0.0, canvas.width, canvas.height),
        room.length * scale,
        room.width * scale,
    );

    let length_label = Label::dimension(
        format!("{}m", format_meters(room.length)),
        Point::new(room_rect.x + room_rect.width / 2.0, room_rect.y),
        0.0,
        -DIMENSION_LABEL_OFFSET,
        -12.0,
    );
    let width_label = Label::dimension(
        format!("{}m", format_meters(room.width)),
        Point::new(
            room_rect.x - DIMENSION_LABEL_OFFSET,
            room_rect.y + room_rect.height / 2.0,
        ),
        -90.0,
        -DIMENSION_LABEL_HEIGHT / 2.0,
        4.0,
    );

    let item = selected.map(|item| {
        let rect = Rect::centered_in(room_rect, item.length * scale, item.width * scale);
        PlacedItem {
            id: item.id.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            rect,
            fits: fits(room, item),
            label: Label::caption(item.caption(), rect),
        }
    });

    Ok(SceneLayout {
        canvas,
        scale,
        room: *room,
        room_rect,
        length_label,
        width_label,
        item,
    })
}
