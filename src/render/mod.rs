//! Rendering: scene layouts become ordered draw operations, which are written
//! out as SVG or presented on a [`CanvasSurface`].

mod canvas;
mod core;
mod svg;

pub use canvas::{CanvasSurface, DrawTicket, ImageLoadError, Presented};
pub use self::core::{DrawOp, Frame, Palette, RendererSettings, SceneRenderer, Shadow};
pub use svg::SvgRenderer;
