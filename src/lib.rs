//! Furniture fit checker.
//!
//! Compares room dimensions against a furniture catalog using per-axis
//! bounding-box containment, and lays the room out on a square canvas with the
//! selected item centered inside it.

pub mod app;
pub mod catalog;
pub mod driver;
pub mod error;
pub mod fit;
pub mod form;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod render;
pub mod selection;
pub mod width;

pub use app::{CheckerConfig, FitChecker, ListingEntry};
pub use catalog::Catalog;
pub use driver::{CheckRequest, CliDriver, CliError, DriverResult};
pub use error::{FitError, Result};
pub use fit::{FitStatus, annotate, evaluate, fits};
pub use form::{DimensionField, DimensionForm};
pub use geometry::{Point, Rect, Size};
pub use layout::{Label, PlacedItem, SceneLayout, layout};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{CheckerMetrics, MetricSnapshot};
pub use model::{FurnitureItem, ItemId, RoomDimensions};
pub use render::{
    CanvasSurface, DrawOp, DrawTicket, Frame, ImageLoadError, Palette, Presented,
    RendererSettings, SceneRenderer, SvgRenderer,
};
pub use selection::Selection;
pub use width::display_width;
