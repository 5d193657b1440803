use serde::Serialize;
use serde_json::Value;

use crate::app::config::{CheckerConfig, PLACEHOLDER_MESSAGE};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::fit::{FitStatus, annotate};
use crate::form::DimensionForm;
use crate::layout::{SceneLayout, layout};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::{CheckerMetrics, MetricSnapshot};
use crate::model::{FurnitureItem, RoomDimensions};
use crate::render::{
    CanvasSurface, DrawTicket, Frame, ImageLoadError, Presented, SceneRenderer,
};
use crate::selection::Selection;

/// One catalog row with its fit annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingEntry {
    pub item: FurnitureItem,
    pub status: FitStatus,
    pub selected: bool,
}

/// Session state: dimension form, submitted room, selection and catalog.
pub struct FitChecker {
    config: CheckerConfig,
    catalog: Catalog,
    form: DimensionForm,
    room: Option<RoomDimensions>,
    selection: Selection,
    renderer: SceneRenderer,
    logger: Option<Logger>,
    metrics: CheckerMetrics,
}

impl FitChecker {
    pub fn new(config: CheckerConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        let renderer = SceneRenderer::new(config.renderer_settings());
        Ok(Self {
            config,
            catalog,
            form: DimensionForm::new(),
            room: None,
            selection: Selection::new(),
            renderer,
            logger: None,
            metrics: CheckerMetrics::new(),
        })
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn form(&self) -> &DimensionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut DimensionForm {
        &mut self.form
    }

    pub fn room(&self) -> Option<&RoomDimensions> {
        self.room.as_ref()
    }

    /// Validate the form and, when accepted, replace the current room.
    ///
    /// A rejected submission keeps whatever room was accepted before.
    pub fn submit(&mut self) -> Result<RoomDimensions> {
        match self.form.submit() {
            Ok(room) => {
                self.metrics.record_submission(true);
                self.set_room(room);
                Ok(room)
            }
            Err(err) => {
                self.metrics.record_submission(false);
                self.emit(
                    LogLevel::Warn,
                    "dimensions_rejected",
                    [json_str("reason", err.to_string())],
                );
                Err(err)
            }
        }
    }

    pub fn set_room(&mut self, room: RoomDimensions) {
        self.room = Some(room);
        self.emit(
            LogLevel::Info,
            "dimensions_accepted",
            [
                json_kv("length", room.length),
                json_kv("width", room.width),
                json_kv("height", room.height),
            ],
        );
    }

    /// Toggle the selection of catalog item `id`.
    pub fn select(&mut self, id: &str) -> Result<Option<&FurnitureItem>> {
        self.catalog.require(id)?;
        self.metrics.record_selection();
        let current = self.selection.toggle(id).map(str::to_string);
        self.emit(
            LogLevel::Debug,
            "selection_changed",
            [json_kv(
                "selected",
                current.clone().map(Value::from).unwrap_or(Value::Null),
            )],
        );
        Ok(current.and_then(|id| self.catalog.get(&id)))
    }

    pub fn selected(&self) -> Option<&FurnitureItem> {
        self.selection.current().and_then(|id| self.catalog.get(id))
    }

    pub fn listing(&mut self) -> Vec<ListingEntry> {
        let entries: Vec<ListingEntry> = annotate(&self.catalog, self.room.as_ref())
            .into_iter()
            .map(|(item, status)| ListingEntry {
                selected: self.selection.is_selected(&item.id),
                item: item.clone(),
                status,
            })
            .collect();
        if self.room.is_some() {
            self.metrics.record_fit_checks(entries.len());
        }
        entries
    }

    /// Solved layout, or `None` while no room has been accepted.
    pub fn scene(&self) -> Result<Option<SceneLayout>> {
        let Some(room) = self.room.as_ref() else {
            return Ok(None);
        };
        let scene = layout(
            room,
            self.config.canvas_size,
            self.config.padding,
            self.selected(),
        )?;
        Ok(Some(scene))
    }

    pub fn frame(&self) -> Result<Frame> {
        Ok(match self.scene()? {
            Some(scene) => self.renderer.frame(&scene),
            None => self
                .renderer
                .placeholder(self.config.canvas_size, PLACEHOLDER_MESSAGE),
        })
    }

    /// Render the current state onto `surface`; returns whether it changed.
    pub fn draw(&mut self, surface: &mut CanvasSurface) -> Result<bool> {
        let ticket = self.begin_draw(surface);
        self.complete_draw(surface, ticket, Ok(()))
    }

    /// Start a draw whose images are still loading.
    pub fn begin_draw(&self, surface: &mut CanvasSurface) -> DrawTicket {
        surface.begin_draw()
    }

    /// Finish a draw once its images loaded (or failed to), presenting the
    /// current state. Returns whether the surface changed.
    pub fn complete_draw(
        &mut self,
        surface: &mut CanvasSurface,
        ticket: DrawTicket,
        images: std::result::Result<(), ImageLoadError>,
    ) -> Result<bool> {
        let outcome = match images {
            Ok(()) => Ok(self.frame()?),
            Err(err) => {
                self.emit(
                    LogLevel::Debug,
                    "image_load_failed",
                    [
                        json_kv("ticket", ticket.id()),
                        json_str("href", err.href.clone()),
                        json_str("reason", err.reason.clone()),
                    ],
                );
                Err(err)
            }
        };

        match surface.complete(ticket, outcome)? {
            Presented::Drawn { stale } => {
                self.metrics.record_render(stale);
                if stale {
                    self.emit(
                        LogLevel::Debug,
                        "stale_draw_presented",
                        [json_kv("ticket", ticket.id())],
                    );
                }
                Ok(true)
            }
            Presented::Unchanged | Presented::Skipped => Ok(false),
        }
    }

    pub fn metrics_snapshot(&self) -> MetricSnapshot {
        self.metrics.snapshot()
    }

    /// Emit the current metrics snapshot through the logger, if any.
    pub fn log_metrics(&self) {
        if let Some(logger) = &self.logger {
            let event = self
                .metrics
                .snapshot()
                .to_log_event(&self.config.metrics_target);
            let _ = logger.log_event(event);
        }
    }

    fn emit<const N: usize>(&self, level: LogLevel, message: &str, fields: [(String, Value); N]) {
        if let Some(logger) = &self.logger {
            let event = event_with_fields(level, &self.config.log_target, message, fields);
            let _ = logger.log_event(event);
        }
    }
}
