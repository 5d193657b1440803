use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crossterm::style::Stylize;
use serde::Serialize;
use thiserror::Error;

use crate::app::{FitChecker, ListingEntry};
use crate::error::FitError;
use crate::fit::FitStatus;
use crate::form::DimensionField;
use crate::layout::SceneLayout;
use crate::logging::LoggingError;
use crate::model::{RoomDimensions, format_meters};
use crate::render::{CanvasSurface, SvgRenderer};
use crate::width::display_width;

pub type DriverResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Checker(#[from] FitError),
    #[error("logging setup failed: {0}")]
    Logging(#[from] LoggingError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Checker(FitError::InvalidDimension { .. }) => 2,
            CliError::Checker(FitError::ItemNotFound(_)) => 2,
            _ => 1,
        }
    }
}

/// Raw inputs of one `check` invocation.
#[derive(Debug, Clone, Default)]
pub struct CheckRequest {
    pub length: String,
    pub width: String,
    pub height: String,
    pub select: Option<String>,
    pub svg: Option<PathBuf>,
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    room: Option<&'a RoomDimensions>,
    listing: &'a [ListingEntry],
    scene: Option<SceneLayout>,
}

/// Drives a [`FitChecker`] from command line requests.
pub struct CliDriver {
    checker: FitChecker,
    surface: CanvasSurface,
    color: bool,
}

impl CliDriver {
    pub fn new(checker: FitChecker) -> Self {
        Self {
            checker,
            surface: CanvasSurface::new(),
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn checker(&self) -> &FitChecker {
        &self.checker
    }

    pub fn run_catalog(&mut self, out: &mut impl Write) -> DriverResult<()> {
        let listing = self.checker.listing();
        out.write_all(render_listing(&listing, self.color).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    pub fn run_check(&mut self, out: &mut impl Write, request: &CheckRequest) -> DriverResult<()> {
        let form = self.checker.form_mut();
        form.set(DimensionField::Length, &request.length);
        form.set(DimensionField::Width, &request.width);
        form.set(DimensionField::Height, &request.height);
        self.checker.submit()?;

        if let Some(id) = &request.select {
            self.checker.select(id)?;
        }

        let listing = self.checker.listing();
        if request.json {
            let report = CheckReport {
                room: self.checker.room(),
                listing: &listing,
                scene: self.checker.scene()?,
            };
            serde_json::to_writer_pretty(&mut *out, &report).map_err(FitError::from)?;
            writeln!(out)?;
        } else {
            out.write_all(render_listing(&listing, self.color).as_bytes())?;
        }

        if let Some(path) = &request.svg {
            self.checker.draw(&mut self.surface)?;
            if let Some(frame) = self.surface.frame() {
                let mut writer = BufWriter::new(File::create(path)?);
                SvgRenderer::default().render(&mut writer, frame)?;
            }
            if !request.json {
                writeln!(out, "visualization written to {}", path.display())?;
            }
        }

        self.checker.log_metrics();
        out.flush()?;
        Ok(())
    }
}

/// Format the annotated catalog as aligned terminal rows.
pub fn render_listing(entries: &[ListingEntry], color: bool) -> String {
    let rows: Vec<[String; 3]> = entries
        .iter()
        .map(|entry| {
            let marker = if entry.selected { ">" } else { " " };
            [
                format!("{marker} {}", status_cell(entry.status, color)),
                entry.item.name.clone(),
                format!(
                    "Length: {}m  Width: {}m  Height: {}m",
                    format_meters(entry.item.length),
                    format_meters(entry.item.width),
                    format_meters(entry.item.height)
                ),
            ]
        })
        .collect();

    let status_width = rows.iter().map(|r| display_width(&r[0])).max().unwrap_or(0);
    let id_width = entries
        .iter()
        .map(|entry| display_width(&entry.item.id))
        .max()
        .unwrap_or(0);
    let name_width = rows.iter().map(|r| display_width(&r[1])).max().unwrap_or(0);

    let mut out = String::new();
    for (entry, row) in entries.iter().zip(&rows) {
        out.push_str(&pad(&row[0], status_width));
        out.push_str("  ");
        out.push_str(&pad(&entry.item.id, id_width));
        out.push_str("  ");
        out.push_str(&pad(&row[1], name_width));
        out.push_str("  ");
        out.push_str(&row[2]);
        out.push('\n');
    }
    out
}

fn status_cell(status: FitStatus, color: bool) -> String {
    match (status, color) {
        (FitStatus::Unknown, _) => "-".to_string(),
        (FitStatus::Fits, true) => "fits".green().bold().to_string(),
        (FitStatus::Fits, false) => "fits".to_string(),
        (FitStatus::DoesNotFit, true) => "no fit".red().bold().to_string(),
        (FitStatus::DoesNotFit, false) => "no fit".to_string(),
    }
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(cell));
    format!("{cell}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CheckerConfig;
    use crate::catalog::Catalog;

    fn driver() -> CliDriver {
        let checker = FitChecker::new(CheckerConfig::default(), Catalog::builtin()).unwrap();
        CliDriver::new(checker).with_color(false)
    }

    fn request(length: &str, width: &str, height: &str) -> CheckRequest {
        CheckRequest {
            length: length.to_string(),
            width: width.to_string(),
            height: height.to_string(),
            ..CheckRequest::default()
        }
    }

    #[test]
    fn catalog_listing_has_no_verdicts() {
        let mut out = Vec::new();
        driver().run_catalog(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|line| line.starts_with("  -")));
        assert!(text.contains("Length: 2.2m  Width: 0.95m  Height: 0.85m"));
    }

    #[test]
    fn check_marks_selected_row() {
        let mut out = Vec::new();
        let mut req = request("2", "1", "1.8");
        req.select = Some("3".to_string());
        driver().run_check(&mut out, &req).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].starts_with("  no fit"));
        assert!(lines[2].starts_with("> fits"));
        assert!(lines[2].contains("Dining Table"));
    }

    #[test]
    fn colored_cells_stay_aligned() {
        let checker = FitChecker::new(CheckerConfig::default(), Catalog::builtin()).unwrap();
        let mut driver = CliDriver::new(checker);
        let mut out = Vec::new();
        driver.run_check(&mut out, &request("2", "1", "1.8")).unwrap();

        let text = String::from_utf8(out).unwrap();
        let columns: Vec<_> = text
            .lines()
            .map(|line| {
                let plain = String::from_utf8(strip_ansi_escapes::strip(line)).unwrap();
                plain.find("Length:").unwrap()
            })
            .collect();
        assert!(columns.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn long_catalog_ids_keep_columns_aligned() {
        let catalog = Catalog::from_json(
            r#"[
                {"id": "b", "name": "Bench", "length": 1.2, "width": 0.4, "height": 0.45, "image": ""},
                {"id": "armchair", "name": "Armchair", "length": 0.9, "width": 0.85, "height": 1.0, "image": ""}
            ]"#,
        )
        .unwrap();
        let checker = FitChecker::new(CheckerConfig::default(), catalog).unwrap();
        let mut driver = CliDriver::new(checker).with_color(false);
        let mut out = Vec::new();
        driver.run_catalog(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[1].contains("armchair  Armchair"));
        let name_columns: Vec<_> = lines
            .iter()
            .zip(["Bench", "Armchair"])
            .map(|(line, name)| line.find(name).unwrap())
            .collect();
        assert_eq!(name_columns[0], name_columns[1]);
        let length_columns: Vec<_> = lines.iter().map(|l| l.find("Length:").unwrap()).collect();
        assert_eq!(length_columns[0], length_columns[1]);
    }

    #[test]
    fn invalid_dimensions_exit_with_usage_code() {
        let mut out = Vec::new();
        let err = driver()
            .run_check(&mut out, &request("0", "0", "0"))
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn json_report_and_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("room.svg");
        let mut req = request("4", "2", "2.5");
        req.select = Some("1".to_string());
        req.svg = Some(svg_path.clone());
        req.json = true;

        let mut out = Vec::new();
        driver().run_check(&mut out, &req).unwrap();

        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["scene"]["scale"], serde_json::json!(120.0));
        assert_eq!(report["listing"][0]["status"], "fits");
        assert_eq!(report["listing"][0]["selected"], true);

        let svg = std::fs::read_to_string(svg_path).unwrap();
        assert!(svg.contains("3-Seater Sofa"));
    }
}
