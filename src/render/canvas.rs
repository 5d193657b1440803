use blake3::Hash;
use thiserror::Error;

use crate::error::Result;
use crate::render::core::Frame;

/// Handle for a draw that was started but has not completed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DrawTicket(u64);

impl DrawTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("image `{href}` failed to load: {reason}")]
pub struct ImageLoadError {
    pub href: String,
    pub reason: String,
}

/// What a completed draw did to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented {
    /// The frame replaced the visible picture. `stale` is set when a newer
    /// draw had already been started.
    Drawn { stale: bool },
    /// Same content as what is already shown.
    Unchanged,
    /// The image load failed; nothing was drawn.
    Skipped,
}

/// Draw target that shows whichever completed frame arrived last.
///
/// Draws are never cancelled. An older draw completing after a newer one
/// overwrites it.
#[derive(Debug, Default)]
pub struct CanvasSurface {
    issued: u64,
    frame: Option<Frame>,
    hash: Option<Hash>,
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_draw(&mut self) -> DrawTicket {
        self.issued = self.issued.saturating_add(1);
        DrawTicket(self.issued)
    }

    pub fn complete(
        &mut self,
        ticket: DrawTicket,
        outcome: std::result::Result<Frame, ImageLoadError>,
    ) -> Result<Presented> {
        let Ok(frame) = outcome else {
            return Ok(Presented::Skipped);
        };

        let hash = frame.content_hash()?;
        if self.hash == Some(hash) {
            return Ok(Presented::Unchanged);
        }

        self.frame = Some(frame);
        self.hash = Some(hash);
        Ok(Presented::Drawn {
            stale: ticket.0 < self.issued,
        })
    }

    /// Start and immediately complete a draw.
    pub fn present(&mut self, frame: Frame) -> Result<Presented> {
        let ticket = self.begin_draw();
        self.complete(ticket, Ok(frame))
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn clear(&mut self) {
        self.frame = None;
        self.hash = None;
    }
}
