//! The freehand pencil tool: tracks the pointer while the button is held and
//! traces the movement as a path, closing and filling it on release.

use log::warn;

use crate::api::DrawingSurface;
use crate::error::Result;
use crate::event::Tool;
use crate::geom::Point;

/// Two-state path tracer: `idle` until a pointer-down, `drawing` until the
/// matching pointer-up. Reusable indefinitely across draw sessions.
#[derive(Debug, Default)]
pub struct PencilTool {
    started: bool,
}

impl PencilTool {
    pub fn new() -> Self {
        Self { started: false }
    }

    /// True while a pointer-down has been seen without its pointer-up.
    pub fn is_drawing(&self) -> bool {
        self.started
    }
}

impl<S: DrawingSurface> Tool<S> for PencilTool {
    fn pointer_down(&mut self, surface: &mut S, at: Point) -> Result<()> {
        if self.started {
            // Recovery policy for a down with no intervening up: abandon the
            // active path and start fresh.
            warn!("pointer down while a path is active; abandoning it");
        }
        surface.begin_path()?;
        surface.move_to(at.x, at.y)?;
        self.started = true;
        Ok(())
    }

    fn pointer_move(&mut self, surface: &mut S, at: Point) -> Result<()> {
        if !self.started {
            return Ok(());
        }
        surface.line_to(at.x, at.y)?;
        surface.stroke()
    }

    fn pointer_up(&mut self, surface: &mut S, at: Point) -> Result<()> {
        if !self.started {
            return Ok(());
        }
        // The release position counts as one last movement.
        self.pointer_move(surface, at)?;
        self.started = false;
        surface.close_path()?;
        surface.stroke()?;
        surface.fill()
    }
}
