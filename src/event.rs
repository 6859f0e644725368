//! Pointer events and their routing to the active tool.

use crate::api::DrawingSurface;
use crate::error::Result;
use crate::geom::{BoundingRect, Point};

/// The closed set of pointer event kinds the widget reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// A raw pointer event in absolute client coordinates, as delivered by the
/// host input system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, client_x: f64, client_y: f64) -> Self {
        Self {
            kind,
            client_x,
            client_y,
        }
    }
}

/// A drawing tool driven by mapped pointer events.
///
/// Handlers default to no-ops, so a tool implements only the kinds it cares
/// about; an unhandled kind falls through silently.
pub trait Tool<S: DrawingSurface> {
    fn pointer_down(&mut self, _surface: &mut S, _at: Point) -> Result<()> {
        Ok(())
    }

    fn pointer_move(&mut self, _surface: &mut S, _at: Point) -> Result<()> {
        Ok(())
    }

    fn pointer_up(&mut self, _surface: &mut S, _at: Point) -> Result<()> {
        Ok(())
    }
}

/// Maps the event's client coordinates into canvas space using the bounding
/// rectangle supplied for this event, then invokes the tool handler matching
/// the event kind.
pub fn dispatch<S, T>(
    tool: &mut T,
    surface: &mut S,
    event: &PointerEvent,
    rect: &BoundingRect,
) -> Result<()>
where
    S: DrawingSurface,
    T: Tool<S>,
{
    let at = rect.to_local(event.client_x, event.client_y);
    match event.kind {
        PointerKind::Down => tool.pointer_down(surface, at),
        PointerKind::Move => tool.pointer_move(surface, at),
        PointerKind::Up => tool.pointer_up(surface, at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::recording::{RecordingSurface, SurfaceOp};
    use crate::pencil::PencilTool;

    #[test]
    fn routes_mapped_coordinates_to_the_tool() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut tool = PencilTool::new();
        let rect = BoundingRect::new(200.0, 300.0, 100.0, 100.0);

        dispatch(
            &mut tool,
            &mut surface,
            &PointerEvent::new(PointerKind::Down, 210.0, 315.0),
            &rect,
        )
        .unwrap();

        assert_eq!(
            surface.ops(),
            &[SurfaceOp::BeginPath, SurfaceOp::MoveTo { x: 10.0, y: 15.0 }]
        );
    }

    #[test]
    fn requeries_the_rect_per_event() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut tool = PencilTool::new();

        // The canvas scrolls between the down and the move.
        dispatch(
            &mut tool,
            &mut surface,
            &PointerEvent::new(PointerKind::Down, 10.0, 10.0),
            &BoundingRect::new(0.0, 0.0, 100.0, 100.0),
        )
        .unwrap();
        dispatch(
            &mut tool,
            &mut surface,
            &PointerEvent::new(PointerKind::Move, 10.0, 10.0),
            &BoundingRect::new(0.0, 5.0, 100.0, 100.0),
        )
        .unwrap();

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::BeginPath,
                SurfaceOp::MoveTo { x: 10.0, y: 10.0 },
                SurfaceOp::LineTo { x: 10.0, y: 5.0 },
                SurfaceOp::Stroke,
            ]
        );
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut tool = PencilTool::new();
        let rect = BoundingRect::new(0.0, 0.0, 100.0, 100.0);

        for (x, y) in [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)] {
            dispatch(
                &mut tool,
                &mut surface,
                &PointerEvent::new(PointerKind::Move, x, y),
                &rect,
            )
            .unwrap();
        }

        assert!(surface.ops().is_empty());
    }
}
