//! Moodboard canvas state
//!
//! Pointer routing for the editor: a press on the board drags the board, a
//! press on the background pans the viewport. The board stops propagation, so
//! at most one of the two drags is ever active.

pub mod board;
pub mod viewport;

use serde::{Deserialize, Serialize};

pub use board::Board;
pub use viewport::{Point, Viewport, WheelInput};

/// What the pointer went down on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas area
    Background,
    /// The moodboard card
    Board,
    /// Any other element (toolbars, swatches); ignored
    Other,
}

/// Full editor view state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub viewport: Viewport,
    pub board: Board,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_down(&mut self, target: PointerTarget, pointer: Point) {
        match target {
            PointerTarget::Board => self.board.begin_drag(pointer),
            PointerTarget::Background => self.viewport.begin_pan(pointer),
            PointerTarget::Other => {}
        }
    }

    pub fn pointer_move(&mut self, pointer: Point) {
        if self.board.is_dragging() {
            self.board.drag_to(pointer);
        } else {
            self.viewport.drag_to(pointer);
        }
    }

    pub fn pointer_up(&mut self) {
        self.board.end_drag();
        self.viewport.end_pan();
    }

    pub fn wheel(&mut self, input: WheelInput) {
        self.viewport.wheel(input);
    }

    pub fn is_dragging(&self) -> bool {
        self.board.is_dragging() || self.viewport.is_panning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_drag_does_not_pan() {
        let mut canvas = Canvas::new();
        canvas.pointer_down(PointerTarget::Board, Point::new(450.0, 250.0));
        canvas.pointer_move(Point::new(460.0, 270.0));
        canvas.pointer_up();

        assert_eq!(canvas.board.position(), Point::new(410.0, 220.0));
        assert_eq!(canvas.viewport.pan(), Point::default());
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn test_background_drag_does_not_move_board() {
        let mut canvas = Canvas::new();
        canvas.pointer_down(PointerTarget::Background, Point::new(10.0, 10.0));
        assert!(canvas.is_dragging());
        canvas.pointer_move(Point::new(-20.0, 40.0));
        canvas.pointer_up();

        assert_eq!(canvas.viewport.pan(), Point::new(-30.0, 30.0));
        assert_eq!(canvas.board.position(), board::INITIAL_BOARD_POSITION);
    }

    #[test]
    fn test_other_targets_ignored() {
        let mut canvas = Canvas::new();
        canvas.pointer_down(PointerTarget::Other, Point::new(1.0, 1.0));
        canvas.pointer_move(Point::new(100.0, 100.0));
        assert_eq!(canvas, Canvas::new());
    }

    #[test]
    fn test_view_state_serializes_without_drag() {
        let mut canvas = Canvas::new();
        canvas.pointer_down(PointerTarget::Background, Point::new(0.0, 0.0));
        let json = serde_json::to_string(&canvas).unwrap();
        let restored: Canvas = serde_json::from_str(&json).unwrap();
        assert!(!restored.is_dragging());
        assert_eq!(restored.viewport.zoom(), 1.0);
    }
}
