//! Draggable moodboard card

use serde::{Deserialize, Serialize};

use crate::canvas::viewport::Point;

/// Where the card sits when the editor opens
pub const INITIAL_BOARD_POSITION: Point = Point::new(400.0, 200.0);

/// The moodboard card placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    position: Point,
    #[serde(skip)]
    drag_anchor: Option<Point>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            position: INITIAL_BOARD_POSITION,
            drag_anchor: None,
        }
    }
}

impl Board {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.drag_anchor = Some(pointer - self.position);
    }

    pub fn drag_to(&mut self, pointer: Point) {
        if let Some(anchor) = self.drag_anchor {
            self.position = pointer - anchor;
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut board = Board::default();
        board.begin_drag(Point::new(410.0, 220.0));
        board.drag_to(Point::new(510.0, 320.0));
        assert_eq!(board.position(), Point::new(500.0, 300.0));
        board.end_drag();
        board.drag_to(Point::new(0.0, 0.0));
        assert_eq!(board.position(), Point::new(500.0, 300.0));
    }
}
