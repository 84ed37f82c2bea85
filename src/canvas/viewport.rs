//! Infinite-canvas viewport
//!
//! Pan and zoom state for the moodboard editor. Screen coordinates map to
//! canvas coordinates through `screen = world * zoom + pan`.

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 5.0;
/// Wheel zoom factors (with ctrl/meta held)
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Zoom button factor
pub const BUTTON_ZOOM_STEP: f64 = 1.2;

/// A 2D point or offset in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A scroll-wheel event
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    /// Ctrl or meta held: the wheel zooms instead of panning
    pub zoom_modifier: bool,
}

/// Pan/zoom state of the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pan: Point,
    zoom: f64,
    /// `pointer - pan` captured when a drag starts
    #[serde(skip)]
    drag_anchor: Option<Point>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Point::default(),
            zoom: 1.0,
            drag_anchor: None,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn is_panning(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Start panning from `pointer`
    pub fn begin_pan(&mut self, pointer: Point) {
        self.drag_anchor = Some(pointer - self.pan);
    }

    /// Follow the pointer while panning; ignored when no drag is active
    pub fn drag_to(&mut self, pointer: Point) {
        if let Some(anchor) = self.drag_anchor {
            self.pan = pointer - anchor;
        }
    }

    pub fn end_pan(&mut self) {
        self.drag_anchor = None;
    }

    /// Zoom with the modifier held, pan otherwise
    pub fn wheel(&mut self, input: WheelInput) {
        if input.zoom_modifier {
            let factor = if input.delta_y > 0.0 {
                WHEEL_ZOOM_OUT
            } else {
                WHEEL_ZOOM_IN
            };
            self.set_zoom(self.zoom * factor);
        } else {
            self.pan = Point::new(self.pan.x - input.delta_x, self.pan.y - input.delta_y);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * BUTTON_ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / BUTTON_ZOOM_STEP);
    }

    /// Back to identity: zoom 1, no pan
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Point::default();
    }

    /// Set zoom, clamped to [MIN_ZOOM, MAX_ZOOM]. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    /// Zoom as a whole percentage for the zoom indicator
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// CSS transform applied to the canvas content
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan.x, self.pan.y, self.zoom
        )
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.zoom + self.pan.x,
            world.y * self.zoom + self.pan.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoom_wheel(delta_y: f64) -> WheelInput {
        WheelInput {
            delta_x: 0.0,
            delta_y,
            zoom_modifier: true,
        }
    }

    #[test]
    fn test_default_is_identity() {
        let viewport = Viewport::new();
        assert_eq!(viewport.zoom(), 1.0);
        assert_eq!(viewport.pan(), Point::default());
        assert_eq!(viewport.zoom_percent(), 100);
        assert_eq!(viewport.css_transform(), "translate(0px, 0px) scale(1)");
    }

    #[test]
    fn test_zoom_stays_in_bounds_under_repeated_scroll() {
        let mut viewport = Viewport::new();
        for _ in 0..500 {
            viewport.wheel(zoom_wheel(-120.0));
            assert!(viewport.zoom() <= MAX_ZOOM);
        }
        assert_eq!(viewport.zoom(), MAX_ZOOM);

        for _ in 0..500 {
            viewport.wheel(zoom_wheel(120.0));
            assert!(viewport.zoom() >= MIN_ZOOM);
        }
        assert_eq!(viewport.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_zoom_buttons_stay_in_bounds() {
        let mut viewport = Viewport::new();
        for _ in 0..100 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom(), MAX_ZOOM);
        for _ in 0..100 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_wheel_steps() {
        let mut viewport = Viewport::new();
        viewport.wheel(zoom_wheel(10.0));
        assert!((viewport.zoom() - 0.9).abs() < 1e-12);

        viewport.reset();
        viewport.wheel(zoom_wheel(-10.0));
        assert!((viewport.zoom() - 1.1).abs() < 1e-12);

        // A zero delta zooms in
        viewport.reset();
        viewport.wheel(zoom_wheel(0.0));
        assert!((viewport.zoom() - 1.1).abs() < 1e-12);

        viewport.reset();
        viewport.zoom_in();
        assert!((viewport.zoom() - 1.2).abs() < 1e-12);
        viewport.zoom_out();
        assert!((viewport.zoom() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_wheel_without_modifier_pans() {
        let mut viewport = Viewport::new();
        viewport.wheel(WheelInput {
            delta_x: 15.0,
            delta_y: -40.0,
            zoom_modifier: false,
        });
        assert_eq!(viewport.pan(), Point::new(-15.0, 40.0));
        assert_eq!(viewport.zoom(), 1.0);
    }

    #[test]
    fn test_drag_accumulates_unclamped_pan() {
        let mut viewport = Viewport::new();
        viewport.begin_pan(Point::new(100.0, 100.0));
        viewport.drag_to(Point::new(150.0, 80.0));
        assert_eq!(viewport.pan(), Point::new(50.0, -20.0));
        viewport.end_pan();

        // Second drag continues from the current pan
        viewport.begin_pan(Point::new(0.0, 0.0));
        viewport.drag_to(Point::new(-1_000_000.0, 0.0));
        assert_eq!(viewport.pan(), Point::new(-999_950.0, -20.0));
        viewport.end_pan();
        assert!(!viewport.is_panning());

        // Moves after release are ignored
        viewport.drag_to(Point::new(5.0, 5.0));
        assert_eq!(viewport.pan(), Point::new(-999_950.0, -20.0));
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        viewport.wheel(WheelInput {
            delta_x: 3.0,
            delta_y: 4.0,
            zoom_modifier: false,
        });
        viewport.reset();
        assert_eq!(viewport, Viewport::new());
    }

    #[test]
    fn test_non_finite_zoom_ignored() {
        let mut viewport = Viewport::new();
        viewport.set_zoom(f64::NAN);
        viewport.set_zoom(f64::INFINITY);
        assert_eq!(viewport.zoom(), 1.0);
    }

    #[test]
    fn test_screen_world_inverse() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        viewport.begin_pan(Point::new(0.0, 0.0));
        viewport.drag_to(Point::new(30.0, -12.0));
        viewport.end_pan();

        let world = Point::new(400.0, 200.0);
        let screen = viewport.world_to_screen(world);
        assert_eq!(screen, Point::new(400.0 * 1.2 + 30.0, 200.0 * 1.2 - 12.0));
        let back = viewport.screen_to_world(screen);
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn test_css_transform_and_percent() {
        let mut viewport = Viewport::new();
        viewport.zoom_out();
        viewport.begin_pan(Point::new(0.0, 0.0));
        viewport.drag_to(Point::new(12.5, 7.0));
        assert_eq!(viewport.zoom_percent(), 83);
        assert!(viewport
            .css_transform()
            .starts_with("translate(12.5px, 7px) scale(0.8333"));
    }
}
