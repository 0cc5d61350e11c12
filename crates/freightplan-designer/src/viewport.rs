//! Viewport and coordinate transformation for the editing area.
//!
//! Converts between view coordinates (pixels in the widget, origin top-left)
//! and scene coordinates. Zoom is restricted to the discrete steps in
//! `ZOOM_FACTORS`; pan is the scroll offset in view pixels.
//!
//! ```text
//! scene = (view + pan) / zoom
//! view  = scene * zoom - pan
//! ```

use std::fmt;

use freightplan_core::constants::{DEFAULT_ZOOM, ZOOM_FACTORS};
use freightplan_core::{ContractViolation, ScenePoint};

use crate::grid;

/// A position in view (widget pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SceneRect {
    pub fn center(&self) -> ScenePoint {
        ScenePoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: ScenePoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Zoom and pan state of one editing area.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport of the given size at the default zoom, unpanned.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Current zoom factor (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor. Only factors from `ZOOM_FACTORS` are accepted.
    ///
    /// Returns whether the factor changed.
    pub fn set_zoom(&mut self, factor: f64) -> Result<bool, ContractViolation> {
        if !ZOOM_FACTORS.contains(&factor) {
            return Err(ContractViolation::new(
                "zoom",
                format!("{} is not an allowed zoom factor", factor),
            ));
        }
        Ok(self.apply_zoom(factor))
    }

    /// Steps to the next larger factor. Returns false at the largest.
    pub fn zoom_in(&mut self) -> bool {
        match next_zoom_in(self.zoom) {
            Some(factor) => self.apply_zoom(factor),
            None => false,
        }
    }

    /// Steps to the next smaller factor. Returns false at the smallest.
    pub fn zoom_out(&mut self) -> bool {
        match next_zoom_out(self.zoom) {
            Some(factor) => self.apply_zoom(factor),
            None => false,
        }
    }

    /// Like [`zoom_in`](Self::zoom_in), keeping the scene point under
    /// `anchor` fixed.
    pub fn zoom_in_at(&mut self, anchor: ViewPoint) -> bool {
        match next_zoom_in(self.zoom) {
            Some(factor) => self.zoom_anchored(factor, anchor),
            None => false,
        }
    }

    /// Like [`zoom_out`](Self::zoom_out), keeping the scene point under
    /// `anchor` fixed.
    pub fn zoom_out_at(&mut self, anchor: ViewPoint) -> bool {
        match next_zoom_out(self.zoom) {
            Some(factor) => self.zoom_anchored(factor, anchor),
            None => false,
        }
    }

    /// Resets zoom to 1.0 (100%). Returns whether the factor changed.
    pub fn reset_zoom(&mut self) -> bool {
        self.apply_zoom(DEFAULT_ZOOM)
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Scrolls by a delta in view pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Pans so that `point` is at the centre of the canvas.
    pub fn center_on(&mut self, point: ScenePoint) {
        self.pan_x = point.x * self.zoom - self.canvas_width / 2.0;
        self.pan_y = point.y * self.zoom - self.canvas_height / 2.0;
    }

    /// Scene point currently at the centre of the canvas.
    pub fn center(&self) -> ScenePoint {
        self.view_to_scene(ViewPoint::new(
            self.canvas_width / 2.0,
            self.canvas_height / 2.0,
        ))
    }

    pub fn view_to_scene(&self, view: ViewPoint) -> ScenePoint {
        ScenePoint::new(
            (view.x + self.pan_x) / self.zoom,
            (view.y + self.pan_y) / self.zoom,
        )
    }

    pub fn scene_to_view(&self, scene: ScenePoint) -> ViewPoint {
        ViewPoint::new(
            scene.x * self.zoom - self.pan_x,
            scene.y * self.zoom - self.pan_y,
        )
    }

    /// Pannable scene bounds for the current zoom.
    ///
    /// Twice the canvas in scene units, less the grid and the margin, but
    /// never smaller than the grid plus the margin; centred on the grid.
    pub fn scene_rect(&self, margin: f64) -> SceneRect {
        let extent = grid::grid_extent();
        let width = (self.canvas_width * 2.0 / self.zoom - extent - margin).max(extent + margin);
        let height = (self.canvas_height * 2.0 / self.zoom - extent - margin).max(extent + margin);
        let center = extent / 2.0;
        SceneRect {
            x: center - width / 2.0,
            y: center - height / 2.0,
            width,
            height,
        }
    }

    /// Pans the least distance needed to keep the visible area inside
    /// `rect`. Along an axis where the view is larger than `rect`, the view
    /// is centred on it instead.
    ///
    /// Returns whether the pan changed.
    pub fn clamp_to(&mut self, rect: SceneRect) -> bool {
        let visible_w = self.canvas_width / self.zoom;
        let visible_h = self.canvas_height / self.zoom;
        let center = self.center();
        let clamped = ScenePoint::new(
            clamp_axis(center.x, rect.x, rect.width, visible_w),
            clamp_axis(center.y, rect.y, rect.height, visible_h),
        );
        if clamped == center {
            return false;
        }
        self.center_on(clamped);
        true
    }

    fn apply_zoom(&mut self, factor: f64) -> bool {
        if factor == self.zoom {
            return false;
        }
        // Keep the centre of the canvas over the same scene point.
        let center = self.center();
        self.zoom = factor;
        self.center_on(center);
        true
    }

    fn zoom_anchored(&mut self, factor: f64, anchor: ViewPoint) -> bool {
        if factor == self.zoom {
            return false;
        }
        let scene = self.view_to_scene(anchor);
        self.zoom = factor;
        self.pan_x = scene.x * factor - anchor.x;
        self.pan_y = scene.y * factor - anchor.y;
        true
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport(zoom: {:.2}x, pan: ({:.1}, {:.1}), canvas: {}x{})",
            self.zoom, self.pan_x, self.pan_y, self.canvas_width, self.canvas_height
        )
    }
}

/// Clamps a view centre so a span of `visible` stays within
/// `[start, start + length]`.
fn clamp_axis(center: f64, start: f64, length: f64, visible: f64) -> f64 {
    if visible >= length {
        start + length / 2.0
    } else {
        center.clamp(start + visible / 2.0, start + length - visible / 2.0)
    }
}

fn next_zoom_in(current: f64) -> Option<f64> {
    ZOOM_FACTORS.iter().copied().find(|f| *f > current)
}

fn next_zoom_out(current: f64) -> Option<f64> {
    ZOOM_FACTORS.iter().rev().copied().find(|f| *f < current)
}
