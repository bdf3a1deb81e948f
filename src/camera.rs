use glam::DVec4;

use crate::{
    intersection::Ray,
    scene::Viewport,
    util::math::{direction, point},
};

/// Fixed eye at the origin looking down `+z` through the viewport.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: DVec4,
    pub viewport: Viewport,
    /// Distance from the eye to the projection plane.
    pub distance: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Camera {
    pub const PROJECTION_PLANE_DISTANCE: f64 = 1.0;

    pub fn new(viewport: Viewport, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            eye: point(0.0, 0.0, 0.0),
            viewport,
            distance: Self::PROJECTION_PLANE_DISTANCE,
            canvas_width: canvas_width as f64,
            canvas_height: canvas_height as f64,
        }
    }

    /// Maps canvas coordinates (origin at the canvas center, `y` up) onto the viewport.
    /// The result is left unnormalized.
    pub fn canvas_to_viewport(&self, cx: i64, cy: i64) -> DVec4 {
        direction(
            cx as f64 * self.viewport.width / self.canvas_width,
            cy as f64 * self.viewport.height / self.canvas_height,
            self.distance,
        )
    }

    pub fn primary_ray(&self, cx: i64, cy: i64) -> Ray {
        Ray::new(self.eye, self.canvas_to_viewport(cx, cy))
    }
}
