use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    camera::Camera,
    color::Color,
    error::RenderError,
    framebuffer::{Raster, RasterRow},
    light::SCENE_LIGHTS,
    scene::{Scene, Viewport},
    tracer::Tracer,
};

pub const DEFAULT_MAX_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Number of reflection bounces followed after the primary hit.
    pub max_depth: u32,
    pub background: Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            background: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Traces one primary ray per pixel and returns the filled raster.
    pub fn render(
        &self,
        width: u32,
        height: u32,
        viewport: &Viewport,
        scene: &Scene,
    ) -> Result<Raster, RenderError> {
        validate(width, height, viewport)?;

        tracing::debug!(
            width,
            height,
            spheres = scene.len(),
            skipped = scene.degenerate_count(),
            max_depth = self.settings.max_depth,
            "rendering scene"
        );
        let started = Instant::now();

        let camera = Camera::new(*viewport, width, height);
        let tracer = Tracer::new(scene, &SCENE_LIGHTS, self.settings.background);
        let max_depth = self.settings.max_depth;

        let shade_row = |mut row: RasterRow<'_>| {
            let cy = row.canvas_y();
            for cx in row.canvas_xs() {
                let ray = camera.primary_ray(cx, cy);
                row.put_pixel(cx, tracer.trace(&ray, max_depth));
            }
        };

        let mut raster = Raster::new(width, height, self.settings.background);
        #[cfg(feature = "parallel")]
        raster.par_rows_mut().for_each(shade_row);
        #[cfg(not(feature = "parallel"))]
        raster.rows_mut().for_each(shade_row);

        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "render finished"
        );
        Ok(raster)
    }
}

fn validate(width: u32, height: u32, viewport: &Viewport) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidConfiguration(format!(
            "canvas must be at least 1x1 pixels, got {width}x{height}"
        )));
    }
    if !viewport.is_valid() {
        return Err(RenderError::InvalidConfiguration(format!(
            "viewport width and height must be finite and positive, got {}x{}",
            viewport.width, viewport.height
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0, 10, Viewport::default())]
    #[case(10, 0, Viewport::default())]
    #[case(10, 10, Viewport::new(0.0, 1.0))]
    #[case(10, 10, Viewport::new(1.0, -2.0))]
    #[case(10, 10, Viewport::new(f64::NAN, 1.0))]
    fn test_invalid_configuration_is_rejected(
        #[case] width: u32,
        #[case] height: u32,
        #[case] viewport: Viewport,
    ) {
        let result = Renderer::default().render(width, height, &viewport, &Scene::four_spheres());

        assert!(matches!(
            result,
            Err(RenderError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_empty_scene_renders_background() {
        let background = Color::new(12.0, 34.0, 56.0);
        let renderer = Renderer::new(RenderSettings {
            background,
            ..RenderSettings::default()
        });

        let raster = renderer
            .render(8, 6, &Viewport::default(), &Scene::default())
            .unwrap();

        assert_eq!(raster.width(), 8);
        assert_eq!(raster.height(), 6);
        assert!(raster.pixels().iter().all(|p| *p == background));
    }

    #[test]
    fn test_default_settings() {
        let settings = RenderSettings::default();

        assert_eq!(settings.max_depth, 3);
        assert_eq!(settings.background, Color::BLACK);
    }
}
