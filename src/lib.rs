pub mod camera;
pub mod color;
pub mod error;
pub mod framebuffer;
pub mod intersection;
pub mod light;
pub mod renderer;
pub mod scene;
pub mod tracer;
pub mod util;

pub use color::Color;
pub use error::RenderError;
pub use framebuffer::Raster;
pub use renderer::{RenderSettings, Renderer};
pub use scene::{Scene, Sphere, Viewport};

/// Renders `scene` onto a `width` x `height` raster with the default settings.
pub fn draw(
    width: u32,
    height: u32,
    viewport: &Viewport,
    scene: &Scene,
) -> Result<Raster, RenderError> {
    Renderer::default().render(width, height, viewport, scene)
}
