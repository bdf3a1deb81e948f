use crate::{
    color::Color,
    intersection::{closest_intersection, Bounds, Ray},
    light::{Light, Shader, SurfacePoint, SHADOW_EPSILON},
    scene::Scene,
    util::math::reflect,
};

/// Primary rays ignore anything in front of the projection plane.
pub const PRIMARY_BOUNDS: Bounds = Bounds::new(1.0, f64::INFINITY);
pub const REFLECTION_BOUNDS: Bounds = Bounds::new(SHADOW_EPSILON, f64::INFINITY);

pub struct Tracer<'a> {
    scene: &'a Scene,
    shader: Shader<'a>,
    background: Color,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, lights: &'a [Light], background: Color) -> Self {
        Self {
            scene,
            shader: Shader::new(scene, lights),
            background,
        }
    }

    /// Color seen along a primary ray, following at most `max_depth` reflections.
    pub fn trace(&self, ray: &Ray, max_depth: u32) -> Color {
        self.trace_ray(ray, PRIMARY_BOUNDS, max_depth)
    }

    /// Every reflection decrements `depth`, so the recursion ends after at most
    /// `depth + 1` intersections.
    pub fn trace_ray(&self, ray: &Ray, bounds: Bounds, depth: u32) -> Color {
        let Some(hit) = closest_intersection(self.scene, ray, bounds) else {
            return self.background;
        };

        let surface = SurfacePoint::from_hit(&hit, ray);
        let view = -ray.direction;
        let local_color = self.shader.local_color(&hit, &surface, view);

        let r = hit.sphere.reflective.min(1.0);
        if depth == 0 || r <= 0.0 {
            return local_color;
        }

        let reflected_ray = Ray::new(surface.position, reflect(view, surface.normal));
        let reflected_color = self.trace_ray(&reflected_ray, REFLECTION_BOUNDS, depth - 1);

        local_color * (1.0 - r) + reflected_color * r
    }
}
