use glam::DVec4;

use crate::{
    color::Color,
    intersection::{occluded, Bounds, Hit, Ray},
    scene::Scene,
    util::math::reflect,
};

/// Minimum `t` for secondary rays, keeps a surface from shadowing or reflecting itself.
pub const SHADOW_EPSILON: f64 = 0.001;

pub const AMBIENT_INTENSITY: f64 = 0.2;
pub const POINT_LIGHT_INTENSITY: f64 = 0.6;
pub const POINT_LIGHT_POSITION: DVec4 = DVec4::new(2.0, 1.0, 0.0, 1.0);
pub const DIRECTIONAL_LIGHT_INTENSITY: f64 = 0.2;
pub const DIRECTIONAL_LIGHT_DIRECTION: DVec4 = DVec4::new(1.0, 4.0, 4.0, 0.0);

/// Lights baked into the renderer, scenes only carry geometry and materials.
pub static SCENE_LIGHTS: [Light; 3] = [
    Light::Ambient(AMBIENT_INTENSITY),
    Light::Point {
        intensity: POINT_LIGHT_INTENSITY,
        position: POINT_LIGHT_POSITION,
    },
    Light::Directional {
        intensity: DIRECTIONAL_LIGHT_INTENSITY,
        direction: DIRECTIONAL_LIGHT_DIRECTION,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient(f64),
    Point { intensity: f64, position: DVec4 },
    /// `direction` points from the surface toward the light.
    Directional { intensity: f64, direction: DVec4 },
}

/// Local surface properties at the nearest hit of a ray.
#[derive(Debug, Clone, Copy)]
pub struct SurfacePoint {
    pub position: DVec4,
    pub normal: DVec4,
}

impl SurfacePoint {
    pub fn from_hit(hit: &Hit<'_>, ray: &Ray) -> Self {
        let position = ray.at(hit.t);
        let normal = (position - hit.sphere.center).normalize();
        Self { position, normal }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Shader<'a> {
    scene: &'a Scene,
    lights: &'a [Light],
}

impl<'a> Shader<'a> {
    pub fn new(scene: &'a Scene, lights: &'a [Light]) -> Self {
        Self { scene, lights }
    }

    /// Sphere color scaled by the light reaching `surface` as seen from `view`.
    pub fn local_color(&self, hit: &Hit<'_>, surface: &SurfacePoint, view: DVec4) -> Color {
        hit.sphere.color * self.lighting(surface, view, hit.sphere.specular)
    }

    pub fn lighting(&self, surface: &SurfacePoint, view: DVec4, specular: f64) -> f64 {
        self.lights
            .iter()
            .map(|light| match *light {
                Light::Ambient(intensity) => intensity,
                Light::Point {
                    intensity,
                    position,
                } => self.illuminate(
                    surface,
                    position - surface.position,
                    intensity,
                    view,
                    specular,
                    1.0,
                ),
                Light::Directional {
                    intensity,
                    direction,
                } => self.illuminate(
                    surface,
                    direction,
                    intensity,
                    view,
                    specular,
                    f64::INFINITY,
                ),
            })
            .sum()
    }

    /// Diffuse and specular contribution of one light, zero when something sits between
    /// the surface and the light within `t_max` lengths of `to_light`.
    fn illuminate(
        &self,
        surface: &SurfacePoint,
        to_light: DVec4,
        intensity: f64,
        view: DVec4,
        specular: f64,
        t_max: f64,
    ) -> f64 {
        let shadow_ray = Ray::new(surface.position, to_light);
        if occluded(self.scene, &shadow_ray, Bounds::new(SHADOW_EPSILON, t_max)) {
            return 0.0;
        }

        let n = surface.normal;
        let mut i = 0.0;

        let n_dot_l = n.dot(to_light);
        if n_dot_l > 0.0 {
            i += intensity * n_dot_l / (n.length() * to_light.length());
        }

        if specular > 0.0 {
            let r = reflect(to_light, n);
            let r_dot_v = r.dot(view);
            if r_dot_v > 0.0 {
                i += intensity * (r_dot_v / (r.length() * view.length())).powf(specular);
            }
        }

        i
    }
}
