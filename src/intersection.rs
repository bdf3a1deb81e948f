use glam::DVec4;

use crate::scene::{Scene, Sphere};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec4,
    pub direction: DVec4,
}

impl Ray {
    pub fn new(origin: DVec4, direction: DVec4) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f64) -> DVec4 {
        self.origin + self.direction * t
    }
}

/// Closed range of the ray parameter `t` that counts as a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.min && t <= self.max
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub sphere: &'a Sphere,
    pub t: f64,
}

/// Roots of `|origin + tD - center|² = radius²`, smaller root first.
pub fn intersect(sphere: &Sphere, ray: &Ray) -> Option<(f64, f64)> {
    let co = ray.origin - sphere.center;

    let a = ray.direction.dot(ray.direction);
    if a <= f64::EPSILON {
        return None;
    }
    let b = 2.0 * co.dot(ray.direction);
    let c = co.dot(co) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    Some((t1, t2))
}

/// Nearest valid hit among all renderable spheres. Equal distances resolve to the
/// sphere that comes first in the scene.
pub fn closest_intersection<'a>(scene: &'a Scene, ray: &Ray, bounds: Bounds) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;

    for sphere in scene.renderable() {
        let Some((t1, t2)) = intersect(sphere, ray) else {
            continue;
        };
        for t in [t1, t2] {
            if bounds.contains(t) && closest.map_or(true, |hit| t < hit.t) {
                closest = Some(Hit { sphere, t });
            }
        }
    }

    closest
}

/// Whether any renderable sphere blocks the ray inside `bounds`.
pub fn occluded(scene: &Scene, ray: &Ray, bounds: Bounds) -> bool {
    scene.renderable().any(|sphere| {
        intersect(sphere, ray).map_or(false, |(t1, t2)| bounds.contains(t1) || bounds.contains(t2))
    })
}
