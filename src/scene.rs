use glam::DVec4;

use crate::{color::Color, util::math::point};

/// Ordered, read-only set of spheres supplied for a single render.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }

    /// Three unit spheres resting on a large yellow "floor" sphere.
    pub fn four_spheres() -> Self {
        Self::new(vec![
            Sphere::new(1.0, point(0.0, -1.0, 3.0), Color::new(255.0, 0.0, 0.0))
                .with_specular(500.0)
                .with_reflective(0.2),
            Sphere::new(1.0, point(2.0, 0.0, 4.0), Color::new(0.0, 0.0, 255.0))
                .with_specular(500.0)
                .with_reflective(0.3),
            Sphere::new(1.0, point(-2.0, 0.0, 4.0), Color::new(0.0, 255.0, 0.0))
                .with_specular(10.0)
                .with_reflective(0.4),
            Sphere::new(5000.0, point(0.0, -5001.0, 0.0), Color::new(255.0, 255.0, 0.0))
                .with_specular(1000.0)
                .with_reflective(0.5),
        ])
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Spheres taking part in intersection tests, in insertion order.
    pub fn renderable(&self) -> impl Iterator<Item = &Sphere> {
        self.spheres.iter().filter(|sphere| sphere.is_renderable())
    }

    pub fn degenerate_count(&self) -> usize {
        self.spheres.len() - self.renderable().count()
    }
}

impl FromIterator<Sphere> for Scene {
    fn from_iter<T: IntoIterator<Item = Sphere>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub center: DVec4,
    pub color: Color,
    /// Shininess exponent, `0` disables the specular term.
    pub specular: f64,
    /// Fraction of the outgoing color taken from the mirror reflection, in `[0, 1]`.
    pub reflective: f64,
}

impl Sphere {
    pub fn new(radius: f64, center: DVec4, color: Color) -> Self {
        Self {
            radius,
            center,
            color,
            specular: 0.0,
            reflective: 0.0,
        }
    }

    pub fn with_specular(mut self, specular: f64) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_reflective(mut self, reflective: f64) -> Self {
        self.reflective = reflective;
        self
    }

    /// A sphere without a positive radius never produces a hit.
    pub fn is_renderable(&self) -> bool {
        self.radius > 0.0
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(1.0, point(0.0, 0.0, 0.0), Color::WHITE)
    }
}

/// Projection plane at unit distance from the eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
