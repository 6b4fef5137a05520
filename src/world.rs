use crate::camera::Camera;
use crate::geometry::Sphere;
use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

/// Focal offset of the default camera along +Z.
pub const DEFAULT_FOCAL_LENGTH: f32 = 2.0;

/// The scene for one session.
///
/// Mutated only between frames, by pointer handling. A render pass only reads
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub camera: Camera,
    /// Directional light, pointing from the light towards the scene.
    pub light: Vec3,
    pub spheres: Vec<Sphere>,
}

impl World {
    /// `light` is normalized here and nowhere else; it must be nonzero.
    pub fn new(camera: Camera, light: Vec3, spheres: Vec<Sphere>) -> Self {
        World {
            camera,
            light: light.normalized(),
            spheres,
        }
    }

    /// First sphere in insertion order whose discriminant is non-negative,
    /// with its index in `spheres`.
    ///
    /// Hit times are never compared across spheres, so a later sphere that is
    /// closer to the camera still loses to an earlier one.
    pub fn first_hit(&self, r: Ray) -> Option<(usize, &Sphere, HitRecord)> {
        self.spheres
            .iter()
            .enumerate()
            .find_map(|(index, sphere)| sphere.hit(r).map(|hit| (index, sphere, hit)))
    }
}

impl Default for World {
    fn default() -> Self {
        World::new(
            Camera::new(Vec3::new(0.0, 0.0, DEFAULT_FOCAL_LENGTH)),
            Vec3::new(-1.0, -1.0, -1.0),
            vec![
                Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, Color::new(1.0, 0.0, 0.0)),
                Sphere::new(Vec3::new(-1.0, 1.0, -1.0), 0.25, Color::new(0.0, 1.0, 0.0)),
                Sphere::new(Vec3::new(1.0, -1.0, -1.0), 0.25, Color::new(0.0, 0.0, 1.0)),
            ],
        )
    }
}
