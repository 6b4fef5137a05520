use crate::math::{Ray, Vec3};

/// Pinhole camera looking down -Z.
///
/// There is no orientation or field of view. The focal length is baked into
/// `origin.z`, and rays are generated straight from screen uv coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
}

impl Camera {
    pub const fn new(origin: Vec3) -> Self {
        Camera { origin }
    }

    /// Ray through pixel `(x, y)` of a `width` x `height` frame.
    ///
    /// `u` and `v` span `[-1, 1)`, `u` is stretched by the aspect ratio, and
    /// the direction `(u, v, -1)` is left unnormalized.
    pub fn get_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let (u, v) = screen_uv(x, y, width, height);
        Ray::new(self.origin, Vec3::new(u, v, -1.0))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Vec3::ZERO)
    }
}

/// Aspect corrected uv for a pixel. `v` grows downwards with `y`.
pub fn screen_uv(x: usize, y: usize, width: usize, height: usize) -> (f32, f32) {
    let aspect_ratio = width as f32 / height as f32;
    let u = (x as f32 / width as f32) * 2.0 - 1.0;
    let v = (y as f32 / height as f32) * 2.0 - 1.0;
    (u * aspect_ratio, v)
}
