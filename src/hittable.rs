use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: f32,
    pub point: Vec3,
    pub normal: Vec3,
}

impl HitRecord {
    pub fn new(time: f32, point: Vec3, normal: Vec3) -> Self {
        HitRecord {
            time,
            point,
            normal,
        }
    }
}

pub trait Hittable {
    /// Near intersection of `r` with `self`, if the ray's line touches it at all.
    fn hit(&self, r: Ray) -> Option<HitRecord>;
}
