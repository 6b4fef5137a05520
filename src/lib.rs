pub mod camera;
pub mod geometry;
pub mod hittable;
pub mod interaction;
pub mod math;
pub mod parsing;
#[cfg(feature = "preview")]
pub mod preview;
pub mod profile;
pub mod renderer;
pub mod vec2d;
pub mod world;

pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::geometry::Sphere;
    pub use crate::interaction::{Interaction, PointerEvent, PointerMode};
    pub use crate::math::{Color, Ray, Vec3};
    pub use crate::renderer::{render_frame, PixelSurface, RenderSettings, Vec2D};
    pub use crate::world::World;
}

pub fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
