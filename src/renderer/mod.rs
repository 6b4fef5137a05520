pub use crate::vec2d::Vec2D;

use crate::camera::screen_uv;
use crate::geometry::Sphere;
use crate::hittable::HitRecord;
use crate::math::*;
use crate::profile::FrameProfile;
use crate::world::World;

use serde::Deserialize;
use tracing::trace;

pub const DEFAULT_GAMMA: f32 = 2.2;
/// Sky color at the top of the gradient.
pub const SKY_COLOR: Color = Color::from_raw(0.5, 0.7, 1.0);
/// How fast the gradient fades to white as `v` grows.
pub const GRADIENT_SCALE: f32 = 1.3;

/// A writable grid of 8 bit `[r, g, b, a]` cells.
///
/// Implementors own the mapping onto their native byte order.
pub trait PixelSurface {
    fn dimensions(&self) -> (usize, usize);
    fn write_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]);
}

impl PixelSurface for image::RgbaImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }
    fn write_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        self.put_pixel(x as u32, y as u32, image::Rgba(rgba));
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub gamma_correction: bool,
    pub gamma: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            gamma_correction: true,
            gamma: DEFAULT_GAMMA,
        }
    }
}

/// Flat shading of a sphere hit: sphere color scaled by `max(n . -light, 0)`.
///
/// The light is used as stored, so a light vector that was steered away from
/// unit length brightens or dims the result, and the product is not clamped.
pub fn shade(world: &World, sphere: &Sphere, hit: &HitRecord, settings: &RenderSettings) -> Color {
    let light_amount = hit.normal.dot(-world.light).max(0.0);
    let color = sphere.color * light_amount;
    if settings.gamma_correction {
        color.pow(1.0 / settings.gamma)
    } else {
        color
    }
}

/// Vertical sky gradient for rays that hit nothing. `v * 1.3` is handed to
/// `Color::mix` unclamped; the mix clamps it.
pub fn background(v: f32) -> Color {
    let gradient = v * GRADIENT_SCALE;
    Color::mix(SKY_COLOR, Color::WHITE, gradient)
}

/// Color of pixel `(x, y)` in a `width` x `height` frame.
pub fn pixel_color(
    world: &World,
    settings: &RenderSettings,
    (x, y): (usize, usize),
    (width, height): (usize, usize),
    profile: &mut FrameProfile,
) -> Color {
    let ray = world.camera.get_ray(x, y, width, height);
    profile.camera_rays += 1;
    match world.first_hit(ray) {
        Some((index, sphere, hit)) => {
            profile.sphere_tests += index + 1;
            profile.sphere_hits += 1;
            shade(world, sphere, &hit, settings)
        }
        None => {
            profile.sphere_tests += world.spheres.len();
            profile.background_hits += 1;
            let (_, v) = screen_uv(x, y, width, height);
            background(v)
        }
    }
}

/// Renders one full frame of `world` into `surface`, overwriting every cell.
///
/// Width and height come from the surface and must both be nonzero.
pub fn render_frame(
    world: &World,
    settings: &RenderSettings,
    surface: &mut impl PixelSurface,
) -> FrameProfile {
    let (width, height) = surface.dimensions();
    let mut profile = FrameProfile::default();
    for y in 0..height {
        for x in 0..width {
            let color = pixel_color(world, settings, (x, y), (width, height), &mut profile);
            surface.write_pixel(x, y, color.to_rgba8());
        }
    }
    trace!("rendered {}x{} frame, {:?}", width, height, profile);
    profile
}
