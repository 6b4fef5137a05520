use crate::world::World;

use serde::Deserialize;
use tracing::debug;

/// What the pointer steers.
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PointerMode {
    #[default]
    None,
    Light,
    Camera,
}

impl std::str::FromStr for PointerMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(PointerMode::None),
            "light" => Ok(PointerMode::Light),
            "camera" => Ok(PointerMode::Camera),
            other => Err(anyhow::anyhow!(
                "unknown pointer mode {:?}, expected none, light or camera",
                other
            )),
        }
    }
}

/// A pointer sample in window pixels, origin top left.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

/// Viewer toggles that persist between frames.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interaction {
    pub mode: PointerMode,
    pub gamma_correction: bool,
}

impl Default for Interaction {
    fn default() -> Self {
        Interaction {
            mode: PointerMode::None,
            gamma_correction: true,
        }
    }
}

impl Interaction {
    pub fn new(mode: PointerMode, gamma_correction: bool) -> Self {
        Interaction {
            mode,
            gamma_correction,
        }
    }

    pub fn toggle_gamma(&mut self) {
        self.gamma_correction = !self.gamma_correction;
    }

    /// Switches to `mode`, or back to `PointerMode::None` if it is already
    /// active. Only one move mode is active at a time.
    pub fn toggle_mode(&mut self, mode: PointerMode) {
        self.mode = if self.mode == mode {
            PointerMode::None
        } else {
            mode
        };
    }

    /// Applies a pointer sample to `world`. Call only between frames.
    ///
    /// Samples on or beyond the edges of `frame`, the frame buffer size, are
    /// dropped. Accepted samples are normalized by `viewport`, the logical
    /// window size. Returns whether the event was applied.
    pub fn handle_pointer(
        &self,
        world: &mut World,
        event: PointerEvent,
        frame: (usize, usize),
        viewport: (usize, usize),
    ) -> bool {
        let (frame_width, frame_height) = (frame.0 as f32, frame.1 as f32);
        if event.x <= 0.0 || event.x >= frame_width || event.y <= 0.0 || event.y >= frame_height {
            return false;
        }
        let nx = event.x / viewport.0 as f32;
        let ny = event.y / viewport.1 as f32;
        apply_normalized_pointer(world, self.mode, nx, ny);
        true
    }
}

/// Maps a normalized pointer position (origin top left) onto the scene.
///
/// Light mode writes the light's x and y and leaves its z alone, without
/// renormalizing. Camera mode moves the camera within `[-1, 1]`; any other mode
/// recenters it.
pub fn apply_normalized_pointer(world: &mut World, mode: PointerMode, nx: f32, ny: f32) {
    if mode == PointerMode::Light {
        world.light.x = (1.0 - nx) * 4.0 - 2.0;
        world.light.y = (1.0 - ny) * 4.0 - 2.0;
        debug!("light moved to {:?}", world.light);
    }

    if mode == PointerMode::Camera {
        world.camera.origin.x = nx * 2.0 - 1.0;
        world.camera.origin.y = ny * 2.0 - 1.0;
    } else {
        world.camera.origin.x = 0.0;
        world.camera.origin.y = 0.0;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn test_light_mode() {
        let mut world = World::default();
        let z = world.light.z;
        apply_normalized_pointer(&mut world, PointerMode::Light, 0.25, 1.0);
        assert_eq!(world.light.x, 1.0);
        assert_eq!(world.light.y, -2.0);
        assert_eq!(world.light.z, z);
        // not renormalized
        assert!(world.light.norm() > 1.0);
        assert_eq!(world.camera.origin, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_camera_mode_and_reset() {
        let mut world = World::default();
        apply_normalized_pointer(&mut world, PointerMode::Camera, 0.75, 0.0);
        assert_eq!(world.camera.origin, Vec3::new(0.5, -1.0, 2.0));
        let light = world.light;

        apply_normalized_pointer(&mut world, PointerMode::Light, 0.5, 0.5);
        assert_eq!(world.camera.origin, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(world.light, Vec3::new(0.0, 0.0, light.z));
    }

    #[test]
    fn test_edge_events_are_dropped() {
        let interaction = Interaction::new(PointerMode::Camera, true);
        let mut world = World::default();
        for (x, y) in [(0.0, 10.0), (10.0, 0.0), (100.0, 10.0), (10.0, 50.0), (-3.0, 4.0)] {
            let applied =
                interaction.handle_pointer(&mut world, PointerEvent { x, y }, (100, 50), (100, 50));
            assert!(!applied);
        }
        assert_eq!(world, World::default());

        assert!(interaction.handle_pointer(
            &mut world,
            PointerEvent { x: 25.0, y: 25.0 },
            (100, 50),
            (100, 50)
        ));
        assert_eq!(world.camera.origin, Vec3::new(-0.5, 0.0, 2.0));
    }

    #[test]
    fn test_scaled_frame_normalizes_by_viewport() {
        // a 2x frame buffer inside a 100x50 window
        let interaction = Interaction::new(PointerMode::Light, true);
        let mut world = World::default();
        assert!(interaction.handle_pointer(
            &mut world,
            PointerEvent { x: 150.0, y: 75.0 },
            (200, 100),
            (100, 50)
        ));
        assert_eq!(world.light.x, -4.0);
        assert_eq!(world.light.y, -4.0);
    }

    #[test]
    fn test_toggle_mode_is_exclusive() {
        let mut interaction = Interaction::default();
        interaction.toggle_mode(PointerMode::Light);
        assert_eq!(interaction.mode, PointerMode::Light);
        interaction.toggle_mode(PointerMode::Camera);
        assert_eq!(interaction.mode, PointerMode::Camera);
        interaction.toggle_mode(PointerMode::Camera);
        assert_eq!(interaction.mode, PointerMode::None);
        interaction.toggle_gamma();
        assert!(!interaction.gamma_correction);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Light".parse::<PointerMode>().unwrap(), PointerMode::Light);
        assert_eq!("camera".parse::<PointerMode>().unwrap(), PointerMode::Camera);
        assert!("sphere".parse::<PointerMode>().is_err());
    }
}
