pub mod config;

use crate::camera::Camera;
use crate::geometry::Sphere;
use crate::math::{Color, Vec3};
use crate::world::{World, DEFAULT_FOCAL_LENGTH};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{ensure, Context};
use serde::Deserialize;
use tracing::{info, warn};

use self::config::{Config, TOMLConfig};

pub type Vec3Data = [f32; 3];
pub type ColorData = [f32; 3];

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SphereData {
    pub position: Vec3Data,
    pub radius: f32,
    pub color: ColorData,
}

impl From<&SphereData> for Sphere {
    fn from(data: &SphereData) -> Self {
        Sphere::new(data.position.into(), data.radius, data.color.into())
    }
}

/// Scene description. Any field left out falls back to the default scene's.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SceneData {
    pub camera_origin: Option<Vec3Data>,
    pub light: Option<Vec3Data>,
    pub spheres: Option<Vec<SphereData>>,
}

pub fn construct_world(scene: Option<&SceneData>) -> anyhow::Result<World> {
    let default = World::default();
    let Some(scene) = scene else {
        info!("no scene given, using the default scene");
        return Ok(default);
    };

    let camera = scene
        .camera_origin
        .map(|origin| Camera::new(origin.into()))
        .unwrap_or(default.camera);
    ensure!(
        camera.origin.is_finite(),
        "camera origin must be finite, got {:?}",
        camera.origin
    );

    // World::new normalizes the light, so it has to have a direction
    let light = match scene.light {
        Some(light) => Vec3::from(light),
        None => Vec3::new(-1.0, -1.0, -1.0),
    };
    ensure!(
        light.is_finite() && light.norm_squared() > 0.0,
        "light must be a finite nonzero vector, got {:?}",
        light
    );

    let spheres = match &scene.spheres {
        Some(spheres) => {
            for (i, sphere) in spheres.iter().enumerate() {
                let position = Vec3::from(sphere.position);
                ensure!(
                    position.is_finite() && sphere.radius.is_finite() && sphere.radius > 0.0,
                    "sphere {} must have a finite position and a positive radius",
                    i
                );
                // NaN survives clamping
                ensure!(
                    sphere.color.iter().all(|c| c.is_finite()),
                    "sphere {} must have a finite color, got {:?}",
                    i,
                    sphere.color
                );
                let color = Color::from(sphere.color);
                if <[f32; 3]>::from(color) != sphere.color {
                    warn!("sphere {} color {:?} was clamped to [0, 1]", i, sphere.color);
                }
            }
            spheres.iter().map(Sphere::from).collect()
        }
        None => default.spheres,
    };

    if camera.origin.z != DEFAULT_FOCAL_LENGTH {
        info!("camera focal offset is {}", camera.origin.z);
    }
    Ok(World::new(camera, light, spheres))
}

/// Reads the raw TOML config. A missing file is not an error: every setting
/// has a default.
pub fn get_settings(filepath: &Path) -> anyhow::Result<TOMLConfig> {
    if !filepath.exists() {
        warn!(
            "config file {} not found, falling back to defaults",
            filepath.display()
        );
        return Ok(TOMLConfig::default());
    }
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    let settings: TOMLConfig =
        toml::from_str(&input).with_context(|| format!("failed to parse {}", filepath.display()))?;
    Ok(settings)
}

pub fn load_config(filepath: &Path) -> anyhow::Result<Config> {
    let config = Config::try_from(get_settings(filepath)?)
        .with_context(|| format!("invalid config in {}", filepath.display()))?;
    info!(
        "loaded config: {}x{} window, scale {}, {} fps, gamma correction {}",
        config.window.resolution.width,
        config.window.resolution.height,
        config.window.scale,
        config.window.target_fps,
        config.render_settings.gamma_correction
    );
    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interaction::PointerMode;

    #[test]
    fn test_no_scene_is_default_world() {
        assert_eq!(construct_world(None).unwrap(), World::default());
        assert_eq!(
            construct_world(Some(&SceneData::default())).unwrap(),
            World::default()
        );
    }

    #[test]
    fn test_scene_from_toml() {
        let data: TOMLConfig = toml::from_str(
            r#"
            [scene]
            camera_origin = [0.0, 0.0, 3.0]
            light = [0.0, -2.0, 0.0]

            [[scene.spheres]]
            position = [0.0, 0.0, -2.0]
            radius = 1.0
            color = [1.0, 1.5, -0.5]
            "#,
        )
        .unwrap();
        let world = construct_world(data.scene.as_ref()).unwrap();
        assert_eq!(world.camera.origin, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(world.light, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(world.spheres.len(), 1);
        assert_eq!(world.spheres[0].color, Color::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_rejects_bad_scene() {
        let zero_light = SceneData {
            light: Some([0.0; 3]),
            ..Default::default()
        };
        assert!(construct_world(Some(&zero_light)).is_err());

        let bad_radius = SceneData {
            spheres: Some(vec![SphereData {
                position: [0.0; 3],
                radius: -1.0,
                color: [1.0; 3],
            }]),
            ..Default::default()
        };
        assert!(construct_world(Some(&bad_radius)).is_err());

        let nan_color = SceneData {
            spheres: Some(vec![SphereData {
                position: [0.0; 3],
                radius: 1.0,
                color: [f32::NAN, 0.0, 0.0],
            }]),
            ..Default::default()
        };
        assert!(construct_world(Some(&nan_color)).is_err());
    }

    #[test]
    fn test_parsing_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/config.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config.mode, PointerMode::Light);
        assert!(config.render_settings.gamma_correction);
        let world = construct_world(config.scene.as_ref()).unwrap();
        assert_eq!(world, World::default());
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = load_config(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.window, Config::default().window);
    }
}
