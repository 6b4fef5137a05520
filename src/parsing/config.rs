use crate::interaction::PointerMode;
use crate::renderer::{RenderSettings, DEFAULT_GAMMA};

use anyhow::{bail, ensure};
use serde::Deserialize;

use super::SceneData;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct TOMLWindowSettings {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub target_fps: Option<usize>,
    pub scale: Option<usize>,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct TOMLRenderSettings {
    pub gamma_correction: Option<bool>,
    pub gamma: Option<f32>,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct TOMLInteractionSettings {
    pub mode: Option<PointerMode>,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct TOMLConfig {
    pub window: TOMLWindowSettings,
    pub render: TOMLRenderSettings,
    pub interaction: TOMLInteractionSettings,
    pub scene: Option<SceneData>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WindowSettings {
    /// Logical window size, what pointer positions are normalized by.
    pub resolution: Resolution,
    pub target_fps: usize,
    /// Frame buffer pixels per window pixel along each axis.
    pub scale: usize,
}

impl WindowSettings {
    /// Checks that the window is nonzero and that the frame buffer size fits an
    /// image dimension.
    pub fn validate(&self) -> anyhow::Result<()> {
        let Resolution { width, height } = self.resolution;
        ensure!(
            width > 0 && height > 0,
            "window resolution must be nonzero, got {}x{}",
            width,
            height
        );
        ensure!(self.scale > 0, "window scale must be at least 1");
        let fits = |side: usize| {
            side.checked_mul(self.scale)
                .is_some_and(|pixels| u32::try_from(pixels).is_ok())
        };
        ensure!(
            fits(width) && fits(height),
            "frame buffer of {}x{} at scale {} is too large",
            width,
            height,
            self.scale
        );
        Ok(())
    }

    /// Frame buffer size. Only meaningful once `validate` has passed.
    pub fn frame_size(&self) -> (usize, usize) {
        (
            self.resolution.width * self.scale,
            self.resolution.height * self.scale,
        )
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub window: WindowSettings,
    pub render_settings: RenderSettings,
    pub mode: PointerMode,
    pub scene: Option<SceneData>,
}

impl TryFrom<TOMLConfig> for Config {
    type Error = anyhow::Error;

    fn try_from(data: TOMLConfig) -> Result<Self, Self::Error> {
        let window = WindowSettings {
            resolution: Resolution {
                width: data.window.width.unwrap_or(800),
                height: data.window.height.unwrap_or(450),
            },
            target_fps: data.window.target_fps.unwrap_or(60),
            scale: data.window.scale.unwrap_or(1),
        };
        window.validate()?;

        let gamma = data.render.gamma.unwrap_or(DEFAULT_GAMMA);
        if !(gamma.is_finite() && gamma > 0.0) {
            bail!("gamma must be a positive number, got {}", gamma);
        }

        Ok(Config {
            window,
            render_settings: RenderSettings {
                gamma_correction: data.render.gamma_correction.unwrap_or(true),
                gamma,
            },
            mode: data.interaction.mode.unwrap_or_default(),
            scene: data.scene,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window: WindowSettings {
                resolution: Resolution {
                    width: 800,
                    height: 450,
                },
                target_fps: 60,
                scale: 1,
            },
            render_settings: RenderSettings::default(),
            mode: PointerMode::None,
            scene: None,
        }
    }
}
