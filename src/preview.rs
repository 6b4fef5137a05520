//! Interactive window. Presents frames from the renderer and feeds pointer and
//! key input back into the scene between frames.

use crate::interaction::{Interaction, PointerEvent, PointerMode};
use crate::parsing::config::Config;
use crate::profile::FrameTimer;
use crate::renderer::{render_frame, Vec2D};
use crate::world::World;

use std::time::Instant;

use anyhow::anyhow;
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};
use tracing::{debug, info};

/// Opens a window and calls `callback` once per presented frame with the
/// window and a `0RGB` frame buffer to fill. Returns when the window is closed
/// or Escape is pressed.
pub fn window_loop<F>(
    title: &str,
    frame_size: (usize, usize),
    window_size: (usize, usize),
    target_fps: usize,
    options: WindowOptions,
    mut callback: F,
) -> anyhow::Result<()>
where
    F: FnMut(&Window, &mut Vec2D<u32>),
{
    let mut window = Window::new(title, window_size.0, window_size.1, options)
        .map_err(|e| anyhow!("could not create window: {}", e))?;
    window.set_target_fps(target_fps);
    info!(
        "created {}x{} window with a {}x{} frame buffer",
        window_size.0, window_size.1, frame_size.0, frame_size.1
    );

    let mut film = Vec2D::new(frame_size.0, frame_size.1, 0u32);
    while window.is_open() && !window.is_key_down(Key::Escape) {
        callback(&window, &mut film);
        window
            .update_with_buffer(&film.buffer, film.width, film.height)
            .map_err(|e| anyhow!("could not present frame: {}", e))?;
    }
    Ok(())
}

/// Runs the interactive session until the window closes.
///
/// Each tick polls input, applies it to `world`, then renders and presents a
/// full frame, strictly in that order.
pub fn run_preview(mut world: World, config: &Config) -> anyhow::Result<()> {
    let mut interaction = Interaction::new(config.mode, config.render_settings.gamma_correction);
    let mut render_settings = config.render_settings;
    let frame_size = config.window.frame_size();
    let viewport = (
        config.window.resolution.width,
        config.window.resolution.height,
    );
    let mut timer = FrameTimer::new(Instant::now());
    let mut last_pointer: Option<(f32, f32)> = None;

    info!("G toggles gamma correction, L moves the light, C moves the camera, Escape quits");
    window_loop(
        "Raytracer",
        frame_size,
        viewport,
        config.window.target_fps,
        WindowOptions::default(),
        |window, film| {
            if window.is_key_pressed(Key::G, KeyRepeat::No) {
                interaction.toggle_gamma();
                info!("gamma correction {}", interaction.gamma_correction);
            }
            if window.is_key_pressed(Key::L, KeyRepeat::No) {
                interaction.toggle_mode(PointerMode::Light);
                info!("pointer mode {:?}", interaction.mode);
            }
            if window.is_key_pressed(Key::C, KeyRepeat::No) {
                interaction.toggle_mode(PointerMode::Camera);
                info!("pointer mode {:?}", interaction.mode);
            }

            // only motion counts as an event, a resting pointer changes nothing
            let pointer = window.get_mouse_pos(MouseMode::Pass);
            if pointer.is_some() && pointer != last_pointer {
                if let Some((x, y)) = pointer {
                    let event = PointerEvent { x, y };
                    if !interaction.handle_pointer(&mut world, event, frame_size, viewport) {
                        debug!("dropped pointer event at the frame edge: {:?}", event);
                    }
                }
                last_pointer = pointer;
            }

            render_settings.gamma_correction = interaction.gamma_correction;
            let started = Instant::now();
            render_frame(&world, &render_settings, film);
            if timer.frame_finished(started, Instant::now()) {
                let origin = world.camera.origin;
                info!(
                    "FPS: {} - ({:.2} ms) camera: {{{:.2}, {:.2}, {:.2}}}",
                    timer.fps,
                    timer.last_frame_ms(),
                    origin.x,
                    origin.y,
                    origin.z
                );
            }
        },
    )
}
