extern crate sphere_tracer as root;

use root::interaction::PointerMode;
use root::parsing::config::Config;
use root::parsing::{construct_world, load_config};
use root::renderer::render_frame;
use root::world::World;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use structopt::StructOpt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, parse(from_os_str), default_value = "data/config.toml")]
    pub config_file: PathBuf,
    /// Render a single frame to this PNG instead of opening a window.
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,
    #[structopt(long)]
    pub width: Option<usize>,
    #[structopt(long)]
    pub height: Option<usize>,
    #[structopt(long)]
    pub no_gamma: bool,
    /// Pointer mode: none, light or camera.
    #[structopt(long)]
    pub mode: Option<PointerMode>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn apply_overrides(config: &mut Config, opts: &Opt) -> anyhow::Result<()> {
    if let Some(width) = opts.width {
        config.window.resolution.width = width;
    }
    if let Some(height) = opts.height {
        config.window.resolution.height = height;
    }
    config
        .window
        .validate()
        .context("invalid --width or --height")?;
    if opts.no_gamma {
        config.render_settings.gamma_correction = false;
    }
    if let Some(mode) = opts.mode {
        config.mode = mode;
    }
    Ok(())
}

fn snapshot(world: &World, config: &Config, path: &Path) -> anyhow::Result<()> {
    let (width, height) = config.window.frame_size();
    let mut img = image::RgbaImage::new(
        u32::try_from(width).context("frame width does not fit an image")?,
        u32::try_from(height).context("frame height does not fit an image")?,
    );

    let now = Instant::now();
    let profile = render_frame(world, &config.render_settings, &mut img);
    let elapsed = now.elapsed().as_secs_f32();
    info!("rendered {}x{} frame in {}s", width, height, elapsed);
    profile.pretty_print(elapsed.max(f32::EPSILON));

    img.save(path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    info!("saved {}", path.display());
    Ok(())
}

#[cfg(feature = "preview")]
fn interactive(world: World, config: &Config) -> anyhow::Result<()> {
    root::preview::run_preview(world, config)
}

#[cfg(not(feature = "preview"))]
fn interactive(_world: World, _config: &Config) -> anyhow::Result<()> {
    anyhow::bail!("built without the preview feature, pass --output to render a snapshot")
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config = load_config(&opts.config_file)?;
    apply_overrides(&mut config, &opts)?;

    let world = construct_world(config.scene.as_ref()).context("fatal error parsing scene")?;
    info!(
        "scene has {} spheres, light {:?}, camera at {:?}",
        world.spheres.len(),
        world.light,
        world.camera.origin
    );

    if opts.dry_run {
        return Ok(());
    }
    match &opts.output {
        Some(path) => snapshot(&world, &config, path),
        None => interactive(world, &config),
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&opts.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run(opts).inspect_err(|e| error!("{:#}", e))
}
