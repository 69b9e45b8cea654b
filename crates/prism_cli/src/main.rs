use std::path::PathBuf;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use prism_core::{load_scene, Scene};
use prism_renderer::{
    render, render_parallel, save_image, Camera, ImageBuffer, RenderConfig, DEFAULT_BUCKET_SIZE,
};

/// Render a scene of spheres with recursive ray tracing.
#[derive(Parser, Debug)]
#[command(name = "prism", author, version, about, long_about = None)]
struct Args {
    /// JSON scene file. The built-in demo scene is used when omitted.
    #[arg(long, value_name = "FILE")]
    scene: Option<PathBuf>,

    /// Output image; `.ppm` is written directly, other extensions go through `image`.
    #[arg(long, short = 'o', value_name = "FILE", default_value = "SequentialRaytracing.ppm")]
    output: PathBuf,

    /// Image width in pixels.
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Vertical field of view in degrees.
    #[arg(long, value_name = "DEG", default_value_t = 60.0)]
    fov: f32,

    /// Deepest recursion level that is still shaded.
    #[arg(long, default_value_t = 4)]
    max_depth: u32,

    /// Render buckets on the rayon thread pool instead of pixel by pixel.
    #[arg(long)]
    parallel: bool,

    /// Number of render threads (implies --parallel). Defaults to all cores.
    #[arg(long, short = 't', value_name = "NUM")]
    threads: Option<usize>,

    /// Bucket size in pixels for the parallel renderer.
    #[arg(long, value_name = "NUM", default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,
}

impl Args {
    fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "image size must be non-zero, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.fov > 0.0 && self.fov < 180.0,
            "field of view must be between 0 and 180 degrees, got {}",
            self.fov
        );
        ensure!(self.bucket_size > 0, "bucket size must be non-zero");
        if let Some(threads) = self.threads {
            ensure!(threads > 0, "thread count must be non-zero");
        }
        Ok(())
    }
}

fn load(args: &Args) -> Result<Scene> {
    match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => {
            log::info!("No scene file given, using the demo scene");
            Ok(Scene::demo())
        }
    }
}

fn render_image(
    args: &Args,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Result<ImageBuffer> {
    match args.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build render thread pool")?;
            Ok(pool.install(|| render_parallel(camera, scene, config, args.bucket_size)))
        }
        None if args.parallel => Ok(render_parallel(camera, scene, config, args.bucket_size)),
        None => Ok(render(camera, scene, config)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    args.validate()?;

    let scene = load(&args)?;
    log::info!(
        "Scene: {} spheres, {} lights, ground {}",
        scene.sphere_count(),
        scene.light_count(),
        if scene.ground.is_some() { "on" } else { "off" }
    );

    let camera = Camera::new()
        .with_resolution(args.width, args.height)
        .with_fov(args.fov);
    let config = RenderConfig {
        max_depth: args.max_depth,
        ..RenderConfig::default()
    };

    let start = Instant::now();
    let image = render_image(&args, &camera, &scene, &config)?;
    log::info!(
        "Rendered {}x{} in {:.2}s",
        image.width,
        image.height,
        start.elapsed().as_secs_f64()
    );

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
