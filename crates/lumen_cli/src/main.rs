use anyhow::{bail, Context, Result};
use lumen_core::{load_scene_file, CameraSettings, RenderSettings, Scene, Sphere};
use lumen_math::Vec3;
use lumen_renderer::Renderer;
use std::path::PathBuf;

const USAGE: &str = "Usage: lumen [SCENE.json] [-o OUT.png] [-w WIDTH] [-h HEIGHT]";

/// Command line options
#[derive(Debug, PartialEq)]
struct Args {
    scene: Option<PathBuf>,
    output: PathBuf,
    width: u32,
    height: u32,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            scene: None,
            output: PathBuf::from("render.png"),
            width: 800,
            height: 600,
        }
    }
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-o" | "--output" => {
                    let value = args.next().context("missing value for --output")?;
                    parsed.output = PathBuf::from(value);
                }
                "-w" | "--width" => parsed.width = parse_dimension(args.next(), "--width")?,
                "-h" | "--height" => parsed.height = parse_dimension(args.next(), "--height")?,
                flag if flag.starts_with('-') => bail!("unknown option {flag}\n{USAGE}"),
                _ if parsed.scene.is_some() => bail!("more than one scene file given\n{USAGE}"),
                _ => parsed.scene = Some(PathBuf::from(&arg)),
            }
        }

        Ok(parsed)
    }
}

fn parse_dimension(value: Option<String>, name: &str) -> Result<u32> {
    let value = value.with_context(|| format!("missing value for {name}"))?;
    let dimension: u32 = value
        .parse()
        .with_context(|| format!("{name} must be a whole number, got {value:?}"))?;
    if dimension == 0 {
        bail!("{name} must be greater than zero");
    }
    Ok(dimension)
}

/// Magenta ball resting above a large blue ground sphere.
fn build_demo_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Vec3::new(1.0, 0.0, 1.0)));
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, -101.0, 0.0),
        100.0,
        Vec3::new(0.2, 0.3, 1.0),
    ));
    scene
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse(std::env::args().skip(1))?;

    let (scene, mut camera, settings) = match &args.scene {
        Some(path) => load_scene_file(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?
            .into_parts(),
        None => {
            log::info!("No scene file given, rendering the demo scene");
            (
                build_demo_scene(),
                CameraSettings::default().build(),
                RenderSettings::default(),
            )
        }
    };

    camera.resize(args.width, args.height);

    let mut renderer = Renderer::new(settings);
    renderer.on_resize(args.width, args.height);
    renderer.render(&camera, &scene)?;

    if let Some(time) = renderer.last_render_time() {
        log::info!(
            "Rendered {}x{} with {} spheres in {:.2}ms",
            args.width,
            args.height,
            scene.len(),
            time.as_secs_f64() * 1000.0
        );
    }

    let frame = renderer
        .final_image()
        .context("renderer produced no image")?
        .to_rgba_image();

    // The camera's first row is the bottom of the view; image files start at the top
    let frame = image::imageops::flip_vertical(&frame);
    frame
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    log::info!("Saved to {}", args.output.display());

    Ok(())
}
