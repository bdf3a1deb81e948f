use std::{path::PathBuf, str::FromStr, time::Instant};

use clap::Parser;
use sphere_tracer::{util::math::point, Color, RenderSettings, Renderer, Scene, Sphere, Viewport};
use tracing_subscriber::EnvFilter;

/// Render a scene of spheres to a PNG file.
#[derive(Parser, Debug)]
#[command(name = "sphere-tracer", version)]
struct Cli {
    /// Output width in pixels
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Output height in pixels
    #[arg(long, default_value_t = 1000)]
    height: u32,

    #[arg(long, default_value_t = 1.0)]
    viewport_width: f64,

    #[arg(long, default_value_t = 1.0)]
    viewport_height: f64,

    /// Reflection bounces followed per pixel
    #[arg(long, default_value_t = 3)]
    max_depth: u32,

    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// radius,cx,cy,cz,r,g,b,specular,reflective (repeatable). Without any, the
    /// four sphere scene is rendered.
    #[arg(long = "sphere", value_name = "SPHERE")]
    spheres: Vec<SphereArg>,
}

#[derive(Debug, Clone, Copy)]
struct SphereArg(Sphere);

impl FromStr for SphereArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid number in sphere '{s}': {e}"))?;

        let &[radius, x, y, z, r, g, b, specular, reflective] = values.as_slice() else {
            return Err(format!(
                "sphere '{s}' needs 9 values: radius,cx,cy,cz,r,g,b,specular,reflective"
            ));
        };

        Ok(Self(
            Sphere::new(radius, point(x, y, z), Color::new(r, g, b))
                .with_specular(specular)
                .with_reflective(reflective),
        ))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let scene = if cli.spheres.is_empty() {
        Scene::four_spheres()
    } else {
        cli.spheres.iter().map(|arg| arg.0).collect()
    };
    let viewport = Viewport::new(cli.viewport_width, cli.viewport_height);
    let renderer = Renderer::new(RenderSettings {
        max_depth: cli.max_depth,
        ..RenderSettings::default()
    });

    let started = Instant::now();
    let raster = renderer.render(cli.width, cli.height, &viewport, &scene)?;
    tracing::info!(
        "rendered {} spheres at {}x{} in {} ms",
        scene.len(),
        cli.width,
        cli.height,
        started.elapsed().as_millis()
    );

    raster.save_png(&cli.output)?;
    tracing::info!("saved {}", cli.output.display());

    Ok(())
}
