//! draw2d: headless front-end for the software rasterizer
//!
//! - `render`: rasterize a RON scene to PNG
//! - `demo`: render (or save) the built-in showcase scene
//! - `bench`: time line drawing across length, slope and clipping cases

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use draw2d::bench::{run_case, standard_cases};
use draw2d::rasterizer::Surface;
use draw2d::scene::{load_scene, save_scene, Scene};

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "draw2d", version, about = "Minimal software rasterizer")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a RON scene file to a PNG image
    Render {
        scene: PathBuf,
        /// Output image (defaults to the scene path with a .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the built-in demo scene
    Demo {
        #[arg(short, long, default_value = "demo.png")]
        output: PathBuf,
        #[arg(long, default_value_t = 640)]
        width: u32,
        #[arg(long, default_value_t = 480)]
        height: u32,
        /// Also write the scene description as RON
        #[arg(long)]
        save_scene: Option<PathBuf>,
    },
    /// Time line drawing
    Bench {
        #[arg(long, default_value_t = 1920)]
        width: u32,
        #[arg(long, default_value_t = 1080)]
        height: u32,
        #[arg(short, long, default_value_t = 1000)]
        iterations: u32,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("draw2d v{}", VERSION);

    match args.command {
        Command::Render { scene, output } => {
            let output = output.unwrap_or_else(|| scene.with_extension("png"));
            render(&scene, &output)
        }
        Command::Demo { output, width, height, save_scene: ron_path } => {
            anyhow::ensure!(width > 0 && height > 0, "surface size must be non-zero");
            let scene = Scene::demo(width, height);
            if let Some(ron_path) = ron_path {
                save_scene(&scene, &ron_path)
                    .with_context(|| format!("writing {}", ron_path.display()))?;
            }
            let surface = scene.render(Path::new("."))?;
            surface
                .save_png(&output)
                .with_context(|| format!("writing {}", output.display()))?;
            Ok(())
        }
        Command::Bench { width, height, iterations } => {
            anyhow::ensure!(width > 0 && height > 0, "surface size must be non-zero");
            bench(width, height, iterations);
            Ok(())
        }
    }
}

fn render(scene_path: &Path, output: &Path) -> Result<()> {
    let scene = load_scene(scene_path)
        .with_context(|| format!("loading scene {}", scene_path.display()))?;
    let base_dir = scene_path.parent().unwrap_or(Path::new("."));
    let surface = scene
        .render(base_dir)
        .with_context(|| format!("rendering {}", scene_path.display()))?;
    surface
        .save_png(output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

fn bench(width: u32, height: u32, iterations: u32) {
    let cases = standard_cases(width, height);
    let mut surface = Surface::new(width, height);

    let progress = ProgressBar::new(cases.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut results = Vec::with_capacity(cases.len());
    for case in &cases {
        progress.set_message(case.name.clone());
        results.push(run_case(&mut surface, case, iterations));
        progress.inc(1);
    }
    progress.finish_and_clear();

    println!("{:<16} {:>12} {:>14}", "case", "iterations", "per draw");
    for r in &results {
        println!("{:<16} {:>12} {:>14}", r.name, r.iterations, format_duration(r.per_iteration()));
    }
    info!("benchmarked {} cases on {}x{}", results.len(), width, height);
}

fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 10_000 {
        format!("{} ns", nanos)
    } else {
        format!("{:.2} us", nanos as f64 / 1000.0)
    }
}
