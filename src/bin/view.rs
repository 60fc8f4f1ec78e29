//! draw2d-view: show a rendered scene in a window
//!
//! The scene is rasterized on the CPU into a `Surface`, then uploaded as a
//! nearest-filtered texture. `R` reloads the scene file, `Escape` quits.

use std::path::{Path, PathBuf};

use clap::Parser;
use macroquad::prelude::*;

use draw2d::rasterizer::Surface;
use draw2d::scene::{load_scene, Scene};

#[derive(Parser, Debug)]
#[command(name = "draw2d-view", version, about = "Display a draw2d scene")]
struct Args {
    /// RON scene file (the built-in demo when omitted)
    scene: Option<PathBuf>,
    /// Initial window scale factor
    #[arg(long, default_value_t = 2)]
    scale: u32,
}

fn window_conf() -> Conf {
    Conf {
        window_title: format!("draw2d v{}", env!("CARGO_PKG_VERSION")),
        window_width: 640 * 2,
        window_height: 480 * 2,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Render the scene from disk, or the demo when no path was given
fn render(path: Option<&Path>) -> Result<Surface, String> {
    match path {
        Some(path) => {
            let scene = load_scene(path).map_err(|e| format!("{}: {}", path.display(), e))?;
            let base_dir = path.parent().unwrap_or(Path::new("."));
            scene
                .render(base_dir)
                .map_err(|e| format!("{}: {}", path.display(), e))
        }
        None => Scene::demo(640, 480)
            .render(Path::new("."))
            .map_err(|e| e.to_string()),
    }
}

/// Textures are limited to u16 dimensions
fn texture_size(surface: &Surface) -> Result<(u16, u16), String> {
    match (u16::try_from(surface.width()), u16::try_from(surface.height())) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(format!(
            "surface {}x{} is too large to display",
            surface.width(),
            surface.height()
        )),
    }
}

fn window_size(surface: &Surface, scale: u32) -> (f32, f32) {
    (
        surface.width().saturating_mul(scale) as f32,
        surface.height().saturating_mul(scale) as f32,
    )
}

fn upload(surface: &Surface) -> Result<Texture2D, String> {
    let (width, height) = texture_size(surface)?;
    let texture = Texture2D::from_rgba8(width, height, surface.as_bytes());
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

/// Render and upload in one step
fn load(path: Option<&Path>) -> Result<(Surface, Texture2D), String> {
    let surface = render(path)?;
    let texture = upload(&surface)?;
    Ok((surface, texture))
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let scene_path = args.scene.as_deref();

    let mut status = String::new();
    let mut texture = match load(scene_path) {
        Ok((surface, texture)) => {
            let (w, h) = window_size(&surface, args.scale);
            request_new_screen_size(w, h);
            Some(texture)
        }
        Err(e) => {
            log::error!("{}", e);
            status = e;
            None
        }
    };

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::R) {
            match load(scene_path) {
                Ok((_, reloaded)) => {
                    texture = Some(reloaded);
                    status = "reloaded".to_string();
                    log::info!("reloaded scene");
                }
                Err(e) => {
                    log::error!("{}", e);
                    status = e;
                }
            }
        }

        clear_background(Color::from_rgba(20, 20, 24, 255));

        if let Some(texture) = &texture {
            // Fit the surface into the window, keeping its aspect ratio
            let (sw, sh) = (screen_width(), screen_height());
            let scale = (sw / texture.width()).min(sh / texture.height());
            let (dw, dh) = (texture.width() * scale, texture.height() * scale);
            draw_texture_ex(
                texture,
                (sw - dw) * 0.5,
                (sh - dh) * 0.5,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(dw, dh)),
                    ..Default::default()
                },
            );
        }

        if !status.is_empty() {
            draw_text(&status, 8.0, 20.0, 20.0, Color::from_rgba(230, 230, 230, 255));
        }

        next_frame().await;
    }
}
