//! Scene loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files.

use std::fs;
use std::path::Path;

use super::Scene;
use crate::Result;

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&contents)?;
    log::info!(
        "loaded scene {} ({}x{}, {} shapes)",
        path.display(),
        scene.width,
        scene.height,
        scene.shapes.len()
    );
    Ok(scene)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(scene, config)?;
    fs::write(path.as_ref(), contents)?;
    log::info!("saved scene to {}", path.as_ref().display());
    Ok(())
}

/// Load a scene from a RON string (for embedded scenes or testing)
pub fn load_scene_from_str(s: &str) -> Result<Scene> {
    Ok(ron::from_str(s)?)
}
