/// JSON scene/config loading
///
/// The config file carries both the polygon data and the viewer settings:
///
/// ```json
/// {
///     "polygons": [[[0.0, 0.0, 100.0], [50.0, 0.0, 100.0]], ...],
///     "colors": ["red", "blue"],
///     "distance": 200,
///     "window_width": 1024,
///     "window_height": 768,
///     "move_step": 1,
///     "rotate_step": 30,
///     "zoom_step": 20
/// }
/// ```
///
/// Only `polygons` and `colors` are required; everything else defaults.
/// The two required lists are parallel on the wire but zipped into
/// per-polygon color tags at load time, so nothing downstream relies on
/// index alignment.
use std::fs;
use std::path::Path;

use nalgebra::Point3;
use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{Polygon, PolygonColor, Scene};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config lists {polygons} polygons but {colors} colors")]
    ColorCount { polygons: usize, colors: usize },
}

/// Viewer settings, immutable after load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub distance: f64,
    pub window_width: u32,
    pub window_height: u32,
    pub move_step: f64,
    pub rotate_step: f64,
    pub zoom_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            distance: default_distance(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            move_step: default_move_step(),
            rotate_step: default_rotate_step(),
            zoom_step: default_zoom_step(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    polygons: Vec<Vec<[f64; 3]>>,
    colors: Vec<String>,
    #[serde(default = "default_distance")]
    distance: f64,
    #[serde(default = "default_window_width")]
    window_width: u32,
    #[serde(default = "default_window_height")]
    window_height: u32,
    #[serde(default = "default_move_step")]
    move_step: f64,
    #[serde(default = "default_rotate_step")]
    rotate_step: f64,
    #[serde(default = "default_zoom_step")]
    zoom_step: f64,
}

fn default_distance() -> f64 {
    200.0
}

fn default_window_width() -> u32 {
    1024
}

fn default_window_height() -> u32 {
    768
}

fn default_move_step() -> f64 {
    1.0
}

fn default_rotate_step() -> f64 {
    30.0
}

fn default_zoom_step() -> f64 {
    20.0
}

/// Load a scene and config from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<(Scene, Config), ConfigError> {
    let data = fs::read_to_string(path)?;
    parse(&data)
}

/// Parse a scene and config from JSON text.
pub fn parse(data: &str) -> Result<(Scene, Config), ConfigError> {
    let file: ConfigFile = serde_json::from_str(data)?;

    if file.polygons.len() != file.colors.len() {
        return Err(ConfigError::ColorCount {
            polygons: file.polygons.len(),
            colors: file.colors.len(),
        });
    }

    let polygons = file
        .polygons
        .iter()
        .zip(&file.colors)
        .map(|(points, color)| {
            Polygon::new(
                points.iter().map(|p| Point3::new(p[0], p[1], p[2])).collect(),
                PolygonColor::from_name(color),
            )
        })
        .collect();
    let scene = Scene::new(polygons);

    let config = Config {
        distance: file.distance,
        window_width: file.window_width,
        window_height: file.window_height,
        move_step: file.move_step,
        rotate_step: file.rotate_step,
        zoom_step: file.zoom_step,
    };

    log::info!(
        "loaded scene: {} polygons, {} vertices",
        scene.polygons.len(),
        scene.vertex_count()
    );
    log::debug!("config: {:?}", config);

    Ok((scene, config))
}
