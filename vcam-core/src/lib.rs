/// VCam Core Library - Wireframe viewer math and state
///
/// This library provides the stateless transform pipeline for the viewer:
/// affine transform matrices, perspective projection, the camera controller
/// mapping discrete inputs onto them, and JSON scene/config loading.

pub mod camera;
pub mod config;
pub mod geometry;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use camera::{CameraController, CameraInput};
pub use config::{Config, ConfigError};
pub use geometry::{Polygon, PolygonColor, Scene};
pub use projection::{ProjectedPolygon, Projector};
