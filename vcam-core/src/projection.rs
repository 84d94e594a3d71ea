/// Perspective projection of scenes onto the 2D view plane
use nalgebra::Point2;

use crate::geometry::{PolygonColor, Scene};

/// Depth substituted for points at or behind the camera plane.
///
/// Such points are not culled: they are projected with this clamped depth,
/// which yields defined (if visually wrong) coordinates.
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// A projected polygon: 2D screen points plus the source polygon's color.
///
/// Point count and order match the source polygon exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPolygon {
    pub points: Vec<Point2<f64>>,
    pub color: PolygonColor,
}

impl ProjectedPolygon {
    /// Edges of the closed loop: consecutive point pairs, wrapping the last
    /// point back to the first. Fewer than two points yields no edges; two
    /// points yield both directed pairs (one segment per vertex).
    pub fn edges(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        let count = if self.points.len() < 2 {
            0
        } else {
            self.points.len()
        };
        (0..count).map(move |i| {
            let next = (i + 1) % self.points.len();
            (self.points[i], self.points[next])
        })
    }
}

/// Perspective projector with a configurable depth clamp.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pub epsilon: f64,
}

impl Projector {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Project every polygon onto the view plane at the given distance.
    ///
    /// Per point: `sx = x * distance / z'`, `sy = y * distance / z'`, where
    /// `z'` is the point's z if positive, else `epsilon`. Polygon count,
    /// per-polygon vertex count, vertex order, and colors are preserved.
    pub fn project(&self, scene: &Scene, distance: f64) -> Vec<ProjectedPolygon> {
        scene
            .polygons
            .iter()
            .map(|polygon| {
                let points = polygon
                    .points
                    .iter()
                    .map(|point| {
                        let z = if point.z > 0.0 { point.z } else { self.epsilon };
                        Point2::new(point.x * distance / z, point.y * distance / z)
                    })
                    .collect();
                ProjectedPolygon {
                    points,
                    color: polygon.color,
                }
            })
            .collect()
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}
