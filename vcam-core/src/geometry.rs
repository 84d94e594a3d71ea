/// Geometry primitives for the wireframe scene
use nalgebra::Point3;

/// Pen color for a polygon's edges.
///
/// Any color name the config does not recognize falls back to `Black`;
/// the mapping never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonColor {
    Red,
    Blue,
    Black,
}

impl PolygonColor {
    /// Parse a config color name. Unknown names map to `Black`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "red" => Self::Red,
            "blue" => Self::Blue,
            other => {
                if other != "black" {
                    log::debug!("unknown color {:?}, using black", other);
                }
                Self::Black
            }
        }
    }
}

/// A closed polygon: an ordered vertex loop plus its edge color.
///
/// The last vertex implicitly connects back to the first; insertion order
/// defines edge adjacency and is preserved by every transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point3<f64>>,
    pub color: PolygonColor,
}

impl Polygon {
    pub fn new(points: Vec<Point3<f64>>, color: PolygonColor) -> Self {
        Self { points, color }
    }
}

/// An ordered set of polygons in camera-relative world space.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub polygons: Vec<Polygon>,
}

impl Scene {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn empty() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// Total vertex count across all polygons.
    pub fn vertex_count(&self) -> usize {
        self.polygons.iter().map(|p| p.points.len()).sum()
    }

    /// Create a unit-ish cube of six black quads for testing.
    pub fn cube(size: f64) -> Self {
        let half = size / 2.0;
        let quad = |pts: [[f64; 3]; 4]| {
            Polygon::new(
                pts.iter().map(|p| Point3::new(p[0], p[1], p[2])).collect(),
                PolygonColor::Black,
            )
        };

        Self::new(vec![
            // Front and back faces
            quad([
                [-half, -half, half],
                [half, -half, half],
                [half, half, half],
                [-half, half, half],
            ]),
            quad([
                [-half, -half, -half],
                [half, -half, -half],
                [half, half, -half],
                [-half, half, -half],
            ]),
            // Top and bottom faces
            quad([
                [-half, half, -half],
                [half, half, -half],
                [half, half, half],
                [-half, half, half],
            ]),
            quad([
                [-half, -half, -half],
                [half, -half, -half],
                [half, -half, half],
                [-half, -half, half],
            ]),
            // Right and left faces
            quad([
                [half, -half, -half],
                [half, half, -half],
                [half, half, half],
                [half, -half, half],
            ]),
            quad([
                [-half, -half, -half],
                [-half, half, -half],
                [-half, half, half],
                [-half, -half, half],
            ]),
        ])
    }
}
