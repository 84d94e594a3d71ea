/// Affine transform builders and scene application
///
/// All transforms are 4x4 homogeneous matrices. Only affine operations are
/// built here (translation, axis rotation), so applying one keeps the
/// homogeneous coordinate at 1 and no perspective divide happens at this
/// stage.
use std::f64::consts::PI;

use nalgebra::{Matrix4, Point3, Vector3};

use crate::geometry::{Polygon, Scene};

/// Translation matrix: dx, dy, dz in the last column of an identity.
pub fn translation(dx: f64, dy: f64, dz: f64) -> Matrix4<f64> {
    Matrix4::new_translation(&Vector3::new(dx, dy, dz))
}

/// Rotation about the X axis (right-handed).
#[rustfmt::skip]
pub fn rotation_x(angle: f64) -> Matrix4<f64> {
    let (sin, cos) = angle.sin_cos();
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, cos, -sin, 0.0,
        0.0, sin, cos, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the Y axis (right-handed).
#[rustfmt::skip]
pub fn rotation_y(angle: f64) -> Matrix4<f64> {
    let (sin, cos) = angle.sin_cos();
    Matrix4::new(
        cos, 0.0, sin, 0.0,
        0.0, 1.0, 0.0, 0.0,
        -sin, 0.0, cos, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the Z axis (right-handed).
#[rustfmt::skip]
pub fn rotation_z(angle: f64) -> Matrix4<f64> {
    let (sin, cos) = angle.sin_cos();
    Matrix4::new(
        cos, -sin, 0.0, 0.0,
        sin, cos, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Combined rotation applying X first, then Y, then Z.
///
/// The order is a fixed contract: rotations do not commute, and every
/// combined rotation in the viewer goes through this composition.
pub fn rotation_xyz(ax: f64, ay: f64, az: f64) -> Matrix4<f64> {
    rotation_z(az) * rotation_y(ay) * rotation_x(ax)
}

/// Angle in radians for a discrete rotation input.
///
/// `rotate_step` is the number of discrete steps covering a half-turn, so
/// one step of shift 1.0 rotates by `PI / rotate_step`.
pub fn angle_shift(shift: f64, rotate_step: f64) -> f64 {
    PI / rotate_step * shift
}

/// Zoom arithmetic: `distance + direction * step`.
///
/// No floor is enforced here; callers that must keep the distance positive
/// clamp the result themselves.
pub fn zoom(distance: f64, direction: f64, step: f64) -> f64 {
    distance + direction * step
}

/// Apply a homogeneous matrix to every vertex of every polygon.
///
/// Each point is lifted to (x, y, z, 1), multiplied, and the first three
/// components of the result are taken. Produces a new Scene; polygon and
/// vertex order are preserved.
pub fn apply(scene: &Scene, matrix: &Matrix4<f64>) -> Scene {
    let polygons = scene
        .polygons
        .iter()
        .map(|polygon| {
            let points = polygon
                .points
                .iter()
                .map(|point| {
                    let h = matrix * point.to_homogeneous();
                    Point3::new(h.x, h.y, h.z)
                })
                .collect();
            Polygon::new(points, polygon.color)
        })
        .collect();
    Scene::new(polygons)
}

/// Translate every polygon by (dx, dy, dz).
pub fn translate(scene: &Scene, dx: f64, dy: f64, dz: f64) -> Scene {
    apply(scene, &translation(dx, dy, dz))
}

/// Rotate every polygon by the given per-axis angles, X then Y then Z.
pub fn rotate(scene: &Scene, ax: f64, ay: f64, az: f64) -> Scene {
    apply(scene, &rotation_xyz(ax, ay, az))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PolygonColor;

    fn test_scene() -> Scene {
        Scene::new(vec![Polygon::new(
            vec![
                Point3::new(1.0, 2.0, 3.0),
                Point3::new(-4.0, 5.0, -6.0),
                Point3::new(7.0, -8.0, 9.0),
            ],
            PolygonColor::Red,
        )])
    }

    fn assert_scene_approx_eq(a: &Scene, b: &Scene, tolerance: f64) {
        assert_eq!(a.polygons.len(), b.polygons.len());
        for (pa, pb) in a.polygons.iter().zip(&b.polygons) {
            assert_eq!(pa.points.len(), pb.points.len());
            for (qa, qb) in pa.points.iter().zip(&pb.points) {
                assert!(
                    (qa - qb).norm() < tolerance,
                    "{:?} != {:?}",
                    qa,
                    qb
                );
            }
        }
    }

    #[test]
    fn test_translation_matrix_layout() {
        let m = translation(3.0, -4.0, 5.0);
        assert_eq!(m[(0, 3)], 3.0);
        assert_eq!(m[(1, 3)], -4.0);
        assert_eq!(m[(2, 3)], 5.0);
        assert_eq!(m[(3, 3)], 1.0);
    }

    #[test]
    fn test_rotation_conventions() {
        let angle = 0.4_f64;
        let (sin, cos) = angle.sin_cos();

        let rx = rotation_x(angle);
        assert!((rx[(1, 1)] - cos).abs() < 1e-12);
        assert!((rx[(1, 2)] + sin).abs() < 1e-12);
        assert!((rx[(2, 1)] - sin).abs() < 1e-12);

        let ry = rotation_y(angle);
        assert!((ry[(0, 2)] - sin).abs() < 1e-12);
        assert!((ry[(2, 0)] + sin).abs() < 1e-12);

        let rz = rotation_z(angle);
        assert!((rz[(0, 1)] + sin).abs() < 1e-12);
        assert!((rz[(1, 0)] - sin).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_roundtrip() {
        let scene = test_scene();
        let rotations: [fn(f64) -> Matrix4<f64>; 3] = [rotation_x, rotation_y, rotation_z];
        for rotate_axis in rotations {
            let angle = angle_shift(1.0, 30.0);
            let there = apply(&scene, &rotate_axis(angle));
            let back = apply(&there, &rotate_axis(-angle));
            assert_scene_approx_eq(&scene, &back, 1e-9);
        }
    }

    #[test]
    fn test_translation_roundtrip() {
        let scene = test_scene();
        let there = translate(&scene, 10.0, -20.0, 30.0);
        let back = translate(&there, -10.0, 20.0, -30.0);
        assert_scene_approx_eq(&scene, &back, 1e-12);
    }

    #[test]
    fn test_rotation_order_is_not_commutative() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let a = 0.7;
        let b = 1.1;

        let xy = rotation_y(b) * rotation_x(a) * p.to_homogeneous();
        let yx = rotation_x(a) * rotation_y(b) * p.to_homogeneous();
        assert!((xy - yx).norm() > 1e-6);
    }

    #[test]
    fn test_combined_rotation_applies_x_y_z_in_order() {
        let scene = test_scene();
        let (ax, ay, az) = (0.3, -0.5, 0.9);

        let combined = rotate(&scene, ax, ay, az);
        let sequential = apply(
            &apply(&apply(&scene, &rotation_x(ax)), &rotation_y(ay)),
            &rotation_z(az),
        );
        assert_scene_approx_eq(&combined, &sequential, 1e-12);
    }

    #[test]
    fn test_angle_shift() {
        assert!((angle_shift(1.0, 30.0) - PI / 30.0).abs() < 1e-15);
        assert!((angle_shift(-2.0, 30.0) + PI / 15.0).abs() < 1e-15);
        assert_eq!(angle_shift(0.0, 30.0), 0.0);
    }

    #[test]
    fn test_zoom_arithmetic() {
        assert_eq!(zoom(200.0, 1.0, 20.0), 220.0);
        assert_eq!(zoom(200.0, -1.0, 20.0), 180.0);
        // No floor: zoom-out can drive the distance non-positive.
        assert_eq!(zoom(10.0, -1.0, 20.0), -10.0);
    }

    #[test]
    fn test_empty_scene_passes_through() {
        let scene = Scene::empty();
        let moved = translate(&scene, 1.0, 2.0, 3.0);
        assert!(moved.polygons.is_empty());
    }

    #[test]
    fn test_degenerate_polygon_transforms() {
        let scene = Scene::new(vec![Polygon::new(
            vec![Point3::new(1.0, 1.0, 1.0)],
            PolygonColor::Blue,
        )]);
        let rotated = rotate(&scene, 0.5, 0.0, 0.0);
        assert_eq!(rotated.polygons[0].points.len(), 1);
    }
}
