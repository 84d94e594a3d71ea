/// Camera controller: discrete inputs to scene transforms
///
/// The controller owns the current scene and projection distance and maps
/// toolkit-agnostic input events onto the transform engine. Windowing
/// shells translate their native events into [`CameraInput`] and never
/// touch the math directly.
use crate::config::Config;
use crate::geometry::Scene;
use crate::transform;

/// Rotation applied per pointer cell of drag movement, in rotate-step
/// units.
pub const POINTER_SENSITIVITY: f64 = 0.1;

/// Floor for the projection distance. Unclamped zoom-out would drive the
/// distance to zero and beyond, flipping the projection's sign.
pub const MIN_DISTANCE: f64 = 1e-3;

/// A discrete camera input, independent of any windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraInput {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    RotateUp,
    RotateDown,
    RotateLeft,
    RotateRight,
    RollLeft,
    RollRight,
    ZoomIn,
    ZoomOut,
    /// Pointer button pressed: clears the drag baseline.
    PointerPressed,
    /// Pointer dragged to an absolute position.
    PointerMoved { x: f64, y: f64 },
    /// Wheel scrolled; only the sign of the delta matters.
    Wheel { delta: f64 },
}

/// Owns the scene and camera distance, replacing the scene wholesale on
/// every accepted input.
#[derive(Debug, Clone)]
pub struct CameraController {
    scene: Scene,
    distance: f64,
    move_step: f64,
    rotate_step: f64,
    zoom_step: f64,
    last_pointer: Option<(f64, f64)>,
}

impl CameraController {
    pub fn new(scene: Scene, config: &Config) -> Self {
        Self {
            scene,
            distance: config.distance.max(MIN_DISTANCE),
            move_step: config.move_step,
            rotate_step: config.rotate_step,
            zoom_step: config.zoom_step,
            last_pointer: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Handle one input event. Returns true when the scene or distance
    /// changed, so the shell knows to request a repaint.
    pub fn handle(&mut self, input: CameraInput) -> bool {
        match input {
            CameraInput::MoveForward => self.shift(0.0, 0.0, -1.0),
            CameraInput::MoveBackward => self.shift(0.0, 0.0, 1.0),
            CameraInput::MoveLeft => self.shift(1.0, 0.0, 0.0),
            CameraInput::MoveRight => self.shift(-1.0, 0.0, 0.0),
            CameraInput::MoveUp => self.shift(0.0, -1.0, 0.0),
            CameraInput::MoveDown => self.shift(0.0, 1.0, 0.0),
            CameraInput::RotateUp => self.turn(1.0, 0.0, 0.0),
            CameraInput::RotateDown => self.turn(-1.0, 0.0, 0.0),
            CameraInput::RotateLeft => self.turn(0.0, 1.0, 0.0),
            CameraInput::RotateRight => self.turn(0.0, -1.0, 0.0),
            CameraInput::RollLeft => self.turn(0.0, 0.0, 1.0),
            CameraInput::RollRight => self.turn(0.0, 0.0, -1.0),
            CameraInput::ZoomIn => self.zoom(1.0),
            CameraInput::ZoomOut => self.zoom(-1.0),
            CameraInput::PointerPressed => {
                self.last_pointer = None;
                false
            }
            CameraInput::PointerMoved { x, y } => self.drag(x, y),
            CameraInput::Wheel { delta } => {
                self.zoom(if delta > 0.0 { 1.0 } else { -1.0 })
            }
        }
    }

    fn shift(&mut self, x: f64, y: f64, z: f64) -> bool {
        self.scene = transform::translate(
            &self.scene,
            x * self.move_step,
            y * self.move_step,
            z * self.move_step,
        );
        true
    }

    fn turn(&mut self, x: f64, y: f64, z: f64) -> bool {
        self.scene = transform::rotate(
            &self.scene,
            transform::angle_shift(x, self.rotate_step),
            transform::angle_shift(y, self.rotate_step),
            transform::angle_shift(z, self.rotate_step),
        );
        true
    }

    fn zoom(&mut self, direction: f64) -> bool {
        let next = transform::zoom(self.distance, direction, self.zoom_step).max(MIN_DISTANCE);
        log::debug!("zoom: distance {} -> {}", self.distance, next);
        self.distance = next;
        true
    }

    /// Drag rotation. The first move after a press only records the
    /// baseline (zero net rotation); later moves rotate by the one-step
    /// delta from the previous position.
    fn drag(&mut self, x: f64, y: f64) -> bool {
        let rotated = if let Some((last_x, last_y)) = self.last_pointer {
            let dx = x - last_x;
            let dy = y - last_y;
            self.turn(dy * POINTER_SENSITIVITY, dx * POINTER_SENSITIVITY, 0.0)
        } else {
            false
        };
        self.last_pointer = Some((x, y));
        rotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Polygon, PolygonColor};
    use nalgebra::Point3;

    fn test_config() -> Config {
        Config {
            distance: 200.0,
            window_width: 1024,
            window_height: 768,
            move_step: 5.0,
            rotate_step: 30.0,
            zoom_step: 20.0,
        }
    }

    fn test_controller() -> CameraController {
        let scene = Scene::new(vec![Polygon::new(
            vec![Point3::new(10.0, 20.0, 30.0)],
            PolygonColor::Red,
        )]);
        CameraController::new(scene, &test_config())
    }

    fn first_point(controller: &CameraController) -> Point3<f64> {
        controller.scene().polygons[0].points[0]
    }

    #[test]
    fn test_move_directions() {
        let mut c = test_controller();
        assert!(c.handle(CameraInput::MoveForward));
        assert_eq!(first_point(&c), Point3::new(10.0, 20.0, 25.0));

        c.handle(CameraInput::MoveLeft);
        assert_eq!(first_point(&c), Point3::new(15.0, 20.0, 25.0));

        c.handle(CameraInput::MoveUp);
        assert_eq!(first_point(&c), Point3::new(15.0, 15.0, 25.0));

        c.handle(CameraInput::MoveBackward);
        c.handle(CameraInput::MoveRight);
        c.handle(CameraInput::MoveDown);
        assert_eq!(first_point(&c), Point3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_key_rotation_matches_engine() {
        let mut c = test_controller();
        let expected = transform::rotate(
            c.scene(),
            transform::angle_shift(1.0, 30.0),
            0.0,
            0.0,
        );
        c.handle(CameraInput::RotateUp);
        assert!((first_point(&c) - expected.polygons[0].points[0]).norm() < 1e-12);
    }

    #[test]
    fn test_rotate_roundtrip() {
        let mut c = test_controller();
        let original = first_point(&c);
        c.handle(CameraInput::RotateLeft);
        c.handle(CameraInput::RotateRight);
        assert!((first_point(&c) - original).norm() < 1e-9);
    }

    #[test]
    fn test_zoom_roundtrip() {
        let mut c = test_controller();
        c.handle(CameraInput::ZoomIn);
        c.handle(CameraInput::ZoomIn);
        assert_eq!(c.distance(), 240.0);
        c.handle(CameraInput::ZoomOut);
        c.handle(CameraInput::ZoomOut);
        assert_eq!(c.distance(), 200.0);
    }

    #[test]
    fn test_zoom_clamps_at_floor() {
        let mut c = test_controller();
        for _ in 0..20 {
            c.handle(CameraInput::ZoomOut);
        }
        assert_eq!(c.distance(), MIN_DISTANCE);
    }

    #[test]
    fn test_wheel_zoom() {
        let mut c = test_controller();
        c.handle(CameraInput::Wheel { delta: 120.0 });
        assert_eq!(c.distance(), 220.0);
        c.handle(CameraInput::Wheel { delta: -120.0 });
        assert_eq!(c.distance(), 200.0);
    }

    #[test]
    fn test_first_drag_move_is_baseline_only() {
        let mut c = test_controller();
        let original = first_point(&c);

        c.handle(CameraInput::PointerPressed);
        let changed = c.handle(CameraInput::PointerMoved { x: 100.0, y: 50.0 });
        assert!(!changed);
        assert_eq!(first_point(&c), original);
    }

    #[test]
    fn test_second_drag_move_rotates_by_delta() {
        let mut c = test_controller();
        c.handle(CameraInput::PointerPressed);
        c.handle(CameraInput::PointerMoved { x: 100.0, y: 50.0 });

        let before = c.scene().clone();
        let changed = c.handle(CameraInput::PointerMoved { x: 104.0, y: 47.0 });
        assert!(changed);

        // dx = 4, dy = -3: rotate x by dy * sensitivity, y by dx * sensitivity
        let expected = transform::rotate(
            &before,
            transform::angle_shift(-3.0 * POINTER_SENSITIVITY, 30.0),
            transform::angle_shift(4.0 * POINTER_SENSITIVITY, 30.0),
            0.0,
        );
        assert!((first_point(&c) - expected.polygons[0].points[0]).norm() < 1e-12);
    }

    #[test]
    fn test_press_resets_baseline() {
        let mut c = test_controller();
        c.handle(CameraInput::PointerPressed);
        c.handle(CameraInput::PointerMoved { x: 10.0, y: 10.0 });
        c.handle(CameraInput::PointerMoved { x: 20.0, y: 20.0 });

        let after_drag = first_point(&c);
        c.handle(CameraInput::PointerPressed);
        // First move after the new press: no phantom jump from (20, 20).
        let changed = c.handle(CameraInput::PointerMoved { x: 200.0, y: 200.0 });
        assert!(!changed);
        assert_eq!(first_point(&c), after_drag);
    }
}
