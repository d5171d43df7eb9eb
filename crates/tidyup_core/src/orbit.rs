use bevy_math::Vec3;

use crate::config::OrbitSettings;

/// Camera placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// Viewing direction flattened onto the ground plane.
    pub fn forward_flat(&self) -> Vec3 {
        flatten(self.look_at - self.position)
    }
}

/// Drop the vertical component and normalize, or zero if nothing is left.
pub fn flatten(direction: Vec3) -> Vec3 {
    Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero()
}

/// Third-person camera orbiting a moving target on a sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub settings: OrbitSettings,
    position: Vec3,
    dragging: bool,
}

impl OrbitCamera {
    pub fn new(settings: OrbitSettings, start_position: Vec3) -> Self {
        let mut camera = Self {
            yaw: std::f32::consts::PI,
            pitch: -0.2,
            distance: 8.0,
            settings,
            position: start_position,
            dragging: false,
        };
        camera.pitch = camera.clamp_pitch(camera.pitch);
        camera.distance = camera.clamp_distance(camera.distance);
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Drag gestures run from drag-button press to release.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn on_drag(&mut self, dx: f32, dy: f32) {
        if !self.dragging {
            return;
        }
        self.yaw -= dx * self.settings.yaw_sensitivity;
        self.pitch = self.clamp_pitch(self.pitch - dy * self.settings.pitch_sensitivity);
    }

    pub fn on_zoom(&mut self, delta_y: f32) {
        self.distance = self.clamp_distance(self.distance + delta_y * self.settings.zoom_sensitivity);
    }

    /// Offset from the target to where the camera wants to be.
    pub fn offset(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch) * self.distance
    }

    /// Jump straight to the orbit position, skipping the smoothing.
    pub fn snap(&mut self, target: Vec3) {
        self.position = target + self.offset();
    }

    /// Advance one frame toward the orbit position around `target`.
    ///
    /// Smoothing closes a fixed fraction of the gap per call, so the follow
    /// speed depends on the frame rate.
    pub fn compute_pose(&mut self, target: Vec3) -> CameraPose {
        let desired = target + self.offset();
        self.position = self.position.lerp(desired, self.settings.follow_smoothing);
        CameraPose {
            position: self.position,
            look_at: target,
        }
    }

    fn clamp_pitch(&self, pitch: f32) -> f32 {
        let max = self.settings.max_pitch();
        if pitch.is_nan() {
            return 0.0;
        }
        pitch.clamp(-max, max)
    }

    fn clamp_distance(&self, distance: f32) -> f32 {
        if distance.is_nan() {
            return self.distance;
        }
        distance.clamp(self.settings.min_distance, self.settings.max_distance)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(OrbitSettings::default(), Vec3::ZERO)
    }

    #[test]
    fn starts_behind_with_defaults() {
        let cam = camera();
        assert_eq!(cam.yaw, PI);
        assert_eq!(cam.pitch, -0.2);
        assert_eq!(cam.distance, 8.0);
    }

    #[test]
    fn drag_ignored_without_button() {
        let mut cam = camera();
        cam.on_drag(100.0, 100.0);
        assert_eq!(cam.yaw, PI);
        assert_eq!(cam.pitch, -0.2);
    }

    #[test]
    fn drag_rotates_while_held() {
        let mut cam = camera();
        cam.set_dragging(true);
        cam.on_drag(10.0, 10.0);
        assert!((cam.yaw - (PI - 0.05)).abs() < 1e-6);
        assert!((cam.pitch - (-0.2 - 0.03)).abs() < 1e-6);

        cam.set_dragging(false);
        cam.on_drag(10.0, 10.0);
        assert!((cam.yaw - (PI - 0.05)).abs() < 1e-6);
    }

    #[test]
    fn pitch_and_distance_stay_bounded() {
        let mut cam = camera();
        cam.set_dragging(true);
        let max_pitch = FRAC_PI_2 - 0.05;
        let deltas = [5000.0, -12000.0, 300.0, -7.0, 90000.0, -90000.0];
        for (i, &d) in deltas.iter().enumerate() {
            cam.on_drag(d * 0.3, d);
            cam.on_zoom(if i % 2 == 0 { d } else { -d });
            assert!(cam.pitch >= -max_pitch && cam.pitch <= max_pitch, "pitch {}", cam.pitch);
            assert!(cam.distance >= 3.0 && cam.distance <= 15.0, "distance {}", cam.distance);
        }
    }

    #[test]
    fn zoom_scales_wheel_delta() {
        let mut cam = camera();
        cam.on_zoom(100.0);
        assert!((cam.distance - 9.0).abs() < 1e-6);
        cam.on_zoom(-10_000.0);
        assert_eq!(cam.distance, 3.0);
    }

    #[test]
    fn offset_matches_spherical_coordinates() {
        let mut cam = camera();
        cam.yaw = 0.0;
        cam.pitch = 0.0;
        cam.distance = 5.0;
        assert!(cam.offset().distance(Vec3::new(0.0, 0.0, 5.0)) < 1e-5);

        cam.yaw = FRAC_PI_2;
        assert!(cam.offset().distance(Vec3::new(5.0, 0.0, 0.0)) < 1e-5);
    }

    #[test]
    fn pose_closes_fixed_fraction_per_frame() {
        let mut cam = camera();
        cam.yaw = 0.0;
        cam.pitch = 0.0;
        cam.distance = 10.0;

        let pose = cam.compute_pose(Vec3::ZERO);
        assert!(pose.position.distance(Vec3::new(0.0, 0.0, 1.2)) < 1e-5);
        assert_eq!(pose.look_at, Vec3::ZERO);

        for _ in 0..400 {
            cam.compute_pose(Vec3::ZERO);
        }
        assert!(cam.position().distance(Vec3::new(0.0, 0.0, 10.0)) < 1e-3);
    }

    #[test]
    fn forward_points_from_camera_to_target() {
        let pose = CameraPose {
            position: Vec3::new(0.0, 3.0, 8.0),
            look_at: Vec3::new(0.0, 1.5, 0.0),
        };
        assert!(pose.forward_flat().distance(Vec3::new(0.0, 0.0, -1.0)) < 1e-6);
    }
}
