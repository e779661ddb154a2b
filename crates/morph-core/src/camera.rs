//! Viewer camera and the visible extent of the interaction plane.
//!
//! The camera looks down -Z at the origin. Hand positions are mapped onto
//! the `z = 0` plane, so the force model needs that plane's world-space
//! width and height as seen through the current projection.

use glam::{Mat4, Vec3};

use crate::error::{MorphError, Result};

#[derive(Clone, Debug)]
pub struct CameraConfig {
    /// Distance of the eye from the origin along +Z.
    pub eye_distance: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport width / height.
    pub aspect: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye_distance: 12.0,
            fov_y_degrees: 60.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.eye_distance.is_finite() || self.eye_distance <= 0.0 {
            return Err(MorphError::InvalidCamera(format!(
                "eye distance {} must be > 0",
                self.eye_distance
            )));
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(MorphError::InvalidCamera(format!(
                "vertical fov {} must be in (0, 180)",
                self.fov_y_degrees
            )));
        }
        if !self.aspect.is_finite() || self.aspect <= 0.0 {
            return Err(MorphError::InvalidCamera(format!(
                "aspect {} must be > 0",
                self.aspect
            )));
        }
        Ok(())
    }
}

/// World-space size of the `z = 0` plane visible through the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

pub struct Camera {
    config: CameraConfig,
    view: Mat4,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Result<Self> {
        config.validate()?;
        let eye = Vec3::new(0.0, 0.0, config.eye_distance);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        Ok(Self { config, view })
    }

    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    pub fn aspect(&self) -> f32 {
        self.config.aspect
    }

    /// Update the aspect ratio after a canvas resize. Non-positive values are
    /// ignored so a zero-sized canvas keeps the last good extent.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.config.aspect = aspect;
        } else {
            log::warn!("ignoring invalid aspect ratio {}", aspect);
        }
    }

    pub fn viewport(&self) -> Viewport {
        let half_fov = self.config.fov_y_degrees.to_radians() * 0.5;
        let height = 2.0 * half_fov.tan() * self.config.eye_distance;
        Viewport {
            width: height * self.config.aspect,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_matches_fov() {
        let cam = Camera::new(CameraConfig {
            eye_distance: 12.0,
            fov_y_degrees: 90.0,
            aspect: 2.0,
        })
        .unwrap();
        let vp = cam.viewport();
        assert!((vp.height - 24.0).abs() < 1e-4, "height = {}", vp.height);
        assert!((vp.width - 48.0).abs() < 1e-4, "width = {}", vp.width);
    }

    #[test]
    fn test_origin_is_in_front_of_camera() {
        let cam = Camera::new(CameraConfig::default()).unwrap();
        let p = cam.view().transform_point3(Vec3::ZERO);
        assert!((p.z + 12.0).abs() < 1e-4, "view-space z = {}", p.z);
    }

    #[test]
    fn test_invalid_aspect_is_ignored() {
        let mut cam = Camera::new(CameraConfig::default()).unwrap();
        cam.set_aspect(0.0);
        assert!((cam.aspect() - 16.0 / 9.0).abs() < 1e-6);
        cam.set_aspect(1.0);
        assert_eq!(cam.aspect(), 1.0);
    }

    #[test]
    fn test_rejects_degenerate_fov() {
        let cfg = CameraConfig {
            fov_y_degrees: 180.0,
            ..CameraConfig::default()
        };
        assert!(Camera::new(cfg).is_err());
    }
}
