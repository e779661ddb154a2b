use crate::camera::CameraConfig;
use crate::error::{MorphError, Result};

/// Whether the advance key is subject to the gesture cooldown.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum KeyCooldown {
    /// Key presses ignore the cooldown and do not stamp it.
    #[default]
    Bypass,
    /// Key presses check and stamp the same timer as the Pinch gesture.
    Shared,
}

#[derive(Clone, Debug)]
pub struct MorphConfig {
    pub particle_count: usize,
    pub shape_radius: f32,
    /// Full transitions per second.
    pub morph_speed: f32,
    /// Minimum seconds between Pinch-triggered shape changes.
    pub gesture_cooldown: f32,
    pub interaction_radius: f32,
    pub noise_frequency: f32,
    pub noise_amplitude: f32,
    /// Per-frame lerp factor for anchor and strength smoothing.
    pub smoothing: f32,
    pub point_size: f32,
    pub key_cooldown: KeyCooldown,
    pub camera: CameraConfig,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            particle_count: 20_000,
            shape_radius: 2.0,
            morph_speed: 1.5,
            gesture_cooldown: 2.0,
            interaction_radius: 2.0,
            noise_frequency: 0.5,
            noise_amplitude: 0.1,
            smoothing: 0.1,
            point_size: 5.0,
            key_cooldown: KeyCooldown::Bypass,
            camera: CameraConfig::default(),
        }
    }
}

impl MorphConfig {
    /// Reject values that would make the simulation meaningless. Nothing is
    /// clamped.
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(MorphError::EmptyParticleSet);
        }
        if !self.shape_radius.is_finite() || self.shape_radius <= 0.0 {
            return Err(MorphError::InvalidRadius(self.shape_radius));
        }
        if !self.morph_speed.is_finite() || self.morph_speed <= 0.0 {
            return Err(MorphError::InvalidMorphSpeed(self.morph_speed));
        }
        if !self.gesture_cooldown.is_finite() || self.gesture_cooldown < 0.0 {
            return Err(MorphError::InvalidCooldown(self.gesture_cooldown));
        }
        if !self.interaction_radius.is_finite() || self.interaction_radius <= 0.0 {
            return Err(MorphError::InvalidInteractionRadius(self.interaction_radius));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(MorphError::InvalidSmoothing(self.smoothing));
        }
        self.camera.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MorphConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_without_clamping() {
        let cfg = MorphConfig {
            shape_radius: 0.0,
            ..MorphConfig::default()
        };
        assert_eq!(cfg.validate(), Err(MorphError::InvalidRadius(0.0)));

        let cfg = MorphConfig {
            particle_count: 0,
            ..MorphConfig::default()
        };
        assert_eq!(cfg.validate(), Err(MorphError::EmptyParticleSet));

        let cfg = MorphConfig {
            smoothing: f32::NAN,
            ..MorphConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(MorphError::InvalidSmoothing(_))));

        let cfg = MorphConfig {
            gesture_cooldown: -0.5,
            ..MorphConfig::default()
        };
        assert_eq!(cfg.validate(), Err(MorphError::InvalidCooldown(-0.5)));
    }
}
