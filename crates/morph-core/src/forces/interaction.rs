use glam::Vec3;

use crate::camera::Viewport;
use crate::hand::{Gesture, HandState};
use crate::math::mix;

/// Strength the field ramps toward for an open palm (repulsion).
pub const OPEN_STRENGTH: f32 = 4.0;
/// Strength the field ramps toward for a fist (attraction).
pub const FIST_STRENGTH: f32 = -4.0;
/// Strength for any other present hand.
pub const DEFAULT_STRENGTH: f32 = 2.0;

/// Per-frame interaction field handed to the particle transform.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ForceField {
    pub anchor: Vec3,
    /// Positive pushes particles away from the anchor, negative pulls them in.
    pub strength: f32,
    pub active: bool,
}

impl ForceField {
    pub const INACTIVE: ForceField = ForceField {
        anchor: Vec3::ZERO,
        strength: 0.0,
        active: false,
    };
}

/// Target strength for a gesture.
pub fn gesture_strength(gesture: Gesture) -> f32 {
    match gesture {
        Gesture::Open => OPEN_STRENGTH,
        Gesture::Fist => FIST_STRENGTH,
        Gesture::Pinch | Gesture::None => DEFAULT_STRENGTH,
    }
}

/// Maps a normalised hand position onto the `z = 0` plane.
///
/// The sensor's y axis points down, so it is flipped.
pub fn hand_to_plane(hand: &HandState, viewport: Viewport) -> Vec3 {
    Vec3::new(
        (hand.position.x - 0.5) * viewport.width,
        -(hand.position.y - 0.5) * viewport.height,
        0.0,
    )
}

/// Smoothed anchor and strength driven by the hand sensor.
///
/// Both follow their raw targets with a fixed per-frame lerp so sensor
/// jitter and gesture flips ramp instead of jumping. While no hand is
/// present the smoothing state is frozen.
pub struct InteractionForceModel {
    anchor: Vec3,
    strength: f32,
    smoothing: f32,
}

impl InteractionForceModel {
    pub fn new(smoothing: f32) -> Self {
        Self {
            anchor: Vec3::ZERO,
            strength: DEFAULT_STRENGTH,
            smoothing,
        }
    }

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Step the smoothing for one frame and return the resulting field.
    pub fn update(&mut self, hand: &HandState, viewport: Viewport) -> ForceField {
        if !hand.is_present {
            return ForceField {
                active: false,
                ..self.field()
            };
        }

        let raw = hand_to_plane(hand, viewport);
        self.anchor = self.anchor.lerp(raw, self.smoothing);
        self.strength = mix(self.strength, gesture_strength(hand.gesture), self.smoothing);
        self.field()
    }

    fn field(&self) -> ForceField {
        ForceField {
            anchor: self.anchor,
            strength: self.strength,
            active: true,
        }
    }
}
