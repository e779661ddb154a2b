//! Timed, eased transitions between catalog shapes.
//!
//! The controller owns the particle buffer. A transition loads the target
//! cloud into `target_position` when it starts and copies it into
//! `base_position` when it completes; in between only `progress` changes.

use std::sync::Arc;

use rand::Rng;

use crate::config::{KeyCooldown, MorphConfig};
use crate::error::{MorphError, Result};
use crate::hand::{Gesture, HandState};
use crate::math::ease;
use crate::particle::ParticleBuffer;
use crate::shapes::{Palette, ShapeCatalog, ShapeKind};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MorphState {
    Idle,
    Morphing {
        from: ShapeKind,
        to: ShapeKind,
        progress: f32,
    },
}

pub struct MorphController {
    catalog: Arc<ShapeCatalog>,
    buffer: ParticleBuffer,
    current: ShapeKind,
    state: MorphState,
    /// Time of the last trigger that honoured the cooldown, if any.
    last_trigger: Option<f64>,
    colors: Palette,
    morph_speed: f32,
    cooldown: f64,
    key_cooldown: KeyCooldown,
}

impl MorphController {
    /// Start idle on the first catalog shape.
    pub fn new<R: Rng + ?Sized>(
        catalog: Arc<ShapeCatalog>,
        config: &MorphConfig,
        rng: &mut R,
    ) -> Result<Self> {
        if !config.morph_speed.is_finite() || config.morph_speed <= 0.0 {
            return Err(MorphError::InvalidMorphSpeed(config.morph_speed));
        }
        if !config.gesture_cooldown.is_finite() || config.gesture_cooldown < 0.0 {
            return Err(MorphError::InvalidCooldown(config.gesture_cooldown));
        }

        let current = ShapeKind::Sphere;
        let buffer = ParticleBuffer::new(catalog.cloud(current), rng);
        Ok(Self {
            catalog,
            buffer,
            current,
            state: MorphState::Idle,
            last_trigger: None,
            colors: current.palette(),
            morph_speed: config.morph_speed,
            cooldown: f64::from(config.gesture_cooldown),
            key_cooldown: config.key_cooldown,
        })
    }

    pub fn buffer(&self) -> &ParticleBuffer {
        &self.buffer
    }

    pub fn catalog(&self) -> &Arc<ShapeCatalog> {
        &self.catalog
    }

    /// Shape currently at rest. Changes only when a transition completes.
    pub fn current(&self) -> ShapeKind {
        self.current
    }

    pub fn state(&self) -> MorphState {
        self.state
    }

    pub fn is_morphing(&self) -> bool {
        matches!(self.state, MorphState::Morphing { .. })
    }

    /// Raw progress in [0, 1]; zero while idle.
    pub fn progress(&self) -> f32 {
        match self.state {
            MorphState::Idle => 0.0,
            MorphState::Morphing { progress, .. } => progress,
        }
    }

    /// Smoothstep-eased progress used for both geometry and color.
    pub fn eased(&self) -> f32 {
        ease(self.progress())
    }

    /// Color pair of the shape most recently selected as a target.
    pub fn colors(&self) -> Palette {
        self.colors
    }

    pub fn last_trigger_time(&self) -> Option<f64> {
        self.last_trigger
    }

    /// Begin morphing toward `target`.
    ///
    /// Returns `false` without touching anything if a transition is already
    /// running or `target` is the shape at rest.
    pub fn request_shape_change(&mut self, target: ShapeKind) -> bool {
        if let MorphState::Morphing { to, .. } = self.state {
            log::trace!("ignoring request for {}: already morphing to {}", target.name(), to.name());
            return false;
        }
        if target == self.current {
            log::trace!("ignoring request for {}: already displayed", target.name());
            return false;
        }

        self.buffer.load_target(self.catalog.cloud(target));
        self.colors = target.palette();
        self.state = MorphState::Morphing {
            from: self.current,
            to: target,
            progress: 0.0,
        };
        log::debug!("morph started: {} -> {}", self.current.name(), target.name());
        true
    }

    /// Same as [`request_shape_change`](Self::request_shape_change) with the
    /// index wrapped into the catalog.
    pub fn request_shape_index(&mut self, index: usize) -> bool {
        self.request_shape_change(ShapeKind::from_index(index))
    }

    /// Advance a running transition by `dt` seconds.
    ///
    /// Returns `true` on the frame the transition completes.
    pub fn advance(&mut self, dt: f32) -> bool {
        let MorphState::Morphing { from, to, progress } = self.state else {
            return false;
        };
        if !(dt > 0.0) {
            return false;
        }

        let progress = progress + dt * self.morph_speed;
        if progress < 1.0 {
            self.state = MorphState::Morphing { from, to, progress };
            return false;
        }

        self.buffer.commit_target();
        self.current = to;
        self.state = MorphState::Idle;
        log::debug!("morph complete: now showing {}", to.name());
        true
    }

    fn cooldown_elapsed(&self, now: f64) -> bool {
        self.last_trigger.map_or(true, |t| now - t > self.cooldown)
    }

    /// Advance to the next shape on a debounced Pinch.
    pub fn on_gesture(&mut self, hand: &HandState, now: f64) -> bool {
        if !hand.is_present || hand.gesture != Gesture::Pinch || self.is_morphing() {
            return false;
        }
        if !self.cooldown_elapsed(now) {
            return false;
        }
        let started = self.request_shape_change(self.current.next());
        if started {
            self.last_trigger = Some(now);
        }
        started
    }

    /// Advance to the next shape on the designated key.
    pub fn on_key(&mut self, now: f64) -> bool {
        match self.key_cooldown {
            KeyCooldown::Bypass => self.request_shape_change(self.current.next()),
            KeyCooldown::Shared => {
                if !self.cooldown_elapsed(now) {
                    return false;
                }
                let started = self.request_shape_change(self.current.next());
                if started {
                    self.last_trigger = Some(now);
                }
                started
            }
        }
    }
}
