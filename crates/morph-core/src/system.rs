use std::sync::Arc;

use rand::Rng;

use crate::camera::Camera;
use crate::config::MorphConfig;
use crate::error::Result;
use crate::forces::interaction::{ForceField, InteractionForceModel};
use crate::hand::HandMailbox;
use crate::morph::{MorphController, MorphState};
use crate::shapes::{ShapeCatalog, ShapeKind};
use crate::transform::{transform_all, FrameUniforms, GpuVertex};

/// Read-only view of one rendered frame.
pub struct FrameSnapshot<'a> {
    pub vertices: &'a [GpuVertex],
    pub field: ForceField,
    pub eased: f32,
    pub current: ShapeKind,
    pub state: MorphState,
    /// Particle buffer generation; changes whenever rest or target positions
    /// were rewritten.
    pub generation: u64,
    pub time: f64,
}

impl FrameSnapshot<'_> {
    /// Vertex data as raw bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices)
    }
}

/// Owns every piece of the particle morph and runs one frame at a time.
///
/// Each frame first runs the control phase (hand mailbox, force model,
/// gesture trigger, morph advance), then the per-particle transform over the
/// particle buffer. The two phases never overlap.
pub struct MorphSystem {
    config: MorphConfig,
    camera: Camera,
    mailbox: Arc<HandMailbox>,
    force: InteractionForceModel,
    morph: MorphController,
    field: ForceField,
    /// Session clock in seconds. Kept in f64 so per-frame increments stay
    /// representable over long sessions.
    elapsed: f64,
    vertices: Vec<GpuVertex>,
}

impl MorphSystem {
    pub fn new(config: MorphConfig) -> Result<Self> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(config: MorphConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let catalog = Arc::new(ShapeCatalog::build_with_rng(
            config.particle_count,
            config.shape_radius,
            &mut *rng,
        )?);
        let camera = Camera::new(config.camera.clone())?;
        let morph = MorphController::new(catalog, &config, rng)?;
        let force = InteractionForceModel::new(config.smoothing);

        log::info!(
            "particle morph system created: {} particles, radius {}",
            config.particle_count,
            config.shape_radius
        );

        Ok(Self {
            vertices: vec![GpuVertex::default(); config.particle_count],
            config,
            camera,
            mailbox: Arc::new(HandMailbox::new()),
            force,
            morph,
            field: ForceField::INACTIVE,
            elapsed: 0.0,
        })
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    /// Handle for the sensor side; publish readings from any thread.
    pub fn mailbox(&self) -> Arc<HandMailbox> {
        Arc::clone(&self.mailbox)
    }

    pub fn morph(&self) -> &MorphController {
        &self.morph
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Vertices written by the most recent [`frame`](Self::frame).
    pub fn vertices(&self) -> &[GpuVertex] {
        &self.vertices
    }

    pub fn field(&self) -> ForceField {
        self.field
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// The designated "next shape" key was pressed.
    pub fn press_advance_key(&mut self) -> bool {
        self.morph.on_key(self.elapsed)
    }

    /// Control phase only: advance the clock, read the hand, update the
    /// force field and the morph.
    pub fn control_step(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.elapsed += f64::from(dt);

        let hand = self.mailbox.latest();
        self.field = self.force.update(&hand, self.camera.viewport());
        self.morph.on_gesture(&hand, self.elapsed);
        self.morph.advance(dt);
    }

    /// Clock handed to the transform, wrapped to one idle-motion period so
    /// it keeps full f32 resolution however long the session runs.
    fn shader_time(&self) -> f32 {
        let period = std::f64::consts::TAU / f64::from(self.config.noise_frequency);
        if period.is_finite() && period > 0.0 {
            self.elapsed.rem_euclid(period) as f32
        } else {
            self.elapsed as f32
        }
    }

    pub fn uniforms(&self) -> FrameUniforms {
        let colors = self.morph.colors();
        FrameUniforms {
            time: self.shader_time(),
            eased: self.morph.eased(),
            field: self.field,
            interaction_radius: self.config.interaction_radius,
            noise_frequency: self.config.noise_frequency,
            noise_amplitude: self.config.noise_amplitude,
            color_from: colors.primary,
            color_to: colors.secondary,
            point_size: self.config.point_size,
            view: *self.camera.view(),
        }
    }

    /// Run one full frame and return what the renderer needs to draw it.
    pub fn frame(&mut self, dt: f32) -> FrameSnapshot<'_> {
        self.control_step(dt);

        let uniforms = self.uniforms();
        transform_all(self.morph.buffer(), &uniforms, &mut self.vertices);

        FrameSnapshot {
            vertices: &self.vertices,
            field: self.field,
            eased: uniforms.eased,
            current: self.morph.current(),
            state: self.morph.state(),
            generation: self.morph.buffer().generation(),
            time: self.elapsed,
        }
    }
}
