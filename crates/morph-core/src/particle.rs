use glam::Vec3;
use rand::Rng;

use crate::shapes::PointCloud;

/// SoA particle storage
///
/// Written only during the control phase (`&mut self`), read by the
/// per-particle transform during the render phase (`&self`). Every write
/// bumps `generation` so a renderer knows when to re-upload the positions.
pub struct ParticleBuffer {
    pub(crate) count: usize,
    /// Rest positions currently on display
    pub(crate) base_position: Vec<Vec3>,
    /// Destination of the running (or last) morph
    pub(crate) target_position: Vec<Vec3>,
    /// Static per-particle size variation in [0, 1)
    pub(crate) size_jitter: Vec<f32>,
    generation: u64,
}

impl ParticleBuffer {
    /// Both position arrays start as a copy of `initial`.
    pub fn new<R: Rng + ?Sized>(initial: &PointCloud, rng: &mut R) -> Self {
        let count = initial.len();
        Self {
            count,
            base_position: initial.points().to_vec(),
            target_position: initial.points().to_vec(),
            size_jitter: (0..count).map(|_| rng.gen::<f32>()).collect(),
            generation: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn base_position(&self) -> &[Vec3] {
        &self.base_position
    }

    pub fn target_position(&self) -> &[Vec3] {
        &self.target_position
    }

    pub fn size_jitter(&self) -> &[f32] {
        &self.size_jitter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Overwrite the morph destination. The cloud must hold `count` points.
    pub(crate) fn load_target(&mut self, cloud: &PointCloud) {
        self.target_position.copy_from_slice(cloud.points());
        self.generation += 1;
    }

    /// Make the morph destination the new rest shape.
    pub(crate) fn commit_target(&mut self) {
        self.base_position.copy_from_slice(&self.target_position);
        self.generation += 1;
    }
}
