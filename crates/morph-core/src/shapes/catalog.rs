use rand::Rng;

use crate::error::{MorphError, Result};
use crate::shapes::generator::{generate_with_rng, PointCloud};
use crate::shapes::kind::ShapeKind;

/// One pre-generated cloud per shape kind, built once at startup.
///
/// Never mutated after construction; share it behind an `Arc`.
#[derive(Debug)]
pub struct ShapeCatalog {
    count: usize,
    radius: f32,
    clouds: Vec<PointCloud>,
}

impl ShapeCatalog {
    pub fn build(count: usize, radius: f32) -> Result<Self> {
        Self::build_with_rng(count, radius, &mut rand::thread_rng())
    }

    pub fn build_with_rng<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Result<Self> {
        if count == 0 {
            return Err(MorphError::EmptyParticleSet);
        }
        let clouds = ShapeKind::ALL
            .iter()
            .map(|&kind| generate_with_rng(kind, count, radius, &mut *rng))
            .collect::<Result<Vec<_>>>()?;
        log::debug!(
            "built shape catalog: {} shapes x {} points, radius {}",
            clouds.len(),
            count,
            radius
        );
        Ok(Self { count, radius, clouds })
    }

    /// Points per cloud.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn cloud(&self, kind: ShapeKind) -> &PointCloud {
        &self.clouds[kind.index()]
    }
}
