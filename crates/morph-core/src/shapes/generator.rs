//! Point cloud generation for a given shape kind.
//!
//! Selects the per-point sampler for `kind`, draws its uniform samples from
//! the supplied RNG and packs the results into an immutable [`PointCloud`].

use glam::Vec3;
use rand::Rng;

use crate::error::{MorphError, Result};
use crate::shapes::kind::ShapeKind;
use crate::shapes::primitives::{self, Samples};

/// Ordered, immutable set of rest positions for one shape.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    points: Vec<Vec3>,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Tightly packed `[x0, y0, z0, x1, ...]`, `3 * len()` floats.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }
}

/// Generate `count` points for `kind` using the thread-local RNG.
pub fn generate(kind: ShapeKind, count: usize, radius: f32) -> Result<PointCloud> {
    generate_with_rng(kind, count, radius, &mut rand::thread_rng())
}

/// Generate `count` points for `kind`, drawing all randomness from `rng`.
///
/// * `count` -- number of points; zero yields an empty cloud.
/// * `radius` -- characteristic size; must be finite and positive.
pub fn generate_with_rng<R: Rng + ?Sized>(
    kind: ShapeKind,
    count: usize,
    radius: f32,
    rng: &mut R,
) -> Result<PointCloud> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MorphError::InvalidRadius(radius));
    }

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let u: Samples = [rng.gen(), rng.gen(), rng.gen(), rng.gen()];
        let f = i as f32 / count as f32;
        let p = match kind {
            ShapeKind::Sphere => primitives::sphere(radius, u),
            ShapeKind::Heart => primitives::heart(radius, u),
            ShapeKind::Flower => primitives::flower(radius, u),
            ShapeKind::Saturn => primitives::saturn(radius, u),
            ShapeKind::Spiral => primitives::spiral(radius, f, u),
            ShapeKind::Dna => primitives::dna(radius, f, i % 2 == 1, u),
        };
        points.push(p);
    }

    Ok(PointCloud { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_count_is_empty() {
        for kind in ShapeKind::ALL {
            let cloud = generate(kind, 0, 2.0).unwrap();
            assert!(cloud.is_empty());
            assert!(cloud.as_flat().is_empty());
        }
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(
            generate(ShapeKind::Sphere, 10, 0.0),
            Err(MorphError::InvalidRadius(0.0))
        );
        assert!(generate(ShapeKind::Heart, 10, -1.0).is_err());
        assert!(generate(ShapeKind::Dna, 10, f32::INFINITY).is_err());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_with_rng(ShapeKind::Flower, 64, 2.0, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_with_rng(ShapeKind::Flower, 64, 2.0, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_flat_layout() {
        let cloud = generate(ShapeKind::Spiral, 4, 2.0).unwrap();
        let flat = cloud.as_flat();
        assert_eq!(flat.len(), 12);
        for (i, p) in cloud.points().iter().enumerate() {
            assert_eq!(flat[i * 3], p.x);
            assert_eq!(flat[i * 3 + 1], p.y);
            assert_eq!(flat[i * 3 + 2], p.z);
        }
    }
}
