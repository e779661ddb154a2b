/// Smallest distance used when normalising a direction vector.
pub const DISTANCE_EPSILON: f32 = 1.0e-4;

/// Smooth interpolation - same curve as GLSL smoothstep
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Eased morph blend: `p^2 (3 - 2p)` on `p` clamped to [0, 1].
#[inline]
pub fn ease(p: f32) -> f32 {
    smoothstep(0.0, 1.0, p)
}

/// Scalar `mix(a, b, t)`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
