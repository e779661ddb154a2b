//! Per-particle frame transform.
//!
//! Every particle runs the same short, allocation-free pipeline each frame:
//! morph blend, idle motion, interaction displacement, color and point size.
//! A particle's output depends only on its own inputs and the frame
//! uniforms, so the batch driver is free to split the work across threads.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use glam::{Mat4, Vec3};

use crate::forces::interaction::ForceField;
use crate::math::DISTANCE_EPSILON;
use crate::particle::ParticleBuffer;

/// Closest view-space depth used for size attenuation.
pub const MIN_VIEW_DEPTH: f32 = 0.1;

/// Values shared by every particle for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameUniforms {
    /// Seconds since start.
    pub time: f32,
    /// Eased morph blend in [0, 1].
    pub eased: f32,
    pub field: ForceField,
    pub interaction_radius: f32,
    pub noise_frequency: f32,
    pub noise_amplitude: f32,
    pub color_from: Vec3,
    pub color_to: Vec3,
    pub point_size: f32,
    pub view: Mat4,
}

/// GPU-compatible vertex: 32 bytes, position + size, color + padding
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3], // 12 bytes
    pub size: f32,          //  4 bytes
    pub color: [f32; 3],    // 12 bytes
    pub _pad: f32,          //  4 bytes
}

/// Deterministic drift from elapsed time and the particle's own position.
///
/// Components are updated in place, so `z` already sees the shifted `x`.
#[inline]
pub fn idle_motion(mut pos: Vec3, time: f32, frequency: f32, amplitude: f32) -> Vec3 {
    let phase = time * frequency;
    pos.x += (phase + pos.y).sin() * amplitude;
    pos.y += (phase + pos.z).cos() * amplitude;
    pos.z += (phase + pos.x).sin() * amplitude;
    pos
}

/// Finite-range push (positive strength) or pull (negative strength).
///
/// Magnitude grows linearly with penetration into the interaction sphere
/// and is zero outside it or when the field is inactive.
#[inline]
pub fn interaction_offset(pos: Vec3, field: &ForceField, radius: f32) -> Vec3 {
    if !field.active {
        return Vec3::ZERO;
    }
    let offset = pos - field.anchor;
    let dist = offset.length();
    if dist >= radius {
        return Vec3::ZERO;
    }
    offset / dist.max(DISTANCE_EPSILON) * ((radius - dist) * field.strength)
}

/// Steps 1-3: blended, drifting, displaced position.
#[inline]
pub fn displace(base: Vec3, target: Vec3, u: &FrameUniforms) -> Vec3 {
    let pos = base.lerp(target, u.eased);
    let pos = idle_motion(pos, u.time, u.noise_frequency, u.noise_amplitude);
    pos + interaction_offset(pos, &u.field, u.interaction_radius)
}

/// Morph color plus a light depth tint.
#[inline]
pub fn particle_color(pos: Vec3, u: &FrameUniforms) -> Vec3 {
    let depth = (pos.z + 2.0) * 0.2;
    u.color_from.lerp(u.color_to, u.eased) + Vec3::splat(depth * 0.1)
}

/// Perspective-attenuated point size.
#[inline]
pub fn point_size(pos: Vec3, size_jitter: f32, u: &FrameUniforms) -> f32 {
    let depth = (-u.view.transform_point3(pos).z).max(MIN_VIEW_DEPTH);
    u.point_size * (10.0 / depth) * (1.0 + size_jitter)
}

/// Full per-particle transform.
#[inline]
pub fn transform_particle(base: Vec3, target: Vec3, size_jitter: f32, u: &FrameUniforms) -> GpuVertex {
    let pos = displace(base, target, u);
    GpuVertex {
        position: pos.to_array(),
        size: point_size(pos, size_jitter, u),
        color: particle_color(pos, u).to_array(),
        _pad: 0.0,
    }
}

/// Transform every particle of `buffer` into `out`.
///
/// `out` is expected to hold `buffer.count()` vertices; extra entries are
/// left untouched.
pub fn transform_all(buffer: &ParticleBuffer, u: &FrameUniforms, out: &mut [GpuVertex]) {
    let base = buffer.base_position();
    let target = buffer.target_position();
    let jitter = buffer.size_jitter();

    #[cfg(feature = "parallel")]
    {
        out.par_iter_mut()
            .zip(base.par_iter())
            .zip(target.par_iter())
            .zip(jitter.par_iter())
            .for_each(|(((v, &b), &t), &j)| *v = transform_particle(b, t, j, u));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (((v, &b), &t), &j) in out.iter_mut().zip(base).zip(target).zip(jitter) {
            *v = transform_particle(b, t, j, u);
        }
    }
}
