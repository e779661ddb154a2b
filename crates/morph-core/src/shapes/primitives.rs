//! Per-point samplers for the six catalog shapes.
//!
//! Every sampler is a pure function of the shape radius and a set of uniform
//! samples in `[0, 1)`. Index-driven shapes (spiral, DNA) additionally take the
//! normalised index `f = i / count`. Keeping the randomness outside makes the
//! sampling laws directly testable.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Uniform samples for one point. Each shape reads only what it needs.
pub type Samples = [f32; 4];

/// Share of Saturn points that land on the planet body rather than the ring.
pub const SATURN_BODY_FRACTION: f32 = 0.6;

/// Unit direction with uniform density over the sphere surface.
fn unit_direction(u_theta: f32, u_phi: f32) -> Vec3 {
    let theta = u_theta * TAU;
    let phi = (u_phi * 2.0 - 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// Solid ball with uniform volume density (cube-root radial law).
pub fn sphere(radius: f32, u: Samples) -> Vec3 {
    unit_direction(u[0], u[1]) * (u[2].cbrt() * radius)
}

/// Parametric heart curve in the x-y plane, extruded along z.
pub fn heart(radius: f32, u: Samples) -> Vec3 {
    let t = u[0] * TAU;
    let hx = 16.0 * t.sin().powi(3);
    let hy = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    let s = radius * 0.15;
    Vec3::new(hx * s, hy * s, (u[1] - 0.5) * radius)
}

/// Five-petal rose curve thickened into bands.
pub fn flower(radius: f32, u: Samples) -> Vec3 {
    let theta = u[0] * TAU;
    let r = (5.0 * theta).cos() * radius;
    Vec3::new(
        r * theta.cos() + (u[2] - 0.5) * 0.2,
        r * theta.sin() + (u[3] - 0.5) * 0.2,
        (u[1] - 0.5) * radius * 0.5,
    )
}

/// Planet shell of radius `0.8 * radius` plus a flat ring in the x-z plane.
pub fn saturn(radius: f32, u: Samples) -> Vec3 {
    if u[0] < SATURN_BODY_FRACTION {
        unit_direction(u[1], u[2]) * (radius * 0.8)
    } else {
        let angle = u[1] * TAU;
        let r = radius * (1.2 + u[2] * 0.8);
        Vec3::new(r * angle.cos(), (u[3] - 0.5) * 0.2, r * angle.sin())
    }
}

/// Archimedean spiral arm, ten turns across the index range.
///
/// `f` is the normalised index; radius grows linearly with it so point `0`
/// sits at the centre.
pub fn spiral(radius: f32, f: f32, u: Samples) -> Vec3 {
    let t = f * 20.0 * PI;
    let r = f * radius;
    Vec3::new(r * t.cos(), r * t.sin(), (u[0] - 0.5) * 2.0)
}

/// Helix parameter for normalised index `f`: two full turns each way.
pub fn dna_parameter(f: f32) -> f32 {
    (f * 2.0 - 1.0) * 4.0 * PI
}

/// Double helix along z. Odd indices sit on the second strand, half a turn
/// out of phase with the first.
pub fn dna(radius: f32, f: f32, odd: bool, u: Samples) -> Vec3 {
    let t = dna_parameter(f);
    let phase = if odd { PI } else { 0.0 };
    let r = radius * 0.8;
    Vec3::new(
        r * (t + phase).cos() + (u[0] - 0.5) * 0.3,
        r * (t + phase).sin() + (u[1] - 0.5) * 0.3,
        t * radius * 0.25 + (u[2] - 0.5) * 0.3,
    )
}
