use glam::Vec3;
use morph_core::camera::Viewport;
use morph_core::forces::interaction::{
    gesture_strength, hand_to_plane, ForceField, InteractionForceModel, DEFAULT_STRENGTH,
    FIST_STRENGTH, OPEN_STRENGTH,
};
use morph_core::transform::{displace, interaction_offset, FrameUniforms};
use morph_core::{Gesture, HandState};

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

const VIEWPORT: Viewport = Viewport {
    width: 20.0,
    height: 12.0,
};

/// Drive the model with a constant hand for `frames` frames and return the
/// strength after every frame.
fn strength_trace(gesture: Gesture, frames: usize) -> Vec<f32> {
    let mut model = InteractionForceModel::new(0.1);
    let hand = HandState::present(gesture, 0.5, 0.5);
    (0..frames)
        .map(|_| model.update(&hand, VIEWPORT).strength)
        .collect()
}

fn uniforms(field: ForceField) -> FrameUniforms {
    FrameUniforms {
        time: 0.0,
        eased: 0.0,
        field,
        interaction_radius: 2.0,
        noise_frequency: 0.5,
        noise_amplitude: 0.0,
        color_from: Vec3::ONE,
        color_to: Vec3::ONE,
        point_size: 5.0,
        view: glam::Mat4::IDENTITY,
    }
}

// ---------------------------------------------------------------------------
// 1. Gesture to strength mapping
// ---------------------------------------------------------------------------

#[test]
fn test_gesture_strength_table() {
    assert_eq!(gesture_strength(Gesture::Open), OPEN_STRENGTH);
    assert_eq!(gesture_strength(Gesture::Fist), FIST_STRENGTH);
    assert_eq!(gesture_strength(Gesture::Pinch), DEFAULT_STRENGTH);
    assert_eq!(gesture_strength(Gesture::None), DEFAULT_STRENGTH);
    assert_eq!(OPEN_STRENGTH, 4.0);
    assert_eq!(FIST_STRENGTH, -4.0);
}

// ---------------------------------------------------------------------------
// 2. Strength converges monotonically without overshoot
// ---------------------------------------------------------------------------

#[test]
fn test_fist_converges_to_attraction() {
    let trace = strength_trace(Gesture::Fist, 200);
    let mut prev = DEFAULT_STRENGTH;
    for (i, &s) in trace.iter().enumerate() {
        assert!(s <= prev, "frame {}: {} rose above {}", i, s, prev);
        assert!(s >= FIST_STRENGTH, "frame {}: {} overshot -4", i, s);
        prev = s;
    }
    assert!((trace[199] - FIST_STRENGTH).abs() < 1e-3, "final {}", trace[199]);
}

#[test]
fn test_open_converges_to_repulsion() {
    let trace = strength_trace(Gesture::Open, 200);
    let mut prev = DEFAULT_STRENGTH;
    for (i, &s) in trace.iter().enumerate() {
        assert!(s >= prev, "frame {}: {} fell below {}", i, s, prev);
        assert!(s <= OPEN_STRENGTH, "frame {}: {} overshot 4", i, s);
        prev = s;
    }
    assert!((trace[199] - OPEN_STRENGTH).abs() < 1e-3, "final {}", trace[199]);
}

#[test]
fn test_first_frame_moves_a_tenth_of_the_gap() {
    let trace = strength_trace(Gesture::Fist, 1);
    // 2.0 + (-4.0 - 2.0) * 0.1
    assert!((trace[0] - 1.4).abs() < 1e-6, "got {}", trace[0]);
}

// ---------------------------------------------------------------------------
// 3. Anchor mapping and smoothing
// ---------------------------------------------------------------------------

#[test]
fn test_hand_to_plane_mapping() {
    let centre = hand_to_plane(&HandState::present(Gesture::None, 0.5, 0.5), VIEWPORT);
    assert_eq!(centre, Vec3::ZERO);

    let top_left = hand_to_plane(&HandState::present(Gesture::None, 0.0, 0.0), VIEWPORT);
    assert_eq!(top_left, Vec3::new(-10.0, 6.0, 0.0));

    let bottom_right = hand_to_plane(&HandState::present(Gesture::None, 1.0, 1.0), VIEWPORT);
    assert_eq!(bottom_right, Vec3::new(10.0, -6.0, 0.0));
}

#[test]
fn test_anchor_approaches_hand_exponentially() {
    let mut model = InteractionForceModel::new(0.1);
    let hand = HandState::present(Gesture::Open, 1.0, 0.5);
    let target = hand_to_plane(&hand, VIEWPORT);

    let mut prev_gap = target.distance(model.anchor());
    for _ in 0..60 {
        let field = model.update(&hand, VIEWPORT);
        let gap = target.distance(field.anchor);
        assert!(gap < prev_gap, "anchor should close in every frame");
        assert!((gap - prev_gap * 0.9).abs() < 1e-3, "gap {} vs {}", gap, prev_gap * 0.9);
        prev_gap = gap;
    }
}

#[test]
fn test_losing_the_hand_deactivates_without_reset() {
    let mut model = InteractionForceModel::new(0.1);
    let hand = HandState::present(Gesture::Fist, 0.2, 0.8);
    for _ in 0..10 {
        model.update(&hand, VIEWPORT);
    }
    let before = (model.anchor(), model.strength());

    let field = model.update(&HandState::absent(), VIEWPORT);
    assert!(!field.active);
    assert_eq!((model.anchor(), model.strength()), before);

    let field = model.update(&hand, VIEWPORT);
    assert!(field.active);
}

// ---------------------------------------------------------------------------
// 4. Effect on particles
// ---------------------------------------------------------------------------

#[test]
fn test_repel_pushes_particle_out_of_sphere() {
    let field = ForceField {
        anchor: Vec3::ZERO,
        strength: 4.0,
        active: true,
    };
    let p = displace(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0), &uniforms(field));
    // 1.0 + (2.0 - 1.0) * 4.0
    assert!((p - Vec3::new(0.0, 5.0, 0.0)).length() < 1e-5, "{:?}", p);
}

#[test]
fn test_attract_pulls_particle_through_anchor() {
    let field = ForceField {
        anchor: Vec3::ZERO,
        strength: -4.0,
        active: true,
    };
    let off = interaction_offset(Vec3::new(1.5, 0.0, 0.0), &field, 2.0);
    assert!((off - Vec3::new(-2.0, 0.0, 0.0)).length() < 1e-5, "{:?}", off);
}

#[test]
fn test_inactive_field_leaves_particles_alone() {
    let field = ForceField {
        anchor: Vec3::new(0.1, 0.1, 0.0),
        strength: 4.0,
        active: false,
    };
    let base = Vec3::new(0.3, -0.2, 0.4);
    assert_eq!(displace(base, base, &uniforms(field)), base);
}

#[test]
fn test_boundary_of_interaction_sphere_is_continuous() {
    let field = ForceField {
        anchor: Vec3::ZERO,
        strength: 4.0,
        active: true,
    };
    let just_inside = interaction_offset(Vec3::new(1.9999, 0.0, 0.0), &field, 2.0);
    let on_edge = interaction_offset(Vec3::new(2.0, 0.0, 0.0), &field, 2.0);
    assert!(just_inside.length() < 1e-3);
    assert_eq!(on_edge, Vec3::ZERO);
}
