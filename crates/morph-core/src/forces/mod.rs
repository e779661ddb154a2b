/// Per-frame forces acting on the particle transform.
pub mod interaction;
