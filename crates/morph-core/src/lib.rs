//! Procedural point-cloud shapes, timed morphs between them, and a
//! hand-driven force field, evaluated per particle once per frame.

pub mod camera;
pub mod config;
pub mod error;
pub mod forces;
pub mod hand;
pub mod math;
pub mod morph;
pub mod particle;
pub mod shapes;
pub mod system;
pub mod transform;

pub use config::{KeyCooldown, MorphConfig};
pub use error::{MorphError, Result};
pub use hand::{Gesture, HandMailbox, HandState};
pub use system::{FrameSnapshot, MorphSystem};
