/// Procedural point clouds for the six catalog shapes.
///
/// Contains the per-point samplers, the generator that turns them into
/// fixed-size clouds, and the catalog that pre-computes all six at startup.
pub mod kind;
pub mod primitives;
pub mod generator;
pub mod catalog;

pub use catalog::ShapeCatalog;
pub use generator::{generate, generate_with_rng, PointCloud};
pub use kind::{Palette, ShapeKind};
