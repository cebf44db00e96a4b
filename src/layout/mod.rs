//! Box layout engine.
//!
//! A layout is a tree of [`LayoutBox`]es. Internal boxes split their area
//! along one axis; leaves name the panel that receives the resulting
//! rectangle. Partitioning is a pure function recomputed every frame, so a
//! resize only needs a new outer rectangle.

mod bounds;
mod partition;
pub mod presets;

pub use bounds::Bounds;
pub use partition::{distribute, partition, Axis, LayoutBox};
