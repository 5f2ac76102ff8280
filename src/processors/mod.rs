//! Region post-processing: geometry primitives, consolidation, expansion.

pub mod consolidate;
pub mod expand;
pub mod geometry;

pub use consolidate::consolidate_regions;
pub use expand::expand_regions;
pub use geometry::BoundingBox;
