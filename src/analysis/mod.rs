//! Derived ranges for the heat map.
//!
//! Only the linear min/max scans the scales need live here. Scale math is in
//! `scale`, drawing in `render`.
//!
//! Submodules:
//! - `extent`: variance and year extents, plus the `DatasetSummary` built from them.

pub mod extent;

pub use extent::{DatasetSummary, variance_extent, year_extent};
