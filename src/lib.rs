//! Heat map of global monthly land-surface temperature variance.
//!
//! Fetches the dataset once, derives the ranges, builds the scales and
//! writes an SVG chart (optionally wrapped in an HTML page with hover
//! tooltips).

pub mod analysis;
pub mod cli;
pub mod config;
pub mod format;
pub mod ingest;
pub mod legend;
pub mod logging;
pub mod model;
pub mod render;
pub mod scale;
pub mod tooltip;
