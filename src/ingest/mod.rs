//! Dataset loading.
//!
//! Submodules:
//! - `source`: HTTP fetch, offline file replay, payload validation.

pub mod source;

pub use source::{build_client, fetch_dataset, load_dataset_file, parse_dataset};
