//! Descriptor assembly and JSON output.
//!
//! Merges enumerated codes with their resolved size schemas into flat
//! records and renders the full list as one JSON document.

mod descriptor;
mod json;

pub use descriptor::{build_descriptors, normalize, CategoryTag, CodecDescriptor};
pub use json::{render, write_to};
