//! Helpers for joining and validating asset paths.
//!
//! Combination and validation live in separate submodules so that the separator rules and the
//! addressing-scheme checks can be tested independently. Both the bundle records and the path
//! formatter build on them.

mod combine;
mod validate;

pub use combine::{PathStyle, combine, combine_with_style, is_file_system_path};
pub use validate::{validate_file_system_path, validate_url_reference};
