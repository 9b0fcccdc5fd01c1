//! Bundle records and the immutable registry used to look them up by name.

mod lookup;
mod record;

pub use lookup::{BundleLookup, BundleRegistry};
pub use record::{Bundle, BundleConfig, DEFAULT_EXTENSION};
