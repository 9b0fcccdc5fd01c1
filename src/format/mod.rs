//! Turning raw asset paths into renderable, optionally versioned references.

mod formatter;
mod versioning;

pub use formatter::{PathFormatter, UrlPathFormatter};
pub use versioning::{QueryStringVersioning, VersioningFormatter};
