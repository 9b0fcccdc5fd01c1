#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset;
pub mod builder;
pub mod bundle;
pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod paths;
pub mod resolver;

pub use asset::Asset;
pub use builder::BunderBuilder;
pub use bundle::{Bundle, BundleConfig, BundleLookup, BundleRegistry};
pub use cache::{EmptyCache, ResolutionCache, ResolutionMemoryCache};
pub use config::{BunderSettings, CacheSettings};
pub use error::{BunderError, BunderResult, ErrorKind};
pub use format::{PathFormatter, QueryStringVersioning, UrlPathFormatter, VersioningFormatter};
pub use resolver::{AssetResolution, AssetResolutionContext, AssetResolver, split_tokens};
