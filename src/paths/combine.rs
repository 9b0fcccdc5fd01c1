use std::path::MAIN_SEPARATOR;

use crate::error::{BunderError, BunderResult};

const URL_SEPARATOR: char = '/';
const WINDOWS_SEPARATOR: char = '\\';

/// Addressing style used when joining path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// Physical location on disk, joined with the platform separator.
    FileSystem,
    /// Web address, always joined with forward slashes.
    Url,
}

impl PathStyle {
    /// Canonical separator emitted for this style.
    pub fn separator(self) -> char {
        match self {
            Self::FileSystem => MAIN_SEPARATOR,
            Self::Url => URL_SEPARATOR,
        }
    }

    /// Pick the style implied by a set of segments.
    pub fn detect<S: AsRef<str>>(segments: &[S]) -> Self {
        if segments
            .iter()
            .any(|segment| is_file_system_path(segment.as_ref()))
        {
            Self::FileSystem
        } else {
            Self::Url
        }
    }
}

/// Returns `true` when the value carries a filesystem-only separator.
pub fn is_file_system_path(value: &str) -> bool {
    value.contains(WINDOWS_SEPARATOR)
}

/// Join segments, detecting the addressing style from their content.
pub fn combine<S: AsRef<str>>(segments: &[S]) -> BunderResult<String> {
    combine_with_style(PathStyle::detect(segments), segments)
}

/// Join segments using a style already known by the caller.
///
/// Empty segments are skipped and a segment that starts with a separator discards everything
/// joined before it. Every separator in the result is rewritten to the style's canonical one.
pub fn combine_with_style<S: AsRef<str>>(style: PathStyle, segments: &[S]) -> BunderResult<String> {
    if segments.is_empty() {
        return Err(BunderError::missing("segments"));
    }

    let mut joined = String::new();
    for segment in segments.iter().map(AsRef::as_ref) {
        if segment.is_empty() {
            continue;
        }

        if is_rooted(segment) || joined.is_empty() {
            joined.clear();
        } else if !joined.ends_with(is_separator) {
            joined.push(style.separator());
        }
        joined.push_str(segment);
    }

    let separator = style.separator();
    Ok(joined
        .chars()
        .map(|c| if is_separator(c) { separator } else { c })
        .collect())
}

fn is_separator(c: char) -> bool {
    c == URL_SEPARATOR || c == WINDOWS_SEPARATOR
}

fn is_rooted(segment: &str) -> bool {
    segment.starts_with(is_separator)
}
