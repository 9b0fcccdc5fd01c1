use serde::{Deserialize, Serialize};

use crate::error::{BunderError, BunderResult};
use crate::paths::{
  PathStyle, combine_with_style, validate_file_system_path, validate_url_reference,
};

/// Extension assumed when a bundle record does not declare one.
pub const DEFAULT_EXTENSION: &str = "js";

/// Raw bundle definition as authored in the bundles configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfig {
  /// Unique bundle name used as the lookup token.
  pub name: String,
  /// Extension shared by the source files and the output file.
  #[serde(default, alias = "fileExtension")]
  pub extension: Option<String>,
  /// Source files in render order.
  #[serde(default)]
  pub files: Vec<String>,
  /// Explicit output file name, derived from the name when absent.
  #[serde(default)]
  pub output_file_name: Option<String>,
  /// Sub directory below the extension's output directory.
  #[serde(default)]
  pub sub_path: Option<String>,
}

impl BundleConfig {
  /// Minimal definition with a name and its files.
  pub fn new<I, S>(name: impl Into<String>, files: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      name: name.into(),
      files: files.into_iter().map(Into::into).collect(),
      ..Self::default()
    }
  }

  /// Set the extension.
  pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
    self.extension = Some(extension.into());
    self
  }

  /// Set an explicit output file name.
  pub fn with_output_file_name(mut self, file_name: impl Into<String>) -> Self {
    self.output_file_name = Some(file_name.into());
    self
  }

  /// Set the output sub directory.
  pub fn with_sub_path(mut self, sub_path: impl Into<String>) -> Self {
    self.sub_path = Some(sub_path.into());
    self
  }

  /// Extension after trimming and applying [`DEFAULT_EXTENSION`].
  pub fn effective_extension(&self) -> String {
    non_blank(self.extension.as_deref()).unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
  }
}

/// An immutable, named group of files that render as one unit.
///
/// The output path, and the URL form it is served under, are computed once here and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
  name: String,
  file_extension: String,
  files: Vec<String>,
  output_file_name: String,
  sub_path: Option<String>,
  output_path: String,
  output_url: String,
}

impl Bundle {
  /// Build a bundle from its definition and the output directory for its extension.
  pub fn new(config: BundleConfig, output_directory: Option<&str>) -> BunderResult<Self> {
    let name = non_blank(Some(config.name.as_str())).ok_or_else(|| BunderError::missing("name"))?;
    let file_extension = config.effective_extension();
    let output_file_name = non_blank(config.output_file_name.as_deref())
      .unwrap_or_else(|| format!("{}.min.{}", name.replace(' ', "_"), file_extension));
    let sub_path = non_blank(config.sub_path.as_deref());

    let output_path = combine_with_style(
      PathStyle::FileSystem,
      &[
        output_directory.unwrap_or_default(),
        sub_path.as_deref().unwrap_or_default(),
        output_file_name.as_str(),
      ],
    )?;
    validate_file_system_path(&output_path)?;
    let output_url = combine_with_style(PathStyle::Url, &[output_path.as_str()])?;
    validate_url_reference(&output_url)?;

    Ok(Self {
      name,
      file_extension,
      files: config.files,
      output_file_name,
      sub_path,
      output_path,
      output_url,
    })
  }

  /// Unique, trimmed name.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Extension used to group output files by directory.
  pub fn file_extension(&self) -> &str {
    &self.file_extension
  }

  /// Source files in declared order.
  pub fn files(&self) -> &[String] {
    &self.files
  }

  /// File name of the combined output.
  pub fn output_file_name(&self) -> &str {
    &self.output_file_name
  }

  /// Optional sub directory of the output.
  pub fn sub_path(&self) -> Option<&str> {
    self.sub_path.as_deref()
  }

  /// Full path of the combined output file.
  pub fn output_path(&self) -> &str {
    &self.output_path
  }

  /// The output path with forward slashes, as rendered in bundled mode.
  pub fn output_url(&self) -> &str {
    &self.output_url
  }
}

fn non_blank(value: Option<&str>) -> Option<String> {
  value
    .map(str::trim)
    .filter(|value| !value.is_empty())
    .map(str::to_string)
}

#[cfg(test)]
mod tests {
  use std::path::MAIN_SEPARATOR;

  use super::*;

  #[test]
  fn derives_output_file_name_from_name() {
    let bundle = Bundle::new(
      BundleConfig::new("  site scripts ", ["a.js", "b.js"]),
      Some("/out"),
    )
    .unwrap();

    assert_eq!(bundle.name(), "site scripts");
    assert_eq!(bundle.file_extension(), DEFAULT_EXTENSION);
    assert_eq!(bundle.output_file_name(), "site_scripts.min.js");
    assert_eq!(bundle.files(), ["a.js", "b.js"]);
  }

  #[test]
  fn honours_explicit_output_file_name() {
    let bundle = Bundle::new(
      BundleConfig::new("my-bundle", ["one.js", "two.js"])
        .with_extension("js")
        .with_output_file_name("my-bundle_output.js"),
      Some("/my/output-directory"),
    )
    .unwrap();

    let sep = MAIN_SEPARATOR;
    assert_eq!(
      bundle.output_path(),
      format!("{sep}my{sep}output-directory{sep}my-bundle_output.js")
    );
  }

  #[test]
  fn includes_sub_path_and_trims_extension() {
    let bundle = Bundle::new(
      BundleConfig::new("theme", ["site.css"])
        .with_extension(" css ")
        .with_sub_path(" themes "),
      Some("/css/bundles"),
    )
    .unwrap();

    let sep = MAIN_SEPARATOR;
    assert_eq!(bundle.file_extension(), "css");
    assert_eq!(bundle.sub_path(), Some("themes"));
    assert_eq!(
      bundle.output_path(),
      format!("{sep}css{sep}bundles{sep}themes{sep}theme.min.css")
    );
  }

  #[test]
  fn blank_optional_fields_count_as_absent() {
    let bundle = Bundle::new(
      BundleConfig::new("empty", Vec::<String>::new())
        .with_extension("  ")
        .with_sub_path(""),
      None,
    )
    .unwrap();

    assert_eq!(bundle.file_extension(), DEFAULT_EXTENSION);
    assert_eq!(bundle.sub_path(), None);
    assert_eq!(bundle.output_path(), "empty.min.js");
    assert!(bundle.files().is_empty());
  }

  #[test]
  fn rejects_blank_names() {
    let err = Bundle::new(BundleConfig::new("   ", ["a.js"]), None).unwrap_err();
    assert_eq!(err.kind(), crate::ErrorKind::Argument);
  }

  #[test]
  fn rejects_output_names_that_cannot_exist_on_disk() {
    let err = Bundle::new(
      BundleConfig::new("site", ["a.js"]).with_output_file_name("site?.js"),
      Some("/out"),
    )
    .unwrap_err();
    assert_eq!(err.kind(), crate::ErrorKind::Format);
  }

  #[test]
  fn output_url_uses_forward_slashes() {
    let bundle = Bundle::new(
      BundleConfig::new("site", ["a.js"]).with_sub_path("v2"),
      Some(r"C:\out\js"),
    )
    .unwrap();

    assert_eq!(bundle.output_url(), "C:/out/js/v2/site.min.js");
  }

  #[test]
  fn rejects_output_paths_that_cannot_be_served() {
    for config in [
      BundleConfig::new("site", ["a.js"]).with_sub_path("my bundles"),
      BundleConfig::new("site", ["a.js"]).with_output_file_name("site 1.js"),
      BundleConfig::new("site", ["a.js"]).with_output_file_name("100%.js"),
    ] {
      let err = Bundle::new(config, Some("/out")).unwrap_err();
      assert_eq!(err.kind(), crate::ErrorKind::Format);
    }
  }

  #[test]
  fn deserialises_camel_case_records() {
    let config: BundleConfig = serde_json::from_str(
      r#"{"name": "site", "fileExtension": "css", "files": ["a.css"], "outputFileName": "s.css", "subPath": "v2"}"#,
    )
    .unwrap();

    assert_eq!(config.extension.as_deref(), Some("css"));
    assert_eq!(config.output_file_name.as_deref(), Some("s.css"));
    assert_eq!(config.sub_path.as_deref(), Some("v2"));
  }
}
