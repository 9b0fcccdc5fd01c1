use std::path::PathBuf;

use anyhow::{Context, Result};
use bunder::{
  AssetResolution, AssetResolutionContext, BunderBuilder, BunderSettings, split_tokens,
};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Resolve asset paths and bundle names into renderable references.
#[derive(Debug, Parser)]
#[command(name = "bunder", version, about)]
struct Args {
  /// Content root holding the settings and bundle definition files.
  #[arg(long, default_value = ".")]
  root: PathBuf,

  /// Settings file; defaults to `bunder.json` under the content root when present.
  #[arg(long)]
  settings: Option<PathBuf>,

  /// Render bundles as their combined output file.
  #[arg(long, conflicts_with = "unbundled")]
  bundled: bool,

  /// Render bundles as their individual source files.
  #[arg(long)]
  unbundled: bool,

  /// Append the version marker to every path.
  #[arg(long, conflicts_with = "no_versioning")]
  versioning: bool,

  /// Leave paths unversioned.
  #[arg(long)]
  no_versioning: bool,

  /// Print assets as a JSON array instead of one value per line.
  #[arg(long)]
  json: bool,

  /// Paths or bundle names; each may hold several separated by `|`, `;` or `,`.
  #[arg(required = true)]
  tokens: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssetView<'a> {
  value: &'a str,
  is_static: bool,
  bundle: Option<&'a str>,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let settings = match &args.settings {
    Some(path) => BunderSettings::from_path(path)
      .with_context(|| format!("failed to load settings from {}", path.display()))?,
    None => BunderSettings::discover(&args.root),
  };

  let context = AssetResolutionContext::with_overrides(
    args
      .tokens
      .iter()
      .flat_map(|token| split_tokens(Some(token.as_str()))),
    flag(args.bundled, args.unbundled),
    flag(args.versioning, args.no_versioning),
    &settings,
  );

  let resolver = BunderBuilder::new(settings)
    .content_root(&args.root)
    .build()
    .context("failed to prepare asset resolver")?;
  let assets = resolver
    .resolve(&context)
    .context("failed to resolve assets")?;

  if args.json {
    let views: Vec<AssetView<'_>> = assets
      .iter()
      .map(|asset| AssetView {
        value: asset.value(),
        is_static: asset.is_static(),
        bundle: asset.bundle().map(|bundle| bundle.name()),
      })
      .collect();
    println!("{}", serde_json::to_string_pretty(&views)?);
  } else {
    for asset in &assets {
      println!("{asset}");
    }
  }

  Ok(())
}

fn flag(enable: bool, disable: bool) -> Option<bool> {
  match (enable, disable) {
    (true, _) => Some(true),
    (_, true) => Some(false),
    _ => None,
  }
}
