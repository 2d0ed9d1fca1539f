use std::path::Path;

use anyhow::{Context, Result};

use super::types::BlockfitConfig;

/// Write `config` as pretty-printed JSON.
pub fn save_config(config: &BlockfitConfig, path: &Path) -> Result<()> {
    let content =
        serde_json::to_string_pretty(config).context("failed to serialize config to JSON")?;

    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))
}

/// Express `path` relative to `base` for storing in a config file.
///
/// Paths outside `base` are kept as they are.
pub fn make_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
