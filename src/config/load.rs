use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::BlockfitConfig;

/// A parsed config file together with the directory it was read from,
/// which anchors every relative path inside it.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: BlockfitConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: BlockfitConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve input patterns to block file paths.
    ///
    /// Plain paths and glob patterns are both taken relative to the
    /// directory holding the config file.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>> {
        let mut results = Vec::new();

        for pattern in &self.config.input {
            let joined = self.config_dir.join(pattern);
            if !is_glob_pattern(pattern) {
                results.push(joined);
                continue;
            }

            let matches = glob::glob(&joined.to_string_lossy())
                .with_context(|| format!("invalid glob pattern: {}", pattern))?;
            for entry in matches {
                let path = entry.with_context(|| format!("unreadable glob match for {}", pattern))?;
                results.push(path);
            }
        }

        Ok(results)
    }

    /// Resolve the preview path relative to the config file directory.
    pub fn resolve_preview(&self) -> Option<PathBuf> {
        self.config
            .preview
            .as_ref()
            .map(|preview| self.config_dir.join(preview))
    }
}

/// Check if a pattern contains glob characters.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}
