use serde::{Deserialize, Serialize};

/// Blockfit configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockfitConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Block file paths or glob patterns
    pub input: Vec<String>,
    /// Container width in cells
    pub container_width: u32,
    /// Container height in cells
    pub container_height: u32,
    /// Where to write a PNG preview of the packing (optional)
    pub preview: Option<String>,
    /// Seed for preview colors
    pub seed: u64,
    /// Container widths to re-pack for with `sweep`
    pub sweep_widths: Vec<u32>,
}

impl Default for BlockfitConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: Vec::new(),
            container_width: 764,
            container_height: 764,
            preview: None,
            seed: 0,
            sweep_widths: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: BlockfitConfig =
            serde_json::from_str(r#"{ "input": ["blocks.json"], "container_width": 100 }"#)
                .unwrap();

        assert_eq!(config.version, 1);
        assert_eq!(config.input, vec!["blocks.json".to_string()]);
        assert_eq!(config.container_width, 100);
        assert_eq!(config.container_height, 764);
        assert_eq!(config.preview, None);
        assert!(config.sweep_widths.is_empty());
    }
}
