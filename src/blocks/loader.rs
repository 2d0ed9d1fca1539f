use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::BlockfitError;
use crate::packing::Block;

const BLOCK_FILE_EXTENSION: &str = "json";

/// One record of a block file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSize {
    pub width: u32,
    pub height: u32,
}

/// Load blocks from input paths (files or directories).
///
/// Each file holds a JSON array of `{ "width": .., "height": .. }` records.
/// Directories are searched recursively for `.json` files in name order.
/// Blocks are numbered in the order they are read.
pub fn load_blocks(inputs: &[impl AsRef<Path>]) -> Result<Vec<Block>> {
    let paths = collect_block_files(inputs)?;

    let mut blocks = Vec::new();
    for path in &paths {
        let content = std::fs::read_to_string(path).map_err(|e| BlockfitError::BlockFileRead {
            path: path.clone(),
            source: e,
        })?;
        let sizes = parse_blocks(&content, path)?;
        let offset = blocks.len();
        blocks.extend(
            sizes
                .into_iter()
                .enumerate()
                .map(|(i, size)| Block::new(offset + i, size.width, size.height)),
        );
    }

    if blocks.is_empty() {
        return Err(BlockfitError::NoBlocks.into());
    }

    info!("Loaded {} blocks from {} file(s)", blocks.len(), paths.len());

    Ok(blocks)
}

/// Parse the contents of a block file
pub fn parse_blocks(content: &str, path: &Path) -> Result<Vec<BlockSize>, BlockfitError> {
    serde_json::from_str(content).map_err(|e| BlockfitError::BlockFileParse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn collect_block_files(inputs: &[impl AsRef<Path>]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        let path = input.as_ref();
        if !path.exists() {
            return Err(BlockfitError::InputNotFound(path.to_path_buf()).into());
        }

        if path.is_file() {
            paths.push(path.to_path_buf());
        } else if path.is_dir() {
            let mut found = Vec::new();
            collect_from_directory(path, &mut found)?;
            found.sort();
            paths.extend(found);
        }
    }

    Ok(paths)
}

fn collect_from_directory(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();

        if path.is_file() && is_block_file(&path) {
            paths.push(path);
        } else if path.is_dir() {
            collect_from_directory(&path, paths)?;
        }
    }

    Ok(())
}

fn is_block_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(BLOCK_FILE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("blockfit-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_blocks() {
        let sizes = parse_blocks(
            r#"[{"width": 50, "height": 20}, {"width": 7, "height": 7}]"#,
            Path::new("blocks.json"),
        )
        .unwrap();

        assert_eq!(
            sizes,
            vec![
                BlockSize {
                    width: 50,
                    height: 20
                },
                BlockSize {
                    width: 7,
                    height: 7
                },
            ]
        );
    }

    #[test]
    fn test_parse_blocks_rejects_bad_json() {
        let err = parse_blocks(r#"[{"width": 5}]"#, Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, BlockfitError::BlockFileParse { .. }));
    }

    #[test]
    fn test_is_block_file() {
        assert!(is_block_file(Path::new("blocks.json")));
        assert!(is_block_file(Path::new("dir/BLOCKS.JSON")));
        assert!(!is_block_file(Path::new("blocks.txt")));
        assert!(!is_block_file(Path::new("blocks")));
    }

    #[test]
    fn test_load_blocks_numbers_across_files() {
        let dir = scratch_dir("load");
        std::fs::write(dir.join("a.json"), r#"[{"width": 1, "height": 2}]"#).unwrap();
        std::fs::write(
            dir.join("b.json"),
            r#"[{"width": 3, "height": 4}, {"width": 5, "height": 6}]"#,
        )
        .unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let blocks = load_blocks(&[&dir]).unwrap();
        let summary: Vec<(usize, u32, u32)> =
            blocks.iter().map(|b| (b.id, b.width, b.height)).collect();
        assert_eq!(summary, vec![(0, 1, 2), (1, 3, 4), (2, 5, 6)]);
        assert!(blocks.iter().all(|b| !b.is_placed()));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_blocks_missing_input() {
        let err = load_blocks(&[Path::new("/definitely/not/here.json")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BlockfitError>(),
            Some(BlockfitError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_load_blocks_empty_list() {
        let dir = scratch_dir("empty");
        let file = dir.join("none.json");
        std::fs::write(&file, "[]").unwrap();

        let err = load_blocks(&[&file]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BlockfitError>(),
            Some(BlockfitError::NoBlocks)
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
