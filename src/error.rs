use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockfitError {
    #[error("Container must have positive dimensions, got {width}x{height}")]
    InvalidContainer { width: u32, height: u32 },

    #[error("Block #{index} must have positive dimensions, got {width}x{height}")]
    InvalidBlock {
        index: usize,
        width: u32,
        height: u32,
    },

    #[error("No blocks found in input")]
    NoBlocks,

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read block file '{path}': {source}")]
    BlockFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse block file '{path}': {source}")]
    BlockFileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
