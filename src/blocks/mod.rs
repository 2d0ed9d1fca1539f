mod loader;

pub use loader::{BlockSize, load_blocks, parse_blocks};
