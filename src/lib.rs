//! Greedy rectangle packing with cell-level occupancy analysis.
//!
//! ```
//! use blockfit::{Block, Container, analyze, pack};
//!
//! let container = Container::new(10, 10)?;
//! let mut blocks = vec![Block::new(0, 5, 5)];
//!
//! let result = pack(container, &mut blocks)?;
//! let report = analyze(&result);
//! assert_eq!(report.cavities, 75);
//! assert_eq!(report.fullness, 0.25);
//! # Ok::<(), blockfit::BlockfitError>(())
//! ```

pub mod blocks;
pub mod cli;
pub mod config;
pub mod error;
pub mod occupancy;
pub mod output;
pub mod packing;
pub mod pipeline;

pub use cli::{CliArgs, Command};
pub use error::BlockfitError;
pub use occupancy::{OccupancyReport, analyze, count_cavities, fullness};
pub use packing::{
    Block, Container, GreedyPacker, Orientation, PlacedBlock, Placement, PlacementResult, Rect,
    pack,
};
pub use pipeline::{PackRun, run, sweep};
