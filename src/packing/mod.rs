mod block;
mod greedy;
mod rect;

pub use block::{Block, Container, Orientation, PlacedBlock, Placement, PlacementResult};
pub use greedy::{GreedyPacker, pack};
pub use rect::Rect;
