use log::{debug, trace};

use super::{Block, Container, Orientation, Placement, PlacedBlock, PlacementResult, Rect};
use crate::error::BlockfitError;

/// Greedy largest-first packer.
///
/// Blocks are sorted by descending area and each one is dropped at the first
/// free top-left position found by a row-major scan, trying the given
/// orientation first and the rotated one second. Blocks that fit nowhere are
/// skipped.
#[derive(Debug, Clone, Copy)]
pub struct GreedyPacker {
    container: Container,
}

impl GreedyPacker {
    pub fn new(container: Container) -> Self {
        Self { container }
    }

    pub fn container(&self) -> Container {
        self.container
    }

    /// Pack `blocks` into the container.
    ///
    /// The packer is the only writer of block placements during the run. Any
    /// placement left from an earlier run is cleared first, and `blocks` is
    /// reordered by descending area (stable for equal areas) as a side effect.
    pub fn pack(&self, blocks: &mut [Block]) -> Result<PlacementResult, BlockfitError> {
        for (index, block) in blocks.iter().enumerate() {
            if block.width == 0 || block.height == 0 {
                return Err(BlockfitError::InvalidBlock {
                    index,
                    width: block.width,
                    height: block.height,
                });
            }
        }

        blocks.iter_mut().for_each(Block::reset);
        blocks.sort_by(|a, b| b.area().cmp(&a.area()));

        trace!(
            "Packing {} blocks into {}x{}",
            blocks.len(),
            self.container.width(),
            self.container.height()
        );

        let mut placed: Vec<PlacedBlock> = Vec::new();

        for block in blocks.iter_mut() {
            match self.find_position(block, &placed) {
                Some(placement) => {
                    let (width, height) = placement.orientation.apply(block.width, block.height);
                    trace!(
                        "Block #{} ({}x{}) placed at ({}, {}) {:?}",
                        block.id,
                        block.width,
                        block.height,
                        placement.x,
                        placement.y,
                        placement.orientation
                    );
                    block.placement = Some(placement);
                    placed.push(PlacedBlock {
                        id: block.id,
                        x: placement.x,
                        y: placement.y,
                        width,
                        height,
                        orientation: placement.orientation,
                    });
                }
                None => {
                    debug!(
                        "Block #{} ({}x{}) does not fit, skipping",
                        block.id, block.width, block.height
                    );
                }
            }
        }

        Ok(PlacementResult {
            container: self.container,
            placed,
        })
    }

    fn find_position(&self, block: &Block, placed: &[PlacedBlock]) -> Option<Placement> {
        Orientation::ALL.into_iter().find_map(|orientation| {
            let (width, height) = orientation.apply(block.width, block.height);
            self.scan(width, height, placed).map(|(x, y)| Placement { x, y, orientation })
        })
    }

    /// Row-major scan for the first free top-left corner
    fn scan(&self, width: u32, height: u32, placed: &[PlacedBlock]) -> Option<(u32, u32)> {
        let max_x = self.container.width().checked_sub(width)?;
        let max_y = self.container.height().checked_sub(height)?;

        for y in 0..=max_y {
            for x in 0..=max_x {
                let candidate = Rect::new(x, y, width, height);
                if placed.iter().all(|p| !candidate.intersects(&p.rect())) {
                    return Some((x, y));
                }
            }
        }

        None
    }
}

/// Pack `blocks` into `container` with [`GreedyPacker`]
pub fn pack(container: Container, blocks: &mut [Block]) -> Result<PlacementResult, BlockfitError> {
    GreedyPacker::new(container).pack(blocks)
}
