//! Pack-then-analyze runs, including re-packing for a series of container
//! widths as happens when a viewport is resized.

use anyhow::Result;
use log::info;

use crate::occupancy::{OccupancyReport, analyze};
use crate::packing::{Block, Container, PlacementResult, pack};

/// Everything a single pack-and-analyze pass produces
#[derive(Debug, Clone)]
pub struct PackRun {
    pub result: PlacementResult,
    pub occupancy: OccupancyReport,
    /// Ids of blocks that did not fit, in the order they were tried
    pub unplaced: Vec<usize>,
}

/// Pack `blocks` into `container` and measure the result.
///
/// `blocks` is reordered by descending area and carries its placements
/// afterwards.
pub fn run(container: Container, blocks: &mut [Block]) -> Result<PackRun> {
    let result = pack(container, blocks)?;
    let occupancy = analyze(&result);
    let unplaced = blocks
        .iter()
        .filter(|b| !b.is_placed())
        .map(|b| b.id)
        .collect();

    info!(
        "Placed {}/{} blocks in {}x{}, fullness {:.2}%",
        result.placed.len(),
        blocks.len(),
        container.width(),
        container.height(),
        occupancy.percent()
    );

    Ok(PackRun {
        result,
        occupancy,
        unplaced,
    })
}

/// Re-pack the same blocks for each container width.
///
/// Every pass starts from a fresh copy of `blocks`, so no placement from one
/// width carries over into the next.
pub fn sweep(blocks: &[Block], widths: &[u32], height: u32) -> Result<Vec<PackRun>> {
    widths
        .iter()
        .map(|&width| {
            let container = Container::new(width, height)?;
            let mut fresh = blocks.to_vec();
            run(container, &mut fresh)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(sizes: &[(u32, u32)]) -> Vec<Block> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| Block::new(i, w, h))
            .collect()
    }

    #[test]
    fn test_run_reports_unplaced() {
        let mut input = blocks(&[(2, 2), (9, 9), (3, 3)]);
        let run = run(Container::new(5, 5).unwrap(), &mut input).unwrap();

        assert_eq!(run.unplaced, vec![1]);
        assert_eq!(run.result.placed.len(), 2);
        assert_eq!(run.occupancy.block_area, 13);
        assert_eq!(run.occupancy.cavities, 12);
    }

    #[test]
    fn test_sweep_starts_fresh_each_width() {
        let input = blocks(&[(6, 6), (4, 4), (5, 2)]);
        let runs = sweep(&input, &[6, 10, 6], 6).unwrap();

        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].result.placed.len(), 1);
        assert_eq!(runs[1].result.placed.len(), 2);
        assert_eq!(runs[0].result, runs[2].result);
        assert_eq!(runs[0].unplaced, runs[2].unplaced);

        // The caller's blocks are left untouched
        assert!(input.iter().all(|b| !b.is_placed()));
        assert_eq!(input[0].id, 0);
    }

    #[test]
    fn test_sweep_rejects_zero_width() {
        let input = blocks(&[(1, 1)]);
        assert!(sweep(&input, &[4, 0], 4).is_err());
    }
}
