use log::debug;
use serde::Serialize;

use crate::packing::{Container, PlacedBlock, PlacementResult};

/// Cell-level occupancy of a packed container
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OccupancyReport {
    /// Unit cells covered by no placed block
    pub cavities: u64,
    /// Sum of the placed blocks' areas
    pub block_area: u64,
    /// `1 - cavities / (cavities + block_area)`
    pub fullness: f64,
}

impl OccupancyReport {
    /// Fullness as a percentage rounded to two decimals
    pub fn percent(&self) -> f64 {
        (self.fullness * 10000.0).round() / 100.0
    }
}

/// Count the unit cells of `container` that fall inside none of `placed`.
///
/// Every cell is checked against every block, so the cost is
/// O(area * blocks).
pub fn count_cavities(container: Container, placed: &[PlacedBlock]) -> u64 {
    let mut cavities = 0;

    for y in 0..container.height() {
        for x in 0..container.width() {
            if !placed.iter().any(|b| b.rect().contains_cell(x, y)) {
                cavities += 1;
            }
        }
    }

    cavities
}

/// Fullness ratio of `container` given the blocks placed in it.
///
/// The denominator is `cavities + block_area` rather than the container
/// area. The two agree whenever the blocks lie inside the container and do
/// not overlap, which the packer guarantees.
pub fn fullness(container: Container, placed: &[PlacedBlock]) -> f64 {
    report(container, placed).fullness
}

/// Analyze a packing result
pub fn analyze(result: &PlacementResult) -> OccupancyReport {
    report(result.container, &result.placed)
}

fn report(container: Container, placed: &[PlacedBlock]) -> OccupancyReport {
    let cavities = count_cavities(container, placed);
    let block_area: u64 = placed.iter().map(PlacedBlock::area).sum();

    // Container dimensions are positive, so the denominator is too.
    let fullness = 1.0 - cavities as f64 / (cavities + block_area) as f64;

    debug!(
        "{}x{}: {} cavity cells, {} block cells, fullness {:.4}",
        container.width(),
        container.height(),
        cavities,
        block_area,
        fullness
    );

    OccupancyReport {
        cavities,
        block_area,
        fullness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{Block, pack};

    fn packed(width: u32, height: u32, sizes: &[(u32, u32)]) -> PlacementResult {
        let container = Container::new(width, height).unwrap();
        let mut blocks: Vec<Block> = sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| Block::new(i, w, h))
            .collect();
        pack(container, &mut blocks).unwrap()
    }

    #[test]
    fn test_single_block_quarter_full() {
        let result = packed(10, 10, &[(5, 5)]);
        let report = analyze(&result);

        assert_eq!(report.cavities, 75);
        assert_eq!(report.block_area, 25);
        assert!((report.fullness - 0.25).abs() < 1e-12);
        assert!((report.percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_nothing_placed_is_empty() {
        let result = packed(4, 4, &[(5, 3)]);
        let report = analyze(&result);

        assert_eq!(report.cavities, 16);
        assert_eq!(report.block_area, 0);
        assert_eq!(report.fullness, 0.0);

        let result = packed(2, 2, &[(3, 3)]);
        assert_eq!(fullness(result.container, &result.placed), 0.0);
    }

    #[test]
    fn test_two_blocks() {
        let result = packed(10, 10, &[(6, 6), (4, 4)]);
        let report = analyze(&result);

        assert_eq!(report.block_area, 52);
        assert_eq!(report.cavities, 48);
        assert!((report.fullness - 0.52).abs() < 1e-12);
    }

    #[test]
    fn test_completely_full() {
        let result = packed(4, 4, &[(2, 2), (2, 2), (2, 2), (2, 2)]);
        let report = analyze(&result);

        assert_eq!(report.cavities, 0);
        assert_eq!(report.fullness, 1.0);
    }

    #[test]
    fn test_area_accounting() {
        let sizes: Vec<(u32, u32)> = (0..30).map(|i| (1 + i % 5, 2 + (i * 7) % 4)).collect();
        for (w, h) in [(9, 9), (13, 7), (20, 11), (3, 40)] {
            let result = packed(w, h, &sizes);
            let report = analyze(&result);

            assert_eq!(report.cavities + report.block_area, result.container.area());
            assert!((0.0..=1.0).contains(&report.fullness));
        }
    }

    #[test]
    fn test_unplaced_blocks_have_no_effect() {
        let with_misfit = packed(10, 10, &[(5, 5), (11, 11)]);
        let without = packed(10, 10, &[(5, 5)]);

        assert_eq!(analyze(&with_misfit), analyze(&without));
    }
}
