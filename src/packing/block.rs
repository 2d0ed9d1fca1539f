use serde::{Deserialize, Serialize};

use super::Rect;
use crate::error::BlockfitError;

/// The fixed rectangular region blocks are packed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Container {
    width: u32,
    height: u32,
}

impl Container {
    /// Create a container, rejecting zero-area dimensions
    pub fn new(width: u32, height: u32) -> Result<Self, BlockfitError> {
        if width == 0 || height == 0 {
            return Err(BlockfitError::InvalidContainer { width, height });
        }
        Ok(Self { width, height })
    }

    /// Container whose width is a fraction of a viewport width, as used when
    /// re-packing after a viewport resize.
    pub fn scaled_width(
        viewport_width: u32,
        factor: f64,
        height: u32,
    ) -> Result<Self, BlockfitError> {
        let scaled = (f64::from(viewport_width) * factor).floor();
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped into u32 range before casting"
        )]
        let width = scaled.clamp(0.0, f64::from(u32::MAX)) as u32;
        Self::new(width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Orientation a block was placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Width and height as given
    Normal,
    /// Rotated by 90°, width and height swapped
    Rotated,
}

impl Orientation {
    /// Orientations in the order the packer tries them
    pub const ALL: [Orientation; 2] = [Orientation::Normal, Orientation::Rotated];

    /// Effective (width, height) of a block in this orientation
    pub fn apply(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Orientation::Normal => (width, height),
            Orientation::Rotated => (height, width),
        }
    }
}

/// Where and how a block was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub orientation: Orientation,
}

/// A rectangle to pack.
///
/// `width`/`height` are intrinsic. The placement is written by the packer
/// and is `None` until a position has been found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Position of the block in the source list
    pub id: usize,
    pub width: u32,
    pub height: u32,
    pub(crate) placement: Option<Placement>,
}

impl Block {
    pub fn new(id: usize, width: u32, height: u32) -> Self {
        Self {
            id,
            width,
            height,
            placement: None,
        }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Occupied rectangle in its placed orientation
    pub fn rect(&self) -> Option<Rect> {
        self.placement.map(|p| {
            let (w, h) = p.orientation.apply(self.width, self.height);
            Rect::new(p.x, p.y, w, h)
        })
    }

    /// Forget any placement left over from an earlier run
    pub(crate) fn reset(&mut self) {
        self.placement = None;
    }
}

/// A block that was successfully placed, with its effective geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedBlock {
    pub id: usize,
    pub x: u32,
    pub y: u32,
    /// Width after rotation
    pub width: u32,
    /// Height after rotation
    pub height: u32,
    pub orientation: Orientation,
}

impl PlacedBlock {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn area(&self) -> u64 {
        self.rect().area()
    }
}

/// Output of a packing run: the container and the blocks that fit, in
/// placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementResult {
    pub container: Container,
    pub placed: Vec<PlacedBlock>,
}

impl PlacementResult {
    pub fn placed_area(&self) -> u64 {
        self.placed.iter().map(PlacedBlock::area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_rejects_zero_dimensions() {
        assert!(Container::new(0, 10).is_err());
        assert!(Container::new(10, 0).is_err());
        assert!(Container::new(1, 1).is_ok());
    }

    #[test]
    fn test_scaled_width() {
        let c = Container::scaled_width(1000, 0.8, 764).unwrap();
        assert_eq!(c.width(), 800);
        assert_eq!(c.height(), 764);

        let c = Container::scaled_width(999, 0.8, 10).unwrap();
        assert_eq!(c.width(), 799);

        assert!(Container::scaled_width(1, 0.8, 10).is_err());
    }

    #[test]
    fn test_orientation_apply() {
        assert_eq!(Orientation::Normal.apply(5, 3), (5, 3));
        assert_eq!(Orientation::Rotated.apply(5, 3), (3, 5));
    }

    #[test]
    fn test_block_rect_uses_orientation() {
        let mut block = Block::new(0, 5, 3);
        assert_eq!(block.rect(), None);

        block.placement = Some(Placement {
            x: 1,
            y: 2,
            orientation: Orientation::Rotated,
        });
        assert_eq!(block.rect(), Some(Rect::new(1, 2, 3, 5)));

        block.reset();
        assert!(!block.is_placed());
    }
}
