use std::sync::Arc;

use crate::geometry::{Dimensions, Position, Rotation};

/// A single unit of a product to be packed.
#[derive(Clone, Debug)]
pub struct Item {
    /// Identifier of this unit, unique within the expanded order it originates from
    pub id: usize,
    /// Name of the product, shared between all units of the same product
    pub name: Arc<str>,
    /// Extents of the item before any rotation
    pub dims: Dimensions,
    /// `None` as long as the item has not been placed in a [`Container`](crate::entities::Container)
    pub(crate) placement: Option<ItemPlacement>,
    volume: u64,
}

/// Where and how an [`Item`] sits inside a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemPlacement {
    /// Minimal corner of the region occupied by the item
    pub position: Position,
    pub rotation: Rotation,
}

impl Item {
    pub fn new(id: usize, name: impl Into<Arc<str>>, dims: Dimensions) -> Item {
        Item {
            id,
            name: name.into(),
            dims,
            placement: None,
            volume: dims.volume(),
        }
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }

    pub fn dims_under_rotation(&self, rotation: Rotation) -> Dimensions {
        self.dims.rotate(rotation)
    }

    pub fn placement(&self) -> Option<ItemPlacement> {
        self.placement
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Extents of the item as it was placed, `None` if unplaced
    pub fn placed_dims(&self) -> Option<Dimensions> {
        self.placement.map(|p| self.dims_under_rotation(p.rotation))
    }
}
