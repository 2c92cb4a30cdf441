use serde::{Deserialize, Serialize};

use crate::geometry::{Dimensions, Position, Rotation};

/// Immutable record of a closed [`Container`](crate::entities::Container).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PackedBox {
    /// Name of the catalog box that was used
    pub box_name: String,
    pub dimensions: Dimensions,
    /// Percentage of the box volume taken up by its items
    pub utilization: f32,
    /// The items in the box, in placement order
    pub items: Vec<PackedItem>,
}

/// An item as it was placed in a [`PackedBox`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PackedItem {
    pub name: String,
    /// Minimal corner of the region occupied by the item
    pub position: Position,
    pub rotation: Rotation,
    /// Extents of the item after rotation
    pub dimensions: Dimensions,
}

/// The boxes used to pack an order, in the order they were committed,
/// together with the names of all items which could not be packed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PackingResult {
    pub packed_boxes: Vec<PackedBox>,
    pub unpacked_items: Vec<String>,
}

impl PackingResult {
    pub fn n_packed_items(&self) -> usize {
        self.packed_boxes.iter().map(|pb| pb.items.len()).sum()
    }

    /// True if every item of the order was packed
    pub fn is_complete(&self) -> bool {
        self.unpacked_items.is_empty()
    }
}
