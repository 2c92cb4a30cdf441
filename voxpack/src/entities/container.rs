use ndarray::{Array3, s};

use crate::entities::{BoxDefinition, Item, ItemPlacement, PackedBox, PackedItem};
use crate::geometry::{Dimensions, Position, Rotation, cell_ranges};
use crate::util::assertions;

/// An open instance of a catalog box in which [`Item`]s can be placed.
///
/// Keeps a voxel occupancy grid of exactly `width × length × height` cells and the items placed so far,
/// in placement order. [`Container::place_item`] is the only way to modify either of them.
/// Once no more items are to be placed, the container is turned into a [`PackedBox`] with [`Container::close`].
#[derive(Clone, Debug)]
pub struct Container {
    /// The catalog box this container is an instance of
    pub def: BoxDefinition,
    items: Vec<Item>,
    occupied: Array3<bool>,
    volume: u64,
}

impl Container {
    pub fn new(def: BoxDefinition) -> Self {
        let Dimensions {
            width,
            length,
            height,
        } = def.dims;
        let occupied = Array3::from_elem((width as usize, length as usize, height as usize), false);
        let volume = def.dims.volume();
        Container {
            def,
            items: vec![],
            occupied,
            volume,
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.def.dims
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// The items placed in the container, in placement order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The occupancy grid, indexed by `[x, y, z]`
    pub fn grid(&self) -> &Array3<bool> {
        &self.occupied
    }

    /// True if `item`, rotated by `rotation` and with its minimal corner at `position`,
    /// stays within the bounds of the container and covers no occupied cell.
    pub fn is_valid_position(&self, item: &Item, position: Position, rotation: Rotation) -> bool {
        let dims = item.dims_under_rotation(rotation);
        if !dims.fits_at(position, &self.def.dims) {
            return false;
        }
        let [xr, yr, zr] = cell_ranges(position, dims);
        !self.occupied.slice(s![xr, yr, zr]).iter().any(|&cell| cell)
    }

    /// Places `item` at `position` with `rotation` if that position is valid.
    /// On success, all covered cells are marked as occupied and the item is recorded in the container.
    /// Otherwise the item is handed back untouched and the container is left unchanged.
    /// Items which are already placed are refused.
    pub fn place_item(
        &mut self,
        mut item: Item,
        position: Position,
        rotation: Rotation,
    ) -> Result<(), Item> {
        if item.is_placed() || !self.is_valid_position(&item, position, rotation) {
            return Err(item);
        }
        let [xr, yr, zr] = cell_ranges(position, item.dims_under_rotation(rotation));
        self.occupied.slice_mut(s![xr, yr, zr]).fill(true);

        item.placement = Some(ItemPlacement { position, rotation });
        self.items.push(item);

        debug_assert!(assertions::container_grid_matches_items(self));

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Percentage of the container's volume taken up by placed items, 0 if empty.
    pub fn volume_utilization(&self) -> f32 {
        if self.items.is_empty() {
            return 0.0;
        }
        let used_volume = self.items.iter().map(Item::volume).sum::<u64>();
        (100.0 * used_volume as f64 / self.volume as f64) as f32
    }

    /// Closes the container and returns the immutable record of its contents.
    pub fn close(self) -> PackedBox {
        let utilization = self.volume_utilization();
        let items = self
            .items
            .iter()
            .filter_map(|item| {
                let ItemPlacement { position, rotation } = item.placement()?;
                Some(PackedItem {
                    name: item.name.to_string(),
                    position,
                    rotation,
                    dimensions: item.dims_under_rotation(rotation),
                })
            })
            .collect();

        PackedBox {
            box_name: self.def.name,
            dimensions: self.def.dims,
            utilization,
            items,
        }
    }
}
