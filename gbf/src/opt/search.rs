use std::cmp::Reverse;

use itertools::Itertools;
use log::trace;
use voxpack::entities::{BoxDefinition, Container, Item};
use voxpack::geometry::{Position, Rotation};

/// Outcome of packing a list of items into a single fresh [`Container`].
pub struct Simulation {
    /// The container with all items that could be placed
    pub container: Container,
    /// Items which did not fit anywhere in the container
    pub unpacked: Vec<Item>,
    /// Number of positions validated during the simulation
    pub n_evals: usize,
}

impl Simulation {
    pub fn n_packed(&self) -> usize {
        self.container.items().len()
    }
}

/// Packs copies of `items` into a fresh container of type `box_def`.
/// Items are handled in [`item_placement_order`], each one placed at its [`first_fit`] or left unpacked.
pub fn simulate(box_def: &BoxDefinition, items: &[Item]) -> Simulation {
    let mut container = Container::new(box_def.clone());
    let mut unpacked = vec![];
    let mut n_evals = 0;

    for item in item_placement_order(items) {
        let item = item.clone();
        match first_fit(&container, &item, &mut n_evals) {
            Some((position, rotation)) => {
                trace!("placing item {} ({}) at {position} with {rotation}", item.id, item.name);
                if let Err(item) = container.place_item(item, position, rotation) {
                    unpacked.push(item);
                }
            }
            None => unpacked.push(item),
        }
    }

    Simulation {
        container,
        unpacked,
        n_evals,
    }
}

/// Largest volume first. Items of equal volume keep their relative order.
pub fn item_placement_order(items: &[Item]) -> impl Iterator<Item = &Item> {
    items.iter().sorted_by_key(|item| Reverse(item.volume()))
}

/// Searches the first valid placement of `item` in `container`.
/// Rotations are tried in ascending index order, and within a rotation all corner positions
/// in lexicographic `(x, y, z)` order, `x` varying slowest.
/// Rotations producing the same extents as an earlier one are skipped, as they cannot succeed where the earlier one failed.
pub fn first_fit(
    container: &Container,
    item: &Item,
    n_evals: &mut usize,
) -> Option<(Position, Rotation)> {
    let bounds = container.dims();
    let rotations = Rotation::all().unique_by(|r| item.dims_under_rotation(*r));

    for rotation in rotations {
        let dims = item.dims_under_rotation(rotation);
        if !dims.fits_in(&bounds) {
            continue;
        }
        for x in 0..=(bounds.width - dims.width) {
            for y in 0..=(bounds.length - dims.length) {
                for z in 0..=(bounds.height - dims.height) {
                    let position = Position(x, y, z);
                    *n_evals += 1;
                    if container.is_valid_position(item, position, rotation) {
                        return Some((position, rotation));
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use voxpack::geometry::Dimensions;

    use super::*;

    fn box_def(w: u32, l: u32, h: u32) -> BoxDefinition {
        BoxDefinition {
            name: format!("{w}x{l}x{h}"),
            dims: Dimensions::new(w, l, h),
        }
    }

    #[test]
    fn placement_order_is_stable_descending_volume() {
        let items = vec![
            Item::new(0, "small", Dimensions::new(1, 1, 1)),
            Item::new(1, "flat", Dimensions::new(4, 2, 1)),
            Item::new(2, "big", Dimensions::new(3, 3, 3)),
            Item::new(3, "long", Dimensions::new(8, 1, 1)),
        ];
        let order = item_placement_order(&items).map(|i| i.id).collect_vec();
        assert_eq!(order, [2, 1, 3, 0]);
    }

    #[test]
    fn first_fit_scans_z_fastest() {
        let mut container = Container::new(box_def(4, 4, 4));
        let mut n_evals = 0;
        let cube = Item::new(0, "cube", Dimensions::new(2, 2, 2));
        assert_eq!(
            first_fit(&container, &cube, &mut n_evals),
            Some((Position(0, 0, 0), Rotation::IDENTITY))
        );
        assert!(container.place_item(cube, Position(0, 0, 0), Rotation::IDENTITY).is_ok());

        let next = Item::new(1, "cube", Dimensions::new(2, 2, 2));
        assert_eq!(
            first_fit(&container, &next, &mut n_evals),
            Some((Position(0, 0, 2), Rotation::IDENTITY))
        );
    }

    #[test]
    fn first_fit_rotates_when_needed() {
        let container = Container::new(box_def(2, 10, 5));
        let mut n_evals = 0;
        // (10, 2, 5) only fits as (l, w, h)
        let plank = Item::new(0, "plank", Dimensions::new(10, 2, 5));
        assert_eq!(
            first_fit(&container, &plank, &mut n_evals),
            Some((Position(0, 0, 0), Rotation::new(2)))
        );
    }

    #[test]
    fn first_fit_fails_for_oversized_items() {
        let container = Container::new(box_def(5, 5, 5));
        let mut n_evals = 0;
        let big = Item::new(0, "big", Dimensions::new(10, 10, 10));
        assert_eq!(first_fit(&container, &big, &mut n_evals), None);
        assert_eq!(n_evals, 0);
    }

    #[test]
    fn simulation_packs_largest_first() {
        let items = vec![
            Item::new(0, "small", Dimensions::new(5, 5, 5)),
            Item::new(1, "large", Dimensions::new(10, 10, 5)),
            Item::new(2, "huge", Dimensions::new(11, 1, 1)),
        ];
        let sim = simulate(&box_def(10, 10, 10), &items);

        assert_eq!(sim.n_packed(), 2);
        let placed = sim.container.items();
        assert_eq!(placed[0].id, 1);
        assert_eq!(placed[0].placement().map(|p| p.position), Some(Position(0, 0, 0)));
        assert_eq!(placed[1].id, 0);
        assert_eq!(placed[1].placement().map(|p| p.position), Some(Position(0, 0, 5)));
        assert_eq!(sim.unpacked.iter().map(|i| i.id).collect_vec(), [2]);
        // the input list is left untouched
        assert!(items.iter().all(|i| !i.is_placed()));
    }
}
