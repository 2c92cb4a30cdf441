use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;
use ndarray::{Array3, s};

use crate::entities::{Container, PackedBox, PackingResult};
use crate::geometry::{Dimensions, Position, cell_ranges};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// Rebuilds the occupancy grid from the placed items and compares it to the container's grid.
/// Also fails if two placed items claim the same cell or an item is recorded without placement.
pub fn container_grid_matches_items(container: &Container) -> bool {
    let mut fresh = Array3::from_elem(container.grid().raw_dim(), false);
    for item in container.items() {
        let Some(placement) = item.placement() else {
            error!("item {} is recorded in a container but not placed", item.id);
            return false;
        };
        let dims = item.dims_under_rotation(placement.rotation);
        if !dims.fits_at(placement.position, &container.dims()) {
            error!("item {} sticks out of its container", item.id);
            return false;
        }
        let [xr, yr, zr] = cell_ranges(placement.position, dims);
        let mut region = fresh.slice_mut(s![xr, yr, zr]);
        if region.iter().any(|&cell| cell) {
            error!("item {} overlaps with a previously placed item", item.id);
            return false;
        }
        region.fill(true);
    }
    fresh == *container.grid()
}

/// True if the two cuboids share at least one cell. Touching faces do not count as overlap.
pub fn cuboids_overlap(a_pos: Position, a_dims: Dimensions, b_pos: Position, b_dims: Dimensions) -> bool {
    let axis_overlaps = |a_min: u32, a_ext: u32, b_min: u32, b_ext: u32| {
        (a_min as u64) < b_min as u64 + b_ext as u64 && (b_min as u64) < a_min as u64 + a_ext as u64
    };
    axis_overlaps(a_pos.0, a_dims.width, b_pos.0, b_dims.width)
        && axis_overlaps(a_pos.1, a_dims.length, b_pos.1, b_dims.length)
        && axis_overlaps(a_pos.2, a_dims.height, b_pos.2, b_dims.height)
}

/// Checks containment and pairwise non-overlap of all items in a packed box,
/// and that the reported utilization matches the items it holds.
pub fn packed_box_is_feasible(packed_box: &PackedBox) -> bool {
    let bounds = packed_box.dimensions;

    if let Some(pi) = packed_box
        .items
        .iter()
        .find(|pi| !pi.dimensions.fits_at(pi.position, &bounds))
    {
        error!(
            "item {} at {} with dimensions {} exceeds box {} ({})",
            pi.name, pi.position, pi.dimensions, packed_box.box_name, bounds
        );
        return false;
    }

    if let Some((a, b)) = packed_box
        .items
        .iter()
        .tuple_combinations()
        .find(|(a, b)| cuboids_overlap(a.position, a.dimensions, b.position, b.dimensions))
    {
        error!(
            "items {} at {} and {} at {} overlap in box {}",
            a.name, a.position, b.name, b.position, packed_box.box_name
        );
        return false;
    }

    let used_volume = packed_box
        .items
        .iter()
        .map(|pi| pi.dimensions.volume())
        .sum::<u64>();
    let expected_utilization = match used_volume {
        0 => 0.0,
        _ => (100.0 * used_volume as f64 / bounds.volume() as f64) as f32,
    };
    if !approx_eq!(f32, expected_utilization, packed_box.utilization, epsilon = 1e-4) {
        error!(
            "box {} reports {}% utilization, expected {}%",
            packed_box.box_name, packed_box.utilization, expected_utilization
        );
        return false;
    }

    (0.0..=100.0).contains(&packed_box.utilization)
}

/// True if every one of the `n_items` expanded items is accounted for exactly once,
/// either in a packed box or in the unpacked list.
pub fn result_conserves_items(result: &PackingResult, n_items: usize) -> bool {
    let n_accounted = result.n_packed_items() + result.unpacked_items.len();
    if n_accounted != n_items {
        error!("result accounts for {n_accounted} items, expected {n_items}");
        return false;
    }
    true
}
