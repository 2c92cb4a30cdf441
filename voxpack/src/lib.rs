//! Voxel-grid engine for packing axis-aligned rectangular items into a catalog of box sizes.
//!
//! The crate models the static part of the problem ([`Item`](entities::Item)s, box and product
//! catalogs) and a single open box instance ([`Container`](entities::Container)) which owns an
//! occupancy grid and decides whether an item can be placed at a given corner and rotation.
//! Strategies deciding *which* box to open and *where* to put items live outside of this crate.

/// Entities to model packing problems: items, catalogs, containers and their results
pub mod entities;

/// Integer geometry: extents, corner positions and the six axis-aligned rotations
pub mod geometry;

/// Importing catalogs and orders from their external representation
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
