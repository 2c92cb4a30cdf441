use itertools::Itertools;
use rand::Rng;
use voxpack::entities::{Catalog, OrderLine};

/// Generates an order containing every product of the catalog (in catalog order)
/// with a uniformly sampled quantity in `1..=max_qty`.
pub fn random_order(catalog: &Catalog, rng: &mut impl Rng, max_qty: usize) -> Vec<OrderLine> {
    assert!(max_qty > 0, "max_qty should be at least 1");
    catalog
        .products()
        .iter()
        .map(|product| OrderLine::new(product.name.clone(), rng.random_range(1..=max_qty)))
        .collect_vec()
}
