use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::entities::Item;
use crate::geometry::Dimensions;

/// A box size which can be used to pack items in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxDefinition {
    pub name: String,
    pub dims: Dimensions,
}

/// A product which can be ordered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDefinition {
    pub name: String,
    pub dims: Dimensions,
}

/// A request for `quantity` units of the product named `name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: usize,
}

impl OrderLine {
    pub fn new(name: impl Into<String>, quantity: usize) -> Self {
        OrderLine {
            name: name.into(),
            quantity,
        }
    }
}

/// Read-only box and product catalogs.
/// Boxes are kept sorted by ascending volume, boxes of equal volume keep their input order.
#[derive(Clone, Debug)]
pub struct Catalog {
    boxes: Vec<BoxDefinition>,
    products: Vec<ProductDefinition>,
    product_ids: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(boxes: Vec<BoxDefinition>, products: Vec<ProductDefinition>) -> Self {
        let boxes = boxes
            .into_iter()
            .sorted_by_key(|b| b.dims.volume())
            .collect_vec();

        let mut product_ids = HashMap::with_capacity(products.len());
        for (id, product) in products.iter().enumerate() {
            match product_ids.entry(product.name.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(id);
                }
                Entry::Occupied(_) => {
                    warn!(
                        "[CAT] duplicate definition of product {:?}, only the first one is used",
                        product.name
                    );
                }
            }
        }

        Catalog {
            boxes,
            products,
            product_ids,
        }
    }

    /// All box definitions, sorted by ascending volume
    pub fn boxes(&self) -> &[BoxDefinition] {
        &self.boxes
    }

    /// All product definitions, in input order
    pub fn products(&self) -> &[ProductDefinition] {
        &self.products
    }

    pub fn product(&self, name: &str) -> Option<&ProductDefinition> {
        self.product_ids.get(name).map(|&id| &self.products[id])
    }

    /// Materializes one [`Item`] per ordered unit, with ids assigned consecutively from 0.
    /// Lines referring to unknown products are skipped.
    pub fn expand_order(&self, order: &[OrderLine]) -> Vec<Item> {
        let mut items = Vec::with_capacity(order.iter().map(|line| line.quantity).sum());
        for line in order {
            match self.product(&line.name) {
                Some(product) => {
                    let name: Arc<str> = Arc::from(product.name.as_str());
                    for _ in 0..line.quantity {
                        items.push(Item::new(items.len(), name.clone(), product.dims));
                    }
                }
                None => debug!(
                    "[CAT] skipping {} unit(s) of unknown product {:?}",
                    line.quantity, line.name
                ),
            }
        }
        items
    }
}
