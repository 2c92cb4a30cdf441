use serde::{Deserialize, Serialize};

/// External representation of the box and product catalogs.
/// All dimensions are expressed in millimeters.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCatalog {
    pub boxes: Vec<ExtBox>,
    pub products: Vec<ExtProduct>,
}

/// External representation of a [`BoxDefinition`](crate::entities::BoxDefinition).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBox {
    pub name: String,
    #[serde(flatten)]
    pub dims: ExtDimensions,
}

/// External representation of a [`ProductDefinition`](crate::entities::ProductDefinition).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtProduct {
    pub name: String,
    #[serde(flatten)]
    pub dims: ExtDimensions,
}

/// Extents of a cuboid in millimeters, not necessarily whole.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtDimensions {
    pub width_mm: f32,
    pub length_mm: f32,
    pub height_mm: f32,
}

/// External representation of an [`OrderLine`](crate::entities::OrderLine).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtOrderLine {
    /// Name of the ordered product
    pub name: String,
    pub quantity: u64,
}
