use anyhow::{Context, Result, ensure};
use log::warn;

use crate::entities::{BoxDefinition, Catalog, OrderLine, ProductDefinition};
use crate::geometry::Dimensions;
use crate::io::ext_repr::{ExtCatalog, ExtDimensions, ExtOrderLine};

/// Number of grid cells above which a box is reported as expensive to simulate.
const LARGE_GRID_CELLS: u64 = 50_000_000;

/// Converts external representations of catalogs and orders into internal ones.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    /// Edge length (in mm) of a single grid cell. All external dimensions are divided by it and rounded.
    pub grid_resolution: f32,
}

impl Importer {
    pub fn new(grid_resolution: f32) -> Importer {
        Importer { grid_resolution }
    }

    pub fn import_catalog(&self, ext_catalog: &ExtCatalog) -> Result<Catalog> {
        ensure!(
            self.grid_resolution.is_finite() && self.grid_resolution > 0.0,
            "grid resolution should be strictly positive, got {}",
            self.grid_resolution
        );

        let boxes = ext_catalog
            .boxes
            .iter()
            .map(|ext_box| {
                let dims = self
                    .import_dims(&ext_box.dims)
                    .with_context(|| format!("invalid dimensions for box {:?}", ext_box.name))?;
                ensure!(!ext_box.name.is_empty(), "boxes should have a name");
                if dims.volume() > LARGE_GRID_CELLS {
                    warn!(
                        "box {:?} spans {} grid cells, consider a coarser grid resolution",
                        ext_box.name,
                        dims.volume()
                    );
                }
                Ok(BoxDefinition {
                    name: ext_box.name.clone(),
                    dims,
                })
            })
            .collect::<Result<Vec<BoxDefinition>>>()?;

        let products = ext_catalog
            .products
            .iter()
            .map(|ext_product| {
                let dims = self.import_dims(&ext_product.dims).with_context(|| {
                    format!("invalid dimensions for product {:?}", ext_product.name)
                })?;
                ensure!(!ext_product.name.is_empty(), "products should have a name");
                Ok(ProductDefinition {
                    name: ext_product.name.clone(),
                    dims,
                })
            })
            .collect::<Result<Vec<ProductDefinition>>>()?;

        if boxes.is_empty() {
            warn!("catalog contains no boxes, no item will be packed");
        }

        Ok(Catalog::new(boxes, products))
    }

    /// Converts millimeter extents into whole grid units by rounding to the nearest cell.
    pub fn import_dims(&self, ext_dims: &ExtDimensions) -> Result<Dimensions> {
        let to_cells = |mm: f32, axis: &str| -> Result<u32> {
            ensure!(mm.is_finite(), "{axis} is not a finite number: {mm}");
            let cells = (mm / self.grid_resolution).round();
            ensure!(
                cells >= 1.0,
                "{axis} of {mm}mm rounds to zero cells at a grid resolution of {}mm",
                self.grid_resolution
            );
            ensure!(cells <= u32::MAX as f32, "{axis} of {mm}mm is too large");
            Ok(cells as u32)
        };
        Ok(Dimensions::new(
            to_cells(ext_dims.width_mm, "width")?,
            to_cells(ext_dims.length_mm, "length")?,
            to_cells(ext_dims.height_mm, "height")?,
        ))
    }

    pub fn import_order(&self, ext_order: &[ExtOrderLine]) -> Result<Vec<OrderLine>> {
        ext_order
            .iter()
            .map(|ext_line| {
                let quantity = usize::try_from(ext_line.quantity).with_context(|| {
                    format!("quantity of {:?} is out of range", ext_line.name)
                })?;
                Ok(OrderLine::new(ext_line.name.clone(), quantity))
            })
            .collect()
    }
}
