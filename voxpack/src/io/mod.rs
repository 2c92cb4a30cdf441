/// External (serializable) representations of catalogs and orders
pub mod ext_repr;

/// Conversion of external representations into internal ones
pub mod import;
