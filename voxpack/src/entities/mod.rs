mod catalog;
mod container;
mod item;
mod packed_box;

#[doc(inline)]
pub use catalog::BoxDefinition;
#[doc(inline)]
pub use catalog::Catalog;
#[doc(inline)]
pub use catalog::OrderLine;
#[doc(inline)]
pub use catalog::ProductDefinition;
#[doc(inline)]
pub use container::Container;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use item::ItemPlacement;
#[doc(inline)]
pub use packed_box::PackedBox;
#[doc(inline)]
pub use packed_box::PackedItem;
#[doc(inline)]
pub use packed_box::PackingResult;
