mod dimensions;
mod rotation;

#[doc(inline)]
pub use dimensions::Dimensions;
#[doc(inline)]
pub use dimensions::Position;
#[doc(inline)]
pub use dimensions::cell_ranges;
#[doc(inline)]
pub use rotation::Rotation;
