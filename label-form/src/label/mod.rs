//! Label generation: expansion into per-unit documents, layout rules and
//! HTML rendering

mod expander;
mod layout;
mod render;

pub use expander::expand;
pub use layout::{MaterialsLayout, PriceLine, PriceSizeClass, PriceVariant, price_line};
pub use render::{LabelRenderer, SheetRenderer, preview_header};
