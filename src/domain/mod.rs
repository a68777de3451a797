pub mod date_range;
pub mod grid;

pub use date_range::*;
pub use grid::*;
