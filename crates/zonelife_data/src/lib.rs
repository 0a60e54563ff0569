pub mod data;

pub use data::cell::{Cell, CellView};
pub use data::zone::Zone;
