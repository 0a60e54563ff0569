pub mod cell;
pub mod zone;
