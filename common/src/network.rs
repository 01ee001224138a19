pub mod address;
pub mod algebra;
pub mod zone;
