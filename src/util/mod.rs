pub mod panic;
pub mod result;
