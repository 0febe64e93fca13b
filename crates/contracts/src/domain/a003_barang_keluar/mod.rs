pub mod aggregate;
pub mod bend29;
