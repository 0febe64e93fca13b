pub mod details;
pub mod export;
pub mod list;
