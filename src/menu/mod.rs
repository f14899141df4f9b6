pub mod catalog;
pub mod commands;

pub use catalog::MenuCatalog;
