pub mod book;
pub mod commands;

pub use book::OrderBook;
