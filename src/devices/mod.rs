pub mod commands;
pub mod registry;

pub use registry::DeviceRegistry;
