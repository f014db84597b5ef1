pub mod kernel;
pub mod registry;
