mod defaults;
mod errors;
mod loader;
mod models;

pub use errors::ConfigError;
pub use models::*;
