pub mod config;
pub mod logging;
pub mod refresh;
pub(crate) mod render;
