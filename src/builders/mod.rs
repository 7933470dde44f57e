//! Builders
//!
//! Fluent configuration builder and environment loading.

pub mod config;
pub mod environment;

pub use config::{its_config, ItsConfigBuilder};
pub use environment::ENV_FILE;
