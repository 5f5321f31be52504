pub mod config;

pub use config::{ConfigOverrides, RemapConfig, CONFIG_ENV_VAR};
