//! Layered configuration loading (defaults → project yaml → env).

mod loader;

pub use loader::{ConfigError, ConfigLoader};
