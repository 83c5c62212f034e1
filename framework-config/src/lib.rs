//! Configuration management for the demo.
//!
//! Settings are layered: built-in defaults, an optional JSON file,
//! environment overrides, then whatever the caller applies on top (the CLI
//! applies its flags last).

#![warn(missing_docs, clippy::pedantic)]

pub mod loader;
pub mod schema;

mod error;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ENV_BASE_URL, ENV_MODEL, ENV_SAMPLES, ENV_TEMPERATURE, load, load_dotenv};
pub use schema::{DEFAULT_SAMPLES, DemoConfig};
