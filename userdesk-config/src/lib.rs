//! Configuration library for the userdesk console.
//!
//! Settings come from three layers with fixed precedence: environment
//! variables (optionally seeded from a `.env` file), then a `userdesk.toml`
//! file, then built-in defaults. The loader composes them into a validated
//! [`ConsoleConfig`] and reports soft problems as [`ConfigWarnings`].

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{ConsoleConfig, ConsoleSettings, ServerConfig};
pub use models::{ConfigWarning, ConfigWarnings};
