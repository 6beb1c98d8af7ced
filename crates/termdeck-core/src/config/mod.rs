//! # Configuration System
//!
//! The presets file describes named groups of terminals. It is written in
//! TOML (`presets.toml`) or JSON (`presets.json`) and looked up in
//! `.termdeck/` of the current directory or any ancestor, then in
//! `~/.termdeck/`.
//!
//! ## Usage Example
//!
//! ```toml
//! # ./.termdeck/presets.toml
//! [[presets]]
//! name = "Dev"
//!
//! [[presets.terminals]]
//! name = "server"
//! shellPath = "/bin/bash"
//! color = "blue"
//! command = "npm run dev"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use termdeck_core::config::Config;
//!
//! fn example() -> Result<(), termdeck_core::ConfigError> {
//!     let config = Config::load(None)?;
//!     for preset in &config.presets {
//!         println!("{}", preset.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use loading::{ConfigFormat, find_config_file, load_config, parse_config};
pub use types::{Config, Preset, Terminal, TerminalColor};
pub use validation::validate_config;

impl Config {
    /// Find and parse the presets file.
    ///
    /// See [`loading::load_config`] for details.
    pub fn load(explicit: Option<&std::path::Path>) -> Result<Self, crate::errors::ConfigError> {
        loading::load_config(explicit)
    }
}
