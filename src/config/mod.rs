//! Configuration module for treepick
//!
//! Picker options resolve in this order:
//! 1. CLI flags / programmatic overrides (highest priority)
//! 2. Environment variables (TREEPICK_*)
//! 3. Config file (TOML)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_with_warnings, with_env_overrides, with_env_overrides_from, ConfigWarning};
pub use types::{OutputFormat, PickerConfig, DEFAULT_INDICATOR};
