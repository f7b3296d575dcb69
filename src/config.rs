//! Patch run configuration: embedded defaults, optional workspace override, validation.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    FixEntry,
    FixTable,
    PatchSettings,
    ValidationError,
};
