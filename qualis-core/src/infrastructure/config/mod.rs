pub mod loader;

pub use crate::domain::config::RawValidationConfig;
pub use loader::{apply_env_overrides, load_validation_config};
