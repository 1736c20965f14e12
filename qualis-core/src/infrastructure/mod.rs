// qualis-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
pub mod fs;
pub mod input;

pub use error::InfrastructureError;
pub use fs::save_report;
pub use input::load_records;
