// qualis-core/src/domain/rules/mod.rs

pub mod range;
pub mod required;
pub mod types;

pub use range::RangeValidator;
pub use required::RequiredFieldValidator;
pub use types::TypeValidator;
