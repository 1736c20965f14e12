// qualis-core/src/ports/mod.rs

pub mod validator;

pub use self::validator::Validator;
