pub mod chain;
pub mod macros;
pub mod types;
