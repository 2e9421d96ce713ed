//! Command implementations for svbed.

pub mod convert;

pub use convert::{ConvertCommand, ConvertStats};
