//! Streaming output utilities.

pub mod output;

pub use output::BedWriter;
