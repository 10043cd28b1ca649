//! Sink capability and the in-process sinks shipped with the crate.

pub mod console;
pub mod memory;
pub mod traits;

pub use traits::Sink;
