//! Source capability and the in-process sources shipped with the crate.

pub mod iter;
pub mod random;
pub mod scripted;
pub mod traits;

pub use traits::Source;
