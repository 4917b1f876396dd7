//! Small helpers shared across layers.

pub mod mask;
pub mod parse;
