//! Adapter implementations for registry ports and domain traits.

pub mod memory;
pub mod validators;
