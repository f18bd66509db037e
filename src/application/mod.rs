//! Application layer: service orchestration over domain store traits.

pub mod services;
