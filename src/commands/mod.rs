//! Public entry points
//!
//! These functions validate caller input, apply defaults and dispatch to the
//! processing layer.

pub mod batch;
pub mod export;
pub mod generate;
