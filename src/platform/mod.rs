//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (pointer/touch to paddle direction)
//! - Browser binding (wasm32 only)

pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod web;
