//! Platform abstraction layer
//!
//! The browser driver owns the frame loop, container measurement, and the
//! `d` attribute update. Native builds have no surface to draw on.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{WasmWave, WaveHandle, init_logging, mount};
