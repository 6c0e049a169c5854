// Reusable library API — visible to both CLI and WASM builds
pub mod config;
pub mod display;
pub mod errors;
pub mod finder;
pub mod input;
pub mod log;
pub mod matrix;

#[cfg(not(target_arch = "wasm32"))]
pub mod console;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
