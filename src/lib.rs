// Reusable library API — visible to both CLI and WASM builds
pub mod candidates;
pub mod dictionary;
pub mod errors;
pub mod letters;
pub mod log;
pub mod search;
pub mod solver;
pub mod square;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
