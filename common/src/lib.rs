pub mod config;
pub mod error;
pub mod logging;
pub mod state;

// Re-exported so the `success!` macro can resolve the tracing crate
// from the caller's side via `$crate`.
pub use tracing;
