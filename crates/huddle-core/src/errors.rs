//! Cross-cutting error types for Huddle.
//!
//! Store-specific errors (`StoreError`) live in `huddle-store`; the CLI
//! converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised while building core values from raw input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input was rejected before anything was recorded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
