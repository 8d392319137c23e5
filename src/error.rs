//! Error types for axium operations.

use thiserror::Error;

/// Errors that can occur during skeleton extraction or triangulation.
///
/// Most of the crate degrades gracefully instead of erroring; these variants
/// surface only through the explicit `try_` entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AxiumError {
    /// Input has fewer than three usable vertices.
    #[error("degenerate input: fewer than three usable vertices")]
    DegenerateInput,

    /// A constraint edge could not be recovered within the flip ceiling.
    #[error("constraint edge left unresolved after {iterations} flip attempts")]
    ConstraintUnresolved {
        /// Number of edge flips attempted.
        iterations: usize,
    },
}
