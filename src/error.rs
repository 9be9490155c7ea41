//! Engine error type.
//!
//! Only construction and bounds configuration can fail; every other
//! operation, `update()` included, is defined for all reachable states.

use thiserror::Error;

use crate::MAX_AGENT_COUNT;

/// Errors surfaced by flock construction and configuration.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum FlockError {
    /// Requested agent count exceeds the allocation ceiling.
    #[error("agent count {0} exceeds the ceiling of {max}", max = MAX_AGENT_COUNT)]
    InvalidCount(usize),

    /// Bounds must be finite and non-negative; prior bounds are retained.
    #[error("invalid bound {0}: must be finite and non-negative")]
    InvalidBounds(f32),
}

/// Shorthand result type for the engine API.
pub type FlockResult<T> = Result<T, FlockError>;
