/*
 * Flock2d - 2D Flocking Engine
 *
 * This file defines the module structure for the flocking engine crate.
 * The engine owns agent state and advances it one tick per update() call;
 * rendering, window sizing and input capture belong to the host.
 */

// Re-export key components for easier access
pub use error::{FlockError, FlockResult};
pub use flock::Flock;
pub use params::RuleParams;
pub use store::AgentStore;

// Define modules
pub mod boundary;
pub mod error;
pub mod flock;
pub mod params;
pub mod rules;
pub mod store;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

// Constants
pub const MAX_AGENT_COUNT: usize = 1 << 20;
