//! Combining validated diagrams into larger ones.
//!
//! Composition never mutates its inputs and never validates its output;
//! call [`validate`](crate::validation::validate) on the result.
mod assembly;
pub mod error;
pub mod parallel;
pub mod serial;

pub use error::{CompositionError, SharedAttribute};
pub use parallel::compose_parallel;
pub use serial::{compose, composable, PortMatch};
