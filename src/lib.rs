// Crate root: typed wiring diagrams, their validators and composition.
// The `_core` Python module lives in `bindings::python` behind the `python` feature.

pub mod analysis;
pub mod compose;
pub mod display;
pub mod store;
pub mod validation;

#[cfg(feature = "python")]
mod bindings;

#[cfg(test)]
mod fixtures;

pub use compose::{compose, compose_parallel, composable, CompositionError, PortMatch};
pub use display::{render, summarize, Summary};
pub use store::{BuildError, Diagram, DiagramDescription};
pub use validation::{validate, CheckKind, CheckOptions, ValidationReport, Validator};
