//! Composition failures. An empty serial match is not one of them.
use crate::store::BuildError;
use std::fmt;
use thiserror::Error;

/// The attribute two same-id ports disagree on during parallel composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedAttribute {
    DataType,
    Constraint,
    Timescale,
}

impl fmt::Display for SharedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SharedAttribute::DataType => "type",
            SharedAttribute::Constraint => "constraint",
            SharedAttribute::Timescale => "timescale",
        })
    }
}

#[derive(Error, Debug)]
pub enum CompositionError {
    #[error("Contract violation on shared port '{port}': {attribute} differs ({left} vs {right})")]
    ContractViolation {
        port: String,
        attribute: SharedAttribute,
        left: String,
        right: String,
    },
    #[error("Composed diagram is malformed: {0}")]
    Build(#[from] BuildError),
}
