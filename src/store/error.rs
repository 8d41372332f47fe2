//! Construction errors. A diagram that fails here is never represented.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("{element} is missing required field '{field}'")]
    MissingField { element: String, field: &'static str },
    #[error("Duplicate id '{0}'")]
    DuplicateId(String),
    #[error("Edge #{edge} references unknown {end} '{id}'")]
    UnknownEndpoint { edge: usize, end: &'static str, id: String },
    #[error("Component '{component}' declares both shapes for '{field}'")]
    ConflictingShape { component: String, field: &'static str },
    #[error("Malformed description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
