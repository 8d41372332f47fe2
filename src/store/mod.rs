//! The diagram model: value types, serde descriptions and the built `Diagram`.
pub mod description;
pub mod error;
pub mod registry;
pub mod types;

pub use description::{ComponentSpec, DiagramDescription, EdgeSpec, PortSpec};
pub use error::BuildError;
pub use registry::{Diagram, Index, NodeRef};
pub use types::{Component, DataType, Direction, Edge, NodeKind, Port, Timescale, ID_SEPARATOR};
