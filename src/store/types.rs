use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Joins a mission id and a local id when diagrams are composed (`alpha/I-patterns`).
pub const ID_SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataType(pub String);

impl DataType {
    pub fn new(tag: impl Into<String>) -> Self { Self(tag.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// How fast a value may legitimately change. Ordering comes from `CheckOptions`,
/// not from the tag itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timescale(pub String);

impl Timescale {
    pub fn new(tag: impl Into<String>) -> Self { Self(tag.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Timescale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Input,
    Output,
}

/// What an identifier in the diagram refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Input,
    Output,
    Component,
}

/// A typed boundary interface point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Port {
    pub id: String,
    pub name: String,
    pub data_type: DataType,
    pub direction: Direction,
    /// Traceability reference; required on outputs by the spec-coverage check.
    pub spec_ref: Option<String>,
    /// Where an input's value originates.
    pub source: Option<String>,
    /// Who consumes an output.
    pub consumer: Option<String>,
    pub constraint: bool,
    pub timescale: Option<Timescale>,
}

impl Port {
    pub fn has_spec_ref(&self) -> bool {
        self.spec_ref.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// A processing node, normalized to accepts/produces regardless of how it was declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Component {
    pub id: String,
    pub name: String,
    pub accepts: BTreeSet<DataType>,
    pub produces: BTreeSet<DataType>,
    pub timescale: Option<Timescale>,
    /// Set when the component holds constraint state, as a matched constraint input does after composition.
    pub constraint: bool,
    /// The boundary role this component had before composition turned it into a wire.
    pub wire: Option<Direction>,
}

impl Component {
    pub fn is_wire(&self) -> bool { self.wire.is_some() }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} [{}]", self.from, self.to, self.data_type)
    }
}
