//! Plain-data descriptions of a diagram, as produced by surrounding tooling.
//!
//! These mirror the wire shape (kebab-case keys) and are deliberately loose:
//! required fields default to empty so the builder can report exactly which
//! field is missing instead of a generic deserialization failure.

use super::types::{Component, Direction, Edge, Port};
use serde::{Deserialize, Serialize};

fn is_false(b: &bool) -> bool { !*b }

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiagramDescription {
    #[serde(default, alias = "id")]
    pub mission_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub inputs: Vec<PortSpec>,
    #[serde(default)]
    pub outputs: Vec<PortSpec>,
    #[serde(default)]
    pub components: Vec<ComponentSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl DiagramDescription {
    pub fn new(mission_id: impl Into<String>) -> Self {
        Self { mission_id: mission_id.into(), ..Default::default() }
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn input(mut self, port: PortSpec) -> Self {
        self.inputs.push(port);
        self
    }

    pub fn output(mut self, port: PortSpec) -> Self {
        self.outputs.push(port);
        self
    }

    pub fn component(mut self, component: ComponentSpec) -> Self {
        self.components.push(component);
        self
    }

    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, data_type: impl Into<String>) -> Self {
        self.edges.push(EdgeSpec::new(from, to, data_type));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PortSpec {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub constraint: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timescale: Option<String>,
}

impl PortSpec {
    pub fn new(id: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self { id: id.into(), data_type: data_type.into(), ..Default::default() }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn spec_ref(mut self, spec_ref: impl Into<String>) -> Self {
        self.spec_ref = Some(spec_ref.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn consumer(mut self, consumer: impl Into<String>) -> Self {
        self.consumer = Some(consumer.into());
        self
    }

    /// Marks the port as a constraint governed at `timescale`.
    pub fn constraint(mut self, timescale: impl Into<String>) -> Self {
        self.constraint = true;
        self.timescale = Some(timescale.into());
        self
    }

    pub fn timescale(mut self, timescale: impl Into<String>) -> Self {
        self.timescale = Some(timescale.into());
        self
    }
}

impl From<&Port> for PortSpec {
    fn from(port: &Port) -> Self {
        Self {
            id: port.id.clone(),
            name: Some(port.name.clone()),
            data_type: port.data_type.0.clone(),
            spec_ref: port.spec_ref.clone(),
            source: port.source.clone(),
            consumer: port.consumer.clone(),
            constraint: port.constraint,
            timescale: port.timescale.as_ref().map(|t| t.0.clone()),
        }
    }
}

/// A component in either declaration shape: `accepts`/`produces`, or `inputs`/`outputs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ComponentSpec {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timescale: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub constraint: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wire: Option<Direction>,
}

impl ComponentSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn accepts<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepts = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn produces<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.produces = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn timescale(mut self, timescale: impl Into<String>) -> Self {
        self.timescale = Some(timescale.into());
        self
    }
}

impl From<&Component> for ComponentSpec {
    fn from(component: &Component) -> Self {
        Self {
            id: component.id.clone(),
            name: Some(component.name.clone()),
            accepts: Some(component.accepts.iter().map(|t| t.0.clone()).collect()),
            produces: Some(component.produces.iter().map(|t| t.0.clone()).collect()),
            inputs: None,
            outputs: None,
            timescale: component.timescale.as_ref().map(|t| t.0.clone()),
            constraint: component.constraint,
            wire: component.wire,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, rename = "type")]
    pub data_type: String,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into(), data_type: data_type.into() }
    }
}

impl From<&Edge> for EdgeSpec {
    fn from(edge: &Edge) -> Self {
        Self::new(edge.from.clone(), edge.to.clone(), edge.data_type.0.clone())
    }
}
