//! registry.rs
//! The built diagram and its derived index (id sets, adjacency, petgraph view).

use super::description::{ComponentSpec, DiagramDescription, EdgeSpec, PortSpec};
use super::error::BuildError;
use super::types::{Component, DataType, Direction, Edge, NodeKind, Port, Timescale};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_STATE: &str = "active";

/// Locates a graph node in the diagram's port/component vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub kind: NodeKind,
    pub slot: usize,
}

/// Read-only cache derived from a diagram at construction. Never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Index {
    input_ids: BTreeSet<String>,
    output_ids: BTreeSet<String>,
    component_ids: BTreeSet<String>,
    all_ids: BTreeSet<String>,
    // Edge positions keyed by endpoint id.
    by_source: BTreeMap<String, Vec<usize>>,
    by_target: BTreeMap<String, Vec<usize>>,
    // Node weights locate the node; edge weights are positions in `Diagram::edges`.
    pub(crate) graph: DiGraph<NodeRef, usize>,
    pub(crate) nodes: HashMap<String, NodeIndex>,
}

impl Index {
    fn new(inputs: &[Port], outputs: &[Port], components: &[Component], edges: &[Edge]) -> Result<Self, BuildError> {
        let mut index = Self::default();

        // 1. Nodes, in declaration order: inputs, outputs, components.
        let declared = inputs.iter().map(|p| (p.id.as_str(), NodeKind::Input))
            .chain(outputs.iter().map(|p| (p.id.as_str(), NodeKind::Output)))
            .chain(components.iter().map(|c| (c.id.as_str(), NodeKind::Component)));

        let mut slots: HashMap<NodeKind, usize> = HashMap::new();
        for (id, kind) in declared {
            if !index.all_ids.insert(id.to_string()) {
                return Err(BuildError::DuplicateId(id.to_string()));
            }
            let slot = slots.entry(kind).or_insert(0);
            let node = index.graph.add_node(NodeRef { kind, slot: *slot });
            *slot += 1;
            index.nodes.insert(id.to_string(), node);

            let set = match kind {
                NodeKind::Input => &mut index.input_ids,
                NodeKind::Output => &mut index.output_ids,
                NodeKind::Component => &mut index.component_ids,
            };
            set.insert(id.to_string());
        }

        // 2. Edges, each endpoint must resolve.
        for (i, edge) in edges.iter().enumerate() {
            let from = *index.nodes.get(&edge.from).ok_or_else(|| BuildError::UnknownEndpoint {
                edge: i,
                end: "source",
                id: edge.from.clone(),
            })?;
            let to = *index.nodes.get(&edge.to).ok_or_else(|| BuildError::UnknownEndpoint {
                edge: i,
                end: "destination",
                id: edge.to.clone(),
            })?;
            index.graph.add_edge(from, to, i);
            index.by_source.entry(edge.from.clone()).or_default().push(i);
            index.by_target.entry(edge.to.clone()).or_default().push(i);
        }

        Ok(index)
    }

    pub fn input_ids(&self) -> &BTreeSet<String> { &self.input_ids }
    pub fn output_ids(&self) -> &BTreeSet<String> { &self.output_ids }
    pub fn component_ids(&self) -> &BTreeSet<String> { &self.component_ids }
    pub fn all_ids(&self) -> &BTreeSet<String> { &self.all_ids }

    /// Positions of the edges leaving `id`.
    pub fn outgoing(&self, id: &str) -> &[usize] {
        self.by_source.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Positions of the edges arriving at `id`.
    pub fn incoming(&self, id: &str) -> &[usize] {
        self.by_target.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A mission diagram: typed ports, components and edges, plus its index.
///
/// Diagrams are values. They are built once from a [`DiagramDescription`] and
/// never mutated; composition produces new diagrams.
#[derive(Debug, Clone)]
pub struct Diagram {
    mission_id: String,
    state: String,
    inputs: Vec<Port>,
    outputs: Vec<Port>,
    components: Vec<Component>,
    edges: Vec<Edge>,
    index: Index,
}

impl PartialEq for Diagram {
    // The index is derived, so equal contents imply equal indexes.
    fn eq(&self, other: &Self) -> bool {
        self.mission_id == other.mission_id
            && self.state == other.state
            && self.inputs == other.inputs
            && self.outputs == other.outputs
            && self.components == other.components
            && self.edges == other.edges
    }
}

impl Eq for Diagram {}

impl Diagram {
    /// Builds a diagram, rejecting malformed descriptions before any check runs.
    pub fn build(description: DiagramDescription) -> Result<Self, BuildError> {
        let DiagramDescription { mission_id, state, inputs, outputs, components, edges } = description;

        let mission_id = required(mission_id, || "diagram".to_string(), "mission-id")?;
        let state = state
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATE.to_string());

        let inputs = inputs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| port_from_spec(spec, Direction::Input, i))
            .collect::<Result<Vec<_>, _>>()?;
        let outputs = outputs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| port_from_spec(spec, Direction::Output, i))
            .collect::<Result<Vec<_>, _>>()?;
        let components = components
            .into_iter()
            .enumerate()
            .map(|(i, spec)| component_from_spec(spec, i))
            .collect::<Result<Vec<_>, _>>()?;
        let edges = edges
            .into_iter()
            .enumerate()
            .map(|(i, spec)| edge_from_spec(spec, i))
            .collect::<Result<Vec<_>, _>>()?;

        let index = Index::new(&inputs, &outputs, &components, &edges)?;

        debug!(
            mission = %mission_id,
            inputs = inputs.len(),
            outputs = outputs.len(),
            components = components.len(),
            edges = edges.len(),
            "diagram built"
        );

        Ok(Self { mission_id, state, inputs, outputs, components, edges, index })
    }

    pub fn from_json_str(json: &str) -> Result<Self, BuildError> {
        Self::build(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BuildError> {
        Self::build(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// The canonical description: components always in accepts/produces shape.
    pub fn to_description(&self) -> DiagramDescription {
        DiagramDescription {
            mission_id: self.mission_id.clone(),
            state: Some(self.state.clone()),
            inputs: self.inputs.iter().map(PortSpec::from).collect(),
            outputs: self.outputs.iter().map(PortSpec::from).collect(),
            components: self.components.iter().map(ComponentSpec::from).collect(),
            edges: self.edges.iter().map(EdgeSpec::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_description())
    }

    // --- Accessors ---
    pub fn mission_id(&self) -> &str { &self.mission_id }
    pub fn state(&self) -> &str { &self.state }
    pub fn inputs(&self) -> &[Port] { &self.inputs }
    pub fn outputs(&self) -> &[Port] { &self.outputs }
    pub fn components(&self) -> &[Component] { &self.components }
    pub fn edges(&self) -> &[Edge] { &self.edges }
    pub fn index(&self) -> &Index { &self.index }
    pub fn id_count(&self) -> usize { self.index.all_ids.len() }

    pub fn kind_of(&self, id: &str) -> Option<NodeKind> {
        self.index.nodes.get(id).map(|&n| self.index.graph[n].kind)
    }

    /// Input or output port with the given id.
    pub fn port(&self, id: &str) -> Option<&Port> {
        let node = self.index.graph[*self.index.nodes.get(id)?];
        match node.kind {
            NodeKind::Input => Some(&self.inputs[node.slot]),
            NodeKind::Output => Some(&self.outputs[node.slot]),
            NodeKind::Component => None,
        }
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        let node = self.index.graph[*self.index.nodes.get(id)?];
        match node.kind {
            NodeKind::Component => Some(&self.components[node.slot]),
            _ => None,
        }
    }

    /// Timescale tag of a port or component, if declared.
    pub fn timescale_of(&self, id: &str) -> Option<&Timescale> {
        match self.port(id) {
            Some(port) => port.timescale.as_ref(),
            None => self.component(id)?.timescale.as_ref(),
        }
    }

    /// Constraint-marked port, or a component carrying constraint state (a composed seam).
    pub fn is_constraint(&self, id: &str) -> bool {
        match self.port(id) {
            Some(port) => port.constraint,
            None => self.component(id).is_some_and(|c| c.constraint),
        }
    }

    pub fn outgoing(&self, id: &str) -> impl Iterator<Item = &Edge> + '_ {
        self.index.outgoing(id).iter().map(move |&i| &self.edges[i])
    }

    pub fn incoming(&self, id: &str) -> impl Iterator<Item = &Edge> + '_ {
        self.index.incoming(id).iter().map(move |&i| &self.edges[i])
    }

    // --- Graph helpers for the analysis modules ---
    pub(crate) fn node(&self, id: &str) -> Option<NodeIndex> {
        self.index.nodes.get(id).copied()
    }

    pub(crate) fn id_at(&self, node: NodeIndex) -> &str {
        let NodeRef { kind, slot } = self.index.graph[node];
        match kind {
            NodeKind::Input => &self.inputs[slot].id,
            NodeKind::Output => &self.outputs[slot].id,
            NodeKind::Component => &self.components[slot].id,
        }
    }

    pub(crate) fn graph(&self) -> &DiGraph<NodeRef, usize> { &self.index.graph }
}

fn required(value: String, element: impl FnOnce() -> String, field: &'static str) -> Result<String, BuildError> {
    if value.trim().is_empty() {
        Err(BuildError::MissingField { element: element(), field })
    } else {
        Ok(value)
    }
}

fn describe(kind: &str, position: usize, id: &str) -> String {
    if id.trim().is_empty() {
        format!("{} #{}", kind, position)
    } else {
        format!("{} '{}'", kind, id)
    }
}

fn port_from_spec(spec: PortSpec, direction: Direction, position: usize) -> Result<Port, BuildError> {
    let kind = match direction {
        Direction::Input => "input port",
        Direction::Output => "output port",
    };
    let element = describe(kind, position, &spec.id);
    let id = required(spec.id, || element.clone(), "id")?;
    let data_type = required(spec.data_type, || element.clone(), "type")?;

    Ok(Port {
        name: spec.name.unwrap_or_else(|| id.clone()),
        id,
        data_type: DataType(data_type),
        direction,
        spec_ref: spec.spec_ref,
        source: spec.source,
        consumer: spec.consumer,
        constraint: spec.constraint,
        timescale: spec.timescale.map(Timescale),
    })
}

fn component_from_spec(spec: ComponentSpec, position: usize) -> Result<Component, BuildError> {
    let element = describe("component", position, &spec.id);
    let id = required(spec.id, || element, "id")?;
    let accepts = normalize_shape(spec.accepts, spec.inputs, &id, "accepts")?;
    let produces = normalize_shape(spec.produces, spec.outputs, &id, "produces")?;

    Ok(Component {
        name: spec.name.unwrap_or_else(|| id.clone()),
        id,
        accepts,
        produces,
        timescale: spec.timescale.map(Timescale),
        constraint: spec.constraint,
        wire: spec.wire,
    })
}

/// Folds the two declaration shapes into one type set.
fn normalize_shape(
    canonical: Option<Vec<String>>,
    alternate: Option<Vec<String>>,
    component: &str,
    field: &'static str,
) -> Result<BTreeSet<DataType>, BuildError> {
    match (canonical, alternate) {
        (Some(_), Some(_)) => Err(BuildError::ConflictingShape { component: component.to_string(), field }),
        (Some(types), None) | (None, Some(types)) => Ok(types.into_iter().map(DataType).collect()),
        (None, None) => Ok(BTreeSet::new()),
    }
}

fn edge_from_spec(spec: EdgeSpec, position: usize) -> Result<Edge, BuildError> {
    let element = || format!("edge #{}", position);
    Ok(Edge {
        from: required(spec.from, element, "from")?,
        to: required(spec.to, element, "to")?,
        data_type: DataType(required(spec.data_type, element, "type")?),
    })
}
