//! One module per check. Each rule is a pure function of the diagram.
pub mod closure;
pub mod completeness;
pub mod coverage;
pub mod exogeneity;
pub mod orphans;
pub mod spec_refs;
pub mod timescale;
pub mod typing;

use crate::analysis::topology;
use crate::store::Diagram;
use petgraph::graph::NodeIndex;

pub(crate) fn input_nodes(diagram: &Diagram) -> Vec<NodeIndex> {
    topology::nodes_for(diagram, diagram.inputs().iter().map(|p| p.id.as_str()))
}

pub(crate) fn output_nodes(diagram: &Diagram) -> Vec<NodeIndex> {
    topology::nodes_for(diagram, diagram.outputs().iter().map(|p| p.id.as_str()))
}
