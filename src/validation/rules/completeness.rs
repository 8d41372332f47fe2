//! Every output must be reachable from some input.
use crate::analysis::topology;
use crate::store::Diagram;
use crate::validation::report::{CheckResult, Violations};

pub fn check_completeness(diagram: &Diagram) -> CheckResult {
    let reached = topology::downstream_from(diagram, &super::input_nodes(diagram), None);

    let unreachable = diagram
        .outputs()
        .iter()
        .filter(|port| diagram.node(&port.id).map_or(true, |n| !reached.contains(&n)))
        .map(|port| port.id.clone())
        .collect();

    Violations::UnreachableOutputs(unreachable).into()
}
