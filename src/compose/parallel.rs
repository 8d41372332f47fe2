//! Parallel composition: two diagrams running side by side over shared constraints.
use super::assembly::{merged_state, prefixes, Assembly, Placement};
use super::error::{CompositionError, SharedAttribute};
use super::serial::{composable, PortMatch};
use crate::store::{Diagram, Direction, Port};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Runs `a` and `b` side by side.
///
/// Constraint inputs declared by both diagrams under the same id are merged
/// into one boundary port; they must agree on type, constraint flag and
/// timescale or composition fails. Every other id is prefixed with its
/// mission, numbered when both sides run the same mission. Type-compatible outputs are wired to inputs in both directions.
pub fn compose_parallel(a: &Diagram, b: &Diagram) -> Result<Diagram, CompositionError> {
    let shared = shared_constraints(a, b)?;
    let (left_prefix, right_prefix) = prefixes(a, b);

    let unshared = |m: &PortMatch| !shared.contains(&m.input);
    let forward: Vec<PortMatch> = composable(a, b).into_iter().filter(unshared).collect();
    let backward: Vec<PortMatch> = composable(b, a).into_iter().filter(unshared).collect();

    let left = Placement {
        diagram: a,
        prefix: left_prefix,
        shared: &shared,
        wired: forward
            .iter()
            .map(|m| m.output.as_str())
            .chain(backward.iter().map(|m| m.input.as_str()))
            .collect(),
        skip_shared: false,
    };
    let right = Placement {
        diagram: b,
        prefix: right_prefix,
        shared: &shared,
        wired: forward
            .iter()
            .map(|m| m.input.as_str())
            .chain(backward.iter().map(|m| m.output.as_str()))
            .collect(),
        skip_shared: true,
    };

    let mut assembly = Assembly::new(format!("{}∥{}", a.mission_id(), b.mission_id()), merged_state(a, b));
    assembly.place(&left);
    assembly.place(&right);
    for m in &forward {
        assembly.connect(left.rename(&m.output), right.rename(&m.input), &m.data_type);
    }
    for m in &backward {
        assembly.connect(right.rename(&m.output), left.rename(&m.input), &m.data_type);
    }

    let composed = assembly.build()?;
    debug!(
        mission = composed.mission_id(),
        shared = shared.len(),
        wires = forward.len() + backward.len(),
        "parallel composition built"
    );
    Ok(composed)
}

/// Same-id inputs where either side is a constraint. Any disagreement is a contract violation.
fn shared_constraints(a: &Diagram, b: &Diagram) -> Result<HashSet<String>, CompositionError> {
    let mut shared = HashSet::new();

    for left in a.inputs() {
        let Some(right) = b.port(&left.id).filter(|p| p.direction == Direction::Input) else {
            continue;
        };
        if !(left.constraint || right.constraint) {
            continue;
        }
        if let Some((attribute, l, r)) = disagreement(left, right) {
            warn!(port = %left.id, %attribute, left = %l, right = %r, "shared port contract violation");
            return Err(CompositionError::ContractViolation { port: left.id.clone(), attribute, left: l, right: r });
        }
        shared.insert(left.id.clone());
    }

    Ok(shared)
}

fn disagreement(left: &Port, right: &Port) -> Option<(SharedAttribute, String, String)> {
    let show = |p: &Port| p.timescale.as_ref().map_or_else(|| "none".to_string(), |t| t.to_string());

    if left.data_type != right.data_type {
        Some((SharedAttribute::DataType, left.data_type.to_string(), right.data_type.to_string()))
    } else if left.constraint != right.constraint {
        Some((SharedAttribute::Constraint, left.constraint.to_string(), right.constraint.to_string()))
    } else if left.timescale != right.timescale {
        Some((SharedAttribute::Timescale, show(left), show(right)))
    } else {
        None
    }
}
