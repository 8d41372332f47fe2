//! Serial composition: A's outputs feed B's inputs.
use super::assembly::{merged_state, prefixes, Assembly, Placement};
use super::error::CompositionError;
use crate::store::{DataType, Diagram};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// An output of one diagram whose type matches an input of another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PortMatch {
    pub output: String,
    pub input: String,
    pub data_type: DataType,
}

/// Every (output of `a`, input of `b`) pair with equal types, in declaration order.
pub fn composable(a: &Diagram, b: &Diagram) -> Vec<PortMatch> {
    a.outputs()
        .iter()
        .flat_map(|out| {
            b.inputs()
                .iter()
                .filter(move |inp| inp.data_type == out.data_type)
                .map(move |inp| PortMatch {
                    output: out.id.clone(),
                    input: inp.id.clone(),
                    data_type: out.data_type.clone(),
                })
        })
        .collect()
}

/// Pipes `a` into `b`.
///
/// Returns `Ok(None)` when no port pair matches: unrelated diagrams are a
/// legitimate outcome, not an error. Neither input is modified.
pub fn compose(a: &Diagram, b: &Diagram) -> Result<Option<Diagram>, CompositionError> {
    let matches = composable(a, b);
    if matches.is_empty() {
        debug!(left = a.mission_id(), right = b.mission_id(), "no matching ports, nothing to compose");
        return Ok(None);
    }

    let none = HashSet::new();
    let (left_prefix, right_prefix) = prefixes(a, b);
    let left = Placement {
        diagram: a,
        prefix: left_prefix,
        shared: &none,
        wired: matches.iter().map(|m| m.output.as_str()).collect(),
        skip_shared: false,
    };
    let right = Placement {
        diagram: b,
        prefix: right_prefix,
        shared: &none,
        wired: matches.iter().map(|m| m.input.as_str()).collect(),
        skip_shared: false,
    };

    let mut assembly = Assembly::new(format!("{}→{}", a.mission_id(), b.mission_id()), merged_state(a, b));
    assembly.place(&left);
    assembly.place(&right);
    for m in &matches {
        assembly.connect(left.rename(&m.output), right.rename(&m.input), &m.data_type);
    }

    let composed = assembly.build()?;
    debug!(mission = composed.mission_id(), wires = matches.len(), "serial composition built");
    Ok(Some(composed))
}
