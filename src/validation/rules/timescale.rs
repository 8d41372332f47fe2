//! Constraints flow from slow to fast; nothing faster may write into a slower constraint.
use crate::store::{Component, Diagram, Timescale};
use crate::validation::options::TimescaleOrder;
use crate::validation::report::{CheckResult, TimescaleViolation, Violations};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::warn;

pub fn check_timescale_ordering(diagram: &Diagram, order: &TimescaleOrder) -> CheckResult {
    let mut violations = Vec::new();

    for edge in diagram.edges() {
        if !diagram.is_constraint(&edge.to) {
            continue;
        }
        // Untagged endpoints are never inferred.
        let Some(target_ts) = diagram.timescale_of(&edge.to) else { continue };

        let mut fastest: Option<&Timescale> = None;
        for source_ts in writer_timescales(diagram, &edge.from) {
            match order.compare(source_ts, target_ts) {
                Some(Ordering::Less) => {
                    if fastest.map_or(true, |f| order.is_faster(source_ts, f)) {
                        fastest = Some(source_ts);
                    }
                }
                Some(_) => {}
                None => warn!(%edge, source = %source_ts, target = %target_ts, "timescale outside configured order"),
            }
        }

        if let Some(source_ts) = fastest {
            violations.push(TimescaleViolation {
                edge: edge.clone(),
                source_timescale: source_ts.clone(),
                target_timescale: target_ts.clone(),
            });
        }
    }

    Violations::TimescaleViolations(violations).into()
}

/// Timescales writing through `id`. An untagged wire passes on whatever feeds it.
fn writer_timescales<'d>(diagram: &'d Diagram, id: &'d str) -> Vec<&'d Timescale> {
    let mut found = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![id];

    while let Some(current) = stack.pop() {
        if !seen.insert(current) {
            continue;
        }
        match diagram.timescale_of(current) {
            Some(ts) => found.push(ts),
            None if diagram.component(current).is_some_and(Component::is_wire) => {
                stack.extend(diagram.incoming(current).map(|e| e.from.as_str()));
            }
            None => {}
        }
    }
    found
}
