//! Action outputs must not reach constraint inputs except through the environment.
use crate::analysis::topology;
use crate::store::{DataType, Diagram, Direction};
use crate::validation::options::CheckOptions;
use crate::validation::report::{CheckResult, FeedbackPath, Violations};

pub fn check_exogeneity(diagram: &Diagram, options: &CheckOptions) -> CheckResult {
    let mut feedback = Vec::new();

    for (action_id, action_type) in action_sources(diagram, options) {
        let Some(start) = diagram.node(action_id) else { continue };

        let paths = topology::paths_avoiding(
            diagram,
            start,
            |n| options.is_environment(diagram.id_at(n)),
            |n| is_governing(diagram, diagram.id_at(n)),
        );

        for path in paths {
            let ids: Vec<String> = path.iter().map(|&n| diagram.id_at(n).to_string()).collect();
            feedback.push(FeedbackPath {
                action_output: action_id.to_string(),
                action_type: action_type.clone(),
                constraint_input: ids.last().cloned().unwrap_or_default(),
                path: ids,
            });
        }
    }

    Violations::FeedbackPaths(feedback).into()
}

/// Action-typed outputs, including outputs that composition wired into another diagram.
fn action_sources<'d>(diagram: &'d Diagram, options: &CheckOptions) -> Vec<(&'d str, &'d DataType)> {
    let ports = diagram
        .outputs()
        .iter()
        .filter(|p| options.is_action(&p.data_type))
        .map(|p| (p.id.as_str(), &p.data_type));
    let wires = diagram
        .components()
        .iter()
        .filter(|c| c.wire == Some(Direction::Output))
        .filter_map(|c| c.produces.iter().find(|t| options.is_action(t)).map(|t| (c.id.as_str(), t)));
    ports.chain(wires).collect()
}

/// Constraint inputs, and the wires standing in for them after composition.
fn is_governing(diagram: &Diagram, id: &str) -> bool {
    match diagram.port(id) {
        Some(port) => port.direction == Direction::Input && port.constraint,
        None => diagram.component(id).is_some_and(|c| c.constraint),
    }
}
