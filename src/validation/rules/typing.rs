//! Every edge's type must be producible by its source and acceptable by its destination.
use crate::store::{DataType, Diagram, Edge};
use crate::validation::report::{CheckResult, TypeError, Violations};

pub fn check_type_safety(diagram: &Diagram) -> CheckResult {
    let errors = diagram
        .edges()
        .iter()
        .filter_map(|edge| check_edge(diagram, edge))
        .collect();

    Violations::TypeErrors(errors).into()
}

fn check_edge(diagram: &Diagram, edge: &Edge) -> Option<TypeError> {
    let produced = produced_by(diagram, &edge.from);
    let expected = accepted_by(diagram, &edge.to);

    if produced.contains(&&edge.data_type) && expected.contains(&&edge.data_type) {
        return None;
    }

    Some(TypeError {
        edge: edge.clone(),
        message: format!(
            "{} → {} carries {}: source produces {}, destination expects {}",
            edge.from,
            edge.to,
            edge.data_type,
            join(&produced),
            join(&expected)
        ),
    })
}

/// A port offers its own type; a component offers what it produces.
fn produced_by<'a>(diagram: &'a Diagram, id: &str) -> Vec<&'a DataType> {
    match diagram.port(id) {
        Some(port) => vec![&port.data_type],
        None => diagram.component(id).map(|c| c.produces.iter().collect()).unwrap_or_default(),
    }
}

fn accepted_by<'a>(diagram: &'a Diagram, id: &str) -> Vec<&'a DataType> {
    match diagram.port(id) {
        Some(port) => vec![&port.data_type],
        None => diagram.component(id).map(|c| c.accepts.iter().collect()).unwrap_or_default(),
    }
}

fn join(types: &[&DataType]) -> String {
    if types.is_empty() {
        return "nothing".to_string();
    }
    types.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::store::{ComponentSpec, DiagramDescription, PortSpec};

    fn mistyped() -> Diagram {
        let desc = DiagramDescription::new("mistyped")
            .input(PortSpec::new("I-config", "config"))
            .output(PortSpec::new("O-proof", "proof-path"))
            .component(ComponentSpec::new("C-prover").accepts(["proof-path"]).produces(["proof-path"]))
            .edge("I-config", "C-prover", "config")
            .edge("C-prover", "O-proof", "proof-path");
        Diagram::build(desc).unwrap()
    }

    #[test]
    fn test_destination_mismatch_is_described() {
        let result = check_type_safety(&mistyped());
        assert!(!result.valid);

        let Violations::TypeErrors(errors) = &result.violations else {
            panic!("Wrong violation kind: {:?}", result.violations);
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].edge.to, "C-prover");
        assert_eq!(
            errors[0].message,
            "I-config → C-prover carries config: source produces config, destination expects proof-path"
        );
    }

    #[test]
    fn test_source_cannot_produce_edge_type() {
        let desc = DiagramDescription::new("overclaim")
            .input(PortSpec::new("I-a", "a"))
            .output(PortSpec::new("O-b", "b"))
            .component(ComponentSpec::new("C-x").accepts(["a"]))
            .edge("I-a", "C-x", "a")
            .edge("C-x", "O-b", "b");
        let d = Diagram::build(desc).unwrap();

        let Violations::TypeErrors(errors) = check_type_safety(&d).violations else {
            panic!("Wrong violation kind");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.ends_with("source produces nothing, destination expects b"));
    }

    #[test]
    fn test_edge_type_must_match_both_ends() {
        // Ports agree with each other but the edge claims another type.
        let desc = DiagramDescription::new("relabel")
            .input(PortSpec::new("I-a", "a"))
            .output(PortSpec::new("O-a", "a"))
            .edge("I-a", "O-a", "b");
        let d = Diagram::build(desc).unwrap();
        assert_eq!(check_type_safety(&d).violations.len(), 1);
    }

    #[test]
    fn test_reference_is_well_typed() {
        assert!(check_type_safety(&fixtures::reference()).valid);
    }
}
