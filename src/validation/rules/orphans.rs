//! Every input must feed something.
use crate::store::Diagram;
use crate::validation::report::{CheckResult, Violations};

pub fn check_orphan_inputs(diagram: &Diagram) -> CheckResult {
    let orphans = diagram
        .inputs()
        .iter()
        .filter(|port| diagram.index().outgoing(&port.id).is_empty())
        .map(|port| port.id.clone())
        .collect();

    Violations::OrphanInputs(orphans).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::store::{DiagramDescription, PortSpec};

    #[test]
    fn test_unwired_input_is_orphan() {
        let desc = DiagramDescription::new("orphan")
            .input(PortSpec::new("I-used", "a"))
            .input(PortSpec::new("I-unused", "a"))
            .output(PortSpec::new("O-a", "a"))
            .edge("I-used", "O-a", "a");
        let d = Diagram::build(desc).unwrap();

        assert_eq!(check_orphan_inputs(&d).violations, Violations::OrphanInputs(vec!["I-unused".into()]));
    }

    #[test]
    fn test_input_with_only_incoming_edges_is_orphan() {
        let desc = DiagramDescription::new("fed-back")
            .input(PortSpec::new("I-a", "a"))
            .output(PortSpec::new("O-a", "a"))
            .edge("O-a", "I-a", "a");
        let d = Diagram::build(desc).unwrap();
        assert!(!check_orphan_inputs(&d).valid);
    }

    #[test]
    fn test_reference_has_no_orphans() {
        assert!(check_orphan_inputs(&fixtures::reference()).valid);
    }
}
