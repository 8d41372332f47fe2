//! Every component must lie on some path that ends at an output.
use crate::analysis::topology;
use crate::store::Diagram;
use crate::validation::report::{CheckResult, Violations};

pub fn check_coverage(diagram: &Diagram) -> CheckResult {
    let feeding = topology::upstream_from(diagram, &super::output_nodes(diagram), None);

    let dead = diagram
        .components()
        .iter()
        .filter(|c| diagram.node(&c.id).map_or(true, |n| !feeding.contains(&n)))
        .map(|c| c.id.clone())
        .collect();

    Violations::DeadComponents(dead).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::store::{ComponentSpec, DiagramDescription, PortSpec};

    #[test]
    fn test_dead_end_component_is_reported() {
        let desc = DiagramDescription::new("dead-end")
            .input(PortSpec::new("I-a", "a"))
            .output(PortSpec::new("O-b", "b"))
            .component(ComponentSpec::new("C-live").accepts(["a"]).produces(["b"]))
            .component(ComponentSpec::new("C-sink").accepts(["a"]).produces(["c"]))
            .component(ComponentSpec::new("C-feeds-sink").accepts(["a"]).produces(["a"]))
            .edge("I-a", "C-live", "a")
            .edge("C-live", "O-b", "b")
            .edge("I-a", "C-feeds-sink", "a")
            .edge("C-feeds-sink", "C-sink", "a");
        let d = Diagram::build(desc).unwrap();

        let result = check_coverage(&d);
        assert!(!result.valid);
        assert_eq!(result.violations.ids(), vec!["C-sink", "C-feeds-sink"]);
    }

    #[test]
    fn test_reference_has_no_dead_components() {
        assert!(check_coverage(&fixtures::reference()).valid);
    }
}
