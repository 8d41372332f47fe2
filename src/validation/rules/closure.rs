//! Single-point-of-failure detection by simulated component removal.
use crate::analysis::topology;
use crate::store::Diagram;
use crate::validation::report::{CheckResult, Violations};
use petgraph::graph::NodeIndex;
use rayon::prelude::*;

pub fn check_closure(diagram: &Diagram) -> CheckResult {
    let sources = super::input_nodes(diagram);
    let sinks = super::output_nodes(diagram);

    let reaches_any_output = |removed: Option<NodeIndex>| {
        let reached = topology::downstream_from(diagram, &sources, removed);
        sinks.iter().any(|s| reached.contains(s))
    };

    // Nothing connected means nothing to disconnect.
    if !reaches_any_output(None) {
        return Violations::SinglePointsOfFailure(Vec::new()).into();
    }

    let spofs = diagram
        .components()
        .par_iter()
        .filter(|c| diagram.node(&c.id).is_some_and(|n| !reaches_any_output(Some(n))))
        .map(|c| c.id.clone())
        .collect();

    Violations::SinglePointsOfFailure(spofs).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::store::{ComponentSpec, DiagramDescription, PortSpec};

    #[test]
    fn test_policy_bridge_is_the_only_spof() {
        let result = check_closure(&fixtures::policy_bottleneck());
        assert!(!result.valid);
        assert_eq!(result.violations, Violations::SinglePointsOfFailure(vec!["C-policy".into()]));
    }

    #[test]
    fn test_redundant_reference_has_no_spof() {
        assert!(check_closure(&fixtures::reference()).valid);
    }

    #[test]
    fn test_chain_makes_every_stage_a_spof() {
        let result = check_closure(&fixtures::pipeline("p", "raw", "clean"));
        assert_eq!(result.violations.ids(), vec!["C-step"]);
    }

    #[test]
    fn test_disconnected_diagram_reports_no_spof() {
        let desc = DiagramDescription::new("apart")
            .input(PortSpec::new("I-a", "a"))
            .output(PortSpec::new("O-b", "b"))
            .component(ComponentSpec::new("C-x").accepts(["a"]).produces(["a"]))
            .edge("I-a", "C-x", "a");
        assert!(check_closure(&Diagram::build(desc).unwrap()).valid);
    }
}
