//! Every output must trace to an external specification.
use crate::store::Diagram;
use crate::validation::report::{CheckResult, Violations};

pub fn check_spec_coverage(diagram: &Diagram) -> CheckResult {
    let unspecified = diagram
        .outputs()
        .iter()
        .filter(|port| !port.has_spec_ref())
        .map(|port| port.id.clone())
        .collect();

    Violations::UnspecifiedOutputs(unspecified).into()
}
