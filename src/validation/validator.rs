//! The central validator that orchestrates the execution of all checks.
use super::options::CheckOptions;
use super::report::{CheckKind, CheckResult, ValidationReport};
use super::rules::{closure, completeness, coverage, exogeneity, orphans, spec_refs, timescale, typing};
use crate::store::Diagram;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Runs checks against one diagram.
///
/// Borrowing the diagram keeps validation side-effect free: the same diagram
/// can be validated, composed and rendered in any order.
pub struct Validator<'a> {
    diagram: &'a Diagram,
    options: Cow<'a, CheckOptions>,
}

impl<'a> Validator<'a> {
    pub fn new(diagram: &'a Diagram) -> Self {
        Self { diagram, options: Cow::Owned(CheckOptions::default()) }
    }

    pub fn with_options(diagram: &'a Diagram, options: &'a CheckOptions) -> Self {
        Self { diagram, options: Cow::Borrowed(options) }
    }

    pub fn run(&self, check: CheckKind) -> CheckResult {
        let d = self.diagram;
        let result = match check {
            CheckKind::Completeness => completeness::check_completeness(d),
            CheckKind::Coverage => coverage::check_coverage(d),
            CheckKind::NoOrphanInputs => orphans::check_orphan_inputs(d),
            CheckKind::TypeSafety => typing::check_type_safety(d),
            CheckKind::SpecCoverage => spec_refs::check_spec_coverage(d),
            CheckKind::TimescaleOrdering => timescale::check_timescale_ordering(d, &self.options.timescales),
            CheckKind::Exogeneity => exogeneity::check_exogeneity(d, &self.options),
            CheckKind::CompositionalClosure => closure::check_closure(d),
        };
        trace!(mission = d.mission_id(), %check, violations = result.violations.len(), "check finished");
        result
    }

    /// Executes every check.
    ///
    /// `all_valid` is the AND of all results; the per-check results say which
    /// invariant failed.
    pub fn validate(&self) -> ValidationReport {
        let report = ValidationReport::new(CheckKind::ALL.iter().map(|&c| self.run(c)).collect());

        let failed: Vec<&str> = report.failed().map(|r| r.check.name()).collect();
        debug!(mission = self.diagram.mission_id(), all_valid = report.all_valid, ?failed, "validation finished");
        report
    }
}

/// Validates with default options.
pub fn validate(diagram: &Diagram) -> ValidationReport {
    Validator::new(diagram).validate()
}
