//! Validation results. Findings are data, never errors.
use crate::store::{DataType, Edge, Timescale};
use serde::Serialize;
use std::fmt;

/// The eight checks, in the order `validate` runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Completeness,
    Coverage,
    NoOrphanInputs,
    TypeSafety,
    SpecCoverage,
    TimescaleOrdering,
    Exogeneity,
    CompositionalClosure,
}

impl CheckKind {
    pub const ALL: [CheckKind; 8] = [
        CheckKind::Completeness,
        CheckKind::Coverage,
        CheckKind::NoOrphanInputs,
        CheckKind::TypeSafety,
        CheckKind::SpecCoverage,
        CheckKind::TimescaleOrdering,
        CheckKind::Exogeneity,
        CheckKind::CompositionalClosure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Completeness => "completeness",
            CheckKind::Coverage => "coverage",
            CheckKind::NoOrphanInputs => "no-orphan-inputs",
            CheckKind::TypeSafety => "type-safety",
            CheckKind::SpecCoverage => "spec-coverage",
            CheckKind::TimescaleOrdering => "timescale-ordering",
            CheckKind::Exogeneity => "exogeneity",
            CheckKind::CompositionalClosure => "compositional-closure",
        }
    }

    /// Diagnostic checks are always reported but callers may choose not to gate on them.
    pub fn is_advisory(&self) -> bool {
        matches!(self, CheckKind::CompositionalClosure)
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// An edge whose declared type the source cannot produce or the destination cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeError {
    pub edge: Edge,
    pub message: String,
}

/// An edge letting a faster node write into a slower constraint port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TimescaleViolation {
    pub edge: Edge,
    pub source_timescale: Timescale,
    pub target_timescale: Timescale,
}

/// A path from an action output back into a constraint input that bypasses the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeedbackPath {
    pub action_output: String,
    pub action_type: DataType,
    pub constraint_input: String,
    pub path: Vec<String>,
}

/// Per-check violation lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "kebab-case")]
pub enum Violations {
    UnreachableOutputs(Vec<String>),
    DeadComponents(Vec<String>),
    OrphanInputs(Vec<String>),
    TypeErrors(Vec<TypeError>),
    UnspecifiedOutputs(Vec<String>),
    TimescaleViolations(Vec<TimescaleViolation>),
    FeedbackPaths(Vec<FeedbackPath>),
    SinglePointsOfFailure(Vec<String>),
}

impl Violations {
    pub fn check(&self) -> CheckKind {
        match self {
            Violations::UnreachableOutputs(_) => CheckKind::Completeness,
            Violations::DeadComponents(_) => CheckKind::Coverage,
            Violations::OrphanInputs(_) => CheckKind::NoOrphanInputs,
            Violations::TypeErrors(_) => CheckKind::TypeSafety,
            Violations::UnspecifiedOutputs(_) => CheckKind::SpecCoverage,
            Violations::TimescaleViolations(_) => CheckKind::TimescaleOrdering,
            Violations::FeedbackPaths(_) => CheckKind::Exogeneity,
            Violations::SinglePointsOfFailure(_) => CheckKind::CompositionalClosure,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Violations::UnreachableOutputs(v)
            | Violations::DeadComponents(v)
            | Violations::OrphanInputs(v)
            | Violations::UnspecifiedOutputs(v)
            | Violations::SinglePointsOfFailure(v) => v.len(),
            Violations::TypeErrors(v) => v.len(),
            Violations::TimescaleViolations(v) => v.len(),
            Violations::FeedbackPaths(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// The identifiers each violation points at: node ids, or the source of an offending edge/path.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Violations::UnreachableOutputs(v)
            | Violations::DeadComponents(v)
            | Violations::OrphanInputs(v)
            | Violations::UnspecifiedOutputs(v)
            | Violations::SinglePointsOfFailure(v) => v.iter().map(String::as_str).collect(),
            Violations::TypeErrors(v) => v.iter().map(|e| e.edge.from.as_str()).collect(),
            Violations::TimescaleViolations(v) => v.iter().map(|e| e.edge.from.as_str()).collect(),
            Violations::FeedbackPaths(v) => v.iter().map(|p| p.action_output.as_str()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub check: CheckKind,
    pub valid: bool,
    pub violations: Violations,
}

impl From<Violations> for CheckResult {
    fn from(violations: Violations) -> Self {
        Self { check: violations.check(), valid: violations.is_empty(), violations }
    }
}

/// The outcome of running every check against one diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ValidationReport {
    /// AND of every individual result, advisory checks included.
    pub all_valid: bool,
    pub results: Vec<CheckResult>,
}

impl ValidationReport {
    pub(crate) fn new(results: Vec<CheckResult>) -> Self {
        Self { all_valid: results.iter().all(|r| r.valid), results }
    }

    pub fn result(&self, check: CheckKind) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.check == check)
    }

    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.valid)
    }

    /// Like `all_valid`, but ignoring advisory checks.
    pub fn gating_valid(&self) -> bool {
        self.results.iter().all(|r| r.valid || r.check.is_advisory())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
