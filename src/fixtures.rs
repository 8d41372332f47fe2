//! Shared diagrams for the unit tests.
use crate::store::{ComponentSpec, Diagram, DiagramDescription, PortSpec};

/// Four inputs, seven outputs, six components. Every check passes.
pub(crate) const REFERENCE_JSON: &str = r#"{
  "mission-id": "futon-reference",
  "state": "greenfield",
  "inputs": [
    {"id": "I-request", "name": "Operator request", "type": "request", "source": "operator", "timescale": "social"},
    {"id": "I-evidence", "name": "Field evidence", "type": "evidence", "source": "archive", "timescale": "fast"},
    {"id": "I-patterns", "name": "Pattern library", "type": "pattern-library", "source": "library", "constraint": true, "timescale": "slow"},
    {"id": "I-budget", "name": "Budget envelope", "type": "budget", "source": "steward", "constraint": true, "timescale": "glacial"}
  ],
  "outputs": [
    {"id": "O-plan", "name": "Plan", "type": "plan", "consumer": "operator", "spec-ref": "M-1.1"},
    {"id": "O-rationale", "name": "Rationale", "type": "rationale", "consumer": "reviewer", "spec-ref": "M-1.2"},
    {"id": "O-findings", "name": "Findings", "type": "finding", "consumer": "reviewer", "spec-ref": "M-2.1"},
    {"id": "O-digest", "type": "digest-record", "consumer": "archive", "spec-ref": "M-2.2"},
    {"id": "O-audit", "name": "Audit log", "type": "audit-log", "consumer": "steward", "spec-ref": "M-3.1"},
    {"id": "O-report", "name": "Report", "type": "report", "consumer": "operator", "spec-ref": "M-4.1"},
    {"id": "O-action", "name": "Next action", "type": "action", "consumer": "operator", "spec-ref": "M-4.2"}
  ],
  "components": [
    {"id": "C-intake", "accepts": ["request"], "produces": ["task"], "timescale": "fast"},
    {"id": "C-planner", "accepts": ["task", "pattern-library"], "produces": ["plan", "rationale"], "timescale": "medium"},
    {"id": "C-analyzer", "inputs": ["evidence"], "outputs": ["finding", "evidence-digest"], "timescale": "fast"},
    {"id": "C-archiver", "inputs": ["evidence-digest"], "outputs": ["digest-record"]},
    {"id": "C-auditor", "accepts": ["pattern-library", "budget", "plan"], "produces": ["audit-log"], "timescale": "slow"},
    {"id": "C-reporter", "accepts": ["finding", "plan"], "produces": ["report", "action"], "timescale": "fast"}
  ],
  "edges": [
    {"from": "I-request", "to": "C-intake", "type": "request"},
    {"from": "C-intake", "to": "C-planner", "type": "task"},
    {"from": "I-patterns", "to": "C-planner", "type": "pattern-library"},
    {"from": "C-planner", "to": "O-plan", "type": "plan"},
    {"from": "C-planner", "to": "O-rationale", "type": "rationale"},
    {"from": "I-evidence", "to": "C-analyzer", "type": "evidence"},
    {"from": "C-analyzer", "to": "O-findings", "type": "finding"},
    {"from": "C-analyzer", "to": "C-archiver", "type": "evidence-digest"},
    {"from": "C-archiver", "to": "O-digest", "type": "digest-record"},
    {"from": "I-patterns", "to": "C-auditor", "type": "pattern-library"},
    {"from": "I-budget", "to": "C-auditor", "type": "budget"},
    {"from": "C-planner", "to": "C-auditor", "type": "plan"},
    {"from": "C-auditor", "to": "O-audit", "type": "audit-log"},
    {"from": "C-analyzer", "to": "C-reporter", "type": "finding"},
    {"from": "C-planner", "to": "C-reporter", "type": "plan"},
    {"from": "C-reporter", "to": "O-report", "type": "report"},
    {"from": "C-reporter", "to": "O-action", "type": "action"}
  ]
}"#;

pub(crate) fn reference_description() -> DiagramDescription {
    serde_json::from_str(REFERENCE_JSON).expect("reference fixture is valid JSON")
}

pub(crate) fn reference() -> Diagram {
    Diagram::build(reference_description()).expect("reference fixture builds")
}

/// Every input reaches every output only through `C-policy`.
pub(crate) fn policy_bottleneck() -> Diagram {
    let desc = DiagramDescription::new("bottleneck")
        .input(PortSpec::new("I-signal", "signal"))
        .input(PortSpec::new("I-context", "context"))
        .output(PortSpec::new("O-command", "command").spec_ref("B-1"))
        .output(PortSpec::new("O-log", "log").spec_ref("B-2"))
        .component(ComponentSpec::new("C-sense-a").accepts(["signal"]).produces(["observation"]))
        .component(ComponentSpec::new("C-sense-b").accepts(["signal"]).produces(["observation"]))
        .component(ComponentSpec::new("C-policy").accepts(["observation", "context"]).produces(["decision"]))
        .component(ComponentSpec::new("C-act").accepts(["decision"]).produces(["command"]))
        .component(ComponentSpec::new("C-record").accepts(["decision"]).produces(["log"]))
        .edge("I-signal", "C-sense-a", "signal")
        .edge("I-signal", "C-sense-b", "signal")
        .edge("C-sense-a", "C-policy", "observation")
        .edge("C-sense-b", "C-policy", "observation")
        .edge("I-context", "C-policy", "context")
        .edge("C-policy", "C-act", "decision")
        .edge("C-policy", "C-record", "decision")
        .edge("C-act", "O-command", "command")
        .edge("C-record", "O-log", "log");
    Diagram::build(desc).expect("bottleneck fixture builds")
}

/// A single input → component → output chain typed `from` → `to`.
pub(crate) fn pipeline(mission: &str, from: &str, to: &str) -> Diagram {
    let desc = DiagramDescription::new(mission)
        .input(PortSpec::new("I-in", from))
        .output(PortSpec::new("O-out", to).spec_ref(format!("{}-1", mission)))
        .component(ComponentSpec::new("C-step").accepts([from]).produces([to]))
        .edge("I-in", "C-step", from)
        .edge("C-step", "O-out", to);
    Diagram::build(desc).expect("pipeline fixture builds")
}
