use crate::store::Diagram;
use crate::validation::validate;
use serde::Serialize;
use std::fmt;

/// A compact view of a diagram. `all_valid` comes from a fresh validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Summary {
    pub mission_id: String,
    pub state: String,
    pub inputs: usize,
    pub outputs: usize,
    pub components: usize,
    pub edges: usize,
    pub all_valid: bool,
}

pub fn summarize(diagram: &Diagram) -> Summary {
    Summary {
        mission_id: diagram.mission_id().to_string(),
        state: diagram.state().to_string(),
        inputs: diagram.inputs().len(),
        outputs: diagram.outputs().len(),
        components: diagram.components().len(),
        edges: diagram.edges().len(),
        all_valid: validate(diagram).all_valid,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {} inputs, {} outputs, {} components, {} edges, {}",
            self.mission_id,
            self.state,
            self.inputs,
            self.outputs,
            self.components,
            self.edges,
            if self.all_valid { "valid" } else { "INVALID" }
        )
    }
}
