//! Builds a composed description out of placed source diagrams.
use crate::store::{BuildError, ComponentSpec, DataType, Diagram, DiagramDescription, EdgeSpec, Port, PortSpec, ID_SEPARATOR};
use std::collections::HashSet;

pub(crate) const COMPOSITE_STATE: &str = "composite";

pub(crate) fn prefixed(mission: &str, id: &str) -> String {
    format!("{}{}{}", mission, ID_SEPARATOR, id)
}

/// Mission prefixes for the two sides. Two instances of one mission are numbered apart.
pub(crate) fn prefixes(a: &Diagram, b: &Diagram) -> (String, String) {
    if a.mission_id() == b.mission_id() {
        (format!("{}#1", a.mission_id()), format!("{}#2", b.mission_id()))
    } else {
        (a.mission_id().to_string(), b.mission_id().to_string())
    }
}

pub(crate) fn merged_state(a: &Diagram, b: &Diagram) -> String {
    if a.state() == b.state() {
        a.state().to_string()
    } else {
        COMPOSITE_STATE.to_string()
    }
}

/// How one source diagram's ids land in the composed diagram.
pub(crate) struct Placement<'a> {
    pub diagram: &'a Diagram,
    pub prefix: String,
    /// Ids kept verbatim instead of prefixed.
    pub shared: &'a HashSet<String>,
    /// Boundary ports that become internal wires.
    pub wired: HashSet<&'a str>,
    /// Leave shared ports out; another placement already contributed them.
    pub skip_shared: bool,
}

impl Placement<'_> {
    pub fn rename(&self, id: &str) -> String {
        if self.shared.contains(id) {
            id.to_string()
        } else {
            prefixed(&self.prefix, id)
        }
    }

    fn port_spec(&self, port: &Port) -> PortSpec {
        PortSpec { id: self.rename(&port.id), ..PortSpec::from(port) }
    }

    /// A matched port survives as a pass-through component so edges still resolve.
    /// It keeps the port's constraint flag, timescale and boundary role for the invariant checks.
    fn wire(&self, port: &Port) -> ComponentSpec {
        let data_type = vec![port.data_type.0.clone()];
        ComponentSpec {
            id: self.rename(&port.id),
            name: Some(format!("wire: {}", port.name)),
            accepts: Some(data_type.clone()),
            produces: Some(data_type),
            inputs: None,
            outputs: None,
            timescale: port.timescale.as_ref().map(|t| t.0.clone()),
            constraint: port.constraint,
            wire: Some(port.direction),
        }
    }
}

pub(crate) struct Assembly {
    description: DiagramDescription,
}

impl Assembly {
    pub fn new(mission_id: String, state: String) -> Self {
        Self { description: DiagramDescription::new(mission_id).state(state) }
    }

    pub fn place(&mut self, placement: &Placement<'_>) {
        let d = placement.diagram;
        let desc = &mut self.description;

        for port in d.inputs() {
            if placement.skip_shared && placement.shared.contains(&port.id) {
                continue;
            }
            if placement.wired.contains(port.id.as_str()) {
                desc.components.push(placement.wire(port));
            } else {
                desc.inputs.push(placement.port_spec(port));
            }
        }

        for port in d.outputs() {
            if placement.wired.contains(port.id.as_str()) {
                desc.components.push(placement.wire(port));
            } else {
                desc.outputs.push(placement.port_spec(port));
            }
        }

        for component in d.components() {
            desc.components.push(ComponentSpec {
                id: placement.rename(&component.id),
                ..ComponentSpec::from(component)
            });
        }

        for edge in d.edges() {
            desc.edges.push(EdgeSpec::new(
                placement.rename(&edge.from),
                placement.rename(&edge.to),
                edge.data_type.0.clone(),
            ));
        }
    }

    pub fn connect(&mut self, from: String, to: String, data_type: &DataType) {
        self.description.edges.push(EdgeSpec::new(from, to, data_type.0.clone()));
    }

    pub fn build(self) -> Result<Diagram, BuildError> {
        Diagram::build(self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_state_survives_only_when_both_agree() {
        let a = fixtures::pipeline("a", "x", "y");
        let b = fixtures::pipeline("b", "y", "z");
        assert_eq!(merged_state(&a, &b), "active");
        assert_eq!(merged_state(&a, &fixtures::reference()), COMPOSITE_STATE);
    }

    #[test]
    fn test_rename_keeps_shared_ids() {
        let d = fixtures::reference();
        let shared = HashSet::from(["I-patterns".to_string()]);
        let placement = Placement {
            diagram: &d,
            prefix: d.mission_id().to_string(),
            shared: &shared,
            wired: HashSet::new(),
            skip_shared: false,
        };
        assert_eq!(placement.rename("I-patterns"), "I-patterns");
        assert_eq!(placement.rename("C-intake"), "futon-reference/C-intake");
    }

    #[test]
    fn test_wired_port_becomes_pass_through() {
        let d = fixtures::pipeline("p", "raw", "clean");
        let none = HashSet::new();
        let placement = Placement {
            diagram: &d,
            prefix: "p".into(),
            shared: &none,
            wired: HashSet::from(["O-out"]),
            skip_shared: false,
        };

        let mut assembly = Assembly::new("solo".into(), "active".into());
        assembly.place(&placement);
        let built = assembly.build().unwrap();

        assert!(built.outputs().is_empty());
        let wire = built.component("p/O-out").unwrap();
        assert_eq!(wire.name, "wire: O-out");
        assert!(wire.accepts.contains(&DataType::new("clean")));
        assert!(wire.produces.contains(&DataType::new("clean")));
        assert_eq!(wire.wire, Some(crate::store::Direction::Output));
        assert!(!wire.constraint);
    }

    #[test]
    fn test_same_mission_gets_numbered_prefixes() {
        let a = fixtures::pipeline("loop", "x", "x");
        let b = fixtures::pipeline("other", "x", "x");
        assert_eq!(prefixes(&a, &a), ("loop#1".to_string(), "loop#2".to_string()));
        assert_eq!(prefixes(&a, &b), ("loop".to_string(), "other".to_string()));
    }
}
