use crate::store::{Diagram, Port};
use std::fmt::Write;

/// Renders the diagram as a Graphviz digraph.
///
/// Output is a pure function of the diagram: nodes and edges appear in
/// declaration order, boundary ports grouped into "Inputs" and "Outputs" clusters.
pub fn render(diagram: &Diagram) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph {} {{", quote(diagram.mission_id()));
    let _ = writeln!(out, "  rankdir=LR;");
    let _ = writeln!(out, "  label={};", quote(&format!("{} ({})", diagram.mission_id(), diagram.state())));
    let _ = writeln!(out, "  node [fontname=\"Helvetica\"];");
    let _ = writeln!(out);

    cluster(&mut out, "cluster_inputs", "Inputs", diagram.inputs());
    cluster(&mut out, "cluster_outputs", "Outputs", diagram.outputs());

    for component in diagram.components() {
        let mut label = component.name.clone();
        if let Some(ts) = &component.timescale {
            let _ = write!(label, "\n[{}]", ts);
        }
        let style = if component.constraint { "\"rounded,dashed\"" } else { "rounded" };
        let _ = writeln!(
            out,
            "  {} [label={}, shape=box, style={}];",
            quote(&component.id),
            quote(&label),
            style
        );
    }
    if !diagram.components().is_empty() {
        let _ = writeln!(out);
    }

    for edge in diagram.edges() {
        let _ = writeln!(
            out,
            "  {} -> {} [label={}];",
            quote(&edge.from),
            quote(&edge.to),
            quote(edge.data_type.as_str())
        );
    }
    let _ = writeln!(out, "}}");
    out
}

fn cluster(out: &mut String, name: &str, label: &str, ports: &[Port]) {
    let _ = writeln!(out, "  subgraph {} {{", name);
    let _ = writeln!(out, "    label={};", quote(label));
    for port in ports {
        let style = if port.constraint { "dashed" } else { "solid" };
        let _ = writeln!(
            out,
            "    {} [label={}, shape=ellipse, style={}];",
            quote(&port.id),
            quote(&format!("{}\n{}", port.name, port.data_type)),
            style
        );
    }
    let _ = writeln!(out, "  }}");
    let _ = writeln!(out);
}

/// Double-quoted DOT identifier. Newlines become DOT's `\n` escape.
fn quote(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for ch in raw.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
