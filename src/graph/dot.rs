//! DOT serialization of compiled concept graphs.
//!
//! Emits one `subgraph cluster_*` region per subject, an ellipse hub
//! node inside it, `note`-shaped nodes for clinical examples and colored
//! labeled edges. Output order follows the deterministic cluster/edge
//! order produced by the compiler, so the artifact is reproducible.

use super::{ConceptGraph, RelationCategory};

const GRAPH_ATTRS: &str =
    r##"rankdir="{rankdir}", bgcolor="#f9f9f9", fontname="Arial", splines="ortho", compound="true""##;
const NODE_ATTRS: &str = r##"shape="rectangle", style="filled,rounded", fillcolor="#ffffff", fontname="Arial", fontsize="12", penwidth="1.5""##;
const EDGE_ATTRS: &str = r##"fontname="Arial", fontsize="10", penwidth="1.2""##;

/// Quote and escape a string for use as a DOT identifier or attribute
/// value.
fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

pub fn to_dot(graph: &ConceptGraph) -> String {
    let mut out = String::new();

    out.push_str("digraph {\n");
    out.push_str(&format!(
        "\tgraph [{}]\n",
        GRAPH_ATTRS.replace("{rankdir}", graph.orientation.rankdir())
    ));
    out.push_str(&format!("\tnode [{}]\n", NODE_ATTRS));
    out.push_str(&format!("\tedge [{}]\n", EDGE_ATTRS));

    for cluster in &graph.clusters {
        out.push_str(&format!(
            "\tsubgraph {} {{\n",
            quote(&format!("cluster_{}", cluster.subject))
        ));
        out.push_str(&format!(
            "\t\tstyle=\"filled\" color=\"#e0e0e0\" fillcolor=\"#f5f5f5\" label={} fontsize=\"12\" fontcolor=\"#333333\"\n",
            quote(&cluster.subject)
        ));

        // Hub node, visually distinguished from its satellites
        out.push_str(&format!(
            "\t\t{} [shape=\"ellipse\", fillcolor=\"#e6f3ff\", style=\"filled\", penwidth=\"2.0\"]\n",
            quote(&cluster.subject)
        ));

        for edge in &cluster.edges {
            if edge.category == RelationCategory::Example {
                out.push_str(&format!(
                    "\t\t{} [shape=\"note\", fillcolor=\"#f0e6ff\", style=\"filled\"]\n",
                    quote(&edge.object)
                ));
            } else {
                out.push_str(&format!("\t\t{}\n", quote(&edge.object)));
            }

            let color = edge.category.color();
            out.push_str(&format!(
                "\t\t{} -> {} [label={}, color=\"{}\", fontcolor=\"{}\", penwidth=\"1.5\"]\n",
                quote(&cluster.subject),
                quote(&edge.object),
                quote(&edge.relation),
                color,
                color
            ));
        }

        out.push_str("\t}\n");
    }

    out.push_str("}\n");
    out
}
