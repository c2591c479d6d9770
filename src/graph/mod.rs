//! Concept graph: relation classification, triple clustering and DOT
//! serialization.
//!
//! Compiles an ordered triple sequence into a styled directed graph
//! structure and serializes it as a Graphviz DOT document.

mod classify;
mod compile;
mod dot;

pub use classify::{classify_relation, RelationCategory};
pub use compile::compile_graph;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Graph orientation: top-down ("retrato") or left-right ("paisagem").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Graphviz `rankdir` value.
    pub fn rankdir(&self) -> &'static str {
        match self {
            Orientation::Portrait => "TB",
            Orientation::Landscape => "LR",
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "retrato" | "portrait" | "tb" => Ok(Orientation::Portrait),
            "paisagem" | "landscape" | "lr" => Ok(Orientation::Landscape),
            other => Err(format!(
                "unknown orientation '{}' (expected retrato/portrait or paisagem/landscape)",
                other
            )),
        }
    }
}

/// A directed edge from a cluster's hub to an object concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Raw relation text, used verbatim as the edge label.
    pub relation: String,
    /// Destination concept.
    pub object: String,
    /// Styling category resolved from the relation label.
    pub category: RelationCategory,
}

/// A subject concept with the ordered (relation, object) pairs it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Subject concept; becomes the cluster label and the hub node.
    pub subject: String,
    /// Edges in first-seen order.
    pub edges: Vec<Edge>,
}

/// A compiled, styled concept graph.
///
/// Created fresh per compile request and discarded after use; carries no
/// shared state. Identical triple sequences and orientation always
/// produce an identical structure and identical DOT text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptGraph {
    /// Clusters in first-seen subject order.
    pub clusters: Vec<Cluster>,
    pub orientation: Orientation,
    /// Opaque layout-engine selector handed through to the renderer.
    pub engine: Option<String>,
}

impl ConceptGraph {
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.clusters
            .iter()
            .map(|c| 1 + c.edges.len())
            .sum()
    }

    pub fn edge_count(&self) -> usize {
        self.clusters.iter().map(|c| c.edges.len()).sum()
    }

    /// Serialize as a Graphviz DOT document.
    ///
    /// Always available, even when no Graphviz binary is installed; the
    /// text artifact is the baseline export format.
    pub fn to_dot(&self) -> String {
        dot::to_dot(self)
    }
}
