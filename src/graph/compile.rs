//! Single-pass triple-to-graph compilation.

use std::collections::HashMap;

use super::classify::classify_relation;
use super::{Cluster, ConceptGraph, Edge, Orientation};
use crate::proposition::Triple;

/// Compile an ordered triple sequence into a concept graph.
///
/// Triples are grouped by subject: first-seen subject order determines
/// cluster order, first-seen (relation, object) order determines edge
/// order within a cluster. Each edge's relation is classified once and
/// the category stored alongside it. Stateless and deterministic, so
/// identical input always yields an identical graph and identical
/// serialization order.
///
/// An empty sequence compiles to a graph with zero nodes and zero edges,
/// which is a valid, renderable result.
pub fn compile_graph(
    triples: &[Triple],
    orientation: Orientation,
    engine: Option<String>,
) -> ConceptGraph {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for triple in triples {
        let slot = match index.get(triple.subject.as_str()) {
            Some(&i) => i,
            None => {
                index.insert(triple.subject.as_str(), clusters.len());
                clusters.push(Cluster {
                    subject: triple.subject.clone(),
                    edges: Vec::new(),
                });
                clusters.len() - 1
            }
        };

        clusters[slot].edges.push(Edge {
            relation: triple.relation.clone(),
            object: triple.object.clone(),
            category: classify_relation(&triple.relation),
        });
    }

    ConceptGraph {
        clusters,
        orientation,
        engine,
    }
}
