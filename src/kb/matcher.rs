//! Offline proposition extraction against the knowledge base.

use super::{ConceptEntry, KnowledgeBase};
use crate::proposition::Triple;

/// Result of matching normalized text against a knowledge base.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Emitted triples, in knowledge base declaration order.
    pub triples: Vec<Triple>,
    /// False when no keyword was found and the full table was emitted
    /// as a fallback. A warning for the caller to surface, not an error.
    pub matched: bool,
}

/// Scan normalized text for known concept keywords and emit triples.
///
/// Keywords are tested by substring containment, in declaration order.
/// Each hit emits every (concept, relation, term) triple the entry
/// defines. Containment is intentionally naive: a keyword that is a
/// substring of an unrelated word still counts as a hit.
///
/// When no keyword matches at all, the entire knowledge base is emitted
/// so the caller still has a complete example map to show, with
/// `matched` set to false.
pub fn match_propositions(normalized_text: &str, kb: &KnowledgeBase) -> MatchOutcome {
    let mut triples = Vec::new();
    let mut matched = false;

    for entry in kb.entries() {
        for keyword in &entry.keywords {
            if normalized_text.contains(keyword.as_str()) {
                matched = true;
                emit_entry(entry, &mut triples);
            }
        }
    }

    if !matched {
        for entry in kb.entries() {
            emit_entry(entry, &mut triples);
        }
    }

    MatchOutcome { triples, matched }
}

fn emit_entry(entry: &ConceptEntry, out: &mut Vec<Triple>) {
    for relation in &entry.relations {
        for term in &relation.terms {
            out.push(Triple::new(&entry.name, &relation.label, term));
        }
    }
}
