//! Proposition model: `subject -> relation -> object` triples.
//!
//! The newline-joined triple listing is the textual interchange contract
//! between the knowledge base matcher (or an AI collaborator) and the
//! graph compiler.

mod parser;

pub use parser::parse_propositions;

use serde::{Deserialize, Serialize};

/// Literal delimiter separating triple segments in a proposition line.
pub const DELIMITER: &str = "->";

/// Relation label assigned to two-segment lines (`A -> B`).
pub const DEFAULT_RELATION: &str = "relacionado_a";

/// A parsed (subject, relation, object) statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    /// Subject concept, e.g. `lesão celular`.
    pub subject: String,
    /// Free-text relation label, e.g. `pode_ser`, `causa`.
    pub relation: String,
    /// Object concept, e.g. `reversível`.
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
        }
    }

    /// Serialize as one proposition line.
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.subject, DELIMITER, self.relation, DELIMITER, self.object
        )
    }
}

/// Serialize a triple sequence as a newline-joined proposition listing.
///
/// Re-parsing the result with [`parse_propositions`] yields the same
/// sequence, as long as no relation label itself contains the delimiter.
pub fn serialize_propositions(triples: &[Triple]) -> String {
    triples
        .iter()
        .map(Triple::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}
