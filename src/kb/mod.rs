//! Knowledge base: the static concept → relation → terms table used by
//! the offline matcher.
//!
//! The table is deserialized from TOML into a fixed-schema typed
//! structure. It is built once, injected where needed and read-only for
//! the process lifetime, so it is safe for unbounded concurrent readers.

mod matcher;

pub use matcher::{match_propositions, MatchOutcome};

use crate::error::{ConceptMapError, Result};
use serde::Deserialize;
use std::path::Path;

/// Built-in pathology table, shipped with the binary.
const DEFAULT_KB: &str = include_str!("default_kb.toml");

/// One relation of a concept: a label and its ordered related terms.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationEntry {
    /// Free-text relation label, e.g. `leva_a`, `exemplo`.
    pub label: String,
    /// Related concepts, in declaration order.
    pub terms: Vec<String>,
}

/// A canonical concept with its detection keywords and relations.
#[derive(Debug, Clone, Deserialize)]
pub struct ConceptEntry {
    /// Canonical concept name used as the triple subject.
    pub name: String,
    /// Lowercase keywords tested against normalized text.
    pub keywords: Vec<String>,
    /// Relations in declaration order.
    #[serde(rename = "relation")]
    pub relations: Vec<RelationEntry>,
}

/// Immutable concept → relation → terms table.
///
/// Entry order is declaration order and is preserved through matching,
/// serialization and graph compilation.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBase {
    // Default so a document with no [[concept]] tables deserializes and
    // validate() can report "no concepts" instead of a serde error
    #[serde(rename = "concept", default)]
    entries: Vec<ConceptEntry>,
}

impl KnowledgeBase {
    /// The built-in pathology knowledge base.
    pub fn builtin() -> Self {
        // The embedded table is validated by tests; a parse failure here
        // is a packaging bug, not a runtime condition.
        Self::from_toml(DEFAULT_KB).expect("embedded knowledge base is invalid")
    }

    /// Parse and validate a knowledge base from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let kb: KnowledgeBase = toml::from_str(text)
            .map_err(|e| ConceptMapError::KnowledgeBase(format!("TOML parse failed: {}", e)))?;
        kb.validate()?;
        Ok(kb)
    }

    /// Load a knowledge base from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Concept entries in declaration order.
    pub fn entries(&self) -> &[ConceptEntry] {
        &self.entries
    }

    fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(ConceptMapError::KnowledgeBase(
                "knowledge base defines no concepts".to_string(),
            ));
        }

        for entry in &self.entries {
            if entry.name.trim().is_empty() {
                return Err(ConceptMapError::KnowledgeBase(
                    "concept with empty name".to_string(),
                ));
            }
            if entry.keywords.is_empty() {
                return Err(ConceptMapError::KnowledgeBase(format!(
                    "concept '{}' has no keywords",
                    entry.name
                )));
            }
            if entry
                .keywords
                .iter()
                .any(|k| k.trim().is_empty() || *k != k.to_lowercase())
            {
                return Err(ConceptMapError::KnowledgeBase(format!(
                    "concept '{}' has an empty or non-lowercase keyword (keywords match against lowercased text)",
                    entry.name
                )));
            }
            if entry.relations.is_empty() {
                return Err(ConceptMapError::KnowledgeBase(format!(
                    "concept '{}' has no relations",
                    entry.name
                )));
            }
            for relation in &entry.relations {
                if relation.label.trim().is_empty() {
                    return Err(ConceptMapError::KnowledgeBase(format!(
                        "concept '{}' has a relation with an empty label",
                        entry.name
                    )));
                }
                if relation.terms.is_empty() || relation.terms.iter().any(|t| t.trim().is_empty())
                {
                    return Err(ConceptMapError::KnowledgeBase(format!(
                        "relation '{}' of concept '{}' has no terms or an empty term",
                        relation.label, entry.name
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parses_and_validates() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.entries().len(), 5);
        assert_eq!(kb.entries()[0].name, "Lesão Celular");
        assert_eq!(kb.entries()[3].name, "Necrose");
    }

    #[test]
    fn test_builtin_preserves_declaration_order() {
        let kb = KnowledgeBase::builtin();
        let names: Vec<&str> = kb.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Lesão Celular", "Hipóxia", "Inflamação", "Necrose", "Apoptose"]
        );

        let necrose = &kb.entries()[3];
        assert_eq!(necrose.relations[0].label, "tipos");
        assert_eq!(
            necrose.relations[0].terms,
            vec!["Coagulativa", "Liquefativa", "Caseosa"]
        );
    }

    #[test]
    fn test_from_toml_minimal() {
        let kb = KnowledgeBase::from_toml(
            r#"
[[concept]]
name = "Febre"
keywords = ["febre"]

[[concept.relation]]
label = "sintoma_de"
terms = ["Infecção"]
"#,
        )
        .unwrap();
        assert_eq!(kb.entries().len(), 1);
        assert_eq!(kb.entries()[0].relations[0].terms, vec!["Infecção"]);
    }

    #[test]
    fn test_from_toml_rejects_empty_table() {
        let err = KnowledgeBase::from_toml("").unwrap_err();
        assert!(err.to_string().contains("no concepts"));
    }

    #[test]
    fn test_from_toml_rejects_uppercase_keyword() {
        let err = KnowledgeBase::from_toml(
            r#"
[[concept]]
name = "Febre"
keywords = ["Febre"]

[[concept.relation]]
label = "sintoma_de"
terms = ["Infecção"]
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("non-lowercase"));
    }

    #[test]
    fn test_from_toml_rejects_relation_without_terms() {
        let err = KnowledgeBase::from_toml(
            r#"
[[concept]]
name = "Febre"
keywords = ["febre"]

[[concept.relation]]
label = "sintoma_de"
terms = []
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("sintoma_de"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.toml");
        std::fs::write(
            &path,
            r#"
[[concept]]
name = "Febre"
keywords = ["febre"]

[[concept.relation]]
label = "sintoma_de"
terms = ["Infecção"]
"#,
        )
        .unwrap();
        let kb = KnowledgeBase::load(&path).unwrap();
        assert_eq!(kb.entries()[0].name, "Febre");
    }
}
