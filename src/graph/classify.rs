//! Relation label classification for styling.

use serde::{Deserialize, Serialize};

/// Styling category of a relation label.
///
/// Categories exist purely for presentation: each maps to one fixed
/// display color via [`RelationCategory::color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationCategory {
    Causal,
    Symptom,
    Treatment,
    Diagnosis,
    Prevention,
    Example,
    Default,
}

impl RelationCategory {
    /// Fixed display color for this category.
    pub fn color(&self) -> &'static str {
        match self {
            RelationCategory::Causal => "#FF6B6B",
            RelationCategory::Symptom => "#4ECDC4",
            RelationCategory::Treatment => "#45B7D1",
            RelationCategory::Diagnosis => "#FFA07A",
            RelationCategory::Prevention => "#7BC043",
            RelationCategory::Example => "#A593E0",
            RelationCategory::Default => "#6B5B95",
        }
    }
}

/// Keyword sets in priority order; the first containing set wins.
const KEYWORD_PRIORITY: &[(RelationCategory, &[&str])] = &[
    (RelationCategory::Causal, &["causa", "leva_a"]),
    (RelationCategory::Symptom, &["sintoma", "caracteriza"]),
    (RelationCategory::Treatment, &["trata"]),
    (RelationCategory::Diagnosis, &["diagnóstico"]),
    (RelationCategory::Prevention, &["previne"]),
    (RelationCategory::Example, &["exemplo"]),
];

/// Map a free-text relation label to its styling category.
///
/// Case-insensitive keyword containment tested in fixed priority order.
/// A label matching two keyword sets resolves to the earlier category;
/// anything unmatched resolves to [`RelationCategory::Default`].
pub fn classify_relation(label: &str) -> RelationCategory {
    let label = label.to_lowercase();

    for (category, keywords) in KEYWORD_PRIORITY {
        if keywords.iter().any(|k| label.contains(k)) {
            return *category;
        }
    }

    RelationCategory::Default
}
