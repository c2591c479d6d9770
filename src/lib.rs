pub mod config;
pub mod error;
pub mod normalize;
pub mod kb;
pub mod proposition;
pub mod graph;
pub mod extract;
pub mod completion;
pub mod render;

pub use config::Config;
pub use error::{ConceptMapError, Result};
pub use graph::{compile_graph, ConceptGraph, Orientation, RelationCategory};
pub use kb::{match_propositions, KnowledgeBase};
pub use proposition::{parse_propositions, serialize_propositions, Triple};
