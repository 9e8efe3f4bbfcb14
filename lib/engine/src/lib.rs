//! # personax Engine
//!
//! Scoring engine for the personax similarity ranking service.
//!
//! This crate computes similarity between persons and ranks a whole
//! population against a hidden target:
//!
//! - **Narrative channel**: multi-aspect embedding comparison with a
//!   plain-cosine fallback for unenriched persons
//! - **Factual and relational channels**: Jaccard overlap of typed
//!   attribute sets
//! - **Ranking**: parallel scoring with dense 1-based ranks
//! - **Explanations**: tier phrases and labeled attribute comparisons
//! - **Game modes**: named population filters for round setup
//!
//! ## Example
//!
//! ```rust
//! use personax_core::{Embedding, NarrativeData, Person, PersonId, PopulationBuilder};
//! use personax_engine::{rank_all, score_pair};
//!
//! let mut builder = PopulationBuilder::new(2);
//! builder
//!     .add(Person::new(
//!         PersonId::new("a"),
//!         "Alpha",
//!         ["occ:singer"].into_iter().collect(),
//!         NarrativeData::Plain {
//!             combined: Embedding::new(vec![1.0, 0.0]),
//!         },
//!     ))
//!     .unwrap();
//! builder
//!     .add(Person::new(
//!         PersonId::new("b"),
//!         "Beta",
//!         ["occ:singer"].into_iter().collect(),
//!         NarrativeData::Plain {
//!             combined: Embedding::new(vec![0.0, 1.0]),
//!         },
//!     ))
//!     .unwrap();
//! let population = builder.build();
//!
//! let score = score_pair(&population, &PersonId::new("a"), &PersonId::new("b")).unwrap();
//! assert!((score.combined - 0.3).abs() < 1e-6);
//!
//! let ranking = rank_all(&population, &PersonId::new("a")).unwrap();
//! assert_eq!(ranking.entries()[0].person_id, PersonId::new("a"));
//! ```

pub mod explain;
pub mod metadata;
pub mod modes;
pub mod narrative;
pub mod rank;
pub mod score;

pub use explain::{
    closeness_tier, explain_score, match_detail, similarity_tier, Explanation, MatchDetail,
    SetComparison,
};
pub use metadata::{achievement_closeness, metadata_similarity, MetadataScore};
pub use modes::GameMode;
pub use narrative::{narrative_similarity, NarrativeDetail, NarrativeScore};
pub use rank::{rank_all, rank_of, RankedEntry, Ranking};
pub use score::{score_pair, score_persons, SimilarityScore};
