//! # personax
//!
//! A similarity ranking engine for a person-guessing game.
//!
//! A hidden target person is drawn from an immutable population snapshot;
//! for any guessed candidate the engine scores similarity against the
//! target, ranks the entire population and explains the result. Scores
//! blend three channels:
//!
//! - **Narrative** (0.5): multi-aspect text-embedding similarity with a
//!   plain-cosine fallback for unenriched persons
//! - **Factual** (0.3): Jaccard overlap of occupation, citizenship and
//!   award codes
//! - **Relational** (0.2): Jaccard overlap of influence, teacher and
//!   notable-work codes
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install personax
//! personax --data data/persons.json --port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use personax::prelude::*;
//!
//! let population = load_dataset("data/persons.json").unwrap();
//! let ranking = rank_all(&population, &PersonId::new("p1")).unwrap();
//! for entry in ranking.top(10) {
//!     println!("#{} {} {:.3}", entry.rank, entry.name, entry.score.combined);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! personax is composed of several crates:
//!
//! - [`personax-core`](https://docs.rs/personax-core) - Domain model (Embedding, AttributeSet, Person, Population)
//! - [`personax-engine`](https://docs.rs/personax-engine) - Scoring, ranking, explanations, game modes
//! - [`personax-api`](https://docs.rs/personax-api) - REST API and game-round sessions

// Re-export core types
pub use personax_core::{
    load_dataset, parse_dataset, AspectEmbeddings, AttributeCode, AttributeKind, AttributeSet,
    CareerDomain, Channel, Embedding, Era, Error, Labels, NarrativeData, Person, PersonId,
    PersonMetadata, Population, PopulationBuilder, Result,
};

// Re-export the engine
pub use personax_engine::{
    closeness_tier, explain_score, match_detail, metadata_similarity, narrative_similarity,
    rank_all, rank_of, score_pair, similarity_tier, Explanation, GameMode, MatchDetail,
    MetadataScore, NarrativeScore, RankedEntry, Ranking, SimilarityScore,
};

// Re-export API
pub use personax_api::{AppState, GameRound, RestApi, RoundState, SessionStore};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_dataset, rank_all, rank_of, score_pair, AppState, AttributeSet, Embedding, Error,
        GameMode, NarrativeData, Person, PersonId, PersonMetadata, Population,
        PopulationBuilder, RankedEntry, Ranking, RestApi, Result, SimilarityScore,
    };
}
