//! # personax Core
//!
//! Core library for the personax similarity ranking engine.
//!
//! This crate provides the domain model shared by the scoring engine and
//! the API layer:
//!
//! - [`Embedding`] - Dense narrative embedding with degenerate-safe cosine
//! - [`AttributeSet`] - Typed attribute codes with Jaccard overlap
//! - [`PersonMetadata`] - Career domain, era bucket, achievement, tags
//! - [`Person`] - A population member with narrative data and attributes
//! - [`Population`] - Immutable snapshot built once and shared
//!
//! ## Example
//!
//! ```rust
//! use personax_core::{
//!     AttributeSet, Embedding, NarrativeData, Person, PersonId, PopulationBuilder,
//! };
//!
//! let mut builder = PopulationBuilder::new(2);
//! builder
//!     .add(Person::new(
//!         PersonId::new("p1"),
//!         "Alpha",
//!         ["occ:singer", "cit:US"].into_iter().collect(),
//!         NarrativeData::Plain {
//!             combined: Embedding::new(vec![1.0, 0.0]),
//!         },
//!     ))
//!     .unwrap();
//! let population = builder.build();
//!
//! let p1 = population.require(&PersonId::new("p1")).unwrap();
//! assert_eq!(p1.factual_set().len(), 2);
//! ```

pub mod attribute;
pub mod dataset;
pub mod error;
pub mod metadata;
pub mod person;
pub mod population;
pub mod vector;

pub use attribute::{AttributeCode, AttributeKind, AttributeSet, Channel};
pub use dataset::{load_dataset, parse_dataset};
pub use error::{Error, Result};
pub use metadata::{derive_achievement, CareerDomain, Era, PersonMetadata};
pub use person::{AspectEmbeddings, NarrativeData, Person, PersonId};
pub use population::{Labels, Population, PopulationBuilder};
pub use vector::Embedding;
