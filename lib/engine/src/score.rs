//! Channel aggregation
//!
//! Blends the narrative, factual and relational channels into the final
//! similarity score for a target/candidate pair.

use personax_core::{Person, PersonId, Population, Result};
use serde::Serialize;

use crate::narrative::{narrative_similarity, NarrativeDetail};

pub const WEIGHT_NARRATIVE: f32 = 0.5;
pub const WEIGHT_FACTUAL: f32 = 0.3;
pub const WEIGHT_RELATIONAL: f32 = 0.2;

/// Final similarity score with per-channel breakdown
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityScore {
    pub narrative: f32,
    pub factual: f32,
    pub relational: f32,
    pub combined: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative_detail: Option<NarrativeDetail>,
}

/// Score a candidate against a target
pub fn score_pair(
    population: &Population,
    target: &PersonId,
    candidate: &PersonId,
) -> Result<SimilarityScore> {
    let target = population.require(target)?;
    let candidate = population.require(candidate)?;
    Ok(score_persons(candidate, target))
}

/// Score two resolved persons (symmetric)
#[must_use]
pub fn score_persons(candidate: &Person, target: &Person) -> SimilarityScore {
    let narrative_score = narrative_similarity(candidate, target);
    let factual = candidate.factual_set().jaccard(target.factual_set());
    let relational = candidate.relational_set().jaccard(target.relational_set());

    let combined = WEIGHT_NARRATIVE * narrative_score.overall
        + WEIGHT_FACTUAL * factual
        + WEIGHT_RELATIONAL * relational;

    SimilarityScore {
        narrative: narrative_score.overall,
        factual,
        relational,
        combined,
        narrative_detail: narrative_score.detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use personax_core::{
        Embedding, Error, NarrativeData, Person, Population, PopulationBuilder,
    };

    fn person(id: &str, embedding: Vec<f32>, attributes: &[&str]) -> Person {
        Person::new(
            PersonId::new(id),
            id.to_uppercase(),
            attributes.iter().copied().collect(),
            NarrativeData::Plain {
                combined: Embedding::new(embedding),
            },
        )
    }

    fn two_person_population() -> Population {
        let mut builder = PopulationBuilder::new(2);
        builder
            .add(person("a", vec![1.0, 0.0], &["occ:singer"]))
            .unwrap();
        builder
            .add(person("b", vec![0.0, 1.0], &["occ:singer"]))
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_orthogonal_narrative_shared_factual() {
        let population = two_person_population();
        let score =
            score_pair(&population, &PersonId::new("a"), &PersonId::new("b")).unwrap();
        assert_eq!(score.narrative, 0.0);
        assert!((score.factual - 1.0).abs() < 1e-6);
        assert_eq!(score.relational, 0.0);
        assert!((score.combined - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_self_score_with_attributes() {
        let population = two_person_population();
        let score =
            score_pair(&population, &PersonId::new("a"), &PersonId::new("a")).unwrap();
        assert!((score.narrative - 1.0).abs() < 1e-6);
        assert!((score.factual - 1.0).abs() < 1e-6);
        // both relational sets empty
        assert_eq!(score.relational, 0.0);
        assert!((score.combined - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_target_propagates() {
        let population = two_person_population();
        let err =
            score_pair(&population, &PersonId::new("zz"), &PersonId::new("a")).unwrap_err();
        assert!(matches!(err, Error::PersonNotFound(_)));
    }

    #[test]
    fn test_unknown_candidate_propagates() {
        let population = two_person_population();
        let err =
            score_pair(&population, &PersonId::new("a"), &PersonId::new("zz")).unwrap_err();
        assert!(matches!(err, Error::PersonNotFound(_)));
    }

    #[test]
    fn test_anti_correlated_narrative_lowers_final() {
        let mut builder = PopulationBuilder::new(2);
        builder.add(person("a", vec![1.0, 0.0], &[])).unwrap();
        builder.add(person("b", vec![-1.0, 0.0], &[])).unwrap();
        builder.add(person("c", vec![0.0, 1.0], &[])).unwrap();
        let population = builder.build();

        // opposed narratives blend in unclamped and rank below orthogonal
        let opposed =
            score_pair(&population, &PersonId::new("a"), &PersonId::new("b")).unwrap();
        assert!((opposed.narrative + 1.0).abs() < 1e-6);
        assert!((opposed.combined + 0.5).abs() < 1e-6);

        let orthogonal =
            score_pair(&population, &PersonId::new("a"), &PersonId::new("c")).unwrap();
        assert!(opposed.combined < orthogonal.combined);
    }

    #[test]
    fn test_symmetry() {
        let population = two_person_population();
        let ab = score_pair(&population, &PersonId::new("a"), &PersonId::new("b")).unwrap();
        let ba = score_pair(&population, &PersonId::new("b"), &PersonId::new("a")).unwrap();
        assert!((ab.combined - ba.combined).abs() < 1e-6);
    }
}
