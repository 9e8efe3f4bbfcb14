//! Narrative similarity channel
//!
//! Multi-aspect comparison of narrative embeddings. When both persons are
//! enriched with per-aspect embeddings the score blends six components;
//! otherwise it falls back to plain cosine over the combined embeddings.

use personax_core::Person;
use serde::Serialize;

use crate::metadata::{metadata_similarity, MetadataScore};

pub const WEIGHT_CAREER: f32 = 0.20;
pub const WEIGHT_ACHIEVEMENT: f32 = 0.15;
pub const WEIGHT_BIOGRAPHICAL: f32 = 0.20;
pub const WEIGHT_INFLUENCE: f32 = 0.10;
pub const WEIGHT_COMBINED: f32 = 0.20;
pub const WEIGHT_METADATA: f32 = 0.15;

/// Per-aspect breakdown of an enriched narrative comparison
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeDetail {
    pub career: f32,
    pub achievement: f32,
    pub biographical: f32,
    pub influence: f32,
    pub combined: f32,
    pub metadata: f32,
    pub summary: String,
}

/// Narrative similarity result
///
/// `detail` is present only on the multi-aspect path.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeScore {
    pub overall: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<NarrativeDetail>,
}

/// Compare two persons' narratives
///
/// The multi-aspect path requires per-aspect embeddings on BOTH sides;
/// the metadata component inside it contributes 0.0 when either person
/// lacks metadata, keeping the divisor fixed. A negative cosine flows
/// through unclamped so anti-correlated candidates stay ordered.
#[must_use]
pub fn narrative_similarity(a: &Person, b: &Person) -> NarrativeScore {
    match (a.narrative.aspects(), b.narrative.aspects()) {
        (Some(aspects_a), Some(aspects_b)) => {
            let career = aspects_a.career.cosine(&aspects_b.career);
            let achievement = aspects_a.achievement.cosine(&aspects_b.achievement);
            let biographical = aspects_a.biographical.cosine(&aspects_b.biographical);
            let influence = aspects_a.influence.cosine(&aspects_b.influence);
            let combined = a.narrative.combined().cosine(b.narrative.combined());

            let meta_score: Option<MetadataScore> = match (&a.metadata, &b.metadata) {
                (Some(ma), Some(mb)) => Some(metadata_similarity(ma, mb)),
                _ => None,
            };
            let metadata = meta_score.map(|m| m.overall).unwrap_or(0.0);

            let overall = WEIGHT_CAREER * career
                + WEIGHT_ACHIEVEMENT * achievement
                + WEIGHT_BIOGRAPHICAL * biographical
                + WEIGHT_INFLUENCE * influence
                + WEIGHT_COMBINED * combined
                + WEIGHT_METADATA * metadata;

            let summary = summarize(career, achievement, meta_score.as_ref());

            NarrativeScore {
                overall,
                detail: Some(NarrativeDetail {
                    career,
                    achievement,
                    biographical,
                    influence,
                    combined,
                    metadata,
                    summary,
                }),
            }
        }
        _ => NarrativeScore {
            overall: a.narrative.combined().cosine(b.narrative.combined()),
            detail: None,
        },
    }
}

/// Human-readable summary of what drives an enriched comparison
fn summarize(career: f32, achievement: f32, meta_score: Option<&MetadataScore>) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(meta) = meta_score {
        if meta.domain == 1.0 {
            parts.push("Same professional domain");
        }
        // adjacent eras earn the partial era credit and still read as
        // the same generation
        if meta.era >= 0.5 {
            parts.push("Same generation/era");
        }
    }
    if career > 0.7 {
        parts.push("Very similar career trajectory");
    }
    if achievement > 0.6 {
        parts.push("Similar level of recognition");
    }
    if meta_score.is_some_and(|m| m.tags > 0.5) {
        parts.push("Shared thematic elements");
    }

    if parts.is_empty() {
        "Limited narrative overlap".to_string()
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use personax_core::{
        AspectEmbeddings, AttributeSet, CareerDomain, Embedding, Era, NarrativeData,
        PersonId, PersonMetadata,
    };

    fn plain_person(id: &str, embedding: Vec<f32>) -> Person {
        Person::new(
            PersonId::new(id),
            id.to_uppercase(),
            AttributeSet::new(),
            NarrativeData::Plain {
                combined: Embedding::new(embedding),
            },
        )
    }

    fn enriched_person(id: &str, base: Vec<f32>) -> Person {
        let embedding = Embedding::new(base);
        Person::new(
            PersonId::new(id),
            id.to_uppercase(),
            AttributeSet::new(),
            NarrativeData::Enriched {
                combined: embedding.clone(),
                aspects: AspectEmbeddings {
                    career: embedding.clone(),
                    achievement: embedding.clone(),
                    biographical: embedding.clone(),
                    influence: embedding,
                },
            },
        )
    }

    fn music_metadata(tags: &[&str]) -> PersonMetadata {
        PersonMetadata::new(
            CareerDomain::Music,
            Era::Boomer,
            60.0,
            tags.iter().copied().collect(),
        )
    }

    #[test]
    fn test_plain_fallback_has_no_detail() {
        let a = plain_person("a", vec![1.0, 0.0]);
        let b = plain_person("b", vec![1.0, 0.0]);
        let score = narrative_similarity(&a, &b);
        assert!((score.overall - 1.0).abs() < 1e-6);
        assert!(score.detail.is_none());
    }

    #[test]
    fn test_mixed_enrichment_falls_back() {
        let a = enriched_person("a", vec![1.0, 0.0]);
        let b = plain_person("b", vec![0.0, 1.0]);
        let score = narrative_similarity(&a, &b);
        assert_eq!(score.overall, 0.0);
        assert!(score.detail.is_none());
    }

    #[test]
    fn test_enriched_identical_without_metadata() {
        let a = enriched_person("a", vec![1.0, 0.0]);
        let b = enriched_person("b", vec![1.0, 0.0]);
        let score = narrative_similarity(&a, &b);
        // all five embedding components are 1.0, metadata contributes 0.0
        // with its weight still in the blend
        assert!((score.overall - 0.85).abs() < 1e-6);
        let detail = score.detail.unwrap();
        assert_eq!(detail.metadata, 0.0);
        assert!((detail.career - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_enriched_identical_with_metadata() {
        let a = enriched_person("a", vec![1.0, 0.0]).with_metadata(music_metadata(&["tag:pop"]));
        let b = enriched_person("b", vec![1.0, 0.0]).with_metadata(music_metadata(&["tag:pop"]));
        let score = narrative_similarity(&a, &b);
        assert!((score.overall - 1.0).abs() < 1e-6);
        let detail = score.detail.unwrap();
        assert!((detail.metadata - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_cosine_flows_through() {
        let a = plain_person("a", vec![1.0, 0.0]);
        let b = plain_person("b", vec![-1.0, 0.0]);
        let opposed = narrative_similarity(&a, &b);
        assert!((opposed.overall + 1.0).abs() < 1e-6);

        // anti-correlated candidates stay ordered below a merely
        // orthogonal one
        let c = plain_person("c", vec![0.0, 1.0]);
        let orthogonal = narrative_similarity(&a, &c);
        assert!(opposed.overall < orthogonal.overall);
    }

    #[test]
    fn test_summary_parts() {
        let a = enriched_person("a", vec![1.0, 0.0]).with_metadata(music_metadata(&["tag:pop"]));
        let b = enriched_person("b", vec![1.0, 0.0]).with_metadata(music_metadata(&["tag:pop"]));
        let score = narrative_similarity(&a, &b);
        let summary = score.detail.unwrap().summary;
        assert!(summary.contains("Same professional domain"));
        assert!(summary.contains("Same generation/era"));
        assert!(summary.contains("Very similar career trajectory"));
        assert!(summary.contains("Similar level of recognition"));
        assert!(summary.contains("Shared thematic elements"));
    }

    #[test]
    fn test_summary_adjacent_era_counts_as_same_generation() {
        let meta_boomer = PersonMetadata::new(
            CareerDomain::Music,
            Era::Boomer,
            60.0,
            AttributeSet::new(),
        );
        let meta_gen_x = PersonMetadata::new(
            CareerDomain::Sports,
            Era::GenX,
            60.0,
            AttributeSet::new(),
        );
        let a = enriched_person("a", vec![1.0, 0.0]).with_metadata(meta_boomer);
        let b = enriched_person("b", vec![1.0, 0.0]).with_metadata(meta_gen_x);
        let summary = narrative_similarity(&a, &b).detail.unwrap().summary;
        assert!(summary.contains("Same generation/era"));
        assert!(!summary.contains("Same professional domain"));
    }

    #[test]
    fn test_summary_limited_overlap() {
        let a = enriched_person("a", vec![1.0, 0.0]);
        let b = enriched_person("b", vec![0.0, 1.0]);
        let score = narrative_similarity(&a, &b);
        assert_eq!(score.detail.unwrap().summary, "Limited narrative overlap");
    }
}
