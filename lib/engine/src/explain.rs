//! Human-readable explanations
//!
//! Maps scores to tier phrases and builds labeled set comparisons for the
//! match-detail view.

use personax_core::{AttributeSet, Labels, PersonId, Population, Result};
use serde::Serialize;

use crate::narrative::{narrative_similarity, NarrativeScore};
use crate::score::SimilarityScore;

/// Tier phrase for a similarity score
///
/// Boundaries are inclusive: exactly 0.90 reads "extremely high".
#[must_use]
pub fn similarity_tier(score: f32) -> &'static str {
    if score >= 0.90 {
        "extremely high"
    } else if score >= 0.80 {
        "very high"
    } else if score >= 0.70 {
        "high"
    } else if score >= 0.60 {
        "moderate"
    } else if score >= 0.50 {
        "low"
    } else if score >= 0.30 {
        "very low"
    } else {
        "minimal"
    }
}

/// Tier phrase for guess closeness, on a laxer ladder
///
/// Boundaries are inclusive: exactly 0.85 reads "extremely high".
#[must_use]
pub fn closeness_tier(score: f32) -> &'static str {
    if score >= 0.85 {
        "extremely high"
    } else if score >= 0.75 {
        "very high"
    } else if score >= 0.65 {
        "high"
    } else if score >= 0.50 {
        "moderate"
    } else if score >= 0.35 {
        "low"
    } else if score >= 0.20 {
        "very low"
    } else {
        "minimal"
    }
}

/// Tiered reading of a similarity score
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub text: String,
    pub overall: &'static str,
    pub narrative: &'static str,
    pub factual: &'static str,
    pub relational: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative_summary: Option<String>,
}

/// Explain a computed score in tier phrases
#[must_use]
pub fn explain_score(score: &SimilarityScore) -> Explanation {
    Explanation {
        text: format!(
            "Overall similarity is {}",
            similarity_tier(score.combined)
        ),
        overall: similarity_tier(score.combined),
        narrative: similarity_tier(score.narrative),
        factual: similarity_tier(score.factual),
        relational: similarity_tier(score.relational),
        narrative_summary: score
            .narrative_detail
            .as_ref()
            .map(|detail| detail.summary.clone()),
    }
}

/// Labeled comparison of one attribute channel
#[derive(Debug, Clone, Serialize)]
pub struct SetComparison {
    pub shared: Vec<String>,
    pub candidate_only: Vec<String>,
    pub target_only: Vec<String>,
}

impl SetComparison {
    fn build(labels: &Labels, candidate: &AttributeSet, target: &AttributeSet) -> Self {
        let resolve = |codes: Vec<personax_core::AttributeCode>| {
            codes.iter().map(|code| labels.label_for(code)).collect()
        };
        Self {
            shared: resolve(candidate.shared_with(target)),
            candidate_only: resolve(candidate.missing_from(target)),
            target_only: resolve(target.missing_from(candidate)),
        }
    }
}

/// Per-channel set comparison between a target and a candidate
///
/// Tag comparison is present only when both persons carry metadata. The
/// narrative breakdown carries per-aspect detail on the enriched path
/// and just the overall on the fallback path.
#[derive(Debug, Clone, Serialize)]
pub struct MatchDetail {
    pub factual: SetComparison,
    pub relational: SetComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<SetComparison>,
    pub narrative: NarrativeScore,
}

/// Build the labeled match detail for a pair
pub fn match_detail(
    population: &Population,
    target: &PersonId,
    candidate: &PersonId,
) -> Result<MatchDetail> {
    let target = population.require(target)?;
    let candidate = population.require(candidate)?;
    let labels = population.labels();

    let tags = match (&candidate.metadata, &target.metadata) {
        (Some(mc), Some(mt)) => Some(SetComparison::build(labels, &mc.tags, &mt.tags)),
        _ => None,
    };

    Ok(MatchDetail {
        factual: SetComparison::build(labels, candidate.factual_set(), target.factual_set()),
        relational: SetComparison::build(
            labels,
            candidate.relational_set(),
            target.relational_set(),
        ),
        tags,
        narrative: narrative_similarity(candidate, target),
    })
}
