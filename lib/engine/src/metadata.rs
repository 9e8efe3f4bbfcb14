//! Metadata similarity channel
//!
//! Compares structured metadata (career domain, era, achievement, tags)
//! with a fixed weighted blend.

use personax_core::PersonMetadata;
use serde::Serialize;

pub const WEIGHT_DOMAIN: f32 = 0.30;
pub const WEIGHT_ERA: f32 = 0.20;
pub const WEIGHT_ACHIEVEMENT: f32 = 0.20;
pub const WEIGHT_TAGS: f32 = 0.30;

/// Metadata similarity with per-component breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetadataScore {
    pub overall: f32,
    pub domain: f32,
    pub era: f32,
    pub achievement: f32,
    pub tags: f32,
}

/// Compare two metadata records
///
/// Components are unweighted in the breakdown; the overall is the
/// weighted blend (0.30 domain, 0.20 era, 0.20 achievement, 0.30 tags).
#[must_use]
pub fn metadata_similarity(a: &PersonMetadata, b: &PersonMetadata) -> MetadataScore {
    let domain = if a.domain == b.domain { 1.0 } else { 0.0 };
    let era = a.era.closeness(&b.era);
    let achievement = achievement_closeness(a.achievement, b.achievement);
    let tags = a.tags.jaccard(&b.tags);

    let overall = WEIGHT_DOMAIN * domain
        + WEIGHT_ERA * era
        + WEIGHT_ACHIEVEMENT * achievement
        + WEIGHT_TAGS * tags;

    MetadataScore {
        overall,
        domain,
        era,
        achievement,
        tags,
    }
}

/// Closeness of two achievement scores in [0, 100]
///
/// Ratio of the smaller score to the larger. The 1.0 divisor floor
/// keeps two zero scores at 0.0 instead of reading as a perfect match.
#[must_use]
pub fn achievement_closeness(a: f32, b: f32) -> f32 {
    a.min(b) / a.max(b).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use personax_core::{CareerDomain, Era};

    fn meta(domain: CareerDomain, era: Era, achievement: f32, tags: &[&str]) -> PersonMetadata {
        PersonMetadata::new(
            domain,
            era,
            achievement,
            tags.iter().copied().collect(),
        )
    }

    #[test]
    fn test_identical_metadata() {
        let a = meta(CareerDomain::Music, Era::Boomer, 60.0, &["tag:pop"]);
        let score = metadata_similarity(&a, &a.clone());
        assert!((score.overall - 1.0).abs() < 1e-6);
        assert_eq!(score.domain, 1.0);
        assert_eq!(score.era, 1.0);
        assert!((score.achievement - 1.0).abs() < 1e-6);
        assert!((score.tags - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_achievement_closeness_both_zero() {
        assert_eq!(achievement_closeness(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_achievement_closeness_formula() {
        // 40 / 60 = 2/3
        assert!((achievement_closeness(60.0, 40.0) - 2.0 / 3.0).abs() < 1e-6);
        assert!((achievement_closeness(40.0, 60.0) - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_achievement_closeness_small_scores_floored_divisor() {
        // 0.2 / max(0.4, 1.0) = 0.2
        assert!((achievement_closeness(0.4, 0.2) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_achievement_closeness_one_zero() {
        // 1 - 50/50 = 0.0
        assert_eq!(achievement_closeness(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_weighted_blend() {
        let a = meta(CareerDomain::Music, Era::Boomer, 0.0, &[]);
        let b = meta(CareerDomain::Music, Era::GenX, 0.0, &[]);
        let score = metadata_similarity(&a, &b);
        // same domain 0.30, adjacent era 0.20 * 0.5, achievement 0, tags 0
        assert!((score.overall - 0.40).abs() < 1e-6);
        assert_eq!(score.era, 0.5);
    }

    #[test]
    fn test_empty_tag_sets_score_zero() {
        let a = meta(CareerDomain::Other, Era::Unknown, 0.0, &[]);
        let b = meta(CareerDomain::Sports, Era::Boomer, 0.0, &[]);
        let score = metadata_similarity(&a, &b);
        assert_eq!(score.tags, 0.0);
        assert_eq!(score.overall, 0.0);
    }

    #[test]
    fn test_other_domains_match_each_other() {
        let a = meta(CareerDomain::Other, Era::Boomer, 10.0, &[]);
        let b = meta(CareerDomain::Other, Era::Boomer, 10.0, &[]);
        assert_eq!(metadata_similarity(&a, &b).domain, 1.0);
    }
}
