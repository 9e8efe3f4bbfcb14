use serde::{Deserialize, Serialize};

use crate::attribute::AttributeSet;

/// Broad career field a person is known for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerDomain {
    Entertainment,
    Sports,
    CreativeArts,
    Media,
    Music,
    Politics,
    Business,
    Writing,
    Other,
}

/// Generation bucket, ordered oldest to youngest with Unknown as the
/// final rung
///
/// Unknown is a real rung on the ladder: a person with no birth year sits
/// one step past GenZ, so Unknown vs GenZ still counts as adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    PreBoomer,
    Boomer,
    GenX,
    Millennial,
    MillennialLate,
    GenZ,
    Unknown,
}

impl Era {
    /// Position on the ladder
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Era::PreBoomer => 0,
            Era::Boomer => 1,
            Era::GenX => 2,
            Era::Millennial => 3,
            Era::MillennialLate => 4,
            Era::GenZ => 5,
            Era::Unknown => 6,
        }
    }

    /// Bucket a birth year
    #[must_use]
    pub fn from_birth_year(year: Option<i32>) -> Self {
        match year {
            None => Era::Unknown,
            Some(y) if y >= 2000 => Era::GenZ,
            Some(y) if y >= 1990 => Era::MillennialLate,
            Some(y) if y >= 1980 => Era::Millennial,
            Some(y) if y >= 1965 => Era::GenX,
            Some(y) if y >= 1946 => Era::Boomer,
            Some(_) => Era::PreBoomer,
        }
    }

    /// Ladder closeness: 1.0 for the same rung, 0.5 for adjacent rungs,
    /// 0.0 otherwise
    #[must_use]
    pub fn closeness(&self, other: &Era) -> f32 {
        let distance = self.index().abs_diff(other.index());
        match distance {
            0 => 1.0,
            1 => 0.5,
            _ => 0.0,
        }
    }
}

/// Structured metadata used by the metadata similarity channel
#[derive(Debug, Clone, PartialEq)]
pub struct PersonMetadata {
    pub domain: CareerDomain,
    pub era: Era,
    /// Recognition level in [0, 100]
    pub achievement: f32,
    /// Thematic tags extracted from the person's narrative
    pub tags: AttributeSet,
}

impl PersonMetadata {
    #[must_use]
    pub fn new(domain: CareerDomain, era: Era, achievement: f32, tags: AttributeSet) -> Self {
        Self {
            domain,
            era,
            achievement: achievement.clamp(0.0, 100.0),
            tags,
        }
    }
}

/// Derive an achievement score from a person's attribute codes
///
/// Each code contributes its kind's prestige weight; the sum is capped
/// at 100. Used when the dataset does not supply an explicit score.
#[must_use]
pub fn derive_achievement(attributes: &AttributeSet) -> f32 {
    let total: f32 = attributes
        .iter()
        .map(|code| code.kind().prestige_weight())
        .sum();
    total.min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeCode;

    #[test]
    fn test_era_from_birth_year() {
        assert_eq!(Era::from_birth_year(None), Era::Unknown);
        assert_eq!(Era::from_birth_year(Some(2004)), Era::GenZ);
        assert_eq!(Era::from_birth_year(Some(2000)), Era::GenZ);
        assert_eq!(Era::from_birth_year(Some(1999)), Era::MillennialLate);
        assert_eq!(Era::from_birth_year(Some(1990)), Era::MillennialLate);
        assert_eq!(Era::from_birth_year(Some(1985)), Era::Millennial);
        assert_eq!(Era::from_birth_year(Some(1980)), Era::Millennial);
        assert_eq!(Era::from_birth_year(Some(1970)), Era::GenX);
        assert_eq!(Era::from_birth_year(Some(1965)), Era::GenX);
        assert_eq!(Era::from_birth_year(Some(1950)), Era::Boomer);
        assert_eq!(Era::from_birth_year(Some(1946)), Era::Boomer);
        assert_eq!(Era::from_birth_year(Some(1945)), Era::PreBoomer);
        assert_eq!(Era::from_birth_year(Some(1900)), Era::PreBoomer);
    }

    #[test]
    fn test_era_closeness_same() {
        assert_eq!(Era::Boomer.closeness(&Era::Boomer), 1.0);
        assert_eq!(Era::Unknown.closeness(&Era::Unknown), 1.0);
    }

    #[test]
    fn test_era_closeness_adjacent() {
        assert_eq!(Era::Boomer.closeness(&Era::GenX), 0.5);
        assert_eq!(Era::GenX.closeness(&Era::Boomer), 0.5);
        // Unknown sits one past GenZ on the ladder
        assert_eq!(Era::GenZ.closeness(&Era::Unknown), 0.5);
        assert_eq!(Era::Unknown.closeness(&Era::GenZ), 0.5);
    }

    #[test]
    fn test_era_closeness_distant() {
        assert_eq!(Era::PreBoomer.closeness(&Era::GenZ), 0.0);
        assert_eq!(Era::Boomer.closeness(&Era::Millennial), 0.0);
        assert_eq!(Era::Millennial.closeness(&Era::Unknown), 0.0);
    }

    #[test]
    fn test_achievement_clamped() {
        let meta = PersonMetadata::new(
            CareerDomain::Music,
            Era::Boomer,
            250.0,
            AttributeSet::new(),
        );
        assert_eq!(meta.achievement, 100.0);

        let meta = PersonMetadata::new(
            CareerDomain::Music,
            Era::Boomer,
            -5.0,
            AttributeSet::new(),
        );
        assert_eq!(meta.achievement, 0.0);
    }

    #[test]
    fn test_derive_achievement_weights() {
        let attrs: AttributeSet = [
            "award:grammy",   // 3.0
            "work:thriller",  // 2.5
            "nom:oscar",      // 2.0
            "office:senator", // 2.0
            "occ:singer",     // not a prestige code
            "cit:US",         // not a prestige code
        ]
        .into_iter()
        .collect();
        assert!((derive_achievement(&attrs) - 9.5).abs() < 1e-6);
    }

    #[test]
    fn test_derive_achievement_capped() {
        let attrs: AttributeSet = (0..50)
            .map(|i| AttributeCode::new(format!("award:a{}", i)))
            .collect();
        assert_eq!(derive_achievement(&attrs), 100.0);
    }

    #[test]
    fn test_non_prestige_codes_do_not_count_toward_achievement() {
        let attrs: AttributeSet = ["tag:pop", "tag:dance", "occ:singer", "cit:US", "infl:p9"]
            .into_iter()
            .collect();
        assert_eq!(derive_achievement(&attrs), 0.0);
    }
}
