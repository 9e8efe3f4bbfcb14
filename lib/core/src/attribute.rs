use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A typed attribute code such as `occ:singer` or `infl:p42`
///
/// The prefix up to the first `:` selects the attribute kind; everything
/// after it identifies the value. Codes without a recognized prefix are
/// kept but belong to no scoring channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeCode(String);

impl AttributeCode {
    #[inline]
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify this code by its prefix
    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        match self.0.split_once(':').map(|(prefix, _)| prefix) {
            Some("occ") => AttributeKind::Occupation,
            Some("cit") => AttributeKind::Citizenship,
            Some("award") => AttributeKind::Award,
            Some("nom") => AttributeKind::Nomination,
            Some("office") => AttributeKind::Office,
            Some("infl") => AttributeKind::InfluencedBy,
            Some("student") => AttributeKind::StudentOf,
            Some("work") => AttributeKind::NotableWork,
            Some("tag") => AttributeKind::Tag,
            _ => AttributeKind::Other,
        }
    }
}

impl std::fmt::Display for AttributeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AttributeCode {
    fn from(s: &str) -> Self {
        AttributeCode::new(s)
    }
}

impl From<String> for AttributeCode {
    fn from(s: String) -> Self {
        AttributeCode::new(s)
    }
}

/// Scoring channel an attribute kind contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Factual,
    Relational,
}

/// The attribute families the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Occupation,
    Citizenship,
    Award,
    Nomination,
    Office,
    InfluencedBy,
    StudentOf,
    NotableWork,
    Tag,
    Other,
}

impl AttributeKind {
    /// Channel membership
    ///
    /// Nomination, Office and Tag codes feed achievement derivation and
    /// metadata similarity but belong to neither overlap channel.
    #[must_use]
    pub fn channel(&self) -> Option<Channel> {
        match self {
            AttributeKind::Occupation | AttributeKind::Citizenship | AttributeKind::Award => {
                Some(Channel::Factual)
            }
            AttributeKind::InfluencedBy | AttributeKind::StudentOf | AttributeKind::NotableWork => {
                Some(Channel::Relational)
            }
            _ => None,
        }
    }

    /// Weight of one code of this kind in the derived achievement score
    ///
    /// Only recognition-bearing kinds count; everything else contributes
    /// nothing.
    #[must_use]
    pub fn prestige_weight(&self) -> f32 {
        match self {
            AttributeKind::Award => 3.0,
            AttributeKind::NotableWork => 2.5,
            AttributeKind::Nomination => 2.0,
            AttributeKind::Office => 2.0,
            _ => 0.0,
        }
    }
}

/// An unordered set of attribute codes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    codes: AHashSet<AttributeCode>,
}

impl AttributeSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert(&mut self, code: AttributeCode) -> bool {
        self.codes.insert(code)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, code: &AttributeCode) -> bool {
        self.codes.contains(code)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeCode> {
        self.codes.iter()
    }

    /// Subset of codes belonging to the given channel
    #[must_use]
    pub fn channel_subset(&self, channel: Channel) -> AttributeSet {
        self.codes
            .iter()
            .filter(|code| code.kind().channel() == Some(channel))
            .cloned()
            .collect()
    }

    /// Codes present in both sets, sorted for stable output
    #[must_use]
    pub fn shared_with(&self, other: &AttributeSet) -> Vec<AttributeCode> {
        let mut out: Vec<AttributeCode> = self
            .codes
            .intersection(&other.codes)
            .cloned()
            .collect();
        out.sort();
        out
    }

    /// Codes present in `self` but not in `other`, sorted for stable output
    #[must_use]
    pub fn missing_from(&self, other: &AttributeSet) -> Vec<AttributeCode> {
        let mut out: Vec<AttributeCode> = self
            .codes
            .difference(&other.codes)
            .cloned()
            .collect();
        out.sort();
        out
    }

    /// Jaccard overlap between two sets
    ///
    /// Two empty sets have no evidence of overlap and score 0.0, not 1.0.
    #[must_use]
    pub fn jaccard(&self, other: &AttributeSet) -> f32 {
        if self.is_empty() && other.is_empty() {
            return 0.0;
        }
        let intersection = self.codes.intersection(&other.codes).count();
        let union = self.codes.len() + other.codes.len() - intersection;
        intersection as f32 / union as f32
    }
}

impl FromIterator<AttributeCode> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = AttributeCode>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(AttributeCode::from).collect()
    }
}
