use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeSet, Channel};
use crate::metadata::PersonMetadata;
use crate::vector::Embedding;

/// Stable identifier of a person within a population
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        PersonId::new(s)
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        PersonId::new(s)
    }
}

/// Per-aspect narrative embeddings for an enriched person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectEmbeddings {
    pub career: Embedding,
    pub achievement: Embedding,
    pub biographical: Embedding,
    pub influence: Embedding,
}

/// Narrative embedding data, resolved once at load time
///
/// A person is either enriched with per-aspect embeddings or carries only
/// the single combined embedding. Scoring picks its path off this enum
/// instead of re-checking optional fields per aspect.
#[derive(Debug, Clone, PartialEq)]
pub enum NarrativeData {
    Enriched {
        combined: Embedding,
        aspects: AspectEmbeddings,
    },
    Plain {
        combined: Embedding,
    },
}

impl NarrativeData {
    /// The combined narrative embedding, present in both variants
    #[inline]
    #[must_use]
    pub fn combined(&self) -> &Embedding {
        match self {
            NarrativeData::Enriched { combined, .. } => combined,
            NarrativeData::Plain { combined } => combined,
        }
    }

    #[inline]
    #[must_use]
    pub fn aspects(&self) -> Option<&AspectEmbeddings> {
        match self {
            NarrativeData::Enriched { aspects, .. } => Some(aspects),
            NarrativeData::Plain { .. } => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_enriched(&self) -> bool {
        matches!(self, NarrativeData::Enriched { .. })
    }
}

/// A member of the population
#[derive(Debug, Clone)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub attributes: AttributeSet,
    pub narrative: NarrativeData,
    pub metadata: Option<PersonMetadata>,
    factual: AttributeSet,
    relational: AttributeSet,
}

impl Person {
    /// Create a person; channel subsets are split out of the attribute set
    /// once here
    #[must_use]
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        attributes: AttributeSet,
        narrative: NarrativeData,
    ) -> Self {
        let factual = attributes.channel_subset(Channel::Factual);
        let relational = attributes.channel_subset(Channel::Relational);
        Self {
            id,
            name: name.into(),
            attributes,
            narrative,
            metadata: None,
            factual,
            relational,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, metadata: PersonMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Factual attribute codes (occupation, citizenship, awards)
    #[inline]
    #[must_use]
    pub fn factual_set(&self) -> &AttributeSet {
        &self.factual
    }

    /// Relational attribute codes (influences, teachers, notable works)
    #[inline]
    #[must_use]
    pub fn relational_set(&self) -> &AttributeSet {
        &self.relational
    }

    /// Thematic tags, empty when the person has no metadata
    #[must_use]
    pub fn tags(&self) -> AttributeSet {
        self.metadata
            .as_ref()
            .map(|m| m.tags.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(data: Vec<f32>) -> NarrativeData {
        NarrativeData::Plain {
            combined: Embedding::new(data),
        }
    }

    #[test]
    fn test_channel_split_at_construction() {
        let attrs: AttributeSet = ["occ:singer", "cit:US", "infl:p9", "work:w1", "nom:n1"]
            .into_iter()
            .collect();
        let person = Person::new(PersonId::new("p1"), "Test", attrs, plain(vec![1.0]));
        assert_eq!(person.factual_set().len(), 2);
        assert_eq!(person.relational_set().len(), 2);
        // nom: belongs to neither channel
        assert_eq!(person.attributes.len(), 5);
    }

    #[test]
    fn test_narrative_combined_access() {
        let enriched = NarrativeData::Enriched {
            combined: Embedding::new(vec![1.0, 0.0]),
            aspects: AspectEmbeddings {
                career: Embedding::new(vec![1.0, 0.0]),
                achievement: Embedding::new(vec![1.0, 0.0]),
                biographical: Embedding::new(vec![1.0, 0.0]),
                influence: Embedding::new(vec![1.0, 0.0]),
            },
        };
        assert!(enriched.is_enriched());
        assert_eq!(enriched.combined().dim(), 2);
        assert!(enriched.aspects().is_some());

        let p = plain(vec![0.5, 0.5]);
        assert!(!p.is_enriched());
        assert!(p.aspects().is_none());
    }
}
