use std::sync::Arc;

use ahash::AHashMap;
use tracing::warn;

use crate::attribute::AttributeCode;
use crate::error::{Error, Result};
use crate::person::{Person, PersonId};

/// Human-readable labels for attribute codes
#[derive(Debug, Clone, Default)]
pub struct Labels {
    map: AHashMap<AttributeCode, String>,
}

impl Labels {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: AttributeCode, label: impl Into<String>) {
        self.map.insert(code, label.into());
    }

    /// Label for a code, falling back to the raw code string
    #[must_use]
    pub fn label_for(&self, code: &AttributeCode) -> String {
        self.map
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.as_str().to_string())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(AttributeCode, String)> for Labels {
    fn from_iter<I: IntoIterator<Item = (AttributeCode, String)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// An immutable population snapshot
///
/// Built once, then shared behind an `Arc`. Every similarity query
/// recomputes from the snapshot; nothing mutates it after `build`.
#[derive(Debug)]
pub struct Population {
    persons: Vec<Arc<Person>>,
    index: AHashMap<PersonId, usize>,
    dim: usize,
    labels: Labels,
}

impl Population {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Declared embedding dimension for this population
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    #[must_use]
    pub fn get(&self, id: &PersonId) -> Option<&Arc<Person>> {
        self.index.get(id).map(|&i| &self.persons[i])
    }

    /// Look up a person, failing with `PersonNotFound` on unknown ids
    pub fn require(&self, id: &PersonId) -> Result<&Arc<Person>> {
        self.get(id)
            .ok_or_else(|| Error::PersonNotFound(id.to_string()))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Person>> {
        self.persons.iter()
    }

    #[inline]
    #[must_use]
    pub fn persons(&self) -> &[Arc<Person>] {
        &self.persons
    }
}

/// Builder for a population snapshot
pub struct PopulationBuilder {
    persons: Vec<Arc<Person>>,
    index: AHashMap<PersonId, usize>,
    dim: usize,
    labels: Labels,
}

impl PopulationBuilder {
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            persons: Vec::new(),
            index: AHashMap::new(),
            dim,
            labels: Labels::new(),
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Add a person to the snapshot under construction
    ///
    /// A combined embedding whose dimension disagrees with the declared
    /// one is kept (cosine degrades to 0.0 at scoring time) but logged.
    pub fn add(&mut self, person: Person) -> Result<()> {
        if self.index.contains_key(&person.id) {
            return Err(Error::DuplicatePerson(person.id.to_string()));
        }
        let actual = person.narrative.combined().dim();
        if actual != self.dim {
            warn!(
                person = %person.id,
                expected = self.dim,
                actual,
                "embedding dimension differs from the declared dimension"
            );
        }
        self.index.insert(person.id.clone(), self.persons.len());
        self.persons.push(Arc::new(person));
        Ok(())
    }

    #[must_use]
    pub fn build(self) -> Population {
        Population {
            persons: self.persons,
            index: self.index,
            dim: self.dim,
            labels: self.labels,
        }
    }
}
