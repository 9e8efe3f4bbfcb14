//! Full-population ranking
//!
//! Scores every person against the target in parallel and assigns dense
//! 1-based ranks. A guess's rank is always derived from the full ranking
//! so it agrees with what the end-of-round ranking will show.

use std::cmp::Ordering;
use std::sync::Arc;

use personax_core::{Error, Person, PersonId, Population, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::score::{score_persons, SimilarityScore};

/// One row of a ranking
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub person_id: PersonId,
    pub name: String,
    pub score: SimilarityScore,
}

/// A full ranking of the population against one target
#[derive(Debug)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

impl Ranking {
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entry_for(&self, id: &PersonId) -> Option<&RankedEntry> {
        self.entries.iter().find(|entry| &entry.person_id == id)
    }

    /// First `n` rows (fewer when the ranking is shorter)
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedEntry] {
        &self.entries[..n.min(self.entries.len())]
    }
}

/// Rank the whole population against a target
///
/// Entries are ordered by final score descending, then person id
/// ascending. Ranks are dense: equal final scores share a rank and the
/// next distinct score takes the following rank, so ties read 1, 1, 2.
pub fn rank_all(population: &Population, target: &PersonId) -> Result<Ranking> {
    let target_person = population.require(target)?;

    let mut scored: Vec<(Arc<Person>, SimilarityScore)> = population
        .persons()
        .par_iter()
        .map(|candidate| {
            let score = score_persons(candidate, target_person);
            (Arc::clone(candidate), score)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.1.combined
            .partial_cmp(&a.1.combined)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.id.cmp(&b.0.id))
    });

    let mut entries = Vec::with_capacity(scored.len());
    let mut rank = 0usize;
    let mut previous: Option<f32> = None;
    for (person, score) in scored {
        if previous != Some(score.combined) {
            rank += 1;
            previous = Some(score.combined);
        }
        entries.push(RankedEntry {
            rank,
            person_id: person.id.clone(),
            name: person.name.clone(),
            score,
        });
    }

    debug!(target = %target, entries = entries.len(), "ranking computed");
    Ok(Ranking { entries })
}

/// Rank of a single guess against the target
pub fn rank_of(
    population: &Population,
    target: &PersonId,
    guess: &PersonId,
) -> Result<RankedEntry> {
    population.require(guess)?;
    let ranking = rank_all(population, target)?;
    ranking
        .entry_for(guess)
        .cloned()
        .ok_or_else(|| Error::PersonNotFound(guess.to_string()))
}
