//! Game rounds and the in-memory session store
//!
//! A round pins the population snapshot it started with, so a reload mid
//! round cannot change its scores. Rounds recompute rankings per call.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;
use personax_core::{Error, Person, PersonId, Population, Result};
use personax_engine::{rank_all, rank_of, GameMode, RankedEntry, Ranking};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Lifecycle of a game round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    NotStarted,
    InProgress,
    Won,
    Resigned,
}

/// One recorded guess
#[derive(Debug, Clone, Serialize)]
pub struct GuessRecord {
    /// 1-based guess number within the round
    pub ordinal: usize,
    pub person_id: PersonId,
    pub name: String,
    pub rank: usize,
    pub score: f32,
}

/// Outcome handed back for a single guess
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub entry: RankedEntry,
    pub ordinal: usize,
    pub won: bool,
}

/// A single game round against a hidden secret person
pub struct GameRound {
    pub id: Uuid,
    pub mode: GameMode,
    population: Arc<Population>,
    secret: PersonId,
    state: RoundState,
    guesses: Vec<GuessRecord>,
}

impl GameRound {
    #[must_use]
    pub fn new(mode: GameMode, population: Arc<Population>, secret: PersonId) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            population,
            secret,
            state: RoundState::NotStarted,
            guesses: Vec::new(),
        }
    }

    /// Move a freshly constructed round into play
    pub fn start(&mut self) {
        if self.state == RoundState::NotStarted {
            self.state = RoundState::InProgress;
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn population(&self) -> &Arc<Population> {
        &self.population
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Won | RoundState::Resigned)
    }

    /// The secret person, revealed only once the round has ended
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Arc<Person>> {
        if self.is_over() {
            self.population.get(&self.secret)
        } else {
            None
        }
    }

    /// Record a guess against the secret
    ///
    /// Guessing the secret wins the round. Guessing on a finished round
    /// is rejected.
    pub fn guess(&mut self, guess_id: &PersonId) -> Result<GuessOutcome> {
        if self.state != RoundState::InProgress {
            return Err(Error::RoundFinished);
        }

        let entry = rank_of(&self.population, &self.secret, guess_id)?;
        let ordinal = self.guesses.len() + 1;
        self.guesses.push(GuessRecord {
            ordinal,
            person_id: entry.person_id.clone(),
            name: entry.name.clone(),
            rank: entry.rank,
            score: entry.score.combined,
        });

        let won = guess_id == &self.secret;
        if won {
            self.state = RoundState::Won;
            info!(round = %self.id, guesses = ordinal, "round won");
        }

        Ok(GuessOutcome {
            entry,
            ordinal,
            won,
        })
    }

    /// Give up and reveal the secret
    pub fn resign(&mut self) -> Result<()> {
        if self.state != RoundState::InProgress {
            return Err(Error::RoundFinished);
        }
        self.state = RoundState::Resigned;
        info!(round = %self.id, guesses = self.guesses.len(), "round resigned");
        Ok(())
    }

    /// Full ranking against the secret
    ///
    /// Only available once the round has ended; recomputed per call from
    /// the pinned snapshot.
    pub fn ranking(&self) -> Result<Ranking> {
        if !self.is_over() {
            return Err(Error::RankingNotAvailable);
        }
        rank_all(&self.population, &self.secret)
    }
}

/// Coarse temperature feedback for an in-progress guess
#[must_use]
pub fn rank_hint(rank: usize) -> &'static str {
    if rank <= 10 {
        "scorching"
    } else if rank <= 50 {
        "hot"
    } else if rank <= 200 {
        "warm"
    } else if rank <= 500 {
        "cool"
    } else {
        "cold"
    }
}

/// In-memory registry of active rounds
pub struct SessionStore {
    rounds: RwLock<AHashMap<Uuid, GameRound>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rounds: RwLock::new(AHashMap::new()),
        }
    }

    /// Create and start a round for the given mode
    ///
    /// The secret is drawn uniformly from the mode-filtered snapshot.
    pub fn create(&self, mode: GameMode, population: Arc<Population>) -> Result<Uuid> {
        let candidates = mode.filter(&population);
        if candidates.is_empty() {
            return Err(Error::EmptyPopulation);
        }
        let secret = candidates[rand::random_range(0..candidates.len())]
            .id
            .clone();

        let mut round = GameRound::new(mode, population, secret);
        round.start();
        let id = round.id;
        info!(round = %id, mode = mode.name(), candidates = candidates.len(), "round created");
        self.rounds.write().insert(id, round);
        Ok(id)
    }

    /// Run a closure against a round
    pub fn with_round<R>(&self, id: &Uuid, f: impl FnOnce(&GameRound) -> Result<R>) -> Result<R> {
        let rounds = self.rounds.read();
        let round = rounds
            .get(id)
            .ok_or_else(|| Error::RoundNotFound(id.to_string()))?;
        f(round)
    }

    /// Run a mutating closure against a round
    pub fn with_round_mut<R>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut GameRound) -> Result<R>,
    ) -> Result<R> {
        let mut rounds = self.rounds.write();
        let round = rounds
            .get_mut(id)
            .ok_or_else(|| Error::RoundNotFound(id.to_string()))?;
        f(round)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.read().is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
