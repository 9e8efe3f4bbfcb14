//! Game modes
//!
//! Named population filters used when starting a round. Persons without
//! metadata never pass a metadata-dependent filter.

use std::sync::Arc;

use personax_core::{CareerDomain, Era, Error, Person, Population, Result};
use serde::Serialize;

/// Minimum achievement score for the notable mode
pub const NOTABLE_THRESHOLD: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Classic,
    Entertainment,
    Sports,
    Notable,
    Modern,
}

impl GameMode {
    #[must_use]
    pub fn all() -> &'static [GameMode] {
        &[
            GameMode::Classic,
            GameMode::Entertainment,
            GameMode::Sports,
            GameMode::Notable,
            GameMode::Modern,
        ]
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Entertainment => "entertainment",
            GameMode::Sports => "sports",
            GameMode::Notable => "notable",
            GameMode::Modern => "modern",
        }
    }

    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            GameMode::Classic => "Anyone in the population",
            GameMode::Entertainment => "Entertainment, music, creative arts and media figures",
            GameMode::Sports => "Sports figures",
            GameMode::Notable => "Widely recognized figures",
            GameMode::Modern => "People from recent generations",
        }
    }

    /// Parse a mode name
    pub fn from_name(name: &str) -> Result<GameMode> {
        GameMode::all()
            .iter()
            .copied()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| Error::UnknownMode(name.to_string()))
    }

    /// Whether a person is eligible under this mode
    #[must_use]
    pub fn admits(&self, person: &Person) -> bool {
        match self {
            GameMode::Classic => true,
            GameMode::Entertainment => person.metadata.as_ref().is_some_and(|m| {
                matches!(
                    m.domain,
                    CareerDomain::Entertainment
                        | CareerDomain::Music
                        | CareerDomain::CreativeArts
                        | CareerDomain::Media
                )
            }),
            GameMode::Sports => person
                .metadata
                .as_ref()
                .is_some_and(|m| m.domain == CareerDomain::Sports),
            GameMode::Notable => person
                .metadata
                .as_ref()
                .is_some_and(|m| m.achievement >= NOTABLE_THRESHOLD),
            GameMode::Modern => person.metadata.as_ref().is_some_and(|m| {
                matches!(m.era, Era::Millennial | Era::MillennialLate | Era::GenZ)
            }),
        }
    }

    /// Eligible persons from the snapshot
    #[must_use]
    pub fn filter(&self, population: &Population) -> Vec<Arc<Person>> {
        population
            .iter()
            .filter(|person| self.admits(person))
            .cloned()
            .collect()
    }
}
