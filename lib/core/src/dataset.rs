use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::attribute::{AttributeCode, AttributeSet};
use crate::error::{Error, Result};
use crate::metadata::{derive_achievement, CareerDomain, Era, PersonMetadata};
use crate::person::{AspectEmbeddings, NarrativeData, Person, PersonId};
use crate::population::{Labels, Population, PopulationBuilder};
use crate::vector::Embedding;

/// On-disk dataset file
#[derive(Debug, Deserialize)]
struct DatasetFile {
    embedding_dim: usize,
    #[serde(default)]
    labels: HashMap<String, String>,
    persons: Vec<PersonRecord>,
}

#[derive(Debug, Deserialize)]
struct PersonRecord {
    id: String,
    name: String,
    #[serde(default)]
    birth_year: Option<i32>,
    #[serde(default)]
    attributes: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    domain: Option<CareerDomain>,
    #[serde(default)]
    achievement: Option<f32>,
    #[serde(default)]
    embedding: Option<Embedding>,
    #[serde(default)]
    aspects: Option<AspectRecord>,
}

#[derive(Debug, Deserialize)]
struct AspectRecord {
    career: Embedding,
    achievement: Embedding,
    biographical: Embedding,
    influence: Embedding,
    combined: Embedding,
}

impl PersonRecord {
    fn has_metadata(&self) -> bool {
        self.domain.is_some()
            || self.birth_year.is_some()
            || self.achievement.is_some()
            || !self.tags.is_empty()
    }

    fn into_person(self) -> Result<Person> {
        let has_metadata = self.has_metadata();
        let narrative = match (self.aspects, self.embedding) {
            // When aspects are present their combined embedding wins over
            // the top-level one
            (Some(aspects), _) => NarrativeData::Enriched {
                combined: aspects.combined,
                aspects: AspectEmbeddings {
                    career: aspects.career,
                    achievement: aspects.achievement,
                    biographical: aspects.biographical,
                    influence: aspects.influence,
                },
            },
            (None, Some(embedding)) => NarrativeData::Plain {
                combined: embedding,
            },
            (None, None) => {
                return Err(Error::DatasetFormat(format!(
                    "person {} has neither an embedding nor aspects",
                    self.id
                )))
            }
        };

        let attributes: AttributeSet = self
            .attributes
            .iter()
            .map(|code| AttributeCode::new(code.as_str()))
            .collect();

        let metadata = if has_metadata {
            let domain = self.domain.unwrap_or(CareerDomain::Other);
            let era = Era::from_birth_year(self.birth_year);
            let achievement = self
                .achievement
                .unwrap_or_else(|| derive_achievement(&attributes));
            let tags: AttributeSet = self
                .tags
                .iter()
                .map(|tag| AttributeCode::new(tag.as_str()))
                .collect();
            Some(PersonMetadata::new(domain, era, achievement, tags))
        } else {
            None
        };

        let mut person = Person::new(
            PersonId::new(self.id),
            self.name,
            attributes,
            narrative,
        );
        if let Some(metadata) = metadata {
            person = person.with_metadata(metadata);
        }
        Ok(person)
    }
}

/// Load a population snapshot from a JSON dataset file
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Population> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let population = parse_dataset(&raw)?;
    info!(
        persons = population.len(),
        dim = population.dim(),
        path = %path.display(),
        "dataset loaded"
    );
    Ok(population)
}

/// Parse a dataset from its JSON text
pub fn parse_dataset(raw: &str) -> Result<Population> {
    let file: DatasetFile = serde_json::from_str(raw)?;
    if file.persons.is_empty() {
        return Err(Error::DatasetFormat("dataset contains no persons".into()));
    }
    if file.embedding_dim == 0 {
        return Err(Error::DatasetFormat("embedding_dim must be positive".into()));
    }

    let labels: Labels = file
        .labels
        .into_iter()
        .map(|(code, label)| (AttributeCode::new(code), label))
        .collect();

    let mut builder = PopulationBuilder::new(file.embedding_dim).with_labels(labels);
    for record in file.persons {
        builder.add(record.into_person()?)?;
    }
    Ok(builder.build())
}
