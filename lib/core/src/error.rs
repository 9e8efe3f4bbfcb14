use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Engine not ready: population snapshot has not been loaded yet")]
    NotReady,

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Duplicate person id in dataset: {0}")]
    DuplicatePerson(String),

    #[error("Invalid dataset: {0}")]
    DatasetFormat(String),

    #[error("Game round not found: {0}")]
    RoundNotFound(String),

    #[error("Unknown game mode: {0}")]
    UnknownMode(String),

    #[error("Game round is not in progress")]
    RoundFinished,

    #[error("Full ranking is only available once the round has ended")]
    RankingNotAvailable,

    #[error("No candidates match the selected game mode")]
    EmptyPopulation,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
