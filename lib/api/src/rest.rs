use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use personax_core::{CareerDomain, Era, Error, Person, PersonId};
use personax_engine::{
    closeness_tier, explain_score, match_detail, rank_all, score_pair, Explanation, GameMode,
    RankedEntry,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::{rank_hint, GuessRecord, RoundState};
use crate::state::AppState;

#[derive(Serialize)]
struct PersonSummary {
    id: PersonId,
    name: String,
}

#[derive(Serialize)]
struct PersonCard {
    id: PersonId,
    name: String,
    enriched: bool,
    attributes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<CareerDomain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    era: Option<Era>,
    #[serde(skip_serializing_if = "Option::is_none")]
    achievement: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

impl PersonCard {
    fn from_person(person: &Person) -> Self {
        let mut attributes: Vec<String> =
            person.attributes.iter().map(|c| c.as_str().to_string()).collect();
        attributes.sort();
        let mut tags: Vec<String> = person
            .metadata
            .as_ref()
            .map(|m| m.tags.iter().map(|c| c.as_str().to_string()).collect())
            .unwrap_or_default();
        tags.sort();
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
            enriched: person.narrative.is_enriched(),
            attributes,
            domain: person.metadata.as_ref().map(|m| m.domain),
            era: person.metadata.as_ref().map(|m| m.era),
            achievement: person.metadata.as_ref().map(|m| m.achievement),
            tags,
        }
    }
}

#[derive(Deserialize)]
struct RankQuery {
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct CreateGameRequest {
    #[serde(default = "default_mode")]
    mode: String,
}

fn default_mode() -> String {
    "classic".to_string()
}

#[derive(Deserialize)]
struct GuessRequest {
    person_id: PersonId,
}

#[derive(Serialize)]
struct ModeInfo {
    name: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct SecretReveal {
    id: PersonId,
    name: String,
}

#[derive(Serialize)]
struct RoundStatus {
    round_id: Uuid,
    mode: GameMode,
    state: RoundState,
    population: usize,
    guesses: Vec<GuessRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret: Option<SecretReveal>,
}

#[derive(Serialize)]
struct GuessResponse {
    won: bool,
    ordinal: usize,
    rank: usize,
    score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    closeness: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<Explanation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret: Option<SecretReveal>,
}

/// Map an engine error to its HTTP response
fn error_response(err: Error) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        Error::NotReady => HttpResponse::ServiceUnavailable().json(body),
        Error::PersonNotFound(_) | Error::RoundNotFound(_) => {
            HttpResponse::NotFound().json(body)
        }
        Error::RankingNotAvailable | Error::RoundFinished => {
            HttpResponse::Forbidden().json(body)
        }
        Error::EmptyPopulation
        | Error::UnknownMode(_)
        | Error::DuplicatePerson(_)
        | Error::DatasetFormat(_) => HttpResponse::BadRequest().json(body),
        Error::Io(_) | Error::Json(_) => HttpResponse::InternalServerError().json(body),
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: Arc<AppState>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .route("/", web::get().to(status))
                .route("/persons", web::get().to(list_persons))
                .route("/persons/{id}", web::get().to(get_person))
                .route(
                    "/similarity/{target}/{candidate}",
                    web::get().to(get_similarity),
                )
                .route("/rankings/{target}", web::get().to(get_ranking))
                .route("/match/{target}/{candidate}", web::get().to(get_match_detail))
                .route("/modes", web::get().to(list_modes))
                .route("/games", web::post().to(create_game))
                .route("/games/{id}", web::get().to(get_game))
                .route("/games/{id}/guess", web::post().to(guess))
                .route("/games/{id}/resign", web::post().to(resign))
                .route("/games/{id}/ranking", web::get().to(game_ranking))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn status(state: web::Data<Arc<AppState>>) -> ActixResult<HttpResponse> {
    let persons = state.population().map(|p| p.len()).ok();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "name": "personax",
        "version": env!("CARGO_PKG_VERSION"),
        "ready": state.is_ready(),
        "persons": persons,
    })))
}

async fn list_persons(state: web::Data<Arc<AppState>>) -> ActixResult<HttpResponse> {
    let population = match state.population() {
        Ok(p) => p,
        Err(e) => return Ok(error_response(e)),
    };
    let persons: Vec<PersonSummary> = population
        .iter()
        .map(|person| PersonSummary {
            id: person.id.clone(),
            name: person.name.clone(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(persons))
}

async fn get_person(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = PersonId::new(path.into_inner());
    let population = match state.population() {
        Ok(p) => p,
        Err(e) => return Ok(error_response(e)),
    };
    match population.require(&id) {
        Ok(person) => Ok(HttpResponse::Ok().json(PersonCard::from_person(person))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn get_similarity(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (target, candidate) = path.into_inner();
    let target = PersonId::new(target);
    let candidate = PersonId::new(candidate);
    let population = match state.population() {
        Ok(p) => p,
        Err(e) => return Ok(error_response(e)),
    };
    match score_pair(&population, &target, &candidate) {
        Ok(score) => {
            let explanation = explain_score(&score);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "target": target,
                "candidate": candidate,
                "score": score,
                "explanation": explanation,
            })))
        }
        Err(e) => Ok(error_response(e)),
    }
}

async fn get_ranking(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    query: web::Query<RankQuery>,
) -> ActixResult<HttpResponse> {
    let target = PersonId::new(path.into_inner());
    let population = match state.population() {
        Ok(p) => p,
        Err(e) => return Ok(error_response(e)),
    };
    match rank_all(&population, &target) {
        Ok(ranking) => {
            let limit = query.limit.unwrap_or(10);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "target": target,
                "total": ranking.len(),
                "entries": ranking.top(limit),
            })))
        }
        Err(e) => Ok(error_response(e)),
    }
}

async fn get_match_detail(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (target, candidate) = path.into_inner();
    let population = match state.population() {
        Ok(p) => p,
        Err(e) => return Ok(error_response(e)),
    };
    match match_detail(
        &population,
        &PersonId::new(target),
        &PersonId::new(candidate),
    ) {
        Ok(detail) => Ok(HttpResponse::Ok().json(detail)),
        Err(e) => Ok(error_response(e)),
    }
}

async fn list_modes() -> ActixResult<HttpResponse> {
    let modes: Vec<ModeInfo> = GameMode::all()
        .iter()
        .map(|mode| ModeInfo {
            name: mode.name(),
            description: mode.describe(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(modes))
}

async fn create_game(
    state: web::Data<Arc<AppState>>,
    req: web::Json<CreateGameRequest>,
) -> ActixResult<HttpResponse> {
    // unknown mode names answer 400 with the engine's error body
    let mode = match GameMode::from_name(&req.mode) {
        Ok(mode) => mode,
        Err(e) => return Ok(error_response(e)),
    };
    let population = match state.population() {
        Ok(p) => p,
        Err(e) => return Ok(error_response(e)),
    };
    let candidates = mode.filter(&population).len();
    match state.sessions().create(mode, population) {
        Ok(round_id) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "round_id": round_id,
            "mode": mode,
            "candidates": candidates,
        }))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn get_game(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let status = state.sessions().with_round(&id, |round| {
        Ok(RoundStatus {
            round_id: round.id,
            mode: round.mode,
            state: round.state(),
            population: round.population().len(),
            guesses: round.guesses().to_vec(),
            secret: round.revealed_secret().map(|person| SecretReveal {
                id: person.id.clone(),
                name: person.name.clone(),
            }),
        })
    });
    match status {
        Ok(status) => Ok(HttpResponse::Ok().json(status)),
        Err(e) => Ok(error_response(e)),
    }
}

async fn guess(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
    req: web::Json<GuessRequest>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let result = state.sessions().with_round_mut(&id, |round| {
        let outcome = round.guess(&req.person_id)?;
        let secret = round.revealed_secret().map(|person| SecretReveal {
            id: person.id.clone(),
            name: person.name.clone(),
        });
        Ok((outcome, secret))
    });

    match result {
        Ok((outcome, secret)) => {
            let response = if outcome.won {
                GuessResponse {
                    won: true,
                    ordinal: outcome.ordinal,
                    rank: outcome.entry.rank,
                    score: outcome.entry.score.combined,
                    closeness: None,
                    hint: None,
                    explanation: None,
                    secret,
                }
            } else {
                GuessResponse {
                    won: false,
                    ordinal: outcome.ordinal,
                    rank: outcome.entry.rank,
                    score: outcome.entry.score.combined,
                    closeness: Some(closeness_tier(outcome.entry.score.combined)),
                    hint: Some(rank_hint(outcome.entry.rank)),
                    explanation: Some(explain_score(&outcome.entry.score)),
                    secret: None,
                }
            };
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => Ok(error_response(e)),
    }
}

async fn resign(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let result = state.sessions().with_round_mut(&id, |round| {
        round.resign()?;
        let secret = round.revealed_secret().map(|person| SecretReveal {
            id: person.id.clone(),
            name: person.name.clone(),
        });
        Ok(secret)
    });
    match result {
        Ok(secret) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "state": RoundState::Resigned,
            "secret": secret,
        }))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn game_ranking(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
    query: web::Query<RankQuery>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let result = state.sessions().with_round(&id, |round| {
        let ranking = round.ranking()?;
        let entries: Vec<RankedEntry> = match query.limit {
            Some(limit) => ranking.top(limit).to_vec(),
            None => ranking.entries().to_vec(),
        };
        Ok((ranking.len(), entries))
    });
    match result {
        Ok((total, entries)) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "round_id": id,
            "total": total,
            "entries": entries,
        }))),
        Err(e) => Ok(error_response(e)),
    }
}
