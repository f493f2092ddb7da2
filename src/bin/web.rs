//! Single binary web server: JSON API over one Swiss tournament stored in SQLite.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, DATABASE_PATH (file path, or `:memory:` for a throwaway store).

use actix_web::{
    delete, get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use swiss_tournament_web::{PlayerId, SqliteStore, Tournament, TournamentError};

/// One tournament, one store handle. The mutex serializes writers so no read
/// ever sees a half-applied match report.
type AppState = Data<Mutex<Tournament<SqliteStore>>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Serialize)]
struct RegisteredResponse {
    id: PlayerId,
}

#[derive(Serialize)]
struct CountResponse {
    count: usize,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner_id: PlayerId,
    loser_id: PlayerId,
}

/// Client mistakes are 400; store failures and broken invariants are 500.
fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::EmptyName | TournamentError::Integrity { .. } => {
            HttpResponse::BadRequest().json(body)
        }
        TournamentError::Store(_)
        | TournamentError::InvariantViolation(_)
        | TournamentError::Export(_) => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament-web",
    })
}

/// Register a player; responds with the assigned id.
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    let mut t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.register_player(&body.name) {
        Ok(id) => HttpResponse::Ok().json(RegisteredResponse { id }),
        Err(e) => error_response(&e),
    }
}

#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    let t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.count_players() {
        Ok(count) => HttpResponse::Ok().json(CountResponse { count }),
        Err(e) => error_response(&e),
    }
}

/// Remove every player (and their matches).
#[delete("/api/players")]
async fn api_delete_players(state: AppState) -> HttpResponse {
    let mut t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.delete_players() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.player_standings() {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(&e),
    }
}

/// Standings as a CSV download.
#[get("/api/standings.csv")]
async fn api_standings_csv(state: AppState) -> HttpResponse {
    let t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.standings_csv() {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => error_response(&e),
    }
}

/// Report a match result. Unknown ids or a self-match come back as 400.
#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    let mut t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.report_match(body.winner_id, body.loser_id) {
        Ok(recorded) => HttpResponse::Ok().json(recorded),
        Err(e) => error_response(&e),
    }
}

#[get("/api/matches")]
async fn api_list_matches(state: AppState) -> HttpResponse {
    let t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.matches() {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => error_response(&e),
    }
}

/// Remove all matches and reset every player's record to 0-0.
#[delete("/api/matches")]
async fn api_delete_matches(state: AppState) -> HttpResponse {
    let mut t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.delete_matches() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Next-round pairings.
#[get("/api/pairings")]
async fn api_pairings(state: AppState) -> HttpResponse {
    let t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.swiss_pairings() {
        Ok(pairings) => HttpResponse::Ok().json(pairings),
        Err(e) => error_response(&e),
    }
}

#[get("/api/audit")]
async fn api_audit(state: AppState) -> HttpResponse {
    let t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.audit() {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        Err(e) => error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_path() -> String {
    "tournament.db".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let db_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| default_database_path());

    let store = if db_path == ":memory:" {
        SqliteStore::open_in_memory()
    } else {
        SqliteStore::open(&db_path)
    }
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    log::info!("Using tournament database {}", db_path);

    let state = Data::new(Mutex::new(Tournament::new(store)));

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_register_player)
            .service(api_count_players)
            .service(api_delete_players)
            .service(api_standings_csv)
            .service(api_standings)
            .service(api_report_match)
            .service(api_list_matches)
            .service(api_delete_matches)
            .service(api_pairings)
            .service(api_audit)
    })
    .bind(bind)?
    .run()
    .await
}
