//! Single binary web server: the scoreboard front-end lives in /static, game rules via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so a tablet on the same network can reach it.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use dart_party::{
    leave_game, restart_game, start_game, throw_dart, undo_dart, GameKind, GameOptions, PlayerId,
    Tournament, TournamentError, TournamentId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: one tournament per id. Nothing outlives the process.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct StartGameBody {
    kind: GameKind,
    #[serde(flatten)]
    options: GameOptions,
}

#[derive(Deserialize)]
struct ThrowBody {
    face: u8,
    #[serde(default = "default_multiplier")]
    multiplier: u8,
}

fn default_multiplier() -> u8 {
    1
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and player id (e.g. /api/tournaments/{id}/players/{player_id})
#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    player_id: PlayerId,
}

/// Run `action` against one tournament, refresh its activity time, and answer with its new state.
fn with_tournament<F>(state: &AppState, id: TournamentId, action: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match action(&mut entry.tournament) {
        Ok(()) => HttpResponse::Ok().json(&entry.tournament),
        Err(e) => {
            log::debug!("Tournament {} rejected action: {}", id, e);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "dart-party",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState) -> HttpResponse {
    let tournament = Tournament::new();
    let id = tournament.id;
    let response = HttpResponse::Ok().json(&tournament);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created tournament {}", id);
    response
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |_| Ok(()))
}

/// Add a player to the table.
#[post("/api/tournaments/{id}/players")]
async fn api_add_player(state: AppState, path: Path<TournamentPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t| t.add_player(body.name.as_str()).map(|_| ()))
}

/// Remove a player and their points (not while a game is running).
#[delete("/api/tournaments/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<TournamentPlayerPath>) -> HttpResponse {
    let player_id = path.player_id;
    with_tournament(&state, path.id, |t| t.remove_player(player_id))
}

/// Reset all players, points and the running game.
#[post("/api/tournaments/{id}/reset")]
async fn api_reset_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        t.reset_all();
        Ok(())
    })
}

/// Start a game with every player in the table.
#[post("/api/tournaments/{id}/games")]
async fn api_start_game(state: AppState, path: Path<TournamentPath>, body: Json<StartGameBody>) -> HttpResponse {
    let StartGameBody { kind, options } = body.into_inner();
    with_tournament(&state, path.id, |t| start_game(t, kind, options))
}

/// Throw one dart in the running game.
#[post("/api/tournaments/{id}/games/throw")]
async fn api_throw(state: AppState, path: Path<TournamentPath>, body: Json<ThrowBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t| throw_dart(t, body.face, body.multiplier))
}

/// Undo the last dart of the running game.
#[post("/api/tournaments/{id}/games/undo")]
async fn api_undo(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, undo_dart)
}

/// Restart the running game with fresh draws.
#[post("/api/tournaments/{id}/games/restart")]
async fn api_restart_game(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, restart_game)
}

/// Leave the running game and return to the table.
#[delete("/api/tournaments/{id}/games")]
async fn api_leave_game(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, leave_game)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_reset_tournament)
            .service(api_start_game)
            .service(api_throw)
            .service(api_undo)
            .service(api_restart_game)
            .service(api_leave_game)
            .service(Files::new("/static", "static").index_file("index.html"))
    })
    .bind(bind)?
    .run()
    .await
}
