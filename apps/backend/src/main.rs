use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use treasure_backend::config::Config;
use treasure_backend::graphql::build_schema;
use treasure_backend::middleware::cors::cors_middleware;
use treasure_backend::middleware::request_trace::RequestTrace;
use treasure_backend::middleware::structured_logger::StructuredLogger;
use treasure_backend::routes;
use treasure_backend::state::app_state::AppState;
use treasure_backend::GameStore;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Treasure Hunt backend on http://{}:{}",
        config.host, config.port
    );

    // The treasure is hidden once, here, for the process lifetime.
    let store = GameStore::with_rng(&mut rand::rng(), config.spot_count, config.starting_turns);
    let state = Arc::new(AppState::new(store));
    let schema = build_schema(state);

    println!("✅ Treasure hidden, GraphiQL at /graphiql");

    let schema_data = web::Data::new(schema);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(schema_data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
