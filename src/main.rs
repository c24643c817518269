use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use travel_planner::config::ServerConfig;
use travel_planner::routes::{self, planner::PlannerState};
use travel_planner::services::travel_planner_service::TravelPlannerService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();
    if let Some(seed) = config.seed {
        log::warn!("PLANNER_SEED={} set, every plan will be generated from the same seed", seed);
    }
    log::info!("Starting travel planner on {}:{}", config.host, config.port);

    let state = web::Data::new(PlannerState::new(TravelPlannerService::new(), config.seed));

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
