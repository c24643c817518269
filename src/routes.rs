use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::error::PlannerError;

pub mod health;
pub mod planner;

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected malformed body on {}: {}", req.path(), err);
    PlannerError::InvalidPayload(err.to_string()).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/planner")
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .route("/generate", web::post().to(planner::generate))
                .route("/questions", web::get().to(planner::questions))
                .route("/travel-types", web::get().to(planner::travel_types)),
        );
}
