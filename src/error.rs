use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::models::travel_plan::{MAX_TRAVELERS, MAX_TRIP_DAYS, MIN_TRAVELERS, MIN_TRIP_DAYS};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("destination is required")]
    MissingDestination,
    #[error("num_days must be at least {}, got {0}", MIN_TRIP_DAYS)]
    InvalidDayCount(i64),
    #[error("num_days must be at most {}, got {0}", MAX_TRIP_DAYS)]
    TooManyDays(i64),
    #[error("num_people must be at least {}, got {0}", MIN_TRAVELERS)]
    InvalidPeopleCount(i64),
    #[error("num_people must be at most {}, got {0}", MAX_TRAVELERS)]
    TooManyPeople(i64),
    #[error("invalid request body: {0}")]
    InvalidPayload(String),
}

impl ResponseError for PlannerError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}
