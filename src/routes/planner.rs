use actix_web::{web, HttpResponse, Responder};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::PlannerError;
use crate::models::travel_plan::TravelPlanRequest;
use crate::services::travel_planner_service::TravelPlannerService;

pub struct PlannerState {
    pub service: TravelPlannerService,
    pub seed: Option<u64>,
}

impl PlannerState {
    pub fn new(service: TravelPlannerService, seed: Option<u64>) -> Self {
        Self { service, seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/*
    /api/planner/generate
*/
pub async fn generate(
    state: web::Data<PlannerState>,
    input: web::Json<TravelPlanRequest>,
) -> Result<HttpResponse, PlannerError> {
    let request = input.into_inner();
    if let Err(err) = request.validate() {
        log::warn!("Rejected plan request to {:?}: {}", request.destination, err);
        return Err(err);
    }

    let mut rng = state.rng();
    let result = state.service.generate_travel_plan(&request, &mut rng);
    Ok(HttpResponse::Ok().json(result))
}

/*
    /api/planner/questions
*/
pub async fn questions(state: web::Data<PlannerState>) -> impl Responder {
    HttpResponse::Ok().json(state.service.get_conversation_questions())
}

/*
    /api/planner/travel-types
*/
pub async fn travel_types(state: web::Data<PlannerState>) -> impl Responder {
    HttpResponse::Ok().json(state.service.get_available_travel_types())
}
