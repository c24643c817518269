use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use travel_planner::routes::{self, planner::PlannerState};
use travel_planner::services::travel_planner_service::TravelPlannerService;

pub const TEST_SEED: u64 = 20240601;

pub struct TestApp {
    pub state: web::Data<PlannerState>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_seed(Some(TEST_SEED))
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            state: web::Data::new(PlannerState::new(TravelPlannerService::new(), seed)),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}
