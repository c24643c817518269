pub mod itinerary_text;
pub mod tips;
pub mod travel_planner_service;
pub mod travel_types;
