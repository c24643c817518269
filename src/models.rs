pub mod conversation;
pub mod supply;
pub mod travel_plan;
