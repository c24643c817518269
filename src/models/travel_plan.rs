use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::PlannerError;
use crate::models::supply::{Attraction, Hotel, Transport};
use crate::services::travel_types::DEFAULT_TRAVEL_TYPE;

const DEFAULT_ORIGIN: &str = "Your City";

pub const MIN_TRIP_DAYS: i64 = 1;
pub const MAX_TRIP_DAYS: i64 = 30;
pub const MIN_TRAVELERS: i64 = 1;
pub const MAX_TRAVELERS: i64 = 20;
pub const MIN_BUDGET: i64 = 100;

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_travel_type() -> String {
    DEFAULT_TRAVEL_TYPE.to_string()
}

// Form-driven clients send counts as strings ("2") or floats (2.0). Floats are rounded up.
fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.ceil() as i64)),
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.ceil() as i64)
            })
        }
        _ => None,
    };
    parsed.ok_or_else(|| de::Error::custom(format!("expected a whole number, got {}", value)))
}

/// Trip parameters plus whatever supply data the caller already fetched.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelPlanRequest {
    #[serde(default = "default_origin")]
    pub origin: String,
    pub destination: String,
    /// Comma separated travel type tags, e.g. `"culture,food"`.
    #[serde(default = "default_travel_type")]
    pub travel_type: String,
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub budget: i64,
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub num_days: i64,
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub num_people: i64,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub transports: Vec<Transport>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
}

impl TravelPlanRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        travel_type: impl Into<String>,
        budget: i64,
        num_days: i64,
        num_people: i64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            travel_type: travel_type.into(),
            budget,
            num_days,
            num_people,
            hotels: Vec::new(),
            transports: Vec::new(),
            attractions: Vec::new(),
        }
    }

    pub fn with_hotels(mut self, hotels: Vec<Hotel>) -> Self {
        self.hotels = hotels;
        self
    }

    pub fn with_transports(mut self, transports: Vec<Transport>) -> Self {
        self.transports = transports;
        self
    }

    pub fn with_attractions(mut self, attractions: Vec<Attraction>) -> Self {
        self.attractions = attractions;
        self
    }

    /// Boundary check used by the HTTP layer. The generator itself accepts anything and
    /// falls back to guarded values, so library callers are not forced through this.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.destination.trim().is_empty() {
            return Err(PlannerError::MissingDestination);
        }
        if self.num_days < MIN_TRIP_DAYS {
            return Err(PlannerError::InvalidDayCount(self.num_days));
        }
        if self.num_days > MAX_TRIP_DAYS {
            return Err(PlannerError::TooManyDays(self.num_days));
        }
        if self.num_people < MIN_TRAVELERS {
            return Err(PlannerError::InvalidPeopleCount(self.num_people));
        }
        if self.num_people > MAX_TRAVELERS {
            return Err(PlannerError::TooManyPeople(self.num_people));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub description: String,
    pub estimated_cost: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayPlan {
    pub day: i64,
    pub title: String,
    pub activities: Vec<Activity>,
    pub day_total: f64,
}

impl DayPlan {
    pub fn new(day: i64, title: String, activities: Vec<Activity>) -> Self {
        let day_total = activities.iter().map(|a| a.estimated_cost).sum();
        Self {
            day,
            title,
            activities,
            day_total,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CostBreakdown {
    pub hotel: f64,
    pub transport: f64,
    pub attractions: f64,
    pub estimated_total: f64,
    pub remaining_budget: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelPlan {
    pub origin: String,
    pub destination: String,
    pub travel_type: String,
    pub travel_types: Vec<String>,
    pub travel_type_description: String,
    pub budget: i64,
    pub num_days: i64,
    pub num_people: i64,
    pub daily_budget: i64,
    pub per_person_budget: i64,
    pub itinerary: Vec<DayPlan>,
    pub itinerary_text: String,
    pub recommended_hotel: Option<Hotel>,
    pub recommended_transport: Option<Transport>,
    pub top_attractions: Vec<Attraction>,
    pub cost_breakdown: CostBreakdown,
    pub tips: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelPlanResult {
    pub success: bool,
    pub plan: TravelPlan,
}
