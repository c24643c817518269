use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A hotel, transport or attraction offered by the caller's data source.
///
/// Only `name`, `description`, `price_per_night` and `price_per_person` are read by the
/// planner. Every other field is kept in `extra` so the item can be echoed back unchanged.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SupplyItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_price")]
    pub price_per_night: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_price")]
    pub price_per_person: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type Hotel = SupplyItem;
pub type Transport = SupplyItem;
pub type Attraction = SupplyItem;

impl SupplyItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price_per_night(mut self, price: f64) -> Self {
        self.price_per_night = price;
        self
    }

    pub fn with_price_per_person(mut self, price: f64) -> Self {
        self.price_per_person = price;
        self
    }
}

// Data sources disagree on price encoding: numbers, numeric strings, null or nothing at all.
// Anything that isn't a usable number counts as free.
fn deserialize_lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) => Ok(s.trim().parse::<f64>().unwrap_or(0.0)),
        _ => Ok(0.0),
    }
}
