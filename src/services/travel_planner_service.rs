//! Travel Planner Service
//!
//! Template-based itinerary generation. Each day gets a morning, afternoon and evening slot
//! filled from the merged travel type activity pool, with real supply data (first transport,
//! unused attractions) taking precedence where it applies.
//!
//! Generation never fails: non-positive day or people counts fall back to the raw budget
//! instead of dividing, and missing supply lists are treated as empty.

use std::collections::HashSet;

use rand::Rng;

use crate::models::conversation::{ConversationQuestion, TravelTypeInfo};
use crate::models::supply::{Attraction, Transport};
use crate::models::travel_plan::{
    Activity, CostBreakdown, DayPlan, TravelPlan, TravelPlanRequest, TravelPlanResult,
    MAX_TRAVELERS, MAX_TRIP_DAYS, MIN_BUDGET, MIN_TRAVELERS, MIN_TRIP_DAYS,
};
use crate::services::itinerary_text::{format_itinerary_text, ItineraryHeader};
use crate::services::tips::generate_tips;
use crate::services::travel_types::{
    parse_travel_types, title_case, MergedProfile, Slot, TRAVEL_TYPES,
};

const MORNING_COST_RATIO: f64 = 0.2;
const AFTERNOON_COST_RATIO: f64 = 0.3;
const EVENING_COST_RATIO: f64 = 0.3;
const DEPARTURE_COST_RATIO: f64 = 0.2;
const MAX_TOP_ATTRACTIONS: usize = 5;
const GENERAL_TIP_COUNT: usize = 3;
const TYPE_TIP_COUNT: usize = 2;

const GENERAL_TRAVEL_DESCRIPTION: &str = "General travel experience";

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub morning_cost_ratio: f64,
    pub afternoon_cost_ratio: f64,
    pub evening_cost_ratio: f64,
    pub departure_cost_ratio: f64,
    pub max_top_attractions: usize,
    pub general_tip_count: usize,
    pub type_tip_count: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            morning_cost_ratio: MORNING_COST_RATIO,
            afternoon_cost_ratio: AFTERNOON_COST_RATIO,
            evening_cost_ratio: EVENING_COST_RATIO,
            departure_cost_ratio: DEPARTURE_COST_RATIO,
            max_top_attractions: MAX_TOP_ATTRACTIONS,
            general_tip_count: GENERAL_TIP_COUNT,
            type_tip_count: TYPE_TIP_COUNT,
        }
    }
}

/// Everything the day loop needs that stays fixed for the whole trip.
struct ItineraryContext<'a> {
    destination: &'a str,
    travel_type: &'a str,
    profile: &'a MergedProfile,
    num_days: i64,
    daily_budget: i64,
    transports: &'a [Transport],
    attractions: &'a [Attraction],
}

#[derive(Debug, Clone, Default)]
pub struct TravelPlannerService {
    config: PlannerConfig,
}

impl TravelPlannerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Generate a complete travel plan. The random source drives activity shuffling and
    /// selection, so a seeded generator gives a reproducible plan.
    pub fn generate_travel_plan<R: Rng + ?Sized>(
        &self,
        request: &TravelPlanRequest,
        rng: &mut R,
    ) -> TravelPlanResult {
        let travel_types = parse_travel_types(&request.travel_type);
        let profile = MergedProfile::merge(&travel_types, rng);

        let daily_budget = guarded_floor_div(request.budget, request.num_days);
        let per_person_budget = guarded_floor_div(request.budget, request.num_people);

        let context = ItineraryContext {
            destination: &request.destination,
            travel_type: &request.travel_type,
            profile: &profile,
            num_days: request.num_days,
            daily_budget,
            transports: &request.transports,
            attractions: &request.attractions,
        };
        let itinerary = self.build_itinerary(&context, rng);

        let cost_breakdown = self.calculate_costs(request);

        let tips = generate_tips(
            &request.destination,
            &travel_types[0],
            self.config.general_tip_count,
            self.config.type_tip_count,
        );

        let travel_type_description = if profile.description.is_empty() {
            GENERAL_TRAVEL_DESCRIPTION.to_string()
        } else {
            profile.description.clone()
        };

        let itinerary_text = format_itinerary_text(
            &itinerary,
            &ItineraryHeader {
                destination: &request.destination,
                travel_type: &request.travel_type,
                budget: request.budget,
                daily_budget,
                num_days: request.num_days,
                num_people: request.num_people,
            },
        );

        log::info!(
            "Generated {}-day plan to {} for {} traveller(s), types {:?}, estimated total {:.2}",
            itinerary.len(),
            request.destination,
            request.num_people,
            travel_types,
            cost_breakdown.estimated_total
        );

        TravelPlanResult {
            success: true,
            plan: TravelPlan {
                origin: request.origin.clone(),
                destination: request.destination.clone(),
                travel_type: request.travel_type.clone(),
                travel_types,
                travel_type_description,
                budget: request.budget,
                num_days: request.num_days,
                num_people: request.num_people,
                daily_budget,
                per_person_budget,
                itinerary,
                itinerary_text,
                recommended_hotel: request.hotels.first().cloned(),
                recommended_transport: request.transports.first().cloned(),
                top_attractions: request
                    .attractions
                    .iter()
                    .take(self.config.max_top_attractions)
                    .cloned()
                    .collect(),
                cost_breakdown,
                tips,
            },
        }
    }

    fn build_itinerary<R: Rng + ?Sized>(
        &self,
        context: &ItineraryContext<'_>,
        rng: &mut R,
    ) -> Vec<DayPlan> {
        let mut used_attractions: HashSet<Option<&str>> = HashSet::new();
        let mut itinerary = Vec::new();

        for day in 1..=context.num_days {
            let activities = vec![
                self.morning_activity(context, day, rng),
                self.afternoon_activity(context, &mut used_attractions, rng),
                self.evening_activity(context, day, rng),
            ];
            itinerary.push(DayPlan::new(
                day,
                format!("Day {} in {}", day, context.destination),
                activities,
            ));
        }

        itinerary
    }

    fn morning_activity<R: Rng + ?Sized>(
        &self,
        context: &ItineraryContext<'_>,
        day: i64,
        rng: &mut R,
    ) -> Activity {
        match context.transports.first() {
            Some(transport) if day == 1 => Activity {
                time: Slot::Morning.label().to_string(),
                activity: format!(
                    "Arrive via {}",
                    transport.name.as_deref().unwrap_or("transport")
                ),
                description: format!(
                    "Travel from origin to {}. Check into your hotel and freshen up.",
                    context.destination
                ),
                estimated_cost: transport.price_per_person,
            },
            _ => Activity {
                time: Slot::Morning.label().to_string(),
                activity: context.profile.pick(Slot::Morning, rng).to_string(),
                description: format!(
                    "Start your day with this {} experience",
                    context.travel_type
                ),
                estimated_cost: context.daily_budget as f64 * self.config.morning_cost_ratio,
            },
        }
    }

    // Attractions are consumed in the order supplied, one per afternoon, never repeated.
    fn afternoon_activity<'a, R: Rng + ?Sized>(
        &self,
        context: &ItineraryContext<'a>,
        used_attractions: &mut HashSet<Option<&'a str>>,
        rng: &mut R,
    ) -> Activity {
        let next_attraction = context
            .attractions
            .iter()
            .find(|attraction| !used_attractions.contains(&attraction.name.as_deref()));

        match next_attraction {
            Some(attraction) => {
                used_attractions.insert(attraction.name.as_deref());
                Activity {
                    time: Slot::Afternoon.label().to_string(),
                    activity: format!(
                        "Visit {}",
                        attraction.name.as_deref().unwrap_or("local attraction")
                    ),
                    description: attraction.description.clone().unwrap_or_else(|| {
                        format!("A must-see {} destination", context.travel_type)
                    }),
                    estimated_cost: attraction.price_per_person,
                }
            }
            None => Activity {
                time: Slot::Afternoon.label().to_string(),
                activity: context.profile.pick(Slot::Afternoon, rng).to_string(),
                description: format!(
                    "Enjoy {} activities in {}",
                    context.travel_type, context.destination
                ),
                estimated_cost: context.daily_budget as f64 * self.config.afternoon_cost_ratio,
            },
        }
    }

    fn evening_activity<R: Rng + ?Sized>(
        &self,
        context: &ItineraryContext<'_>,
        day: i64,
        rng: &mut R,
    ) -> Activity {
        if day == context.num_days && !context.transports.is_empty() {
            return Activity {
                time: Slot::Evening.label().to_string(),
                activity: "Prepare for departure".to_string(),
                description:
                    "Pack your bags, enjoy a final dinner, and prepare for your journey home"
                        .to_string(),
                estimated_cost: context.daily_budget as f64 * self.config.departure_cost_ratio,
            };
        }

        Activity {
            time: Slot::Evening.label().to_string(),
            activity: context.profile.pick(Slot::Evening, rng).to_string(),
            description: format!(
                "End your day with a memorable {} experience",
                context.travel_type
            ),
            estimated_cost: context.daily_budget as f64 * self.config.evening_cost_ratio,
        }
    }

    /// Naive trip cost from the first hotel, the first transport and the top attractions.
    /// The remaining budget is allowed to go negative.
    pub fn calculate_costs(&self, request: &TravelPlanRequest) -> CostBreakdown {
        let num_days = request.num_days as f64;
        let num_people = request.num_people as f64;

        let hotel = request
            .hotels
            .first()
            .map(|hotel| hotel.price_per_night * num_days)
            .unwrap_or(0.0);

        let transport = request
            .transports
            .first()
            .map(|transport| transport.price_per_person * num_people)
            .unwrap_or(0.0);

        let attractions: f64 = request
            .attractions
            .iter()
            .take(self.config.max_top_attractions)
            .map(|attraction| attraction.price_per_person * num_people)
            .sum();

        let estimated_total = hotel + transport + attractions;

        CostBreakdown {
            hotel,
            transport,
            attractions,
            estimated_total,
            remaining_budget: request.budget as f64 - estimated_total,
        }
    }

    /// Questions driving the guided planning conversation, in the order they are asked.
    pub fn get_conversation_questions(&self) -> Vec<ConversationQuestion> {
        vec![
            ConversationQuestion::text(
                "origin",
                "Where are you traveling from?",
                "e.g., New York, London, Tokyo",
            ),
            ConversationQuestion::text(
                "destination",
                "Where would you like to go?",
                "e.g., Paris, Bali, Rome",
            ),
            ConversationQuestion::select(
                "travel_type",
                "What type of experience are you looking for?",
                TRAVEL_TYPES
                    .iter()
                    .map(|profile| profile.id.to_string())
                    .collect(),
            ),
            ConversationQuestion::number(
                "num_days",
                "How many days is your trip?",
                MIN_TRIP_DAYS,
                Some(MAX_TRIP_DAYS),
            ),
            ConversationQuestion::number(
                "num_people",
                "How many people are traveling?",
                MIN_TRAVELERS,
                Some(MAX_TRAVELERS),
            ),
            ConversationQuestion::number(
                "budget",
                "What's your total budget (in USD)?",
                MIN_BUDGET,
                None,
            ),
        ]
    }

    pub fn get_available_travel_types(&self) -> Vec<TravelTypeInfo> {
        TRAVEL_TYPES
            .iter()
            .map(|profile| TravelTypeInfo {
                id: profile.id.to_string(),
                name: title_case(profile.id),
                description: profile.description.to_string(),
            })
            .collect()
    }
}

/// Floor division that hands back the dividend unchanged for a non-positive divisor.
fn guarded_floor_div(value: i64, divisor: i64) -> i64 {
    if divisor > 0 {
        value.div_euclid(divisor)
    } else {
        value
    }
}
