//! Travel Type Catalog
//!
//! Static activity templates for each supported travel type, plus the merging logic that
//! combines several requested types into one pool of candidate activities per slot.

use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_TRAVEL_TYPE: &str = "culture";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Morning,
    Afternoon,
    Evening,
}

impl Slot {
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Morning => "Morning (9:00 AM)",
            Slot::Afternoon => "Afternoon (2:00 PM)",
            Slot::Evening => "Evening (7:00 PM)",
        }
    }
}

#[derive(Debug)]
pub struct TravelTypeProfile {
    pub id: &'static str,
    pub description: &'static str,
    pub morning_activities: &'static [&'static str],
    pub afternoon_activities: &'static [&'static str],
    pub evening_activities: &'static [&'static str],
}

impl TravelTypeProfile {
    pub fn activities(&self, slot: Slot) -> &'static [&'static str] {
        match slot {
            Slot::Morning => self.morning_activities,
            Slot::Afternoon => self.afternoon_activities,
            Slot::Evening => self.evening_activities,
        }
    }
}

pub static TRAVEL_TYPES: &[TravelTypeProfile] = &[
    TravelTypeProfile {
        id: "nature",
        description: "outdoor activities, hiking, beaches, national parks, wildlife",
        morning_activities: &[
            "Start the day with a scenic nature walk",
            "Early morning hike to catch the sunrise",
            "Visit a local botanical garden",
            "Explore a nearby nature reserve",
            "Morning bird watching tour",
        ],
        afternoon_activities: &[
            "Picnic lunch at a scenic viewpoint",
            "Kayaking or paddleboarding adventure",
            "Wildlife safari or nature tour",
            "Beach relaxation and swimming",
            "Visit a national park trail",
        ],
        evening_activities: &[
            "Sunset watching at a scenic spot",
            "Stargazing experience",
            "Campfire dinner experience",
            "Evening nature documentary at visitor center",
            "Relaxing spa treatment",
        ],
    },
    TravelTypeProfile {
        id: "culture",
        description: "museums, historical sites, architecture, local traditions",
        morning_activities: &[
            "Visit the city's main museum",
            "Walking tour of historical district",
            "Explore ancient architecture",
            "Morning at an art gallery",
            "Visit a UNESCO World Heritage site",
        ],
        afternoon_activities: &[
            "Guided tour of local landmarks",
            "Traditional craft workshop",
            "Explore local markets and bazaars",
            "Visit historical monuments",
            "Architecture photography walk",
        ],
        evening_activities: &[
            "Traditional cultural performance",
            "Dinner at a heritage restaurant",
            "Night tour of illuminated monuments",
            "Local music and dance show",
            "Evening stroll through old town",
        ],
    },
    TravelTypeProfile {
        id: "food",
        description: "local cuisine, food tours, cooking classes, markets",
        morning_activities: &[
            "Visit a local breakfast market",
            "Morning cooking class with locals",
            "Coffee tasting tour",
            "Fresh produce market exploration",
            "Bakery and pastry tour",
        ],
        afternoon_activities: &[
            "Street food walking tour",
            "Wine or beer tasting experience",
            "Visit local food producers",
            "Cooking workshop with chef",
            "Food photography tour",
        ],
        evening_activities: &[
            "Fine dining at top-rated restaurant",
            "Food and wine pairing dinner",
            "Night market food exploration",
            "Rooftop dining with views",
            "Traditional dinner with local family",
        ],
    },
    TravelTypeProfile {
        id: "adventure",
        description: "extreme sports, water activities, mountain climbing",
        morning_activities: &[
            "Early morning mountain trek",
            "Scuba diving or snorkeling",
            "Rock climbing adventure",
            "Zip-lining through forest",
            "White water rafting",
        ],
        afternoon_activities: &[
            "Paragliding experience",
            "Mountain biking tour",
            "Canyoning adventure",
            "Surfing lessons",
            "ATV or quad biking",
        ],
        evening_activities: &[
            "Night diving experience",
            "Camping under the stars",
            "Adventure stories at local bar",
            "Planning next day's adventure",
            "Recovery massage and dinner",
        ],
    },
    TravelTypeProfile {
        id: "relaxation",
        description: "spa, resorts, quiet beaches, wellness retreats",
        morning_activities: &[
            "Sunrise yoga session",
            "Morning meditation class",
            "Leisurely breakfast by the pool",
            "Gentle beach walk",
            "Morning spa treatment",
        ],
        afternoon_activities: &[
            "Full body massage and spa",
            "Pool or beach relaxation",
            "Wellness workshop",
            "Aromatherapy session",
            "Reading by the ocean",
        ],
        evening_activities: &[
            "Sunset cocktails",
            "Fine dining experience",
            "Evening meditation",
            "Starlit hot tub soak",
            "Live music at resort",
        ],
    },
];

pub fn find_profile(id: &str) -> Option<&'static TravelTypeProfile> {
    TRAVEL_TYPES.iter().find(|profile| profile.id == id)
}

/// Split a comma separated tag string into trimmed, lowercased tags.
/// Falls back to the default travel type when nothing usable is left.
pub fn parse_travel_types(raw: &str) -> Vec<String> {
    let tags: Vec<String> = raw
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    if tags.is_empty() {
        vec![DEFAULT_TRAVEL_TYPE.to_string()]
    } else {
        tags
    }
}

/// Python-style title casing: the first letter of every alphabetic run is uppercased,
/// the rest lowercased.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut previous_is_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if previous_is_alpha {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_alpha = true;
        } else {
            result.push(c);
            previous_is_alpha = false;
        }
    }
    result
}

/// Activities pooled from every requested travel type that exists in the catalog.
#[derive(Debug, Clone)]
pub struct MergedProfile {
    /// Descriptions of the matched types joined with `"; "`. Empty when nothing matched.
    pub description: String,
    pub morning_activities: Vec<&'static str>,
    pub afternoon_activities: Vec<&'static str>,
    pub evening_activities: Vec<&'static str>,
}

impl MergedProfile {
    pub fn merge<R: Rng + ?Sized>(tags: &[String], rng: &mut R) -> Self {
        let matched: Vec<&'static TravelTypeProfile> =
            tags.iter().filter_map(|tag| find_profile(tag)).collect();

        let description = matched
            .iter()
            .map(|profile| profile.description)
            .collect::<Vec<_>>()
            .join("; ");

        // Unknown tags alone would leave nothing to pick from.
        let sources: Vec<&'static TravelTypeProfile> = if matched.is_empty() {
            log::debug!(
                "No known travel type in {:?}, using {} activities",
                tags,
                DEFAULT_TRAVEL_TYPE
            );
            find_profile(DEFAULT_TRAVEL_TYPE).into_iter().collect()
        } else {
            matched
        };

        let mut merged = Self {
            description,
            morning_activities: Self::pool(&sources, Slot::Morning),
            afternoon_activities: Self::pool(&sources, Slot::Afternoon),
            evening_activities: Self::pool(&sources, Slot::Evening),
        };

        merged.morning_activities.shuffle(rng);
        merged.afternoon_activities.shuffle(rng);
        merged.evening_activities.shuffle(rng);

        merged
    }

    fn pool(sources: &[&'static TravelTypeProfile], slot: Slot) -> Vec<&'static str> {
        sources
            .iter()
            .flat_map(|profile| profile.activities(slot).iter().copied())
            .collect()
    }

    pub fn activities(&self, slot: Slot) -> &[&'static str] {
        match slot {
            Slot::Morning => &self.morning_activities,
            Slot::Afternoon => &self.afternoon_activities,
            Slot::Evening => &self.evening_activities,
        }
    }

    pub fn pick<R: Rng + ?Sized>(&self, slot: Slot, rng: &mut R) -> &'static str {
        self.activities(slot).choose(rng).copied().unwrap_or_default()
    }
}
