use crate::models::travel_plan::DayPlan;
use crate::services::travel_types::title_case;

/// Trip-level figures printed above the day sections.
#[derive(Debug, Clone)]
pub struct ItineraryHeader<'a> {
    pub destination: &'a str,
    pub travel_type: &'a str,
    pub budget: i64,
    pub daily_budget: i64,
    pub num_days: i64,
    pub num_people: i64,
}

/// Render the itinerary as a markdown-like document. Pure: same input, same text.
pub fn format_itinerary_text(itinerary: &[DayPlan], header: &ItineraryHeader<'_>) -> String {
    let travellers = if header.num_people == 1 {
        "person"
    } else {
        "people"
    };

    let mut lines = vec![
        format!(
            "# {}-Day {} Trip to {}",
            header.num_days,
            title_case(header.travel_type),
            header.destination
        ),
        format!(
            "**Total Budget:** ${} for {} {}",
            header.budget, header.num_people, travellers
        ),
        format!("**Daily Budget:** ${}", header.daily_budget),
        String::new(),
    ];

    for day in itinerary {
        lines.push(format!("## {}", day.title));
        lines.push(String::new());

        for activity in &day.activities {
            lines.push(format!("**{}**", activity.time));
            lines.push(format!("- {}", activity.activity));
            lines.push(format!("  _{}_", activity.description));
            if activity.estimated_cost > 0.0 {
                lines.push(format!("  Est. cost: ${:.0}", activity.estimated_cost));
            }
            lines.push(String::new());
        }

        lines.push(format!("**Day Total:** ${:.0}", day.day_total));
        lines.push(String::new());
    }

    lines.join("\n")
}
