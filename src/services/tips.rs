const TYPE_TIPS: &[(&str, &[&str])] = &[
    (
        "nature",
        &[
            "Pack layers for changing weather",
            "Bring a reusable water bottle",
            "Wear comfortable hiking shoes",
            "Carry sunscreen and insect repellent",
        ],
    ),
    (
        "culture",
        &[
            "Research local customs before visiting",
            "Dress modestly when visiting religious sites",
            "Consider hiring a local guide",
            "Visit museums on weekday mornings to avoid crowds",
        ],
    ),
    (
        "food",
        &[
            "Ask locals for restaurant recommendations",
            "Try street food for authentic flavors",
            "Book popular restaurants in advance",
            "Take a cooking class to learn local recipes",
        ],
    ),
    (
        "adventure",
        &[
            "Check equipment safety before activities",
            "Get travel insurance that covers adventure sports",
            "Stay hydrated during physical activities",
            "Know your limits and listen to guides",
        ],
    ),
    (
        "relaxation",
        &[
            "Book spa treatments in advance",
            "Bring a good book or download podcasts",
            "Disconnect from work emails",
            "Try local wellness practices",
        ],
    ),
];

pub fn general_tips(destination: &str) -> Vec<String> {
    vec![
        format!("Best time to visit {}: Check local weather patterns", destination),
        "Download offline maps before your trip".to_string(),
        "Keep emergency contact numbers handy".to_string(),
        "Try local cuisine for authentic experiences".to_string(),
        "Book popular attractions in advance".to_string(),
    ]
}

pub fn type_tips(travel_type: &str) -> &'static [&'static str] {
    let key = travel_type.to_lowercase();
    TYPE_TIPS
        .iter()
        .find(|(id, _)| *id == key)
        .map(|(_, tips)| *tips)
        .unwrap_or(&[])
}

/// General tips first, then tips for a single travel type. Unknown types add nothing.
pub fn generate_tips(
    destination: &str,
    travel_type: &str,
    general_count: usize,
    type_count: usize,
) -> Vec<String> {
    let mut tips: Vec<String> = general_tips(destination)
        .into_iter()
        .take(general_count)
        .collect();
    tips.extend(
        type_tips(travel_type)
            .iter()
            .take(type_count)
            .map(|tip| tip.to_string()),
    );
    tips
}
