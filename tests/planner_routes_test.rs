use actix_web::test;
use serde_json::json;

mod common;
use common::TestApp;

async fn post_plan(test_app: &TestApp, body: serde_json::Value) -> (u16, serde_json::Value) {
    let app = test::init_service(test_app.create_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/planner/generate")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body: serde_json::Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_rt::test]
async fn test_generate_basic_plan() {
    let test_app = TestApp::new();
    let (status, body) = post_plan(
        &test_app,
        json!({
            "origin": "NYC",
            "destination": "Paris",
            "travel_type": "culture",
            "budget": 1000,
            "num_days": 2,
            "num_people": 2
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let plan = &body["plan"];
    assert_eq!(plan["daily_budget"], 500);
    assert_eq!(plan["per_person_budget"], 500);
    assert_eq!(plan["travel_types"], json!(["culture"]));
    assert_eq!(plan["itinerary"].as_array().unwrap().len(), 2);
    assert_eq!(plan["cost_breakdown"]["estimated_total"], 0.0);
    assert_eq!(plan["cost_breakdown"]["remaining_budget"], 1000.0);
    assert!(plan["recommended_hotel"].is_null());
    assert!(plan["itinerary_text"]
        .as_str()
        .unwrap()
        .starts_with("# 2-Day Culture Trip to Paris"));
}

#[actix_rt::test]
async fn test_generate_with_supply_data() {
    let test_app = TestApp::new();
    let (status, body) = post_plan(
        &test_app,
        json!({
            "origin": "London",
            "destination": "Rome",
            "travel_type": "culture,food",
            "hotel_preference": "mid-range",
            "budget": 2000,
            "num_days": 3,
            "num_people": 2,
            "hotels": [
                { "name": "Hotel Artemide", "price_per_night": 180, "stars": 4 }
            ],
            "transports": [
                { "name": "British Airways", "price_per_person": "240" }
            ],
            "attractions": [
                { "name": "Colosseum", "price_per_person": 18, "description": "Ancient amphitheatre" },
                { "name": "Vatican Museums", "price_per_person": 20 }
            ]
        }),
    )
    .await;

    assert_eq!(status, 200);
    let plan = &body["plan"];
    let itinerary = plan["itinerary"].as_array().unwrap();

    assert_eq!(
        itinerary[0]["activities"][0]["activity"],
        "Arrive via British Airways"
    );
    assert_eq!(itinerary[0]["activities"][0]["estimated_cost"], 240.0);
    assert_eq!(itinerary[0]["activities"][1]["activity"], "Visit Colosseum");
    assert_eq!(
        itinerary[0]["activities"][1]["description"],
        "Ancient amphitheatre"
    );
    assert_eq!(
        itinerary[1]["activities"][1]["activity"],
        "Visit Vatican Museums"
    );
    assert_eq!(
        itinerary[2]["activities"][2]["activity"],
        "Prepare for departure"
    );

    let costs = &plan["cost_breakdown"];
    assert_eq!(costs["hotel"], 540.0);
    assert_eq!(costs["transport"], 480.0);
    assert_eq!(costs["attractions"], 76.0);
    assert_eq!(costs["estimated_total"], 1096.0);
    assert_eq!(costs["remaining_budget"], 904.0);

    assert_eq!(plan["recommended_hotel"]["stars"], 4);
    assert_eq!(plan["top_attractions"].as_array().unwrap().len(), 2);
    assert_eq!(plan["tips"].as_array().unwrap().len(), 5);
}

#[actix_rt::test]
async fn test_seeded_server_is_deterministic() {
    let test_app = TestApp::new();
    let body = json!({
        "destination": "Bali",
        "travel_type": "nature,relaxation,adventure",
        "budget": 3000,
        "num_days": 5,
        "num_people": 2
    });

    let (_, first) = post_plan(&test_app, body.clone()).await;
    let (_, second) = post_plan(&test_app, body).await;
    assert_eq!(first["plan"]["itinerary"], second["plan"]["itinerary"]);
    assert_eq!(first["plan"]["origin"], "Your City");
}

#[actix_rt::test]
async fn test_generate_rejects_zero_days() {
    let test_app = TestApp::with_seed(None);
    let (status, body) = post_plan(
        &test_app,
        json!({
            "destination": "Berlin",
            "budget": 1500,
            "num_days": 0,
            "num_people": 2
        }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "num_days must be at least 1, got 0");
}

#[actix_rt::test]
async fn test_generate_rejects_empty_destination() {
    let test_app = TestApp::new();
    let (status, body) = post_plan(
        &test_app,
        json!({
            "destination": "",
            "budget": 1500,
            "num_days": 2,
            "num_people": 0
        }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "destination is required");
}

#[actix_rt::test]
async fn test_generate_rejects_missing_fields() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/planner/generate")
        .set_json(&json!({ "destination": "New York" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid request body"));
}

#[actix_rt::test]
async fn test_generate_accepts_form_encoded_counts() {
    let test_app = TestApp::new();
    let (status, body) = post_plan(
        &test_app,
        json!({
            "origin": "Your City",
            "destination": "Paris",
            "travel_type": "culture,food",
            "hotel_preference": "mid-range",
            "num_days": 3,
            "num_people": "2",
            "budget": "1650"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["plan"]["num_people"], 2);
    assert_eq!(body["plan"]["budget"], 1650);
    assert_eq!(body["plan"]["per_person_budget"], 825);
    assert_eq!(body["plan"]["daily_budget"], 550);
}

#[actix_rt::test]
async fn test_generate_rejects_non_numeric_counts() {
    let test_app = TestApp::new();
    let (status, body) = post_plan(
        &test_app,
        json!({
            "destination": "Paris",
            "budget": 1000,
            "num_days": 2,
            "num_people": "two"
        }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("whole number"));
}

#[actix_rt::test]
async fn test_generate_rejects_overlong_trip() {
    let test_app = TestApp::new();
    let (status, body) = post_plan(
        &test_app,
        json!({
            "destination": "Paris",
            "budget": 1000,
            "num_days": 1_000_000_000i64,
            "num_people": 2
        }),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "num_days must be at most 30, got 1000000000");
}

#[actix_rt::test]
async fn test_questions_endpoint() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/planner/questions")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 6);
    assert_eq!(questions[0]["id"], "origin");
    assert_eq!(questions[0]["type"], "text");
    assert_eq!(questions[2]["type"], "select");
    assert_eq!(questions[2]["options"].as_array().unwrap().len(), 5);
    assert_eq!(questions[4]["max"], 20);
    assert!(questions[5].get("max").is_none());
}

#[actix_rt::test]
async fn test_travel_types_endpoint() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/planner/travel-types")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Nature", "Culture", "Food", "Adventure", "Relaxation"]
    );
}
