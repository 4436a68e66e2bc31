// ABOUTME: Integration tests for the REST API routes
// ABOUTME: Exercises users, check-ins, nutrition, workouts, articles, goals, and demo seeding over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::Router;
use common::{create_test_app, new_user, sample_profile};
use fitplan_core::models::{Article, DietPlanWithMeals, HealthMetric, User, Workout};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

async fn register(app: &Router, username: &str, with_profile: bool) -> User {
    let profile = with_profile.then(sample_profile);
    let response = AxumTestRequest::post("/api/users")
        .json(&new_user(username, profile))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    response.json()
}

fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app();
    let response = AxumTestRequest::get("/health").send(app).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_create_and_fetch_user() {
    let (app, _) = create_test_app();
    let user = register(&app, "alice", true).await;
    assert_eq!(user.username, "alice");
    assert_eq!(user.profile, Some(sample_profile()));

    let response = AxumTestRequest::get(&format!("/api/users/{}", user.id))
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    let fetched: User = response.json();
    assert_eq!(fetched.id, user.id);
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let (app, _) = create_test_app();
    register(&app, "alice", false).await;

    let response = AxumTestRequest::post("/api/users")
        .json(&new_user("alice", None))
        .send(app)
        .await;
    assert_eq!(response.status(), 409);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "RESOURCE_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_user_validation_errors() {
    let (app, _) = create_test_app();

    let response = AxumTestRequest::post("/api/users")
        .json(&new_user("  ", None))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "MISSING_REQUIRED_FIELD");

    let response = AxumTestRequest::post("/api/users")
        .json(&json!({
            "username": "bob",
            "first_name": "Bob",
            "email": "bob@example.com",
            "profile": {
                "age": 30,
                "gender": "unknown",
                "height_cm": 180.0,
                "activity_level": "moderate",
                "goal": "maintenance"
            }
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_INPUT");

    let mut profile = sample_profile();
    profile.age = 0;
    let response = AxumTestRequest::post("/api/users")
        .json(&new_user("carol", Some(profile)))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_unknown_and_malformed_user_ids() {
    let (app, _) = create_test_app();

    let response = AxumTestRequest::get("/api/users/00000000-0000-4000-8000-000000000000")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "RESOURCE_NOT_FOUND");

    let response = AxumTestRequest::get("/api/users/not-a-uuid").send(app).await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_INPUT");
}

#[tokio::test]
async fn test_update_profile() {
    let (app, _) = create_test_app();
    let user = register(&app, "dave", false).await;
    assert!(user.profile.is_none());

    let response = AxumTestRequest::put(&format!("/api/users/{}/profile", user.id))
        .json(&json!({
            "age": 42,
            "gender": "female",
            "height_cm": 165.0,
            "activity_level": "very_active",
            "goal": "weight loss"
        }))
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    let updated: User = response.json();
    let profile = updated.profile.unwrap();
    assert_eq!(profile.age, 42);
    assert!((profile.height_cm - 165.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_health_metric_computes_bmi() {
    let (app, _) = create_test_app();
    let user = register(&app, "erin", false).await;

    let response = AxumTestRequest::post("/api/health-metrics")
        .json(&json!({
            "user_id": user.id,
            "weight_kg": 68.0,
            "height_cm": 173.0,
            "steps": 8000
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let metric: HealthMetric = response.json();
    assert!((metric.bmi - 22.7).abs() < 1e-9);
    assert_eq!(metric.date, common::test_today());
    assert_eq!(metric.steps, Some(8000));

    let response = AxumTestRequest::get(&format!("/api/users/{}/health-metrics/latest", user.id))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let latest: HealthMetric = response.json();
    assert_eq!(latest.id, metric.id);

    let response = AxumTestRequest::get(&format!("/api/users/{}/health-metrics", user.id))
        .send(app)
        .await;
    let history: Vec<HealthMetric> = response.json();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_health_metric_height_falls_back_to_profile() {
    let (app, _) = create_test_app();
    let with_profile = register(&app, "frank", true).await;
    let without_profile = register(&app, "grace", false).await;

    let response = AxumTestRequest::post("/api/health-metrics")
        .json(&json!({ "user_id": with_profile.id, "weight_kg": 68.0 }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let metric: HealthMetric = response.json();
    assert!((metric.height_cm - 173.0).abs() < f64::EPSILON);

    let response = AxumTestRequest::post("/api/health-metrics")
        .json(&json!({ "user_id": without_profile.id, "weight_kg": 68.0 }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "MISSING_REQUIRED_FIELD");

    let response = AxumTestRequest::post("/api/health-metrics")
        .json(&json!({ "user_id": with_profile.id, "weight_kg": -5.0 }))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_implausible_measurements_are_out_of_range() {
    let (app, _) = create_test_app();
    let user = register(&app, "ivan", true).await;

    let response = AxumTestRequest::post("/api/health-metrics")
        .json(&json!({ "user_id": user.id, "weight_kg": 1e300 }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "VALUE_OUT_OF_RANGE");

    let response = AxumTestRequest::post("/api/health-metrics")
        .json(&json!({ "user_id": user.id, "weight_kg": 70.0, "height_cm": 1e300 }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "VALUE_OUT_OF_RANGE");

    let mut profile = sample_profile();
    profile.height_cm = 5000.0;
    let response = AxumTestRequest::post("/api/users")
        .json(&new_user("giant", Some(profile)))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_malformed_requests_use_error_envelope() {
    let (app, _) = create_test_app();
    let user = register(&app, "judy", false).await;

    let response = AxumTestRequest::post("/api/health-metrics")
        .header("content-type", "application/json")
        .body(r#"{"user_id": "#)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_INPUT");

    let response = AxumTestRequest::post("/api/users")
        .body(r#"{"username": "nobody"}"#)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_INPUT");

    let response = AxumTestRequest::get("/api/articles?limit=abc")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_INPUT");
    assert!(body["error"]["message"].as_str().unwrap().contains("query"));

    let response =
        AxumTestRequest::get(&format!("/api/users/{}/workouts/upcoming?limit=-1", user.id))
            .send(app)
            .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_INPUT");
}

#[tokio::test]
async fn test_body_fat_calculator() {
    let (app, _) = create_test_app();

    let response = AxumTestRequest::post("/api/calculators/body-fat")
        .json(&json!({
            "waist_cm": 85.0,
            "neck_cm": 38.0,
            "height_cm": 178.0,
            "gender": "male"
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert!((body["body_fat_percent"].as_f64().unwrap() - 16.4).abs() < 1e-9);

    let response = AxumTestRequest::post("/api/calculators/body-fat")
        .json(&json!({
            "waist_cm": 75.0,
            "neck_cm": 33.0,
            "height_cm": 165.0,
            "gender": "female",
            "hip_cm": 100.0
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert!((body["body_fat_percent"].as_f64().unwrap() - 29.4).abs() < 1e-9);

    let response = AxumTestRequest::post("/api/calculators/body-fat")
        .json(&json!({
            "waist_cm": 75.0,
            "neck_cm": 33.0,
            "height_cm": 165.0,
            "gender": "female"
        }))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_INPUT");
}

#[tokio::test]
async fn test_latest_metric_missing_is_not_found() {
    let (app, _) = create_test_app();
    let user = register(&app, "heidi", false).await;

    let response = AxumTestRequest::get(&format!("/api/users/{}/health-metrics/latest", user.id))
        .send(app)
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_diet_plan_and_meals() {
    let (app, _) = create_test_app();
    let user = register(&app, "ivan", false).await;

    let response = AxumTestRequest::get(&format!("/api/users/{}/diet-plans/current", user.id))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 404);

    let response = AxumTestRequest::post("/api/diet-plans")
        .json(&json!({
            "user_id": user.id,
            "name": "Cutting",
            "total_calories": 1800
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let plan: Value = response.json();
    let plan_id = plan["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::post("/api/meals")
        .json(&json!({
            "diet_plan_id": plan_id,
            "name": "Greek Yogurt Parfait",
            "meal_type": "breakfast",
            "calories": 380,
            "meal_time": "8:00 AM",
            "items": ["yogurt", "berries"]
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);

    let response = AxumTestRequest::post("/api/meals")
        .json(&json!({
            "diet_plan_id": plan_id,
            "name": "Mystery",
            "meal_type": "brunch"
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);

    let response = AxumTestRequest::get(&format!("/api/users/{}/diet-plans/current", user.id))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let current: DietPlanWithMeals = response.json();
    assert_eq!(current.plan.name, "Cutting");
    assert_eq!(current.meals.len(), 1);
    assert_eq!(current.meals[0].items, vec!["yogurt", "berries"]);

    let response = AxumTestRequest::get(&format!("/api/diet-plans/{plan_id}/meals"))
        .send(app)
        .await;
    let meals: Vec<Value> = response.json();
    assert_eq!(meals.len(), 1);
}

#[tokio::test]
async fn test_workouts_current_and_upcoming() {
    let (app, _) = create_test_app();
    let user = register(&app, "judy", false).await;

    for (name, date) in [
        ("Strength", "2025-03-10"),
        ("Cardio", "2025-03-11"),
        ("Yoga", "2025-03-12"),
    ] {
        let response = AxumTestRequest::post("/api/workouts")
            .json(&json!({
                "user_id": user.id,
                "name": name,
                "duration_minutes": 30,
                "scheduled_date": date
            }))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 201);
    }

    let response = AxumTestRequest::get(&format!("/api/users/{}/workouts/current", user.id))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let current: Value = response.json();
    assert_eq!(current["workout"]["name"], "Strength");

    let workout_id = current["workout"]["id"].as_str().unwrap().to_owned();
    let response = AxumTestRequest::post("/api/exercises")
        .json(&json!({
            "workout_id": workout_id,
            "name": "Squats",
            "sets": 3,
            "reps": 12
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);

    let response = AxumTestRequest::get(&format!("/api/workouts/{workout_id}/exercises"))
        .send(app.clone())
        .await;
    let exercises: Vec<Value> = response.json();
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0]["reps"], 12);

    let response = AxumTestRequest::get(&format!(
        "/api/users/{}/workouts/upcoming?limit=1",
        user.id
    ))
    .send(app.clone())
    .await;
    assert_eq!(response.status(), 200);
    let upcoming: Vec<Workout> = response.json();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Cardio");

    let response = AxumTestRequest::get(&format!("/api/users/{}/workouts", user.id))
        .send(app)
        .await;
    let all: Vec<Workout> = response.json();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_current_workout_missing_is_not_found() {
    let (app, _) = create_test_app();
    let user = register(&app, "kim", false).await;

    let response = AxumTestRequest::get(&format!("/api/users/{}/workouts/current", user.id))
        .send(app)
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_articles_list_filter_and_fetch() {
    let (app, _) = create_test_app();

    let response = AxumTestRequest::get("/api/articles").send(app.clone()).await;
    assert_eq!(response.status(), 200);
    let articles: Vec<Article> = response.json();
    assert_eq!(articles.len(), 5);

    let response = AxumTestRequest::get("/api/articles?category=nutrition&limit=1")
        .send(app.clone())
        .await;
    let nutrition: Vec<Article> = response.json();
    assert_eq!(nutrition.len(), 1);
    assert_eq!(nutrition[0].category, "Nutrition");

    let response = AxumTestRequest::get(&format!("/api/articles/{}", articles[0].id))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let article: Article = response.json();
    assert_eq!(article.title, articles[0].title);

    let response = AxumTestRequest::post("/api/articles")
        .json(&json!({
            "title": "Sleep and Recovery",
            "content": "Why rest days matter.",
            "category": "Wellness",
            "read_time_minutes": 4
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);

    let response = AxumTestRequest::get("/api/articles").send(app).await;
    let articles: Vec<Article> = response.json();
    assert_eq!(articles[0].title, "Sleep and Recovery");
}

#[tokio::test]
async fn test_goal_lifecycle() {
    let (app, _) = create_test_app();
    let user = register(&app, "liam", false).await;

    let response = AxumTestRequest::post("/api/goals")
        .json(&json!({
            "user_id": user.id,
            "name": "Lose Weight",
            "target_value": 65.0,
            "current_value": 75.0
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let goal: Value = response.json();
    assert_eq!(goal["progress_percent"], 0);
    assert_eq!(goal["start_date"], "2025-03-10");
    let goal_id = goal["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::patch(&format!("/api/goals/{goal_id}/progress"))
        .json(&json!({ "current_value": 70.0 }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let goal: Value = response.json();
    assert_eq!(goal["progress_percent"], 50);
    assert_eq!(goal["completed"], false);

    let response = AxumTestRequest::patch(&format!("/api/goals/{goal_id}/complete"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let goal: Value = response.json();
    assert_eq!(goal["completed"], true);

    let response = AxumTestRequest::get(&format!("/api/users/{}/goals", user.id))
        .send(app)
        .await;
    let goals: Vec<Value> = response.json();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["completed"], true);
}

#[tokio::test]
async fn test_goal_validation() {
    let (app, _) = create_test_app();
    let user = register(&app, "mia", false).await;

    let response = AxumTestRequest::post("/api/goals")
        .json(&json!({
            "user_id": user.id,
            "name": "",
            "target_value": 10.0,
            "current_value": 0.0
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "MISSING_REQUIRED_FIELD");

    let response = AxumTestRequest::patch(
        "/api/goals/00000000-0000-4000-8000-000000000000/progress",
    )
    .json(&json!({ "current_value": 1.0 }))
    .send(app)
    .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_setup_demo_is_idempotent() {
    let (app, resources) = create_test_app();

    let response = AxumTestRequest::post("/api/setup-demo")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let first: Value = response.json();
    assert_eq!(first["created"], true);
    assert_eq!(first["user"]["username"], "demo_user");
    let user_id = first["user"]["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::post("/api/setup-demo")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let second: Value = response.json();
    assert_eq!(second["created"], false);
    assert_eq!(second["user"]["id"], user_id.as_str());

    let response = AxumTestRequest::get(&format!("/api/users/{user_id}/workouts/current"))
        .send(app.clone())
        .await;
    let current: Value = response.json();
    assert_eq!(current["workout"]["name"], "Full Body Strength");
    assert_eq!(current["exercises"].as_array().unwrap().len(), 3);

    let response = AxumTestRequest::get(&format!("/api/users/{user_id}/workouts/upcoming"))
        .send(app.clone())
        .await;
    let upcoming: Vec<Workout> = response.json();
    let names: Vec<&str> = upcoming.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["HIIT Cardio", "Yoga & Stretching"]);
    assert_eq!(
        upcoming[1].scheduled_date,
        Some(common::date(2025, 3, 12))
    );

    let response = AxumTestRequest::get(&format!("/api/users/{user_id}/diet-plans/current"))
        .send(app.clone())
        .await;
    let plan: DietPlanWithMeals = response.json();
    assert_eq!(plan.plan.total_calories, Some(1850));
    assert_eq!(plan.meals.len(), 3);

    let response = AxumTestRequest::get(&format!("/api/users/{user_id}/goals"))
        .send(app)
        .await;
    let goals: Vec<Value> = response.json();
    assert_eq!(goals[0]["name"], "Lose Weight");
    assert_eq!(goals[0]["progress_percent"], 70);
    assert_eq!(goals[0]["target_date"], "2025-06-10");

    assert_eq!(resources.today(), common::test_today());
}
