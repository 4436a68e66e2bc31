// ABOUTME: Integration tests for the in-memory repositories
// ABOUTME: Covers ordering, date-relative workout queries, goal updates, and missing parents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{create_test_store, date, new_metric, new_user, test_today};
use fitplan_core::errors::StorageError;
use fitplan_core::models::{
    DietPlan, DietPlanId, Goal, Meal, MealType, NewDietPlan, NewGoal, NewMeal, NewWorkout, User,
    UserId, Workout,
};
use fitplan_server::services::health_metrics::record_check_in;
use fitplan_server::storage::{
    ArticleRepository, DietPlanRepository, GoalRepository, HealthMetricRepository,
    InMemoryStore, UserRepository, WorkoutRepository,
};

async fn stored_user(store: &InMemoryStore, username: &str) -> User {
    store
        .create_user(User::from_new(new_user(username, None)))
        .await
        .unwrap()
}

fn workout(user: &User, name: &str, scheduled_date: Option<NaiveDate>) -> Workout {
    Workout::from_new(NewWorkout {
        user_id: user.id,
        name: name.to_owned(),
        description: None,
        duration_minutes: Some(30),
        calories_burned: None,
        scheduled_date,
        scheduled_time: None,
    })
}

fn goal(user: &User, target_value: f64, current_value: f64) -> Goal {
    Goal::from_new(
        NewGoal {
            user_id: user.id,
            name: "Lose Weight".to_owned(),
            target_value,
            current_value,
            start_value: None,
            start_date: None,
            target_date: None,
            completed: false,
        },
        test_today(),
    )
}

#[tokio::test]
async fn test_metrics_are_listed_newest_first() {
    let store = create_test_store();
    let user = stored_user(&store, "alice").await;

    for (weight, day) in [(70.0, 1), (69.0, 5), (69.5, 3)] {
        let mut payload = new_metric(&user, weight, Some(170.0));
        payload.date = Some(date(2025, 3, day));
        record_check_in(&*store, payload, test_today())
            .await
            .unwrap();
    }

    let history = store.health_metrics_for_user(user.id).await.unwrap();
    let days: Vec<NaiveDate> = history.iter().map(|m| m.date).collect();
    assert_eq!(
        days,
        vec![date(2025, 3, 5), date(2025, 3, 3), date(2025, 3, 1)]
    );

    let latest = store.latest_health_metric(user.id).await.unwrap().unwrap();
    assert_eq!(latest.date, date(2025, 3, 5));
    assert!((latest.weight_kg - 69.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_same_day_metrics_prefer_latest_insert() {
    let store = create_test_store();
    let user = stored_user(&store, "bob").await;

    record_check_in(&*store, new_metric(&user, 80.0, Some(180.0)), test_today())
        .await
        .unwrap();
    record_check_in(&*store, new_metric(&user, 79.0, Some(180.0)), test_today())
        .await
        .unwrap();

    let latest = store.latest_health_metric(user.id).await.unwrap().unwrap();
    assert!((latest.weight_kg - 79.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_latest_metric_absent_for_new_user() {
    let store = create_test_store();
    let user = stored_user(&store, "carol").await;
    assert!(store.latest_health_metric(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_current_workout_prefers_today() {
    let store = create_test_store();
    let user = stored_user(&store, "dave").await;
    let today = test_today();

    store
        .create_workout(workout(&user, "Yesterday", today.pred_opt()))
        .await
        .unwrap();
    store
        .create_workout(workout(&user, "Today", Some(today)))
        .await
        .unwrap();
    store
        .create_workout(workout(&user, "Tomorrow", today.succ_opt()))
        .await
        .unwrap();

    let current = store.current_workout(user.id, today).await.unwrap().unwrap();
    assert_eq!(current.workout.name, "Today");
}

#[tokio::test]
async fn test_current_workout_falls_back_to_first_listed() {
    let store = create_test_store();
    let user = stored_user(&store, "erin").await;
    let today = test_today();

    store
        .create_workout(workout(&user, "Later", Some(date(2025, 3, 20))))
        .await
        .unwrap();
    store
        .create_workout(workout(&user, "Sooner", Some(date(2025, 3, 12))))
        .await
        .unwrap();

    let current = store.current_workout(user.id, today).await.unwrap().unwrap();
    assert_eq!(current.workout.name, "Sooner");
    assert!(current.exercises.is_empty());

    let other = stored_user(&store, "frank").await;
    assert!(store.current_workout(other.id, today).await.unwrap().is_none());
}

#[tokio::test]
async fn test_upcoming_workouts_exclude_today_and_respect_limit() {
    let store = create_test_store();
    let user = stored_user(&store, "grace").await;
    let today = test_today();

    store
        .create_workout(workout(&user, "Today", Some(today)))
        .await
        .unwrap();
    for day in [14, 11, 12] {
        store
            .create_workout(workout(&user, "Future", Some(date(2025, 3, day))))
            .await
            .unwrap();
    }
    store
        .create_workout(workout(&user, "Unscheduled", None))
        .await
        .unwrap();

    let upcoming = store.upcoming_workouts(user.id, today, 2).await.unwrap();
    let dates: Vec<Option<NaiveDate>> = upcoming.iter().map(|w| w.scheduled_date).collect();
    assert_eq!(
        dates,
        vec![Some(date(2025, 3, 11)), Some(date(2025, 3, 12))]
    );

    let all = store.upcoming_workouts(user.id, today, 10).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_current_diet_plan_is_newest_with_meals() {
    let store = create_test_store();
    let user = stored_user(&store, "heidi").await;

    let old_plan = store
        .create_diet_plan(DietPlan::from_new(NewDietPlan {
            user_id: user.id,
            name: "Old".to_owned(),
            description: None,
            total_calories: Some(2200),
        }))
        .await
        .unwrap();
    let new_plan = store
        .create_diet_plan(DietPlan::from_new(NewDietPlan {
            user_id: user.id,
            name: "New".to_owned(),
            description: None,
            total_calories: Some(1900),
        }))
        .await
        .unwrap();

    for (name, meal_type) in [("Oats", MealType::Breakfast), ("Salad", MealType::Lunch)] {
        store
            .create_meal(Meal::from_new(NewMeal {
                diet_plan_id: new_plan.id,
                name: name.to_owned(),
                meal_type,
                description: None,
                calories: Some(400),
                protein_g: None,
                carbs_g: None,
                fat_g: None,
                meal_time: None,
                items: Vec::new(),
            }))
            .await
            .unwrap();
    }

    let plans = store.diet_plans_for_user(user.id).await.unwrap();
    assert_eq!(plans[0].id, new_plan.id);
    assert_eq!(plans[1].id, old_plan.id);

    let current = store.current_diet_plan(user.id).await.unwrap().unwrap();
    assert_eq!(current.plan.name, "New");
    let names: Vec<&str> = current.meals.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Oats", "Salad"]);

    assert!(store.meals_for_plan(old_plan.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_children_of_unknown_parents_are_not_found() {
    let store = create_test_store();

    let err = store.meals_for_plan(DietPlanId::new()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));

    let ghost = User::from_new(new_user("ghost", None));
    let err = store
        .create_workout(workout(&ghost, "Nope", None))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "User", .. }));

    assert!(store.goals_for_user(UserId::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_goal_completion_is_one_way() {
    let store = create_test_store();
    let user = stored_user(&store, "ivan").await;
    let created = store.create_goal(goal(&user, 65.0, 75.0)).await.unwrap();
    assert!(!created.completed);

    let completed = store.complete_goal(created.id).await.unwrap();
    assert!(completed.completed);
    let again = store.complete_goal(created.id).await.unwrap();
    assert!(again.completed);

    let updated = store.update_goal_progress(created.id, 70.0).await.unwrap();
    assert!(updated.completed);
    assert!((updated.current_value - 70.0).abs() < f64::EPSILON);
    assert!((updated.start_value - 75.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_goals_sorted_by_target_date() {
    let store = create_test_store();
    let user = stored_user(&store, "judy").await;

    let mut open_ended = goal(&user, 10.0, 0.0);
    open_ended.name = "Open".to_owned();
    let mut late = goal(&user, 10.0, 0.0);
    late.name = "Late".to_owned();
    late.target_date = Some(date(2025, 12, 1));
    let mut soon = goal(&user, 10.0, 0.0);
    soon.name = "Soon".to_owned();
    soon.target_date = Some(date(2025, 4, 1));

    for g in [open_ended, late, soon] {
        store.create_goal(g).await.unwrap();
    }

    let names: Vec<String> = store
        .goals_for_user(user.id)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Soon", "Late", "Open"]);
}

#[tokio::test]
async fn test_article_category_filter_ignores_case() {
    let store = create_test_store();
    let fitness = store.list_articles(Some("FITNESS"), 10).await.unwrap();
    assert!(!fitness.is_empty());
    assert!(fitness
        .iter()
        .all(|a| a.category.eq_ignore_ascii_case("fitness")));

    assert!(store
        .list_articles(Some("astronomy"), 10)
        .await
        .unwrap()
        .is_empty());
}
