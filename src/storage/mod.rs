// ABOUTME: Repository traits for users, health metrics, nutrition, workouts, articles, and goals
// ABOUTME: Handlers and services depend on these traits; the in-memory store is injected at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Each aggregate gets its own async repository trait. [`FitplanStore`] bundles
//! them so the server can hold a single `Arc<dyn FitplanStore>`.
//!
//! Queries that depend on the calendar (current and upcoming workouts) take
//! `today` explicitly so results are reproducible in tests.

/// Process-local store backed by `tokio::sync::RwLock`
pub mod memory;

pub use memory::InMemoryStore;

use crate::errors::StorageError;
use async_trait::async_trait;
use chrono::NaiveDate;
use fitplan_core::models::{
    Article, ArticleId, DietPlan, DietPlanId, DietPlanWithMeals, Exercise, Goal, GoalId,
    HealthMetric, Meal, User, UserId, UserProfile, Workout, WorkoutId, WorkoutWithExercises,
};

/// Result alias for repository operations
pub type StorageResult<T> = Result<T, StorageError>;

/// User accounts and their calculator profile
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; fails with `Conflict` when the username is taken
    async fn create_user(&self, user: User) -> StorageResult<User>;

    /// Look up a user by id
    async fn get_user(&self, id: UserId) -> StorageResult<Option<User>>;

    /// Look up a user by username
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;

    /// Replace the profile of an existing user
    async fn update_profile(&self, id: UserId, profile: UserProfile) -> StorageResult<User>;
}

/// Immutable check-in records
#[async_trait]
pub trait HealthMetricRepository: Send + Sync {
    /// Insert a check-in; the owner must exist
    async fn create_health_metric(&self, metric: HealthMetric) -> StorageResult<HealthMetric>;

    /// All check-ins of a user, newest date first
    async fn health_metrics_for_user(&self, user_id: UserId) -> StorageResult<Vec<HealthMetric>>;

    /// The check-in with the latest date, if any
    async fn latest_health_metric(&self, user_id: UserId) -> StorageResult<Option<HealthMetric>>;
}

/// Diet plans and their meals
#[async_trait]
pub trait DietPlanRepository: Send + Sync {
    /// Insert a plan; the owner must exist
    async fn create_diet_plan(&self, plan: DietPlan) -> StorageResult<DietPlan>;

    /// Plans of a user, newest first
    async fn diet_plans_for_user(&self, user_id: UserId) -> StorageResult<Vec<DietPlan>>;

    /// Newest plan of a user together with its meals
    async fn current_diet_plan(&self, user_id: UserId)
        -> StorageResult<Option<DietPlanWithMeals>>;

    /// Insert a meal; the parent plan must exist
    async fn create_meal(&self, meal: Meal) -> StorageResult<Meal>;

    /// Meals of a plan in insertion order; fails with `NotFound` for an unknown plan
    async fn meals_for_plan(&self, plan_id: DietPlanId) -> StorageResult<Vec<Meal>>;
}

/// Scheduled workouts and their exercises
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Insert a workout; the owner must exist
    async fn create_workout(&self, workout: Workout) -> StorageResult<Workout>;

    /// Workouts of a user: scheduled ones by date ascending, unscheduled after, newest first within ties
    async fn workouts_for_user(&self, user_id: UserId) -> StorageResult<Vec<Workout>>;

    /// Workout scheduled for `today`, else the first listed workout
    async fn current_workout(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> StorageResult<Option<WorkoutWithExercises>>;

    /// Workouts scheduled strictly after `today`, soonest first, at most `limit`
    async fn upcoming_workouts(
        &self,
        user_id: UserId,
        today: NaiveDate,
        limit: usize,
    ) -> StorageResult<Vec<Workout>>;

    /// Insert an exercise; the parent workout must exist
    async fn create_exercise(&self, exercise: Exercise) -> StorageResult<Exercise>;

    /// Exercises of a workout in insertion order; fails with `NotFound` for an unknown workout
    async fn exercises_for_workout(&self, workout_id: WorkoutId) -> StorageResult<Vec<Exercise>>;
}

/// Educational articles
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Insert an article
    async fn create_article(&self, article: Article) -> StorageResult<Article>;

    /// Look up an article by id
    async fn get_article(&self, id: ArticleId) -> StorageResult<Option<Article>>;

    /// Newest articles first, optionally restricted to a category (case-insensitive)
    async fn list_articles(
        &self,
        category: Option<&str>,
        limit: usize,
    ) -> StorageResult<Vec<Article>>;
}

/// User goals
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Insert a goal; the owner must exist
    async fn create_goal(&self, goal: Goal) -> StorageResult<Goal>;

    /// Look up a goal by id
    async fn get_goal(&self, id: GoalId) -> StorageResult<Option<Goal>>;

    /// Goals of a user by target date ascending; goals without a date come last
    async fn goals_for_user(&self, user_id: UserId) -> StorageResult<Vec<Goal>>;

    /// Set the current value; never touches `completed`
    async fn update_goal_progress(&self, id: GoalId, current_value: f64) -> StorageResult<Goal>;

    /// Mark a goal complete; idempotent
    async fn complete_goal(&self, id: GoalId) -> StorageResult<Goal>;
}

/// Every repository the server needs behind one object
pub trait FitplanStore:
    UserRepository
    + HealthMetricRepository
    + DietPlanRepository
    + WorkoutRepository
    + ArticleRepository
    + GoalRepository
{
}

impl<T> FitplanStore for T where
    T: UserRepository
        + HealthMetricRepository
        + DietPlanRepository
        + WorkoutRepository
        + ArticleRepository
        + GoalRepository
{
}
