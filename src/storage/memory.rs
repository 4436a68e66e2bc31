// ABOUTME: In-memory implementation of every repository trait
// ABOUTME: Vec-backed tables behind tokio RwLocks, seeded with the sample article catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Process-local store
//!
//! Tables are `Vec`s in insertion order, so "newest first" is a reverse scan.
//! Sorts are stable, which keeps insertion order meaningful for ties.

use super::{
    ArticleRepository, DietPlanRepository, GoalRepository, HealthMetricRepository,
    StorageResult, UserRepository, WorkoutRepository,
};
use crate::errors::StorageError;
use async_trait::async_trait;
use chrono::NaiveDate;
use fitplan_core::models::{
    Article, ArticleId, DietPlan, DietPlanId, DietPlanWithMeals, Exercise, Goal, GoalId,
    HealthMetric, Meal, NewArticle, User, UserId, UserProfile, Workout, WorkoutId,
    WorkoutWithExercises,
};
use std::cmp::Reverse;
use tokio::sync::RwLock;
use tracing::debug;

/// Articles every fresh store starts with
const SAMPLE_ARTICLES: [(&str, &str, &str, &str, &str, u32); 5] = [
    (
        "10 Superfoods to Boost Your Immune System",
        "Long detailed content about superfoods and their benefits...",
        "Discover foods that can help strengthen your body's natural defenses.",
        "https://images.unsplash.com/photo-1498837167922-ddd27525d352",
        "Nutrition",
        5,
    ),
    (
        "The Benefits of Strength Training for Women",
        "Detailed content about benefits of strength training for women...",
        "Why building muscle is crucial for women's health and fitness goals.",
        "https://images.unsplash.com/photo-1517836357463-d25dfeac3438",
        "Exercise",
        7,
    ),
    (
        "5 Easy Meal Prep Ideas for Busy Professionals",
        "Content about meal preparation strategies...",
        "Time-saving meal prep strategies that don't sacrifice nutrition.",
        "https://images.unsplash.com/photo-1512621776951-a57141f2eefd",
        "Meal Prep",
        4,
    ),
    (
        "How to Create a Sustainable Fitness Routine",
        "Content about creating sustainable fitness habits...",
        "Tips for building exercise habits that last a lifetime.",
        "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b",
        "Fitness",
        6,
    ),
    (
        "Understanding Macronutrients: A Guide for Beginners",
        "Detailed guide about protein, carbs and fats...",
        "Learn the basics of proteins, carbs, and fats for better nutrition.",
        "https://images.unsplash.com/photo-1505253758473-96b7015fcd40",
        "Nutrition",
        8,
    ),
];

/// Vec-backed store for development, demos, and tests
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    health_metrics: RwLock<Vec<HealthMetric>>,
    diet_plans: RwLock<Vec<DietPlan>>,
    meals: RwLock<Vec<Meal>>,
    workouts: RwLock<Vec<Workout>>,
    exercises: RwLock<Vec<Exercise>>,
    articles: RwLock<Vec<Article>>,
    goals: RwLock<Vec<Goal>>,
}

impl InMemoryStore {
    /// Create a store holding the sample articles
    #[must_use]
    pub fn new() -> Self {
        let articles = SAMPLE_ARTICLES
            .iter()
            .map(|&(title, content, summary, image_url, category, read_time)| {
                Article::from_new(NewArticle {
                    title: title.to_owned(),
                    summary: Some(summary.to_owned()),
                    content: content.to_owned(),
                    category: category.to_owned(),
                    read_time_minutes: Some(read_time),
                    image_url: Some(image_url.to_owned()),
                })
            })
            .collect();

        Self {
            articles: RwLock::new(articles),
            ..Self::default()
        }
    }

    /// Create a store with no data at all
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    async fn ensure_user(&self, user_id: UserId) -> StorageResult<()> {
        if self.users.read().await.iter().any(|u| u.id == user_id) {
            Ok(())
        } else {
            Err(StorageError::not_found("User", user_id))
        }
    }

    async fn ensure_diet_plan(&self, plan_id: DietPlanId) -> StorageResult<()> {
        if self.diet_plans.read().await.iter().any(|p| p.id == plan_id) {
            Ok(())
        } else {
            Err(StorageError::not_found("Diet plan", plan_id))
        }
    }

    async fn ensure_workout(&self, workout_id: WorkoutId) -> StorageResult<()> {
        if self.workouts.read().await.iter().any(|w| w.id == workout_id) {
            Ok(())
        } else {
            Err(StorageError::not_found("Workout", workout_id))
        }
    }

    async fn modify_goal<F>(&self, id: GoalId, apply: F) -> StorageResult<Goal>
    where
        F: FnOnce(&mut Goal) + Send,
    {
        let mut goals = self.goals.write().await;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| StorageError::not_found("Goal", id))?;
        apply(goal);
        Ok(goal.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, user: User) -> StorageResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(StorageError::Conflict {
                entity: "User",
                details: format!("username {} already taken", user.username),
            });
        }
        debug!(user_id = %user.id, username = %user.username, "Created user");
        users.push(user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> StorageResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn update_profile(&self, id: UserId, profile: UserProfile) -> StorageResult<User> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StorageError::not_found("User", id))?;
        user.profile = Some(profile);
        Ok(user.clone())
    }
}

#[async_trait]
impl HealthMetricRepository for InMemoryStore {
    async fn create_health_metric(&self, metric: HealthMetric) -> StorageResult<HealthMetric> {
        self.ensure_user(metric.user_id).await?;
        self.health_metrics.write().await.push(metric.clone());
        Ok(metric)
    }

    async fn health_metrics_for_user(&self, user_id: UserId) -> StorageResult<Vec<HealthMetric>> {
        let mut history: Vec<HealthMetric> = self
            .health_metrics
            .read()
            .await
            .iter()
            .rev()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        history.sort_by_key(|m| Reverse(m.date));
        Ok(history)
    }

    async fn latest_health_metric(&self, user_id: UserId) -> StorageResult<Option<HealthMetric>> {
        Ok(self
            .health_metrics_for_user(user_id)
            .await?
            .into_iter()
            .next())
    }
}

#[async_trait]
impl DietPlanRepository for InMemoryStore {
    async fn create_diet_plan(&self, plan: DietPlan) -> StorageResult<DietPlan> {
        self.ensure_user(plan.user_id).await?;
        self.diet_plans.write().await.push(plan.clone());
        Ok(plan)
    }

    async fn diet_plans_for_user(&self, user_id: UserId) -> StorageResult<Vec<DietPlan>> {
        Ok(self
            .diet_plans
            .read()
            .await
            .iter()
            .rev()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn current_diet_plan(
        &self,
        user_id: UserId,
    ) -> StorageResult<Option<DietPlanWithMeals>> {
        let Some(plan) = self.diet_plans_for_user(user_id).await?.into_iter().next() else {
            return Ok(None);
        };
        let meals = self.meals_for_plan(plan.id).await?;
        Ok(Some(DietPlanWithMeals { plan, meals }))
    }

    async fn create_meal(&self, meal: Meal) -> StorageResult<Meal> {
        self.ensure_diet_plan(meal.diet_plan_id).await?;
        self.meals.write().await.push(meal.clone());
        Ok(meal)
    }

    async fn meals_for_plan(&self, plan_id: DietPlanId) -> StorageResult<Vec<Meal>> {
        self.ensure_diet_plan(plan_id).await?;
        Ok(self
            .meals
            .read()
            .await
            .iter()
            .filter(|m| m.diet_plan_id == plan_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl WorkoutRepository for InMemoryStore {
    async fn create_workout(&self, workout: Workout) -> StorageResult<Workout> {
        self.ensure_user(workout.user_id).await?;
        self.workouts.write().await.push(workout.clone());
        Ok(workout)
    }

    async fn workouts_for_user(&self, user_id: UserId) -> StorageResult<Vec<Workout>> {
        let mut workouts: Vec<Workout> = self
            .workouts
            .read()
            .await
            .iter()
            .rev()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        workouts.sort_by_key(|w| (w.scheduled_date.is_none(), w.scheduled_date));
        Ok(workouts)
    }

    async fn current_workout(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> StorageResult<Option<WorkoutWithExercises>> {
        let workouts = self.workouts_for_user(user_id).await?;
        let chosen = workouts
            .iter()
            .find(|w| w.scheduled_date == Some(today))
            .or_else(|| workouts.first())
            .cloned();

        let Some(workout) = chosen else {
            return Ok(None);
        };
        let exercises = self.exercises_for_workout(workout.id).await?;
        Ok(Some(WorkoutWithExercises { workout, exercises }))
    }

    async fn upcoming_workouts(
        &self,
        user_id: UserId,
        today: NaiveDate,
        limit: usize,
    ) -> StorageResult<Vec<Workout>> {
        Ok(self
            .workouts_for_user(user_id)
            .await?
            .into_iter()
            .filter(|w| w.scheduled_date.is_some_and(|date| date > today))
            .take(limit)
            .collect())
    }

    async fn create_exercise(&self, exercise: Exercise) -> StorageResult<Exercise> {
        self.ensure_workout(exercise.workout_id).await?;
        self.exercises.write().await.push(exercise.clone());
        Ok(exercise)
    }

    async fn exercises_for_workout(&self, workout_id: WorkoutId) -> StorageResult<Vec<Exercise>> {
        self.ensure_workout(workout_id).await?;
        Ok(self
            .exercises
            .read()
            .await
            .iter()
            .filter(|e| e.workout_id == workout_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ArticleRepository for InMemoryStore {
    async fn create_article(&self, article: Article) -> StorageResult<Article> {
        self.articles.write().await.push(article.clone());
        Ok(article)
    }

    async fn get_article(&self, id: ArticleId) -> StorageResult<Option<Article>> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_articles(
        &self,
        category: Option<&str>,
        limit: usize,
    ) -> StorageResult<Vec<Article>> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .rev()
            .filter(|a| category.is_none_or(|c| a.category.eq_ignore_ascii_case(c)))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl GoalRepository for InMemoryStore {
    async fn create_goal(&self, goal: Goal) -> StorageResult<Goal> {
        self.ensure_user(goal.user_id).await?;
        self.goals.write().await.push(goal.clone());
        Ok(goal)
    }

    async fn get_goal(&self, id: GoalId) -> StorageResult<Option<Goal>> {
        Ok(self.goals.read().await.iter().find(|g| g.id == id).cloned())
    }

    async fn goals_for_user(&self, user_id: UserId) -> StorageResult<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .goals
            .read()
            .await
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect();
        goals.sort_by_key(|g| (g.target_date.is_none(), g.target_date));
        Ok(goals)
    }

    async fn update_goal_progress(&self, id: GoalId, current_value: f64) -> StorageResult<Goal> {
        self.modify_goal(id, |goal| goal.record_progress(current_value))
            .await
    }

    async fn complete_goal(&self, id: GoalId) -> StorageResult<Goal> {
        self.modify_goal(id, Goal::mark_completed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::models::{NewGoal, NewUser};

    fn user(username: &str) -> User {
        User::from_new(NewUser {
            username: username.to_owned(),
            first_name: "Test".to_owned(),
            last_name: None,
            email: format!("{username}@example.com"),
            profile: None,
        })
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = InMemoryStore::empty();
        store.create_user(user("alice")).await.unwrap();
        let err = store.create_user(user("alice")).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_sample_articles_are_seeded() {
        let store = InMemoryStore::new();
        let all = store.list_articles(None, 10).await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(
            all[0].title,
            "Understanding Macronutrients: A Guide for Beginners"
        );

        let nutrition = store.list_articles(Some("nutrition"), 10).await.unwrap();
        assert_eq!(nutrition.len(), 2);
        assert_eq!(store.list_articles(None, 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_records_require_existing_owner() {
        let store = InMemoryStore::empty();
        let orphan = Goal::from_new(
            NewGoal {
                user_id: UserId::new(),
                name: "Run 5k".to_owned(),
                target_value: 5.0,
                current_value: 1.0,
                start_value: None,
                start_date: None,
                target_date: None,
                completed: false,
            },
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        let err = store.create_goal(orphan).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { entity: "User", .. }));
    }
}
