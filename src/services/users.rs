// ABOUTME: User account service: sign-up validation, lookups, and profile updates
// ABOUTME: Every per-user endpoint resolves its user through `require_user`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::storage::{FitplanStore, UserRepository};
use fitplan_core::models::{NewUser, User, UserId, UserProfile};
use tracing::info;

/// Load a user or fail with `ResourceNotFound`
///
/// # Errors
///
/// Returns `ResourceNotFound` when no user has this id
pub async fn require_user(store: &dyn FitplanStore, user_id: UserId) -> AppResult<User> {
    store
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {user_id}")))
}

/// Create a user account
///
/// Business rules:
/// - Username and first name must be non-blank
/// - A profile supplied at sign-up is validated like a profile update
/// - Usernames are unique
///
/// # Errors
///
/// Returns `MissingRequiredField` for blank names, `InvalidInput` for a bad profile,
/// and `ResourceAlreadyExists` for a taken username
pub async fn create_user(store: &dyn FitplanStore, new_user: NewUser) -> AppResult<User> {
    if new_user.username.trim().is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "Username is required",
        ));
    }
    if new_user.first_name.trim().is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "First name is required",
        ));
    }
    if let Some(profile) = &new_user.profile {
        profile.validate()?;
    }

    let user = store.create_user(User::from_new(new_user)).await?;
    info!(user_id = %user.id, username = %user.username, "User created");
    Ok(user)
}

/// Replace the calculator profile of a user
///
/// # Errors
///
/// Returns `InvalidInput` for an out-of-range profile and `ResourceNotFound` for an unknown user
pub async fn update_profile(
    store: &dyn FitplanStore,
    user_id: UserId,
    profile: UserProfile,
) -> AppResult<User> {
    profile.validate()?;
    let user = store.update_profile(user_id, profile).await?;
    info!(user_id = %user_id, "Profile updated");
    Ok(user)
}
