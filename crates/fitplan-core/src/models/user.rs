// ABOUTME: Registered user model and creation payload
// ABOUTME: Users optionally carry the profile used as calculator input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{UserId, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Unique login name
    pub username: String,
    /// Given name
    pub first_name: String,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Contact email
    pub email: String,
    /// Calculator inputs, absent until the user fills in their profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a user record from a creation payload
    #[must_use]
    pub fn from_new(new_user: NewUser) -> Self {
        Self {
            id: UserId::new(),
            username: new_user.username,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            profile: new_user.profile,
            created_at: Utc::now(),
        }
    }
}

/// Payload for creating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Unique login name
    pub username: String,
    /// Given name
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Contact email
    pub email: String,
    /// Optional profile supplied at sign-up
    #[serde(default)]
    pub profile: Option<UserProfile>,
}
