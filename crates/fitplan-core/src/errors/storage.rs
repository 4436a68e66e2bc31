// ABOUTME: Structured error types for repository operations
// ABOUTME: StorageError with entity context and conversion into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by repository implementations
#[derive(Debug, Error)]
pub enum StorageError {
    /// Record with the given id does not exist
    #[error("{entity} with ID {id} not found")]
    NotFound {
        /// Entity kind (e.g. "Goal")
        entity: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// Unique constraint violated
    #[error("{entity} conflict: {details}")]
    Conflict {
        /// Entity kind
        entity: &'static str,
        /// What collided
        details: String,
    },
}

impl StorageError {
    /// Shorthand for [`StorageError::NotFound`]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        let code = match &error {
            StorageError::NotFound { .. } => ErrorCode::ResourceNotFound,
            StorageError::Conflict { .. } => ErrorCode::ResourceAlreadyExists,
        };
        Self::new(code, error.to_string())
    }
}
