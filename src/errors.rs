// ABOUTME: Re-exports the unified error types from fitplan-core
// ABOUTME: Keeps `crate::errors::AppError` paths stable across the server crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! `AppError` renders as `{"error": {"code": "...", "message": "..."}}` with the HTTP
//! status of its `ErrorCode`.

pub use fitplan_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, StorageError};
