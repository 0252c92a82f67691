// ABOUTME: Unified error handling re-exported from the stride-core foundation crate
// ABOUTME: Keeps crate::errors import paths stable for engine, store, and CLI code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training

//! # Error Handling
//!
//! [`AppError`] carries an [`ErrorCode`], a message, and an optional source.
//! Engine operations never fail; errors come from storage, decoding, config,
//! and CLI input parsing.

pub use stride_core::errors::{AppError, AppResult, ErrorCode};
