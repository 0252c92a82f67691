// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training
// ABOUTME: Re-exports helper modules for stride-plan
// ABOUTME: Provides argument parsing and output formatting utilities

pub mod display;
pub mod parse;
