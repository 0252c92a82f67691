// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training
// ABOUTME: Re-exports command modules for stride-plan
// ABOUTME: Provides access to plan lifecycle commands

pub mod plan;
