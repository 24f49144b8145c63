// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types shared across semiocache.
//!
//! This module provides the small value types used by the caching
//! structures, currently the [`Interval`] key for range-keyed entries.

mod interval;

pub use interval::Interval;
