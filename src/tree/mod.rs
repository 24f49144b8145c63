// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Self-adjusting binary search tree used as a memoizing cache.
//!
//! This module provides [`SplayTree`], a BST that rotates every touched key
//! to the root. Skewed access patterns (a memoized recurrence hammering the
//! same small keys, for instance) therefore stay near the root and pay
//! amortized logarithmic cost.

mod splay;

pub use splay::SplayTree;
