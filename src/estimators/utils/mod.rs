// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Rank-space preprocessing shared by the DV estimators

pub mod embedding;
pub mod rank;
