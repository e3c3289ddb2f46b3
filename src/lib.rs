// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lockstudy: a terminal viewer for livelock and deadlock scenarios.
//!
//! A [`model::ScenarioCatalog`] holds the scenarios, [`viewer::ViewerState`] tracks selection and
//! the open detail panel, and [`render`] turns both into something the TUI or a plain-text
//! printer can show.

pub mod catalog;
pub mod model;
pub mod render;
pub mod store;
pub mod tui;
pub mod viewer;
