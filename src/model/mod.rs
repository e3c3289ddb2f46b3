// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A catalog holds scenarios; each scenario carries a summary, an optional structured
//! description and an ordered listing of inert sample source files.

pub mod catalog;
pub mod description;
pub mod file_name;
pub mod scenario;

pub use catalog::{CatalogError, ScenarioCatalog};
pub use description::{Block, Description, Inline, Inlines, HEADING_LEVELS};
pub use file_name::{FileName, FileNameError};
pub use scenario::{CodeFile, CodeListing, ModelError, Scenario};
