// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scenario catalogs on disk.
//!
//! The store module reads/writes the JSON catalog format used to replace the built-in scenario
//! table.

pub mod catalog_file;

pub use catalog_file::{
    catalog_from_json_str, catalog_to_json_string, CatalogFile, StoreError,
    CATALOG_FORMAT_VERSION,
};
