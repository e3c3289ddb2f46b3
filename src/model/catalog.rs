// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::fmt;

use super::scenario::Scenario;

/// The ordered, read-only table of scenarios shown by the viewer.
///
/// Built once at startup; there are no mutating accessors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(scenarios.len());
        for (index, scenario) in scenarios.iter().enumerate() {
            if scenario.title().trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if !seen.insert(scenario.title()) {
                return Err(CatalogError::DuplicateTitle { title: scenario.title().to_owned() });
            }
        }
        Ok(Self { scenarios })
    }

    pub fn get(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    pub fn position(&self, title: &str) -> Option<usize> {
        self.scenarios.iter().position(|scenario| scenario.title() == title)
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScenarioCatalog {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    EmptyTitle { index: usize },
    DuplicateTitle { title: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle { index } => write!(f, "scenario #{index} has an empty title"),
            Self::DuplicateTitle { title } => write!(f, "duplicate scenario title: {title}"),
        }
    }
}

impl std::error::Error for CatalogError {}
