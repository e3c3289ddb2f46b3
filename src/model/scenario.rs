// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::description::{Description, HEADING_LEVELS};
use super::file_name::{FileName, FileNameError};

/// One teaching scenario: a short summary, optional long-form description and
/// inert sample code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    title: String,
    info: String,
    description: Option<Description>,
    code: CodeListing,
}

impl Scenario {
    pub fn new(title: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            info: info.into(),
            description: None,
            code: CodeListing::default(),
        }
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_code(mut self, code: CodeListing) -> Self {
        self.code = code;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn code(&self) -> &CodeListing {
        &self.code
    }
}

/// A sample source file shown in the code panel. The source is never parsed
/// or executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFile {
    name: FileName,
    source: String,
}

impl CodeFile {
    pub fn new(name: FileName, source: impl Into<String>) -> Self {
        Self { name, source: source.into() }
    }

    pub fn name(&self) -> &FileName {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Filename → source mapping that iterates in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeListing {
    files: Vec<CodeFile>,
}

impl CodeListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: CodeFile) -> Result<(), ModelError> {
        if self.get(file.name().as_str()).is_some() {
            return Err(ModelError::DuplicateFileName { name: file.name.into_string() });
        }
        self.files.push(file);
        Ok(())
    }

    /// Builder form of [`CodeListing::insert`] taking a raw name.
    pub fn with_file(
        mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let name = FileName::new(name)?;
        self.insert(CodeFile::new(name, source))?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&CodeFile> {
        self.files.iter().find(|file| file.name().as_str() == name)
    }

    pub fn files(&self) -> &[CodeFile] {
        &self.files
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodeFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a CodeListing {
    type Item = &'a CodeFile;
    type IntoIter = std::slice::Iter<'a, CodeFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidFileName(FileNameError),
    DuplicateFileName { name: String },
    HeadingLevel { level: u8 },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFileName(err) => write!(f, "invalid file name: {err}"),
            Self::DuplicateFileName { name } => write!(f, "duplicate code file: {name}"),
            Self::HeadingLevel { level } => write!(
                f,
                "heading level {level} is outside {}..={}",
                HEADING_LEVELS.start(),
                HEADING_LEVELS.end()
            ),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<FileNameError> for ModelError {
    fn from(value: FileNameError) -> Self {
        Self::InvalidFileName(value)
    }
}
