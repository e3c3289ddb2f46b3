// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Display name of a sample source file (e.g. `Main.java`).
///
/// Names are headings, never paths: they must be non-empty, must not contain
/// `/` or `\`, and must not contain control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileName {
    value: String,
}

impl FileName {
    pub fn new(value: impl Into<String>) -> Result<Self, FileNameError> {
        let value = value.into();
        validate_file_name(&value)?;
        Ok(Self { value })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Extension after the last `.`, if any (`"Main.java"` → `Some("java")`).
    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.value.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext)
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for FileName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for FileName {
    type Err = FileNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for FileName {
    type Error = FileNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileNameError {
    Empty,
    ContainsSeparator,
    ContainsControl,
}

impl fmt::Display for FileNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("file name must not be empty"),
            Self::ContainsSeparator => f.write_str("file name must not contain '/' or '\\'"),
            Self::ContainsControl => f.write_str("file name must not contain control characters"),
        }
    }
}

impl std::error::Error for FileNameError {}

fn validate_file_name(value: &str) -> Result<(), FileNameError> {
    if value.trim().is_empty() {
        return Err(FileNameError::Empty);
    }
    if value.contains(['/', '\\']) {
        return Err(FileNameError::ContainsSeparator);
    }
    if value.chars().any(char::is_control) {
        return Err(FileNameError::ContainsControl);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{FileName, FileNameError};

    #[test]
    fn file_name_rejects_empty_and_blank() {
        assert_eq!(FileName::new(""), Err(FileNameError::Empty));
        assert_eq!(FileName::new("   "), Err(FileNameError::Empty));
    }

    #[test]
    fn file_name_rejects_separators() {
        assert_eq!(FileName::new("src/Main.java"), Err(FileNameError::ContainsSeparator));
        assert_eq!(FileName::new("src\\Main.java"), Err(FileNameError::ContainsSeparator));
    }

    #[test]
    fn file_name_rejects_control_chars() {
        assert_eq!(FileName::new("Main\n.java"), Err(FileNameError::ContainsControl));
    }

    #[test]
    fn extension_ignores_dotfiles_and_trailing_dots() {
        assert_eq!(FileName::new("Main.java").expect("name").extension(), Some("java"));
        assert_eq!(FileName::new(".profile").expect("name").extension(), None);
        assert_eq!(FileName::new("README.").expect("name").extension(), None);
        assert_eq!(FileName::new("Makefile").expect("name").extension(), None);
    }
}
