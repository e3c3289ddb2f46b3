// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::RangeInclusive;

/// Heading levels a [`Block::Heading`] can carry.
pub const HEADING_LEVELS: RangeInclusive<u8> = 1..=3;

/// Long-form explanatory content for a scenario, as a flat list of blocks.
///
/// The model carries no markup or styling; renderers decide how headings,
/// paragraphs, bullet lists and strong runs look.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Description {
    blocks: Vec<Block>,
}

impl Description {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Appends a heading; `level` is clamped into [`HEADING_LEVELS`].
    pub fn heading(mut self, level: u8, inlines: impl Into<Inlines>) -> Self {
        let level = level.clamp(*HEADING_LEVELS.start(), *HEADING_LEVELS.end());
        self.blocks.push(Block::Heading { level, inlines: inlines.into() });
        self
    }

    pub fn paragraph(mut self, inlines: impl Into<Inlines>) -> Self {
        self.blocks.push(Block::Paragraph(inlines.into()));
        self
    }

    pub fn list<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Inlines>,
    {
        self.blocks.push(Block::List(items.into_iter().map(Into::into).collect()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading; `level` is 1..=3.
    Heading { level: u8, inlines: Inlines },
    Paragraph(Inlines),
    /// Bulleted list, one entry per item.
    List(Vec<Inlines>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Strong(text) => text,
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, Self::Strong(_))
    }
}

/// A run of inline text; consecutive runs concatenate without separators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inlines(Vec<Inline>);

impl Inlines {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.0.push(Inline::Text(text.into()));
        self
    }

    pub fn strong(mut self, text: impl Into<String>) -> Self {
        self.0.push(Inline::Strong(text.into()));
        self
    }

    pub fn runs(&self) -> &[Inline] {
        &self.0
    }

    pub fn plain_text(&self) -> String {
        self.0.iter().map(Inline::text).collect()
    }
}

impl From<&str> for Inlines {
    fn from(value: &str) -> Self {
        Self::new().text(value)
    }
}

impl From<String> for Inlines {
    fn from(value: String) -> Self {
        Self::new().text(value)
    }
}

impl From<Vec<Inline>> for Inlines {
    fn from(value: Vec<Inline>) -> Self {
        Self(value)
    }
}
