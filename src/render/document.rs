// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Block, Description, Inlines};

use super::text::text_len;

pub const LIST_BULLET: &str = "• ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocLineKind {
    Heading(u8),
    Paragraph,
    ListItem,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRun {
    pub text: String,
    pub strong: bool,
}

/// One display line of a flattened description. Paragraph and list lines are unwrapped; the
/// renderer wraps them to its width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub kind: DocLineKind,
    pub runs: Vec<DocRun>,
}

impl DocLine {
    fn blank() -> Self {
        Self { kind: DocLineKind::Blank, runs: Vec::new() }
    }

    fn from_inlines(kind: DocLineKind, inlines: &Inlines) -> Self {
        let runs = inlines
            .runs()
            .iter()
            .map(|inline| DocRun { text: inline.text().to_owned(), strong: inline.is_strong() })
            .collect();
        Self { kind, runs }
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Flattens a description into display lines, with a blank line between blocks.
pub fn flatten_description(description: &Description) -> Vec<DocLine> {
    let mut out = Vec::new();
    for (idx, block) in description.blocks().iter().enumerate() {
        if idx > 0 {
            out.push(DocLine::blank());
        }
        match block {
            Block::Heading { level, inlines } => {
                out.push(DocLine::from_inlines(DocLineKind::Heading(*level), inlines));
            }
            Block::Paragraph(inlines) => {
                out.push(DocLine::from_inlines(DocLineKind::Paragraph, inlines));
            }
            Block::List(items) => {
                out.extend(
                    items.iter().map(|item| DocLine::from_inlines(DocLineKind::ListItem, item)),
                );
            }
        }
    }
    out
}

/// Shallowest heading level among `lines`, if any heading is present.
pub fn top_heading_level(lines: &[DocLine]) -> Option<u8> {
    lines
        .iter()
        .filter_map(|line| match line.kind {
            DocLineKind::Heading(level) => Some(level),
            _ => None,
        })
        .min()
}

/// Plain-text form: headings are underlined (`=` for the shallowest level, `-` below), list items
/// bulleted.
pub fn description_to_plain(lines: &[DocLine]) -> String {
    let top = top_heading_level(lines);
    let mut out = Vec::<String>::with_capacity(lines.len());
    for line in lines {
        let text = line.text();
        match line.kind {
            DocLineKind::Heading(level) => {
                let rule = if Some(level) == top { "=" } else { "-" };
                let width = text_len(&text);
                out.push(text);
                out.push(rule.repeat(width));
            }
            DocLineKind::Paragraph => out.push(text),
            DocLineKind::ListItem => out.push(format!("  {LIST_BULLET}{text}")),
            DocLineKind::Blank => out.push(String::new()),
        }
    }
    out.join("\n")
}
