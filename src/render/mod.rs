// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for scenarios.
//!
//! Renderers turn the catalog plus viewer state into a [`ViewModel`], flattened description
//! lines and highlighted code blocks. The TUI styles these; [`render_plain`] prints them.

pub mod code;
pub mod document;
pub(crate) mod text;
pub mod view;

pub use code::{highlight_java, CodeBlock, HighlightedLine, Language, Token, TokenKind};
pub use document::{
    description_to_plain, flatten_description, top_heading_level, DocLine, DocLineKind, DocRun,
};
pub use view::{
    render_plain, CodeFileView, Control, ControlKind, DetailView, PanelView, Trigger, ViewModel,
};
