// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Renderer-agnostic view of the catalog under a given [`ViewerState`].
//!
//! The TUI and the plain-text renderer both draw from a [`ViewModel`], so what is visible for a
//! given state is decided here once.

use crate::model::ScenarioCatalog;
use crate::viewer::{Panel, ViewerState};

use super::code::{CodeBlock, Language};
use super::document::{description_to_plain, flatten_description, DocLine};

pub const APP_HEADING: &str = "Livelock vs. Deadlock Simulation";
pub const APP_INTRO: &str = "Explore how livelock and deadlock occur in operating systems through interactive visualizations and detailed explanations.";
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No additional details for this scenario.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub heading: &'static str,
    pub intro: &'static str,
    pub triggers: Vec<Trigger>,
    pub detail: Option<DetailView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub index: usize,
    pub title: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub index: usize,
    pub title: String,
    pub info: String,
    pub controls: [Control; 3],
    pub panel: Option<PanelView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    ToggleInfo,
    RunSimulation,
    ToggleCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    pub label: &'static str,
    /// Whether the panel this control toggles is currently open.
    pub active: bool,
    /// Inert controls are shown but do nothing.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// Flattened description; empty when the scenario has none.
    Info(Vec<DocLine>),
    Code(Vec<CodeFileView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFileView {
    pub name: String,
    pub block: CodeBlock,
}

impl ViewModel {
    /// # Panics
    ///
    /// Panics if the state selects an index outside `catalog`.
    pub fn build(catalog: &ScenarioCatalog, state: &ViewerState) -> Self {
        let triggers = catalog
            .iter()
            .enumerate()
            .map(|(index, scenario)| Trigger {
                index,
                title: scenario.title().to_owned(),
                selected: state.selected() == Some(index),
            })
            .collect();

        let detail = state.selected().map(|index| {
            let Some(scenario) = catalog.get(index) else {
                panic!("selected scenario {index} is not in a catalog of {}", catalog.len());
            };

            let panel = match state.open_panel() {
                None => None,
                Some(Panel::Info) => Some(PanelView::Info(
                    scenario.description().map(flatten_description).unwrap_or_default(),
                )),
                Some(Panel::Code) => Some(PanelView::Code(
                    scenario
                        .code()
                        .iter()
                        .map(|file| CodeFileView {
                            name: file.name().to_string(),
                            block: CodeBlock::new(Language::for_file(file.name()), file.source()),
                        })
                        .collect(),
                )),
            };

            DetailView {
                index,
                title: scenario.title().to_owned(),
                info: scenario.info().to_owned(),
                controls: controls_for(state),
                panel,
            }
        });

        Self { heading: APP_HEADING, intro: APP_INTRO, triggers, detail }
    }
}

fn controls_for(state: &ViewerState) -> [Control; 3] {
    let info = state.info_visible();
    let code = state.code_visible();
    [
        Control {
            kind: ControlKind::ToggleInfo,
            label: if info { "Hide Info" } else { "Show Info" },
            active: info,
            enabled: true,
        },
        Control {
            kind: ControlKind::RunSimulation,
            label: "Run Simulation",
            active: false,
            enabled: false,
        },
        Control {
            kind: ControlKind::ToggleCode,
            label: if code { "Hide Code" } else { "Show Code" },
            active: code,
            enabled: true,
        },
    ]
}

/// Deterministic plain-text rendering of a view.
pub fn render_plain(view: &ViewModel) -> String {
    let mut out = Vec::<String>::new();
    out.push(view.heading.to_owned());
    out.push(view.intro.to_owned());
    out.push(String::new());

    for trigger in &view.triggers {
        let marker = if trigger.selected { '>' } else { ' ' };
        out.push(format!("{marker} [{}] {}", trigger.index + 1, trigger.title));
    }

    if let Some(detail) = &view.detail {
        out.push(String::new());
        out.push(detail.title.clone());
        out.push(detail.info.clone());
        out.push(String::new());
        out.push(
            detail
                .controls
                .iter()
                .map(|control| format!("[{}]", control.label))
                .collect::<Vec<_>>()
                .join(" "),
        );

        match &detail.panel {
            None => {}
            Some(PanelView::Info(lines)) => {
                out.push(String::new());
                if lines.is_empty() {
                    out.push(NO_DESCRIPTION_PLACEHOLDER.to_owned());
                } else {
                    out.push(description_to_plain(lines));
                }
            }
            Some(PanelView::Code(files)) => {
                for file in files {
                    out.push(String::new());
                    out.push(format!("--- {} ---", file.name));
                    out.push(file.block.to_plain());
                }
            }
        }
    }

    out.join("\n")
}
