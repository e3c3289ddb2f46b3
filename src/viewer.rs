// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scenario viewer state.
//!
//! The viewer tracks which scenario is selected and which detail panel (if any) is open. Every
//! user interaction goes through [`ViewerState::apply`], which keeps the info and code panels
//! mutually exclusive.

/// A detail panel of the selected scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Info,
    Code,
}

/// One discrete user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    Select(usize),
    ToggleInfo,
    ToggleCode,
    RunSimulation,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewerState {
    rev: u64,
    selected: Option<usize>,
    open_panel: Option<Panel>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumped on every change to selection or panel visibility.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn open_panel(&self) -> Option<Panel> {
        self.open_panel
    }

    pub fn info_visible(&self) -> bool {
        self.open_panel == Some(Panel::Info)
    }

    pub fn code_visible(&self) -> bool {
        self.open_panel == Some(Panel::Code)
    }

    pub fn apply(&mut self, event: ViewerEvent, scenario_count: usize) {
        match event {
            ViewerEvent::Select(index) => self.select_scenario(index, scenario_count),
            ViewerEvent::ToggleInfo => self.toggle_info(),
            ViewerEvent::ToggleCode => self.toggle_code(),
            ViewerEvent::RunSimulation => self.run_simulation(),
        }
    }

    /// Selects scenario `index` and closes any open panel.
    ///
    /// # Panics
    ///
    /// Panics if `index >= scenario_count`; callers only offer valid indices.
    pub fn select_scenario(&mut self, index: usize, scenario_count: usize) {
        assert!(
            index < scenario_count,
            "scenario index {index} out of range for {scenario_count} scenarios"
        );
        self.set(Some(index), None);
    }

    /// Flips the info panel. No-op without a selection.
    pub fn toggle_info(&mut self) {
        self.toggle_panel(Panel::Info);
    }

    /// Flips the code panel. No-op without a selection.
    pub fn toggle_code(&mut self) {
        self.toggle_panel(Panel::Code);
    }

    /// The "Run Simulation" control has no behavior.
    pub fn run_simulation(&self) {}

    fn toggle_panel(&mut self, panel: Panel) {
        if self.selected.is_none() {
            return;
        }
        let next = if self.open_panel == Some(panel) { None } else { Some(panel) };
        self.set(self.selected, next);
    }

    fn set(&mut self, selected: Option<usize>, open_panel: Option<Panel>) {
        if self.selected == selected && self.open_panel == open_panel {
            return;
        }
        self.selected = selected;
        self.open_panel = open_panel;
        self.rev = self.rev.wrapping_add(1);
    }
}
