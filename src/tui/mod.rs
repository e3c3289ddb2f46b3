// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive TUI shell (ratatui + crossterm) over a [`ScenarioCatalog`]. All
//! selection and panel changes go through [`ViewerState`]; this module only maps keys to viewer
//! events and draws the resulting [`ViewModel`].

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::model::ScenarioCatalog;
use crate::render::{
    top_heading_level, CodeFileView, Control, DetailView, DocLine, DocLineKind, PanelView,
    ViewModel,
};
use crate::render::document::LIST_BULLET;
use crate::render::view::NO_DESCRIPTION_PLACEHOLDER;
use crate::viewer::{ViewerEvent, ViewerState};

mod hints;
mod theme;

pub use theme::ThemeError;
use theme::TuiTheme;

const TRIGGER_HINT_CHARS: &str = "123456789";
const FOOTER_BRAND: &str = "lockstudy";
const TOAST_TTL: Duration = Duration::from_secs(2);

/// Runs the interactive terminal UI until the user quits.
///
/// The palette override is read from `LOCKSTUDY_TUI_PALETTE` (or `LOCKSTUDY_PALETTE`) before the
/// terminal is touched, so a bad value is reported on a normal screen.
pub fn run(catalog: ScenarioCatalog) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(catalog, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let view = ViewModel::build(&app.catalog, &app.state);
    app.sync_scroll_with_state();

    let header = Paragraph::new(vec![
        Line::from(Span::styled(view.heading.to_owned(), app.theme.title_style())),
        Line::from(Span::styled(view.intro.to_owned(), app.theme.dim_style())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .style(app.theme.base_style());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rendered_height(&header, area.width)),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let header_area = rows[0];
    let main_area = rows[1];
    let status_area = rows[2];

    frame.render_widget(header, header_area);

    let (triggers_area, detail_area) = match &view.detail {
        None => (main_area, None),
        Some(_) => {
            let direction = if stack_panes_vertically(main_area) {
                Direction::Vertical
            } else {
                Direction::Horizontal
            };
            let constraints = match direction {
                Direction::Vertical => {
                    let list_height = (view.triggers.len() as u16).saturating_add(2).min(8);
                    [Constraint::Length(list_height), Constraint::Min(0)]
                }
                Direction::Horizontal => [Constraint::Percentage(30), Constraint::Percentage(70)],
            };
            let panes =
                Layout::default().direction(direction).constraints(constraints).split(main_area);
            (panes[0], Some(panes[1]))
        }
    };

    render_triggers(frame, app, &view, triggers_area);
    if let (Some(detail), Some(detail_area)) = (&view.detail, detail_area) {
        render_detail(frame, app, detail, detail_area);
    }

    let toast_suffix = app.take_live_toast().map(|m| format!(" | {m}")).unwrap_or_default();
    let status = Paragraph::new(footer_help_line(app, &toast_suffix, status_area.width < 90));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line(&app.theme)).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

fn render_triggers(frame: &mut Frame<'_>, app: &mut App, view: &ViewModel, area: Rect) {
    let label_width = app.trigger_labels.iter().map(|label| label.len()).max().unwrap_or(1);
    let title_width = (area.width as usize).saturating_sub(label_width + 4);
    let items = view
        .triggers
        .iter()
        .map(|trigger| {
            let label = app.trigger_labels.get(trigger.index).map(String::as_str).unwrap_or("");
            let title_style = if trigger.selected {
                app.theme.title_style()
            } else {
                app.theme.base_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{label:>label_width$} "), app.theme.hint_label_style()),
                Span::styled(
                    crate::render::text::truncate_with_ellipsis(&trigger.title, title_width),
                    title_style,
                ),
            ]))
        })
        .collect::<Vec<_>>();

    let hint_tail = if app.pending_hint.is_empty() {
        None
    } else {
        Some(format!("[{}…]", app.pending_hint))
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.panel_border_style(view.detail.is_none()))
                .title(view_title("Scenarios", view.triggers.len(), hint_tail.as_deref())),
        )
        .style(app.theme.base_style())
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(list, area, &mut app.cursor);
}

fn render_detail(frame: &mut Frame<'_>, app: &mut App, detail: &DetailView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border_style(true))
        .title(Span::styled(format!(" {} ", detail.title), app.theme.title_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut summary_lines = vec![Line::from(detail.info.clone()), Line::default()];
    summary_lines.extend(controls_lines(&app.theme, &detail.controls, inner.width));
    let summary =
        Paragraph::new(summary_lines).wrap(Wrap { trim: false }).style(app.theme.base_style());

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rendered_height(&summary, inner.width)),
            Constraint::Min(0),
        ])
        .split(inner);
    frame.render_widget(summary, parts[0]);

    let panel_area = parts[1];
    let Some(panel) = &detail.panel else {
        app.panel_viewport_height = 0;
        app.panel_content_height = 0;
        let hint = Paragraph::new(Line::from(Span::styled(
            "Press i for details or c for the sample code.",
            app.theme.dim_style(),
        )));
        frame.render_widget(hint, panel_area);
        return;
    };

    let (title, text, wrap) = match panel {
        PanelView::Info(lines) => ("Info", info_text(&app.theme, lines), true),
        PanelView::Code(files) => ("Code", code_text(&app.theme, files), false),
    };
    let panel_block = Block::default()
        .borders(Borders::TOP)
        .border_style(app.theme.dim_style())
        .title(format!("─ {title} "));
    let text_area = panel_block.inner(panel_area);

    let mut paragraph = Paragraph::new(text).style(app.theme.base_style());
    if wrap {
        paragraph = paragraph.wrap(Wrap { trim: false });
    }

    app.panel_viewport_height = text_area.height;
    app.panel_content_height = rendered_height(&paragraph, text_area.width);
    app.clamp_panel_scroll();

    let paragraph = paragraph
        .block(panel_block)
        .scroll((app.panel_scroll_y, if wrap { 0 } else { app.panel_scroll_x }));
    frame.render_widget(paragraph, panel_area);
}

fn info_text(theme: &TuiTheme, lines: &[DocLine]) -> Text<'static> {
    if lines.is_empty() {
        return Text::from(Line::from(Span::styled(
            NO_DESCRIPTION_PLACEHOLDER.to_owned(),
            theme.dim_style(),
        )));
    }

    let top = top_heading_level(lines);
    let mut out = Vec::<Line<'static>>::with_capacity(lines.len());
    for line in lines {
        let base = match line.kind {
            DocLineKind::Heading(level) => theme.heading_style(Some(level) == top),
            _ => theme.base_style(),
        };
        let mut spans = Vec::<Span<'static>>::with_capacity(line.runs.len() + 1);
        if line.kind == DocLineKind::ListItem {
            spans.push(Span::styled(format!("  {LIST_BULLET}"), theme.dim_style()));
        }
        for run in &line.runs {
            let style = if run.strong { base.patch(theme.strong_style()) } else { base };
            spans.push(Span::styled(run.text.clone(), style));
        }
        out.push(Line::from(spans));
    }
    Text::from(out)
}

fn code_text(theme: &TuiTheme, files: &[CodeFileView]) -> Text<'static> {
    let mut out = Vec::<Line<'static>>::new();
    for (idx, file) in files.iter().enumerate() {
        if idx > 0 {
            out.push(Line::default());
        }
        out.push(Line::from(Span::styled(file.name.clone(), theme.file_name_style())));

        let width = file.block.gutter_width();
        for line in &file.block.lines {
            let mut spans = Vec::<Span<'static>>::with_capacity(line.tokens.len() + 1);
            spans.push(Span::styled(format!("{:>width$} │ ", line.number), theme.gutter_style()));
            spans.extend(
                line.tokens
                    .iter()
                    .map(|token| Span::styled(token.text.clone(), theme.token_style(token.kind))),
            );
            out.push(Line::from(spans));
        }
    }
    Text::from(out)
}

/// Controls on one line when it fits `width`, otherwise one control per line so no label is split.
fn controls_lines(theme: &TuiTheme, controls: &[Control], width: u16) -> Vec<Line<'static>> {
    let line = controls_line(theme, controls);
    if line.width() <= width as usize {
        return vec![line];
    }
    controls
        .iter()
        .map(|control| controls_line(theme, std::slice::from_ref(control)))
        .collect()
}

fn controls_line(theme: &TuiTheme, controls: &[Control]) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    for (idx, control) in controls.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{}]", control.label),
            theme.control_style(control.active, control.enabled),
        ));
    }
    Line::from(spans)
}

struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    catalog: ScenarioCatalog,
    state: ViewerState,
    theme: TuiTheme,
    trigger_labels: Vec<String>,
    pending_hint: String,
    cursor: ListState,
    seen_rev: u64,
    panel_scroll_y: u16,
    panel_scroll_x: u16,
    panel_viewport_height: u16,
    panel_content_height: u16,
    show_help: bool,
    help_scroll: u16,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(catalog: ScenarioCatalog, theme: TuiTheme) -> Self {
        let trigger_labels =
            hints::trigger_labels(catalog.len(), TRIGGER_HINT_CHARS).unwrap_or_default();
        let mut cursor = ListState::default();
        if !catalog.is_empty() {
            cursor.select(Some(0));
        }
        Self {
            catalog,
            state: ViewerState::new(),
            theme,
            trigger_labels,
            pending_hint: String::new(),
            cursor,
            seen_rev: 0,
            panel_scroll_y: 0,
            panel_scroll_x: 0,
            panel_viewport_height: 0,
            panel_content_height: 0,
            show_help: false,
            help_scroll: 0,
            toast: None,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the app should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                KeyCode::Home => self.help_scroll = 0,
                _ => {}
            }
            return false;
        }

        if let KeyCode::Char(ch) = code {
            if TRIGGER_HINT_CHARS.contains(ch) {
                self.handle_hint_char(ch);
                return false;
            }
        }
        if !self.pending_hint.is_empty() {
            self.pending_hint.clear();
            if code == KeyCode::Esc {
                return false;
            }
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('?') => {
                self.show_help = true;
                self.help_scroll = 0;
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Enter => {
                if let Some(index) = self.cursor.selected() {
                    self.dispatch(ViewerEvent::Select(index));
                }
            }
            KeyCode::Char('i') => self.dispatch(ViewerEvent::ToggleInfo),
            KeyCode::Char('c') => self.dispatch(ViewerEvent::ToggleCode),
            KeyCode::Char('r') => self.dispatch(ViewerEvent::RunSimulation),
            KeyCode::PageDown | KeyCode::Char('J') => self.scroll_panel_page(1),
            KeyCode::PageUp | KeyCode::Char('K') => self.scroll_panel_page(-1),
            KeyCode::Char('G') | KeyCode::End => self.panel_scroll_y = u16::MAX,
            KeyCode::Char('g') | KeyCode::Home => self.panel_scroll_y = 0,
            KeyCode::Right | KeyCode::Char('l') => {
                self.panel_scroll_x = self.panel_scroll_x.saturating_add(4);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.panel_scroll_x = self.panel_scroll_x.saturating_sub(4);
            }
            _ => {}
        }
        false
    }

    fn handle_hint_char(&mut self, ch: char) {
        match hints::match_hint(&self.trigger_labels, &self.pending_hint, ch) {
            hints::HintMatch::Selected(index) => {
                self.pending_hint.clear();
                self.dispatch(ViewerEvent::Select(index));
            }
            hints::HintMatch::Pending(typed) => self.pending_hint = typed,
            hints::HintMatch::NoMatch => {
                self.pending_hint.clear();
                self.set_toast(format!("No scenario on key {ch}"));
            }
        }
    }

    fn dispatch(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::Select(index) => self.cursor.select(Some(index)),
            ViewerEvent::ToggleInfo | ViewerEvent::ToggleCode
                if self.state.selected().is_none() =>
            {
                self.set_toast("Select a scenario first");
            }
            ViewerEvent::RunSimulation if self.state.selected().is_some() => {
                self.set_toast("Run Simulation is not available");
            }
            _ => {}
        }
        self.state.apply(event, self.catalog.len());
        self.sync_scroll_with_state();
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let current = self.cursor.selected().unwrap_or(0) as i64;
        let next = (current + delta as i64).clamp(0, len as i64 - 1) as usize;
        self.cursor.select(Some(next));
    }

    /// Any viewer change starts the panel at the top.
    fn sync_scroll_with_state(&mut self) {
        if self.seen_rev != self.state.rev() {
            self.seen_rev = self.state.rev();
            self.panel_scroll_y = 0;
            self.panel_scroll_x = 0;
        }
    }

    fn scroll_panel_page(&mut self, direction: i32) {
        let page = self.panel_viewport_height.saturating_sub(1).max(1);
        self.panel_scroll_y = if direction >= 0 {
            self.panel_scroll_y.saturating_add(page)
        } else {
            self.panel_scroll_y.saturating_sub(page)
        };
        self.clamp_panel_scroll();
    }

    fn clamp_panel_scroll(&mut self) {
        let max = self.panel_content_height.saturating_sub(self.panel_viewport_height);
        self.panel_scroll_y = self.panel_scroll_y.min(max);
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_TTL });
    }

    fn take_live_toast(&mut self) -> Option<String> {
        match &self.toast {
            Some(toast) if toast.expires_at > Instant::now() => Some(toast.message.clone()),
            Some(_) => {
                self.toast = None;
                None
            }
            None => None,
        }
    }
}

include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
