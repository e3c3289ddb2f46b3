// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{
    code_text, controls_line, controls_lines, draw, footer_help_line, info_text,
    rendered_height, select_keys_label, stack_panes_vertically, view_title, App, TuiTheme,
};
use crate::catalog::{builtin_catalog, CIRCULAR_WAIT_TITLE, PREEMPTION_TITLE};
use crate::model::{Scenario, ScenarioCatalog};
use crate::render::view::NO_DESCRIPTION_PLACEHOLDER;
use crate::render::{PanelView, ViewModel};
use crate::viewer::Panel;
use crossterm::event::KeyCode;
use ratatui::{
    backend::TestBackend,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Wrap},
    Terminal,
};
use rstest::rstest;

fn builtin_app() -> App {
    App::new(builtin_catalog(), TuiTheme::default())
}

fn press(app: &mut App, codes: &[KeyCode]) {
    for &code in codes {
        assert!(!app.handle_key_code(code), "{code:?} quit unexpectedly");
    }
}

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
}

fn text_to_string(text: &ratatui::text::Text<'_>) -> String {
    text.lines.iter().map(line_to_string).collect::<Vec<_>>().join("\n")
}

fn render_screen(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn many_scenarios(n: usize) -> ScenarioCatalog {
    ScenarioCatalog::new(
        (1..=n).map(|i| Scenario::new(format!("Scenario {i}"), format!("info {i}"))).collect(),
    )
    .expect("catalog")
}

#[test]
fn digit_hint_selects_scenario_with_panels_closed() {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('2')]);
    assert_eq!(app.state.selected(), Some(1));
    assert_eq!(app.state.open_panel(), None);
    assert_eq!(app.cursor.selected(), Some(1));
}

#[test]
fn enter_selects_the_scenario_under_the_cursor() {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.state.selected(), Some(1));

    press(&mut app, &[KeyCode::Char('k'), KeyCode::Up, KeyCode::Enter]);
    assert_eq!(app.state.selected(), Some(0));
}

#[test]
fn info_and_code_toggles_are_mutually_exclusive() {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('i')]);
    assert_eq!(app.state.open_panel(), Some(Panel::Info));

    press(&mut app, &[KeyCode::Char('c')]);
    assert_eq!(app.state.open_panel(), Some(Panel::Code));

    press(&mut app, &[KeyCode::Char('c')]);
    assert_eq!(app.state.open_panel(), None);
}

#[test]
fn toggles_without_selection_only_show_a_toast() {
    let mut app = builtin_app();
    let rev = app.state.rev();
    press(&mut app, &[KeyCode::Char('i'), KeyCode::Char('c')]);
    assert_eq!(app.state.rev(), rev);
    assert_eq!(app.state.selected(), None);
    assert_eq!(app.take_live_toast().as_deref(), Some("Select a scenario first"));
}

#[test]
fn run_simulation_changes_nothing() {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('i')]);
    let before = app.state.clone();
    press(&mut app, &[KeyCode::Char('r')]);
    assert_eq!(app.state, before);
}

#[test]
fn reselecting_closes_open_panel_and_resets_scroll() {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('c')]);
    let _ = render_screen(&mut app, 100, 24);
    press(&mut app, &[KeyCode::PageDown]);
    assert!(app.panel_scroll_y > 0);

    press(&mut app, &[KeyCode::Char('1')]);
    assert_eq!(app.state.open_panel(), None);
    assert_eq!(app.panel_scroll_y, 0);
}

#[test]
fn quit_keys_and_help_overlay() {
    let mut app = builtin_app();
    assert!(!app.handle_key_code(KeyCode::Char('?')));
    assert!(app.show_help);

    // Keys inside help do not reach the viewer.
    assert!(!app.handle_key_code(KeyCode::Char('1')));
    assert_eq!(app.state.selected(), None);

    assert!(!app.handle_key_code(KeyCode::Esc));
    assert!(!app.show_help);
    assert!(app.handle_key_code(KeyCode::Char('q')));
    assert!(app.handle_key_code(KeyCode::Esc));
}

#[test]
fn two_key_labels_wait_for_the_second_key() {
    let mut app = App::new(many_scenarios(12), TuiTheme::default());
    assert_eq!(app.trigger_labels[0], "11");

    press(&mut app, &[KeyCode::Char('1')]);
    assert_eq!(app.pending_hint, "1");
    assert_eq!(app.state.selected(), None);

    press(&mut app, &[KeyCode::Char('2')]);
    assert_eq!(app.pending_hint, "");
    assert_eq!(app.state.selected(), Some(1));

    // Esc drops a half-typed label instead of quitting.
    press(&mut app, &[KeyCode::Char('2'), KeyCode::Esc]);
    assert_eq!(app.pending_hint, "");
    assert_eq!(app.state.selected(), Some(1));
}

#[test]
fn unknown_hint_key_shows_toast() {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('7')]);
    assert_eq!(app.state.selected(), None);
    assert_eq!(app.take_live_toast().as_deref(), Some("No scenario on key 7"));
}

#[test]
fn screen_without_selection_shows_only_triggers() {
    let mut app = builtin_app();
    let screen = render_screen(&mut app, 100, 24);
    assert!(screen.contains("Livelock vs. Deadlock Simulation"), "{screen}");
    assert!(screen.contains(PREEMPTION_TITLE), "{screen}");
    assert!(screen.contains(CIRCULAR_WAIT_TITLE), "{screen}");
    assert!(!screen.contains("Show Info"), "{screen}");
}

#[test]
fn screen_with_code_panel_lists_both_files() {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('c')]);
    let screen = render_screen(&mut app, 120, 80);
    assert!(screen.contains("Hide Code"), "{screen}");
    let task = screen.find("Task.java").expect("Task.java on screen");
    let main = screen.find("Main.java").expect("Main.java on screen");
    assert!(task < main);
}

#[test]
fn screen_with_info_panel_shows_placeholder_for_scenario_two() {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('i')]);
    let screen = render_screen(&mut app, 120, 40);
    assert!(screen.contains(NO_DESCRIPTION_PLACEHOLDER), "{screen}");
}

#[test]
fn narrow_screen_stacks_panes_and_still_draws() {
    assert!(stack_panes_vertically(Rect::new(0, 0, 60, 30)));
    assert!(!stack_panes_vertically(Rect::new(0, 0, 120, 30)));

    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('i')]);
    let screen = render_screen(&mut app, 60, 30);
    assert!(screen.contains("Hide Info"), "{screen}");
}

#[test]
fn info_text_marks_list_items_and_falls_back_to_placeholder() {
    let theme = TuiTheme::default();
    assert_eq!(text_to_string(&info_text(&theme, &[])), NO_DESCRIPTION_PLACEHOLDER);

    let catalog = builtin_catalog();
    let mut app = App::new(catalog.clone(), theme);
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('i')]);
    let view = ViewModel::build(&catalog, &app.state);
    let Some(PanelView::Info(lines)) = view.detail.and_then(|d| d.panel) else {
        panic!("expected info panel");
    };
    let text = text_to_string(&info_text(&app.theme, &lines));
    assert!(text.lines().any(|line| line.starts_with("  • ")), "{text}");
}

#[test]
fn code_text_numbers_lines_per_file() {
    let catalog = builtin_catalog();
    let mut app = App::new(catalog.clone(), TuiTheme::default());
    press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('c')]);
    let view = ViewModel::build(&catalog, &app.state);
    let Some(PanelView::Code(files)) = view.detail.and_then(|d| d.panel) else {
        panic!("expected code panel");
    };
    let text = text_to_string(&code_text(&app.theme, &files));
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Task.java"));
    assert_eq!(lines.next(), Some(" 1 │ public class Task {"));
}

#[test]
fn controls_line_lists_three_controls() {
    let catalog = builtin_catalog();
    let mut app = App::new(catalog.clone(), TuiTheme::default());
    press(&mut app, &[KeyCode::Char('1')]);
    let detail = ViewModel::build(&catalog, &app.state).detail.expect("detail");
    assert_eq!(
        line_to_string(&controls_line(&app.theme, &detail.controls)),
        "[Show Info] [Run Simulation] [Show Code]"
    );
}

#[test]
fn footer_reflects_panel_state_and_toast() {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('i')]);
    let line = line_to_string(&footer_help_line(&app, " | hello", false));
    assert!(line.contains("Info:i◼"), "{line}");
    assert!(line.contains("Code:c◻"), "{line}");
    assert!(line.ends_with(" | hello"), "{line}");

    let compact = line_to_string(&footer_help_line(&app, "", true));
    assert_eq!(compact, "Select:1-2 | Help:? | Quit:q");
}

#[test]
fn small_chrome_helpers() {
    assert_eq!(select_keys_label(&["1".to_owned()], ""), "1");
    assert_eq!(select_keys_label(&[], ""), "-");
    assert_eq!(select_keys_label(&["11".to_owned(), "12".to_owned()], "1"), "1…");
    assert_eq!(view_title("Scenarios", 2, None), "─ Scenarios (2) ");
    assert_eq!(view_title("Scenarios", 2, Some(" [1…] ")), "─ Scenarios (2) [1…] ");
}

#[test]
fn rendered_height_follows_paragraph_wrapping() {
    let wrapped = Paragraph::new("aaaa bbbb").wrap(Wrap { trim: false });
    assert_eq!(rendered_height(&wrapped, 9), 1);
    assert_eq!(rendered_height(&wrapped, 8), 2);

    let unwrapped = Paragraph::new(vec![Line::from("a"), Line::default(), Line::from("c")]);
    assert_eq!(rendered_height(&unwrapped, 1), 3);
}

#[rstest]
#[case(30)]
#[case(40)]
#[case(50)]
#[case(60)]
fn info_panel_scrolls_to_the_last_list_item(#[case] width: u16) {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('i')]);
    let _ = render_screen(&mut app, width, 24);
    press(&mut app, &[KeyCode::Char('G')]);
    let screen = render_screen(&mut app, width, 24);

    assert_eq!(
        app.panel_scroll_y,
        app.panel_content_height.saturating_sub(app.panel_viewport_height)
    );
    assert!(screen.contains("starvation."), "width={width}\n{screen}");
}

#[rstest]
#[case(40)]
#[case(50)]
fn narrow_detail_keeps_every_control_whole(#[case] width: u16) {
    let mut app = builtin_app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('i')]);
    let screen = render_screen(&mut app, width, 30);
    for label in ["[Hide Info]", "[Run Simulation]", "[Show Code]"] {
        assert!(screen.contains(label), "width={width} missing {label}\n{screen}");
    }
}

#[test]
fn controls_split_one_per_line_only_when_too_wide() {
    let catalog = builtin_catalog();
    let mut app = App::new(catalog.clone(), TuiTheme::default());
    press(&mut app, &[KeyCode::Char('1')]);
    let detail = ViewModel::build(&catalog, &app.state).detail.expect("detail");

    assert_eq!(controls_lines(&app.theme, &detail.controls, 40).len(), 1);
    let split = controls_lines(&app.theme, &detail.controls, 39)
        .iter()
        .map(line_to_string)
        .collect::<Vec<_>>();
    assert_eq!(split, ["[Show Info]", "[Run Simulation]", "[Show Code]"]);
}
