// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, and help helpers used by TUI rendering.
fn stack_panes_vertically(area: Rect) -> bool {
    area.width < 90
}

/// Rows `paragraph` takes when rendered `width` columns wide, as measured by ratatui's own wrapping.
fn rendered_height(paragraph: &Paragraph<'_>, width: u16) -> u16 {
    paragraph.line_count(width.max(1)).min(u16::MAX as usize) as u16
}

fn view_title(label: &str, count: usize, tail: Option<&str>) -> String {
    let mut title = format!("─ {label} ({count})");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn footer_help_line(app: &App, toast_suffix: &str, compact: bool) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = Vec::<Span<'static>>::new();
    let no_selection = app.state.selected().is_none();
    let select_keys = select_keys_label(&app.trigger_labels, &app.pending_hint);

    if compact {
        push_footer_entry_with_separator(theme, &mut spans, "SELECT", &select_keys, " | ");
        push_footer_entry_with_separator(theme, &mut spans, "HELP", "?", " | ");
        push_footer_entry_with_separator(theme, &mut spans, "QUIT", "q", " | ");
    } else {
        let info = if app.state.info_visible() { "i◼ " } else { "i◻ " };
        let code = if app.state.code_visible() { "c◼ " } else { "c◻ " };
        push_footer_entry(theme, &mut spans, "SELECT", &select_keys);
        push_footer_entry(theme, &mut spans, "MOVE", "j/k ⏎");
        push_footer_entry_maybe_disabled(theme, &mut spans, "INFO", info, no_selection);
        push_footer_entry_maybe_disabled(theme, &mut spans, "CODE", code, no_selection);
        push_footer_entry_maybe_disabled(theme, &mut spans, "RUN", "r", true);
        push_footer_entry_maybe_disabled(
            theme,
            &mut spans,
            "SCROLL",
            "J/K",
            app.state.open_panel().is_none(),
        );
        push_footer_entry(theme, &mut spans, "HELP", "?");
        push_footer_entry(theme, &mut spans, "QUIT", "q");
    }

    if !toast_suffix.is_empty() {
        spans.push(Span::styled(toast_suffix.to_owned(), theme.title_style()));
    }
    Line::from(spans)
}

fn select_keys_label(labels: &[String], pending: &str) -> String {
    if !pending.is_empty() {
        return format!("{pending}…");
    }
    match (labels.first(), labels.last()) {
        (Some(first), Some(last)) if first == last => first.clone(),
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => "-".to_owned(),
    }
}

fn footer_brand_line(theme: &TuiTheme) -> Line<'static> {
    Line::from(vec![Span::styled(FOOTER_BRAND.to_owned(), theme.dim_style())])
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn render_help(frame: &mut Frame<'_>, app: &mut App, main_area: Rect) {
    let area = centered_rect(76, 80, main_area);
    frame.render_widget(Clear, area);

    let key_style = app.theme.footer_key_style(false);
    let header_style = app.theme.title_style();
    let dim_style = app.theme.dim_style();

    let key_col_width =
        ["PgUp/PgDn, J/K", "j/k, ↑/↓"].iter().map(|s| s.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();

    lines.push(Line::from(Span::styled("--- Scenarios ---", header_style)));
    let select_keys = select_keys_label(&app.trigger_labels, "");
    lines.push(help_kv(&select_keys, "Select scenario by key", key_col_width, key_style));
    lines.push(help_kv("j/k, ↑/↓", "Move cursor", key_col_width, key_style));
    lines.push(help_kv("Enter", "Select scenario under cursor", key_col_width, key_style));
    if app.trigger_labels.iter().any(|label| label.chars().count() > 1) {
        lines.push(Line::from(Span::styled(
            "  Labels have two keys; Esc cancels a half-typed label.",
            dim_style,
        )));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("--- Selected scenario ---", header_style)));
    lines.push(help_kv("i", "Show/hide info (closes code)", key_col_width, key_style));
    lines.push(help_kv("c", "Show/hide code (closes info)", key_col_width, key_style));
    lines.push(help_kv("r", "Run simulation (not available)", key_col_width, key_style));
    lines.push(help_kv("PgUp/PgDn, J/K", "Scroll open panel", key_col_width, key_style));
    lines.push(help_kv("g/G", "Panel top/bottom", key_col_width, key_style));
    lines.push(help_kv("h/l, ←/→", "Scroll code sideways", key_col_width, key_style));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("--- Global ---", header_style)));
    lines.push(help_kv("?", "Help (toggle)", key_col_width, key_style));
    lines.push(help_kv("q, Esc", "Quit", key_col_width, key_style));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Selecting a scenario closes its panels. Only one panel is open at a time.",
        dim_style,
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border_style(true))
        .title(" Help ");
    let inner = block.inner(area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false });
    let max_scroll = rendered_height(&paragraph, inner.width).saturating_sub(inner.height.max(1));
    app.help_scroll = app.help_scroll.min(max_scroll);

    frame.render_widget(paragraph.block(block).scroll((app.help_scroll, 0)), area);
}

fn push_footer_entry(theme: &TuiTheme, spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(theme, spans, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    theme: &TuiTheme,
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    disabled: bool,
) {
    push_footer_entry_with_separator_maybe_disabled(theme, spans, label, value, " | ", disabled);
}

fn push_footer_entry_with_separator(
    theme: &TuiTheme,
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
) {
    push_footer_entry_with_separator_maybe_disabled(theme, spans, label, value, separator, false);
}

fn push_footer_entry_with_separator_maybe_disabled(
    theme: &TuiTheme,
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(separator.to_owned(), theme.footer_label_style()));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        theme.footer_label_style(),
    ));
    spans.extend(footer_value_spans(theme, value, disabled));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn footer_value_spans(theme: &TuiTheme, value: &str, disabled: bool) -> Vec<Span<'static>> {
    vec![Span::styled(value.to_owned(), theme.footer_key_style(disabled))]
}
