// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

use crate::render::TokenKind;

pub(crate) const PALETTE_ENV: &str = "LOCKSTUDY_TUI_PALETTE";
pub(crate) const PALETTE_ENV_FALLBACK: &str = "LOCKSTUDY_PALETTE";

/// Styles for every element the TUI draws. Colors come from the 16 ANSI slots so a palette
/// override recolors everything consistently.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn ansi_color(&self, color: Ansi16) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi_color(color.idx()),
            None => color.into(),
        }
    }

    fn fg(&self, color: Ansi16) -> Style {
        self.base_style().fg(self.ansi_color(color))
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.fg(Ansi16::BrightGreen)
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn dim_style(&self) -> Style {
        self.fg(Ansi16::BrightBlack)
    }

    pub(crate) fn title_style(&self) -> Style {
        self.fg(Ansi16::BrightWhite).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn hint_label_style(&self) -> Style {
        self.fg(Ansi16::Cyan).add_modifier(Modifier::BOLD)
    }

    /// `top` marks the shallowest heading level of the document being shown.
    pub(crate) fn heading_style(&self, top: bool) -> Style {
        if top {
            self.fg(Ansi16::BrightBlue).add_modifier(Modifier::BOLD)
        } else {
            self.fg(Ansi16::BrightWhite).add_modifier(Modifier::BOLD)
        }
    }

    pub(crate) fn strong_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::BOLD)
    }

    pub(crate) fn file_name_style(&self) -> Style {
        self.fg(Ansi16::BrightBlue).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn gutter_style(&self) -> Style {
        self.fg(Ansi16::BrightBlack)
    }

    /// `[label]` button look: open panel reversed, inert controls dimmed.
    pub(crate) fn control_style(&self, active: bool, enabled: bool) -> Style {
        if !enabled {
            return self.dim_style();
        }
        let style = self.fg(Ansi16::Yellow).add_modifier(Modifier::BOLD);
        if active {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    pub(crate) fn token_style(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Plain => self.base_style(),
            TokenKind::Keyword => self.fg(Ansi16::Magenta).add_modifier(Modifier::BOLD),
            TokenKind::Type => self.fg(Ansi16::Cyan),
            TokenKind::String | TokenKind::Char => self.fg(Ansi16::Yellow),
            TokenKind::Number => self.fg(Ansi16::BrightMagenta),
            TokenKind::Comment => self.fg(Ansi16::BrightBlack).add_modifier(Modifier::ITALIC),
            TokenKind::Annotation => self.fg(Ansi16::Green),
        }
    }

    pub(crate) fn footer_label_style(&self) -> Style {
        self.fg(Ansi16::White)
    }

    pub(crate) fn footer_key_style(&self, disabled: bool) -> Style {
        let color = if disabled { Ansi16::BrightBlack } else { Ansi16::Cyan };
        self.fg(color).add_modifier(Modifier::BOLD)
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const CSV_LEN: usize = 18;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg, then the 16 ANSI colors black..bright_white), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let fg = parse_palette_color(parts[0])?;
        let bg = parse_palette_color(parts[1])?;

        let mut ansi = [Color::Reset; 16];
        for (idx, part) in parts.iter().skip(2).enumerate() {
            ansi[idx] = parse_palette_color(part)?;
        }

        Ok(Self { fg, bg, ansi })
    }

    fn ansi_color(&self, idx: usize) -> Color {
        self.ansi[idx]
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    for name in [PALETTE_ENV, PALETTE_ENV_FALLBACK] {
        match env::var(name) {
            Ok(value) => return palette_from_value(name, &value),
            Err(env::VarError::NotPresent) => continue,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: name.to_owned(),
                    value: "<non-unicode>".to_owned(),
                });
            }
        }
    }
    Ok(None)
}

fn palette_from_value(name: &str, value: &str) -> Result<Option<TuiPalette>, ThemeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    TuiPalette::parse_csv(trimmed).map(Some).map_err(|error| ThemeError::InvalidEnv {
        name: name.to_owned(),
        value: format!("{trimmed} ({error})"),
    })
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(format!("invalid rgb: value: {trimmed}"));
        };
        return Ok(Color::Rgb(parse_hex_channel(r)?, parse_hex_channel(g)?, parse_hex_channel(b)?));
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        4 => u16::from_str_radix(value, 16)
            .map(|wide| (wide >> 8) as u8)
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!("invalid rgb: component {value} (expected 2 or 4 hex digits)")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum Ansi16 {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Ansi16 {
    const fn idx(self) -> usize {
        self as usize
    }
}

impl From<Ansi16> for Color {
    fn from(value: Ansi16) -> Self {
        match value {
            Ansi16::Black => Color::Black,
            Ansi16::Red => Color::Red,
            Ansi16::Green => Color::Green,
            Ansi16::Yellow => Color::Yellow,
            Ansi16::Blue => Color::Blue,
            Ansi16::Magenta => Color::Magenta,
            Ansi16::Cyan => Color::Cyan,
            Ansi16::White => Color::Gray,
            Ansi16::BrightBlack => Color::DarkGray,
            Ansi16::BrightRed => Color::LightRed,
            Ansi16::BrightGreen => Color::LightGreen,
            Ansi16::BrightYellow => Color::LightYellow,
            Ansi16::BrightBlue => Color::LightBlue,
            Ansi16::BrightMagenta => Color::LightMagenta,
            Ansi16::BrightCyan => Color::LightCyan,
            Ansi16::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}
