// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

pub(crate) const ACCENT_ENV: &str = "TROUPE_ACCENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TuiTheme {
    accent: Color,
}

impl Default for TuiTheme {
    fn default() -> Self {
        Self { accent: Color::LightGreen }
    }
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        match env::var(ACCENT_ENV) {
            Ok(value) if value.trim().is_empty() => Ok(Self::default()),
            Ok(value) => {
                let accent = parse_hex_color(&value).map_err(|reason| ThemeError::InvalidEnv {
                    name: ACCENT_ENV.to_owned(),
                    value: format!("{} ({reason})", value.trim()),
                })?;
                Ok(Self { accent })
            }
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ThemeError::InvalidEnv {
                name: ACCENT_ENV.to_owned(),
                value: "<non-unicode>".to_owned(),
            }),
        }
    }

    pub(crate) fn accent(&self) -> Color {
        self.accent
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub(crate) fn selection_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    pub(crate) fn disabled_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub(crate) fn label_style(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }
}

fn parse_hex_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err("expected #RRGGBB".to_owned());
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|err| err.to_string())?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
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
