//! Colours for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::core::settings::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub element: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(32, 44, 55),
                element: Color::Rgb(43, 57, 69),
                text: Color::Rgb(255, 255, 255),
                muted: Color::Rgb(133, 133, 133),
                accent: Color::Rgb(250, 250, 250),
                error: Color::LightRed,
            },
            Theme::Light => Self {
                background: Color::Rgb(250, 250, 250),
                element: Color::Rgb(255, 255, 255),
                text: Color::Rgb(17, 21, 23),
                muted: Color::Rgb(133, 133, 133),
                accent: Color::Rgb(43, 57, 69),
                error: Color::Red,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(self.text).bg(self.element)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.element)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
