//! Theme system for the Navi dashboard.
//!
//! Provides the dark/light palette pair used across every screen and runtime
//! theme switching. The variant is part of [`crate::settings::Settings`] so a
//! toggle can be persisted between sessions.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme variants supported by Navi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeVariant {
    /// Dark dashboard theme (default)
    NaviDark,
    /// Light dashboard theme
    NaviLight,
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::NaviDark
    }
}

/// Color palette for a theme variant
#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub danger: Color,
    pub info: Color,
    pub border: Color,
    pub selection: Color,
    pub warning: Color,
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Normal text content
    Text,
    /// Titles and headers
    Title,
    /// Borders and frames
    Border,
    /// Highlighted/selected rows
    Highlight,
    /// Accent elements (active tabs, toggles)
    Accent,
    /// Destructive elements (delete confirmation)
    Danger,
    /// Information/status elements
    Info,
    /// Background fill
    Background,
    /// Inactive/disabled elements
    Inactive,
    /// Pending/requested badges
    Warning,
}

/// Main theme structure managing all UI styling
#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    /// Create a new theme with the specified variant
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::NaviDark => ColorPalette {
                background: Color::Rgb(17, 24, 39),   // gray-900
                foreground: Color::Rgb(243, 244, 246), // gray-100
                accent: Color::Rgb(20, 184, 166),     // teal-500
                danger: Color::Rgb(239, 68, 68),      // red-500
                info: Color::Rgb(96, 165, 250),       // blue-400
                border: Color::Rgb(55, 65, 81),       // gray-700
                selection: Color::Rgb(31, 41, 55),    // gray-800
                warning: Color::Rgb(250, 204, 21),    // yellow-400
            },
            ThemeVariant::NaviLight => ColorPalette {
                background: Color::Rgb(249, 250, 251), // gray-50
                foreground: Color::Rgb(17, 24, 39),    // gray-900
                accent: Color::Rgb(13, 148, 136),      // teal-600
                danger: Color::Rgb(220, 38, 38),       // red-600
                info: Color::Rgb(37, 99, 235),         // blue-600
                border: Color::Rgb(229, 231, 235),     // gray-200
                selection: Color::Rgb(243, 244, 246),  // gray-100
                warning: Color::Rgb(245, 158, 11),     // amber-500
            },
        };

        Self { variant, colors }
    }

    /// Get the current theme variant
    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Get the color palette
    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    /// Toggle between dark and light variants
    pub fn toggle(&mut self) {
        self.variant = match self.variant {
            ThemeVariant::NaviDark => ThemeVariant::NaviLight,
            ThemeVariant::NaviLight => ThemeVariant::NaviDark,
        };
        *self = Self::new(self.variant);
    }

    /// Set specific theme variant
    pub fn set_variant(&mut self, variant: ThemeVariant) {
        if self.variant != variant {
            self.variant = variant;
            *self = Self::new(self.variant);
        }
    }

    /// Get a ratatui Style for the specified UI element
    pub fn ratatui_style(&self, element: Element) -> Style {
        match element {
            Element::Text => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Title => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Border => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Highlight => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),

            Element::Accent => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Danger => Style::default()
                .fg(self.colors.danger)
                .bg(self.colors.background),

            Element::Info => Style::default()
                .fg(self.colors.info)
                .bg(self.colors.background),

            Element::Background => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Inactive => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Warning => Style::default()
                .fg(self.colors.warning)
                .bg(self.colors.background),
        }
    }

    /// Get style for block titles
    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }

    /// Get style for block borders
    pub fn border_style(&self) -> Style {
        self.ratatui_style(Element::Border)
    }

    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    /// Get style for highlighted/selected rows
    pub fn highlight_style(&self) -> Style {
        self.ratatui_style(Element::Highlight)
    }

    /// Get style for accent elements
    pub fn accent_style(&self) -> Style {
        self.ratatui_style(Element::Accent)
    }

    /// Get style for destructive elements
    pub fn danger_style(&self) -> Style {
        self.ratatui_style(Element::Danger)
    }

    /// Get style for info elements
    pub fn info_style(&self) -> Style {
        self.ratatui_style(Element::Info)
    }

    /// Get style for pending/requested badges
    pub fn warning_style(&self) -> Style {
        self.ratatui_style(Element::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_variant_and_palette() {
        let mut theme = Theme::default();
        assert_eq!(theme.variant(), ThemeVariant::NaviDark);
        let dark_bg = theme.colors().background;

        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::NaviLight);
        assert_ne!(theme.colors().background, dark_bg);

        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::NaviDark);
        assert_eq!(theme.colors().background, dark_bg);
    }

    #[test]
    fn set_variant_is_idempotent() {
        let mut theme = Theme::new(ThemeVariant::NaviLight);
        theme.set_variant(ThemeVariant::NaviLight);
        assert_eq!(theme.variant(), ThemeVariant::NaviLight);
        theme.set_variant(ThemeVariant::NaviDark);
        assert_eq!(theme.variant(), ThemeVariant::NaviDark);
    }
}
