//! Garden theme tokens for the P.A.W.S shell
//!
//! # Color Palette
//! - **Brand**: Forest green (headers, active navigation, accent bars)
//! - **Good**: Leaf green (healthy plants, easy care, strong signal)
//! - **Caution**: Amber (warnings, medium difficulty)
//! - **Critical**: Red (errors, dry soil, weak signal)
//! - **Neutral**: Gray (unknown labels, info)
//! - **Muted**: Dim gray (secondary text, inactive navigation)

use ratatui::style::{Color, Modifier, Style};

use paws_core::view::{Icon, Tone};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Forest green brand color
    pub brand: Color,
    /// Lighter brand tint, readable on dark terminals
    pub brand_light: Color,
    pub good: Color,
    pub caution: Color,
    pub critical: Color,
    pub neutral: Color,
    pub muted: Color,
    /// Unfilled part of the moisture gauge
    pub track: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Scanner overlay background
    pub scanner_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::garden()
    }
}

impl Theme {
    pub fn garden() -> Self {
        Self {
            brand: Color::Rgb(45, 90, 39),
            brand_light: Color::Rgb(106, 168, 79),
            good: Color::Rgb(76, 175, 80),
            caution: Color::Rgb(255, 152, 0),
            critical: Color::Rgb(244, 67, 54),
            neutral: Color::Rgb(158, 158, 158),
            muted: Color::Rgb(117, 117, 117),
            track: Color::Rgb(232, 232, 232),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
            scanner_bg: Color::Black,
        }
    }

    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Good => self.good,
            Tone::Caution => self.caution,
            Tone::Critical => self.critical,
            Tone::Neutral => self.neutral,
        }
    }

    pub fn tone_style(&self, tone: Tone) -> Style {
        Style::default().fg(self.tone(tone))
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.brand_light)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border style for cards; the focused card uses the brand tint.
    pub fn card_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.brand_light)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Primary button: brand background.
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.brand)
            .add_modifier(Modifier::BOLD)
    }

    /// Outline button: brand text.
    pub fn button_outline(&self) -> Style {
        Style::default().fg(self.brand_light)
    }
}

/// Terminal glyph for an icon.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "⌂",
        Icon::Leaf => "♣",
        Icon::Device => "▣",
        Icon::Bell => "⍾",
        Icon::User => "☺",
        Icon::QrCode => "▦",
        Icon::Back => "←",
        Icon::Droplet => "≋",
        Icon::Thermometer => "°",
        Icon::Eye => "◉",
        Icon::Sun => "☀",
        Icon::Alert => "⚠",
    }
}

/// Circle glyph approximating a gauge filled to `degrees`.
pub fn gauge_glyph(degrees: f64) -> &'static str {
    match degrees {
        d if d < 45.0 => "○",
        d if d < 135.0 => "◔",
        d if d < 225.0 => "◑",
        d if d < 315.0 => "◕",
        _ => "●",
    }
}

/// Status / indicator dot.
pub const DOT: &str = "●";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.brand, Color::Rgb(45, 90, 39));
        assert_eq!(theme.good, Color::Rgb(76, 175, 80));
    }

    #[test]
    fn test_tone_colors() {
        let theme = Theme::default();
        assert_eq!(theme.tone(Tone::Good), theme.good);
        assert_eq!(theme.tone(Tone::Caution), theme.caution);
        assert_eq!(theme.tone(Tone::Critical), theme.critical);
        assert_eq!(theme.tone(Tone::Neutral), theme.neutral);
    }

    #[test]
    fn test_gauge_glyph_steps() {
        assert_eq!(gauge_glyph(0.0), "○");
        assert_eq!(gauge_glyph(90.0), "◔");
        assert_eq!(gauge_glyph(180.0), "◑");
        assert_eq!(gauge_glyph(270.0), "◕");
        assert_eq!(gauge_glyph(360.0), "●");
    }

    #[test]
    fn test_every_icon_has_glyph() {
        for icon in [
            Icon::Home,
            Icon::Leaf,
            Icon::Device,
            Icon::Bell,
            Icon::User,
            Icon::QrCode,
            Icon::Back,
            Icon::Droplet,
            Icon::Thermometer,
            Icon::Eye,
            Icon::Sun,
            Icon::Alert,
        ] {
            assert!(!glyph(icon).is_empty());
        }
    }
}
