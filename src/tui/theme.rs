//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeChoice;
use crate::scoring::RiskLevel;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Risk colors (traffic light pattern)
    pub risk_low: Color,
    pub risk_moderate: Color,
    pub risk_high: Color,

    // Chrome
    pub title_color: Color,
    pub muted: Color,
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,

    // Status bar
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,

    // Home page
    pub slider_filled: Color,
    pub slider_focused_border: Color,
    pub card_info_bg: Color,

    // Dashboard charts
    pub bar_color: Color,
    pub line_color: Color,
    pub axis_color: Color,

    // Content pages
    pub bullet_color: Color,

    // Popup overlays
    pub popup_border: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            risk_low: Color::Green,
            risk_moderate: Color::Yellow,
            risk_high: Color::Red,
            title_color: Color::Cyan,
            muted: Color::Gray,
            tab_active_style: Style::new().fg(Color::Cyan).bold(),
            tab_inactive_style: Style::new().fg(Color::DarkGray),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            slider_filled: Color::Blue,
            slider_focused_border: Color::Cyan,
            card_info_bg: Color::Indexed(24),
            bar_color: Color::Green,
            line_color: Color::Blue,
            axis_color: Color::Gray,
            bullet_color: Color::Cyan,
            popup_border: Color::Cyan,
        }
    }

    pub fn light() -> Self {
        Self {
            risk_low: Color::Indexed(28),
            risk_moderate: Color::Indexed(130),
            risk_high: Color::Indexed(124),
            title_color: Color::Blue,
            muted: Color::DarkGray,
            tab_active_style: Style::new().fg(Color::Blue).bold(),
            tab_inactive_style: Style::new().fg(Color::Gray),
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_success: Color::Indexed(28),
            slider_filled: Color::Indexed(32),
            slider_focused_border: Color::Blue,
            card_info_bg: Color::Indexed(153),
            bar_color: Color::Indexed(28),
            line_color: Color::Indexed(32),
            axis_color: Color::DarkGray,
            bullet_color: Color::Blue,
            popup_border: Color::Blue,
        }
    }

    /// Color for a risk level (Low green, Moderate yellow, High red).
    pub fn risk_color(&self, risk: RiskLevel) -> Color {
        match risk {
            RiskLevel::Low => self.risk_low,
            RiskLevel::Moderate => self.risk_moderate,
            RiskLevel::High => self.risk_high,
        }
    }
}

/// Resolve the configured theme choice into a palette. Auto probes the
/// terminal background luma and falls back to dark when detection fails
/// (e.g. no tty, unsupported terminal).
pub fn resolve_theme(choice: ThemeChoice) -> ThemeColors {
    match choice {
        ThemeChoice::Dark => ThemeColors::dark(),
        ThemeChoice::Light => ThemeColors::light(),
        ThemeChoice::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_color_mapping() {
        let theme = ThemeColors::dark();
        assert_eq!(theme.risk_color(RiskLevel::Low), Color::Green);
        assert_eq!(theme.risk_color(RiskLevel::Moderate), Color::Yellow);
        assert_eq!(theme.risk_color(RiskLevel::High), Color::Red);
    }

    #[test]
    fn test_explicit_choices_resolve() {
        assert_eq!(
            resolve_theme(ThemeChoice::Dark).status_bar_bg,
            ThemeColors::dark().status_bar_bg
        );
        assert_eq!(
            resolve_theme(ThemeChoice::Light).status_bar_bg,
            ThemeColors::light().status_bar_bg
        );
    }
}
