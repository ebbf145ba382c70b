use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by the dashboard.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Chrome ───────────────────────────────────────────────────────────────
    pub title: Style,
    pub border: Style,
    pub text: Style,
    pub dim: Style,

    // ── Axes ─────────────────────────────────────────────────────────────────
    pub axis: Style,
    pub axis_label: Style,

    // ── Series ───────────────────────────────────────────────────────────────
    pub daily_cases: Style,
    pub daily_deaths: Style,
    pub total_cases: Style,
    pub total_deaths: Style,
}

impl Theme {
    /// The default dark-background theme.
    pub fn dark() -> Self {
        Self {
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            axis: Style::default().fg(Color::Gray),
            axis_label: Style::default().fg(Color::Gray),
            daily_cases: Style::default().fg(Color::LightRed),
            daily_deaths: Style::default().fg(Color::White),
            total_cases: Style::default().fg(Color::LightBlue),
            total_deaths: Style::default().fg(Color::Red),
        }
    }

    /// Theme for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            axis: Style::default().fg(Color::DarkGray),
            axis_label: Style::default().fg(Color::DarkGray),
            daily_cases: Style::default().fg(Color::Red),
            daily_deaths: Style::default().fg(Color::Black),
            total_cases: Style::default().fg(Color::Blue),
            total_deaths: Style::default().fg(Color::Red),
        }
    }

    /// Resolve a theme by name; `"auto"` (or anything unrecognised) falls
    /// back to background detection.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => match detect_background() {
                BackgroundType::Light => Self::light(),
                _ => Self::dark(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_dark() {
        let theme = Theme::from_name("dark");
        assert_eq!(theme.daily_cases, Theme::dark().daily_cases);
    }

    #[test]
    fn test_from_name_light() {
        let theme = Theme::from_name("light");
        assert_eq!(theme.text, Theme::light().text);
    }

    #[test]
    fn test_from_name_unknown_does_not_panic() {
        let _ = Theme::from_name("neon");
    }

    #[test]
    fn test_detect_background_dark_value() {
        std::env::set_var("COLORFGBG", "15;0");
        assert_eq!(detect_background(), BackgroundType::Dark);
        std::env::remove_var("COLORFGBG");
    }

    #[test]
    fn test_detect_background_light_value() {
        std::env::set_var("COLORFGBG", "0;15");
        assert_eq!(detect_background(), BackgroundType::Light);
        std::env::remove_var("COLORFGBG");
    }
}
