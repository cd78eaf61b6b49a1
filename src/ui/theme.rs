use crate::engine::config::ThemeConfig;
use ratatui::style::Color;
use std::str::FromStr;

/// Reader colors resolved from the `[theme]` config section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub anchor: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    /// Near-black background, white word, red anchor letter
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(10, 10, 10), // #0A0A0A
            text: Color::Rgb(255, 255, 255),    // #FFFFFF
            anchor: Color::Rgb(255, 59, 59),    // #FF3B3B
            dimmed: Color::Rgb(74, 74, 74),     // #4A4A4A
        }
    }

    /// Unparseable entries keep the midnight color for that slot.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let fallback = Self::midnight();
        Self {
            background: parse_color(&config.background_color, fallback.background),
            text: parse_color(&config.text_color, fallback.text),
            anchor: parse_color(&config.anchor_color, fallback.anchor),
            dimmed: parse_color(&config.dimmed_color, fallback.dimmed),
        }
    }
}

fn parse_color(raw: &str, fallback: Color) -> Color {
    match Color::from_str(raw.trim()) {
        Ok(color) => color,
        Err(_) => {
            log::warn!("invalid theme color {:?}, using default", raw);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_midnight() {
        assert_eq!(Theme::from_config(&ThemeConfig::default()), Theme::midnight());
    }

    #[test]
    fn test_custom_hex_color() {
        let config = ThemeConfig {
            anchor_color: "#00FF00".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&config).anchor, Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let config = ThemeConfig {
            text_color: "not-a-color".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&config).text, Theme::midnight().text);
    }
}
