use crate::notification::NotificationLevel;
use clap::ValueEnum;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use std::env;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
    HighContrast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeChoice {
    #[default]
    Auto,
    Dark,
    Light,
    HighContrast,
}

impl ThemeChoice {
    pub fn resolve(&self) -> Theme {
        match self {
            ThemeChoice::Auto => Theme::detect(env::var("COLORFGBG").ok().as_deref()),
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::HighContrast => Theme::HighContrast,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::HighContrast => "high-contrast",
        })
    }
}

impl Theme {
    /// Guess the terminal background from a `COLORFGBG` value such as
    /// `"15;0"`. Anything unreadable counts as dark.
    pub fn detect(colorfgbg: Option<&str>) -> Theme {
        let background = colorfgbg
            .and_then(|value| value.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            Some(7) | Some(9..=15) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn next(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::HighContrast,
            Theme::HighContrast => Theme::Dark,
        }
    }

    pub fn scheme(&self) -> Scheme {
        match self {
            Theme::Dark => Scheme {
                title: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                body: Style::default().fg(Color::Gray),
                label: Style::default().fg(Color::Yellow),
                border: Style::default().fg(Color::Rgb(0x66, 0x7e, 0xea)),
                button: Style::default().fg(Color::Black).bg(Color::Green),
                hint: Style::default().fg(Color::DarkGray),
                status: Style::default().fg(Color::Black).bg(Color::Green),
                status_mode: Style::default().bg(Color::Blue),
                toast_text: Style::default().fg(Color::White),
                high_contrast: false,
            },
            Theme::Light => Scheme {
                title: Style::default()
                    .fg(Solarized::Base02.to_color())
                    .add_modifier(Modifier::BOLD),
                body: Style::default().fg(Solarized::Base00.to_color()),
                label: Style::default().fg(Solarized::Orange.to_color()),
                border: Style::default().fg(Solarized::Violet.to_color()),
                button: Style::default()
                    .fg(Solarized::Base3.to_color())
                    .bg(Solarized::Green.to_color()),
                hint: Style::default().fg(Solarized::Base1.to_color()),
                status: Style::default()
                    .fg(Solarized::Base3.to_color())
                    .bg(Solarized::Green.to_color()),
                status_mode: Style::default()
                    .fg(Solarized::Base3.to_color())
                    .bg(Solarized::Blue.to_color()),
                toast_text: Style::default().fg(Color::White),
                high_contrast: false,
            },
            Theme::HighContrast => Scheme {
                title: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                body: Style::default().fg(Color::White),
                label: Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::White),
                button: Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                hint: Style::default().fg(Color::White),
                status: Style::default().fg(Color::Black).bg(Color::White),
                status_mode: Style::default().fg(Color::Black).bg(Color::LightYellow),
                toast_text: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
                high_contrast: true,
            },
        }
    }
}

pub struct Scheme {
    pub title: Style,
    pub body: Style,
    pub label: Style,
    pub border: Style,
    pub button: Style,
    pub hint: Style,

    pub status: Style,
    pub status_mode: Style,

    pub toast_text: Style,
    high_contrast: bool,
}

impl Scheme {
    pub fn toast(&self, level: NotificationLevel) -> Style {
        let background = match (self.high_contrast, level) {
            (true, NotificationLevel::Info) => Color::LightCyan,
            (true, NotificationLevel::Success) => Color::LightGreen,
            (true, NotificationLevel::Error) => Color::LightRed,
            (false, level) => {
                let (r, g, b) = level.rgb();
                Color::Rgb(r, g, b)
            }
        };
        self.toast_text.bg(background)
    }
}

pub enum Solarized {
    Base02,
    Base00,
    Base1,
    Base3,
    Orange,
    Violet,
    Blue,
    Green,
}

impl Solarized {
    fn to_color(&self) -> Color {
        match self {
            Solarized::Base02 => Color::Rgb(7, 54, 66),
            Solarized::Base00 => Color::Rgb(101, 123, 131),
            Solarized::Base1 => Color::Rgb(147, 161, 161),
            Solarized::Base3 => Color::Rgb(253, 246, 227),
            Solarized::Orange => Color::Rgb(203, 75, 22),
            Solarized::Violet => Color::Rgb(108, 113, 196),
            Solarized::Blue => Color::Rgb(38, 139, 210),
            Solarized::Green => Color::Rgb(133, 153, 0),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect() {
        assert_eq!(Theme::Dark, Theme::detect(None));
        assert_eq!(Theme::Dark, Theme::detect(Some("15;0")));
        assert_eq!(Theme::Light, Theme::detect(Some("0;15")));
        assert_eq!(Theme::Light, Theme::detect(Some("0;default;7")));
        assert_eq!(Theme::Dark, Theme::detect(Some("garbage")));
    }

    #[test]
    fn test_rotation_visits_every_theme() {
        assert_eq!(Theme::Light, Theme::Dark.next());
        assert_eq!(Theme::HighContrast, Theme::Light.next());
        assert_eq!(Theme::Dark, Theme::HighContrast.next());
    }

    #[test]
    fn test_toast_colours() {
        assert_eq!(
            Some(Color::Rgb(0x27, 0xae, 0x60)),
            Theme::Dark.scheme().toast(NotificationLevel::Success).bg
        );
        assert_eq!(
            Some(Color::LightRed),
            Theme::HighContrast.scheme().toast(NotificationLevel::Error).bg
        );
    }

    #[test]
    fn test_explicit_choice_ignores_environment() {
        assert_eq!(Theme::HighContrast, ThemeChoice::HighContrast.resolve());
    }
}
