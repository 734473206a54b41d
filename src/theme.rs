use std::{fmt, str::FromStr};

use leptos::prelude::*;
use thiserror::Error;

/// Display palette selector shared by every themed component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme mode: {0}")]
pub struct ParseThemeModeError(String);

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: "#f8fafc",
                paper: "#ffffff",
                text_primary: "#1e293b",
                text_secondary: "#64748b",
                divider: "rgba(0, 0, 0, 0.12)",
                accent: "#0ea5e9",
            },
            Self::Dark => Palette {
                background: "#0a192f",
                paper: "#112240",
                text_primary: "#ccd6f6",
                text_secondary: "#8892b0",
                divider: "rgba(255, 255, 255, 0.12)",
                accent: "#64ffda",
            },
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// Mode-dependent colors, exposed to the stylesheet as CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
    pub accent: &'static str,
}

impl Palette {
    pub fn css_vars(&self) -> String {
        format!(
            "--bg-default: {}; --bg-paper: {}; --text-primary: {}; --text-secondary: {}; --divider: {}; --accent: {};",
            self.background,
            self.paper,
            self.text_primary,
            self.text_secondary,
            self.divider,
            self.accent
        )
    }
}

/// Session-wide theme state. Cheap to copy; every copy reads and writes the
/// same signal, so all consumers observe one value per render pass.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext(RwSignal<ThemeMode>);

impl ThemeContext {
    /// Always starts in the default mode; no stored preference is consulted.
    pub fn new() -> Self {
        Self(RwSignal::new(ThemeMode::default()))
    }

    pub fn mode(&self) -> ThemeMode {
        self.0.get()
    }

    pub fn mode_untracked(&self) -> ThemeMode {
        self.0.get_untracked()
    }

    /// Flips the mode. Subscribers are marked dirty before this returns.
    pub fn toggle(&self) {
        self.0.update(|mode| *mode = mode.toggled());
        log::debug!("theme switched to {}", self.0.get_untracked());
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_theme() -> ThemeContext {
    let theme = ThemeContext::new();
    provide_context(theme);
    theme
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_in_dark_mode() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::new();
            assert_eq!(theme.mode_untracked(), ThemeMode::Dark);
        });
    }

    #[test]
    fn should_return_to_initial_mode_after_even_toggles() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::new();
            let initial = theme.mode_untracked();
            for n in 1..=10 {
                theme.toggle();
                let expected = if n % 2 == 0 {
                    initial
                } else {
                    initial.toggled()
                };
                assert_eq!(theme.mode_untracked(), expected, "after {n} toggles");
            }
        });
    }

    #[test]
    fn should_share_state_between_copies() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeContext::new();
            let consumer = theme;
            theme.toggle();
            assert_eq!(consumer.mode_untracked(), ThemeMode::Light);
        });
    }

    #[test]
    fn should_resolve_provided_theme_from_context() {
        let owner = Owner::new();
        owner.with(|| {
            let provided = provide_theme();
            use_theme().toggle();
            assert_eq!(provided.mode_untracked(), ThemeMode::Light);
        });
    }

    #[test]
    fn should_parse_mode_names() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" Light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Light.to_string(), "light");
    }

    #[test]
    fn should_expose_palette_as_css_vars() {
        let vars = ThemeMode::Dark.palette().css_vars();
        assert!(vars.contains("--bg-default: #0a192f;"));
        assert!(vars.contains("--accent: #64ffda;"));
        assert_ne!(ThemeMode::Light.palette(), ThemeMode::Dark.palette());
    }
}
