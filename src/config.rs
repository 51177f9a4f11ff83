// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::style_ser;
use ansi_term::{Color, Style};
use color_eyre::Result;
use contfrac_core::output::fmt::FmtToken;
use contfrac_core::Context;
use eyre::{eyre, WrapErr};
use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::PathBuf;

pub fn config_path(name: &str) -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| eyre!("Could not find config directory"))?;
    path.push("contfrac");
    path.push(name);
    Ok(path)
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub contfrac: Contfrac,
    pub limits: Limits,
    pub colors: Colors,
    pub themes: HashMap<String, Theme>,
    // Hack because none of ansi-term's functionality is const safe.
    default_theme: Theme,
    disabled_theme: Theme,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Contfrac {
    /// Which prompt to render when run interactively.
    pub prompt: String,
    /// Print replies as JSON instead of text.
    pub json: bool,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Step budget for expansions that might not terminate.
    pub max_steps: usize,
    /// How many convergents the `convergents` command lists.
    pub convergents: usize,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    /// Whether support for colored output should be enabled.
    pub enabled: Option<bool>,
    /// The name of the current theme.
    pub theme: String,
}

#[derive(Serialize, Deserialize, Default, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    #[serde(with = "style_ser")]
    plain: Style,
    #[serde(with = "style_ser")]
    error: Style,
    #[serde(with = "style_ser")]
    number: Style,
    #[serde(with = "style_ser")]
    user_input: Style,
    #[serde(with = "style_ser")]
    term: Style,
    #[serde(with = "style_ser")]
    period: Style,
}

impl Theme {
    pub fn get_style(&self, token: FmtToken) -> Style {
        match token {
            FmtToken::Plain => self.plain,
            FmtToken::Error => self.error,
            FmtToken::Number => self.number,
            FmtToken::UserInput => self.user_input,
            FmtToken::Term => self.term,
            FmtToken::Period => self.period,
            FmtToken::ListSep => self.plain,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contfrac: Default::default(),
            limits: Default::default(),
            colors: Default::default(),
            themes: Default::default(),
            default_theme: Theme {
                plain: Style::default(),
                error: Style::new().fg(Color::Red),
                number: Style::default(),
                user_input: Style::new().bold(),
                term: Style::new().fg(Color::Cyan),
                period: Style::new().fg(Color::Cyan).underline(),
            },
            disabled_theme: Theme::default(),
        }
    }
}

impl Default for Contfrac {
    fn default() -> Self {
        Contfrac {
            prompt: "> ".to_owned(),
            json: false,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        let ctx = Context::new();
        Limits {
            max_steps: ctx.max_steps,
            convergents: ctx.max_convergents,
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            enabled: None,
            theme: "default".to_owned(),
        }
    }
}

impl Config {
    pub fn get_theme(&self) -> &Theme {
        let default_enable_colors = env::var("NO_COLOR") == Err(env::VarError::NotPresent);
        let colors_enabled = self.colors.enabled.unwrap_or(default_enable_colors);

        if colors_enabled {
            let name = &self.colors.theme;
            let theme = self.themes.get(name);
            theme.unwrap_or(&self.default_theme)
        } else {
            &self.disabled_theme
        }
    }

    /// The evaluation limits this config asks for.
    pub fn context(&self) -> Context {
        Context {
            max_steps: self.limits.max_steps,
            max_convergents: self.limits.convergents,
        }
    }
}

pub fn read_config(override_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = override_path {
        PathBuf::from(path)
    } else {
        config_path("config.toml")?
    };
    match read_to_string(path) {
        // Hard fail if the file has invalid TOML.
        Ok(result) => toml::from_str(&result).wrap_err("While parsing config.toml"),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if let Some(override_path) = override_path {
                // Hard fail if user-provided config path doesn't exist
                Err(eyre!(err).wrap_err(format!(
                    "Failed to read provided config file `{}`",
                    override_path
                )))
            } else {
                // Use default config if it doesn't exist.
                Ok(Config::default())
            }
        }
        // Hard fail for other IO errors (e.g. permissions).
        Err(err) => Err(eyre!(err).wrap_err("Failed to read config.toml")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections() {
        let config: Config = toml::from_str(
            r#"
            [contfrac]
            prompt = "cf> "

            [limits]
            max_steps = 12

            [colors]
            enabled = true
            theme = "mine"

            [themes.mine]
            term = "bold 208"
            "#,
        )
        .unwrap();
        assert_eq!(config.contfrac.prompt, "cf> ");
        assert!(!config.contfrac.json);
        let ctx = config.context();
        assert_eq!(ctx.max_steps, 12);
        assert_eq!(ctx.max_convergents, Context::new().max_convergents);
        assert_eq!(
            config.get_theme().get_style(FmtToken::Term),
            Style::new().bold().fg(Color::Fixed(208))
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<Config>("[limits]\nmax_step = 3\n").is_err());
    }

    #[test]
    fn test_disabled_colors() {
        let mut config = Config::default();
        config.colors.enabled = Some(false);
        assert_eq!(config.get_theme().get_style(FmtToken::Error), Style::default());
    }
}
