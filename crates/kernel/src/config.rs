//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result, bail};

use crate::menu::Placement;

/// Navigation shell configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional menu heading (default: none).
    pub menu_heading: Option<String>,

    /// Menu placement: sidebar or inline (default: sidebar).
    pub placement: Placement,

    /// Emit the selected page's title as a heading (default: true).
    pub show_page_title: bool,

    /// Viewer identity seeded into the session store (default: "user").
    pub default_username: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let menu_heading = env::var("MENU_HEADING").ok().filter(|s| !s.is_empty());

        let placement = match env::var("MENU_PLACEMENT")
            .unwrap_or_else(|_| "sidebar".to_string())
            .to_lowercase()
            .as_str()
        {
            "sidebar" => Placement::Sidebar,
            "inline" => Placement::Inline,
            other => bail!("MENU_PLACEMENT must be \"sidebar\" or \"inline\", got {other:?}"),
        };

        let show_page_title = env::var("SHOW_PAGE_TITLE")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .context("SHOW_PAGE_TITLE must be true or false")?;

        let default_username = env::var("DEFAULT_USERNAME").unwrap_or_else(|_| "user".to_string());

        Ok(Self {
            menu_heading,
            placement,
            show_page_title,
            default_username,
        })
    }
}
