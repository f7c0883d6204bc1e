//! Menu widget contract.

use serde::{Deserialize, Serialize};

/// Where the menu is docked.
///
/// Placement fixes the layout orientation as well: the sidebar stacks
/// options vertically, the inline bar lays them out horizontally. The
/// two are not independently configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Docked in the sidebar region as a vertical list.
    Sidebar,
    /// In the main content region as a horizontal bar.
    Inline,
}

impl Placement {
    /// Layout orientation coupled to this placement.
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Sidebar => Orientation::Vertical,
            Self::Inline => Orientation::Horizontal,
        }
    }
}

/// Menu layout orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Everything the widget needs to draw one single-select menu.
///
/// `options` and `icons` have the same length and correspond
/// positionally.
#[derive(Debug, Clone, Serialize)]
pub struct MenuSpec {
    /// Optional heading above the menu.
    pub heading: Option<String>,
    /// Selectable titles, in display order.
    pub options: Vec<String>,
    /// Icon identifiers matching `options`.
    pub icons: Vec<String>,
    /// Layout orientation.
    pub orientation: Orientation,
}

impl MenuSpec {
    /// JSON payload for widgets that wrap an embedded web component.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Single-select menu widget drawn by the host framework.
///
/// The widget owns selection persistence across render passes; the
/// kernel hands it the current spec and takes back the selected title.
pub trait MenuWidget {
    /// Draw the menu and return the currently selected option, if any.
    fn select(&mut self, placement: Placement, spec: &MenuSpec) -> Option<String>;
}
