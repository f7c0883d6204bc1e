//! Render-pass orchestration.
//!
//! The host re-executes the whole program on every interaction; one call
//! to [`run_pass`] is one such execution: build the registry, draw the
//! menu, dispatch the selection. Nothing survives between calls except
//! what the host retains on its side of the seams.

use tracing::debug;

use crate::error::TocResult;
use crate::host::HostUi;
use crate::menu::{MenuWidget, Placement, display_menu};
use crate::page::{Page, PageRegistry};

/// Options carried through one render pass.
#[derive(Debug, Clone)]
pub struct PassOptions {
    /// Where the menu is docked.
    pub placement: Placement,
    /// Optional heading above the menu.
    pub menu_heading: Option<String>,
    /// Emit the selected page's title as a heading before its contents.
    pub show_page_title: bool,
}

impl Default for PassOptions {
    fn default() -> Self {
        Self {
            placement: Placement::Sidebar,
            menu_heading: None,
            show_page_title: true,
        }
    }
}

/// Run one render pass over `pages` for `viewer`.
///
/// Returns the selected title so the host can retain it as the session's
/// last selection, or `Ok(None)` when nothing was selectable. Registry
/// construction failures, stale-selection lookups, and content errors
/// all surface here.
pub fn run_pass(
    pages: Vec<Page>,
    viewer: Option<&str>,
    widget: &mut dyn MenuWidget,
    ui: &mut dyn HostUi,
    options: &PassOptions,
) -> TocResult<Option<String>> {
    let toc = PageRegistry::new(pages, viewer)?;

    let Some(title) = display_menu(&toc, widget, options.placement, options.menu_heading.as_deref())
    else {
        debug!("render pass ended with no selection");
        return Ok(None);
    };

    toc.load_page(ui, &title, options.show_page_title)?;
    Ok(Some(title))
}
