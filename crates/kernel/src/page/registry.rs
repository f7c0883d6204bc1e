//! Page registry - filters pages by viewer and orders them for the menu.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{TocError, TocResult};
use crate::host::HostUi;

use super::contents::PageContents;

/// One navigable unit of content with display metadata and an access
/// restriction.
#[derive(Debug)]
pub struct Page {
    /// Opaque stable identifier; carried into log fields, never used for
    /// lookup.
    pub uid: String,
    /// Display title; the selection key handed to and from the menu widget.
    pub title: String,
    /// Glyph identifier, opaque to the registry.
    pub icon: String,
    /// Content entry point invoked on selection.
    pub contents: PageContents,
    /// Sort key for menu order; ties keep input order.
    pub index: i32,
    /// Viewer identities allowed to see the page. `None` (or an empty set)
    /// means everyone.
    pub show_to: Option<HashSet<String>>,
}

impl Page {
    /// Create a page visible to everyone.
    pub fn new(
        uid: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        index: i32,
        contents: PageContents,
    ) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            icon: icon.into(),
            contents,
            index,
            show_to: None,
        }
    }

    /// Restrict the page to the given viewer identities.
    #[must_use]
    pub fn show_to<I, S>(mut self, viewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.show_to = Some(viewers.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the page is visible to the given viewer identity.
    fn visible_to(&self, viewer: Option<&str>) -> bool {
        match &self.show_to {
            None => true,
            Some(allowed) if allowed.is_empty() => true,
            Some(allowed) => viewer.is_some_and(|v| allowed.contains(v)),
        }
    }
}

/// The pages visible to one viewer, ordered for menu display.
///
/// Built fresh on every render pass. Invariants: stored order is
/// non-decreasing in `index` with input order preserved on ties, every
/// stored page is visible to the constructing viewer, and titles are
/// unique within the stored list. The registry never owns or validates
/// content execution.
#[derive(Debug)]
pub struct PageRegistry {
    pages: Vec<Page>,
}

impl PageRegistry {
    /// Build a registry from an arbitrary-order page list.
    ///
    /// Keeps pages visible to `viewer`, sorts ascending by `index`, and
    /// rejects duplicate titles within the visible set. Zero visible
    /// pages is not an error; the registry is simply empty.
    pub fn new<I>(pages: I, viewer: Option<&str>) -> TocResult<Self>
    where
        I: IntoIterator<Item = Page>,
    {
        let mut pages: Vec<Page> = pages
            .into_iter()
            .filter(|page| page.visible_to(viewer))
            .collect();
        pages.sort_by_key(|page| page.index);

        let mut seen = HashSet::new();
        for page in &pages {
            if !seen.insert(page.title.as_str()) {
                return Err(TocError::DuplicateTitle(page.title.clone()));
            }
        }

        debug!(
            visible = pages.len(),
            viewer = viewer.unwrap_or("<anonymous>"),
            "page registry built"
        );

        Ok(Self { pages })
    }

    /// Visible pages in menu order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Titles across visible pages, in menu order.
    ///
    /// Stays in lock-step with [`icons`](Self::icons) for widgets that
    /// take parallel option/icon lists.
    pub fn titles(&self) -> Vec<String> {
        self.pages.iter().map(|page| page.title.clone()).collect()
    }

    /// Icons across visible pages, in menu order.
    pub fn icons(&self) -> Vec<String> {
        self.pages.iter().map(|page| page.icon.clone()).collect()
    }

    /// Look up a visible page by exact title.
    pub fn get(&self, title: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.title == title)
    }

    /// Number of visible pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no page is visible to the current viewer.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Load a page's contents by title.
    ///
    /// Emits the title as a heading through `ui` when `show_title` is
    /// set, then invokes the content entry point. Content errors pass
    /// through unmodified. A title with no visible page fails with
    /// [`TocError::PageNotFound`]; selections carried over from a stale
    /// pass can legitimately hit this.
    pub fn load_page(&self, ui: &mut dyn HostUi, title: &str, show_title: bool) -> TocResult<()> {
        let page = self
            .get(title)
            .ok_or_else(|| TocError::PageNotFound(title.to_string()))?;

        debug!(uid = %page.uid, title = %page.title, "loading page");

        if show_title {
            ui.heading(&page.title);
        }
        page.contents.invoke()?;
        Ok(())
    }
}
