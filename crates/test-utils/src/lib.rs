//! Sommario test utilities.
//!
//! Helpers for integration testing: page fixtures, counting content
//! callbacks, and scripted host collaborators.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sommario_kernel::host::HostUi;
use sommario_kernel::menu::{MenuSpec, MenuWidget, Placement};
use sommario_kernel::page::{Page, PageContents};

/// Create a test page with inert contents and a placeholder icon.
pub fn test_page(uid: &str, title: &str, index: i32) -> Page {
    Page::new(uid, title, "dot", index, PageContents::callback(|| Ok(())))
}

/// Shared invocation counter for asserting content dispatch.
#[derive(Debug, Default, Clone)]
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Page contents that bump this counter on every invocation.
    pub fn contents(&self) -> PageContents {
        let count = Arc::clone(&self.count);
        PageContents::callback(move || {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    /// Page contents that bump the counter, then fail with `message`.
    pub fn failing_contents(&self, message: &str) -> PageContents {
        let count = Arc::clone(&self.count);
        let message = message.to_string();
        PageContents::callback(move || {
            count.fetch_add(1, Ordering::SeqCst);
            anyhow::bail!("{message}")
        })
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Menu widget with a scripted response, recording what it was shown.
#[derive(Debug, Default)]
pub struct ScriptedMenu {
    selection: Option<String>,
    /// Every `(placement, spec)` pair the widget was asked to draw.
    pub calls: Vec<(Placement, MenuSpec)>,
}

impl ScriptedMenu {
    /// Widget that always reports `title` as selected.
    pub fn selecting(title: &str) -> Self {
        Self {
            selection: Some(title.to_string()),
            calls: Vec::new(),
        }
    }

    /// Widget that reports no selection.
    pub fn unselected() -> Self {
        Self::default()
    }
}

impl MenuWidget for ScriptedMenu {
    fn select(&mut self, placement: Placement, spec: &MenuSpec) -> Option<String> {
        self.calls.push((placement, spec.clone()));
        self.selection.clone()
    }
}

/// Host UI that captures emitted headings.
#[derive(Debug, Default)]
pub struct RecordingUi {
    /// Headings in emission order.
    pub headings: Vec<String>,
}

impl RecordingUi {
    /// Create a recorder with no headings captured yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HostUi for RecordingUi {
    fn heading(&mut self, text: &str) {
        self.headings.push(text.to_string());
    }
}
