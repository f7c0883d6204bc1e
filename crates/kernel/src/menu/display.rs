//! Menu display helper - feeds the widget from a page registry.

use tracing::debug;

use crate::page::PageRegistry;

use super::widget::{MenuSpec, MenuWidget, Placement};

/// Draw the navigation menu for the registry's visible pages and return
/// the selected title.
///
/// Returns `None` without touching the widget when no page is visible;
/// drawing a zero-option menu is undefined for the widget collaborator.
/// The helper holds no state of its own; selection persistence is the
/// host's ambient capability.
pub fn display_menu(
    toc: &PageRegistry,
    widget: &mut dyn MenuWidget,
    placement: Placement,
    heading: Option<&str>,
) -> Option<String> {
    if toc.is_empty() {
        debug!("no visible pages, skipping menu");
        return None;
    }

    let spec = MenuSpec {
        heading: heading.map(str::to_string),
        options: toc.titles(),
        icons: toc.icons(),
        orientation: placement.orientation(),
    };

    debug!(options = spec.options.len(), ?placement, "displaying menu");

    widget.select(placement, &spec)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::menu::Orientation;
    use crate::page::{Page, PageContents, PageRegistry};

    use super::*;

    struct FixedMenu {
        answer: Option<String>,
        calls: Vec<(Placement, MenuSpec)>,
    }

    impl FixedMenu {
        fn selecting(answer: Option<&str>) -> Self {
            Self {
                answer: answer.map(str::to_string),
                calls: Vec::new(),
            }
        }
    }

    impl MenuWidget for FixedMenu {
        fn select(&mut self, placement: Placement, spec: &MenuSpec) -> Option<String> {
            self.calls.push((placement, spec.clone()));
            self.answer.clone()
        }
    }

    fn registry() -> PageRegistry {
        PageRegistry::new(
            vec![
                Page::new("h", "Home", "house", 0, PageContents::callback(|| Ok(()))),
                Page::new("a", "About", "info", 1, PageContents::callback(|| Ok(()))),
            ],
            None,
        )
        .unwrap()
    }

    #[test]
    fn empty_registry_skips_the_widget() {
        let toc = PageRegistry::new(vec![], None).unwrap();
        let mut widget = FixedMenu::selecting(Some("anything"));

        let selected = display_menu(&toc, &mut widget, Placement::Sidebar, None);

        assert_eq!(selected, None);
        assert!(widget.calls.is_empty());
    }

    #[test]
    fn spec_carries_projections_in_order() {
        let mut widget = FixedMenu::selecting(Some("Home"));

        let selected = display_menu(&registry(), &mut widget, Placement::Sidebar, Some("Demo"));

        assert_eq!(selected, Some("Home".to_string()));
        let (placement, spec) = &widget.calls[0];
        assert_eq!(*placement, Placement::Sidebar);
        assert_eq!(spec.heading.as_deref(), Some("Demo"));
        assert_eq!(spec.options, vec!["Home", "About"]);
        assert_eq!(spec.icons, vec!["house", "info"]);
        assert_eq!(spec.orientation, Orientation::Vertical);
    }

    #[test]
    fn inline_placement_renders_horizontal() {
        let mut widget = FixedMenu::selecting(None);

        let selected = display_menu(&registry(), &mut widget, Placement::Inline, None);

        assert_eq!(selected, None);
        let (_, spec) = &widget.calls[0];
        assert_eq!(spec.orientation, Orientation::Horizontal);
        assert_eq!(spec.heading, None);
    }
}
