#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Page registry integration tests.
//!
//! Visibility filtering, ordering, and title dispatch exercised through
//! the public API with the test-utils fixtures.

use sommario_kernel::error::TocError;
use sommario_kernel::host::NullUi;
use sommario_kernel::page::{Page, PageRegistry};
use sommario_test_utils::{CallCounter, RecordingUi, test_page};

#[test]
fn construction_round_trip_orders_by_index() {
    let toc = PageRegistry::new(
        vec![
            test_page("p0", "P0", 0),
            test_page("p1", "P1", 2),
            test_page("p2", "P2", 1),
        ],
        None,
    )
    .unwrap();

    assert_eq!(toc.titles(), vec!["P0", "P2", "P1"]);
}

#[test]
fn user_sees_only_unrestricted_pages() {
    let a = CallCounter::new();
    let pages = vec![
        Page::new("a", "A", "dot", 0, a.contents()),
        Page::new("b", "B", "dot", 1, CallCounter::new().contents()).show_to(["admin"]),
    ];

    let toc = PageRegistry::new(pages, Some("user")).unwrap();
    assert_eq!(toc.titles(), vec!["A"]);

    // Selecting A dispatches A's content.
    toc.load_page(&mut NullUi, "A", false).unwrap();
    assert_eq!(a.count(), 1);

    // B's title is not selectable: hard not-found, no fallback page.
    let err = toc.load_page(&mut NullUi, "B", false).unwrap_err();
    assert!(matches!(err, TocError::PageNotFound(title) if title == "B"));
}

#[test]
fn admin_sees_both_pages_in_index_order() {
    let a = CallCounter::new();
    let b = CallCounter::new();
    let pages = vec![
        Page::new("a", "A", "dot", 0, a.contents()),
        Page::new("b", "B", "dot", 1, b.contents()).show_to(["admin"]),
    ];

    let toc = PageRegistry::new(pages, Some("admin")).unwrap();
    assert_eq!(toc.titles(), vec!["A", "B"]);

    toc.load_page(&mut NullUi, "A", false).unwrap();
    toc.load_page(&mut NullUi, "B", false).unwrap();
    assert_eq!(a.count(), 1);
    assert_eq!(b.count(), 1);
}

#[test]
fn shared_title_dispatches_the_visible_page() {
    // Two pages share a title; only one is visible to the viewer. The
    // hidden one must never win, regardless of declared order.
    for flipped in [false, true] {
        let visible = CallCounter::new();
        let hidden = CallCounter::new();

        let mut pages = vec![
            Page::new("visible", "X", "dot", 1, visible.contents()),
            Page::new("hidden", "X", "dot", 0, hidden.contents()).show_to(["admin"]),
        ];
        if flipped {
            pages.reverse();
        }

        let toc = PageRegistry::new(pages, Some("user")).unwrap();
        toc.load_page(&mut NullUi, "X", false).unwrap();

        assert_eq!(visible.count(), 1);
        assert_eq!(hidden.count(), 0);
    }
}

#[test]
fn both_visible_duplicates_rejected_at_construction() {
    let err = PageRegistry::new(
        vec![test_page("a", "X", 0), test_page("b", "X", 1)],
        Some("admin"),
    )
    .unwrap_err();

    assert!(matches!(err, TocError::DuplicateTitle(title) if title == "X"));
}

#[test]
fn page_title_heading_is_optional() {
    let toc = PageRegistry::new(vec![test_page("a", "Welcome", 0)], None).unwrap();
    let mut ui = RecordingUi::new();

    toc.load_page(&mut ui, "Welcome", true).unwrap();
    toc.load_page(&mut ui, "Welcome", false).unwrap();

    assert_eq!(ui.headings, vec!["Welcome"]);
}

#[test]
fn content_failure_reaches_the_caller_intact() {
    let counter = CallCounter::new();
    let pages = vec![Page::new(
        "a",
        "A",
        "dot",
        0,
        counter.failing_contents("render blew up"),
    )];

    let toc = PageRegistry::new(pages, None).unwrap();
    let err = toc.load_page(&mut NullUi, "A", false).unwrap_err();

    // Invoked exactly once, no retry; message passed through unmodified.
    assert_eq!(counter.count(), 1);
    assert!(matches!(&err, TocError::Content(_)));
    assert_eq!(err.to_string(), "render blew up");
}
