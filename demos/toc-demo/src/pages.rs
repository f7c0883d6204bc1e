//! Demo page definitions.
//!
//! Three pages: a welcome callback, a guide implemented as a content
//! module, and a secret page visible only to `admin`. Rebuilt fresh on
//! every render pass, like everything else in the re-execution model.

use anyhow::Result;
use sommario_kernel::page::{ContentModule, Page, PageContents};

/// Guide page packaged as a module with a `load()` entry point.
struct GuidePage;

impl ContentModule for GuidePage {
    fn load(&self) -> Result<()> {
        println!("Pages carry a uid, a title, an icon, a menu index, and an");
        println!("optional allow-list of viewer identities. The registry is");
        println!("rebuilt from scratch on every pass: it keeps the pages the");
        println!("current viewer may see, sorted by index, and dispatches the");
        println!("menu selection to the page's content entry point.");
        println!();
        println!("Try `user admin` to see a page that is hidden right now.");
        Ok(())
    }
}

/// Build the demo page list.
pub fn build() -> Vec<Page> {
    vec![
        Page::new(
            "guide",
            "Page 2",
            "hand-index-thumb",
            1,
            PageContents::module(GuidePage),
        ),
        Page::new(
            "secret",
            "Secret page",
            "arrow-up-circle",
            2,
            PageContents::callback(|| {
                println!("You found the secret page. Only `admin` is on its");
                println!("allow-list; switch back with `user user` and it");
                println!("disappears from the menu again.");
                Ok(())
            }),
        )
        .show_to(["admin"]),
        Page::new(
            "welcome",
            "Page 1",
            "person-square",
            0,
            PageContents::callback(|| {
                println!("Hello from sommario! This shell re-runs the whole");
                println!("render pass after every command, the way a reactive");
                println!("dashboard re-executes its script on interaction.");
                println!();
                println!("Pick a page by number, or head to Page 2 for the guide.");
                Ok(())
            }),
        ),
    ]
}
