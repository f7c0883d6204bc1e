//! Sommario demonstration shell.
//!
//! Plays the host framework's role: owns the session store and the menu
//! widget, and re-runs the whole render pass after every interaction,
//! the way a reactive dashboard re-executes its script.

mod pages;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use sommario_kernel::config::Config;
use sommario_kernel::error::TocError;
use sommario_kernel::menu::Placement;
use sommario_kernel::pass::{PassOptions, run_pass};
use sommario_kernel::session::{MemorySession, SessionStore, VIEWER_KEY, current_viewer};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::shell::{Command, TerminalMenu, TerminalUi};

/// Multi-page menu demo over the sommario kernel.
#[derive(Debug, Parser)]
#[command(name = "sommario-demo")]
struct Cli {
    /// Start with this viewer identity instead of DEFAULT_USERNAME.
    #[arg(long)]
    username: Option<String>,

    /// Dock the menu inline above the page instead of in the sidebar.
    #[arg(long)]
    inline: bool,

    /// Menu heading (overrides MENU_HEADING).
    #[arg(long)]
    menu_heading: Option<String>,

    /// Do not emit the selected page's title as a heading.
    #[arg(long)]
    no_page_title: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    let options = PassOptions {
        placement: if cli.inline {
            Placement::Inline
        } else {
            config.placement
        },
        menu_heading: cli.menu_heading.or(config.menu_heading),
        show_page_title: !cli.no_page_title && config.show_page_title,
    };

    let username = cli.username.unwrap_or(config.default_username);
    let mut session = MemorySession::new();
    session.set(VIEWER_KEY, username);

    info!(placement = ?options.placement, "starting demo shell");

    let mut menu = TerminalMenu::new();
    let mut ui = TerminalUi;

    loop {
        let viewer = current_viewer(&session);
        println!("--- viewer: {} ---", viewer.as_deref().unwrap_or("<none>"));

        let pass = run_pass(
            pages::build(),
            viewer.as_deref(),
            &mut menu,
            &mut ui,
            &options,
        );
        match pass {
            Ok(Some(_)) => {}
            Ok(None) => println!("(no pages visible to this viewer)"),
            // A retained selection can go stale when the viewer changes
            // between passes; report it and re-render.
            Err(TocError::PageNotFound(title)) => {
                println!("page \"{title}\" is no longer available");
            }
            Err(err) => return Err(err.into()),
        }
        println!();

        match shell::read_command()? {
            Command::Select(option) => {
                if !menu.choose(option) {
                    println!("no menu option {option}");
                }
            }
            Command::User(name) => session.set(VIEWER_KEY, name),
            Command::Quit => break,
            Command::Help => shell::print_help(),
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
