//! Terminal stand-ins for the host framework's widget and render surface.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use sommario_kernel::host::HostUi;
use sommario_kernel::menu::{MenuSpec, MenuWidget, Placement};

/// Terminal menu widget.
///
/// Owns the ambient selection state the way the host framework's session
/// does: the chosen title survives across render passes, and falls back
/// to the first option when the retained title is no longer offered
/// (e.g. the viewer identity changed and a page disappeared).
#[derive(Debug, Default)]
pub struct TerminalMenu {
    current: Option<String>,
    last_options: Vec<String>,
}

impl TerminalMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a 1-based selection from the most recently drawn menu.
    pub fn choose(&mut self, option: usize) -> bool {
        match option.checked_sub(1).and_then(|i| self.last_options.get(i)) {
            Some(title) => {
                self.current = Some(title.clone());
                true
            }
            None => false,
        }
    }
}

impl MenuWidget for TerminalMenu {
    fn select(&mut self, placement: Placement, spec: &MenuSpec) -> Option<String> {
        let current = self
            .current
            .take()
            .filter(|title| spec.options.contains(title))
            .or_else(|| spec.options.first().cloned());

        if let Some(heading) = &spec.heading {
            println!("== {heading} ==");
        }

        match placement {
            Placement::Sidebar => {
                for (i, (title, icon)) in spec.options.iter().zip(&spec.icons).enumerate() {
                    let marker = if Some(title) == current.as_ref() { '>' } else { ' ' };
                    println!(" {marker} {}. [{icon}] {title}", i + 1);
                }
            }
            Placement::Inline => {
                let line: Vec<String> = spec
                    .options
                    .iter()
                    .enumerate()
                    .map(|(i, title)| {
                        if Some(title) == current.as_ref() {
                            format!("[{}. {title}]", i + 1)
                        } else {
                            format!(" {}. {title} ", i + 1)
                        }
                    })
                    .collect();
                println!("{}", line.join(" | "));
            }
        }
        println!();

        self.last_options = spec.options.clone();
        self.current = current.clone();
        current
    }
}

/// Render surface that prints markdown-ish headings.
#[derive(Debug, Default)]
pub struct TerminalUi;

impl HostUi for TerminalUi {
    fn heading(&mut self, text: &str) {
        println!("# {text}");
        println!();
    }
}

/// One interaction read from the terminal between render passes.
#[derive(Debug)]
pub enum Command {
    /// Select a menu option (1-based).
    Select(usize),
    /// Switch the viewer identity.
    User(String),
    /// Leave the shell.
    Quit,
    /// Anything unrecognized; the shell prints usage and re-runs.
    Help,
}

/// Read the next command from stdin. EOF quits.
pub fn read_command() -> Result<Command> {
    print!("toc> ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read command")?;
    if read == 0 {
        return Ok(Command::Quit);
    }

    let line = line.trim();
    if let Ok(option) = line.parse::<usize>() {
        return Ok(Command::Select(option));
    }

    match line.split_once(' ') {
        Some(("user", name)) if !name.trim().is_empty() => {
            Ok(Command::User(name.trim().to_string()))
        }
        _ => match line {
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Ok(Command::Help),
        },
    }
}

/// Print shell usage.
pub fn print_help() {
    println!("commands:");
    println!("  <n>          select menu option n");
    println!("  user <name>  switch the viewer identity");
    println!("  q            quit");
    println!();
}
