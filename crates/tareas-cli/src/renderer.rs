//! Terminal rendering of markdown output.
//!
//! Rich mode styles headers and inline markdown with termimad; plain mode
//! prints the markdown as is, which is what scripts and tests read.

use tareas_core::Notification;
use termimad::{crossterm::style::Color, MadSkin};

/// Renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer.
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Print markdown text.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hashes visible; termimad would strip them
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }

    /// Print a toast as a single `[severity] summary: detail` line.
    pub fn notify(&self, notification: &Notification) {
        if self.rich_enabled {
            println!("\x1b[33m{notification}\x1b[0m");
        } else {
            println!("{notification}");
        }
    }

    /// Whether rich (styled) output is enabled.
    pub fn is_rich(&self) -> bool {
        self.rich_enabled
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
