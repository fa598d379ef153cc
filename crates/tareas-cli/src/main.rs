//! Tareas CLI Application
//!
//! Interactive shell over the tareas task manager. Tasks live in memory for
//! the duration of one session.

mod args;
mod cli;
mod renderer;
mod session;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use renderer::TerminalRenderer;
use session::Session;
use tareas_core::{Home, TaskService};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, script } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let mut session = Session::new(Home::new(TaskService::default()), renderer);

    match script {
        Some(path) => {
            info!("running script {}", path.display());
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), false).await
        }
        None => {
            info!("Tareas started");
            let interactive = std::io::stdin().is_terminal();
            session
                .run(BufReader::new(tokio::io::stdin()), interactive)
                .await
        }
    }
}
