//! Todo CLI Application
//!
//! Command-line interface for the `todo` list manager.

mod args;
mod cli;
mod renderer;
mod session;

use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use session::Session;
use todo_core::TodoAppBuilder;

fn main() -> Result<ExitCode> {
    // Store diagnostics are warnings; show them unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Args {
        store_file,
        no_color,
        command,
    } = Args::parse();

    let app = TodoAppBuilder::new()
        .with_store_path(store_file)
        .build()
        .context("Failed to load the task list")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("todo started");

    match command {
        Some(command) => Cli::new(app, renderer).handle_command(command),
        None => {
            Session::new(app, renderer)
                .run(io::stdin().lock())
                .context("Interactive session failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
