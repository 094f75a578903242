//! # CLI Layer
//!
//! This is the interactive client of the library and the **only** place that knows
//! about the terminal: argument parsing, logging setup, prompting and rendering.
//!
//! - `args`: clap definitions and flag/config merging
//! - `prompt`: `Prompter` trait with TTY and line-based implementations
//! - `render`: message and table formatting
//! - `session`: the prompt loop itself

mod args;
mod prompt;
mod render;
mod session;

use args::Cli;
use clap::Parser;
use prompt::{LinePrompter, Prompter, TerminalPrompter};
use render::Renderer;
use session::Session;
use std::io::{self, IsTerminal};
use usersapp::api::UsersApi;
use usersapp::config::AppConfig;
use usersapp::error::Result;
use usersapp::store::memory::InMemoryStore;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load_required(path)?,
        None => AppConfig::default(),
    };
    let config = cli.apply(config);

    if !config.color {
        colored::control::set_override(false);
    }

    if io::stdin().is_terminal() {
        log::info!("interactive terminal detected");
        let prompter = TerminalPrompter::new(config.color);
        run_session(prompter, config)
    } else {
        log::info!("reading answers line by line from stdin");
        let prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        run_session(prompter, config)
    }
}

fn run_session<P: Prompter>(prompter: P, config: AppConfig) -> Result<()> {
    let api = UsersApi::new(InMemoryStore::new());
    let renderer = Renderer::new(io::stdout(), config.color);
    Session::new(api, prompter, renderer, config).run()
}
