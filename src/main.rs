// folio-term - a portfolio you browse from a prompt
//
// Main entry point. Parses args, loads the content and hands off to a host.

use anyhow::{anyhow, Result};
use env_logger::Env;
use folio_term_lib::{
    config::{self, Action, Config, Mode},
    ui::{line_mode, raw},
    ContentStore, Controller,
};
use log::LevelFilter;
use std::env;
use std::io::{self, IsTerminal};
use std::sync::Arc;

fn main() -> Result<()> {
    let action = config::parse_args(env::args().skip(1)).map_err(|e| {
        print_usage();
        anyhow!(e.user_message())
    })?;

    match action {
        Action::Help => {
            print_usage();
            Ok(())
        }
        Action::Version => {
            println!("folio-term v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Action::Run(config) => run(config),
    }
}

fn run(config: Config) -> Result<()> {
    init_logging(config.verbose);

    let content: ContentStore = config
        .load_content()
        .map_err(|e| anyhow!(e.user_message()))?;
    let mut controller = Controller::new(Arc::new(content));

    let attached = io::stdin().is_terminal() && io::stdout().is_terminal();
    let mode = config.mode.unwrap_or(if attached {
        Mode::Interactive
    } else {
        Mode::Plain
    });
    log::debug!("starting in {:?} mode", mode);

    match mode {
        Mode::Interactive => raw::run(&mut controller)?,
        Mode::Plain => {
            if !io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
            line_mode::run(&mut controller, io::stdin().lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn print_usage() {
    println!(
        r#"folio-term v{} - a portfolio you browse by typing

USAGE:
    folio-term [OPTIONS]

OPTIONS:
    -c, --content <path>   Load portfolio data from a JSON file
        --plain            Read one command per line from stdin
        --interactive      Force the raw-mode terminal
    -v, --verbose          Debug logging (RUST_LOG overrides)
    -V, --version          Show version
    -h, --help             Show this help

CONTENT:
    Looked up in this order: --content, ${}, ~/.folio-term/portfolio.json,
    then the bundled sample.

KEYS:
    Enter submit   Tab complete   Up/Down history
    Ctrl+C clear line   Ctrl+L clear screen   Ctrl+D quit   Esc close project view

EXAMPLES:
    folio-term
    folio-term --content ~/me.json
    echo "projects" | folio-term --plain
"#,
        env!("CARGO_PKG_VERSION"),
        config::CONTENT_ENV
    );
}
