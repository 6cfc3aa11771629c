//! nbfilter - notebook title and Colab badge filter
//!
//! Reads a notebook from stdin, inserts a title and "Open In Colab" badge
//! cell when the first cell's front matter asks for one, and writes the
//! notebook to stdout.

use clap::Parser;
use miette::Diagnostic;

mod badge;
mod cli;
mod commands;
mod error;
mod filter;
mod frontmatter;
mod logging;
mod notebook;
mod path_utils;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::filter::run(&cli) {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
