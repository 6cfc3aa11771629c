//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::badge::{DEFAULT_COLAB_BASE, DEFAULT_PATTERN};

/// nbfilter - notebook title and Colab badge filter
///
/// Reads a notebook from stdin, and when its front matter sets
/// `insert_colab_badge: true`, inserts a markdown cell with the title and an
/// "Open In Colab" badge after the front-matter cell. Writes the notebook to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "nbfilter",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Insert a title and Colab badge cell into a notebook read from stdin",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  nbfilter < intro.ipynb > rendered.ipynb\n    \
                  nbfilter --notebook posts/intro.ipynb < posts/intro.ipynb\n    \
                  nbfilter --colab-base https://colab.research.google.com/github/me/site/blob/main"
)]
pub struct Cli {
    /// Notebook file to link to (defaults to the file matching --pattern in --dir)
    #[arg(long, env = "NBFILTER_NOTEBOOK", value_name = "PATH")]
    pub notebook: Option<PathBuf>,

    /// Directory searched for the notebook file (defaults to current directory)
    #[arg(long, env = "NBFILTER_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Glob matched against file names in --dir
    #[arg(long, env = "NBFILTER_PATTERN", value_name = "GLOB", default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Base URL the notebook's relative path is appended to
    #[arg(long, env = "NBFILTER_COLAB_BASE", value_name = "URL", default_value = DEFAULT_COLAB_BASE)]
    pub colab_base: String,

    /// Enable verbose output on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
