//! Filter command implementation

use std::io::{Read, Write};

use crate::badge::BadgeOptions;
use crate::cli::Cli;
use crate::commands::helpers::resolve_search_dir;
use crate::error::{Result, notebook as errors};
use crate::{filter, notebook};

/// Build badge options from command-line arguments
pub fn badge_options(cli: &Cli) -> Result<BadgeOptions> {
    Ok(BadgeOptions {
        notebook: cli.notebook.clone(),
        pattern: cli.pattern.clone(),
        colab_base: cli.colab_base.clone(),
        ..BadgeOptions::new(resolve_search_dir(cli.dir.clone())?)
    })
}

/// Run the filter over `input`, writing the result to `output`.
///
/// Nothing is written unless the whole transform succeeds.
pub fn run_with<R: Read, W: Write>(
    options: &BadgeOptions,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let notebook = notebook::read(&text)?;
    let notebook = filter::apply(notebook, options)?;
    let rendered = notebook::write(&notebook)?;

    output
        .write_all(rendered.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|e| errors::write_failed(e.to_string()))
}

/// Run filter command on stdin and stdout
pub fn run(cli: &Cli) -> Result<()> {
    let options = badge_options(cli)?;
    run_with(&options, std::io::stdin().lock(), std::io::stdout().lock())
}
