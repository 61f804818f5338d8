use docgen_core::{SiteConfig, WriteMode};
use nu_ansi_term::Color;
use std::path::Path;
use tracing::info;

pub fn run(
    model: &Path,
    out: &Path,
    config: SiteConfig,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if force {
        WriteMode::Overwrite
    } else {
        WriteMode::Refuse
    };

    info!("Generating documentation for {}...", model.display());
    let summary = docgen_runtime::generate(model, out, config, mode)?;

    println!(
        "{} {} nodes, {} files written to {}",
        Color::Green.bold().paint("Done:"),
        summary.nodes,
        summary.files,
        out.display()
    );
    Ok(())
}
