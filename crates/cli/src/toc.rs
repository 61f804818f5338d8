use docgen_core::SiteConfig;
use std::path::Path;

pub fn run(model: &Path, config: &SiteConfig, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let index = docgen_runtime::build_index(model, config)?;
    let json = if pretty {
        serde_json::to_string_pretty(&index)?
    } else {
        index.to_json()?
    };
    println!("{}", json);
    Ok(())
}
