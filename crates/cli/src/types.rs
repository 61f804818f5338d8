use docgen_core::SiteConfig;
use docgen_runtime::MatchSummary;
use std::path::Path;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "")]
    selected: &'static str,
    #[tabled(rename = "Distance")]
    distance: u64,
    #[tabled(rename = "Matched type")]
    matched_type: String,
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Contributor")]
    contributor: String,
}

impl From<MatchSummary> for MatchRow {
    fn from(m: MatchSummary) -> Self {
        Self {
            selected: if m.selected { "*" } else { "" },
            distance: m.distance,
            matched_type: m.matched_type,
            entry: m.entry,
            contributor: m.contributor.unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn run(
    model: &Path,
    config: &SiteConfig,
    type_ref: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let matches = docgen_runtime::explain_type(model, config, type_ref)?;
    if matches.is_empty() {
        println!("No renderer registered for {}; the generic object page is used.", type_ref);
        return Ok(());
    }
    let rows: Vec<MatchRow> = matches.into_iter().map(MatchRow::from).collect();
    println!("{}", Table::new(rows));
    Ok(())
}
