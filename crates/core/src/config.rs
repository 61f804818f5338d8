use crate::error::{DocgenError, Result};
use docgen_plugin::FactoryDeclaration;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site generation settings, loadable from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Header of the generated site. Defaults to the root node's label.
    pub title: Option<String>,
    pub icons_folder: String,
    pub toc_file: String,
    pub index_file: String,
    pub render_unset_properties: bool,
    /// Renderer bindings for the built-in factories.
    pub renderers: Vec<FactoryDeclaration>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: None,
            icons_folder: "icons".to_string(),
            toc_file: "toc.js".to_string(),
            index_file: "index.html".to_string(),
            render_unset_properties: false,
            renderers: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("icons_folder", &self.icons_folder),
            ("toc_file", &self.toc_file),
            ("index_file", &self.index_file),
        ] {
            if value.trim().is_empty() || value.contains('/') || value.contains('\\') {
                return Err(DocgenError::Config(format!(
                    "{} must be a plain file name, got '{}'",
                    field, value
                )));
            }
        }
        Ok(())
    }
}
