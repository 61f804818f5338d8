use crate::factory::NodeFactory;
use crate::registration::FactoryDeclaration;
use docgen_api::BoxError;
use std::sync::Arc;

/// Metadata for a plugin (plugin's own information).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PluginInfo {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}

/// A contributor of renderer factories.
///
/// The registry asks for the declarations first and then loads each declared
/// factory by name; a factory that fails to load only drops its own entry.
pub trait DocgenPlugin: Send + Sync {
    fn info(&self) -> PluginInfo;

    fn declarations(&self) -> Vec<FactoryDeclaration>;

    fn load_factory(&self, name: &str) -> Result<Arc<dyn NodeFactory>, BoxError>;
}
