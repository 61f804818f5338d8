use docgen_api::DocNode;
use docgen_core::registry::FactoryRegistry;
use docgen_core::render::{BuiltinPlugin, MarkdownRenderer, ObjectNodeFactory};
use docgen_core::site::{SiteBuilder, SiteGenerator, SiteIndex};
use docgen_core::{DocgenError, Result, SiteConfig, WriteMode};
use docgen_json::JsonModel;
use docgen_plugin::FactoryDeclaration;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Assembles a registry with the built-in renderers bound to the configured
/// declarations followed by the model's own.
pub fn build_default_registry(
    config: &SiteConfig,
    declarations: &[FactoryDeclaration],
) -> FactoryRegistry {
    let markup = Arc::new(MarkdownRenderer);
    let fallback = ObjectNodeFactory::new(markup.clone())
        .render_unset_properties(config.render_unset_properties);
    let registry = FactoryRegistry::with_fallback(Arc::new(fallback));

    let mut all = config.renderers.clone();
    all.extend_from_slice(declarations);
    let plugin = BuiltinPlugin::new(all)
        .with_markup(markup)
        .render_unset_properties(config.render_unset_properties);
    let registered = registry.register_plugin(&plugin);
    debug!(
        "Registered {} renderer bindings ({} from the model)",
        registered.len(),
        declarations.len()
    );
    registry
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(docgen_core::logging::init_logging(component, to_stderr))
}

pub fn load_model(path: &Path) -> Result<JsonModel> {
    JsonModel::load(path).map_err(|e| DocgenError::model(path, e))
}

/// A loaded model resolved into its documentation tree.
pub struct Workspace {
    pub model: JsonModel,
    pub registry: FactoryRegistry,
    pub root: Arc<DocNode>,
}

pub fn open(model_path: &Path, config: &SiteConfig) -> Result<Workspace> {
    let model = load_model(model_path)?;
    let registry = build_default_registry(config, model.renderers());
    let root = registry.resolve(model.root())?;
    Ok(Workspace {
        model,
        registry,
        root,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub nodes: usize,
    pub files: usize,
}

/// Generates the site for `model_path` into `out_dir`.
pub fn generate(
    model_path: &Path,
    out_dir: &Path,
    config: SiteConfig,
    mode: WriteMode,
) -> Result<GenerateSummary> {
    let start = Instant::now();
    config.validate()?;
    let workspace = open(model_path, &config)?;
    let site = SiteGenerator::new(config).generate(&workspace.root)?;
    let files = docgen_core::write_folder(&site, out_dir, mode)?;

    let mut nodes = 0;
    workspace.root.accept(&mut |_| nodes += 1);
    info!(
        "Generated {} nodes into {} ({} files) in {:?}",
        nodes,
        out_dir.display(),
        files,
        start.elapsed()
    );
    Ok(GenerateSummary { nodes, files })
}

/// Builds the navigation index without writing anything.
pub fn build_index(model_path: &Path, config: &SiteConfig) -> Result<SiteIndex> {
    let workspace = open(model_path, config)?;
    Ok(SiteBuilder::new(config).build(&workspace.root)?.index)
}

/// One registry entry matching a queried type, closest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub distance: u64,
    pub matched_type: String,
    pub entry: String,
    pub contributor: Option<String>,
    pub selected: bool,
}

/// Explains which renderer a model type dispatches to.
pub fn explain_type(
    model_path: &Path,
    config: &SiteConfig,
    type_ref: &str,
) -> Result<Vec<MatchSummary>> {
    let model = load_model(model_path)?;
    let ty = model
        .types()
        .lookup(type_ref)
        .map_err(|e| DocgenError::model(model_path, e))?
        .ok_or_else(|| DocgenError::UnknownType(type_ref.to_string()))?;
    let registry = build_default_registry(config, model.renderers());

    let entries = registry.entries();
    let matches = registry.match_type(&*ty);
    Ok(matches
        .iter()
        .enumerate()
        .map(|(rank, m)| {
            let entry = entries.iter().find(|(id, _)| *id == m.entry).map(|(_, e)| e);
            MatchSummary {
                distance: m.distance,
                matched_type: m.matched_type.to_string(),
                entry: entry
                    .map(|e| {
                        format!(
                            "{}#{}",
                            e.namespace,
                            e.type_name.as_deref().unwrap_or("*")
                        )
                    })
                    .unwrap_or_default(),
                contributor: entry.and_then(|e| e.contributor.clone()),
                selected: rank == 0,
            }
        })
        .collect())
}
