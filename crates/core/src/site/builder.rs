use super::icons::{IconLoader, IconManager, UrlIconLoader};
use super::toc::{SiteIndex, TocEntry};
use crate::config::SiteConfig;
use docgen_api::{DocError, DocNode, DocResult, GenerationContext, ObjectId, OutputFolder};
use indexmap::IndexMap;
use std::sync::Arc;

/// Folder holding the generated pages, relative to the site root.
pub const CONTENT_FOLDER: &str = "doc-content";

/// Hash prefix the viewer shell routes on.
pub const ROUTER_PREFIX: &str = "#router/";

/// `idMap` value of a node without a page.
pub const NO_CONTENT: &str = "#";

/// Viewer route of a page inside [`CONTENT_FOLDER`], e.g. `#router/doc-content/1-0.html`.
pub fn content_route(path: &str) -> String {
    format!("{}{}", content_route_prefix(), path)
}

fn content_route_prefix() -> String {
    format!("{}{}/", ROUTER_PREFIX, CONTENT_FOLDER)
}

/// Everything produced by one walk over a documentation tree.
#[derive(Debug)]
pub struct SiteBuild {
    pub index: SiteIndex,
    pub content: OutputFolder,
    pub icons: OutputFolder,
}

/// Walks a documentation tree once, generating content pages and the
/// navigation index.
pub struct SiteBuilder {
    icons_folder: String,
    loader: Arc<dyn IconLoader>,
}

impl SiteBuilder {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            icons_folder: config.icons_folder.clone(),
            loader: Arc::new(UrlIconLoader),
        }
    }

    pub fn with_loader(mut self, loader: Arc<dyn IconLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Builds the index for the children of `root`; the root itself is not
    /// part of the tree. Stops at the first content failure.
    pub fn build(&self, root: &Arc<DocNode>) -> DocResult<SiteBuild> {
        let mut content = OutputFolder::new(CONTENT_FOLDER);
        let mut icons = IconManager::new(self.icons_folder.clone(), self.loader.clone());
        let objects = |object: &ObjectId| root.object_path(object);
        let mut index = SiteIndex::default();
        let link_prefix = content_route_prefix();

        {
            let mut ctx = GenerationContext::new(&mut content, &objects, &mut icons, &link_prefix);
            for child in root.children() {
                let entry = self.visit(&child, &mut ctx, &mut index.id_map)?;
                index.tree.push(entry);
            }
        }

        tracing::info!(
            "Built site index: {} nodes, {} pages, {} icons",
            index.id_map.len(),
            content.files().len(),
            icons.folder().len()
        );
        Ok(SiteBuild {
            index,
            content,
            icons: icons.into_folder(),
        })
    }

    fn visit(
        &self,
        node: &DocNode,
        ctx: &mut GenerationContext<'_>,
        id_map: &mut IndexMap<String, String>,
    ) -> DocResult<TocEntry> {
        let id = node
            .id()
            .ok_or_else(|| DocError::Internal(format!("node '{}' has no id", node.label())))?;

        let icon = ctx.icon_path(node.icon());
        let path = node
            .build_content(ctx)
            .map_err(|e| DocError::content(node.label(), Some(id.clone()), e))?;
        let route = match path {
            Some(path) => content_route(&path),
            None => NO_CONTENT.to_string(),
        };
        tracing::debug!("Node {} '{}' -> {}", id, node.label(), route);
        id_map.insert(id.clone(), route);

        let mut children = Vec::new();
        for child in node.children() {
            children.push(self.visit(&child, ctx, id_map)?);
        }

        Ok(TocEntry {
            text: node.label().to_string(),
            icon,
            id,
            children,
        })
    }
}
