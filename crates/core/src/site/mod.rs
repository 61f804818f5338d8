//! Site generation: the walk producing pages and the navigation index, icon
//! deduplication and the viewer shell.

mod builder;
mod icons;
mod index_page;
mod toc;

pub use builder::{CONTENT_FOLDER, NO_CONTENT, ROUTER_PREFIX, SiteBuild, SiteBuilder, content_route};
pub use icons::{IconLoader, IconManager, UrlIconLoader};
pub use index_page::render_index_page;
pub use toc::{SiteIndex, TocEntry};

use crate::config::SiteConfig;
use crate::error::Result;
use docgen_api::{DocNode, OutputFolder};
use std::sync::Arc;

/// Name of the folder returned by [`SiteGenerator::generate`].
pub const SITE_FOLDER: &str = "site";

/// Produces the complete documentation folder for a documentation tree.
pub struct SiteGenerator {
    config: SiteConfig,
    loader: Arc<dyn IconLoader>,
}

impl SiteGenerator {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            loader: Arc::new(UrlIconLoader),
        }
    }

    pub fn with_loader(mut self, loader: Arc<dyn IconLoader>) -> Self {
        self.loader = loader;
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Builds the index and pages, then assembles `index.html`, `toc.js`,
    /// the content folder and (when non-empty) the icons folder.
    pub fn generate(&self, root: &Arc<DocNode>) -> Result<OutputFolder> {
        let build = SiteBuilder::new(&self.config)
            .with_loader(self.loader.clone())
            .build(root)?;

        let title = self.config.title.as_deref().unwrap_or(root.label());
        let mut site = OutputFolder::new(SITE_FOLDER);
        site.add_text(
            self.config.index_file.clone(),
            render_index_page(title, &self.config.toc_file),
        );
        site.add_text(self.config.toc_file.clone(), build.index.to_toc_js()?);
        site.add_folder(build.content);
        if !build.icons.is_empty() {
            site.add_folder(build.icons);
        }
        Ok(site)
    }
}
