//! Renderers shipped with the core, exposed as a plugin so configuration can
//! bind them to model types by name.

use super::markdown::MarkdownRenderer;
use super::object::{ObjectNodeFactory, page_header, page_name};
use docgen_api::{
    DocNode, DocResult, GenerationContext, MarkupRenderer, NodeContent, ObjectId, ObjectRef,
};
use docgen_plugin::{
    BoxError, DocgenPlugin, FactoryDeclaration, NodeFactory, NodeResolver, PluginInfo,
};
use std::sync::Arc;

pub const BUILTIN_PLUGIN_ID: &str = "docgen.builtin";

pub const OBJECT_FACTORY: &str = "object";
pub const GROUP_FACTORY: &str = "group";
pub const MARKDOWN_FACTORY: &str = "markdown";

/// Property holding the markup rendered by the `markdown` factory.
pub const DOCUMENTATION_PROPERTY: &str = "documentation";

/// Navigation-only node: the object appears in the tree but has no page.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupNodeFactory;

impl NodeFactory for GroupNodeFactory {
    fn create_node(
        &self,
        object: &ObjectRef,
        resolver: &mut dyn NodeResolver,
    ) -> DocResult<Arc<DocNode>> {
        let node = DocNode::group(object.label(), object.icon());
        resolver.populate(&node, &object.children())?;
        Ok(node)
    }
}

/// Renders the object's documentation text as its whole page.
#[derive(Clone)]
pub struct MarkdownPageFactory {
    markup: Arc<dyn MarkupRenderer>,
}

impl MarkdownPageFactory {
    pub fn new(markup: Arc<dyn MarkupRenderer>) -> Self {
        Self { markup }
    }
}

impl Default for MarkdownPageFactory {
    fn default() -> Self {
        Self::new(Arc::new(MarkdownRenderer))
    }
}

impl NodeFactory for MarkdownPageFactory {
    fn create_node(
        &self,
        object: &ObjectRef,
        resolver: &mut dyn NodeResolver,
    ) -> DocResult<Arc<DocNode>> {
        let content = MarkdownContent {
            object: object.clone(),
            markup: self.markup.clone(),
        };
        let node = DocNode::new(object.label(), object.icon(), content);
        resolver.populate(&node, &object.children())?;
        Ok(node)
    }
}

struct MarkdownContent {
    object: ObjectRef,
    markup: Arc<dyn MarkupRenderer>,
}

impl NodeContent for MarkdownContent {
    fn object_path(&self, node: &DocNode, object: &ObjectId) -> Option<String> {
        if self.object.object_id() == *object {
            return page_name(node);
        }
        None
    }

    fn build_content(
        &self,
        node: &DocNode,
        ctx: &mut GenerationContext<'_>,
    ) -> DocResult<Option<String>> {
        let Some(name) = page_name(node) else {
            return Ok(None);
        };
        let markup = self
            .object
            .properties()
            .into_iter()
            .find(|p| p.name == DOCUMENTATION_PROPERTY)
            .and_then(|p| p.text().map(str::to_string))
            .or_else(|| self.object.model_type().documentation())
            .unwrap_or_default();

        let mut page = page_header(node, ctx).to_string();
        page.push_str(&self.markup.render(&markup));
        Ok(Some(ctx.output.add_text(name, page)))
    }
}

/// Offers the built-in factories for a configured set of declarations.
pub struct BuiltinPlugin {
    declarations: Vec<FactoryDeclaration>,
    markup: Arc<dyn MarkupRenderer>,
    render_unset: bool,
}

impl BuiltinPlugin {
    pub fn new(declarations: Vec<FactoryDeclaration>) -> Self {
        Self {
            declarations,
            markup: Arc::new(MarkdownRenderer),
            render_unset: false,
        }
    }

    pub fn with_markup(mut self, markup: Arc<dyn MarkupRenderer>) -> Self {
        self.markup = markup;
        self
    }

    pub fn render_unset_properties(mut self, render_unset: bool) -> Self {
        self.render_unset = render_unset;
        self
    }
}

impl DocgenPlugin for BuiltinPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            id: BUILTIN_PLUGIN_ID.to_string(),
            name: "Built-in renderers".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: Some("object, group and markdown page renderers".to_string()),
        }
    }

    fn declarations(&self) -> Vec<FactoryDeclaration> {
        self.declarations.clone()
    }

    fn load_factory(&self, name: &str) -> Result<Arc<dyn NodeFactory>, BoxError> {
        match name {
            OBJECT_FACTORY => Ok(Arc::new(
                ObjectNodeFactory::new(self.markup.clone())
                    .render_unset_properties(self.render_unset),
            )),
            GROUP_FACTORY => Ok(Arc::new(GroupNodeFactory)),
            MARKDOWN_FACTORY => Ok(Arc::new(MarkdownPageFactory::new(self.markup.clone()))),
            other => Err(format!("unknown built-in factory '{}'", other).into()),
        }
    }
}
