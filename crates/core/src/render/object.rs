//! Generic object renderer.
//!
//! Used for every object no registered factory claims. Label, icon and
//! children come straight from the introspection layer; the page shows the
//! object's type and role followed by its properties.

use super::html::{Tag, escape_html};
use super::markdown::MarkdownRenderer;
use docgen_api::{
    DocNode, DocResult, GenerationContext, MarkupRenderer, NodeContent, ObjectId, ObjectRef,
    PropertyDescriptor, PropertyValue,
};
use docgen_plugin::{NodeFactory, NodeResolver};
use std::collections::BTreeMap;
use std::sync::Arc;

const GENERAL_CATEGORY: &str = "General";

/// Page file name of a node: `<id>.html`.
pub fn page_name(node: &DocNode) -> Option<String> {
    node.id().map(|id| format!("{}.html", id))
}

#[derive(Clone)]
pub struct ObjectNodeFactory {
    markup: Arc<dyn MarkupRenderer>,
    render_unset: bool,
}

impl ObjectNodeFactory {
    pub fn new(markup: Arc<dyn MarkupRenderer>) -> Self {
        Self {
            markup,
            render_unset: false,
        }
    }

    /// Also render properties still holding their default value.
    pub fn render_unset_properties(mut self, render_unset: bool) -> Self {
        self.render_unset = render_unset;
        self
    }
}

impl Default for ObjectNodeFactory {
    fn default() -> Self {
        Self::new(Arc::new(MarkdownRenderer))
    }
}

impl NodeFactory for ObjectNodeFactory {
    fn create_node(
        &self,
        object: &ObjectRef,
        resolver: &mut dyn NodeResolver,
    ) -> DocResult<Arc<DocNode>> {
        let content = ObjectContent {
            object: object.clone(),
            markup: self.markup.clone(),
            render_unset: self.render_unset,
        };
        let node = DocNode::new(object.label(), object.icon(), content);
        resolver.populate(&node, &object.children())?;
        Ok(node)
    }
}

pub struct ObjectContent {
    object: ObjectRef,
    markup: Arc<dyn MarkupRenderer>,
    render_unset: bool,
}

impl NodeContent for ObjectContent {
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
        let page = self.render_page(node, ctx);
        Ok(Some(ctx.output.add_text(name, page)))
    }
}

impl ObjectContent {
    fn render_page(&self, node: &DocNode, ctx: &mut GenerationContext<'_>) -> String {
        let mut page = page_header(node, ctx).to_string();
        page.push_str(&self.render_summary().to_string());

        let mut uncategorized = Vec::new();
        let mut categories: BTreeMap<String, Vec<PropertyDescriptor>> = BTreeMap::new();
        for property in self.object.properties() {
            if !(property.is_set || self.render_unset) {
                continue;
            }
            match property.category.as_deref().map(str::trim) {
                Some(category) if !category.is_empty() => categories
                    .entry(category.to_string())
                    .or_default()
                    .push(property),
                _ => uncategorized.push(property),
            }
        }

        if categories.is_empty() {
            for property in &uncategorized {
                page.push_str(&self.render_property(property, ctx));
            }
            return page;
        }

        let mut sections = Vec::new();
        let general: String = uncategorized
            .iter()
            .map(|p| self.render_property(p, ctx))
            .collect();
        if !general.is_empty() {
            sections.push((GENERAL_CATEGORY.to_string(), general));
        }
        for (category, properties) in &categories {
            let body: String = properties
                .iter()
                .map(|p| self.render_property(p, ctx))
                .collect();
            sections.push((category.clone(), body));
        }
        for (title, body) in sections {
            let section = Tag::new("section")
                .attr("class", "property-category")
                .child(Tag::new("h3").text(&title))
                .html(body);
            page.push_str(&section.to_string());
        }
        page
    }

    /// Type and containment role of the object.
    fn render_summary(&self) -> Tag {
        let ty = self.object.model_type();
        let mut table = Tag::new("table").attr("class", "table").child(summary_row(
            "Type",
            ty.name(),
            self.documentation(ty.documentation()),
        ));
        if let Some(role) = self.object.role() {
            table = table.child(summary_row(
                "Role",
                &role.name,
                self.documentation(role.documentation),
            ));
        }
        table
    }

    fn render_property(&self, property: &PropertyDescriptor, ctx: &GenerationContext<'_>) -> String {
        if property.value.is_empty() && !self.render_unset {
            return String::new();
        }
        let mut fragment = Tag::new("h3").text(&property.display_name).to_string();
        if let Some(description) = self.documentation(property.description.clone()) {
            fragment.push_str(
                &Tag::new("div")
                    .attr("class", "well well-sm")
                    .child(Tag::new("small").html(description))
                    .to_string(),
            );
        }
        match &property.value {
            PropertyValue::Many(values) if property.is_many => {
                let list = values.iter().fold(
                    Tag::new("ul").attr("class", "list-group"),
                    |list, value| {
                        list.child(
                            Tag::new("li")
                                .attr("class", "list-group-item")
                                .html(render_value(value, ctx)),
                        )
                    },
                );
                fragment.push_str(&list.to_string());
            }
            value => {
                let div = Tag::new("div")
                    .child(Tag::new("b").text("Value:"))
                    .text(" ")
                    .html(render_value(value, ctx));
                fragment.push_str(&div.to_string());
            }
        }
        fragment
    }

    fn documentation(&self, markup: Option<String>) -> Option<String> {
        markup
            .filter(|m| !m.trim().is_empty())
            .map(|m| self.markup.render(&m))
    }
}

/// `<h2>` with the node's icon (when it could be stored) and label.
pub fn page_header(node: &DocNode, ctx: &mut GenerationContext<'_>) -> Tag {
    let header = Tag::new("h2");
    match ctx.icon_path(node.icon()) {
        Some(icon) => header
            .child(Tag::new("img").attr("src", icon))
            .text(" ")
            .text(node.label()),
        None => header.text(node.label()),
    }
}

fn summary_row(title: &str, value: &str, documentation: Option<String>) -> Tag {
    Tag::new("tr")
        .child(Tag::new("td").child(Tag::new("b").text(title)))
        .child(Tag::new("td").text(value))
        .child(Tag::new("td").html(documentation.unwrap_or_default()))
}

fn render_value(value: &PropertyValue, ctx: &GenerationContext<'_>) -> String {
    match value {
        PropertyValue::Empty => String::new(),
        PropertyValue::Text(text) => Tag::new("div")
            .attr("style", "white-space: pre")
            .text(text)
            .to_string(),
        PropertyValue::Reference { target, label } => match ctx.link_to(target) {
            Some(href) => Tag::new("a").attr("href", href).text(label).to_string(),
            None => escape_html(label),
        },
        PropertyValue::Many(values) => values
            .iter()
            .map(|v| render_value(v, ctx))
            .collect::<Vec<_>>()
            .join(", "),
    }
}
