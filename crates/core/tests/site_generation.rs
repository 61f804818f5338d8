mod common;

use common::{NS, TestObject, file_icon, ty};
use docgen_api::{
    DocError, DocNode, DocResult, GenerationContext, NodeContent, ObjectRef, PropertyDescriptor,
    PropertyValue,
};
use docgen_core::registry::FactoryEntry;
use docgen_core::render::GroupNodeFactory;
use docgen_core::site::{CONTENT_FOLDER, ROUTER_PREFIX, SiteBuilder, SiteGenerator, content_route};
use docgen_core::{DocgenError, ErrorReport, FactoryRegistry, SiteConfig};
use docgen_plugin::{NodeFactory, NodeResolver};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Model -> [A, B -> [C, D]]
fn sample_model() -> ObjectRef {
    let model = ty("Model", vec![]);
    let element = ty("Element", vec![]);
    TestObject::new("root", &model, "Root")
        .child(TestObject::new("a", &element, "A"))
        .child(
            TestObject::new("b", &element, "B")
                .child(TestObject::new("c", &element, "C"))
                .child(TestObject::new("d", &element, "D")),
        )
        .into_ref()
}

#[test]
fn test_index_ids_follow_tree_positions() {
    let registry = FactoryRegistry::new();
    let root = registry.resolve(&sample_model()).unwrap();
    let build = SiteBuilder::new(&SiteConfig::default()).build(&root).unwrap();

    let keys: Vec<&str> = build.index.id_map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["0", "1", "1-0", "1-1"]);
    assert_eq!(build.index.id_map["1-0"], "#router/doc-content/1-0.html");

    assert_eq!(build.index.tree.len(), 2);
    assert_eq!(build.index.tree[0].text, "A");
    assert!(build.index.tree[0].children.is_empty());
    let b = &build.index.tree[1];
    assert_eq!(b.id, "1");
    let child_ids: Vec<&str> = b.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(child_ids, vec!["1-0", "1-1"]);

    // Root is not part of the index and gets no page.
    assert!(build.content.file("1-1.html").is_some());
    assert_eq!(build.content.files().len(), 4);
}

#[test]
fn test_group_nodes_map_to_no_content() {
    let registry = FactoryRegistry::new();
    registry.register(FactoryEntry::new(
        NS,
        Some("Element"),
        Arc::new(GroupNodeFactory),
    ));
    let root = registry.resolve(&sample_model()).unwrap();
    let build = SiteBuilder::new(&SiteConfig::default()).build(&root).unwrap();

    assert_eq!(build.index.id_map.len(), 4);
    assert!(build.index.id_map.values().all(|route| route == "#"));
    assert!(build.content.is_empty());
}

#[test]
fn test_cross_references_link_to_target_page() {
    let element = ty("Element", vec![]);
    let model = TestObject::new("root", &ty("Model", vec![]), "Root")
        .child(
            TestObject::new("a", &element, "A").property(PropertyDescriptor::new(
                "target",
                PropertyValue::Reference {
                    target: "c".into(),
                    label: "C".to_string(),
                },
            )),
        )
        .child(TestObject::new("b", &element, "B").child(TestObject::new("c", &element, "C")))
        .into_ref();

    let root = FactoryRegistry::new().resolve(&model).unwrap();
    let build = SiteBuilder::new(&SiteConfig::default()).build(&root).unwrap();

    let page = build.content.file("0.html").and_then(|a| a.as_text()).unwrap();
    assert!(page.contains(r##"<a href="#router/doc-content/1-0.html">C</a>"##));
}

#[test]
fn test_shared_icon_is_stored_once() {
    let dir = tempfile::tempdir().unwrap();
    let icon = file_icon(dir.path(), "x", "element.png", b"png");
    let element = ty("Element", vec![]);
    let model = TestObject::new("root", &ty("Model", vec![]), "Root")
        .child(TestObject::new("a", &element, "A").icon(icon.clone()))
        .child(TestObject::new("b", &element, "B").icon(icon))
        .into_ref();

    let root = FactoryRegistry::new().resolve(&model).unwrap();
    let build = SiteBuilder::new(&SiteConfig::default()).build(&root).unwrap();

    assert_eq!(build.icons.len(), 1);
    assert_eq!(build.index.tree[0].icon.as_deref(), Some("icons/element.png"));
    assert_eq!(build.index.tree[0].icon, build.index.tree[1].icon);
    assert_eq!(
        build.icons.file("element.png").map(|a| a.as_bytes().to_vec()),
        Some(b"png".to_vec())
    );
}

#[test]
fn test_distinct_icons_with_same_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let first = file_icon(dir.path(), "x", "node.png", b"one");
    let second = file_icon(dir.path(), "y", "node.png", b"two");
    let element = ty("Element", vec![]);
    let model = TestObject::new("root", &ty("Model", vec![]), "Root")
        .child(TestObject::new("a", &element, "A").icon(first))
        .child(TestObject::new("b", &element, "B").icon(second))
        .into_ref();

    let root = FactoryRegistry::new().resolve(&model).unwrap();
    let build = SiteBuilder::new(&SiteConfig::default()).build(&root).unwrap();

    assert_eq!(build.index.tree[0].icon.as_deref(), Some("icons/node.png"));
    assert_eq!(build.index.tree[1].icon.as_deref(), Some("icons/node-1.png"));
    assert_eq!(
        build.icons.file("node-1.png").map(|a| a.as_bytes().to_vec()),
        Some(b"two".to_vec())
    );
}

#[test]
fn test_missing_icon_does_not_abort_build() {
    let dir = tempfile::tempdir().unwrap();
    let missing = docgen_api::IconRef::Url(
        url::Url::from_file_path(dir.path().join("gone.png")).unwrap(),
    );
    let element = ty("Element", vec![]);
    let model = TestObject::new("root", &ty("Model", vec![]), "Root")
        .child(TestObject::new("a", &element, "A").icon(missing))
        .into_ref();

    let root = FactoryRegistry::new().resolve(&model).unwrap();
    let build = SiteBuilder::new(&SiteConfig::default()).build(&root).unwrap();

    assert!(build.index.tree[0].icon.is_none());
    assert!(build.icons.is_empty());
}

struct FailingContent;

impl NodeContent for FailingContent {
    fn build_content(
        &self,
        _node: &DocNode,
        _ctx: &mut GenerationContext<'_>,
    ) -> DocResult<Option<String>> {
        Err(DocError::Internal("template missing".to_string()))
    }
}

struct FailingFactory;

impl NodeFactory for FailingFactory {
    fn create_node(
        &self,
        object: &ObjectRef,
        _resolver: &mut dyn NodeResolver,
    ) -> DocResult<Arc<DocNode>> {
        Ok(DocNode::new(object.label(), None, FailingContent))
    }
}

struct CountingContent(Arc<AtomicUsize>);

impl NodeContent for CountingContent {
    fn build_content(
        &self,
        _node: &DocNode,
        _ctx: &mut GenerationContext<'_>,
    ) -> DocResult<Option<String>> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

struct CountingFactory(Arc<AtomicUsize>);

impl NodeFactory for CountingFactory {
    fn create_node(
        &self,
        object: &ObjectRef,
        _resolver: &mut dyn NodeResolver,
    ) -> DocResult<Arc<DocNode>> {
        Ok(DocNode::new(
            object.label(),
            None,
            CountingContent(self.0.clone()),
        ))
    }
}

#[test]
fn test_content_failure_aborts_walk_with_causal_chain() {
    let visited = Arc::new(AtomicUsize::new(0));
    let registry = FactoryRegistry::new();
    registry.register(FactoryEntry::new(NS, Some("Bad"), Arc::new(FailingFactory)));
    registry.register(FactoryEntry::new(
        NS,
        Some("Element"),
        Arc::new(CountingFactory(visited.clone())),
    ));

    let element = ty("Element", vec![]);
    let model = TestObject::new("root", &ty("Model", vec![]), "Root")
        .child(TestObject::new("a", &element, "A"))
        .child(TestObject::new("bad", &ty("Bad", vec![]), "Broken"))
        .child(TestObject::new("c", &element, "C"))
        .into_ref();

    let root = registry.resolve(&model).unwrap();
    let err: DocgenError = SiteGenerator::new(SiteConfig::default())
        .generate(&root)
        .unwrap_err();

    assert_eq!(visited.load(Ordering::SeqCst), 1);
    let report = ErrorReport::new(&err);
    assert_eq!(
        report.message(),
        "content generation failed for node 'Broken' (1)"
    );
    assert_eq!(report.causes(), ["Internal error: template missing".to_string()]);
}

#[test]
fn test_generated_site_layout() {
    let root = FactoryRegistry::new().resolve(&sample_model()).unwrap();
    let site = SiteGenerator::new(SiteConfig::default())
        .generate(&root)
        .unwrap();

    let names: Vec<&str> = site.entries().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["index.html", "toc.js", CONTENT_FOLDER]);

    let toc = site.file("toc.js").and_then(|a| a.as_text()).unwrap();
    assert!(toc.starts_with(r##"define({"idMap":{"0":"#router/doc-content/0.html""##));
    assert!(toc.ends_with("})"));

    let index = site.file("index.html").and_then(|a| a.as_text()).unwrap();
    assert!(index.contains("<title>Root</title>"));
    assert!(site.file("doc-content/1-0.html").is_some());
}

#[test]
fn test_config_title() {
    let config = SiteConfig {
        title: Some("Library".to_string()),
        ..Default::default()
    };
    let root = FactoryRegistry::new().resolve(&sample_model()).unwrap();
    let site = SiteGenerator::new(config).generate(&root).unwrap();

    let index = site.file("index.html").and_then(|a| a.as_text()).unwrap();
    assert!(index.contains("<title>Library</title>"));
}

#[test]
fn test_every_route_points_at_a_generated_page() {
    let registry = FactoryRegistry::new();
    let build = SiteBuilder::new(&SiteConfig::default())
        .build(&registry.resolve(&sample_model()).unwrap())
        .unwrap();
    let site = SiteGenerator::new(SiteConfig::default())
        .generate(&registry.resolve(&sample_model()).unwrap())
        .unwrap();

    let index = site.file("index.html").and_then(|a| a.as_text()).unwrap();
    assert!(index.contains(&format!("var routePrefix = \"{}\";", ROUTER_PREFIX)));

    for (id, route) in &build.index.id_map {
        let page = route
            .strip_prefix(ROUTER_PREFIX)
            .unwrap_or_else(|| panic!("route of {} is not routable: {}", id, route));
        assert!(page.starts_with(CONTENT_FOLDER));
        assert!(site.file(page).is_some(), "missing page {}", page);
        assert_eq!(route, &content_route(&format!("{}.html", id)));
    }
}
