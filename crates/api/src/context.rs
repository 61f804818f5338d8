use crate::models::{IconRef, ObjectId};
use crate::output::OutputFolder;

/// Resolves an object to the relative path of the page documenting it.
pub trait ObjectPathResolver {
    fn object_path(&self, object: &ObjectId) -> Option<String>;
}

impl<F> ObjectPathResolver for F
where
    F: Fn(&ObjectId) -> Option<String>,
{
    fn object_path(&self, object: &ObjectId) -> Option<String> {
        self(object)
    }
}

/// Stores icon assets and hands back their relative path.
pub trait IconResolver {
    /// `None` when the icon is absent or cannot be stored.
    fn icon_path(&mut self, icon: Option<&IconRef>) -> Option<String>;
}

/// Converts documentation markup into an HTML fragment.
pub trait MarkupRenderer: Send + Sync {
    fn render(&self, markup: &str) -> String;
}

/// Shared state handed to every node while the site is generated.
pub struct GenerationContext<'a> {
    /// Folder receiving page content.
    pub output: &'a mut OutputFolder,
    pub objects: &'a dyn ObjectPathResolver,
    pub icons: &'a mut dyn IconResolver,
    /// Prefix turning a content path into a navigable viewer reference.
    pub link_prefix: &'a str,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        output: &'a mut OutputFolder,
        objects: &'a dyn ObjectPathResolver,
        icons: &'a mut dyn IconResolver,
        link_prefix: &'a str,
    ) -> Self {
        Self {
            output,
            objects,
            icons,
            link_prefix,
        }
    }

    pub fn object_path(&self, object: &ObjectId) -> Option<String> {
        self.objects.object_path(object)
    }

    /// Navigable reference to the page of `object`, if it is documented.
    pub fn link_to(&self, object: &ObjectId) -> Option<String> {
        self.object_path(object)
            .map(|path| format!("{}{}", self.link_prefix, path))
    }

    pub fn icon_path(&mut self, icon: Option<&IconRef>) -> Option<String> {
        self.icons.icon_path(icon)
    }
}
