//! Navigation index consumed by the browser-side viewer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One navigator entry. `icon` and `children` are omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteIndex {
    /// Node id to viewer route (`#` for nodes without content).
    #[serde(rename = "idMap")]
    pub id_map: IndexMap<String, String>,
    pub tree: Vec<TocEntry>,
}

impl SiteIndex {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The index as an AMD module: `define({...})`.
    pub fn to_toc_js(&self) -> serde_json::Result<String> {
        Ok(format!("define({})", self.to_json()?))
    }

    /// Icon paths referenced anywhere in the tree, without duplicates.
    pub fn icon_paths(&self) -> Vec<&str> {
        fn collect<'a>(entries: &'a [TocEntry], out: &mut Vec<&'a str>) {
            for entry in entries {
                if let Some(icon) = entry.icon.as_deref() {
                    if !out.contains(&icon) {
                        out.push(icon);
                    }
                }
                collect(&entry.children, out);
            }
        }
        let mut out = Vec::new();
        collect(&self.tree, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let mut index = SiteIndex::default();
        index
            .id_map
            .insert("0".to_string(), "#router/doc-content/0.html".to_string());
        index.id_map.insert("0-0".to_string(), "#".to_string());
        index.tree.push(TocEntry {
            text: "A".to_string(),
            icon: Some("icons/a.png".to_string()),
            id: "0".to_string(),
            children: vec![TocEntry {
                text: "B".to_string(),
                icon: None,
                id: "0-0".to_string(),
                children: Vec::new(),
            }],
        });

        assert_eq!(
            index.to_toc_js().unwrap(),
            concat!(
                r##"define({"idMap":{"0":"#router/doc-content/0.html","0-0":"#"},"##,
                r##""tree":[{"text":"A","icon":"icons/a.png","id":"0","##,
                r##""children":[{"text":"B","id":"0-0"}]}]})"##
            )
        );
    }
}
