//! Icon asset deduplication.
//!
//! Every distinct icon reference is fetched at most once per build and stored
//! under a unique file name in the icons folder. Nodes sharing an icon share
//! the asset path.

use docgen_api::{BoxError, IconRef, IconResolver, OutputFolder};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use url::Url;

/// Fetches icon bytes and proposes a file name for them.
pub trait IconLoader: Send + Sync {
    /// `None` when the reference is not something that can be fetched.
    fn candidate_name(&self, icon: &IconRef) -> Option<String>;

    fn load(&self, icon: &IconRef) -> Result<Vec<u8>, BoxError>;
}

/// Reads `file:` URLs. Other schemes and symbolic icons have no asset.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlIconLoader;

impl IconLoader for UrlIconLoader {
    fn candidate_name(&self, icon: &IconRef) -> Option<String> {
        match icon {
            IconRef::Url(url) => last_segment(url),
            IconRef::Symbolic(_) => None,
        }
    }

    fn load(&self, icon: &IconRef) -> Result<Vec<u8>, BoxError> {
        let IconRef::Url(url) = icon else {
            return Err(format!("symbolic icon '{}' has no content", icon).into());
        };
        if url.scheme() != "file" {
            return Err(format!("unsupported icon scheme '{}'", url.scheme()).into());
        }
        let path = url
            .to_file_path()
            .map_err(|_| format!("not a local file: {}", url))?;
        Ok(std::fs::read(path)?)
    }
}

/// Decoded last path segment, so the stored file has the name a browser
/// requests for the link. Decoded separators cannot leave the icons folder.
fn last_segment(url: &Url) -> Option<String> {
    let segment = url
        .path_segments()?
        .rev()
        .find(|segment| !segment.is_empty())?;
    let decoded = urlencoding::decode(segment)
        .map(|name| name.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    let name = decoded.replace(['/', '\\'], "_");
    match name.trim() {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}

/// Per-build icon store.
pub struct IconManager {
    loader: Arc<dyn IconLoader>,
    folder: OutputFolder,
    paths: HashMap<IconRef, Option<String>>,
    names: HashSet<String>,
    counter: u64,
}

impl IconManager {
    pub fn new(folder: impl Into<String>, loader: Arc<dyn IconLoader>) -> Self {
        Self {
            loader,
            folder: OutputFolder::new(folder),
            paths: HashMap::new(),
            names: HashSet::new(),
            counter: 0,
        }
    }

    pub fn folder(&self) -> &OutputFolder {
        &self.folder
    }

    pub fn into_folder(self) -> OutputFolder {
        self.folder
    }

    fn store(&mut self, icon: &IconRef) -> Option<String> {
        let candidate = self.loader.candidate_name(icon)?;
        let bytes = match self.loader.load(icon) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to load icon {}: {}", icon, e);
                return None;
            }
        };

        let name = self.claim(candidate);
        let stored = self.folder.add_binary(name, bytes);
        tracing::debug!("Stored icon {} as {}", icon, stored);
        Some(format!("{}/{}", self.folder.name(), stored))
    }

    /// Reserves `candidate`, or `<stem>-<n><ext>` with the first free
    /// base-36 counter when another icon already owns it.
    fn claim(&mut self, candidate: String) -> String {
        if self.names.insert(candidate.clone()) {
            return candidate;
        }
        let (stem, ext) = match candidate.rfind('.') {
            Some(dot) if dot > 0 => candidate.split_at(dot),
            _ => (candidate.as_str(), ""),
        };
        loop {
            self.counter += 1;
            let name = format!("{}-{}{}", stem, to_base36(self.counter), ext);
            if self.names.insert(name.clone()) {
                return name;
            }
        }
    }
}

impl IconResolver for IconManager {
    fn icon_path(&mut self, icon: Option<&IconRef>) -> Option<String> {
        let icon = icon?;
        if let Some(path) = self.paths.get(icon) {
            return path.clone();
        }
        let path = self.store(icon);
        self.paths.insert(icon.clone(), path.clone());
        path
    }
}

pub(crate) fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
