//! In-memory artifact tree filled during generation and written out afterwards.

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Text(String),
    Binary(Vec<u8>),
}

impl Artifact {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Artifact::Text(text) => text.as_bytes(),
            Artifact::Binary(bytes) => bytes,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Artifact::Text(text) => Some(text),
            Artifact::Binary(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEntry {
    File(Artifact),
    Folder(OutputFolder),
}

/// Named folder of artifacts. Entries keep registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputFolder {
    name: String,
    entries: IndexMap<String, OutputEntry>,
}

impl OutputFolder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a text file, replacing any entry of the same name.
    /// Returns the file's path relative to this folder.
    pub fn add_text(&mut self, name: impl Into<String>, content: impl Into<String>) -> String {
        self.add(name.into(), OutputEntry::File(Artifact::Text(content.into())))
    }

    pub fn add_binary(&mut self, name: impl Into<String>, content: Vec<u8>) -> String {
        self.add(name.into(), OutputEntry::File(Artifact::Binary(content)))
    }

    /// Attaches a complete sub-folder under its own name.
    pub fn add_folder(&mut self, folder: OutputFolder) -> String {
        let name = folder.name.clone();
        self.add(name, OutputEntry::Folder(folder))
    }

    /// Returns the named sub-folder, creating it when missing.
    /// A file registered under the same name is replaced.
    pub fn folder_mut(&mut self, name: &str) -> &mut OutputFolder {
        if !matches!(self.entries.get(name), Some(OutputEntry::Folder(_))) {
            self.entries
                .insert(name.to_string(), OutputEntry::Folder(OutputFolder::new(name)));
        }
        match self.entries.get_mut(name) {
            Some(OutputEntry::Folder(folder)) => folder,
            _ => unreachable!("folder entry inserted above"),
        }
    }

    pub fn get(&self, name: &str) -> Option<&OutputEntry> {
        self.entries.get(name)
    }

    /// Relative path of a previously registered entry.
    pub fn path_of(&self, name: &str) -> Option<String> {
        self.entries.contains_key(name).then(|| name.to_string())
    }

    /// Looks up a file by a `/`-separated path relative to this folder.
    pub fn file(&self, path: &str) -> Option<&Artifact> {
        let mut folder = self;
        let mut segments = path.split('/').peekable();
        while let Some(segment) = segments.next() {
            match (folder.entries.get(segment)?, segments.peek()) {
                (OutputEntry::File(artifact), None) => return Some(artifact),
                (OutputEntry::Folder(sub), Some(_)) => folder = sub,
                _ => return None,
            }
        }
        None
    }

    /// All files below this folder as `(relative path, artifact)`, depth first.
    pub fn files(&self) -> Vec<(String, &Artifact)> {
        let mut out = Vec::new();
        self.collect_files("", &mut out);
        out
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &OutputEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add(&mut self, name: String, entry: OutputEntry) -> String {
        self.entries.insert(name.clone(), entry);
        name
    }

    fn collect_files<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a Artifact)>) {
        for (name, entry) in &self.entries {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", prefix, name)
            };
            match entry {
                OutputEntry::File(artifact) => out.push((path, artifact)),
                OutputEntry::Folder(folder) => folder.collect_files(&path, out),
            }
        }
    }
}
