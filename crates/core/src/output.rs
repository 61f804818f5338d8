//! Materializes an [`OutputFolder`] on disk.

use crate::error::{DocgenError, Result};
use docgen_api::OutputFolder;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace files that already exist.
    Overwrite,
    /// Fail before writing anything if one of the files already exists.
    #[default]
    Refuse,
}

/// Writes every file of `folder` below `dir` and returns the number of files
/// written. The folder's own name is not part of the target path.
pub fn write_folder(folder: &OutputFolder, dir: &Path, mode: WriteMode) -> Result<usize> {
    let files = folder.files();

    if mode == WriteMode::Refuse {
        if let Some(existing) = files
            .iter()
            .map(|(path, _)| dir.join(path))
            .find(|target| target.exists())
        {
            return Err(DocgenError::AlreadyExists(existing));
        }
    }

    for (path, artifact) in &files {
        let target = dir.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, artifact.as_bytes())?;
        tracing::debug!("Wrote {}", target.display());
    }

    tracing::info!("Wrote {} files to {}", files.len(), dir.display());
    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OutputFolder {
        let mut folder = OutputFolder::new("site");
        folder.add_text("index.html", "<html/>");
        folder
            .folder_mut("doc-content")
            .add_text("0.html", "<h2>Root</h2>");
        folder.folder_mut("icons").add_binary("a.png", vec![137, 80]);
        folder
    }

    #[test]
    fn test_writes_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let count = write_folder(&sample(), dir.path(), WriteMode::Refuse).unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("doc-content/0.html")).unwrap(),
            "<h2>Root</h2>"
        );
        assert_eq!(
            std::fs::read(dir.path().join("icons/a.png")).unwrap(),
            vec![137, 80]
        );
    }

    #[test]
    fn test_refuse_leaves_existing_files_untouched() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "mine").unwrap();

        let err = write_folder(&sample(), dir.path(), WriteMode::Refuse).unwrap_err();
        assert!(matches!(err, DocgenError::AlreadyExists(path) if path.ends_with("index.html")));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("index.html")).unwrap(),
            "mine"
        );
        assert!(!dir.path().join("doc-content").exists());
    }

    #[test]
    fn test_overwrite_replaces_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "mine").unwrap();

        write_folder(&sample(), dir.path(), WriteMode::Overwrite).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("index.html")).unwrap(),
            "<html/>"
        );
    }
}
