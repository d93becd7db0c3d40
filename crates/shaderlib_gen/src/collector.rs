//! Source Collector
//!
//! Recursively reads every file below a directory into a [`SourceTable`]
//! keyed by its `/`-separated path relative to that directory.
//!
//! Entries are visited in lexicographic file-name order. Symbolic links are
//! followed: a link to a directory is walked, anything else is read as text.

use std::fs;
use std::path::{Component, Path};

use walkdir::WalkDir;

use crate::catalog::SourceTable;
use crate::errors::{Result, ShaderLibError};

/// Reads every file under `root`.
///
/// Fails if `root` is missing, is not a directory, or any file under it cannot
/// be read as UTF-8 text.
pub fn collect_sources(root: &Path) -> Result<SourceTable> {
    let metadata = fs::metadata(root).map_err(|e| ShaderLibError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ShaderLibError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let mut table = SourceTable::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| ShaderLibError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let key = relative_key(root, path);
        let content = fs::read_to_string(path).map_err(|e| ShaderLibError::io(path, e))?;
        log::debug!("Collected \"{key}\" ({} bytes)", content.len());
        table.insert(key, content);
    }

    Ok(table)
}

/// Joins the components of `path` below `root` with `/`.
fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_collects_nested_files_with_forward_slash_keys() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "common.glsl", "// common");
        write(dir.path(), "lighting/pbr.glsl", "// pbr");
        write(dir.path(), "lighting/shadow/pcf.glsl", "// pcf");

        let table = collect_sources(dir.path()).unwrap();

        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["common.glsl", "lighting/pbr.glsl", "lighting/shadow/pcf.glsl"]
        );
        assert_eq!(table["lighting/shadow/pcf.glsl"], "// pcf");
    }

    #[test]
    fn test_empty_directory_yields_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();

        let table = collect_sources(dir.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = collect_sources(&missing).unwrap_err();
        assert!(matches!(err, ShaderLibError::Io { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_file_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "lone.glsl", "");

        let err = collect_sources(&dir.path().join("lone.glsl")).unwrap_err();
        assert!(matches!(err, ShaderLibError::Io { .. }));
    }

    #[test]
    fn test_non_utf8_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00]).unwrap();

        let err = collect_sources(dir.path()).unwrap_err();
        assert!(matches!(err, ShaderLibError::Io { ref path, .. } if path.ends_with("blob.bin")));
    }

    #[test]
    fn test_relative_key() {
        let root = PathBuf::from("shaders").join("include");
        let path = root.join("a").join("b.glsl");
        assert_eq!(relative_key(&root, &path), "a/b.glsl");
    }
}
