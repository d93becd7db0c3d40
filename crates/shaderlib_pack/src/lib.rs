//! # shaderlib_pack
//!
//! Packs an asset directory into a deflate-compressed zip archive.
//!
//! Entry names are relative to the input directory, use `/` separators and
//! are written in lexicographic order, so packing the same tree twice yields
//! the same entry list.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Error, Debug)]
pub enum PackageError {
    /// The input directory does not exist.
    #[error("Failed to package assets from \"{}\": Directory not found!", .0.display())]
    InputNotFound(PathBuf),

    /// File I/O error.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal error.
    #[error("Failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Archive encoding error.
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Alias for `Result<T, PackageError>`.
pub type Result<T> = std::result::Result<T, PackageError>;

/// What [`package_directory`] wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackageSummary {
    pub files: usize,
    pub directories: usize,
}

/// Writes a zip archive of everything under `input` to `output`.
///
/// The output's parent directory is created if needed and an existing
/// archive at `output` is replaced.
pub fn package_directory(input: &Path, output: &Path) -> Result<PackageSummary> {
    if !input.is_dir() {
        return Err(PackageError::InputNotFound(input.to_path_buf()));
    }

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| PackageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    if output.exists() {
        fs::remove_file(output).map_err(|source| PackageError::Io {
            path: output.to_path_buf(),
            source,
        })?;
    }

    log::info!("Packaging asset folder \"{}\"", input.display());

    let file = File::create(output).map_err(|source| PackageError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut summary = PackageSummary::default();

    for entry in WalkDir::new(input).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| PackageError::Walk {
            root: input.to_path_buf(),
            source,
        })?;
        let name = entry_name(input, entry.path());

        if entry.file_type().is_dir() {
            zip.add_directory(name.as_str(), options)?;
            summary.directories += 1;
            continue;
        }

        zip.start_file(name.as_str(), options)?;
        let mut source = File::open(entry.path()).map_err(|source| PackageError::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;
        io::copy(&mut source, &mut zip).map_err(|source| PackageError::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;
        log::debug!("Packed \"{name}\"");
        summary.files += 1;
    }

    zip.finish()?;
    log::info!("Packed assets to \"{}\"", output.display());
    Ok(summary)
}

fn entry_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
