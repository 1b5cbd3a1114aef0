use crate::extract::extract_blocks;
use crate::models::{DocBlock, SourceFile};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffixes scanned when nothing else is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &[".c", ".h"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn validate_source_root(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::NotADirectory(path.to_path_buf()));
    }

    Ok(())
}

/// Whether `path`'s file name ends with one of `extensions` (exact, case-sensitive)
pub fn has_source_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    extensions.iter().any(|ext| name.ends_with(ext.as_ref()))
}

/// Read a source file, replacing invalid UTF-8 rather than failing
pub fn read_source_lossy(path: &Path) -> Result<String, IoError> {
    let bytes = fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Find every source file under `root`, in traversal order.
///
/// Entries of each directory are visited in file-name order so that repeated
/// runs over the same tree see the files in the same sequence.
pub fn scan_source_files<S: AsRef<str>>(
    root: &Path,
    extensions: &[S],
) -> Result<Vec<PathBuf>, IoError> {
    validate_source_root(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, extensions, &mut files)?;
    Ok(files)
}

/// Scan `root` and extract the documentation blocks of every source file.
pub fn scan_source_tree<S: AsRef<str>>(
    root: &Path,
    extensions: &[S],
) -> Result<Vec<SourceFile>, IoError> {
    let files = scan_source_files(root, extensions)?;

    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        let text = read_source_lossy(&path)?;
        let blocks = extract_blocks(&text);
        let relative_path = relative_to_root(&path, root);
        log::debug!("{relative_path}: {} block(s)", blocks.len());
        sources.push(SourceFile::new(relative_path, blocks));
    }

    Ok(sources)
}

/// All blocks under `root` as one ordered document.
pub fn collect_document<S: AsRef<str>>(
    root: &Path,
    extensions: &[S],
) -> Result<Vec<DocBlock>, IoError> {
    Ok(scan_source_tree(root, extensions)?
        .into_iter()
        .flat_map(SourceFile::into_blocks)
        .collect())
}

fn relative_to_root(path: &Path, root: &Path) -> RelativePathBuf {
    let relative = path.strip_prefix(root).unwrap_or(path);
    RelativePathBuf::from_path(relative)
        .unwrap_or_else(|_| RelativePathBuf::from(relative.to_string_lossy().as_ref()))
}

/// A dangling link counts as a file so that reading it fails loudly.
fn links_to_file(path: &Path) -> bool {
    fs::metadata(path).map_or(true, |meta| meta.is_file())
}

fn scan_directory_recursive<S: AsRef<str>>(
    dir: &Path,
    extensions: &[S],
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let read_error = |source| IoError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        // DirEntry::file_type does not follow symlinks, so linked
        // directories are never descended into.
        let file_type = entry.file_type().map_err(read_error)?;

        if file_type.is_dir() {
            scan_directory_recursive(&path, extensions, files)?;
        } else if has_source_extension(&path, extensions)
            && (file_type.is_file() || (file_type.is_symlink() && links_to_file(&path)))
        {
            files.push(path);
        }
    }

    Ok(())
}
