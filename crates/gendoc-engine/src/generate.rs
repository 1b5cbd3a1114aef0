//! The full gendoc pipeline: scan a source tree, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::{DEFAULT_EXTENSIONS, IoError, collect_document};
use crate::models::DocBlock;
use crate::render::render_html;

/// File name of the reference page, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "gendoc.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub output: PathBuf,
    pub extensions: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The page was (re)written with this many entries
    Written { path: PathBuf, entries: usize },
    /// No documentation blocks were found; nothing was written
    NothingToDo,
}

/// Write the reference page for `blocks` to `output`, replacing any previous
/// file. An empty document leaves the file system untouched.
pub fn write_reference(blocks: &[DocBlock], output: &Path) -> Result<WriteOutcome, IoError> {
    if blocks.is_empty() {
        return Ok(WriteOutcome::NothingToDo);
    }

    fs::write(output, render_html(blocks)).map_err(|source| IoError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(WriteOutcome::Written {
        path: output.to_path_buf(),
        entries: blocks.len(),
    })
}

/// Generate the reference page for every source file under `root`.
pub fn generate(root: &Path, options: &GenerateOptions) -> Result<WriteOutcome, IoError> {
    log::info!("Scanning {}", root.display());
    let blocks = collect_document(root, &options.extensions)?;

    let outcome = write_reference(&blocks, &options.output)?;
    match &outcome {
        WriteOutcome::Written { path, entries } => {
            log::info!("Wrote {entries} entries to {}", path.display());
        }
        WriteOutcome::NothingToDo => {
            log::info!("No documentation blocks found under {}", root.display());
        }
    }

    Ok(outcome)
}
