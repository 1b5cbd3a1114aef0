use relative_path::{RelativePath, RelativePathBuf};

use crate::models::DocBlock;

/// A scanned source file and the blocks found in it, in order of appearance
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    relative_path: RelativePathBuf,
    blocks: Vec<DocBlock>,
}

impl SourceFile {
    pub fn new(relative_path: RelativePathBuf, blocks: Vec<DocBlock>) -> Self {
        Self {
            relative_path,
            blocks,
        }
    }

    /// Path of the file relative to the scan root
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn blocks(&self) -> &[DocBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<DocBlock> {
        self.blocks
    }
}
