pub mod doc_block;
pub mod source_file;

pub use doc_block::DocBlock;
pub use source_file::SourceFile;
