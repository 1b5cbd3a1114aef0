//! Extraction of `/*- ... -*/` documentation comments.
//!
//! A documented declaration in C source looks like:
//!
//! ```c
//! /*-
//!  int add(int a, int b)
//!  Adds two integers and returns the sum.
//! -*/
//! ```
//!
//! The first non-blank line of the body is the declaration; every other
//! non-blank line is folded into a single-line description.
//!
//! ```
//! use gendoc_engine::extract::extract_blocks;
//!
//! let blocks = extract_blocks("/*- foo\nbar baz -*/");
//! assert_eq!(blocks[0].declaration(), "foo");
//! assert_eq!(blocks[0].description(), "bar baz");
//! ```

use regex::Regex;
use std::sync::OnceLock;

use crate::models::DocBlock;

pub const OPEN_MARKER: &str = "/*-";
pub const CLOSE_MARKER: &str = "-*/";

fn block_regex() -> &'static Regex {
    static BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
    // Lazy `.*?` pairs each opener with the nearest closer after it.
    BLOCK_REGEX.get_or_init(|| {
        let pattern = format!(
            "(?s){}(.*?){}",
            regex::escape(OPEN_MARKER),
            regex::escape(CLOSE_MARKER)
        );
        Regex::new(&pattern).expect("Invalid block regex")
    })
}

/// Characters that end a line inside a block body: LF, CR, the ASCII
/// vertical tab, form feed and file/group/record separators, NEL, and the
/// Unicode line and paragraph separators.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e'
            | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Find every documentation block in `text`, in order of appearance.
///
/// An opening marker with no closing marker after it matches nothing, and
/// blocks whose body is blank are skipped.
pub fn extract_blocks(text: &str) -> Vec<DocBlock> {
    block_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|body| parse_block(body.as_str()))
        .collect()
}

/// Turn the text between the markers into a [`DocBlock`].
pub fn parse_block(body: &str) -> Option<DocBlock> {
    let mut lines = body
        .split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let declaration = lines.next()?;
    let description = lines.collect::<Vec<_>>().join(" ");

    DocBlock::new(declaration, description)
}
