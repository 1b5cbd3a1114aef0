//! HTML rendering of the reference page.
//!
//! Every entry becomes one line of a `<pre>` block, with the declarations
//! padded so that the `//` comment column lines up.

use std::borrow::Cow;

use crate::models::DocBlock;

pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<style>
body { font-family: monospace; }
</style>
</head>
<body>
<pre><code>
"#;

pub const HTML_FOOTER: &str = "</code></pre>\n</body>\n</html>\n";

/// Width of the declaration column: the longest declaration as written to the
/// page (after escaping), in characters.
pub fn declaration_column_width(blocks: &[DocBlock]) -> usize {
    blocks
        .iter()
        .map(|block| escape(block.declaration()).chars().count())
        .max()
        .unwrap_or(0)
}

/// Render a single entry line, without the trailing newline.
pub fn render_entry(block: &DocBlock, width: usize) -> String {
    format!(
        "{:<width$}  // {}",
        escape(block.declaration()),
        escape(block.description())
    )
}

/// Render the complete reference page.
pub fn render_html(blocks: &[DocBlock]) -> String {
    let width = declaration_column_width(blocks);

    let mut html = String::from(HTML_HEADER);
    for block in blocks {
        html.push_str(&render_entry(block, width));
        html.push('\n');
    }
    html.push_str(HTML_FOOTER);
    html
}

fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(declaration: &str, description: &str) -> DocBlock {
        DocBlock::new(declaration, description).unwrap()
    }

    fn entry_lines(html: &str) -> Vec<&str> {
        let body = html
            .strip_prefix(HTML_HEADER)
            .and_then(|rest| rest.strip_suffix(HTML_FOOTER))
            .unwrap();
        body.lines().collect()
    }

    #[test]
    fn test_render_page_snapshot() {
        let blocks = vec![
            block("int add(int a, int b)", "Adds two integers."),
            block("void reset(void)", "Clears all state."),
        ];

        insta::assert_snapshot!(render_html(&blocks).trim_end(), @r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
        <meta charset="UTF-8">
        <style>
        body { font-family: monospace; }
        </style>
        </head>
        <body>
        <pre><code>
        int add(int a, int b)  // Adds two integers.
        void reset(void)       // Clears all state.
        </code></pre>
        </body>
        </html>
        "#);
    }

    #[test]
    fn test_empty_description_leaves_trailing_space() {
        let blocks = vec![block("a", ""), block("b", "c")];
        let html = render_html(&blocks);

        assert_eq!(entry_lines(&html), vec!["a  // ", "b  // c"]);
    }

    #[test]
    fn test_comment_markers_share_a_column() {
        let blocks = vec![
            block("x", "short"),
            block("const char *name(void)", "longest"),
            block("int n", ""),
        ];
        let html = render_html(&blocks);

        let width = declaration_column_width(&blocks);
        assert_eq!(width, 22);
        for line in entry_lines(&html) {
            assert_eq!(line.find("//"), Some(width + 2), "misaligned: {line:?}");
        }
    }

    #[test]
    fn test_entries_keep_input_order() {
        let blocks = vec![block("zeta", ""), block("alpha", ""), block("mid", "")];
        let html = render_html(&blocks);

        let decls: Vec<_> = entry_lines(&html)
            .iter()
            .map(|line| line.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(decls, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_markup_is_escaped_and_padded_as_written() {
        let blocks = vec![
            block("int lt(int a, int b)", "True when a < b & b > 0."),
            block("T *<generic>", ""),
        ];
        let html = render_html(&blocks);

        assert_eq!(
            entry_lines(&html),
            vec![
                "int lt(int a, int b)  // True when a &lt; b &amp; b &gt; 0.",
                "T *&lt;generic&gt;    // ",
            ]
        );
    }

    #[test]
    fn test_escaped_declarations_keep_markers_aligned() {
        let blocks = vec![block("int f(void)", "plain"), block("int a<b", "lt")];
        let html = render_html(&blocks);

        assert_eq!(declaration_column_width(&blocks), 11);
        for line in entry_lines(&html) {
            assert_eq!(line.find("//"), Some(13), "misaligned: {line:?}");
        }
    }

    #[test]
    fn test_escaped_declaration_can_set_the_column_width() {
        let blocks = vec![block("a && b", "and"), block("int longer", "")];
        let html = render_html(&blocks);

        // "a &amp;&amp; b" is 14 characters once escaped
        assert_eq!(declaration_column_width(&blocks), 14);
        assert_eq!(
            entry_lines(&html),
            vec!["a &amp;&amp; b  // and", "int longer      // "]
        );
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let blocks = vec![block("naïve()", ""), block("f()", "")];
        let html = render_html(&blocks);

        assert_eq!(declaration_column_width(&blocks), 7);
        assert_eq!(entry_lines(&html), vec!["naïve()  // ", "f()      // "]);
    }

    #[test]
    fn test_render_empty_document() {
        assert_eq!(render_html(&[]), format!("{HTML_HEADER}{HTML_FOOTER}"));
    }
}
