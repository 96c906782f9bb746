//! Nested text blocks
//!
//! A [`Block`] is a header, an opening delimiter, a body of lines or child
//! blocks, and a closing delimiter. Rendering indents the body one level
//! deeper than the header, which keeps bracing and indentation consistent
//! across every section of a Jenkinsfile.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use std::fmt;

/// Indentation added per nesting level
pub const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Line(String),
    Block(Block),
}

/// A delimited block of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    header: String,
    open: &'static str,
    close: &'static str,
    separator: &'static str,
    items: Vec<Item>,
}

impl Block {
    /// `header {` ... `}`
    pub fn braced(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            open: " {",
            close: "}",
            separator: "",
            items: Vec::new(),
        }
    }

    /// `name(` ... `)` with comma-separated arguments, one per line
    pub fn call(name: impl Into<String>) -> Self {
        Self {
            header: name.into(),
            open: "(",
            close: ")",
            separator: ",",
            items: Vec::new(),
        }
    }

    /// Appends a body line. Embedded newlines are kept verbatim.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.items.push(Item::Line(text.into()));
        self
    }

    /// Appends several body lines
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items
            .extend(lines.into_iter().map(|l| Item::Line(l.into())));
        self
    }

    /// Appends a nested block
    pub fn child(mut self, block: Block) -> Self {
        self.items.push(Item::Block(block));
        self
    }

    /// Appends several nested blocks
    pub fn children(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.items.extend(blocks.into_iter().map(Item::Block));
        self
    }

    /// Returns true if the body is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the block with its header at `level`, without trailing newline
    pub fn render(&self, level: usize) -> String {
        let mut out = Vec::new();
        self.render_into(level, &mut out);
        out.join("\n")
    }

    fn render_into(&self, level: usize, out: &mut Vec<String>) {
        let pad = INDENT.repeat(level);
        out.push(format!("{pad}{}{}", self.header, self.open));

        let last = self.items.len().saturating_sub(1);
        for (i, item) in self.items.iter().enumerate() {
            let separator = if i < last { self.separator } else { "" };
            match item {
                Item::Line(text) => out.push(format!("{pad}{INDENT}{text}{separator}")),
                Item::Block(block) => {
                    block.render_into(level + 1, out);
                    if let Some(closing) = out.last_mut() {
                        closing.push_str(separator);
                    }
                }
            }
        }

        out.push(format!("{pad}{}", self.close));
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_braced_block() {
        let block = Block::braced("steps").line("checkout scm").line("sh 'make'");
        assert_eq!(block.to_string(), "steps {\n    checkout scm\n    sh 'make'\n}");
    }

    #[test]
    fn test_empty_block() {
        let block = Block::braced("steps");
        assert!(block.is_empty());
        assert_eq!(block.render(1), "    steps {\n    }");
    }

    #[test]
    fn test_call_block_separators() {
        let block = Block::call("string")
            .line("name: 'TAG'")
            .line("defaultValue: ''");
        assert_eq!(
            block.render(2),
            "        string(\n            name: 'TAG',\n            defaultValue: ''\n        )"
        );
    }

    #[test]
    fn test_nested_blocks_indent() {
        let block = Block::braced("stage('Deploy')")
            .child(Block::braced("when").line("branch 'main'"))
            .child(Block::braced("steps").lines(["sh 'deploy'"]));
        let expected = "\
stage('Deploy') {
    when {
        branch 'main'
    }
    steps {
        sh 'deploy'
    }
}";
        assert_eq!(block.to_string(), expected);
    }

    #[test]
    fn test_multiline_line_is_verbatim() {
        let block = Block::braced("steps").line("script {\n    echo 'x'\n}");
        assert_eq!(
            block.to_string(),
            "steps {\n    script {\n    echo 'x'\n}\n}"
        );
    }

    #[test]
    fn test_call_separator_after_child_block() {
        let block = Block::call("outer")
            .child(Block::braced("a"))
            .child(Block::braced("b"));
        assert_eq!(block.to_string(), "outer(\n    a {\n    },\n    b {\n    }\n)");
    }
}
