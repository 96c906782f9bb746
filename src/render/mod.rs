//! Text rendering of pipeline configurations

pub mod block;
pub mod jenkinsfile;

pub use block::{Block, INDENT};
pub use jenkinsfile::{JenkinsfileBuilder, build, build_strict};

/// Groovy single-quoted string literal.
///
/// Names, choices, defaults and descriptions go through here and are not
/// inserted verbatim: `\\` and `'` are always escaped so the literal holds
/// exactly `value` (`a\nb` renders as `'a\\nb'`). Steps, guards, post actions
/// and environment values stay verbatim.
pub(crate) fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes_backslash_and_quote() {
        assert_eq!(quote("plain"), "'plain'");
        assert_eq!(quote("it's"), r"'it\'s'");
        assert_eq!(quote(r"C:\dir\"), r"'C:\\dir\\'");
        assert_eq!(quote(r"a\nb"), r"'a\\nb'");
    }
}
