//! namespaced names

use crate::Node;
use itertools::Itertools;

/// An unqualified or qualified name, `Foo\Bar`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub parts: Vec<Node>,
}

/// `\Foo\Bar`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFullyQualified {
    pub parts: Vec<Node>,
}

/// `namespace\Foo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRelative {
    pub parts: Vec<Node>,
}

/// One segment of a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePart {
    pub value: String,
}

/// Joins name segments the way PHP writes them
pub fn join_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts.into_iter().join("\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn join_uses_namespace_separator() {
        assert_eq!(join_parts(["App", "Http", "Kernel"]), "App\\Http\\Kernel");
        assert_eq!(join_parts(["strlen"]), "strlen");
        assert_eq!(join_parts([]), "");
    }
}
