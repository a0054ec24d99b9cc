//! Errors raised on trees the parser should never have produced

use itertools::Itertools as _;
use phpcanon_ast::NodeKind;
use std::fmt::{Display, Formatter};

/// A structurally invalid tree was handed to the canonicalizer.
///
/// Canonicalization stops at the first malformed child. The kinds of the nodes enclosing it
/// are collected as the error propagates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct CanonicalizeError {
    kind: ErrorKind,
    /// innermost first
    enclosing: Vec<NodeKind>,
}

impl CanonicalizeError {
    /// Creates a new error with an empty path
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            enclosing: vec![],
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Kinds of the enclosing nodes, outermost first
    pub fn path(&self) -> Vec<NodeKind> {
        self.enclosing.iter().rev().copied().collect()
    }

    /// Records that this error occurred within a node of the given kind. Called once per
    /// level while unwinding, so each call adds the next outer node.
    pub fn within(mut self, kind: NodeKind) -> Self {
        self.enclosing.push(kind);
        self
    }
}

impl Display for CanonicalizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed tree: {}", self.kind)?;
        if !self.enclosing.is_empty() {
            write!(f, " (in {})", self.enclosing.iter().rev().join(" > "))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for CanonicalizeError {
    fn from(value: ErrorKind) -> Self {
        Self::new(value)
    }
}

/// [CanonicalizeError] kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("{parent}.{field} must be {expected}, got {found}")]
    MalformedChild {
        parent: NodeKind,
        field: &'static str,
        expected: &'static str,
        found: NodeKind,
    },
    #[error("{parent}.{field} must hold {expected}, got {found}")]
    ChildArity {
        parent: NodeKind,
        field: &'static str,
        expected: &'static str,
        found: usize,
    },
}

impl ErrorKind {
    pub fn malformed_child(
        parent: NodeKind,
        field: &'static str,
        expected: &'static str,
        found: NodeKind,
    ) -> Self {
        Self::MalformedChild {
            parent,
            field,
            expected,
            found,
        }
    }
}

pub type CanonicalizeResult<T> = Result<T, CanonicalizeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn path_is_outermost_first() {
        let error = CanonicalizeError::new(ErrorKind::malformed_child(
            NodeKind::StmtFunction,
            "name",
            "Identifier",
            NodeKind::ExprVariable,
        ))
        .within(NodeKind::StmtFunction)
        .within(NodeKind::Root);
        assert_eq!(error.path(), [NodeKind::Root, NodeKind::StmtFunction]);
        assert_eq!(
            error.to_string(),
            "malformed tree: StmtFunction.name must be Identifier, got ExprVariable (in Root > StmtFunction)"
        );
    }

    #[test]
    fn deep_paths_keep_their_order() {
        let kinds = [
            NodeKind::Root,
            NodeKind::StmtFunction,
            NodeKind::StmtIf,
            NodeKind::StmtWhile,
            NodeKind::StmtExpression,
            NodeKind::ExprFunctionCall,
            NodeKind::Name,
        ];
        let nested = (0..50).map(|i| kinds[i % kinds.len()]).collect::<Vec<_>>();
        let error = nested.iter().rev().fold(
            CanonicalizeError::from(ErrorKind::ChildArity {
                parent: NodeKind::Name,
                field: "parts",
                expected: "at least one child",
                found: 0,
            }),
            |error, &kind| error.within(kind),
        );
        assert_eq!(error.path(), nested);
        assert!(error
            .to_string()
            .ends_with(&format!("(in {})", nested.iter().join(" > "))));
    }

    #[test]
    fn arity_message() {
        let error = CanonicalizeError::from(ErrorKind::ChildArity {
            parent: NodeKind::Name,
            field: "parts",
            expected: "at least one child",
            found: 0,
        });
        assert!(error.path().is_empty());
        assert_eq!(
            error.to_string(),
            "malformed tree: Name.parts must hold at least one child, got 0"
        );
    }
}
