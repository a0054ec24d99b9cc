//! Responsible for turning syntax trees into canonical trees

use crate::error::CanonicalizeResult;
use crate::fields::child_fields;
use crate::node::CanonicalNode;
use crate::rules::{self, Extraction};
use phpcanon_ast::{Node, NodeKind};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, trace};

/// Which child fields are turned into children.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Coverage {
    /// Only the statements of the root and the default values of parameters. Every other
    /// node is reduced to its label and attributes.
    #[default]
    Reference,
    /// Every child field that was not absorbed into an attribute
    Full,
}

/// How string literal attributes are rendered
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum StringValues {
    /// Quotes removed and escape sequences resolved
    #[default]
    Decoded,
    /// The source text of the literal
    Raw,
}

/// Turns [`Node`] trees into [`CanonicalNode`] trees.
///
/// Configured using a [CanonicalizerBuilder]. The default configuration is the same as the
/// free [`canonicalize`](crate::canonicalize) function.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Canonicalizer {
    coverage: Coverage,
    string_values: StringValues,
}

impl Canonicalizer {
    /// Creates the default CanonicalizerBuilder
    #[inline]
    pub fn builder() -> CanonicalizerBuilder {
        CanonicalizerBuilder::new()
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    pub fn string_values(&self) -> StringValues {
        self.string_values
    }

    /// Canonicalizes a tree.
    ///
    /// The tree is only read. Fails on the first structurally invalid child.
    pub fn canonicalize(&self, node: &Node) -> CanonicalizeResult<CanonicalNode> {
        let canonical = self.visit(node)?;
        debug!(
            root = %node.kind(),
            nodes = canonical.count(),
            coverage = %self.coverage,
            "canonicalized tree"
        );
        Ok(canonical)
    }

    /// Canonicalizes a single node and its children, recording the node's kind in the path
    /// of any error
    pub(crate) fn visit(&self, node: &Node) -> CanonicalizeResult<CanonicalNode> {
        let kind = node.kind();
        self.visit_kind(kind, node).map_err(|e| e.within(kind))
    }

    fn visit_kind(&self, kind: NodeKind, node: &Node) -> CanonicalizeResult<CanonicalNode> {
        let Extraction {
            label,
            attributes,
            absorbed,
        } = rules::extract(self, node)?;

        let mut children = vec![];
        for field in child_fields(node) {
            if absorbed.contains(&field.name) || !self.traverses(kind, field.name) {
                continue;
            }
            for child in field.children.as_slice() {
                children.push(self.visit(child)?);
            }
        }

        let label = label.unwrap_or_else(|| kind.into());
        trace!(%kind, label, children = children.len(), "visited node");
        Ok(CanonicalNode::with_children(label, children).with_attributes(attributes))
    }

    /// Whether a field of a node of the given kind is traversed
    fn traverses(&self, kind: NodeKind, field: &str) -> bool {
        match self.coverage {
            Coverage::Full => true,
            Coverage::Reference => matches!(
                (kind, field),
                (NodeKind::Root, "stmts") | (NodeKind::Parameter, "default_value")
            ),
        }
    }
}

/// Builder for creating a [Canonicalizer] instance.
#[derive(Debug, Default)]
pub struct CanonicalizerBuilder {
    pub coverage: Coverage,
    pub string_values: StringValues,
}

impl CanonicalizerBuilder {
    /// Creates a CanonicalizerBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets which child fields are traversed
    pub fn coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Sets how string literals are rendered
    pub fn string_values(mut self, string_values: StringValues) -> Self {
        self.string_values = string_values;
        self
    }

    /// Builds a [Canonicalizer] instance from this builder
    pub fn build(self) -> Canonicalizer {
        Canonicalizer {
            coverage: self.coverage,
            string_values: self.string_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::node::AttrValue;
    use phpcanon_ast::builder::*;
    use phpcanon_ast::expr::BinaryOp;
    use phpcanon_ast::fixtures;
    use std::str::FromStr;
    use test_log::test;

    fn full() -> Canonicalizer {
        Canonicalizer::builder().coverage(Coverage::Full).build()
    }

    #[test]
    fn builder_defaults() {
        let canonicalizer = Canonicalizer::builder().build();
        assert_eq!(canonicalizer, Canonicalizer::default());
        assert_eq!(canonicalizer.coverage(), Coverage::Reference);
        assert_eq!(canonicalizer.string_values(), StringValues::Decoded);
    }

    #[test]
    fn options_parse_from_names() {
        assert_eq!(Coverage::from_str("full"), Ok(Coverage::Full));
        assert_eq!(StringValues::from_str("raw"), Ok(StringValues::Raw));
        assert_eq!(Coverage::Reference.to_string(), "reference");
        assert!(Coverage::from_str("partial").is_err());
    }

    #[test]
    fn reference_coverage_keeps_composites_opaque() {
        let tree = root([echo([string("'hi'")])]);
        let canonical = Canonicalizer::default().canonicalize(&tree).unwrap();
        assert_eq!(canonical.label(), "Root");
        assert_eq!(canonical.children().len(), 1);
        let echo = &canonical.children()[0];
        assert_eq!(echo.label(), "StmtEcho");
        assert!(echo.children().is_empty());
    }

    #[test]
    fn full_coverage_traverses_every_field() {
        let tree = root([expr_stmt(binary(
            BinaryOp::Plus,
            variable("$a"),
            lnumber("1"),
        ))]);
        let canonical = full().canonicalize(&tree).unwrap();
        let labels = canonical
            .walk()
            .map(|node| node.label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["Root", "StmtExpression", "ExprBinaryPlus", "ExprVariable", "ScalarLnumber"]
        );
        let variable = &canonical.children()[0].children()[0].children()[0];
        assert_eq!(variable.attribute("name"), Some(&AttrValue::from("$a")));
        assert!(variable.children().is_empty());
    }

    #[test]
    fn absorbed_fields_are_not_children() {
        let canonical = full()
            .canonicalize(&fixtures::sample(NodeKind::StmtFunction))
            .unwrap();
        assert_eq!(canonical.label(), "T_FUNCTION");
        let labels = canonical
            .children()
            .iter()
            .map(|node| node.label())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["Parameter", "Parameter", "StmtReturn"]);
    }

    #[test]
    fn errors_record_their_path() {
        let tree = root([expr_stmt(call(name([]), []))]);
        let error = full().canonicalize(&tree).unwrap_err();
        assert_eq!(
            error.path(),
            [
                NodeKind::Root,
                NodeKind::StmtExpression,
                NodeKind::ExprFunctionCall,
                NodeKind::Name
            ]
        );
        assert!(matches!(error.kind(), ErrorKind::ChildArity { .. }));
    }

    #[test]
    fn reference_coverage_skips_malformed_opaque_children() {
        let tree = root([expr_stmt(call(name([]), []))]);
        assert!(Canonicalizer::default().canonicalize(&tree).is_ok());
    }
}
