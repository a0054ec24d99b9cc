//! Nodes shared by statements and expressions: the root, parameters, arguments, attributes

use crate::Node;

/// The root of a parsed file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Root {
    pub stmts: Vec<Node>,
}

/// `?Type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nullable {
    pub expr: Box<Node>,
}

/// A function, method or closure parameter.
///
/// `var` is an [`ExprVariable`](crate::expr::ExprVariable) in well-formed trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub attr_groups: Vec<Node>,
    pub modifiers: Vec<Node>,
    pub ty: Option<Box<Node>>,
    pub by_ref: bool,
    pub variadic: bool,
    pub var: Box<Node>,
    pub default_value: Option<Box<Node>>,
}

/// A bare identifier. Variable identifiers keep their leading `$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub value: String,
}

/// A call argument, optionally named (`name: expr`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: Option<Box<Node>>,
    pub variadic: bool,
    pub by_ref: bool,
    pub expr: Box<Node>,
}

/// One arm of a `match` expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchArm {
    pub is_default: bool,
    pub exprs: Vec<Node>,
    pub return_expr: Box<Node>,
}

/// `A|B`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    pub types: Vec<Node>,
}

/// A single attribute inside `#[...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: Box<Node>,
    pub args: Vec<Node>,
}

/// `#[A, B(1)]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeGroup {
    pub attrs: Vec<Node>,
}

/// `case Name = expr;` inside an enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    pub attr_groups: Vec<Node>,
    pub name: Box<Node>,
    pub expr: Option<Box<Node>>,
}
