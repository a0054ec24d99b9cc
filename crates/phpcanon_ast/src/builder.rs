//! Shorthand constructors for building trees by hand.
//!
//! Strings are taken as the raw source text the lexer would have produced, so a string
//! literal is written with its quotes: `string("'hi'")`.

use crate::common::{Argument, Identifier, Parameter, Root};
use crate::expr::{AssignOp, BinaryOp, ExprAssign, ExprBinary, ExprFunctionCall, ExprVariable};
use crate::name::{Name, NameFullyQualified, NamePart, NameRelative};
use crate::scalar::{
    Delimiter, ScalarDnumber, ScalarEncapsedStringPart, ScalarLnumber, ScalarString,
};
use crate::stmt::{StmtEcho, StmtExpression, StmtFunction, StmtReturn, StmtStmtList};
use crate::token::Token;
use crate::Node;

/// The root of a file
pub fn root(stmts: impl IntoIterator<Item = Node>) -> Node {
    Root {
        stmts: stmts.into_iter().collect(),
    }
    .into()
}

pub fn identifier(value: impl Into<String>) -> Node {
    Identifier {
        value: value.into(),
    }
    .into()
}

/// A plain variable. `name` includes the leading `$`.
pub fn variable(name: impl Into<String>) -> Node {
    ExprVariable {
        name: Box::new(identifier(name)),
    }
    .into()
}

fn parts<'a>(segments: impl IntoIterator<Item = &'a str>) -> Vec<Node> {
    segments
        .into_iter()
        .map(|value| {
            NamePart {
                value: value.to_string(),
            }
            .into()
        })
        .collect()
}

/// `A\B\C` from its segments
pub fn name<'a>(segments: impl IntoIterator<Item = &'a str>) -> Node {
    Name {
        parts: parts(segments),
    }
    .into()
}

/// `\A\B\C` from its segments
pub fn fully_qualified<'a>(segments: impl IntoIterator<Item = &'a str>) -> Node {
    NameFullyQualified {
        parts: parts(segments),
    }
    .into()
}

/// `namespace\A\B` from its segments
pub fn relative<'a>(segments: impl IntoIterator<Item = &'a str>) -> Node {
    NameRelative {
        parts: parts(segments),
    }
    .into()
}

pub fn string(raw: impl Into<String>) -> Node {
    ScalarString { value: raw.into() }.into()
}

/// A literal fragment of an interpolated string delimited by `delimiter`
pub fn string_part(raw: impl Into<String>, delimiter: Delimiter) -> Node {
    ScalarEncapsedStringPart {
        value: raw.into(),
        delimiter,
    }
    .into()
}

pub fn lnumber(raw: impl Into<String>) -> Node {
    ScalarLnumber { value: raw.into() }.into()
}

pub fn dnumber(raw: impl Into<String>) -> Node {
    ScalarDnumber { value: raw.into() }.into()
}

/// A parameter without type, attributes or modifiers
pub fn param(var: impl Into<String>, default_value: Option<Node>) -> Node {
    Parameter {
        attr_groups: vec![],
        modifiers: vec![],
        ty: None,
        by_ref: false,
        variadic: false,
        var: Box::new(variable(var)),
        default_value: default_value.map(Box::new),
    }
    .into()
}

/// A function declaration without attributes or return type
pub fn function(
    name: impl Into<String>,
    params: impl IntoIterator<Item = Node>,
    stmts: impl IntoIterator<Item = Node>,
) -> Node {
    StmtFunction {
        attr_groups: vec![],
        function_tkn: Token::function(),
        by_ref: false,
        name: Box::new(identifier(name)),
        params: params.into_iter().collect(),
        return_type: None,
        stmts: stmts.into_iter().collect(),
    }
    .into()
}

pub fn echo(exprs: impl IntoIterator<Item = Node>) -> Node {
    StmtEcho {
        exprs: exprs.into_iter().collect(),
    }
    .into()
}

pub fn ret(expr: Option<Node>) -> Node {
    StmtReturn {
        expr: expr.map(Box::new),
    }
    .into()
}

pub fn block(stmts: impl IntoIterator<Item = Node>) -> Node {
    StmtStmtList {
        stmts: stmts.into_iter().collect(),
    }
    .into()
}

/// An expression statement
pub fn expr_stmt(expr: Node) -> Node {
    StmtExpression {
        expr: Box::new(expr),
    }
    .into()
}

pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
    ExprBinary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
    .into()
}

pub fn assign(op: AssignOp, var: Node, expr: Node) -> Node {
    ExprAssign {
        op,
        var: Box::new(var),
        expr: Box::new(expr),
    }
    .into()
}

pub fn arg(expr: Node) -> Node {
    Argument {
        name: None,
        variadic: false,
        by_ref: false,
        expr: Box::new(expr),
    }
    .into()
}

/// `function(args...)`, wrapping each expression in an [`Argument`]
pub fn call(function: Node, args: impl IntoIterator<Item = Node>) -> Node {
    ExprFunctionCall {
        function: Box::new(function),
        args: args.into_iter().map(arg).collect(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;
    use test_log::test;

    #[test]
    fn function_with_params() {
        let node = function(
            "foo",
            [param("$a", None), param("$b", Some(string("'x'")))],
            [],
        );
        let Node::StmtFunction(function) = &node else {
            panic!("expected a function, got {node:?}");
        };
        assert_eq!(function.name.as_identifier(), Some("foo"));
        assert_eq!(function.params.len(), 2);
        assert_eq!(function.function_tkn, Token::function());
    }

    #[test]
    fn call_wraps_arguments() {
        let node = call(name(["strlen"]), [string("'abc'")]);
        let Node::ExprFunctionCall(call) = node else {
            panic!("expected a call");
        };
        assert_eq!(call.function.kind(), NodeKind::Name);
        assert!(call.args.iter().all(|arg| arg.kind() == NodeKind::Argument));
    }
}
