//! statements

use crate::token::Token;
use crate::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtBreak {
    pub expr: Option<Box<Node>>,
}

/// `case cond:` inside a switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtCase {
    pub cond: Box<Node>,
    pub stmts: Vec<Node>,
}

/// `catch (A|B $e) { ... }`. The variable is optional since PHP 8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtCatch {
    pub types: Vec<Node>,
    pub var: Option<Box<Node>>,
    pub stmts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtEnum {
    pub attr_groups: Vec<Node>,
    pub name: Box<Node>,
    pub ty: Option<Box<Node>>,
    pub implements: Vec<Node>,
    pub stmts: Vec<Node>,
}

/// A class declaration. Anonymous classes have no name and may have constructor args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtClass {
    pub attr_groups: Vec<Node>,
    pub modifiers: Vec<Node>,
    pub name: Option<Box<Node>>,
    pub args: Vec<Node>,
    pub extends: Option<Box<Node>>,
    pub implements: Vec<Node>,
    pub stmts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtClassConstList {
    pub attr_groups: Vec<Node>,
    pub modifiers: Vec<Node>,
    pub consts: Vec<Node>,
}

/// A method declaration. `stmt` is a statement list, or a nop for abstract methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtClassMethod {
    pub attr_groups: Vec<Node>,
    pub modifiers: Vec<Node>,
    pub function_tkn: Token,
    pub by_ref: bool,
    pub name: Box<Node>,
    pub params: Vec<Node>,
    pub return_type: Option<Box<Node>>,
    pub stmt: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtConstList {
    pub consts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtConstant {
    pub name: Box<Node>,
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtContinue {
    pub expr: Option<Box<Node>>,
}

/// `declare(strict_types=1)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtDeclare {
    pub consts: Vec<Node>,
    pub stmt: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtDefault {
    pub stmts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtDo {
    pub stmt: Box<Node>,
    pub cond: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtEcho {
    pub exprs: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtElse {
    pub stmt: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtElseIf {
    pub cond: Box<Node>,
    pub stmt: Box<Node>,
}

/// An expression used as a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtExpression {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtFinally {
    pub stmts: Vec<Node>,
}

/// `for (init; cond; step) stmt`. Each header section is a comma separated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtFor {
    pub init: Vec<Node>,
    pub cond: Vec<Node>,
    pub step: Vec<Node>,
    pub stmt: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtForeach {
    pub expr: Box<Node>,
    pub key: Option<Box<Node>>,
    pub by_ref: bool,
    pub var: Box<Node>,
    pub stmt: Box<Node>,
}

/// A function declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtFunction {
    pub attr_groups: Vec<Node>,
    pub function_tkn: Token,
    pub by_ref: bool,
    pub name: Box<Node>,
    pub params: Vec<Node>,
    pub return_type: Option<Box<Node>>,
    pub stmts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtGlobal {
    pub vars: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtGoto {
    pub label: Box<Node>,
}

/// `__halt_compiler();`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtHaltCompiler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtIf {
    pub cond: Box<Node>,
    pub stmt: Box<Node>,
    pub else_if: Vec<Node>,
    pub else_: Option<Box<Node>>,
}

/// Text outside of `<?php ... ?>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtInlineHtml {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtInterface {
    pub attr_groups: Vec<Node>,
    pub name: Box<Node>,
    pub extends: Vec<Node>,
    pub stmts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtLabel {
    pub name: Box<Node>,
}

/// `namespace Foo;` or `namespace Foo { ... }`. The global namespace block has no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtNamespace {
    pub name: Option<Box<Node>>,
    pub stmts: Vec<Node>,
}

/// An empty statement (`;`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtNop;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtProperty {
    pub var: Box<Node>,
    pub expr: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtPropertyList {
    pub attr_groups: Vec<Node>,
    pub modifiers: Vec<Node>,
    pub ty: Option<Box<Node>>,
    pub props: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtReturn {
    pub expr: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtStatic {
    pub vars: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtStaticVar {
    pub var: Box<Node>,
    pub expr: Option<Box<Node>>,
}

/// A `{ ... }` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtStmtList {
    pub stmts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtSwitch {
    pub cond: Box<Node>,
    pub cases: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtThrow {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtTrait {
    pub attr_groups: Vec<Node>,
    pub name: Box<Node>,
    pub stmts: Vec<Node>,
}

/// `use A, B { ... }` inside a class body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtTraitUse {
    pub traits: Vec<Node>,
    pub adaptations: Vec<Node>,
}

/// `A::method as protected alias;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtTraitUseAlias {
    pub trait_: Option<Box<Node>>,
    pub method: Box<Node>,
    pub modifier: Option<Box<Node>>,
    pub alias: Option<Box<Node>>,
}

/// `A::method insteadof B;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtTraitUsePrecedence {
    pub trait_: Box<Node>,
    pub method: Box<Node>,
    pub insteadof: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtTry {
    pub stmts: Vec<Node>,
    pub catches: Vec<Node>,
    pub finally: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtUnset {
    pub vars: Vec<Node>,
}

/// `use A\B, C as D;`. `ty` is the `function`/`const` qualifier, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtUseList {
    pub ty: Option<Box<Node>>,
    pub uses: Vec<Node>,
}

/// `use A\{B, C};`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtGroupUseList {
    pub ty: Option<Box<Node>>,
    pub prefix: Box<Node>,
    pub uses: Vec<Node>,
}

/// A single clause of a use list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtUse {
    pub ty: Option<Box<Node>>,
    pub use_: Box<Node>,
    pub alias: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtWhile {
    pub cond: Box<Node>,
    pub stmt: Box<Node>,
}
