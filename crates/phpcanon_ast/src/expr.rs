//! expressions
//!
//! Expressions that only differ by their operator share one node type carrying an operator
//! enum. Each operator maps to its own [`NodeKind`].

use crate::kind::NodeKind;
use crate::token::Token;
use crate::Node;
use strum::EnumIter;

/// `[...]` or `array(...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprArray {
    pub short_syntax: bool,
    pub items: Vec<Node>,
}

/// `$var[dim]`. `dim` is absent for `$var[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprArrayDimFetch {
    pub var: Box<Node>,
    pub dim: Option<Box<Node>>,
}

/// An array or list item. `val` is absent for skipped list slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprArrayItem {
    pub unpack: bool,
    pub key: Option<Box<Node>>,
    pub by_ref: bool,
    pub val: Option<Box<Node>>,
}

/// `fn ($x) => $x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprArrowFunction {
    pub attr_groups: Vec<Node>,
    pub fn_tkn: Token,
    pub is_static: bool,
    pub by_ref: bool,
    pub params: Vec<Node>,
    pub return_type: Option<Box<Node>>,
    pub expr: Box<Node>,
}

/// A parenthesized expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprBrackets {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprBitwiseNot {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprBooleanNot {
    pub expr: Box<Node>,
}

/// `Class::CONST`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprClassConstFetch {
    pub class: Box<Node>,
    pub const_: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprClone {
    pub expr: Box<Node>,
}

/// `function ($x) use ($y) { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprClosure {
    pub attr_groups: Vec<Node>,
    pub function_tkn: Token,
    pub is_static: bool,
    pub by_ref: bool,
    pub params: Vec<Node>,
    pub uses: Vec<Node>,
    pub return_type: Option<Box<Node>>,
    pub stmts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprClosureUse {
    pub by_ref: bool,
    pub var: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprConstFetch {
    pub const_: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprEmpty {
    pub expr: Box<Node>,
}

/// `@expr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprErrorSuppress {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprEval {
    pub expr: Box<Node>,
}

/// `exit(expr)` or `die(expr)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprExit {
    pub die_tkn: Token,
    pub expr: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprFunctionCall {
    pub function: Box<Node>,
    pub args: Vec<Node>,
}

/// `include`, `include_once`, `require` and `require_once`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprInclude {
    pub kind: IncludeKind,
    pub expr: Box<Node>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum IncludeKind {
    Include,
    IncludeOnce,
    Require,
    RequireOnce,
}

impl IncludeKind {
    pub fn kind(&self) -> NodeKind {
        match self {
            IncludeKind::Include => NodeKind::ExprInclude,
            IncludeKind::IncludeOnce => NodeKind::ExprIncludeOnce,
            IncludeKind::Require => NodeKind::ExprRequire,
            IncludeKind::RequireOnce => NodeKind::ExprRequireOnce,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprInstanceOf {
    pub expr: Box<Node>,
    pub class: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprIsset {
    pub vars: Vec<Node>,
}

/// `list(...)` or `[...]` on the left side of an assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprList {
    pub short_syntax: bool,
    pub items: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprMethodCall {
    pub var: Box<Node>,
    pub method: Box<Node>,
    pub args: Vec<Node>,
}

/// `$var?->method()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprNullsafeMethodCall {
    pub var: Box<Node>,
    pub method: Box<Node>,
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprMatch {
    pub expr: Box<Node>,
    pub arms: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprNew {
    pub class: Box<Node>,
    pub args: Vec<Node>,
}

/// `++$x`, `$x++`, `--$x` and `$x--`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprIncDec {
    pub op: IncDecOp,
    pub var: Box<Node>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum IncDecOp {
    PostDec,
    PostInc,
    PreDec,
    PreInc,
}

impl IncDecOp {
    pub fn kind(&self) -> NodeKind {
        match self {
            IncDecOp::PostDec => NodeKind::ExprPostDec,
            IncDecOp::PostInc => NodeKind::ExprPostInc,
            IncDecOp::PreDec => NodeKind::ExprPreDec,
            IncDecOp::PreInc => NodeKind::ExprPreInc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprPrint {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprPropertyFetch {
    pub var: Box<Node>,
    pub prop: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprNullsafePropertyFetch {
    pub var: Box<Node>,
    pub prop: Box<Node>,
}

/// `` `cmd $arg` ``
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprShellExec {
    pub parts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStaticCall {
    pub class: Box<Node>,
    pub call: Box<Node>,
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStaticPropertyFetch {
    pub class: Box<Node>,
    pub prop: Box<Node>,
}

/// `cond ? if_true : if_false`. `if_true` is absent for `?:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprTernary {
    pub cond: Box<Node>,
    pub if_true: Option<Box<Node>>,
    pub if_false: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprThrow {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprUnaryMinus {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprUnaryPlus {
    pub expr: Box<Node>,
}

/// A variable. The name is an [`Identifier`](crate::common::Identifier) such as `$a`, or an
/// expression for variable variables (`$$a`, `${expr}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprVariable {
    pub name: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprYield {
    pub key: Option<Box<Node>>,
    pub val: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprYieldFrom {
    pub expr: Box<Node>,
}

/// Plain and compound assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprAssign {
    pub op: AssignOp,
    pub var: Box<Node>,
    pub expr: Box<Node>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `=&`
    Reference,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    /// `??=`
    Coalesce,
    /// `.=`
    Concat,
    Div,
    Minus,
    Mod,
    Mul,
    Plus,
    Pow,
    ShiftLeft,
    ShiftRight,
}

impl AssignOp {
    pub fn kind(&self) -> NodeKind {
        match self {
            AssignOp::Assign => NodeKind::ExprAssign,
            AssignOp::Reference => NodeKind::ExprAssignReference,
            AssignOp::BitwiseAnd => NodeKind::ExprAssignBitwiseAnd,
            AssignOp::BitwiseOr => NodeKind::ExprAssignBitwiseOr,
            AssignOp::BitwiseXor => NodeKind::ExprAssignBitwiseXor,
            AssignOp::Coalesce => NodeKind::ExprAssignCoalesce,
            AssignOp::Concat => NodeKind::ExprAssignConcat,
            AssignOp::Div => NodeKind::ExprAssignDiv,
            AssignOp::Minus => NodeKind::ExprAssignMinus,
            AssignOp::Mod => NodeKind::ExprAssignMod,
            AssignOp::Mul => NodeKind::ExprAssignMul,
            AssignOp::Plus => NodeKind::ExprAssignPlus,
            AssignOp::Pow => NodeKind::ExprAssignPow,
            AssignOp::ShiftLeft => NodeKind::ExprAssignShiftLeft,
            AssignOp::ShiftRight => NodeKind::ExprAssignShiftRight,
        }
    }
}

/// A binary operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprBinary {
    pub op: BinaryOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum BinaryOp {
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    /// `&&`
    BooleanAnd,
    /// `||`
    BooleanOr,
    /// `??`
    Coalesce,
    /// `.`
    Concat,
    Div,
    Equal,
    Greater,
    GreaterOrEqual,
    Identical,
    /// `and`
    LogicalAnd,
    /// `or`
    LogicalOr,
    /// `xor`
    LogicalXor,
    Minus,
    Mod,
    Mul,
    NotEqual,
    NotIdentical,
    Plus,
    Pow,
    ShiftLeft,
    ShiftRight,
    Smaller,
    SmallerOrEqual,
    /// `<=>`
    Spaceship,
}

impl BinaryOp {
    pub fn kind(&self) -> NodeKind {
        match self {
            BinaryOp::BitwiseAnd => NodeKind::ExprBinaryBitwiseAnd,
            BinaryOp::BitwiseOr => NodeKind::ExprBinaryBitwiseOr,
            BinaryOp::BitwiseXor => NodeKind::ExprBinaryBitwiseXor,
            BinaryOp::BooleanAnd => NodeKind::ExprBinaryBooleanAnd,
            BinaryOp::BooleanOr => NodeKind::ExprBinaryBooleanOr,
            BinaryOp::Coalesce => NodeKind::ExprBinaryCoalesce,
            BinaryOp::Concat => NodeKind::ExprBinaryConcat,
            BinaryOp::Div => NodeKind::ExprBinaryDiv,
            BinaryOp::Equal => NodeKind::ExprBinaryEqual,
            BinaryOp::Greater => NodeKind::ExprBinaryGreater,
            BinaryOp::GreaterOrEqual => NodeKind::ExprBinaryGreaterOrEqual,
            BinaryOp::Identical => NodeKind::ExprBinaryIdentical,
            BinaryOp::LogicalAnd => NodeKind::ExprBinaryLogicalAnd,
            BinaryOp::LogicalOr => NodeKind::ExprBinaryLogicalOr,
            BinaryOp::LogicalXor => NodeKind::ExprBinaryLogicalXor,
            BinaryOp::Minus => NodeKind::ExprBinaryMinus,
            BinaryOp::Mod => NodeKind::ExprBinaryMod,
            BinaryOp::Mul => NodeKind::ExprBinaryMul,
            BinaryOp::NotEqual => NodeKind::ExprBinaryNotEqual,
            BinaryOp::NotIdentical => NodeKind::ExprBinaryNotIdentical,
            BinaryOp::Plus => NodeKind::ExprBinaryPlus,
            BinaryOp::Pow => NodeKind::ExprBinaryPow,
            BinaryOp::ShiftLeft => NodeKind::ExprBinaryShiftLeft,
            BinaryOp::ShiftRight => NodeKind::ExprBinaryShiftRight,
            BinaryOp::Smaller => NodeKind::ExprBinarySmaller,
            BinaryOp::SmallerOrEqual => NodeKind::ExprBinarySmallerOrEqual,
            BinaryOp::Spaceship => NodeKind::ExprBinarySpaceship,
        }
    }
}

/// `(int) $x` and friends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprCast {
    pub cast: CastKind,
    pub expr: Box<Node>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum CastKind {
    Array,
    Bool,
    Double,
    Int,
    Object,
    String,
    Unset,
}

impl CastKind {
    pub fn kind(&self) -> NodeKind {
        match self {
            CastKind::Array => NodeKind::ExprCastArray,
            CastKind::Bool => NodeKind::ExprCastBool,
            CastKind::Double => NodeKind::ExprCastDouble,
            CastKind::Int => NodeKind::ExprCastInt,
            CastKind::Object => NodeKind::ExprCastObject,
            CastKind::String => NodeKind::ExprCastString,
            CastKind::Unset => NodeKind::ExprCastUnset,
        }
    }
}
