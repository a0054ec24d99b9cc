#![doc = include_str!("../README.md")]

pub mod builder;
pub mod common;
pub mod expr;
#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;
pub mod kind;
pub mod name;
pub mod scalar;
pub mod stmt;
pub mod token;

pub use kind::NodeKind;

use common::*;
use expr::*;
use name::*;
use scalar::*;
use stmt::*;

/// A node of a parsed PHP file.
///
/// Every field holding a child is typed as [`Node`], so a tree handed over by a parser may
/// carry a child of an unexpected kind. Consumers that care about the shape of a field must
/// check it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum Node {
    Root(Root),
    Nullable(Nullable),
    Parameter(Parameter),
    Identifier(Identifier),
    Argument(Argument),
    MatchArm(MatchArm),
    Union(Union),
    Attribute(Attribute),
    AttributeGroup(AttributeGroup),
    EnumCase(EnumCase),

    StmtBreak(StmtBreak),
    StmtCase(StmtCase),
    StmtCatch(StmtCatch),
    StmtEnum(StmtEnum),
    StmtClass(StmtClass),
    StmtClassConstList(StmtClassConstList),
    StmtClassMethod(StmtClassMethod),
    StmtConstList(StmtConstList),
    StmtConstant(StmtConstant),
    StmtContinue(StmtContinue),
    StmtDeclare(StmtDeclare),
    StmtDefault(StmtDefault),
    StmtDo(StmtDo),
    StmtEcho(StmtEcho),
    StmtElse(StmtElse),
    StmtElseIf(StmtElseIf),
    StmtExpression(StmtExpression),
    StmtFinally(StmtFinally),
    StmtFor(StmtFor),
    StmtForeach(StmtForeach),
    StmtFunction(StmtFunction),
    StmtGlobal(StmtGlobal),
    StmtGoto(StmtGoto),
    StmtHaltCompiler(StmtHaltCompiler),
    StmtIf(StmtIf),
    StmtInlineHtml(StmtInlineHtml),
    StmtInterface(StmtInterface),
    StmtLabel(StmtLabel),
    StmtNamespace(StmtNamespace),
    StmtNop(StmtNop),
    StmtProperty(StmtProperty),
    StmtPropertyList(StmtPropertyList),
    StmtReturn(StmtReturn),
    StmtStatic(StmtStatic),
    StmtStaticVar(StmtStaticVar),
    StmtStmtList(StmtStmtList),
    StmtSwitch(StmtSwitch),
    StmtThrow(StmtThrow),
    StmtTrait(StmtTrait),
    StmtTraitUse(StmtTraitUse),
    StmtTraitUseAlias(StmtTraitUseAlias),
    StmtTraitUsePrecedence(StmtTraitUsePrecedence),
    StmtTry(StmtTry),
    StmtUnset(StmtUnset),
    StmtUseList(StmtUseList),
    StmtGroupUseList(StmtGroupUseList),
    StmtUse(StmtUse),
    StmtWhile(StmtWhile),

    ExprArray(ExprArray),
    ExprArrayDimFetch(ExprArrayDimFetch),
    ExprArrayItem(ExprArrayItem),
    ExprArrowFunction(ExprArrowFunction),
    ExprBrackets(ExprBrackets),
    ExprBitwiseNot(ExprBitwiseNot),
    ExprBooleanNot(ExprBooleanNot),
    ExprClassConstFetch(ExprClassConstFetch),
    ExprClone(ExprClone),
    ExprClosure(ExprClosure),
    ExprClosureUse(ExprClosureUse),
    ExprConstFetch(ExprConstFetch),
    ExprEmpty(ExprEmpty),
    ExprErrorSuppress(ExprErrorSuppress),
    ExprEval(ExprEval),
    ExprExit(ExprExit),
    ExprFunctionCall(ExprFunctionCall),
    ExprInclude(ExprInclude),
    ExprInstanceOf(ExprInstanceOf),
    ExprIsset(ExprIsset),
    ExprList(ExprList),
    ExprMethodCall(ExprMethodCall),
    ExprNullsafeMethodCall(ExprNullsafeMethodCall),
    ExprMatch(ExprMatch),
    ExprNew(ExprNew),
    ExprIncDec(ExprIncDec),
    ExprPrint(ExprPrint),
    ExprPropertyFetch(ExprPropertyFetch),
    ExprNullsafePropertyFetch(ExprNullsafePropertyFetch),
    ExprShellExec(ExprShellExec),
    ExprStaticCall(ExprStaticCall),
    ExprStaticPropertyFetch(ExprStaticPropertyFetch),
    ExprTernary(ExprTernary),
    ExprThrow(ExprThrow),
    ExprUnaryMinus(ExprUnaryMinus),
    ExprUnaryPlus(ExprUnaryPlus),
    ExprVariable(ExprVariable),
    ExprYield(ExprYield),
    ExprYieldFrom(ExprYieldFrom),
    ExprAssign(ExprAssign),
    ExprBinary(ExprBinary),
    ExprCast(ExprCast),

    ScalarDnumber(ScalarDnumber),
    ScalarEncapsed(ScalarEncapsed),
    ScalarEncapsedStringPart(ScalarEncapsedStringPart),
    ScalarEncapsedStringVar(ScalarEncapsedStringVar),
    ScalarEncapsedStringBrackets(ScalarEncapsedStringBrackets),
    ScalarHeredoc(ScalarHeredoc),
    ScalarLnumber(ScalarLnumber),
    ScalarMagicConstant(ScalarMagicConstant),
    ScalarString(ScalarString),

    Name(Name),
    NameFullyQualified(NameFullyQualified),
    NameRelative(NameRelative),
    NamePart(NamePart),
}

impl Node {
    /// Gets the kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Nullable(_) => NodeKind::Nullable,
            Node::Parameter(_) => NodeKind::Parameter,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::Argument(_) => NodeKind::Argument,
            Node::MatchArm(_) => NodeKind::MatchArm,
            Node::Union(_) => NodeKind::Union,
            Node::Attribute(_) => NodeKind::Attribute,
            Node::AttributeGroup(_) => NodeKind::AttributeGroup,
            Node::EnumCase(_) => NodeKind::EnumCase,

            Node::StmtBreak(_) => NodeKind::StmtBreak,
            Node::StmtCase(_) => NodeKind::StmtCase,
            Node::StmtCatch(_) => NodeKind::StmtCatch,
            Node::StmtEnum(_) => NodeKind::StmtEnum,
            Node::StmtClass(_) => NodeKind::StmtClass,
            Node::StmtClassConstList(_) => NodeKind::StmtClassConstList,
            Node::StmtClassMethod(_) => NodeKind::StmtClassMethod,
            Node::StmtConstList(_) => NodeKind::StmtConstList,
            Node::StmtConstant(_) => NodeKind::StmtConstant,
            Node::StmtContinue(_) => NodeKind::StmtContinue,
            Node::StmtDeclare(_) => NodeKind::StmtDeclare,
            Node::StmtDefault(_) => NodeKind::StmtDefault,
            Node::StmtDo(_) => NodeKind::StmtDo,
            Node::StmtEcho(_) => NodeKind::StmtEcho,
            Node::StmtElse(_) => NodeKind::StmtElse,
            Node::StmtElseIf(_) => NodeKind::StmtElseIf,
            Node::StmtExpression(_) => NodeKind::StmtExpression,
            Node::StmtFinally(_) => NodeKind::StmtFinally,
            Node::StmtFor(_) => NodeKind::StmtFor,
            Node::StmtForeach(_) => NodeKind::StmtForeach,
            Node::StmtFunction(_) => NodeKind::StmtFunction,
            Node::StmtGlobal(_) => NodeKind::StmtGlobal,
            Node::StmtGoto(_) => NodeKind::StmtGoto,
            Node::StmtHaltCompiler(_) => NodeKind::StmtHaltCompiler,
            Node::StmtIf(_) => NodeKind::StmtIf,
            Node::StmtInlineHtml(_) => NodeKind::StmtInlineHtml,
            Node::StmtInterface(_) => NodeKind::StmtInterface,
            Node::StmtLabel(_) => NodeKind::StmtLabel,
            Node::StmtNamespace(_) => NodeKind::StmtNamespace,
            Node::StmtNop(_) => NodeKind::StmtNop,
            Node::StmtProperty(_) => NodeKind::StmtProperty,
            Node::StmtPropertyList(_) => NodeKind::StmtPropertyList,
            Node::StmtReturn(_) => NodeKind::StmtReturn,
            Node::StmtStatic(_) => NodeKind::StmtStatic,
            Node::StmtStaticVar(_) => NodeKind::StmtStaticVar,
            Node::StmtStmtList(_) => NodeKind::StmtStmtList,
            Node::StmtSwitch(_) => NodeKind::StmtSwitch,
            Node::StmtThrow(_) => NodeKind::StmtThrow,
            Node::StmtTrait(_) => NodeKind::StmtTrait,
            Node::StmtTraitUse(_) => NodeKind::StmtTraitUse,
            Node::StmtTraitUseAlias(_) => NodeKind::StmtTraitUseAlias,
            Node::StmtTraitUsePrecedence(_) => NodeKind::StmtTraitUsePrecedence,
            Node::StmtTry(_) => NodeKind::StmtTry,
            Node::StmtUnset(_) => NodeKind::StmtUnset,
            Node::StmtUseList(_) => NodeKind::StmtUseList,
            Node::StmtGroupUseList(_) => NodeKind::StmtGroupUseList,
            Node::StmtUse(_) => NodeKind::StmtUse,
            Node::StmtWhile(_) => NodeKind::StmtWhile,

            Node::ExprArray(_) => NodeKind::ExprArray,
            Node::ExprArrayDimFetch(_) => NodeKind::ExprArrayDimFetch,
            Node::ExprArrayItem(_) => NodeKind::ExprArrayItem,
            Node::ExprArrowFunction(_) => NodeKind::ExprArrowFunction,
            Node::ExprBrackets(_) => NodeKind::ExprBrackets,
            Node::ExprBitwiseNot(_) => NodeKind::ExprBitwiseNot,
            Node::ExprBooleanNot(_) => NodeKind::ExprBooleanNot,
            Node::ExprClassConstFetch(_) => NodeKind::ExprClassConstFetch,
            Node::ExprClone(_) => NodeKind::ExprClone,
            Node::ExprClosure(_) => NodeKind::ExprClosure,
            Node::ExprClosureUse(_) => NodeKind::ExprClosureUse,
            Node::ExprConstFetch(_) => NodeKind::ExprConstFetch,
            Node::ExprEmpty(_) => NodeKind::ExprEmpty,
            Node::ExprErrorSuppress(_) => NodeKind::ExprErrorSuppress,
            Node::ExprEval(_) => NodeKind::ExprEval,
            Node::ExprExit(_) => NodeKind::ExprExit,
            Node::ExprFunctionCall(_) => NodeKind::ExprFunctionCall,
            Node::ExprInclude(include) => include.kind.kind(),
            Node::ExprInstanceOf(_) => NodeKind::ExprInstanceOf,
            Node::ExprIsset(_) => NodeKind::ExprIsset,
            Node::ExprList(_) => NodeKind::ExprList,
            Node::ExprMethodCall(_) => NodeKind::ExprMethodCall,
            Node::ExprNullsafeMethodCall(_) => NodeKind::ExprNullsafeMethodCall,
            Node::ExprMatch(_) => NodeKind::ExprMatch,
            Node::ExprNew(_) => NodeKind::ExprNew,
            Node::ExprIncDec(inc_dec) => inc_dec.op.kind(),
            Node::ExprPrint(_) => NodeKind::ExprPrint,
            Node::ExprPropertyFetch(_) => NodeKind::ExprPropertyFetch,
            Node::ExprNullsafePropertyFetch(_) => NodeKind::ExprNullsafePropertyFetch,
            Node::ExprShellExec(_) => NodeKind::ExprShellExec,
            Node::ExprStaticCall(_) => NodeKind::ExprStaticCall,
            Node::ExprStaticPropertyFetch(_) => NodeKind::ExprStaticPropertyFetch,
            Node::ExprTernary(_) => NodeKind::ExprTernary,
            Node::ExprThrow(_) => NodeKind::ExprThrow,
            Node::ExprUnaryMinus(_) => NodeKind::ExprUnaryMinus,
            Node::ExprUnaryPlus(_) => NodeKind::ExprUnaryPlus,
            Node::ExprVariable(_) => NodeKind::ExprVariable,
            Node::ExprYield(_) => NodeKind::ExprYield,
            Node::ExprYieldFrom(_) => NodeKind::ExprYieldFrom,
            Node::ExprAssign(assign) => assign.op.kind(),
            Node::ExprBinary(binary) => binary.op.kind(),
            Node::ExprCast(cast) => cast.cast.kind(),

            Node::ScalarDnumber(_) => NodeKind::ScalarDnumber,
            Node::ScalarEncapsed(_) => NodeKind::ScalarEncapsed,
            Node::ScalarEncapsedStringPart(_) => NodeKind::ScalarEncapsedStringPart,
            Node::ScalarEncapsedStringVar(_) => NodeKind::ScalarEncapsedStringVar,
            Node::ScalarEncapsedStringBrackets(_) => NodeKind::ScalarEncapsedStringBrackets,
            Node::ScalarHeredoc(_) => NodeKind::ScalarHeredoc,
            Node::ScalarLnumber(_) => NodeKind::ScalarLnumber,
            Node::ScalarMagicConstant(_) => NodeKind::ScalarMagicConstant,
            Node::ScalarString(_) => NodeKind::ScalarString,

            Node::Name(_) => NodeKind::Name,
            Node::NameFullyQualified(_) => NodeKind::NameFullyQualified,
            Node::NameRelative(_) => NodeKind::NameRelative,
            Node::NamePart(_) => NodeKind::NamePart,
        }
    }

    /// Gets the text of this node if it is an [Identifier]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Node::Identifier(Identifier { value }) => Some(value),
            _ => None,
        }
    }
}
