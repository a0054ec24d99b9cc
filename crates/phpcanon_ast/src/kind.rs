//! The closed set of syntax node kinds

use strum::{AsRefStr, Display, EnumCount, EnumIter, IntoStaticStr};

/// The kind of a syntax node.
///
/// Kinds are finer grained than [`Node`](crate::Node) variants: operator families such as
/// [`ExprBinary`](crate::expr::ExprBinary) carry one kind per operator. The rendered form of
/// a kind is its name, e.g. `StmtFunction` or `ExprBinaryPlus`.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
pub enum NodeKind {
    Root,
    Nullable,
    Parameter,
    Identifier,
    Argument,
    MatchArm,
    Union,
    Attribute,
    AttributeGroup,
    EnumCase,

    StmtBreak,
    StmtCase,
    StmtCatch,
    StmtEnum,
    StmtClass,
    StmtClassConstList,
    StmtClassMethod,
    StmtConstList,
    StmtConstant,
    StmtContinue,
    StmtDeclare,
    StmtDefault,
    StmtDo,
    StmtEcho,
    StmtElse,
    StmtElseIf,
    StmtExpression,
    StmtFinally,
    StmtFor,
    StmtForeach,
    StmtFunction,
    StmtGlobal,
    StmtGoto,
    StmtHaltCompiler,
    StmtIf,
    StmtInlineHtml,
    StmtInterface,
    StmtLabel,
    StmtNamespace,
    StmtNop,
    StmtProperty,
    StmtPropertyList,
    StmtReturn,
    StmtStatic,
    StmtStaticVar,
    StmtStmtList,
    StmtSwitch,
    StmtThrow,
    StmtTrait,
    StmtTraitUse,
    StmtTraitUseAlias,
    StmtTraitUsePrecedence,
    StmtTry,
    StmtUnset,
    StmtUseList,
    StmtGroupUseList,
    StmtUse,
    StmtWhile,

    ExprArray,
    ExprArrayDimFetch,
    ExprArrayItem,
    ExprArrowFunction,
    ExprBrackets,
    ExprBitwiseNot,
    ExprBooleanNot,
    ExprClassConstFetch,
    ExprClone,
    ExprClosure,
    ExprClosureUse,
    ExprConstFetch,
    ExprEmpty,
    ExprErrorSuppress,
    ExprEval,
    ExprExit,
    ExprFunctionCall,
    ExprInclude,
    ExprIncludeOnce,
    ExprInstanceOf,
    ExprIsset,
    ExprList,
    ExprMethodCall,
    ExprNullsafeMethodCall,
    ExprMatch,
    ExprNew,
    ExprPostDec,
    ExprPostInc,
    ExprPreDec,
    ExprPreInc,
    ExprPrint,
    ExprPropertyFetch,
    ExprNullsafePropertyFetch,
    ExprRequire,
    ExprRequireOnce,
    ExprShellExec,
    ExprStaticCall,
    ExprStaticPropertyFetch,
    ExprTernary,
    ExprThrow,
    ExprUnaryMinus,
    ExprUnaryPlus,
    ExprVariable,
    ExprYield,
    ExprYieldFrom,

    ExprAssign,
    ExprAssignReference,
    ExprAssignBitwiseAnd,
    ExprAssignBitwiseOr,
    ExprAssignBitwiseXor,
    ExprAssignCoalesce,
    ExprAssignConcat,
    ExprAssignDiv,
    ExprAssignMinus,
    ExprAssignMod,
    ExprAssignMul,
    ExprAssignPlus,
    ExprAssignPow,
    ExprAssignShiftLeft,
    ExprAssignShiftRight,

    ExprBinaryBitwiseAnd,
    ExprBinaryBitwiseOr,
    ExprBinaryBitwiseXor,
    ExprBinaryBooleanAnd,
    ExprBinaryBooleanOr,
    ExprBinaryCoalesce,
    ExprBinaryConcat,
    ExprBinaryDiv,
    ExprBinaryEqual,
    ExprBinaryGreater,
    ExprBinaryGreaterOrEqual,
    ExprBinaryIdentical,
    ExprBinaryLogicalAnd,
    ExprBinaryLogicalOr,
    ExprBinaryLogicalXor,
    ExprBinaryMinus,
    ExprBinaryMod,
    ExprBinaryMul,
    ExprBinaryNotEqual,
    ExprBinaryNotIdentical,
    ExprBinaryPlus,
    ExprBinaryPow,
    ExprBinaryShiftLeft,
    ExprBinaryShiftRight,
    ExprBinarySmaller,
    ExprBinarySmallerOrEqual,
    ExprBinarySpaceship,

    ExprCastArray,
    ExprCastBool,
    ExprCastDouble,
    ExprCastInt,
    ExprCastObject,
    ExprCastString,
    ExprCastUnset,

    ScalarDnumber,
    ScalarEncapsed,
    ScalarEncapsedStringPart,
    ScalarEncapsedStringVar,
    ScalarEncapsedStringBrackets,
    ScalarHeredoc,
    ScalarLnumber,
    ScalarMagicConstant,
    ScalarString,

    Name,
    NameFullyQualified,
    NameRelative,
    NamePart,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;
    use test_log::test;

    #[test]
    fn kind_names_are_unique() {
        let names = NodeKind::iter()
            .map(|kind| kind.to_string())
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), NodeKind::COUNT);
    }

    #[test]
    fn display_is_the_kind_name() {
        assert_eq!(NodeKind::StmtFunction.to_string(), "StmtFunction");
        assert_eq!(NodeKind::ExprBinarySpaceship.as_ref(), "ExprBinarySpaceship");
    }
}
