//! One well-formed sample node per [`NodeKind`], for tests that must cover the whole kind set.

use crate::builder::*;
use crate::common::*;
use crate::expr::*;
use crate::name::NamePart;
use crate::scalar::*;
use crate::stmt::*;
use crate::token::Token;
use crate::{Node, NodeKind};
use strum::IntoEnumIterator;

fn boxed(node: Node) -> Box<Node> {
    Box::new(node)
}

fn one() -> Node {
    lnumber("1")
}

fn attr_group() -> Node {
    AttributeGroup {
        attrs: vec![Attribute {
            name: boxed(name(["Deprecated"])),
            args: vec![],
        }
        .into()],
    }
    .into()
}

fn assign_op(op: AssignOp) -> Node {
    assign(op, variable("$a"), one())
}

fn binary_op(op: BinaryOp) -> Node {
    binary(op, variable("$a"), variable("$b"))
}

fn cast(cast: CastKind) -> Node {
    ExprCast {
        cast,
        expr: boxed(variable("$a")),
    }
    .into()
}

fn inc_dec(op: IncDecOp) -> Node {
    ExprIncDec {
        op,
        var: boxed(variable("$i")),
    }
    .into()
}

fn include(kind: IncludeKind) -> Node {
    ExprInclude {
        kind,
        expr: boxed(string("'file.php'")),
    }
    .into()
}

/// Every kind paired with its sample, in kind order
pub fn all() -> impl Iterator<Item = (NodeKind, Node)> {
    NodeKind::iter().map(|kind| (kind, sample(kind)))
}

/// A small well-formed node of the given kind, with its children filled in where the kind has
/// any
pub fn sample(kind: NodeKind) -> Node {
    match kind {
        NodeKind::Root => root([echo([string("'hi'")])]),
        NodeKind::Nullable => Nullable {
            expr: boxed(identifier("int")),
        }
        .into(),
        NodeKind::Parameter => Parameter {
            attr_groups: vec![],
            modifiers: vec![],
            ty: Some(boxed(identifier("int"))),
            by_ref: true,
            variadic: false,
            var: boxed(variable("$a")),
            default_value: Some(boxed(one())),
        }
        .into(),
        NodeKind::Identifier => identifier("foo"),
        NodeKind::Argument => Argument {
            name: Some(boxed(identifier("length"))),
            variadic: true,
            by_ref: false,
            expr: boxed(variable("$args")),
        }
        .into(),
        NodeKind::MatchArm => MatchArm {
            is_default: false,
            exprs: vec![one(), lnumber("2")],
            return_expr: boxed(string("'small'")),
        }
        .into(),
        NodeKind::Union => Union {
            types: vec![identifier("int"), identifier("string")],
        }
        .into(),
        NodeKind::Attribute => Attribute {
            name: boxed(name(["Route"])),
            args: vec![arg(string("'/home'"))],
        }
        .into(),
        NodeKind::AttributeGroup => attr_group(),
        NodeKind::EnumCase => EnumCase {
            attr_groups: vec![],
            name: boxed(identifier("Hearts")),
            expr: Some(boxed(string("'H'"))),
        }
        .into(),

        NodeKind::StmtBreak => StmtBreak {
            expr: Some(boxed(lnumber("2"))),
        }
        .into(),
        NodeKind::StmtCase => StmtCase {
            cond: boxed(one()),
            stmts: vec![StmtBreak { expr: None }.into()],
        }
        .into(),
        NodeKind::StmtCatch => StmtCatch {
            types: vec![name(["Exception"])],
            var: Some(boxed(variable("$e"))),
            stmts: vec![],
        }
        .into(),
        NodeKind::StmtEnum => StmtEnum {
            attr_groups: vec![],
            name: boxed(identifier("Suit")),
            ty: Some(boxed(identifier("string"))),
            implements: vec![],
            stmts: vec![sample(NodeKind::EnumCase)],
        }
        .into(),
        NodeKind::StmtClass => StmtClass {
            attr_groups: vec![attr_group()],
            modifiers: vec![identifier("final")],
            name: Some(boxed(identifier("Foo"))),
            args: vec![],
            extends: Some(boxed(name(["Base"]))),
            implements: vec![fully_qualified(["Countable"])],
            stmts: vec![sample(NodeKind::StmtClassMethod)],
        }
        .into(),
        NodeKind::StmtClassConstList => StmtClassConstList {
            attr_groups: vec![],
            modifiers: vec![identifier("public")],
            consts: vec![sample(NodeKind::StmtConstant)],
        }
        .into(),
        NodeKind::StmtClassMethod => StmtClassMethod {
            attr_groups: vec![],
            modifiers: vec![identifier("public")],
            function_tkn: Token::function(),
            by_ref: false,
            name: boxed(identifier("count")),
            params: vec![],
            return_type: Some(boxed(identifier("int"))),
            stmt: boxed(block([ret(Some(one()))])),
        }
        .into(),
        NodeKind::StmtConstList => StmtConstList {
            consts: vec![sample(NodeKind::StmtConstant)],
        }
        .into(),
        NodeKind::StmtConstant => StmtConstant {
            name: boxed(identifier("ANSWER")),
            expr: boxed(lnumber("42")),
        }
        .into(),
        NodeKind::StmtContinue => StmtContinue {
            expr: Some(boxed(lnumber("2"))),
        }
        .into(),
        NodeKind::StmtDeclare => StmtDeclare {
            consts: vec![StmtConstant {
                name: boxed(identifier("strict_types")),
                expr: boxed(one()),
            }
            .into()],
            stmt: boxed(StmtNop.into()),
        }
        .into(),
        NodeKind::StmtDefault => StmtDefault {
            stmts: vec![StmtBreak { expr: None }.into()],
        }
        .into(),
        NodeKind::StmtDo => StmtDo {
            stmt: boxed(block([])),
            cond: boxed(variable("$more")),
        }
        .into(),
        NodeKind::StmtEcho => echo([string("'a'"), variable("$b")]),
        NodeKind::StmtElse => StmtElse {
            stmt: boxed(block([])),
        }
        .into(),
        NodeKind::StmtElseIf => StmtElseIf {
            cond: boxed(variable("$b")),
            stmt: boxed(block([])),
        }
        .into(),
        NodeKind::StmtExpression => expr_stmt(call(name(["f"]), [])),
        NodeKind::StmtFinally => StmtFinally {
            stmts: vec![expr_stmt(call(name(["cleanup"]), []))],
        }
        .into(),
        NodeKind::StmtFor => StmtFor {
            init: vec![assign(AssignOp::Assign, variable("$i"), lnumber("0"))],
            cond: vec![binary(BinaryOp::Smaller, variable("$i"), lnumber("10"))],
            step: vec![inc_dec(IncDecOp::PostInc)],
            stmt: boxed(block([])),
        }
        .into(),
        NodeKind::StmtForeach => StmtForeach {
            expr: boxed(variable("$items")),
            key: Some(boxed(variable("$k"))),
            by_ref: true,
            var: boxed(variable("$v")),
            stmt: boxed(block([])),
        }
        .into(),
        NodeKind::StmtFunction => function(
            "foo",
            [param("$a", None), param("$b", Some(string("'x'")))],
            [ret(Some(variable("$a")))],
        ),
        NodeKind::StmtGlobal => StmtGlobal {
            vars: vec![variable("$config")],
        }
        .into(),
        NodeKind::StmtGoto => StmtGoto {
            label: boxed(identifier("end")),
        }
        .into(),
        NodeKind::StmtHaltCompiler => StmtHaltCompiler.into(),
        NodeKind::StmtIf => StmtIf {
            cond: boxed(variable("$a")),
            stmt: boxed(block([])),
            else_if: vec![sample(NodeKind::StmtElseIf)],
            else_: Some(boxed(sample(NodeKind::StmtElse))),
        }
        .into(),
        NodeKind::StmtInlineHtml => StmtInlineHtml {
            value: "<p>hello</p>\n".to_string(),
        }
        .into(),
        NodeKind::StmtInterface => StmtInterface {
            attr_groups: vec![],
            name: boxed(identifier("Shape")),
            extends: vec![name(["Countable"])],
            stmts: vec![],
        }
        .into(),
        NodeKind::StmtLabel => StmtLabel {
            name: boxed(identifier("end")),
        }
        .into(),
        NodeKind::StmtNamespace => StmtNamespace {
            name: Some(boxed(name(["App", "Http"]))),
            stmts: vec![],
        }
        .into(),
        NodeKind::StmtNop => StmtNop.into(),
        NodeKind::StmtProperty => StmtProperty {
            var: boxed(variable("$count")),
            expr: Some(boxed(lnumber("0"))),
        }
        .into(),
        NodeKind::StmtPropertyList => StmtPropertyList {
            attr_groups: vec![],
            modifiers: vec![identifier("private")],
            ty: Some(boxed(identifier("int"))),
            props: vec![sample(NodeKind::StmtProperty)],
        }
        .into(),
        NodeKind::StmtReturn => ret(Some(one())),
        NodeKind::StmtStatic => StmtStatic {
            vars: vec![sample(NodeKind::StmtStaticVar)],
        }
        .into(),
        NodeKind::StmtStaticVar => StmtStaticVar {
            var: boxed(variable("$calls")),
            expr: Some(boxed(lnumber("0"))),
        }
        .into(),
        NodeKind::StmtStmtList => block([echo([one()])]),
        NodeKind::StmtSwitch => StmtSwitch {
            cond: boxed(variable("$x")),
            cases: vec![sample(NodeKind::StmtCase), sample(NodeKind::StmtDefault)],
        }
        .into(),
        NodeKind::StmtThrow => StmtThrow {
            expr: boxed(sample(NodeKind::ExprNew)),
        }
        .into(),
        NodeKind::StmtTrait => StmtTrait {
            attr_groups: vec![],
            name: boxed(identifier("Greets")),
            stmts: vec![],
        }
        .into(),
        NodeKind::StmtTraitUse => StmtTraitUse {
            traits: vec![name(["A"]), name(["B"])],
            adaptations: vec![
                sample(NodeKind::StmtTraitUsePrecedence),
                sample(NodeKind::StmtTraitUseAlias),
            ],
        }
        .into(),
        NodeKind::StmtTraitUseAlias => StmtTraitUseAlias {
            trait_: Some(boxed(name(["B"]))),
            method: boxed(identifier("hello")),
            modifier: Some(boxed(identifier("protected"))),
            alias: Some(boxed(identifier("greet"))),
        }
        .into(),
        NodeKind::StmtTraitUsePrecedence => StmtTraitUsePrecedence {
            trait_: boxed(name(["A"])),
            method: boxed(identifier("hello")),
            insteadof: vec![name(["B"])],
        }
        .into(),
        NodeKind::StmtTry => StmtTry {
            stmts: vec![expr_stmt(call(name(["risky"]), []))],
            catches: vec![sample(NodeKind::StmtCatch)],
            finally: Some(boxed(sample(NodeKind::StmtFinally))),
        }
        .into(),
        NodeKind::StmtUnset => StmtUnset {
            vars: vec![variable("$tmp")],
        }
        .into(),
        NodeKind::StmtUseList => StmtUseList {
            ty: None,
            uses: vec![sample(NodeKind::StmtUse)],
        }
        .into(),
        NodeKind::StmtGroupUseList => StmtGroupUseList {
            ty: Some(boxed(identifier("function"))),
            prefix: boxed(name(["App", "Support"])),
            uses: vec![StmtUse {
                ty: None,
                use_: boxed(name(["helper"])),
                alias: None,
            }
            .into()],
        }
        .into(),
        NodeKind::StmtUse => StmtUse {
            ty: None,
            use_: boxed(name(["App", "Models", "User"])),
            alias: Some(boxed(identifier("Account"))),
        }
        .into(),
        NodeKind::StmtWhile => StmtWhile {
            cond: boxed(variable("$running")),
            stmt: boxed(block([])),
        }
        .into(),

        NodeKind::ExprArray => ExprArray {
            short_syntax: true,
            items: vec![sample(NodeKind::ExprArrayItem)],
        }
        .into(),
        NodeKind::ExprArrayDimFetch => ExprArrayDimFetch {
            var: boxed(variable("$a")),
            dim: Some(boxed(lnumber("0"))),
        }
        .into(),
        NodeKind::ExprArrayItem => ExprArrayItem {
            unpack: false,
            key: Some(boxed(string("'k'"))),
            by_ref: true,
            val: Some(boxed(variable("$v"))),
        }
        .into(),
        NodeKind::ExprArrowFunction => ExprArrowFunction {
            attr_groups: vec![],
            fn_tkn: Token::arrow_fn(),
            is_static: true,
            by_ref: false,
            params: vec![param("$x", None)],
            return_type: None,
            expr: boxed(binary(BinaryOp::Mul, variable("$x"), lnumber("2"))),
        }
        .into(),
        NodeKind::ExprBrackets => ExprBrackets {
            expr: boxed(variable("$a")),
        }
        .into(),
        NodeKind::ExprBitwiseNot => ExprBitwiseNot {
            expr: boxed(variable("$a")),
        }
        .into(),
        NodeKind::ExprBooleanNot => ExprBooleanNot {
            expr: boxed(variable("$a")),
        }
        .into(),
        NodeKind::ExprClassConstFetch => ExprClassConstFetch {
            class: boxed(name(["Suit"])),
            const_: boxed(identifier("Hearts")),
        }
        .into(),
        NodeKind::ExprClone => ExprClone {
            expr: boxed(variable("$a")),
        }
        .into(),
        NodeKind::ExprClosure => ExprClosure {
            attr_groups: vec![],
            function_tkn: Token::function(),
            is_static: false,
            by_ref: true,
            params: vec![param("$x", Some(lnumber("0")))],
            uses: vec![sample(NodeKind::ExprClosureUse)],
            return_type: None,
            stmts: vec![ret(Some(variable("$x")))],
        }
        .into(),
        NodeKind::ExprClosureUse => ExprClosureUse {
            by_ref: true,
            var: boxed(variable("$total")),
        }
        .into(),
        NodeKind::ExprConstFetch => ExprConstFetch {
            const_: boxed(name(["PHP_EOL"])),
        }
        .into(),
        NodeKind::ExprEmpty => ExprEmpty {
            expr: boxed(variable("$a")),
        }
        .into(),
        NodeKind::ExprErrorSuppress => ExprErrorSuppress {
            expr: boxed(call(name(["fopen"]), [string("'x'")])),
        }
        .into(),
        NodeKind::ExprEval => ExprEval {
            expr: boxed(string("'return 1;'")),
        }
        .into(),
        NodeKind::ExprExit => ExprExit {
            die_tkn: Token::exit("die"),
            expr: Some(boxed(string("'bye'"))),
        }
        .into(),
        NodeKind::ExprFunctionCall => call(name(["strlen"]), [variable("$s")]),
        NodeKind::ExprInclude => include(IncludeKind::Include),
        NodeKind::ExprIncludeOnce => include(IncludeKind::IncludeOnce),
        NodeKind::ExprInstanceOf => ExprInstanceOf {
            expr: boxed(variable("$a")),
            class: boxed(name(["Countable"])),
        }
        .into(),
        NodeKind::ExprIsset => ExprIsset {
            vars: vec![variable("$a"), variable("$b")],
        }
        .into(),
        NodeKind::ExprList => ExprList {
            short_syntax: false,
            items: vec![
                ExprArrayItem {
                    unpack: false,
                    key: None,
                    by_ref: false,
                    val: Some(boxed(variable("$first"))),
                }
                .into(),
                ExprArrayItem {
                    unpack: false,
                    key: None,
                    by_ref: false,
                    val: None,
                }
                .into(),
            ],
        }
        .into(),
        NodeKind::ExprMethodCall => ExprMethodCall {
            var: boxed(variable("$this")),
            method: boxed(identifier("run")),
            args: vec![arg(one())],
        }
        .into(),
        NodeKind::ExprNullsafeMethodCall => ExprNullsafeMethodCall {
            var: boxed(variable("$user")),
            method: boxed(identifier("getName")),
            args: vec![],
        }
        .into(),
        NodeKind::ExprMatch => ExprMatch {
            expr: boxed(variable("$n")),
            arms: vec![
                sample(NodeKind::MatchArm),
                MatchArm {
                    is_default: true,
                    exprs: vec![],
                    return_expr: boxed(string("'large'")),
                }
                .into(),
            ],
        }
        .into(),
        NodeKind::ExprNew => ExprNew {
            class: boxed(name(["Exception"])),
            args: vec![arg(string("'oops'"))],
        }
        .into(),
        NodeKind::ExprPostDec => inc_dec(IncDecOp::PostDec),
        NodeKind::ExprPostInc => inc_dec(IncDecOp::PostInc),
        NodeKind::ExprPreDec => inc_dec(IncDecOp::PreDec),
        NodeKind::ExprPreInc => inc_dec(IncDecOp::PreInc),
        NodeKind::ExprPrint => ExprPrint {
            expr: boxed(string("'hi'")),
        }
        .into(),
        NodeKind::ExprPropertyFetch => ExprPropertyFetch {
            var: boxed(variable("$this")),
            prop: boxed(identifier("count")),
        }
        .into(),
        NodeKind::ExprNullsafePropertyFetch => ExprNullsafePropertyFetch {
            var: boxed(variable("$user")),
            prop: boxed(identifier("name")),
        }
        .into(),
        NodeKind::ExprRequire => include(IncludeKind::Require),
        NodeKind::ExprRequireOnce => include(IncludeKind::RequireOnce),
        NodeKind::ExprShellExec => ExprShellExec {
            parts: vec![
                string_part("ls ", Delimiter::Backtick),
                variable("$dir"),
            ],
        }
        .into(),
        NodeKind::ExprStaticCall => ExprStaticCall {
            class: boxed(name(["Carbon"])),
            call: boxed(identifier("now")),
            args: vec![],
        }
        .into(),
        NodeKind::ExprStaticPropertyFetch => ExprStaticPropertyFetch {
            class: boxed(name(["self"])),
            prop: boxed(variable("$instances")),
        }
        .into(),
        NodeKind::ExprTernary => ExprTernary {
            cond: boxed(variable("$a")),
            if_true: None,
            if_false: boxed(string("'default'")),
        }
        .into(),
        NodeKind::ExprThrow => ExprThrow {
            expr: boxed(sample(NodeKind::ExprNew)),
        }
        .into(),
        NodeKind::ExprUnaryMinus => ExprUnaryMinus {
            expr: boxed(one()),
        }
        .into(),
        NodeKind::ExprUnaryPlus => ExprUnaryPlus {
            expr: boxed(one()),
        }
        .into(),
        NodeKind::ExprVariable => variable("$a"),
        NodeKind::ExprYield => ExprYield {
            key: Some(boxed(string("'k'"))),
            val: Some(boxed(variable("$v"))),
        }
        .into(),
        NodeKind::ExprYieldFrom => ExprYieldFrom {
            expr: boxed(call(name(["gen"]), [])),
        }
        .into(),

        NodeKind::ExprAssign => assign_op(AssignOp::Assign),
        NodeKind::ExprAssignReference => assign_op(AssignOp::Reference),
        NodeKind::ExprAssignBitwiseAnd => assign_op(AssignOp::BitwiseAnd),
        NodeKind::ExprAssignBitwiseOr => assign_op(AssignOp::BitwiseOr),
        NodeKind::ExprAssignBitwiseXor => assign_op(AssignOp::BitwiseXor),
        NodeKind::ExprAssignCoalesce => assign_op(AssignOp::Coalesce),
        NodeKind::ExprAssignConcat => assign_op(AssignOp::Concat),
        NodeKind::ExprAssignDiv => assign_op(AssignOp::Div),
        NodeKind::ExprAssignMinus => assign_op(AssignOp::Minus),
        NodeKind::ExprAssignMod => assign_op(AssignOp::Mod),
        NodeKind::ExprAssignMul => assign_op(AssignOp::Mul),
        NodeKind::ExprAssignPlus => assign_op(AssignOp::Plus),
        NodeKind::ExprAssignPow => assign_op(AssignOp::Pow),
        NodeKind::ExprAssignShiftLeft => assign_op(AssignOp::ShiftLeft),
        NodeKind::ExprAssignShiftRight => assign_op(AssignOp::ShiftRight),

        NodeKind::ExprBinaryBitwiseAnd => binary_op(BinaryOp::BitwiseAnd),
        NodeKind::ExprBinaryBitwiseOr => binary_op(BinaryOp::BitwiseOr),
        NodeKind::ExprBinaryBitwiseXor => binary_op(BinaryOp::BitwiseXor),
        NodeKind::ExprBinaryBooleanAnd => binary_op(BinaryOp::BooleanAnd),
        NodeKind::ExprBinaryBooleanOr => binary_op(BinaryOp::BooleanOr),
        NodeKind::ExprBinaryCoalesce => binary_op(BinaryOp::Coalesce),
        NodeKind::ExprBinaryConcat => binary_op(BinaryOp::Concat),
        NodeKind::ExprBinaryDiv => binary_op(BinaryOp::Div),
        NodeKind::ExprBinaryEqual => binary_op(BinaryOp::Equal),
        NodeKind::ExprBinaryGreater => binary_op(BinaryOp::Greater),
        NodeKind::ExprBinaryGreaterOrEqual => binary_op(BinaryOp::GreaterOrEqual),
        NodeKind::ExprBinaryIdentical => binary_op(BinaryOp::Identical),
        NodeKind::ExprBinaryLogicalAnd => binary_op(BinaryOp::LogicalAnd),
        NodeKind::ExprBinaryLogicalOr => binary_op(BinaryOp::LogicalOr),
        NodeKind::ExprBinaryLogicalXor => binary_op(BinaryOp::LogicalXor),
        NodeKind::ExprBinaryMinus => binary_op(BinaryOp::Minus),
        NodeKind::ExprBinaryMod => binary_op(BinaryOp::Mod),
        NodeKind::ExprBinaryMul => binary_op(BinaryOp::Mul),
        NodeKind::ExprBinaryNotEqual => binary_op(BinaryOp::NotEqual),
        NodeKind::ExprBinaryNotIdentical => binary_op(BinaryOp::NotIdentical),
        NodeKind::ExprBinaryPlus => binary_op(BinaryOp::Plus),
        NodeKind::ExprBinaryPow => binary_op(BinaryOp::Pow),
        NodeKind::ExprBinaryShiftLeft => binary_op(BinaryOp::ShiftLeft),
        NodeKind::ExprBinaryShiftRight => binary_op(BinaryOp::ShiftRight),
        NodeKind::ExprBinarySmaller => binary_op(BinaryOp::Smaller),
        NodeKind::ExprBinarySmallerOrEqual => binary_op(BinaryOp::SmallerOrEqual),
        NodeKind::ExprBinarySpaceship => binary_op(BinaryOp::Spaceship),

        NodeKind::ExprCastArray => cast(CastKind::Array),
        NodeKind::ExprCastBool => cast(CastKind::Bool),
        NodeKind::ExprCastDouble => cast(CastKind::Double),
        NodeKind::ExprCastInt => cast(CastKind::Int),
        NodeKind::ExprCastObject => cast(CastKind::Object),
        NodeKind::ExprCastString => cast(CastKind::String),
        NodeKind::ExprCastUnset => cast(CastKind::Unset),

        NodeKind::ScalarDnumber => dnumber("1.5e3"),
        NodeKind::ScalarEncapsed => ScalarEncapsed {
            parts: vec![
                string_part("Hello ", Delimiter::DoubleQuote),
                variable("$name"),
                sample(NodeKind::ScalarEncapsedStringBrackets),
            ],
        }
        .into(),
        NodeKind::ScalarEncapsedStringPart => string_part("line\\n", Delimiter::DoubleQuote),
        NodeKind::ScalarEncapsedStringVar => ScalarEncapsedStringVar {
            name: boxed(identifier("items")),
            dim: Some(boxed(lnumber("0"))),
        }
        .into(),
        NodeKind::ScalarEncapsedStringBrackets => ScalarEncapsedStringBrackets {
            expr: boxed(sample(NodeKind::ExprPropertyFetch)),
        }
        .into(),
        NodeKind::ScalarHeredoc => ScalarHeredoc {
            parts: vec![string_part("body\n", Delimiter::Heredoc)],
        }
        .into(),
        NodeKind::ScalarLnumber => lnumber("0x1F"),
        NodeKind::ScalarMagicConstant => ScalarMagicConstant {
            value: "__LINE__".to_string(),
        }
        .into(),
        NodeKind::ScalarString => string("'hi'"),

        NodeKind::Name => name(["App", "Kernel"]),
        NodeKind::NameFullyQualified => fully_qualified(["App", "Kernel"]),
        NodeKind::NameRelative => relative(["Kernel"]),
        NodeKind::NamePart => NamePart {
            value: "Kernel".to_string(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;
    use test_log::test;

    #[test]
    fn samples_have_their_kind() {
        for (kind, node) in all() {
            assert_eq!(node.kind(), kind, "sample for {kind} has kind {}", node.kind());
        }
    }

    #[test]
    fn every_kind_has_a_sample() {
        assert_eq!(all().count(), NodeKind::COUNT);
    }
}
