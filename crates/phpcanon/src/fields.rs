//! The structurally significant child fields of every node, in declaration order.
//!
//! Absent optional fields are left out. Operator, flag and token fields are not children and
//! never show up here.

use phpcanon_ast::Node;
use std::slice;

/// A named child field of a node
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub name: &'static str,
    pub children: Children<'a>,
}

/// The content of a present child field
#[derive(Debug, Clone, Copy)]
pub enum Children<'a> {
    One(&'a Node),
    Many(&'a [Node]),
}

impl<'a> Children<'a> {
    /// The children of this field, in order
    pub fn as_slice(&self) -> &'a [Node] {
        match *self {
            Children::One(node) => slice::from_ref(node),
            Children::Many(nodes) => nodes,
        }
    }
}

fn one<'a>(name: &'static str, node: &'a Node) -> Option<Field<'a>> {
    Some(Field {
        name,
        children: Children::One(node),
    })
}

fn opt<'a>(name: &'static str, node: &'a Option<Box<Node>>) -> Option<Field<'a>> {
    node.as_deref().and_then(|node| one(name, node))
}

fn many<'a>(name: &'static str, nodes: &'a [Node]) -> Option<Field<'a>> {
    Some(Field {
        name,
        children: Children::Many(nodes),
    })
}

fn fields<const N: usize>(fields: [Option<Field<'_>>; N]) -> Vec<Field<'_>> {
    fields.into_iter().flatten().collect()
}

/// Gets the child fields of a node
pub fn child_fields(node: &Node) -> Vec<Field<'_>> {
    match node {
        // Root -> [stmts]
        Node::Root(n) => fields([many("stmts", &n.stmts)]),
        Node::Nullable(n) => fields([one("expr", &n.expr)]),
        Node::Parameter(n) => fields([
            many("attr_groups", &n.attr_groups),
            many("modifiers", &n.modifiers),
            opt("ty", &n.ty),
            one("var", &n.var),
            opt("default_value", &n.default_value),
        ]),
        Node::Identifier(_) => vec![],
        Node::Argument(n) => fields([opt("name", &n.name), one("expr", &n.expr)]),
        Node::MatchArm(n) => fields([many("exprs", &n.exprs), one("return_expr", &n.return_expr)]),
        Node::Union(n) => fields([many("types", &n.types)]),
        Node::Attribute(n) => fields([one("name", &n.name), many("args", &n.args)]),
        Node::AttributeGroup(n) => fields([many("attrs", &n.attrs)]),
        Node::EnumCase(n) => fields([
            many("attr_groups", &n.attr_groups),
            one("name", &n.name),
            opt("expr", &n.expr),
        ]),

        Node::StmtBreak(n) => fields([opt("expr", &n.expr)]),
        Node::StmtCase(n) => fields([one("cond", &n.cond), many("stmts", &n.stmts)]),
        Node::StmtCatch(n) => fields([
            many("types", &n.types),
            opt("var", &n.var),
            many("stmts", &n.stmts),
        ]),
        Node::StmtEnum(n) => fields([
            many("attr_groups", &n.attr_groups),
            one("name", &n.name),
            opt("ty", &n.ty),
            many("implements", &n.implements),
            many("stmts", &n.stmts),
        ]),
        Node::StmtClass(n) => fields([
            many("attr_groups", &n.attr_groups),
            many("modifiers", &n.modifiers),
            opt("name", &n.name),
            many("args", &n.args),
            opt("extends", &n.extends),
            many("implements", &n.implements),
            many("stmts", &n.stmts),
        ]),
        Node::StmtClassConstList(n) => fields([
            many("attr_groups", &n.attr_groups),
            many("modifiers", &n.modifiers),
            many("consts", &n.consts),
        ]),
        Node::StmtClassMethod(n) => fields([
            many("attr_groups", &n.attr_groups),
            many("modifiers", &n.modifiers),
            one("name", &n.name),
            many("params", &n.params),
            opt("return_type", &n.return_type),
            one("stmt", &n.stmt),
        ]),
        Node::StmtConstList(n) => fields([many("consts", &n.consts)]),
        Node::StmtConstant(n) => fields([one("name", &n.name), one("expr", &n.expr)]),
        Node::StmtContinue(n) => fields([opt("expr", &n.expr)]),
        Node::StmtDeclare(n) => fields([many("consts", &n.consts), one("stmt", &n.stmt)]),
        Node::StmtDefault(n) => fields([many("stmts", &n.stmts)]),
        Node::StmtDo(n) => fields([one("stmt", &n.stmt), one("cond", &n.cond)]),
        Node::StmtEcho(n) => fields([many("exprs", &n.exprs)]),
        Node::StmtElse(n) => fields([one("stmt", &n.stmt)]),
        Node::StmtElseIf(n) => fields([one("cond", &n.cond), one("stmt", &n.stmt)]),
        Node::StmtExpression(n) => fields([one("expr", &n.expr)]),
        Node::StmtFinally(n) => fields([many("stmts", &n.stmts)]),
        Node::StmtFor(n) => fields([
            many("init", &n.init),
            many("cond", &n.cond),
            many("step", &n.step),
            one("stmt", &n.stmt),
        ]),
        Node::StmtForeach(n) => fields([
            one("expr", &n.expr),
            opt("key", &n.key),
            one("var", &n.var),
            one("stmt", &n.stmt),
        ]),
        // StmtFunction -> [attr_groups, name, params, return_type, stmts]
        Node::StmtFunction(n) => fields([
            many("attr_groups", &n.attr_groups),
            one("name", &n.name),
            many("params", &n.params),
            opt("return_type", &n.return_type),
            many("stmts", &n.stmts),
        ]),
        Node::StmtGlobal(n) => fields([many("vars", &n.vars)]),
        Node::StmtGoto(n) => fields([one("label", &n.label)]),
        Node::StmtHaltCompiler(_) => vec![],
        Node::StmtIf(n) => fields([
            one("cond", &n.cond),
            one("stmt", &n.stmt),
            many("else_if", &n.else_if),
            opt("else", &n.else_),
        ]),
        Node::StmtInlineHtml(_) => vec![],
        Node::StmtInterface(n) => fields([
            many("attr_groups", &n.attr_groups),
            one("name", &n.name),
            many("extends", &n.extends),
            many("stmts", &n.stmts),
        ]),
        Node::StmtLabel(n) => fields([one("name", &n.name)]),
        Node::StmtNamespace(n) => fields([opt("name", &n.name), many("stmts", &n.stmts)]),
        Node::StmtNop(_) => vec![],
        Node::StmtProperty(n) => fields([one("var", &n.var), opt("expr", &n.expr)]),
        Node::StmtPropertyList(n) => fields([
            many("attr_groups", &n.attr_groups),
            many("modifiers", &n.modifiers),
            opt("ty", &n.ty),
            many("props", &n.props),
        ]),
        Node::StmtReturn(n) => fields([opt("expr", &n.expr)]),
        Node::StmtStatic(n) => fields([many("vars", &n.vars)]),
        Node::StmtStaticVar(n) => fields([one("var", &n.var), opt("expr", &n.expr)]),
        Node::StmtStmtList(n) => fields([many("stmts", &n.stmts)]),
        Node::StmtSwitch(n) => fields([one("cond", &n.cond), many("cases", &n.cases)]),
        Node::StmtThrow(n) => fields([one("expr", &n.expr)]),
        Node::StmtTrait(n) => fields([
            many("attr_groups", &n.attr_groups),
            one("name", &n.name),
            many("stmts", &n.stmts),
        ]),
        Node::StmtTraitUse(n) => fields([
            many("traits", &n.traits),
            many("adaptations", &n.adaptations),
        ]),
        Node::StmtTraitUseAlias(n) => fields([
            opt("trait", &n.trait_),
            one("method", &n.method),
            opt("modifier", &n.modifier),
            opt("alias", &n.alias),
        ]),
        Node::StmtTraitUsePrecedence(n) => fields([
            one("trait", &n.trait_),
            one("method", &n.method),
            many("insteadof", &n.insteadof),
        ]),
        Node::StmtTry(n) => fields([
            many("stmts", &n.stmts),
            many("catches", &n.catches),
            opt("finally", &n.finally),
        ]),
        Node::StmtUnset(n) => fields([many("vars", &n.vars)]),
        Node::StmtUseList(n) => fields([opt("type", &n.ty), many("uses", &n.uses)]),
        Node::StmtGroupUseList(n) => fields([
            opt("type", &n.ty),
            one("prefix", &n.prefix),
            many("uses", &n.uses),
        ]),
        Node::StmtUse(n) => fields([
            opt("type", &n.ty),
            one("use", &n.use_),
            opt("alias", &n.alias),
        ]),
        Node::StmtWhile(n) => fields([one("cond", &n.cond), one("stmt", &n.stmt)]),

        Node::ExprArray(n) => fields([many("items", &n.items)]),
        Node::ExprArrayDimFetch(n) => fields([one("var", &n.var), opt("dim", &n.dim)]),
        Node::ExprArrayItem(n) => fields([opt("key", &n.key), opt("val", &n.val)]),
        Node::ExprArrowFunction(n) => fields([
            many("attr_groups", &n.attr_groups),
            many("params", &n.params),
            opt("return_type", &n.return_type),
            one("expr", &n.expr),
        ]),
        Node::ExprBrackets(n) => fields([one("expr", &n.expr)]),
        Node::ExprBitwiseNot(n) => fields([one("expr", &n.expr)]),
        Node::ExprBooleanNot(n) => fields([one("expr", &n.expr)]),
        Node::ExprClassConstFetch(n) => fields([one("class", &n.class), one("const", &n.const_)]),
        Node::ExprClone(n) => fields([one("expr", &n.expr)]),
        Node::ExprClosure(n) => fields([
            many("attr_groups", &n.attr_groups),
            many("params", &n.params),
            many("uses", &n.uses),
            opt("return_type", &n.return_type),
            many("stmts", &n.stmts),
        ]),
        Node::ExprClosureUse(n) => fields([one("var", &n.var)]),
        Node::ExprConstFetch(n) => fields([one("const", &n.const_)]),
        Node::ExprEmpty(n) => fields([one("expr", &n.expr)]),
        Node::ExprErrorSuppress(n) => fields([one("expr", &n.expr)]),
        Node::ExprEval(n) => fields([one("expr", &n.expr)]),
        Node::ExprExit(n) => fields([opt("expr", &n.expr)]),
        Node::ExprFunctionCall(n) => fields([one("function", &n.function), many("args", &n.args)]),
        Node::ExprInclude(n) => fields([one("expr", &n.expr)]),
        Node::ExprInstanceOf(n) => fields([one("expr", &n.expr), one("class", &n.class)]),
        Node::ExprIsset(n) => fields([many("vars", &n.vars)]),
        Node::ExprList(n) => fields([many("items", &n.items)]),
        Node::ExprMethodCall(n) => fields([
            one("var", &n.var),
            one("method", &n.method),
            many("args", &n.args),
        ]),
        Node::ExprNullsafeMethodCall(n) => fields([
            one("var", &n.var),
            one("method", &n.method),
            many("args", &n.args),
        ]),
        Node::ExprMatch(n) => fields([one("expr", &n.expr), many("arms", &n.arms)]),
        Node::ExprNew(n) => fields([one("class", &n.class), many("args", &n.args)]),
        Node::ExprIncDec(n) => fields([one("var", &n.var)]),
        Node::ExprPrint(n) => fields([one("expr", &n.expr)]),
        Node::ExprPropertyFetch(n) => fields([one("var", &n.var), one("prop", &n.prop)]),
        Node::ExprNullsafePropertyFetch(n) => fields([one("var", &n.var), one("prop", &n.prop)]),
        Node::ExprShellExec(n) => fields([many("parts", &n.parts)]),
        Node::ExprStaticCall(n) => fields([
            one("class", &n.class),
            one("call", &n.call),
            many("args", &n.args),
        ]),
        Node::ExprStaticPropertyFetch(n) => fields([one("class", &n.class), one("prop", &n.prop)]),
        Node::ExprTernary(n) => fields([
            one("cond", &n.cond),
            opt("if_true", &n.if_true),
            one("if_false", &n.if_false),
        ]),
        Node::ExprThrow(n) => fields([one("expr", &n.expr)]),
        Node::ExprUnaryMinus(n) => fields([one("expr", &n.expr)]),
        Node::ExprUnaryPlus(n) => fields([one("expr", &n.expr)]),
        Node::ExprVariable(n) => fields([one("name", &n.name)]),
        Node::ExprYield(n) => fields([opt("key", &n.key), opt("val", &n.val)]),
        Node::ExprYieldFrom(n) => fields([one("expr", &n.expr)]),
        // ExprAssign -> [var, expr]
        Node::ExprAssign(n) => fields([one("var", &n.var), one("expr", &n.expr)]),
        // ExprBinary -> [left, right]
        Node::ExprBinary(n) => fields([one("left", &n.left), one("right", &n.right)]),
        Node::ExprCast(n) => fields([one("expr", &n.expr)]),

        Node::ScalarDnumber(_) => vec![],
        Node::ScalarEncapsed(n) => fields([many("parts", &n.parts)]),
        Node::ScalarEncapsedStringPart(_) => vec![],
        Node::ScalarEncapsedStringVar(n) => fields([one("name", &n.name), opt("dim", &n.dim)]),
        Node::ScalarEncapsedStringBrackets(n) => fields([one("expr", &n.expr)]),
        Node::ScalarHeredoc(n) => fields([many("parts", &n.parts)]),
        Node::ScalarLnumber(_) => vec![],
        Node::ScalarMagicConstant(_) => vec![],
        Node::ScalarString(_) => vec![],

        Node::Name(n) => fields([many("parts", &n.parts)]),
        Node::NameFullyQualified(n) => fields([many("parts", &n.parts)]),
        Node::NameRelative(n) => fields([many("parts", &n.parts)]),
        Node::NamePart(_) => vec![],
    }
}
