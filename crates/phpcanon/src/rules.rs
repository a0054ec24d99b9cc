//! Which kinds expose scalar data as attributes, and which of their fields that data came
//! from.
//!
//! Kinds not listed here are labeled by their kind name and carry no attributes. Adding a rule
//! never changes which kinds the traversal covers.

use crate::canonicalizer::{Canonicalizer, StringValues};
use crate::decode::{self, Number, Quote};
use crate::error::{CanonicalizeError, CanonicalizeResult, ErrorKind};
use crate::node::AttrValue;
use phpcanon_ast::common::Parameter;
use phpcanon_ast::expr::ExprVariable;
use phpcanon_ast::name::join_parts;
use phpcanon_ast::scalar::Delimiter;
use phpcanon_ast::{Node, NodeKind};
use tracing::debug;

/// What the attribute table produced for one node
#[derive(Debug, Default)]
pub struct Extraction {
    /// Replaces the kind name as the label
    pub label: Option<&'static str>,
    pub attributes: Vec<(&'static str, AttrValue)>,
    /// Child fields whose content is already exposed through `attributes`
    pub absorbed: &'static [&'static str],
}

impl Extraction {
    fn attribute(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Adds a boolean attribute, only when it is set
    fn flag(self, name: &'static str, value: bool) -> Self {
        if value {
            self.attribute(name, true)
        } else {
            self
        }
    }

    fn absorbs(mut self, fields: &'static [&'static str]) -> Self {
        self.absorbed = fields;
        self
    }
}

fn malformed(
    parent: NodeKind,
    field: &'static str,
    expected: &'static str,
    found: &Node,
) -> CanonicalizeError {
    debug!(%parent, field, expected, found = %found.kind(), "malformed child");
    ErrorKind::malformed_child(parent, field, expected, found.kind()).into()
}

/// Gets the text of a child that must be an identifier
fn identifier_text<'a>(
    parent: NodeKind,
    field: &'static str,
    node: &'a Node,
) -> CanonicalizeResult<&'a str> {
    node.as_identifier()
        .ok_or_else(|| malformed(parent, field, "Identifier", node))
}

/// Joins the parts of a name, which must all be name parts
fn qualified_name(parent: NodeKind, prefix: &str, parts: &[Node]) -> CanonicalizeResult<String> {
    if parts.is_empty() {
        debug!(%parent, "name without parts");
        return Err(ErrorKind::ChildArity {
            parent,
            field: "parts",
            expected: "at least one child",
            found: 0,
        }
        .into());
    }
    let segments = parts
        .iter()
        .map(|part| match part {
            Node::NamePart(part) => Ok(part.value.as_str()),
            other => Err(malformed(parent, "parts", "NamePart", other)),
        })
        .collect::<CanonicalizeResult<Vec<_>>>()?;
    Ok(format!("{prefix}{}", join_parts(segments)))
}

/// Gets the variable name of a parameter, `$` included
fn parameter_name(param: &Parameter) -> CanonicalizeResult<&str> {
    match &*param.var {
        Node::ExprVariable(ExprVariable { name }) => {
            identifier_text(NodeKind::ExprVariable, "name", name)
        }
        other => Err(malformed(NodeKind::Parameter, "var", "ExprVariable", other)),
    }
}

/// Canonicalizes a parameter list into the `parameters` attribute
fn parameters(
    canonicalizer: &Canonicalizer,
    parent: NodeKind,
    params: &[Node],
) -> CanonicalizeResult<AttrValue> {
    params
        .iter()
        .map(|param| match param {
            Node::Parameter(_) => canonicalizer.visit(param),
            other => Err(malformed(parent, "params", "Parameter", other)),
        })
        .collect::<CanonicalizeResult<Vec<_>>>()
        .map(AttrValue::List)
}

fn string_value(canonicalizer: &Canonicalizer, raw: &str, decoded: Option<String>) -> AttrValue {
    match canonicalizer.string_values() {
        StringValues::Decoded => AttrValue::Str(decoded.unwrap_or_else(|| raw.to_string())),
        StringValues::Raw => AttrValue::Str(raw.to_string()),
    }
}

/// Looks up the attribute rule for a node
pub fn extract(canonicalizer: &Canonicalizer, node: &Node) -> CanonicalizeResult<Extraction> {
    let kind = node.kind();
    let extraction = Extraction::default();
    let extraction = match node {
        Node::Identifier(identifier) => extraction.attribute("name", identifier.value.as_str()),
        Node::NamePart(part) => extraction.attribute("name", part.value.as_str()),
        Node::Name(name) => extraction
            .attribute("name", qualified_name(kind, "", &name.parts)?)
            .absorbs(&["parts"]),
        Node::NameFullyQualified(name) => extraction
            .attribute("name", qualified_name(kind, "\\", &name.parts)?)
            .absorbs(&["parts"]),
        Node::NameRelative(name) => extraction
            .attribute("name", qualified_name(kind, "namespace\\", &name.parts)?)
            .absorbs(&["parts"]),
        // variable variables keep their name expression as a child
        Node::ExprVariable(variable) => match variable.name.as_identifier() {
            Some(name) => extraction.attribute("name", name).absorbs(&["name"]),
            None => extraction,
        },
        Node::Parameter(param) => extraction
            .attribute("name", parameter_name(param)?)
            .flag("by_ref", param.by_ref)
            .flag("variadic", param.variadic)
            .absorbs(&["var"]),

        Node::StmtFunction(function) => Extraction {
            label: Some(function.function_tkn.id().into()),
            ..extraction
        }
        .attribute("name", identifier_text(kind, "name", &function.name)?)
        .attribute("parameters", parameters(canonicalizer, kind, &function.params)?)
        .flag("by_ref", function.by_ref)
        .absorbs(&["name"]),
        Node::StmtClassMethod(method) => Extraction {
            label: Some(method.function_tkn.id().into()),
            ..extraction
        }
        .attribute("name", identifier_text(kind, "name", &method.name)?)
        .attribute("parameters", parameters(canonicalizer, kind, &method.params)?)
        .flag("by_ref", method.by_ref)
        .absorbs(&["name"]),
        Node::ExprClosure(closure) => extraction
            .attribute("parameters", parameters(canonicalizer, kind, &closure.params)?)
            .flag("static", closure.is_static)
            .flag("by_ref", closure.by_ref),
        Node::ExprArrowFunction(arrow) => extraction
            .attribute("parameters", parameters(canonicalizer, kind, &arrow.params)?)
            .flag("static", arrow.is_static)
            .flag("by_ref", arrow.by_ref),

        Node::ScalarString(string) => extraction.attribute(
            "value",
            string_value(
                canonicalizer,
                &string.value,
                decode::string_literal(&string.value),
            ),
        ),
        Node::ScalarEncapsedStringPart(part) => extraction.attribute(
            "value",
            string_value(
                canonicalizer,
                &part.value,
                match part.delimiter {
                    Delimiter::DoubleQuote => decode::escaped(&part.value, Quote::Double),
                    Delimiter::Backtick => decode::escaped(&part.value, Quote::Backtick),
                    Delimiter::Heredoc => decode::escaped(&part.value, Quote::Heredoc),
                    Delimiter::Nowdoc => Some(part.value.clone()),
                },
            ),
        ),
        Node::ScalarLnumber(number) => extraction.attribute(
            "value",
            match decode::integer_literal(&number.value) {
                Some(Number::Int(value)) => AttrValue::Int(value),
                Some(Number::Float(value)) => AttrValue::Float(value),
                None => AttrValue::Str(number.value.clone()),
            },
        ),
        Node::ScalarDnumber(number) => extraction.attribute(
            "value",
            decode::float_literal(&number.value)
                .map(AttrValue::Float)
                .unwrap_or_else(|| AttrValue::Str(number.value.clone())),
        ),
        Node::ScalarMagicConstant(constant) => {
            extraction.attribute("value", constant.value.as_str())
        }
        Node::StmtInlineHtml(html) => extraction.attribute("value", html.value.as_str()),

        Node::ExprExit(exit) => {
            extraction.attribute("construct", exit.die_tkn.value().to_ascii_lowercase())
        }
        Node::ExprArray(array) => extraction.flag("short_syntax", array.short_syntax),
        Node::ExprList(list) => extraction.flag("short_syntax", list.short_syntax),
        Node::ExprArrayItem(item) => extraction
            .flag("by_ref", item.by_ref)
            .flag("unpack", item.unpack),
        Node::Argument(argument) => extraction
            .flag("by_ref", argument.by_ref)
            .flag("variadic", argument.variadic),
        Node::ExprClosureUse(closure_use) => extraction.flag("by_ref", closure_use.by_ref),
        Node::MatchArm(arm) => extraction.flag("default", arm.is_default),

        _ => extraction,
    };
    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phpcanon_ast::builder::*;
    use phpcanon_ast::common::Identifier;
    use phpcanon_ast::fixtures;
    use phpcanon_ast::stmt::StmtFunction;
    use phpcanon_ast::token::Token;
    use strum::IntoEnumIterator;
    use test_log::test;

    fn extract_default(node: &Node) -> CanonicalizeResult<Extraction> {
        extract(&Canonicalizer::default(), node)
    }

    fn attr<'a>(extraction: &'a Extraction, name: &str) -> Option<&'a AttrValue> {
        extraction
            .attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    #[test]
    fn names_are_joined_with_their_prefix() {
        let cases = [
            (name(["App", "Kernel"]), "App\\Kernel"),
            (fully_qualified(["App", "Kernel"]), "\\App\\Kernel"),
            (relative(["Kernel"]), "namespace\\Kernel"),
        ];
        for (node, expected) in cases {
            let extraction = extract_default(&node).unwrap();
            assert_eq!(attr(&extraction, "name"), Some(&AttrValue::from(expected)));
            assert_eq!(extraction.absorbed, ["parts"]);
        }
    }

    #[test]
    fn name_without_parts_is_malformed() {
        let error = extract_default(&name([])).unwrap_err();
        assert!(matches!(
            error.kind(),
            ErrorKind::ChildArity {
                parent: NodeKind::Name,
                found: 0,
                ..
            }
        ));
    }

    #[test]
    fn name_parts_must_be_name_parts() {
        let node: Node = phpcanon_ast::name::Name {
            parts: vec![identifier("App")],
        }
        .into();
        let error = extract_default(&node).unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::malformed_child(NodeKind::Name, "parts", "NamePart", NodeKind::Identifier)
        );
    }

    #[test]
    fn variable_variables_keep_their_name() {
        let node = variable("$a");
        assert_eq!(extract_default(&node).unwrap().absorbed, ["name"]);

        let node: Node = ExprVariable {
            name: Box::new(variable("$name")),
        }
        .into();
        let extraction = extract_default(&node).unwrap();
        assert!(extraction.attributes.is_empty());
        assert!(extraction.absorbed.is_empty());
    }

    #[test]
    fn function_is_labeled_by_its_token() {
        let node = fixtures::sample(NodeKind::StmtFunction);
        let extraction = extract_default(&node).unwrap();
        assert_eq!(extraction.label, Some("T_FUNCTION"));
        assert_eq!(attr(&extraction, "name"), Some(&AttrValue::from("foo")));
        let params = attr(&extraction, "parameters")
            .and_then(AttrValue::as_list)
            .unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].attribute("name"), Some(&AttrValue::from("$a")));
        assert_eq!(attr(&extraction, "by_ref"), None);
    }

    #[test]
    fn function_name_must_be_an_identifier() {
        let node: Node = StmtFunction {
            attr_groups: vec![],
            function_tkn: Token::function(),
            by_ref: false,
            name: Box::new(variable("$foo")),
            params: vec![],
            return_type: None,
            stmts: vec![],
        }
        .into();
        let error = extract_default(&node).unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::malformed_child(
                NodeKind::StmtFunction,
                "name",
                "Identifier",
                NodeKind::ExprVariable
            )
        );
    }

    #[test]
    fn parameter_var_must_be_a_variable() {
        let node: Node = Parameter {
            attr_groups: vec![],
            modifiers: vec![],
            ty: None,
            by_ref: false,
            variadic: true,
            var: Box::new(Identifier {
                value: "$a".to_string(),
            }
            .into()),
            default_value: None,
        }
        .into();
        let error = extract_default(&node).unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::malformed_child(
                NodeKind::Parameter,
                "var",
                "ExprVariable",
                NodeKind::Identifier
            )
        );
    }

    #[test]
    fn flags_are_only_set_when_true() {
        let extraction = extract_default(&fixtures::sample(NodeKind::Parameter)).unwrap();
        assert_eq!(attr(&extraction, "by_ref"), Some(&AttrValue::Bool(true)));
        assert_eq!(attr(&extraction, "variadic"), None);

        let extraction = extract_default(&fixtures::sample(NodeKind::ExprList)).unwrap();
        assert!(extraction.attributes.is_empty());
    }

    #[test]
    fn scalar_values() {
        let value = |node: Node| {
            let extraction = extract_default(&node).unwrap();
            attr(&extraction, "value").cloned()
        };
        assert_eq!(value(string(r#""a\tb""#)), Some(AttrValue::from("a\tb")));
        assert_eq!(value(lnumber("0x1F")), Some(AttrValue::Int(31)));
        assert_eq!(value(lnumber("09")), Some(AttrValue::from("09")));
        assert_eq!(value(dnumber("1.5e3")), Some(AttrValue::Float(1500.0)));
        assert_eq!(
            value(fixtures::sample(NodeKind::ScalarEncapsedStringPart)),
            Some(AttrValue::from("line\n"))
        );
    }

    #[test]
    fn string_parts_follow_their_delimiter() {
        let raw = r#"a\tb \"q\" \`x\`"#;
        let cases = [
            (Delimiter::DoubleQuote, "a\tb \"q\" \\`x\\`"),
            (Delimiter::Backtick, "a\tb \\\"q\\\" `x`"),
            (Delimiter::Heredoc, "a\tb \\\"q\\\" \\`x\\`"),
            (Delimiter::Nowdoc, raw),
        ];
        for (delimiter, expected) in cases {
            let extraction = extract_default(&string_part(raw, delimiter)).unwrap();
            assert_eq!(
                attr(&extraction, "value"),
                Some(&AttrValue::from(expected)),
                "{delimiter:?}"
            );
        }
    }

    #[test]
    fn raw_string_parts_are_kept_for_every_delimiter() {
        let canonicalizer = Canonicalizer::builder()
            .string_values(StringValues::Raw)
            .build();
        for delimiter in Delimiter::iter() {
            let extraction = extract(&canonicalizer, &string_part(r"x\n", delimiter)).unwrap();
            assert_eq!(attr(&extraction, "value"), Some(&AttrValue::from(r"x\n")));
        }
    }

    #[test]
    fn raw_string_values() {
        let canonicalizer = Canonicalizer::builder()
            .string_values(StringValues::Raw)
            .build();
        let extraction = extract(&canonicalizer, &string("'hi'")).unwrap();
        assert_eq!(attr(&extraction, "value"), Some(&AttrValue::from("'hi'")));
    }

    #[test]
    fn exit_construct_is_normalized() {
        let extraction = extract_default(&fixtures::sample(NodeKind::ExprExit)).unwrap();
        assert_eq!(attr(&extraction, "construct"), Some(&AttrValue::from("die")));
    }

    #[test]
    fn unlisted_kinds_have_no_rule() {
        let extraction = extract_default(&fixtures::sample(NodeKind::StmtWhile)).unwrap();
        assert_eq!(extraction.label, None);
        assert!(extraction.attributes.is_empty());
        assert!(extraction.absorbed.is_empty());
    }
}
