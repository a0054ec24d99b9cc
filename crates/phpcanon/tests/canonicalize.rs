use phpcanon::{canonicalize, AttrValue, Canonicalizer, Coverage};
use phpcanon_ast::builder::*;
use phpcanon_ast::expr::ExprShellExec;
use phpcanon_ast::fixtures;
use phpcanon_ast::scalar::{Delimiter, ScalarHeredoc};
use phpcanon_ast::{Node, NodeKind};
use test_log::test;
use tracing::info;

mod common;

#[test]
fn every_kind_canonicalizes() -> eyre::Result<()> {
    for canonicalizer in common::canonicalizers() {
        for (kind, node) in fixtures::all() {
            let canonical = canonicalizer.canonicalize(&node)?;
            assert!(!canonical.label().is_empty(), "{kind} has an empty label");
            assert!(canonical.walk().all(|node| !node.label().is_empty()));
        }
    }
    Ok(())
}

#[test]
fn labels_are_kind_names_except_for_named_declarations() -> eyre::Result<()> {
    for (kind, node) in fixtures::all() {
        let canonical = canonicalize(&node)?;
        match kind {
            NodeKind::StmtFunction | NodeKind::StmtClassMethod => {
                assert_eq!(canonical.label(), "T_FUNCTION")
            }
            _ => assert_eq!(canonical.label(), kind.as_ref()),
        }
    }
    Ok(())
}

#[test]
fn canonicalization_is_deterministic() -> eyre::Result<()> {
    for canonicalizer in common::canonicalizers() {
        for (_, node) in fixtures::all() {
            assert_eq!(
                canonicalizer.canonicalize(&node)?,
                canonicalizer.canonicalize(&node)?
            );
        }
    }
    Ok(())
}

#[test]
fn children_keep_source_order() -> eyre::Result<()> {
    let statements = [
        echo([string("'a'")]),
        expr_stmt(variable("$b")),
        ret(Some(lnumber("3"))),
    ];
    let tree = root(statements.clone());
    for canonicalizer in common::canonicalizers() {
        let canonical = canonicalizer.canonicalize(&tree)?;
        let expected = statements
            .iter()
            .map(|stmt| canonicalizer.canonicalize(stmt))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(canonical.children(), expected);
    }
    Ok(())
}

#[test]
fn scalar_string_is_a_leaf() -> eyre::Result<()> {
    for canonicalizer in common::canonicalizers() {
        let canonical = canonicalizer.canonicalize(&string("'hi'"))?;
        assert_eq!(canonical.label(), "ScalarString");
        assert!(canonical.children().is_empty());
        assert_eq!(canonical.attribute("value"), Some(&AttrValue::from("hi")));
    }
    Ok(())
}

#[test]
fn empty_root_has_no_children() -> eyre::Result<()> {
    for canonicalizer in common::canonicalizers() {
        let canonical = canonicalizer.canonicalize(&root([]))?;
        assert_eq!(canonical.label(), "Root");
        assert!(canonical.children().is_empty());
        assert!(canonical.attributes().is_empty());
    }
    Ok(())
}

#[test]
fn function_declaration() -> eyre::Result<()> {
    let tree = function(
        "foo",
        [param("$a", None), param("$b", Some(string("'x'")))],
        [],
    );
    let canonical = canonicalize(&tree)?;
    info!("canonicalized function: {canonical:#?}");

    assert_eq!(canonical.label(), "T_FUNCTION");
    assert_eq!(canonical.attribute("name"), Some(&AttrValue::from("foo")));
    let params = canonical
        .attribute("parameters")
        .and_then(AttrValue::as_list)
        .expect("parameters should be a list");
    assert_eq!(params.len(), 2);

    assert_eq!(params[0].label(), "Parameter");
    assert_eq!(params[0].attribute("name"), Some(&AttrValue::from("$a")));
    assert!(params[0].children().is_empty());

    assert_eq!(params[1].attribute("name"), Some(&AttrValue::from("$b")));
    assert_eq!(params[1].children().len(), 1);
    let default = &params[1].children()[0];
    assert_eq!(default.label(), "ScalarString");
    assert_eq!(default.attribute("value"), Some(&AttrValue::from("x")));
    Ok(())
}

#[test]
fn function_parameters_are_also_children_in_full_coverage() -> eyre::Result<()> {
    let tree = function("foo", [param("$a", None)], [echo([variable("$a")])]);
    let canonicalizer = Canonicalizer::builder().coverage(Coverage::Full).build();
    let canonical = canonicalizer.canonicalize(&tree)?;

    let params = canonical
        .attribute("parameters")
        .and_then(AttrValue::as_list)
        .expect("parameters should be a list");
    assert_eq!(canonical.children()[0], params[0]);
    assert_eq!(canonical.children()[1].label(), "StmtEcho");
    assert_eq!(canonical.count(), 4);
    Ok(())
}

#[test]
fn input_is_not_modified() -> eyre::Result<()> {
    let tree = root(
        [NodeKind::StmtFunction, NodeKind::StmtClass, NodeKind::StmtTry]
            .into_iter()
            .map(fixtures::sample),
    );
    let before = tree.clone();
    let mut outputs = vec![];
    for canonicalizer in common::canonicalizers().chain(common::canonicalizers()) {
        outputs.push(canonicalizer.canonicalize(&tree)?);
    }
    assert_eq!(tree, before);
    assert_eq!(outputs[0], outputs[2]);
    assert_eq!(outputs[1], outputs[3]);
    Ok(())
}

#[test]
fn interpolated_strings_in_full_coverage() -> eyre::Result<()> {
    let canonicalizer = Canonicalizer::builder().coverage(Coverage::Full).build();
    let canonical = canonicalizer.canonicalize(&fixtures::sample(NodeKind::ScalarEncapsed))?;
    let labels = canonical
        .children()
        .iter()
        .map(|node| node.label())
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        [
            "ScalarEncapsedStringPart",
            "ExprVariable",
            "ScalarEncapsedStringBrackets"
        ]
    );
    assert_eq!(
        canonical.children()[0].attribute("value"),
        Some(&AttrValue::from("Hello "))
    );
    Ok(())
}

fn first_part_value(canonicalizer: &Canonicalizer, node: &Node) -> eyre::Result<AttrValue> {
    let canonical = canonicalizer.canonicalize(node)?;
    let value = canonical.children()[0]
        .attribute("value")
        .cloned()
        .expect("string parts have a value");
    Ok(value)
}

#[test]
fn heredoc_parts_keep_escaped_double_quotes() -> eyre::Result<()> {
    let canonicalizer = Canonicalizer::builder().coverage(Coverage::Full).build();
    let heredoc: Node = ScalarHeredoc {
        parts: vec![
            string_part(r#"a\tb \"q\""#, Delimiter::Heredoc),
            variable("$a"),
        ],
    }
    .into();
    assert_eq!(
        first_part_value(&canonicalizer, &heredoc)?,
        AttrValue::from("a\tb \\\"q\\\"")
    );

    let nowdoc: Node = ScalarHeredoc {
        parts: vec![string_part(r#"a\tb \"q\""#, Delimiter::Nowdoc)],
    }
    .into();
    assert_eq!(
        first_part_value(&canonicalizer, &nowdoc)?,
        AttrValue::from(r#"a\tb \"q\""#)
    );
    Ok(())
}

#[test]
fn shell_exec_parts_unescape_backticks() -> eyre::Result<()> {
    let canonicalizer = Canonicalizer::builder().coverage(Coverage::Full).build();
    let shell: Node = ExprShellExec {
        parts: vec![
            string_part(r#"echo \`x\` \"y\""#, Delimiter::Backtick),
            variable("$a"),
        ],
    }
    .into();
    assert_eq!(
        first_part_value(&canonicalizer, &shell)?,
        AttrValue::from(r#"echo `x` \"y\""#)
    );
    Ok(())
}
