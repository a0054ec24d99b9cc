use phpcanon::{canonicalize, Canonicalizer, Coverage, ErrorKind};
use phpcanon_ast::builder::*;
use phpcanon_ast::common::Parameter;
use phpcanon_ast::stmt::StmtFunction;
use phpcanon_ast::token::Token;
use phpcanon_ast::{Node, NodeKind};
use test_log::test;

mod common;

fn function_named(name: Node, params: Vec<Node>) -> Node {
    StmtFunction {
        attr_groups: vec![],
        function_tkn: Token::function(),
        by_ref: false,
        name: Box::new(name),
        params,
        return_type: None,
        stmts: vec![],
    }
    .into()
}

#[test]
fn function_name_must_be_an_identifier() {
    let tree = root([function_named(variable("$foo"), vec![])]);
    for canonicalizer in common::canonicalizers() {
        let error = canonicalizer.canonicalize(&tree).unwrap_err();
        assert_eq!(error.path(), [NodeKind::Root, NodeKind::StmtFunction]);
        assert_eq!(
            error.kind(),
            &ErrorKind::MalformedChild {
                parent: NodeKind::StmtFunction,
                field: "name",
                expected: "Identifier",
                found: NodeKind::ExprVariable,
            }
        );
    }
}

#[test]
fn function_params_must_be_parameters() {
    let tree = root([function_named(identifier("foo"), vec![variable("$a")])]);
    let error = canonicalize(&tree).unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorKind::malformed_child(
            NodeKind::StmtFunction,
            "params",
            "Parameter",
            NodeKind::ExprVariable
        )
    );
}

#[test]
fn malformed_parameter_reports_full_path() {
    let broken = Parameter {
        attr_groups: vec![],
        modifiers: vec![],
        ty: None,
        by_ref: false,
        variadic: false,
        var: Box::new(lnumber("1")),
        default_value: None,
    };
    let tree = root([function_named(identifier("foo"), vec![broken.into()])]);
    let error = canonicalize(&tree).unwrap_err();
    assert_eq!(
        error.path(),
        [NodeKind::Root, NodeKind::StmtFunction, NodeKind::Parameter]
    );
    assert_eq!(
        error.to_string(),
        "malformed tree: Parameter.var must be ExprVariable, got ScalarLnumber \
         (in Root > StmtFunction > Parameter)"
    );
}

#[test]
fn malformed_default_value_is_reached_in_reference_coverage() {
    let tree = root([function(
        "foo",
        [param("$a", Some(fully_qualified([])))],
        [],
    )]);
    let error = canonicalize(&tree).unwrap_err();
    assert_eq!(
        error.path(),
        [
            NodeKind::Root,
            NodeKind::StmtFunction,
            NodeKind::Parameter,
            NodeKind::NameFullyQualified,
        ]
    );
    assert!(matches!(error.kind(), ErrorKind::ChildArity { found: 0, .. }));
}

#[test]
fn nested_malformed_names_only_fail_in_full_coverage() {
    let tree = root([echo([fully_qualified([])])]);
    assert!(canonicalize(&tree).is_ok());

    let full = Canonicalizer::builder().coverage(Coverage::Full).build();
    let error = full.canonicalize(&tree).unwrap_err();
    assert_eq!(
        error.path(),
        [NodeKind::Root, NodeKind::StmtEcho, NodeKind::NameFullyQualified]
    );
}
