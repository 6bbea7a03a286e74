use php_ast::ast::{self, builder};
use php_ast::Parser;
use serde_json::{Value, json};

#[test]
fn nodes_serialize_with_a_kind_tag() {
    let node = builder::throw(builder::variable(builder::identifier("$e")));
    let value: Value = serde_json::from_str(&ast::to_json(&node).unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "kind": "Throw",
            "expr": {
                "kind": "Variable",
                "varName": { "kind": "Identifier", "value": "$e" }
            }
        })
    );
}

#[test]
fn attributes_and_positions_are_included_when_present() {
    let program = Parser::new(b"<?php function &f(...$xs) {}").parse_program();
    let value: Value = serde_json::from_str(&ast::to_json(&program.root).unwrap()).unwrap();

    let function = &value["stmts"][0];
    assert_eq!(function["kind"], "Function");
    assert_eq!(function["attributes"]["returnsRef"], true);
    assert_eq!(function["position"]["startLine"], 1);
    assert_eq!(function["position"]["startPos"], 6);
    assert_eq!(function["functionName"]["value"], "f");
    assert_eq!(function["params"][0]["attributes"]["variadic"], true);
    assert_eq!(function["params"][0]["attributes"]["byRef"], false);
    assert_eq!(function["returnType"], Value::Null);
}

#[test]
fn compound_assignments_carry_their_operator() {
    let node = builder::assign_op::shift_left(
        builder::variable(builder::identifier("$a")),
        builder::lnumber("1"),
    );
    let value: Value = serde_json::from_str(&ast::to_json(&node).unwrap()).unwrap();

    assert_eq!(value["kind"], "AssignOp");
    assert_eq!(value["op"], "ShiftLeft");
}
