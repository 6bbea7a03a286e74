use php_ast::ast::Node;
use php_ast::ast::attributes::VARIADIC;
use php_ast::Parser;

#[test]
fn test_variadic_param() {
    let source = "<?php
    class A {
        public function implement(...$interfaces) {}
    }
    ";
    let program = Parser::new(source.as_bytes()).parse_program();

    assert!(program.errors.is_empty(), "Parser errors: {:?}", program.errors);

    let Node::StmtList(root) = &program.root else {
        panic!("root is not a StmtList");
    };
    let Node::Class(class) = &root.stmts[0] else {
        panic!("expected Class");
    };
    let Node::ClassMethod(method) = &class.stmts[0] else {
        panic!("expected ClassMethod");
    };
    let variadic = method.params[0]
        .attributes()
        .get(VARIADIC)
        .and_then(|v| v.as_bool());
    assert_eq!(variadic, Some(true));
}
