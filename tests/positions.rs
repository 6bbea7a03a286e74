use php_ast::ast::locator::Locator;
use php_ast::ast::{Node, Visitor};
use php_ast::line_index::LineIndex;
use php_ast::{Parser, Position, Span};

fn first_stmt(root: &Node) -> &Node {
    let Node::StmtList(list) = root else {
        panic!("root is not a StmtList");
    };
    &list.stmts[0]
}

#[test]
fn line_index_maps_offsets_to_lines() {
    let source = b"<?php\nfoo(\n  $a\n);";
    let lines = LineIndex::new(source);

    assert_eq!(lines.line_count(), 4);
    assert_eq!(lines.line(0), 1);
    assert_eq!(lines.line(5), 1);
    assert_eq!(lines.line(6), 2);
    assert_eq!(lines.line(13), 3);
    assert_eq!(lines.position(Span::new(6, 18)), Position::new(2, 4, 6, 18));
    // a span ending right after a newline stays on the newline's line
    assert_eq!(lines.position(Span::new(0, 6)), Position::new(1, 1, 0, 6));
}

#[test]
fn statement_positions_cover_the_semicolon() {
    let program = Parser::new(b"<?php $foo = 1;").parse_program();
    let stmt = first_stmt(&program.root);

    assert_eq!(stmt.position(), Some(Position::new(1, 1, 6, 15)));

    let Node::Expression(expression) = stmt else {
        panic!("expected Expression");
    };
    let assign = expression.expr.as_ref().expect("expression");
    assert_eq!(assign.position(), Some(Position::new(1, 1, 6, 14)));
}

#[test]
fn multi_line_positions() {
    let program = Parser::new(b"<?php\nfoo(\n  $a\n);").parse_program();
    let stmt = first_stmt(&program.root);

    let position = stmt.position().expect("position");
    assert_eq!(position.start_line, 2);
    assert_eq!(position.end_line, 4);
    assert_eq!(position.to_string(), "2:6-4:18");
}

#[derive(Default)]
struct PositionCheck {
    missing: Vec<&'static str>,
}

impl<'ast> Visitor<'ast> for PositionCheck {
    fn enter_node(&mut self, node: &'ast Node) -> bool {
        if node.position().is_none() {
            self.missing.push(node.kind_name());
        }
        true
    }
}

#[test]
fn parsed_nodes_are_all_positioned() {
    let code = b"<?php
abstract class A extends B {
    public function run(?int $x = null, &...$rest): static {
        $y = static function () use (&$x) { return \\Foo::bar($x); };
        $this->items->add($y);
    }
}
";
    let program = Parser::new(code).parse_program();

    let mut check = PositionCheck::default();
    program.root.walk(&mut check);
    assert!(check.missing.is_empty(), "{:?}", check.missing);
}

#[test]
fn locator_finds_the_innermost_node() {
    let program = Parser::new(b"<?php $foo = bar($baz);").parse_program();

    let path: Vec<&str> = Locator::find(&program.root, 18)
        .into_iter()
        .map(Node::kind_name)
        .collect();
    assert_eq!(
        path,
        vec![
            "StmtList",
            "Expression",
            "Assign",
            "FunctionCall",
            "Argument",
            "Variable",
            "Identifier",
        ]
    );

    let innermost = Locator::innermost(&program.root, 7).expect("node at offset");
    assert_eq!(innermost.value(), Some("$foo"));
}

#[test]
fn locator_outside_everything_is_empty() {
    let program = Parser::new(b"<?php $a;   ").parse_program();

    assert!(Locator::find(&program.root, 11).is_empty());
    assert!(Locator::innermost(&program.root, 11).is_none());
}

#[test]
fn locator_descends_through_unpositioned_nodes() {
    use php_ast::ast::builder;

    let inner = builder::identifier("x").set_position(Position::new(1, 1, 4, 5));
    let root = builder::stmt_list(vec![builder::expression(builder::variable(inner))]);

    let path: Vec<&str> = Locator::find(&root, 4)
        .into_iter()
        .map(Node::kind_name)
        .collect();
    assert_eq!(path, vec!["Identifier"]);
}
