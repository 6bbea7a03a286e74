use insta::assert_snapshot;
use php_ast::ast::builder;
use php_ast::ast::sexpr::SExprFormatter;
use php_ast::ast::Node;
use php_ast::Parser;

fn format_code(code: &str) -> String {
    let program = Parser::new(code.as_bytes()).parse_program();
    assert!(program.errors.is_empty(), "{:?}", program.errors);
    SExprFormatter::format(&program.root)
}

#[test]
fn test_sexpr_assign() {
    let node = builder::assign(
        builder::variable(builder::identifier("$foo")),
        builder::lnumber("1"),
    );

    assert_snapshot!(SExprFormatter::format(&node), @r#"
(Assign
  :variable
    (Variable
      :varName
        (Identifier "$foo"))
  :expression
    (Lnumber "1"))
"#);
}

#[test]
fn test_sexpr_flags_and_empty_slots() {
    let node = builder::closure(
        vec![builder::parameter(
            None::<Node>,
            builder::variable(builder::identifier("$x")),
            None::<Node>,
            true,
            false,
        )],
        vec![],
        None::<Node>,
        vec![],
        true,
        false,
    );

    assert_snapshot!(SExprFormatter::format(&node), @r#"
(Closure [static=true] [returnsRef=false]
  :params
    (Parameter [byRef=true] [variadic=false]
      :variable
        (Variable
          :varName
            (Identifier "$x")))
  :uses
  :stmts)
"#);
}

#[test]
fn test_sexpr_parsed_with_comments() {
    let code = "<?php
// build it
/** Makes things */
function make() { throw new Oops(); }
";

    assert_snapshot!(format_code(code), @r#"
(StmtList
  :stmts
    (Function [returnsRef=false] [phpDocComment="/** Makes things */"] [comment="// build it"] [comment="/** Makes things */"]
      :functionName
        (Identifier "make")
      :params
      :stmts
        (Throw
          :expr
            (New
              :class
                (Name
                  :parts
                    (NamePart "Oops"))
              :arguments))))
"#);
}

#[test]
fn test_sexpr_class_const_fetch_order() {
    assert_snapshot!(format_code("<?php Foo::BAR;"), @r#"
(StmtList
  :stmts
    (Expression
      :expr
        (ClassConstFetch
          :constantName
            (Identifier "BAR")
          :class
            (Name
              :parts
                (NamePart "Foo")))))
"#);
}

#[test]
fn test_sexpr_positions() {
    let program = Parser::new(b"<?php $a |= 2;").parse_program();
    let mut formatter = SExprFormatter::new().with_positions(true);
    program.root.walk(&mut formatter);

    assert_snapshot!(formatter.finish(), @r#"
(StmtList @1:6-1:14
  :stmts
    (Expression @1:6-1:14
      :expr
        (AssignBitwiseOr @1:6-1:13
          :variable
            (Variable @1:6-1:8
              :varName
                (Identifier "$a" @1:6-1:8))
          :expression
            (Lnumber "2" @1:12-1:13))))
"#);
}
