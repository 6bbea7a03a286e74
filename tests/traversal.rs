use php_ast::Position;
use php_ast::ast::builder::{self, assign_op};
use php_ast::ast::locator::Locator;
use php_ast::ast::{Node, Visitor};

fn var(name: &str) -> Node {
    builder::variable(builder::identifier(name))
}

fn name(part: &str) -> Node {
    builder::name(vec![builder::name_part(part)])
}

fn label(node: &Node) -> String {
    match node.value() {
        Some(value) => format!("{} {}", node.kind_name(), value),
        None => node.kind_name().to_string(),
    }
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    slots: Vec<&'static str>,
    skip: Option<&'static str>,
}

impl<'ast> Visitor<'ast> for Recorder {
    fn enter_node(&mut self, node: &'ast Node) -> bool {
        self.events.push(format!("enter {}", label(node)));
        self.skip != Some(node.kind_name())
    }

    fn children_visitor(&mut self, key: &'static str) -> Box<dyn Visitor<'ast> + '_> {
        self.slots.push(key);
        Box::new(self)
    }

    fn leave_node(&mut self, node: &'ast Node) {
        self.events.push(format!("leave {}", label(node)));
    }
}

fn record(node: &Node) -> Recorder {
    let mut recorder = Recorder::default();
    node.walk(&mut recorder);
    recorder
}

#[test]
fn assign_walks_target_before_value() {
    let node = builder::assign(var("$foo"), builder::const_fetch(name("null")));

    assert_eq!(
        record(&node).events,
        vec![
            "enter Assign",
            "enter Variable",
            "enter Identifier $foo",
            "leave Identifier $foo",
            "leave Variable",
            "enter ConstFetch",
            "enter Name",
            "enter NamePart null",
            "leave NamePart null",
            "leave Name",
            "leave ConstFetch",
            "leave Assign",
        ]
    );
}

#[test]
fn class_const_fetch_walks_constant_name_first() {
    let node = builder::class_const_fetch(name("Foo"), builder::identifier("BAR"));
    let recorder = record(&node);

    assert_eq!(recorder.slots, vec!["constantName", "class", "parts"]);
    assert_eq!(
        recorder.events,
        vec![
            "enter ClassConstFetch",
            "enter Identifier BAR",
            "leave Identifier BAR",
            "enter Name",
            "enter NamePart Foo",
            "leave NamePart Foo",
            "leave Name",
            "leave ClassConstFetch",
        ]
    );
}

#[test]
fn compound_assignment_walks_variable_then_expression() {
    let node = assign_op::bitwise_or(var("$a"), var("$b"));
    let recorder = record(&node);

    assert_eq!(recorder.slots, vec!["variable", "varName", "expression", "varName"]);
    assert_eq!(recorder.events.first().map(String::as_str), Some("enter AssignBitwiseOr"));
    assert_eq!(recorder.events.last().map(String::as_str), Some("leave AssignBitwiseOr"));
}

#[test]
fn absent_children_are_skipped() {
    let node = builder::throw(None::<Node>);
    let recorder = record(&node);

    assert_eq!(recorder.events, vec!["enter Throw", "leave Throw"]);
    assert!(recorder.slots.is_empty());

    let node = builder::class_const_fetch(name("Foo"), None::<Node>);
    assert_eq!(record(&node).slots, vec!["class", "parts"]);
}

#[test]
fn empty_sequences_still_get_a_child_visitor() {
    let node = builder::closure(vec![], vec![], None::<Node>, vec![], false, false);
    let recorder = record(&node);

    assert_eq!(recorder.slots, vec!["params", "uses", "stmts"]);
    assert_eq!(recorder.events, vec!["enter Closure", "leave Closure"]);
}

#[test]
fn sequences_are_one_slot() {
    let node = builder::echo(vec![
        builder::lnumber("1"),
        builder::lnumber("2"),
        builder::lnumber("3"),
    ]);
    let recorder = record(&node);

    assert_eq!(recorder.slots, vec!["exprs"]);
    assert_eq!(
        recorder.events,
        vec![
            "enter Echo",
            "enter Lnumber 1",
            "leave Lnumber 1",
            "enter Lnumber 2",
            "leave Lnumber 2",
            "enter Lnumber 3",
            "leave Lnumber 3",
            "leave Echo",
        ]
    );
}

#[test]
fn declining_enter_prunes_the_subtree() {
    let node = builder::assign(var("$foo"), builder::lnumber("1"));
    let mut recorder = Recorder {
        skip: Some("Variable"),
        ..Recorder::default()
    };
    node.walk(&mut recorder);

    assert_eq!(
        recorder.events,
        vec![
            "enter Assign",
            "enter Variable",
            "enter Lnumber 1",
            "leave Lnumber 1",
            "leave Assign",
        ]
    );
    assert_eq!(recorder.slots, vec!["variable", "expression"]);
}

#[test]
fn slot_orders() {
    let parameter = builder::parameter(
        builder::nullable(name("bar")),
        var("$bar"),
        builder::const_fetch(name("null")),
        false,
        false,
    );
    assert_eq!(
        record(&parameter).slots,
        vec![
            "variableType",
            "expr",
            "parts",
            "variable",
            "varName",
            "defaultValue",
            "constant",
            "parts",
        ]
    );

    let function = builder::function(
        builder::identifier("f"),
        false,
        vec![],
        name("int"),
        vec![],
    );
    assert_eq!(
        record(&function).slots,
        vec!["functionName", "params", "returnType", "parts", "stmts"]
    );

    let class = builder::class(
        builder::identifier("A"),
        vec![builder::identifier("final")],
        vec![],
        name("B"),
        vec![name("C")],
        vec![],
    );
    assert_eq!(
        record(&class).slots,
        vec![
            "className",
            "modifiers",
            "args",
            "extends",
            "parts",
            "implements",
            "parts",
            "stmts",
        ]
    );

    let method = builder::class_method(
        builder::identifier("m"),
        vec![builder::identifier("public")],
        false,
        vec![],
        None::<Node>,
        vec![],
    );
    assert_eq!(
        record(&method).slots,
        vec!["methodName", "modifiers", "params", "stmts"]
    );

    let call = builder::static_call(name("Foo"), builder::identifier("bar"), vec![]);
    assert_eq!(record(&call).slots, vec!["class", "parts", "call", "arguments"]);

    let call = builder::method_call(var("$foo"), builder::identifier("bar"), vec![]);
    assert_eq!(
        record(&call).slots,
        vec!["variable", "varName", "method", "arguments"]
    );

    let new = builder::new(name("Foo"), vec![builder::argument(var("$a"), false)]);
    assert_eq!(
        record(&new).slots,
        vec!["class", "parts", "arguments", "expr", "varName"]
    );

    let fetch = builder::static_property_fetch(name("Foo"), var("$bar"));
    assert_eq!(
        record(&fetch).slots,
        vec!["class", "parts", "property", "varName"]
    );
}

#[test]
fn every_node_is_entered_once() {
    let tree = builder::stmt_list(vec![
        builder::expression(builder::assign(var("$a"), builder::lnumber("1"))),
        builder::throw(builder::new(name("E"), vec![])),
        builder::return_stmt(None::<Node>),
    ]);
    let recorder = record(&tree);

    let enters = recorder.events.iter().filter(|e| e.starts_with("enter")).count();
    let leaves = recorder.events.iter().filter(|e| e.starts_with("leave")).count();
    // StmtList, Expression, Assign, Variable, Identifier, Lnumber,
    // Throw, New, Name, NamePart, Return
    assert_eq!(enters, 11);
    assert_eq!(leaves, 11);
}

/// Remembers which slot of its parent it was handed out for.
struct SlotTracker<'s> {
    slot: Option<&'static str>,
    seen: &'s mut Vec<(String, Option<&'static str>)>,
}

impl<'ast> Visitor<'ast> for SlotTracker<'_> {
    fn enter_node(&mut self, node: &'ast Node) -> bool {
        self.seen.push((label(node), self.slot));
        true
    }

    fn children_visitor(&mut self, key: &'static str) -> Box<dyn Visitor<'ast> + '_> {
        Box::new(SlotTracker {
            slot: Some(key),
            seen: &mut *self.seen,
        })
    }
}

#[test]
fn scoped_child_visitors_know_their_slot() {
    let parameter = builder::parameter(
        None::<Node>,
        var("$bar"),
        builder::const_fetch(name("null")),
        false,
        false,
    );

    let mut seen = Vec::new();
    parameter.walk(&mut SlotTracker {
        slot: None,
        seen: &mut seen,
    });

    assert_eq!(
        seen,
        vec![
            ("Parameter".to_string(), None),
            ("Variable".to_string(), Some("variable")),
            ("Identifier $bar".to_string(), Some("varName")),
            ("ConstFetch".to_string(), Some("defaultValue")),
            ("Name".to_string(), Some("constant")),
            ("NamePart null".to_string(), Some("parts")),
        ]
    );
}

#[test]
fn mutable_references_are_visitors() {
    let node = builder::throw(var("$e"));
    let mut recorder = Recorder::default();
    {
        let mut by_ref = &mut recorder;
        node.walk(&mut by_ref);
    }
    assert_eq!(recorder.events.len(), 6);
}

#[test]
fn deep_trees_walk_to_the_bottom() {
    let mut node = builder::lnumber("1");
    for _ in 0..200 {
        node = builder::assign(var("$a"), node);
    }

    let recorder = record(&node);
    let enters = recorder.events.iter().filter(|e| e.starts_with("enter")).count();
    assert_eq!(enters, 200 * 3 + 1);
    assert_eq!(recorder.events.last().map(String::as_str), Some("leave Assign"));
}

#[test]
fn shared_parameter_lists_walk_identically() {
    let params = vec![
        builder::parameter(
            builder::nullable(name("bar")),
            var("$bar"),
            builder::const_fetch(name("null")),
            false,
            false,
        ),
        builder::parameter(name("baz"), var("$baz"), None::<Node>, true, true),
    ];

    let function = builder::function(builder::identifier("foo"), false, params.clone(), None::<Node>, vec![]);
    let closure = builder::closure(params.clone(), vec![], None::<Node>, vec![], true, false);

    let from_function: Vec<String> = record(&function)
        .events
        .into_iter()
        .filter(|e| !e.contains("Function") && !e.contains("Identifier foo"))
        .collect();
    let from_closure: Vec<String> = record(&closure)
        .events
        .into_iter()
        .filter(|e| !e.contains("Closure"))
        .collect();
    assert_eq!(from_function, from_closure);
}

#[test]
fn very_deep_trees_walk_on_a_larger_stack() {
    // builder-made trees are not depth limited; walking one this deep needs
    // more than the default 2 MiB test thread stack
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(|| {
            let depth = 10_000;
            let mut node = builder::lnumber("1").set_position(Position::new(1, 1, 0, 1));
            for _ in 0..depth {
                node = builder::assign(var("$a"), node).set_position(Position::new(1, 1, 0, 1));
            }

            let recorder = record(&node);
            let enters = recorder.events.iter().filter(|e| e.starts_with("enter")).count();
            assert_eq!(enters, depth * 3 + 1);

            let innermost = Locator::innermost(&node, 0).expect("node at offset");
            assert_eq!(innermost.value(), Some("1"));
        })
        .expect("spawn walker thread");

    handle.join().expect("walker thread panicked");
}
