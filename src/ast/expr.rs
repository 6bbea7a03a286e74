use serde::Serialize;

use super::{Child, Children, Node, NodeData, list, one};

/// `$name`. `var_name` is an `Identifier` holding the text with its `$`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub var_name: Option<Node>,
}

impl Children for Variable {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "varName", &self.var_name);
    }
}

/// `$a = $b`. Target (`variable`) is walked before source (`expression`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assign {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub variable: Option<Node>,
    pub expression: Option<Node>,
}

impl Children for Assign {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "variable", &self.variable);
        one(f, "expression", &self.expression);
    }
}

/// `$a =& $b`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignRef {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub variable: Option<Node>,
    pub expression: Option<Node>,
}

impl Children for AssignRef {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "variable", &self.variable);
        one(f, "expression", &self.expression);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssignOpKind {
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Coalesce,
    Concat,
    Div,
    Minus,
    Mod,
    Mul,
    Plus,
    Pow,
    ShiftLeft,
    ShiftRight,
}

impl AssignOpKind {
    pub fn kind_name(self) -> &'static str {
        match self {
            AssignOpKind::BitwiseAnd => "AssignBitwiseAnd",
            AssignOpKind::BitwiseOr => "AssignBitwiseOr",
            AssignOpKind::BitwiseXor => "AssignBitwiseXor",
            AssignOpKind::Coalesce => "AssignCoalesce",
            AssignOpKind::Concat => "AssignConcat",
            AssignOpKind::Div => "AssignDiv",
            AssignOpKind::Minus => "AssignMinus",
            AssignOpKind::Mod => "AssignMod",
            AssignOpKind::Mul => "AssignMul",
            AssignOpKind::Plus => "AssignPlus",
            AssignOpKind::Pow => "AssignPow",
            AssignOpKind::ShiftLeft => "AssignShiftLeft",
            AssignOpKind::ShiftRight => "AssignShiftRight",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AssignOpKind::BitwiseAnd => "&=",
            AssignOpKind::BitwiseOr => "|=",
            AssignOpKind::BitwiseXor => "^=",
            AssignOpKind::Coalesce => "??=",
            AssignOpKind::Concat => ".=",
            AssignOpKind::Div => "/=",
            AssignOpKind::Minus => "-=",
            AssignOpKind::Mod => "%=",
            AssignOpKind::Mul => "*=",
            AssignOpKind::Plus => "+=",
            AssignOpKind::Pow => "**=",
            AssignOpKind::ShiftLeft => "<<=",
            AssignOpKind::ShiftRight => ">>=",
        }
    }
}

/// Compound assignment such as `$a |= $b`; one node kind per operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignOp {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub op: AssignOpKind,
    pub variable: Option<Node>,
    pub expression: Option<Node>,
}

impl Children for AssignOp {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "variable", &self.variable);
        one(f, "expression", &self.expression);
    }
}

/// `Foo::BAR`
///
/// The constant name is walked *before* the class. Tools depend on this
/// order; do not change it to source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassConstFetch {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub class: Option<Node>,
    pub constant_name: Option<Node>,
}

impl Children for ClassConstFetch {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "constantName", &self.constant_name);
        one(f, "class", &self.class);
    }
}

/// Bare constant such as `null` or `PHP_EOL`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstFetch {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub constant: Option<Node>,
}

impl Children for ConstFetch {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "constant", &self.constant);
    }
}

/// `function (...) use (...) { ... }`, attributes `static` and `returnsRef`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Closure {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub params: Vec<Node>,
    pub uses: Vec<Node>,
    pub return_type: Option<Node>,
    pub stmts: Vec<Node>,
}

impl Children for Closure {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        list(f, "params", &self.params);
        list(f, "uses", &self.uses);
        one(f, "returnType", &self.return_type);
        list(f, "stmts", &self.stmts);
    }
}

/// One captured variable of a closure `use` list; `&` goes in `byRef`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosureUse {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub variable: Option<Node>,
}

impl Children for ClosureUse {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "variable", &self.variable);
    }
}

/// `new Foo(...)`. For an anonymous class `class` holds the `Class` node and
/// the constructor arguments live on that node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct New {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub class: Option<Node>,
    pub arguments: Vec<Node>,
}

impl Children for New {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "class", &self.class);
        list(f, "arguments", &self.arguments);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub function: Option<Node>,
    pub arguments: Vec<Node>,
}

impl Children for FunctionCall {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "function", &self.function);
        list(f, "arguments", &self.arguments);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodCall {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub variable: Option<Node>,
    pub method: Option<Node>,
    pub arguments: Vec<Node>,
}

impl Children for MethodCall {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "variable", &self.variable);
        one(f, "method", &self.method);
        list(f, "arguments", &self.arguments);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticCall {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub class: Option<Node>,
    pub call: Option<Node>,
    pub arguments: Vec<Node>,
}

impl Children for StaticCall {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "class", &self.class);
        one(f, "call", &self.call);
        list(f, "arguments", &self.arguments);
    }
}

/// `$obj->prop`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyFetch {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub variable: Option<Node>,
    pub property: Option<Node>,
}

impl Children for PropertyFetch {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "variable", &self.variable);
        one(f, "property", &self.property);
    }
}

/// `Foo::$prop`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticPropertyFetch {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub class: Option<Node>,
    pub property: Option<Node>,
}

impl Children for StaticPropertyFetch {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "class", &self.class);
        one(f, "property", &self.property);
    }
}
