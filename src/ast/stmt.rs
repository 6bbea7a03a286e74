use serde::Serialize;

use super::{Child, Children, Node, NodeData, list, one};

/// An expression used as a statement, `expr;`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expression {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub expr: Option<Node>,
}

impl Children for Expression {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "expr", &self.expr);
    }
}

/// Ordered statements: the file root and `{ ... }` blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StmtList {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub stmts: Vec<Node>,
}

impl Children for StmtList {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        list(f, "stmts", &self.stmts);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub function_name: Option<Node>,
    pub params: Vec<Node>,
    pub return_type: Option<Node>,
    pub stmts: Vec<Node>,
}

impl Children for Function {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "functionName", &self.function_name);
        list(f, "params", &self.params);
        one(f, "returnType", &self.return_type);
        list(f, "stmts", &self.stmts);
    }
}

/// Named or anonymous class. `class_name` is absent and `args` filled for
/// `new class(...) {}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub class_name: Option<Node>,
    pub modifiers: Vec<Node>,
    pub args: Vec<Node>,
    pub extends: Option<Node>,
    pub implements: Vec<Node>,
    pub stmts: Vec<Node>,
}

impl Children for Class {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "className", &self.class_name);
        list(f, "modifiers", &self.modifiers);
        list(f, "args", &self.args);
        one(f, "extends", &self.extends);
        list(f, "implements", &self.implements);
        list(f, "stmts", &self.stmts);
    }
}

/// Abstract and interface-style methods keep an empty `stmts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMethod {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub method_name: Option<Node>,
    pub modifiers: Vec<Node>,
    pub params: Vec<Node>,
    pub return_type: Option<Node>,
    pub stmts: Vec<Node>,
}

impl Children for ClassMethod {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "methodName", &self.method_name);
        list(f, "modifiers", &self.modifiers);
        list(f, "params", &self.params);
        one(f, "returnType", &self.return_type);
        list(f, "stmts", &self.stmts);
    }
}

/// `throw expr;`. The builder does not check that `expr` is throwable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Throw {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub expr: Option<Node>,
}

impl Children for Throw {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "expr", &self.expr);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Return {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub expr: Option<Node>,
}

impl Children for Return {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "expr", &self.expr);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Echo {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub exprs: Vec<Node>,
}

impl Children for Echo {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        list(f, "exprs", &self.exprs);
    }
}
