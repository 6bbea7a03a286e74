//! Forms that are neither expressions nor statements on their own: raw
//! identifiers, call arguments, declaration parameters and the `?T` wrapper.

use serde::Serialize;

use super::{Child, Children, Node, NodeData, one};

/// Raw token text: function and method names, modifiers, `$name` of a variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub value: String,
}

impl Children for Identifier {
    fn for_each_child<'a>(&'a self, _f: &mut dyn FnMut(&'static str, Child<'a>)) {}
}

/// One call argument. `...$xs` sets the `variadic` attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub expr: Option<Node>,
}

impl Children for Argument {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "expr", &self.expr);
    }
}

/// A declared parameter, shared by functions, methods and closures.
///
/// Walk order: `variableType`, `variable`, `defaultValue`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub variable_type: Option<Node>,
    pub variable: Option<Node>,
    pub default_value: Option<Node>,
}

impl Children for Parameter {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "variableType", &self.variable_type);
        one(f, "variable", &self.variable);
        one(f, "defaultValue", &self.default_value);
    }
}

/// `?Type`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nullable {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub expr: Option<Node>,
}

impl Children for Nullable {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        one(f, "expr", &self.expr);
    }
}

