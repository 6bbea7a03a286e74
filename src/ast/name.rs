use serde::Serialize;

use super::{Child, Children, Node, NodeData, list};

/// `Foo\Bar`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Name {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub parts: Vec<Node>,
}

/// `\Foo\Bar`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullyQualified {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub parts: Vec<Node>,
}

/// `namespace\Foo`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relative {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub parts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamePart {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub value: String,
}

impl Children for Name {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        list(f, "parts", &self.parts);
    }
}

impl Children for FullyQualified {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        list(f, "parts", &self.parts);
    }
}

impl Children for Relative {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
        list(f, "parts", &self.parts);
    }
}

impl Children for NamePart {
    fn for_each_child<'a>(&'a self, _f: &mut dyn FnMut(&'static str, Child<'a>)) {}
}
