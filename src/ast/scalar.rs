//! Literal leaves. Values keep the raw token text; nothing is decoded.

use serde::Serialize;

use super::{Child, Children, NodeData};

/// Integer literal, any base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lnumber {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub value: String,
}

/// Floating point literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dnumber {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub value: String,
}

/// Quoted string literal, quotes included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLiteral {
    #[serde(flatten)]
    pub(crate) data: NodeData,
    pub value: String,
}

impl Children for Lnumber {
    fn for_each_child<'a>(&'a self, _f: &mut dyn FnMut(&'static str, Child<'a>)) {}
}

impl Children for Dnumber {
    fn for_each_child<'a>(&'a self, _f: &mut dyn FnMut(&'static str, Child<'a>)) {}
}

impl Children for StringLiteral {
    fn for_each_child<'a>(&'a self, _f: &mut dyn FnMut(&'static str, Child<'a>)) {}
}
