//! The syntax tree.
//!
//! Every element is a [`Node`]: a closed sum over the per-kind structs in
//! [`support`], [`name`], [`scalar`], [`expr`] and [`stmt`]. Nodes own their
//! children outright (`Box`/`Vec`), so a tree is dropped as a unit and moving
//! a subtree under a new parent is a plain move.
//!
//! Nodes are created by the functions in [`builder`] with empty attributes and
//! no position, positioned once with [`Node::set_position`], and traversed with
//! a [`Visitor`].

pub mod attributes;
pub mod builder;
pub mod expr;
pub mod locator;
pub mod name;
pub mod scalar;
pub mod sexpr;
pub mod stmt;
pub mod support;
pub mod visitor;

pub use attributes::{AttrValue, Attributes, Comment};
pub use expr::AssignOpKind;
pub use visitor::Visitor;

use serde::Serialize;

use crate::position::Position;

/// The part every node kind shares.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct NodeData {
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub(crate) attributes: Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) position: Option<Position>,
}

/// A filled child slot.
#[derive(Debug, Clone, Copy)]
pub enum Child<'a> {
    Node(&'a Node),
    List(&'a [Node]),
}

/// Enumerates a kind's child slots in its fixed walk order.
///
/// Empty single slots are skipped; sequence slots are always reported, even
/// when empty.
pub trait Children {
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>));
}

pub(crate) fn one<'a>(
    f: &mut dyn FnMut(&'static str, Child<'a>),
    key: &'static str,
    slot: &'a Option<Node>,
) {
    if let Some(node) = slot {
        f(key, Child::Node(node));
    }
}

pub(crate) fn list<'a>(
    f: &mut dyn FnMut(&'static str, Child<'a>),
    key: &'static str,
    slot: &'a [Node],
) {
    f(key, Child::List(slot));
}

macro_rules! node_kinds {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "kind")]
        pub enum Node {
            $($variant(Box<$ty>),)*
        }

        impl Node {
            fn variant_name(&self) -> &'static str {
                match self {
                    $(Node::$variant(_) => stringify!($variant),)*
                }
            }

            fn data(&self) -> &NodeData {
                match self {
                    $(Node::$variant(n) => &n.data,)*
                }
            }

            fn data_mut(&mut self) -> &mut NodeData {
                match self {
                    $(Node::$variant(n) => &mut n.data,)*
                }
            }
        }

        impl Children for Node {
            fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'static str, Child<'a>)) {
                match self {
                    $(Node::$variant(n) => n.for_each_child(f),)*
                }
            }
        }

        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$variant(Box::new(node))
                }
            }
        )*
    };
}

node_kinds! {
    Identifier(support::Identifier),
    Argument(support::Argument),
    Parameter(support::Parameter),
    Nullable(support::Nullable),

    Name(name::Name),
    FullyQualified(name::FullyQualified),
    Relative(name::Relative),
    NamePart(name::NamePart),

    Lnumber(scalar::Lnumber),
    Dnumber(scalar::Dnumber),
    StringLiteral(scalar::StringLiteral),

    Variable(expr::Variable),
    Assign(expr::Assign),
    AssignRef(expr::AssignRef),
    AssignOp(expr::AssignOp),
    ClassConstFetch(expr::ClassConstFetch),
    ConstFetch(expr::ConstFetch),
    Closure(expr::Closure),
    ClosureUse(expr::ClosureUse),
    New(expr::New),
    FunctionCall(expr::FunctionCall),
    MethodCall(expr::MethodCall),
    StaticCall(expr::StaticCall),
    PropertyFetch(expr::PropertyFetch),
    StaticPropertyFetch(expr::StaticPropertyFetch),

    Expression(stmt::Expression),
    StmtList(stmt::StmtList),
    Function(stmt::Function),
    Class(stmt::Class),
    ClassMethod(stmt::ClassMethod),
    Throw(stmt::Throw),
    Return(stmt::Return),
    Echo(stmt::Echo),
}

impl Node {
    /// Kind label used by formatters; compound assignments report their
    /// operator (`AssignBitwiseOr`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::AssignOp(n) => n.op.kind_name(),
            other => other.variant_name(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.data().attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.data_mut().attributes
    }

    /// `None` means "position unknown"; fall back to an enclosing node.
    pub fn position(&self) -> Option<Position> {
        self.data().position
    }

    /// Records the source extent. Children and attributes are untouched.
    pub fn set_position(mut self, position: Position) -> Node {
        self.data_mut().position = Some(position);
        self
    }

    /// Token text of leaf kinds.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Identifier(n) => Some(&n.value),
            Node::NamePart(n) => Some(&n.value),
            Node::Lnumber(n) => Some(&n.value),
            Node::Dnumber(n) => Some(&n.value),
            Node::StringLiteral(n) => Some(&n.value),
            _ => None,
        }
    }

    pub fn walk<'ast>(&'ast self, visitor: &mut dyn Visitor<'ast>) {
        visitor::walk(self, visitor);
    }

    pub fn is_stmt(&self) -> bool {
        matches!(
            self,
            Node::Expression(_)
                | Node::StmtList(_)
                | Node::Function(_)
                | Node::Class(_)
                | Node::ClassMethod(_)
                | Node::Throw(_)
                | Node::Return(_)
                | Node::Echo(_)
        )
    }

    pub fn is_expr(&self) -> bool {
        matches!(
            self,
            Node::Lnumber(_)
                | Node::Dnumber(_)
                | Node::StringLiteral(_)
                | Node::Variable(_)
                | Node::Assign(_)
                | Node::AssignRef(_)
                | Node::AssignOp(_)
                | Node::ClassConstFetch(_)
                | Node::ConstFetch(_)
                | Node::Closure(_)
                | Node::New(_)
                | Node::FunctionCall(_)
                | Node::MethodCall(_)
                | Node::StaticCall(_)
                | Node::PropertyFetch(_)
                | Node::StaticPropertyFetch(_)
        )
    }
}

/// Pretty JSON, one object per node tagged with `"kind"`.
pub fn to_json(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}
