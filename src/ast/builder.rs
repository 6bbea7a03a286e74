//! One constructor per node kind.
//!
//! Builders take already-built children and primitive flags, write the flags
//! into the node's attributes and leave the position unset. They never check
//! that the children make sense for the construct; that is the grammar's job.

use super::attributes::Attributes;
use super::expr::{self, AssignOpKind};
use super::name;
use super::scalar;
use super::stmt;
use super::support;
use super::{Node, NodeData};

fn bare() -> NodeData {
    NodeData::default()
}

fn with_attributes(attributes: Attributes) -> NodeData {
    NodeData {
        attributes,
        position: None,
    }
}

// support

pub fn identifier(value: impl Into<String>) -> Node {
    support::Identifier {
        data: bare(),
        value: value.into(),
    }
    .into()
}

pub fn argument(expr: impl Into<Option<Node>>, variadic: bool) -> Node {
    support::Argument {
        data: with_attributes(Attributes {
            variadic: Some(variadic),
            ..Attributes::default()
        }),
        expr: expr.into(),
    }
    .into()
}

pub fn parameter(
    variable_type: impl Into<Option<Node>>,
    variable: impl Into<Option<Node>>,
    default_value: impl Into<Option<Node>>,
    by_ref: bool,
    variadic: bool,
) -> Node {
    support::Parameter {
        data: with_attributes(Attributes {
            by_ref: Some(by_ref),
            variadic: Some(variadic),
            ..Attributes::default()
        }),
        variable_type: variable_type.into(),
        variable: variable.into(),
        default_value: default_value.into(),
    }
    .into()
}

pub fn nullable(expr: impl Into<Option<Node>>) -> Node {
    support::Nullable {
        data: bare(),
        expr: expr.into(),
    }
    .into()
}

// names

pub fn name(parts: Vec<Node>) -> Node {
    name::Name { data: bare(), parts }.into()
}

pub fn fully_qualified(parts: Vec<Node>) -> Node {
    name::FullyQualified { data: bare(), parts }.into()
}

pub fn relative(parts: Vec<Node>) -> Node {
    name::Relative { data: bare(), parts }.into()
}

pub fn name_part(value: impl Into<String>) -> Node {
    name::NamePart {
        data: bare(),
        value: value.into(),
    }
    .into()
}

// scalars

pub fn lnumber(value: impl Into<String>) -> Node {
    scalar::Lnumber {
        data: bare(),
        value: value.into(),
    }
    .into()
}

pub fn dnumber(value: impl Into<String>) -> Node {
    scalar::Dnumber {
        data: bare(),
        value: value.into(),
    }
    .into()
}

pub fn string(value: impl Into<String>) -> Node {
    scalar::StringLiteral {
        data: bare(),
        value: value.into(),
    }
    .into()
}

// expressions

pub fn variable(var_name: impl Into<Option<Node>>) -> Node {
    expr::Variable {
        data: bare(),
        var_name: var_name.into(),
    }
    .into()
}

pub fn assign(variable: impl Into<Option<Node>>, expression: impl Into<Option<Node>>) -> Node {
    expr::Assign {
        data: bare(),
        variable: variable.into(),
        expression: expression.into(),
    }
    .into()
}

pub fn assign_ref(variable: impl Into<Option<Node>>, expression: impl Into<Option<Node>>) -> Node {
    expr::AssignRef {
        data: bare(),
        variable: variable.into(),
        expression: expression.into(),
    }
    .into()
}

/// Compound assignment for an operator picked at runtime; see [`assign_op`]
/// for the per-operator constructors.
pub fn compound_assign(
    op: AssignOpKind,
    variable: impl Into<Option<Node>>,
    expression: impl Into<Option<Node>>,
) -> Node {
    expr::AssignOp {
        data: bare(),
        op,
        variable: variable.into(),
        expression: expression.into(),
    }
    .into()
}

pub mod assign_op {
    use super::super::Node;
    use super::AssignOpKind;

    macro_rules! assign_op_builders {
        ($($fn_name:ident => $kind:ident),* $(,)?) => {
            $(
                pub fn $fn_name(
                    variable: impl Into<Option<Node>>,
                    expression: impl Into<Option<Node>>,
                ) -> Node {
                    super::compound_assign(AssignOpKind::$kind, variable, expression)
                }
            )*
        };
    }

    assign_op_builders! {
        bitwise_and => BitwiseAnd,
        bitwise_or => BitwiseOr,
        bitwise_xor => BitwiseXor,
        coalesce => Coalesce,
        concat => Concat,
        div => Div,
        minus => Minus,
        modulo => Mod,
        mul => Mul,
        plus => Plus,
        pow => Pow,
        shift_left => ShiftLeft,
        shift_right => ShiftRight,
    }
}

pub fn class_const_fetch(class: impl Into<Option<Node>>, constant_name: impl Into<Option<Node>>) -> Node {
    expr::ClassConstFetch {
        data: bare(),
        class: class.into(),
        constant_name: constant_name.into(),
    }
    .into()
}

pub fn const_fetch(constant: impl Into<Option<Node>>) -> Node {
    expr::ConstFetch {
        data: bare(),
        constant: constant.into(),
    }
    .into()
}

pub fn closure(
    params: Vec<Node>,
    uses: Vec<Node>,
    return_type: impl Into<Option<Node>>,
    stmts: Vec<Node>,
    is_static: bool,
    returns_ref: bool,
) -> Node {
    expr::Closure {
        data: with_attributes(Attributes {
            is_static: Some(is_static),
            returns_ref: Some(returns_ref),
            ..Attributes::default()
        }),
        params,
        uses,
        return_type: return_type.into(),
        stmts,
    }
    .into()
}

pub fn closure_use(variable: impl Into<Option<Node>>, by_ref: bool) -> Node {
    expr::ClosureUse {
        data: with_attributes(Attributes {
            by_ref: Some(by_ref),
            ..Attributes::default()
        }),
        variable: variable.into(),
    }
    .into()
}

pub fn new(class: impl Into<Option<Node>>, arguments: Vec<Node>) -> Node {
    expr::New {
        data: bare(),
        class: class.into(),
        arguments,
    }
    .into()
}

pub fn function_call(function: impl Into<Option<Node>>, arguments: Vec<Node>) -> Node {
    expr::FunctionCall {
        data: bare(),
        function: function.into(),
        arguments,
    }
    .into()
}

pub fn method_call(
    variable: impl Into<Option<Node>>,
    method: impl Into<Option<Node>>,
    arguments: Vec<Node>,
) -> Node {
    expr::MethodCall {
        data: bare(),
        variable: variable.into(),
        method: method.into(),
        arguments,
    }
    .into()
}

pub fn static_call(
    class: impl Into<Option<Node>>,
    call: impl Into<Option<Node>>,
    arguments: Vec<Node>,
) -> Node {
    expr::StaticCall {
        data: bare(),
        class: class.into(),
        call: call.into(),
        arguments,
    }
    .into()
}

pub fn property_fetch(variable: impl Into<Option<Node>>, property: impl Into<Option<Node>>) -> Node {
    expr::PropertyFetch {
        data: bare(),
        variable: variable.into(),
        property: property.into(),
    }
    .into()
}

pub fn static_property_fetch(class: impl Into<Option<Node>>, property: impl Into<Option<Node>>) -> Node {
    expr::StaticPropertyFetch {
        data: bare(),
        class: class.into(),
        property: property.into(),
    }
    .into()
}

// statements

pub fn expression(expr: impl Into<Option<Node>>) -> Node {
    stmt::Expression {
        data: bare(),
        expr: expr.into(),
    }
    .into()
}

pub fn stmt_list(stmts: Vec<Node>) -> Node {
    stmt::StmtList { data: bare(), stmts }.into()
}

pub fn function(
    function_name: impl Into<Option<Node>>,
    returns_ref: bool,
    params: Vec<Node>,
    return_type: impl Into<Option<Node>>,
    stmts: Vec<Node>,
) -> Node {
    stmt::Function {
        data: with_attributes(Attributes {
            returns_ref: Some(returns_ref),
            ..Attributes::default()
        }),
        function_name: function_name.into(),
        params,
        return_type: return_type.into(),
        stmts,
    }
    .into()
}

pub fn class(
    class_name: impl Into<Option<Node>>,
    modifiers: Vec<Node>,
    args: Vec<Node>,
    extends: impl Into<Option<Node>>,
    implements: Vec<Node>,
    stmts: Vec<Node>,
) -> Node {
    stmt::Class {
        data: bare(),
        class_name: class_name.into(),
        modifiers,
        args,
        extends: extends.into(),
        implements,
        stmts,
    }
    .into()
}

pub fn class_method(
    method_name: impl Into<Option<Node>>,
    modifiers: Vec<Node>,
    returns_ref: bool,
    params: Vec<Node>,
    return_type: impl Into<Option<Node>>,
    stmts: Vec<Node>,
) -> Node {
    stmt::ClassMethod {
        data: with_attributes(Attributes {
            returns_ref: Some(returns_ref),
            ..Attributes::default()
        }),
        method_name: method_name.into(),
        modifiers,
        params,
        return_type: return_type.into(),
        stmts,
    }
    .into()
}

pub fn throw(expr: impl Into<Option<Node>>) -> Node {
    stmt::Throw {
        data: bare(),
        expr: expr.into(),
    }
    .into()
}

pub fn return_stmt(expr: impl Into<Option<Node>>) -> Node {
    stmt::Return {
        data: bare(),
        expr: expr.into(),
    }
    .into()
}

pub fn echo(exprs: Vec<Node>) -> Node {
    stmt::Echo { data: bare(), exprs }.into()
}
