use serde::Serialize;

use crate::position::Position;

pub const BY_REF: &str = "byRef";
pub const VARIADIC: &str = "variadic";
pub const STATIC: &str = "static";
pub const RETURNS_REF: &str = "returnsRef";
pub const PHP_DOC_COMMENT: &str = "phpDocComment";
pub const COMMENTS: &str = "comments";

/// A comment or doc comment lifted out of the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Comment {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is_doc(&self) -> bool {
        self.value.starts_with("/**") && self.value != "/**/"
    }
}

/// Per-node metadata that is not structural content.
///
/// Flags are `None` on kinds that do not carry them, so a `ClosureUse` built
/// with `by_ref = false` still reports a `byRef` entry while a `Throw` reports
/// nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_ref: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variadic: Option<bool>,
    #[serde(rename = "static", skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns_ref: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_doc_comment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

/// Borrowed view of one attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValue<'a> {
    Bool(bool),
    Str(&'a str),
    Comments(&'a [Comment]),
}

impl AttrValue<'_> {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<AttrValue<'_>> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Present entries in a fixed key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, AttrValue<'_>)> {
        [
            (BY_REF, self.by_ref.map(AttrValue::Bool)),
            (VARIADIC, self.variadic.map(AttrValue::Bool)),
            (STATIC, self.is_static.map(AttrValue::Bool)),
            (RETURNS_REF, self.returns_ref.map(AttrValue::Bool)),
            (
                PHP_DOC_COMMENT,
                self.php_doc_comment.as_deref().map(AttrValue::Str),
            ),
            (
                COMMENTS,
                (!self.comments.is_empty()).then_some(AttrValue::Comments(&self.comments)),
            ),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Leading trivia goes in front of anything attached earlier.
    pub fn prepend_comments(&mut self, comments: Vec<Comment>) {
        if comments.is_empty() {
            return;
        }
        let rest = std::mem::replace(&mut self.comments, comments);
        self.comments.extend(rest);
    }

    pub fn set_php_doc_comment(&mut self, doc: impl Into<String>) {
        self.php_doc_comment = Some(doc.into());
    }
}
