use std::any::Any;
use std::borrow::Cow;
use std::sync::Arc;

/// The cardinality of token groups a parameter accepts.
///
/// Inspired by argparse: <https://docs.python.org/3/library/argparse.html#nargs>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Precisely one value, unless the parameter declares a default.
    Single,
    /// At most one value; resolves to [`Value::Absent`] when not supplied.
    OptionalSingle,
    /// Any number of values (including `0`), collected in order into a [`Value::Seq`].
    Repeatable,
    /// Every bare value no other parameter takes, collected in order into a [`Value::Seq`].
    Leftover,
}

impl Arity {
    pub(crate) fn accepts_many(&self) -> bool {
        matches!(self, Arity::Repeatable | Arity::Leftover)
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

const SEQ_PREFIX: &str = "seq<";
const OPT_PREFIX: &str = "opt<";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Composite {
    Seq,
    Opt,
}

/// The semantic type of a parameter, used to find its [`TypeReader`](crate::TypeReader).
///
/// Composite tags are spelled `seq<T>` and `opt<T>`; the registry derives their readers from `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    /// Any string.
    pub const STR: TypeTag = TypeTag(Cow::Borrowed("str"));
    /// A signed 64 bit integer.
    pub const INT: TypeTag = TypeTag(Cow::Borrowed("int"));
    /// An unsigned integer, held as a [`Value::Int`].
    pub const UINT: TypeTag = TypeTag(Cow::Borrowed("uint"));
    /// A 64 bit float.
    pub const FLOAT: TypeTag = TypeTag(Cow::Borrowed("float"));
    /// `true` or `false`.
    pub const BOOL: TypeTag = TypeTag(Cow::Borrowed("bool"));
    /// A single character.
    pub const CHAR: TypeTag = TypeTag(Cow::Borrowed("char"));
    /// A presence flag.
    pub const FLAG: TypeTag = TypeTag(Cow::Borrowed("flag"));

    /// Create a type tag.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        TypeTag(name.into())
    }

    /// The tag for a sequence of `element`.
    pub fn seq(element: &TypeTag) -> Self {
        TypeTag(Cow::Owned(format!("{SEQ_PREFIX}{}>", element.0)))
    }

    /// The tag for an optional `element`.
    pub fn opt(element: &TypeTag) -> Self {
        TypeTag(Cow::Owned(format!("{OPT_PREFIX}{}>", element.0)))
    }

    /// The spelling of this tag.
    pub fn name(&self) -> &str {
        &self.0
    }

    pub(crate) fn split(&self) -> Option<(Composite, TypeTag)> {
        let inner = |prefix: &str| {
            self.0
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_suffix('>'))
                .filter(|inner| !inner.is_empty())
                .map(|inner| TypeTag(Cow::Owned(inner.to_string())))
        };

        if let Some(element) = inner(SEQ_PREFIX) {
            Some((Composite::Seq, element))
        } else {
            inner(OPT_PREFIX).map(|element| (Composite::Opt, element))
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved argument value.
#[derive(Debug, Clone)]
pub enum Value {
    /// A boolean, including flags.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A float.
    Float(f64),
    /// A string.
    Str(String),
    /// A single character.
    Char(char),
    /// An ordered collection of values.
    Seq(Vec<Value>),
    /// An optional parameter that was not supplied.
    Absent,
    /// A value produced by a custom [`TypeReader`](crate::TypeReader).
    Other(Arc<dyn Any + Send + Sync>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Absent, Value::Absent) => true,
            // Opaque values only compare by identity.
            (Value::Other(a), Value::Other(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// The boolean, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer, if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The float, if this is a [`Value::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The string, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    /// The character, if this is a [`Value::Char`].
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(value) => Some(*value),
            _ => None,
        }
    }

    /// The items, if this is a [`Value::Seq`].
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(values) => Some(values),
            _ => None,
        }
    }

    /// Whether this is [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// The custom value, if this is a [`Value::Other`] holding a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Other(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Seq(values)
    }
}
