use std::any::Any;

use crate::model::Value;

/// The typed values of a successful resolution, keyed by parameter long name in declaration order.
///
/// Every parameter of the selected command is present.
/// Unsupplied optional parameters hold [`Value::Absent`], and unsupplied repeatable parameters an empty [`Value::Seq`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentValues {
    command: String,
    values: Vec<(String, Value)>,
}

impl ArgumentValues {
    pub(crate) fn new(command: impl Into<String>, values: Vec<(String, Value)>) -> Self {
        Self {
            command: command.into(),
            values,
        }
    }

    /// The name of the selected command.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The value of the parameter `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// The boolean value of `name` (including flags).
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// The integer value of `name`.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// The float value of `name`.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_float)
    }

    /// The string value of `name`.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// The character value of `name`.
    pub fn get_char(&self, name: &str) -> Option<char> {
        self.get(name).and_then(Value::as_char)
    }

    /// The sequence value of `name`.
    pub fn get_seq(&self, name: &str) -> Option<&[Value]> {
        self.get(name).and_then(Value::as_seq)
    }

    /// The custom value of `name`, when it holds a `T`.
    pub fn downcast<T: Any>(&self, name: &str) -> Option<&T> {
        self.get(name).and_then(Value::downcast_ref::<T>)
    }

    /// Iterate the `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values (the command declares no parameters).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One problem found while resolving tokens.
///
/// Offsets are positions in the full input token slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A required parameter received no value.
    MissingArgument {
        /// The parameter long name.
        parameter: String,
    },
    /// A named reference was not followed by a value.
    MissingValue {
        /// The parameter long name.
        parameter: String,
        /// The offset of the reference.
        offset: usize,
    },
    /// A token could not be matched to any parameter.
    UnknownArgument {
        /// The raw token.
        token: String,
        /// The offset of the token.
        offset: usize,
    },
    /// A non-repeatable parameter was supplied more than once.
    DuplicateArgument {
        /// The parameter long name.
        parameter: String,
        /// Every supplied value, in token order.
        values: Vec<String>,
    },
    /// A [`TypeReader`](crate::TypeReader) rejected the supplied values.
    ConversionError {
        /// The parameter long name.
        parameter: String,
        /// The values passed to the reader.
        values: Vec<String>,
        /// The reader message.
        message: String,
    },
    /// Several commands are registered, but no tokens were given.
    MissingCommand {
        /// The registered command names.
        available: Vec<String>,
    },
    /// The first token does not name a registered command.
    UnknownCommand {
        /// The raw token.
        token: String,
        /// The registered command names.
        available: Vec<String>,
    },
    /// The first token names a registered command, but with leading dashes (ex: `--foo`).
    DashedCommand {
        /// The raw token.
        token: String,
    },
}

/// Every problem found in one resolution attempt, in reporting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    command: Option<String>,
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn new(command: Option<String>, items: Vec<Diagnostic>) -> Self {
        Self { command, items }
    }

    /// The selected command, unless command selection itself failed.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// The diagnostics.
    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    /// The number of diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The result of resolving tokens: typed values, or every diagnostic found.
pub type ParseOutcome = Result<ArgumentValues, Diagnostics>;
