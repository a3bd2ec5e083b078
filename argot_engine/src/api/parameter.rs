use crate::model::{Arity, TypeTag, Value};
use crate::parser::ConfigError;

/// The immutable description of one command parameter.
///
/// Parameters are referenced on the Cli by their long name (`--NAME`), or optionally their short name (`-N`).
/// Some parameters may also be matched positionally (see [`ParameterSpec::positional`] and [`CommandLineParser::allow_positional`](crate::CommandLineParser::allow_positional)).
///
/// ### Example
/// ```
/// # use argot_engine as argot;
/// use argot::{Arity, ParameterSpec, TypeTag};
///
/// let parameter = ParameterSpec::option("my-num", TypeTag::INT)
///     .short('n')
///     .help("The number to use.")
///     .default_value(2_i64);
///
/// assert_eq!(parameter.long_name(), "my-num");
/// assert_eq!(parameter.short_name(), Some('n'));
/// assert_eq!(parameter.arity(), Arity::Single);
/// assert!(parameter.has_default());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    long_name: String,
    short_name: Option<char>,
    doc: Option<String>,
    arity: Arity,
    is_flag: bool,
    default: Option<Value>,
    type_tag: TypeTag,
    positional: bool,
    hidden: bool,
}

impl ParameterSpec {
    fn build(long_name: impl Into<String>, type_tag: TypeTag, arity: Arity) -> Self {
        Self {
            long_name: long_name.into(),
            short_name: None,
            doc: None,
            arity,
            is_flag: false,
            default: None,
            type_tag,
            positional: false,
            hidden: false,
        }
    }

    /// Create a parameter that takes precisely one value.
    pub fn option(long_name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self::build(long_name, type_tag, Arity::Single)
    }

    /// Create a parameter that takes at most one value, resolving to [`Value::Absent`] when omitted.
    pub fn optional(long_name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self::build(long_name, type_tag, Arity::OptionalSingle)
    }

    /// Create a parameter that may be supplied any number of times.
    pub fn repeated(long_name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self::build(long_name, type_tag, Arity::Repeatable)
    }

    /// Create a parameter that collects every bare value no other parameter takes.
    pub fn leftover(long_name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self::build(long_name, type_tag, Arity::Leftover)
    }

    /// Create a presence flag: `true` when given, `false` otherwise.
    pub fn flag(long_name: impl Into<String>) -> Self {
        let mut parameter = Self::build(long_name, TypeTag::FLAG, Arity::Single);
        parameter.is_flag = true;
        parameter.default.replace(Value::Bool(false));
        parameter
    }

    /// Set the short name.
    /// If repeated, only the final short name will apply.
    pub fn short(mut self, short_name: char) -> Self {
        self.short_name.replace(short_name);
        self
    }

    /// Document the parameter.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, doc: impl Into<String>) -> Self {
        self.doc.replace(doc.into());
        self
    }

    /// Set the value used when the parameter is not supplied.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default.replace(value.into());
        self
    }

    /// Allow the parameter to be matched by position, regardless of [`CommandLineParser::allow_positional`](crate::CommandLineParser::allow_positional).
    pub fn positional(mut self) -> Self {
        self.positional = true;
        self
    }

    /// Omit the parameter from help text.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// The long name, referenced as `--NAME`.
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// The short name, referenced as `-N`.
    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    /// The documentation.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// The arity.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Whether this is a presence flag.
    pub fn is_flag(&self) -> bool {
        self.is_flag
    }

    /// Whether a default value is declared.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The default value.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The semantic type.
    pub fn type_tag(&self) -> &TypeTag {
        &self.type_tag
    }

    /// Whether the parameter is always positional-eligible.
    pub fn is_positional(&self) -> bool {
        self.positional
    }

    /// Whether the parameter is omitted from help text.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn validate(&self, command: &str) -> Result<(), ConfigError> {
        let name = &self.long_name;

        if name.is_empty()
            || name.starts_with('-')
            || name.contains('=')
            || name.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::InvalidName {
                command: command.to_string(),
                name: name.clone(),
            });
        }

        if let Some(short) = self.short_name {
            // Digits are reserved for negative numbers (ex: `-3`).
            if short.is_ascii_digit() || short == '-' || short == '=' || short.is_whitespace() {
                return Err(ConfigError::InvalidShort {
                    name: name.clone(),
                    short,
                });
            }
        }

        if self.is_flag && self.positional {
            return Err(ConfigError::PositionalFlag(name.clone()));
        }

        if self.is_flag && self.default != Some(Value::Bool(false)) {
            return Err(ConfigError::FlagDefault(name.clone()));
        }

        if !self.is_flag && self.type_tag == TypeTag::FLAG {
            return Err(ConfigError::FlagType(name.clone()));
        }

        Ok(())
    }
}
