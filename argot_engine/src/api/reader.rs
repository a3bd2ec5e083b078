use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use crate::constant::FLAG_VALUE;
use crate::model::{Composite, TypeTag, Value};

type Convert = dyn Fn(&[String]) -> Result<Value, String> + Send + Sync;

/// The conversion contract from the raw tokens of one parameter to a typed [`Value`].
///
/// * `short_label` is shown in help and error text as `<short_label>`.
/// * `always_repeatable` lets the parameter receive any number of token groups, even without [`Arity::Repeatable`](crate::Arity::Repeatable).
/// * `allow_empty` lets the parameter be omitted; only then is `convert` ever called with no tokens.
///
/// ### Example
/// ```
/// # use argot_engine as argot;
/// use argot::{TypeReader, Value};
///
/// let percent = TypeReader::single("percent", |token| {
///     let value: i64 = token.parse().map_err(|e| format!("{e}"))?;
///     if (0..=100).contains(&value) {
///         Ok(Value::Int(value))
///     } else {
///         Err(format!("{value} is not within 0..=100"))
///     }
/// });
///
/// assert_eq!(percent.convert(&["42".to_string()]), Ok(Value::Int(42)));
/// assert!(percent.convert(&["420".to_string()]).is_err());
/// ```
#[derive(Clone)]
pub struct TypeReader {
    short_label: String,
    convert: Arc<Convert>,
    always_repeatable: bool,
    allow_empty: bool,
}

impl std::fmt::Debug for TypeReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeReader")
            .field("short_label", &self.short_label)
            .field("always_repeatable", &self.always_repeatable)
            .field("allow_empty", &self.allow_empty)
            .finish()
    }
}

impl TypeReader {
    /// Create a reader over the full ordered token list of a parameter.
    pub fn new(
        short_label: impl Into<String>,
        always_repeatable: bool,
        allow_empty: bool,
        convert: impl Fn(&[String]) -> Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            short_label: short_label.into(),
            convert: Arc::new(convert),
            always_repeatable,
            allow_empty,
        }
    }

    /// Create a reader that converts precisely one token.
    pub fn single(
        short_label: impl Into<String>,
        convert: impl Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        Self::new(short_label, false, false, move |tokens| match tokens {
            [token] => convert(token),
            _ => Err(format!(
                "expected a single value, but received {}",
                tokens.len()
            )),
        })
    }

    /// Create a single token reader from a [`FromStr`] type that maps into a built-in [`Value`].
    pub fn parsed<T>(short_label: impl Into<String>) -> Self
    where
        T: FromStr + Into<Value>,
        <T as FromStr>::Err: std::fmt::Display,
    {
        Self::single(short_label, |token| {
            T::from_str(token)
                .map(Into::into)
                .map_err(|error| error.to_string())
        })
    }

    /// Create a single token reader from a [`FromStr`] type, held opaquely as a [`Value::Other`].
    pub fn custom<T>(short_label: impl Into<String>) -> Self
    where
        T: FromStr + Send + Sync + 'static,
        <T as FromStr>::Err: std::fmt::Display,
    {
        Self::single(short_label, |token| {
            T::from_str(token)
                .map(|value| Value::Other(Arc::new(value)))
                .map_err(|error| error.to_string())
        })
    }

    /// The presence flag reader: `true` when matched, `false` otherwise.
    /// Flags never take values, so any other token is rejected.
    pub fn flag() -> Self {
        Self::new(TypeTag::FLAG.name(), false, true, |tokens| {
            match tokens.iter().find(|token| *token != FLAG_VALUE) {
                Some(token) => Err(format!("flags take no value, but received '{token}'")),
                None => Ok(Value::Bool(!tokens.is_empty())),
            }
        })
    }

    /// Create a reader that converts every token with `element`, collecting a [`Value::Seq`].
    pub fn sequence(element: &TypeReader) -> Self {
        let element = element.clone();
        Self::new(element.short_label.clone(), true, true, move |tokens| {
            tokens
                .iter()
                .map(|token| element.convert(std::slice::from_ref(token)))
                .collect::<Result<Vec<Value>, String>>()
                .map(Value::Seq)
        })
    }

    /// Create a reader that yields [`Value::Absent`] when there are no tokens, and otherwise defers to `element`.
    pub fn optional(element: &TypeReader) -> Self {
        let element = element.clone();
        Self::new(element.short_label.clone(), false, true, move |tokens| {
            if tokens.is_empty() {
                Ok(Value::Absent)
            } else {
                element.convert(tokens)
            }
        })
    }

    /// The label shown as `<short_label>`.
    pub fn short_label(&self) -> &str {
        &self.short_label
    }

    /// Whether any number of token groups may be supplied.
    pub fn always_repeatable(&self) -> bool {
        self.always_repeatable
    }

    /// Whether the reader accepts no tokens at all.
    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    /// Convert the raw tokens of a parameter.
    pub fn convert(&self, tokens: &[String]) -> Result<Value, String> {
        (self.convert)(tokens)
    }
}

/// The registry of [`TypeReader`]s keyed by [`TypeTag`].
///
/// The default registry holds `str`, `int`, `uint`, `float`, `bool`, `char` and `flag`.
/// Readers for `seq<T>` and `opt<T>` are derived on lookup for any registered `T`.
#[derive(Debug, Clone)]
pub struct ReaderRegistry {
    readers: HashMap<TypeTag, TypeReader>,
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(TypeTag::STR, TypeReader::parsed::<String>("str"));
        registry.register(TypeTag::INT, TypeReader::parsed::<i64>("int"));
        registry.register(
            TypeTag::UINT,
            TypeReader::single("uint", |token| {
                let value: u64 = token.parse().map_err(|e| format!("{e}"))?;
                i64::try_from(value)
                    .map(Value::Int)
                    .map_err(|e| format!("{e}"))
            }),
        );
        registry.register(TypeTag::FLOAT, TypeReader::parsed::<f64>("float"));
        registry.register(TypeTag::BOOL, TypeReader::parsed::<bool>("bool"));
        registry.register(TypeTag::CHAR, TypeReader::parsed::<char>("char"));
        registry.register(TypeTag::FLAG, TypeReader::flag());
        registry
    }
}

impl ReaderRegistry {
    /// Create a registry without any readers.
    pub fn empty() -> Self {
        Self {
            readers: HashMap::default(),
        }
    }

    /// Register (or replace) the reader for `tag`, returning the replaced reader.
    pub fn register(&mut self, tag: TypeTag, reader: TypeReader) -> Option<TypeReader> {
        self.readers.insert(tag, reader)
    }

    /// Find the reader for `tag`.
    pub fn lookup(&self, tag: &TypeTag) -> Option<TypeReader> {
        if let Some(reader) = self.readers.get(tag) {
            return Some(reader.clone());
        }

        let (composite, element) = tag.split()?;
        let element = self.lookup(&element)?;

        Some(match composite {
            Composite::Seq => TypeReader::sequence(&element),
            Composite::Opt => TypeReader::optional(&element),
        })
    }
}
