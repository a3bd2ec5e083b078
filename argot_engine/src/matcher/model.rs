use std::collections::HashMap;

use crate::api::{ParameterSpec, TypeReader};
use crate::model::{Arity, Value};
use crate::outcome::Diagnostic;
use crate::parser::ConfigError;

pub(crate) type OffsetValue = (usize, String);

/// A parameter compiled together with its reader.
#[derive(Debug, Clone)]
pub(crate) struct ParameterConfig {
    spec: ParameterSpec,
    reader: TypeReader,
}

impl ParameterConfig {
    pub(crate) fn new(spec: ParameterSpec, reader: TypeReader) -> Self {
        Self { spec, reader }
    }

    pub(crate) fn spec(&self) -> &ParameterSpec {
        &self.spec
    }

    pub(crate) fn reader(&self) -> &TypeReader {
        &self.reader
    }

    pub(crate) fn name(&self) -> &str {
        self.spec.long_name()
    }

    pub(crate) fn accepts_many(&self) -> bool {
        self.spec.arity().accepts_many() || self.reader.always_repeatable()
    }

    pub(crate) fn positional_eligible(&self, allow_positional: bool) -> bool {
        self.spec.is_positional()
            || (allow_positional && !self.spec.is_flag() && self.spec.arity() != Arity::Leftover)
    }

    pub(crate) fn may_be_empty(&self) -> bool {
        self.spec.has_default()
            || self.spec.arity() != Arity::Single
            || self.reader.allow_empty()
    }
}

/// A command with its flattened parameters, ready to match tokens against.
#[derive(Debug, Clone)]
pub(crate) struct CommandConfig {
    name: String,
    doc: Option<String>,
    parameters: Vec<ParameterConfig>,
    long_index: HashMap<String, usize>,
    short_index: HashMap<char, usize>,
    leftover: Option<usize>,
}

impl CommandConfig {
    pub(crate) fn new(
        name: impl Into<String>,
        doc: Option<String>,
        parameters: Vec<ParameterConfig>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let mut long_index = HashMap::default();
        let mut short_index = HashMap::default();
        let mut leftover = None;

        for (position, parameter) in parameters.iter().enumerate() {
            if long_index
                .insert(parameter.name().to_string(), position)
                .is_some()
            {
                return Err(ConfigError::DuplicateParameter {
                    command: name,
                    name: parameter.name().to_string(),
                });
            }

            if let Some(short) = parameter.spec().short_name() {
                if short_index.insert(short, position).is_some() {
                    return Err(ConfigError::DuplicateShort {
                        command: name,
                        short,
                    });
                }
            }

            if parameter.spec().arity() == Arity::Leftover && leftover.replace(position).is_some() {
                return Err(ConfigError::MultipleLeftover(name));
            }
        }

        Ok(Self {
            name,
            doc,
            parameters,
            long_index,
            short_index,
            leftover,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub(crate) fn parameters(&self) -> &[ParameterConfig] {
        &self.parameters
    }

    pub(crate) fn long(&self, name: &str) -> Option<usize> {
        self.long_index.get(name).copied()
    }

    pub(crate) fn short(&self, alias: char) -> Option<usize> {
        self.short_index.get(&alias).copied()
    }

    pub(crate) fn leftover(&self) -> Option<usize> {
        self.leftover
    }

    pub(crate) fn find(&self, name: &str) -> Option<&ParameterConfig> {
        self.long(name).map(|position| &self.parameters[position])
    }
}

/// What the matcher decided for one parameter.
#[derive(Debug, PartialEq)]
pub(crate) enum Slot {
    /// The matched token groups, in token order.
    Supplied(Vec<OffsetValue>),
    Defaulted(Value),
    /// Nothing matched, and nothing is required.
    Unsupplied,
    /// Already reported by a diagnostic; never converted.
    Rejected,
}

/// The per-parse binding of flattened parameter position to its [`Slot`].
#[derive(Debug, PartialEq)]
pub(crate) struct RawBinding {
    pub slots: Vec<Slot>,
}

#[derive(Debug, Default)]
pub(super) struct MatchBuffer {
    values: Vec<OffsetValue>,
}

impl MatchBuffer {
    pub(super) fn push(&mut self, offset: usize, value: impl Into<String>) {
        self.values.push((offset, value.into()));
    }

    pub(super) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(super) fn close(
        mut self,
        parameter: &ParameterConfig,
        allow_repeats: bool,
    ) -> Result<Slot, Diagnostic> {
        if self.values.is_empty() {
            return if let Some(default) = parameter.spec().default() {
                Ok(Slot::Defaulted(default.clone()))
            } else if parameter.may_be_empty() {
                Ok(Slot::Unsupplied)
            } else {
                Err(Diagnostic::MissingArgument {
                    parameter: parameter.name().to_string(),
                })
            };
        }

        if self.values.len() > 1 && !parameter.accepts_many() {
            if allow_repeats {
                // The last group wins.
                let last = self.values.split_off(self.values.len() - 1);
                return Ok(Slot::Supplied(last));
            }

            return Err(Diagnostic::DuplicateArgument {
                parameter: parameter.name().to_string(),
                values: self.values.into_iter().map(|(_, value)| value).collect(),
            });
        }

        Ok(Slot::Supplied(self.values))
    }
}
