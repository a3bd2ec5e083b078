use thiserror::Error;

use crate::matcher::*;
use crate::model::{Arity, Value};
use crate::outcome::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An invalid parser configuration, reported by [`CommandLineParser::build`](crate::CommandLineParser::build).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No command was registered.
    #[error("Config error: at least one command must be registered.")]
    NoCommands,

    /// Two commands (or groups) share a name.
    #[error("Config error: cannot duplicate the command '{0}'.")]
    DuplicateCommand(String),

    /// A command name is empty, contains whitespace, or starts with `-`.
    #[error("Config error: invalid command name '{0}'.")]
    InvalidCommandName(String),

    /// Two parameters of a (flattened) command share a long name.
    #[error("Config error: cannot duplicate the parameter '{name}' in command '{command}'.")]
    DuplicateParameter {
        /// The command.
        command: String,
        /// The long name.
        name: String,
    },

    /// Two parameters of a (flattened) command share a short name.
    #[error("Config error: cannot duplicate the short name '{short}' in command '{command}'.")]
    DuplicateShort {
        /// The command.
        command: String,
        /// The short name.
        short: char,
    },

    /// A long name is empty, starts with `-`, or contains `=` or whitespace.
    #[error("Config error: invalid parameter name '{name}' in command '{command}'.")]
    InvalidName {
        /// The command.
        command: String,
        /// The long name.
        name: String,
    },

    /// A short name is a digit, `-`, `=`, or whitespace.
    #[error("Config error: invalid short name '{short}' for parameter '{name}'.")]
    InvalidShort {
        /// The long name.
        name: String,
        /// The short name.
        short: char,
    },

    /// A flag was declared positional.
    #[error("Config error: flag '{0}' cannot be positional.")]
    PositionalFlag(String),

    /// A flag was given a default other than `false`.
    #[error("Config error: flag '{0}' must default to false.")]
    FlagDefault(String),

    /// A non-flag parameter was declared with the `flag` type.
    #[error("Config error: parameter '{0}' cannot use the flag type; declare it as a flag.")]
    FlagType(String),

    /// A command declares more than one leftover parameter.
    #[error("Config error: command '{0}' declares more than one leftover parameter.")]
    MultipleLeftover(String),

    /// A command embeds a name that isn't registered.
    #[error("Config error: command '{command}' embeds unknown '{name}'.")]
    UnknownEmbed {
        /// The embedding command.
        command: String,
        /// The embedded name.
        name: String,
    },

    /// Embedding loops back on itself (the path ends with the repeated name).
    #[error("Config error: cyclic embedding '{}'.", .0.join(" -> "))]
    CyclicEmbed(Vec<String>),

    /// No reader is registered for a parameter's type tag.
    #[error("Config error: no reader registered for type '{tag}' of parameter '{name}'.")]
    UnknownType {
        /// The long name.
        name: String,
        /// The type tag.
        tag: String,
    },
}

/// A failed parse, for callers that propagate errors with `?`.
///
/// The message is the fully rendered failure (diagnostics, followed by help when configured).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Parse error: {message}")]
pub struct ParseError {
    message: String,
    diagnostics: Diagnostics,
}

impl ParseError {
    pub(crate) fn new(message: String, diagnostics: Diagnostics) -> Self {
        Self {
            message,
            diagnostics,
        }
    }

    /// The rendered failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The structured diagnostics.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Convert the matched tokens of `command` into typed values, collecting every failure.
pub(crate) fn assemble(command: &CommandConfig, matches: Matches) -> ParseOutcome {
    let Matches {
        binding,
        mut diagnostics,
    } = matches;
    let mut values = Vec::default();

    for (parameter, slot) in command.parameters().iter().zip(binding.slots) {
        let result = match slot {
            Slot::Supplied(groups) => {
                let tokens: Vec<String> = groups.into_iter().map(|(_, value)| value).collect();
                convert(parameter, tokens)
            }
            Slot::Defaulted(value) => Ok(value),
            Slot::Unsupplied => match parameter.spec().arity() {
                Arity::OptionalSingle => Ok(Value::Absent),
                Arity::Repeatable | Arity::Leftover => Ok(Value::Seq(Vec::default())),
                Arity::Single => convert(parameter, Vec::default()),
            },
            Slot::Rejected => continue,
        };

        match result {
            Ok(value) => values.push((parameter.name().to_string(), value)),
            Err((tokens, message)) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Reader '{}' rejected {tokens:?}: {message}",
                        parameter.reader().short_label()
                    );
                }

                diagnostics.push(Diagnostic::ConversionError {
                    parameter: parameter.name().to_string(),
                    values: tokens,
                    message,
                });
            }
        }
    }

    if diagnostics.is_empty() {
        Ok(ArgumentValues::new(command.name(), values))
    } else {
        Err(Diagnostics::new(
            Some(command.name().to_string()),
            diagnostics,
        ))
    }
}

fn convert(parameter: &ParameterConfig, tokens: Vec<String>) -> Result<Value, (Vec<String>, String)> {
    let reader = parameter.reader();

    let result = if parameter.spec().arity().accepts_many() && !reader.always_repeatable() {
        // Each token is one element.
        tokens
            .iter()
            .map(|token| reader.convert(std::slice::from_ref(token)))
            .collect::<Result<Vec<Value>, String>>()
            .map(Value::Seq)
    } else {
        reader.convert(&tokens)
    };

    result.map_err(|message| (tokens, message))
}
