use std::env;

use crate::matcher::*;
use crate::outcome::*;
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured command line parser.
/// Built via [`CommandLineParser::build`](crate::CommandLineParser::build).
///
/// A `GeneralParser` is immutable; it may resolve any number of token lists, including concurrently.
pub struct GeneralParser {
    commands: Vec<CommandConfig>,
    allow_positional: bool,
    allow_repeats: bool,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for GeneralParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("commands", &self.command_names())
            .field("allow_positional", &self.allow_positional)
            .field("allow_repeats", &self.allow_repeats)
            .finish()
    }
}

impl GeneralParser {
    pub(crate) fn new(
        commands: Vec<CommandConfig>,
        allow_positional: bool,
        allow_repeats: bool,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            commands,
            allow_positional,
            allow_repeats,
            printer,
            user_interface,
        }
    }

    /// The registered command names, in registration order.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(CommandConfig::name).collect()
    }

    fn dispatch(&self, tokens: &[&str]) -> Result<(&CommandConfig, usize), Diagnostics> {
        if let [command] = self.commands.as_slice() {
            return Ok((command, 0));
        }

        let available = || -> Vec<String> {
            self.command_names()
                .into_iter()
                .map(str::to_string)
                .collect()
        };
        let find = |name: &str| self.commands.iter().find(|command| command.name() == name);

        let token = match tokens.first() {
            Some(token) => *token,
            None => {
                return Err(Diagnostics::new(
                    None,
                    vec![Diagnostic::MissingCommand {
                        available: available(),
                    }],
                ))
            }
        };

        if let Some(command) = find(token) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Selected command '{token}'.");
            }

            return Ok((command, 1));
        }

        let dashed = match classify(token) {
            Token::Long { name, .. } => find(name).is_some(),
            Token::Short { alias, .. } => find(alias.to_string().as_str()).is_some(),
            _ => false,
        };
        let diagnostic = if dashed {
            Diagnostic::DashedCommand {
                token: token.to_string(),
            }
        } else {
            Diagnostic::UnknownCommand {
                token: token.to_string(),
                available: available(),
            }
        };

        Err(Diagnostics::new(None, vec![diagnostic]))
    }

    /// Resolve the tokens into typed values, or every diagnostic found.
    ///
    /// Resolution is pure: nothing is printed, and the process is never exited.
    ///
    /// ### Example
    /// ```
    /// # use argot_engine as argot;
    /// use argot::{CommandLineParser, CommandSpec, ParameterSpec, TypeTag};
    ///
    /// let parser = CommandLineParser::new()
    ///     .command(CommandSpec::new("program")
    ///         .add(ParameterSpec::option("foo", TypeTag::STR).short('f')))
    ///     .build()
    ///     .unwrap();
    ///
    /// let values = parser.resolve(&["-f", "hello"]).unwrap();
    /// assert_eq!(values.get_str("foo"), Some("hello"));
    /// assert!(parser.resolve(&[]).is_err());
    /// ```
    pub fn resolve(&self, tokens: &[&str]) -> ParseOutcome {
        let (command, skip) = self.dispatch(tokens)?;
        let classified = tokenize(&tokens[skip..], skip);
        let matches =
            TokenMatcher::new(command, self.allow_positional, self.allow_repeats).consume(&classified);

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Matched '{}' with {} diagnostic(s).",
                command.name(),
                matches.diagnostics.len()
            );
        }

        assemble(command, matches)
    }

    /// Render the full signature of every command.
    pub fn help(&self) -> String {
        self.printer.format_commands(&self.commands)
    }

    /// Print the full signature of every command.
    pub fn print_help(&self) {
        self.user_interface.print(self.help());
    }

    /// Render the diagnostics of a failed resolution, followed by the signature when `print_help_on_exit` is set.
    pub fn render_failure(&self, diagnostics: &Diagnostics) -> String {
        self.printer.render_failure(&self.commands, diagnostics)
    }

    /// Resolve the tokens, rendering any failure into a [`ParseError`].
    ///
    /// ### Example
    /// ```
    /// # use argot_engine as argot;
    /// use argot::{CommandLineParser, CommandSpec, ParameterSpec, TypeTag};
    ///
    /// let parser = CommandLineParser::new()
    ///     .command(CommandSpec::new("program")
    ///         .add(ParameterSpec::option("foo", TypeTag::INT)))
    ///     .print_help_on_exit(false)
    ///     .build()
    ///     .unwrap();
    ///
    /// let error = parser.try_parse_tokens(&["--foo", "abc"]).unwrap_err();
    /// assert_eq!(
    ///     error.message(),
    ///     "Invalid argument --foo <int> failed to parse \"abc\" due to invalid digit found in string"
    /// );
    /// ```
    pub fn try_parse_tokens(&self, tokens: &[&str]) -> Result<ArgumentValues, ParseError> {
        self.resolve(tokens).map_err(|diagnostics| {
            ParseError::new(self.render_failure(&diagnostics), diagnostics)
        })
    }

    /// Run the command line parser against the input tokens.
    ///
    /// If at any point the parser encounters an error (ex: un-matched token, un-convertible token, etc), it prints the failure via the user interface and returns with `Err(1)`.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<ArgumentValues, i32> {
        match self.try_parse_tokens(tokens) {
            Ok(values) => Ok(values),
            Err(error) => {
                self.user_interface.print_error(error);
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If at any point the parser encounters an error (ex: un-matched token, un-convertible token, etc), it will exit with error code `1` (via [`std::process::exit`]).
    pub fn parse(&self) -> ArgumentValues {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(values) => values,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}
