use std::collections::{HashMap, HashSet};
use terminal_size::{terminal_size, Width};

use crate::api::{CommandSpec, ReaderRegistry, TypeReader};
use crate::constant::DEFAULT_TOTAL_WIDTH;
use crate::matcher::{flatten, CommandConfig, ParameterConfig};
use crate::model::TypeTag;
use crate::parser::{ConfigError, Console, GeneralParser, Printer, UserInterface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    allow_positional: bool,
    allow_repeats: bool,
    total_width: usize,
    print_help_on_exit: bool,
    docs_on_new_line: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_positional: false,
            allow_repeats: false,
            total_width: DEFAULT_TOTAL_WIDTH,
            print_help_on_exit: true,
            docs_on_new_line: false,
        }
    }
}

/// The command line parser builder.
///
/// Register one or more commands (with [`CommandLineParser::command`]), configure, and then [`CommandLineParser::build`].
/// With a single command, every token belongs to it.
/// With several, the first token selects the command.
///
/// ### Example
/// ```
/// # use argot_engine as argot;
/// use argot::{CommandLineParser, CommandSpec, ParameterSpec, TypeTag};
///
/// let parser = CommandLineParser::new()
///     .command(CommandSpec::new("foo")
///         .add(ParameterSpec::option("x", TypeTag::INT)))
///     .command(CommandSpec::new("bar")
///         .add(ParameterSpec::option("i", TypeTag::INT).short('i')))
///     .build()
///     .unwrap();
///
/// let values = parser.resolve(&["bar", "-i", "10"]).unwrap();
/// assert_eq!(values.command(), "bar");
/// assert_eq!(values.get_int("i"), Some(10));
/// ```
pub struct CommandLineParser {
    commands: Vec<CommandSpec>,
    groups: Vec<CommandSpec>,
    registry: ReaderRegistry,
    settings: Settings,
    user_interface: Option<Box<dyn UserInterface>>,
}

impl Default for CommandLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLineParser {
    /// Create a command line parser, with the built-in readers registered.
    pub fn new() -> Self {
        Self {
            commands: Vec::default(),
            groups: Vec::default(),
            registry: ReaderRegistry::default(),
            settings: Settings::default(),
            user_interface: None,
        }
    }

    /// Register a command.
    ///
    /// The registration order is the order commands are listed in help and diagnostics.
    pub fn command(mut self, command: CommandSpec) -> Self {
        self.commands.push(command);
        self
    }

    /// Register a shared parameter group, which commands may [`CommandSpec::embed`].
    ///
    /// Groups share the command namespace, but are never selectable on the Cli.
    ///
    /// ### Example
    /// ```
    /// # use argot_engine as argot;
    /// use argot::{CommandLineParser, CommandSpec, ParameterSpec, TypeTag};
    ///
    /// let parser = CommandLineParser::new()
    ///     .group(CommandSpec::new("logging")
    ///         .add(ParameterSpec::flag("verbose").short('v')))
    ///     .command(CommandSpec::new("build")
    ///         .add(ParameterSpec::option("target", TypeTag::STR))
    ///         .embed("logging"))
    ///     .command(CommandSpec::new("clean")
    ///         .embed("logging"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let values = parser.resolve(&["clean", "-v"]).unwrap();
    /// assert_eq!(values.get_bool("verbose"), Some(true));
    /// ```
    pub fn group(mut self, group: CommandSpec) -> Self {
        self.groups.push(group);
        self
    }

    /// Register (or replace) the reader for `tag`.
    ///
    /// ### Example
    /// ```
    /// # use argot_engine as argot;
    /// use argot::{CommandLineParser, CommandSpec, ParameterSpec, TypeReader, TypeTag};
    /// use std::net::Ipv4Addr;
    ///
    /// let parser = CommandLineParser::new()
    ///     .reader(TypeTag::new("ip"), TypeReader::custom::<Ipv4Addr>("ip"))
    ///     .command(CommandSpec::new("ping")
    ///         .add(ParameterSpec::option("host", TypeTag::new("ip"))))
    ///     .build()
    ///     .unwrap();
    ///
    /// let values = parser.resolve(&["--host", "127.0.0.1"]).unwrap();
    /// assert_eq!(values.downcast::<Ipv4Addr>("host"), Some(&Ipv4Addr::LOCALHOST));
    /// ```
    pub fn reader(mut self, tag: TypeTag, reader: TypeReader) -> Self {
        self.registry.register(tag, reader);
        self
    }

    /// Allow bare values to bind, in declaration order, to any non-flag parameter without a value yet.
    /// Defaults to `false`.
    pub fn allow_positional(mut self, allow_positional: bool) -> Self {
        self.settings.allow_positional = allow_positional;
        self
    }

    /// Allow a non-repeatable parameter to be supplied many times, with the last value winning.
    /// Defaults to `false`.
    pub fn allow_repeats(mut self, allow_repeats: bool) -> Self {
        self.settings.allow_repeats = allow_repeats;
        self
    }

    /// The width that help text wraps to.
    /// Defaults to `95`.
    pub fn total_width(mut self, total_width: usize) -> Self {
        self.settings.total_width = total_width;
        self
    }

    /// Set the help text width from the attached terminal.
    /// Without a terminal, the width is unchanged.
    pub fn fit_terminal(mut self) -> Self {
        if let Some((Width(width), _)) = terminal_size() {
            self.settings.total_width = width as usize;
        }

        self
    }

    /// Whether a rendered failure is followed by the expected signature.
    /// Defaults to `true`.
    pub fn print_help_on_exit(mut self, print_help_on_exit: bool) -> Self {
        self.settings.print_help_on_exit = print_help_on_exit;
        self
    }

    /// Whether parameter documentation is rendered on its own line.
    /// Defaults to `false`.
    pub fn docs_on_new_line(mut self, docs_on_new_line: bool) -> Self {
        self.settings.docs_on_new_line = docs_on_new_line;
        self
    }

    /// Redirect printed output.
    /// Defaults to [`Console`].
    pub fn user_interface(mut self, user_interface: impl UserInterface + 'static) -> Self {
        self.user_interface.replace(Box::new(user_interface));
        self
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build(self) -> Result<GeneralParser, ConfigError> {
        let CommandLineParser {
            commands,
            groups,
            registry,
            settings,
            user_interface,
        } = self;

        if commands.is_empty() {
            return Err(ConfigError::NoCommands);
        }

        let mut names = HashSet::new();

        for spec in commands.iter().chain(groups.iter()) {
            let name = spec.name();

            if name.is_empty() || name.starts_with('-') || name.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidCommandName(name.to_string()));
            }

            if !names.insert(name) {
                return Err(ConfigError::DuplicateCommand(name.to_string()));
            }
        }

        let namespace: HashMap<&str, &CommandSpec> = commands
            .iter()
            .chain(groups.iter())
            .map(|spec| (spec.name(), spec))
            .collect();
        let mut command_configs = Vec::default();

        for spec in &commands {
            let mut parameters = Vec::default();

            for parameter in flatten(spec, &namespace)? {
                parameter.validate(spec.name())?;
                let reader =
                    registry
                        .lookup(parameter.type_tag())
                        .ok_or_else(|| ConfigError::UnknownType {
                            name: parameter.long_name().to_string(),
                            tag: parameter.type_tag().to_string(),
                        })?;
                parameters.push(ParameterConfig::new(parameter.clone(), reader));
            }

            command_configs.push(CommandConfig::new(
                spec.name(),
                spec.doc().map(str::to_string),
                parameters,
            )?);
        }

        Ok(GeneralParser::new(
            command_configs,
            settings.allow_positional,
            settings.allow_repeats,
            Printer::new(
                settings.total_width,
                settings.docs_on_new_line,
                settings.print_help_on_exit,
            ),
            user_interface.unwrap_or_else(|| Box::new(Console::default())),
        ))
    }
}
