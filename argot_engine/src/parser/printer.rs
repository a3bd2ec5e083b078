use crate::constant::*;
use crate::matcher::{CommandConfig, ParameterConfig};
use crate::model::Arity;
use crate::outcome::{Diagnostic, Diagnostics};
use crate::parser::column::*;

#[derive(Debug, Clone)]
pub(crate) struct Printer {
    total_width: usize,
    docs_on_new_line: bool,
    print_help_on_exit: bool,
}

impl Printer {
    pub(crate) fn new(total_width: usize, docs_on_new_line: bool, print_help_on_exit: bool) -> Self {
        Self {
            total_width,
            docs_on_new_line,
            print_help_on_exit,
        }
    }

    /// Render the full signature of every command.
    pub(crate) fn format_commands(&self, commands: &[CommandConfig]) -> String {
        match commands {
            [command] => self.format_command(command, 0).join("\n"),
            _ => {
                let mut lines = vec![AVAILABLE_SUB_COMMANDS.to_string()];

                for command in commands {
                    lines.push(String::default());
                    lines.extend(self.format_command(command, SUB_COMMAND_INDENT));
                }

                lines.join("\n")
            }
        }
    }

    pub(crate) fn format_command(&self, command: &CommandConfig, indent: usize) -> Vec<String> {
        let mut lines = vec![format!("{:indent$}{}", "", command.name())];
        let inner_indent = indent + ARGUMENT_INDENT;

        if let Some(doc) = command.doc() {
            let width = std::cmp::max(
                self.total_width.saturating_sub(inner_indent),
                MINIMUM_MIDDLE_WIDTH,
            );
            lines.extend(
                chunk(doc, width)
                    .into_iter()
                    .map(|line| format!("{:inner_indent$}{line}", "")),
            );
        }

        let rows: Vec<(String, Option<&str>)> = command
            .parameters()
            .iter()
            .filter(|parameter| !parameter.spec().is_hidden())
            .map(|parameter| (render_short(parameter), parameter.spec().doc()))
            .collect();
        let left_width = rows
            .iter()
            .map(|(short, _)| short.chars().count())
            .max()
            .unwrap_or(1);
        let column_renderer = ColumnRenderer::guided(
            PaddingWidth::new(PADDING_WIDTH).expect("internal error - padding must be valid"),
            LeftWidth::new(left_width).expect("internal error - parameter renders are never empty"),
            TotalWidth(self.total_width),
            inner_indent,
            self.docs_on_new_line,
        );

        for (short, doc) in rows {
            lines.extend(column_renderer.render(inner_indent, &short, doc));
        }

        lines
    }

    /// Render every diagnostic, followed by the relevant signature when configured.
    pub(crate) fn render_failure(&self, commands: &[CommandConfig], diagnostics: &Diagnostics) -> String {
        let command = diagnostics
            .command()
            .and_then(|name| commands.iter().find(|command| command.name() == name));
        let mut lines: Vec<String> = diagnostics
            .items()
            .iter()
            .flat_map(|diagnostic| render_diagnostic(command, diagnostic))
            .collect();

        if self.print_help_on_exit {
            lines.push(String::default());

            match command {
                Some(command) => lines.push(format!(
                    "{EXPECTED_SIGNATURE}{}",
                    self.format_command(command, 0).join("\n")
                )),
                None => lines.push(self.format_commands(commands)),
            }
        }

        lines.join("\n")
    }
}

/// Render the short form of a parameter, as it's referenced on the Cli.
pub(crate) fn render_short(parameter: &ParameterConfig) -> String {
    let spec = parameter.spec();
    let label = parameter.reader().short_label();

    if spec.arity() == Arity::Leftover {
        return format!("{} <{label}>...", spec.long_name());
    }

    if spec.is_positional() {
        return format!("{} <{label}>", spec.long_name());
    }

    let name = match spec.short_name() {
        Some(short) => format!("-{short} --{}", spec.long_name()),
        None => format!("--{}", spec.long_name()),
    };

    if spec.is_flag() {
        name
    } else {
        format!("{name} <{label}>")
    }
}

fn render_parameter(command: Option<&CommandConfig>, name: &str) -> String {
    match command.and_then(|command| command.find(name)) {
        Some(parameter) => render_short(parameter),
        None => format!("--{name}"),
    }
}

fn quote_all(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("{value:?}"))
        .collect::<Vec<String>>()
        .join(" ")
}

pub(crate) fn render_diagnostic(command: Option<&CommandConfig>, diagnostic: &Diagnostic) -> Vec<String> {
    match diagnostic {
        Diagnostic::MissingArgument { parameter } => vec![format!(
            "Missing argument: {}",
            render_parameter(command, parameter)
        )],
        Diagnostic::MissingValue { parameter, .. } => vec![format!(
            "Incomplete argument {} is missing a corresponding value",
            render_parameter(command, parameter)
        )],
        Diagnostic::UnknownArgument { token, .. } => vec![format!("Unknown argument: {token:?}")],
        Diagnostic::DuplicateArgument { parameter, values } => vec![format!(
            "Duplicate arguments for {}: {}",
            render_parameter(command, parameter),
            quote_all(values)
        )],
        Diagnostic::ConversionError {
            parameter,
            values,
            message,
        } => vec![format!(
            "Invalid argument {} failed to parse {} due to {message}",
            render_parameter(command, parameter),
            quote_all(values)
        )],
        Diagnostic::MissingCommand { available } => vec![format!(
            "Need to specify a sub command: {}",
            available.join(", ")
        )],
        Diagnostic::UnknownCommand { token, available } => vec![format!(
            "Unable to find subcommand: {token}, available subcommands: {}",
            available.join(", ")
        )],
        Diagnostic::DashedCommand { token } => vec![
            "To select a subcommand to run, you don't need --s.".to_string(),
            format!(
                "Did you mean `{}` instead of `{token}`?",
                token.trim_start_matches('-')
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ParameterSpec, ReaderRegistry};
    use crate::matcher::{command, scenario};
    use crate::model::TypeTag;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn documented() -> CommandConfig {
        let registry = ReaderRegistry::default();
        let parameters = vec![
            ParameterSpec::option("foo", TypeTag::STR)
                .short('f')
                .help("The foo."),
            ParameterSpec::option("my-num", TypeTag::INT)
                .default_value(2_i64)
                .help("The number."),
            ParameterSpec::flag("bool"),
            ParameterSpec::option("secret", TypeTag::STR).hidden(),
        ]
        .into_iter()
        .map(|spec| {
            let reader = registry.lookup(spec.type_tag()).unwrap();
            ParameterConfig::new(spec, reader)
        })
        .collect();
        CommandConfig::new("cmd", Some("My program.".to_string()), parameters).unwrap()
    }

    #[rstest]
    #[case(ParameterSpec::option("foo", TypeTag::STR).short('f'), "-f --foo <str>")]
    #[case(ParameterSpec::option("foo", TypeTag::STR), "--foo <str>")]
    #[case(ParameterSpec::optional("foo", TypeTag::INT), "--foo <int>")]
    #[case(ParameterSpec::repeated("k", TypeTag::INT).short('k'), "-k --k <int>")]
    #[case(ParameterSpec::option("k", TypeTag::seq(&TypeTag::FLOAT)), "--k <float>")]
    #[case(ParameterSpec::flag("bool").short('b'), "-b --bool")]
    #[case(ParameterSpec::flag("bool"), "--bool")]
    #[case(ParameterSpec::option("name", TypeTag::STR).short('n').positional(), "name <str>")]
    #[case(ParameterSpec::leftover("rest", TypeTag::STR), "rest <str>...")]
    fn render_short_parameter(#[case] spec: ParameterSpec, #[case] expected: &str) {
        let reader = ReaderRegistry::default().lookup(spec.type_tag()).unwrap();
        assert_eq!(render_short(&ParameterConfig::new(spec, reader)), expected);
    }

    #[test]
    fn format_command() {
        // Setup
        let printer = Printer::new(DEFAULT_TOTAL_WIDTH, false, true);

        // Execute
        let help = printer.format_commands(&[documented()]);

        // Verify
        assert_eq!(
            help,
            r#"cmd
  My program.
  -f --foo <str>  The foo.
  --my-num <int>  The number.
  --bool"#
        );
    }

    #[test]
    fn format_command_new_line() {
        // Setup
        let printer = Printer::new(DEFAULT_TOTAL_WIDTH, true, true);

        // Execute
        let help = printer.format_commands(&[documented()]);

        // Verify
        assert_eq!(
            help,
            r#"cmd
  My program.
  -f --foo <str>
      The foo.
  --my-num <int>
      The number.
  --bool"#
        );
    }

    #[test]
    fn format_command_wraps() {
        // Setup
        let printer = Printer::new(40, false, true);
        let registry = ReaderRegistry::default();
        let spec = ParameterSpec::option("x", TypeTag::INT)
            .help("The number of widgets to produce for the remainder of the afternoon.");
        let reader = registry.lookup(spec.type_tag()).unwrap();
        let command =
            CommandConfig::new("cmd", None, vec![ParameterConfig::new(spec, reader)]).unwrap();

        // Execute
        let help = printer.format_commands(&[command]);

        // Verify
        for line in help.lines() {
            assert!(line.chars().count() <= 40, "'{line}' is too wide");
        }
        assert_eq!(
            help,
            r#"cmd
  --x <int>  The number of widgets to
             produce for the remainder
             of the afternoon."#
        );
    }

    #[test]
    fn format_commands() {
        // Setup
        let printer = Printer::new(DEFAULT_TOTAL_WIDTH, false, true);
        let commands = vec![
            scenario(),
            command(vec![ParameterSpec::option("i", TypeTag::INT).short('i')]),
        ];

        // Execute
        let help = printer.format_commands(&commands);

        // Verify
        assert_eq!(
            help,
            r#"Available subcommands:

  cmd
    -f --foo <str>
    --my-num <int>
    --bool

  cmd
    -i --i <int>"#
        );
    }

    #[rstest]
    #[case(Diagnostic::MissingArgument { parameter: "foo".to_string() }, "Missing argument: -f --foo <str>")]
    #[case(Diagnostic::MissingValue { parameter: "my-num".to_string(), offset: 0 }, "Incomplete argument --my-num <int> is missing a corresponding value")]
    #[case(Diagnostic::UnknownArgument { token: "--x".to_string(), offset: 0 }, "Unknown argument: \"--x\"")]
    #[case(Diagnostic::DuplicateArgument { parameter: "my-num".to_string(), values: vec!["1".to_string(), "2".to_string()] }, "Duplicate arguments for --my-num <int>: \"1\" \"2\"")]
    #[case(Diagnostic::ConversionError { parameter: "my-num".to_string(), values: vec!["abc".to_string()], message: "invalid digit found in string".to_string() }, "Invalid argument --my-num <int> failed to parse \"abc\" due to invalid digit found in string")]
    #[case(Diagnostic::MissingCommand { available: vec!["foo".to_string(), "bar".to_string()] }, "Need to specify a sub command: foo, bar")]
    #[case(Diagnostic::UnknownCommand { token: "baz".to_string(), available: vec!["foo".to_string(), "bar".to_string()] }, "Unable to find subcommand: baz, available subcommands: foo, bar")]
    #[case(Diagnostic::DashedCommand { token: "--foo".to_string() }, "To select a subcommand to run, you don't need --s.\nDid you mean `foo` instead of `--foo`?")]
    fn render_diagnostic_message(#[case] diagnostic: Diagnostic, #[case] expected: &str) {
        let command = scenario();
        assert_eq!(render_diagnostic(Some(&command), &diagnostic).join("\n"), expected);
    }

    #[test]
    fn render_failure() {
        // Setup
        let commands = vec![scenario()];
        let diagnostics = Diagnostics::new(
            Some("cmd".to_string()),
            vec![
                Diagnostic::MissingArgument {
                    parameter: "foo".to_string(),
                },
                Diagnostic::UnknownArgument {
                    token: "--wrong-flag".to_string(),
                    offset: 0,
                },
            ],
        );

        // Execute
        let with_help = Printer::new(DEFAULT_TOTAL_WIDTH, false, true).render_failure(&commands, &diagnostics);
        let without_help = Printer::new(DEFAULT_TOTAL_WIDTH, false, false).render_failure(&commands, &diagnostics);

        // Verify
        assert_eq!(
            with_help,
            r#"Missing argument: -f --foo <str>
Unknown argument: "--wrong-flag"

Expected Signature: cmd
  -f --foo <str>
  --my-num <int>
  --bool"#
        );
        assert_eq!(
            without_help,
            r#"Missing argument: -f --foo <str>
Unknown argument: "--wrong-flag""#
        );
    }

    #[test]
    fn render_failure_dispatch() {
        // Setup
        let commands = vec![
            scenario(),
            command(vec![ParameterSpec::option("i", TypeTag::INT)]),
        ];
        let diagnostics = Diagnostics::new(
            None,
            vec![Diagnostic::MissingCommand {
                available: vec!["cmd".to_string(), "cmd".to_string()],
            }],
        );

        // Execute
        let message = Printer::new(DEFAULT_TOTAL_WIDTH, false, true).render_failure(&commands, &diagnostics);

        // Verify
        assert_contains!(message, "Need to specify a sub command: cmd, cmd\n\nAvailable subcommands:");
        assert_contains!(message, "    --i <int>");
    }
}
