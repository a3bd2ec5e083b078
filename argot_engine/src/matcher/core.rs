use std::collections::HashSet;

use crate::constant::FLAG_VALUE;
use crate::matcher::model::*;
use crate::matcher::token::{Classified, Token};
use crate::outcome::Diagnostic;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The outcome of matching tokens against one command.
///
/// `diagnostics` holds every structural problem, ordered: missing arguments, unknown arguments, duplicates, then missing values.
#[derive(Debug, PartialEq)]
pub(crate) struct Matches {
    pub binding: RawBinding,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug)]
pub(crate) struct TokenMatcher<'c> {
    command: &'c CommandConfig,
    allow_positional: bool,
    allow_repeats: bool,
    buffers: Vec<MatchBuffer>,
    unknown: Vec<Diagnostic>,
    incomplete: Vec<Diagnostic>,
    incomplete_positions: HashSet<usize>,
}

impl<'c> TokenMatcher<'c> {
    pub(crate) fn new(command: &'c CommandConfig, allow_positional: bool, allow_repeats: bool) -> Self {
        Self {
            command,
            allow_positional,
            allow_repeats,
            buffers: command
                .parameters()
                .iter()
                .map(|_| MatchBuffer::default())
                .collect(),
            unknown: Vec::default(),
            incomplete: Vec::default(),
            incomplete_positions: HashSet::default(),
        }
    }

    /// Match every token in a single left-to-right pass.
    pub(crate) fn consume(mut self, tokens: &[Classified]) -> Matches {
        let mut index = 0;

        while index < tokens.len() {
            let classified = &tokens[index];
            index += 1;

            match classified.token {
                Token::Long { name, inline } => {
                    let position = self.command.long(name);
                    index += self.match_reference(position, classified, inline, tokens.get(index));
                }
                Token::Short { alias, inline } => {
                    let position = self.command.short(alias);
                    index += self.match_reference(position, classified, inline, tokens.get(index));
                }
                Token::Cluster(_) => self.push_unknown(classified),
                Token::Value(value) => self.match_value(classified, value),
            }
        }

        self.close()
    }

    /// Match a named reference, returning the number of following tokens consumed.
    fn match_reference(
        &mut self,
        position: Option<usize>,
        classified: &Classified,
        inline: Option<&str>,
        next: Option<&Classified>,
    ) -> usize {
        let position = match position {
            Some(position) => position,
            None => {
                self.push_unknown(classified);
                return 0;
            }
        };
        let command = self.command;
        let parameter = &command.parameters()[position];

        if parameter.spec().is_flag() {
            if inline.is_some() {
                // Flags never take values.
                self.push_unknown(classified);
            } else {
                self.buffers[position].push(classified.offset, FLAG_VALUE);
            }

            return 0;
        }

        if let Some(value) = inline {
            self.buffers[position].push(classified.offset, value);
            return 0;
        }

        match next {
            Some(Classified {
                offset,
                token: Token::Value(value),
                ..
            }) => {
                self.buffers[position].push(*offset, *value);
                1
            }
            _ => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Reference '{}' is missing its value.", classified.raw);
                }

                self.incomplete.push(Diagnostic::MissingValue {
                    parameter: parameter.name().to_string(),
                    offset: classified.offset,
                });
                self.incomplete_positions.insert(position);
                0
            }
        }
    }

    fn match_value(&mut self, classified: &Classified, value: &str) {
        let command = self.command;
        let positional = command
            .parameters()
            .iter()
            .enumerate()
            .position(|(position, parameter)| {
                self.buffers[position].is_empty()
                    && !self.incomplete_positions.contains(&position)
                    && parameter.positional_eligible(self.allow_positional)
            });

        match positional.or(command.leftover()) {
            Some(position) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Value '{value}' bound to '{}'.",
                        command.parameters()[position].name()
                    );
                }

                self.buffers[position].push(classified.offset, value);
            }
            None => self.push_unknown(classified),
        }
    }

    fn push_unknown(&mut self, classified: &Classified) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Unknown argument '{}'.", classified.raw);
        }

        self.unknown.push(Diagnostic::UnknownArgument {
            token: classified.raw.to_string(),
            offset: classified.offset,
        });
    }

    fn close(self) -> Matches {
        let TokenMatcher {
            command,
            allow_repeats,
            buffers,
            unknown,
            incomplete,
            incomplete_positions,
            ..
        } = self;
        let mut missing = Vec::default();
        let mut duplicates = Vec::default();
        let mut slots = Vec::default();

        for (position, (buffer, parameter)) in
            buffers.into_iter().zip(command.parameters()).enumerate()
        {
            if buffer.is_empty() && incomplete_positions.contains(&position) {
                // Reported as a missing value.
                slots.push(Slot::Rejected);
                continue;
            }

            match buffer.close(parameter, allow_repeats) {
                Ok(slot) => slots.push(slot),
                Err(diagnostic @ Diagnostic::MissingArgument { .. }) => {
                    missing.push(diagnostic);
                    slots.push(Slot::Rejected);
                }
                Err(diagnostic) => {
                    duplicates.push(diagnostic);
                    slots.push(Slot::Rejected);
                }
            }
        }

        let mut diagnostics = missing;
        diagnostics.extend(unknown);
        diagnostics.extend(duplicates);
        diagnostics.extend(incomplete);

        Matches {
            binding: RawBinding { slots },
            diagnostics,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::{ParameterSpec, ReaderRegistry};
    use crate::matcher::token::tokenize;
    use crate::model::{TypeTag, Value};
    use rstest::rstest;

    pub(crate) fn command(parameters: Vec<ParameterSpec>) -> CommandConfig {
        let registry = ReaderRegistry::default();
        let parameters = parameters
            .into_iter()
            .map(|spec| {
                let reader = registry.lookup(spec.type_tag()).unwrap();
                ParameterConfig::new(spec, reader)
            })
            .collect();
        CommandConfig::new("cmd", None, parameters).unwrap()
    }

    // (foo: str, my-num: int = 2, bool: flag)
    pub(crate) fn scenario() -> CommandConfig {
        command(vec![
            ParameterSpec::option("foo", TypeTag::STR).short('f'),
            ParameterSpec::option("my-num", TypeTag::INT).default_value(2_i64),
            ParameterSpec::flag("bool"),
        ])
    }

    fn run(command: &CommandConfig, tokens: &[&str], allow_positional: bool, allow_repeats: bool) -> Matches {
        TokenMatcher::new(command, allow_positional, allow_repeats).consume(&tokenize(tokens, 0))
    }

    fn supplied(values: &[(usize, &str)]) -> Slot {
        Slot::Supplied(
            values
                .iter()
                .map(|(offset, value)| (*offset, value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn no_tokens() {
        // Setup
        let command = command(vec![]);

        // Execute
        let matches = run(&command, empty::slice(), false, false);

        // Verify
        assert_eq!(matches.binding.slots, vec![]);
        assert_eq!(matches.diagnostics, vec![]);
    }

    #[rstest]
    #[case(vec!["--foo", "hello", "--my-num", "3", "--bool"])]
    #[case(vec!["-f", "hello", "--my-num", "3", "--bool"])]
    #[case(vec!["--foo=hello", "--my-num=3", "--bool"])]
    #[case(vec!["-f=hello", "--my-num", "3", "--bool"])]
    fn named(#[case] tokens: Vec<&str>) {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &tokens, false, false);

        // Verify
        assert_eq!(matches.diagnostics, vec![]);
        assert_matches!(&matches.binding.slots[..], [
            Slot::Supplied(foo),
            Slot::Supplied(my_num),
            Slot::Supplied(flag),
        ] => {
            assert_eq!(foo[0].1, "hello");
            assert_eq!(my_num[0].1, "3");
            assert_eq!(flag[0].1, "true");
        });
    }

    #[test]
    fn defaults() {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &["--foo", "x"], false, false);

        // Verify
        assert_eq!(matches.diagnostics, vec![]);
        assert_eq!(
            matches.binding.slots,
            vec![
                supplied(&[(1, "x")]),
                Slot::Defaulted(Value::Int(2)),
                Slot::Defaulted(Value::Bool(false)),
            ]
        );
    }

    #[test]
    fn positional_equivalence() {
        // Setup
        let command = scenario();

        // Execute
        let named = run(&command, &["-f", "hello", "--my-num", "3", "--bool"], true, false);
        let positional = run(&command, &["hello", "3", "--bool"], true, false);

        // Verify
        assert_eq!(named.diagnostics, vec![]);
        assert_eq!(positional.diagnostics, vec![]);
        assert_eq!(
            positional.binding.slots,
            vec![
                supplied(&[(0, "hello")]),
                supplied(&[(1, "3")]),
                supplied(&[(2, "true")]),
            ]
        );
    }

    #[test]
    fn positional_skips_named() {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &["--foo", "a", "5"], true, false);

        // Verify
        assert_eq!(matches.diagnostics, vec![]);
        assert_eq!(matches.binding.slots[0], supplied(&[(1, "a")]));
        assert_eq!(matches.binding.slots[1], supplied(&[(2, "5")]));
    }

    #[test]
    fn positional_disabled() {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &["hello"], false, false);

        // Verify
        assert_eq!(
            matches.diagnostics,
            vec![
                Diagnostic::MissingArgument {
                    parameter: "foo".to_string(),
                },
                Diagnostic::UnknownArgument {
                    token: "hello".to_string(),
                    offset: 0,
                },
            ]
        );
    }

    #[test]
    fn positional_declared() {
        // Setup
        let command = command(vec![
            ParameterSpec::option("name", TypeTag::STR).positional(),
            ParameterSpec::option("other", TypeTag::STR),
        ]);

        // Execute
        let matches = run(&command, &["alice", "bob"], false, false);

        // Verify
        assert_eq!(
            matches.diagnostics,
            vec![
                Diagnostic::MissingArgument {
                    parameter: "other".to_string(),
                },
                Diagnostic::UnknownArgument {
                    token: "bob".to_string(),
                    offset: 1,
                },
            ]
        );
        assert_eq!(matches.binding.slots[0], supplied(&[(0, "alice")]));
    }

    #[test]
    fn wrong_flag() {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &["--wrong-flag"], false, false);

        // Verify
        assert_eq!(
            matches.diagnostics,
            vec![
                Diagnostic::MissingArgument {
                    parameter: "foo".to_string(),
                },
                Diagnostic::UnknownArgument {
                    token: "--wrong-flag".to_string(),
                    offset: 0,
                },
            ]
        );
    }

    #[rstest]
    #[case(vec!["--foo", "x", "-q"], "-q", 2)]
    #[case(vec!["--foo", "x", "-bq"], "-bq", 2)]
    #[case(vec!["--foo", "x", "--bool=true"], "--bool=true", 2)]
    #[case(vec!["--unknown=1", "--foo", "x"], "--unknown=1", 0)]
    fn unknown_reference(#[case] tokens: Vec<&str>, #[case] token: &str, #[case] offset: usize) {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &tokens, false, false);

        // Verify
        assert_eq!(
            matches.diagnostics,
            vec![Diagnostic::UnknownArgument {
                token: token.to_string(),
                offset,
            }]
        );
    }

    #[test]
    fn unknown_continues() {
        // Setup
        let command = scenario();

        // Execute
        // The value after an unknown reference is not consumed by it.
        let matches = run(&command, &["--nope", "v", "--foo", "x"], false, false);

        // Verify
        assert_eq!(
            matches.diagnostics,
            vec![
                Diagnostic::UnknownArgument {
                    token: "--nope".to_string(),
                    offset: 0,
                },
                Diagnostic::UnknownArgument {
                    token: "v".to_string(),
                    offset: 1,
                },
            ]
        );
        assert_eq!(matches.binding.slots[0], supplied(&[(3, "x")]));
    }

    #[rstest]
    #[case(vec!["--foo"], 0)]
    #[case(vec!["--foo", "--bool"], 0)]
    #[case(vec!["--bool", "-f"], 1)]
    fn missing_value(#[case] tokens: Vec<&str>, #[case] offset: usize) {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &tokens, false, false);

        // Verify
        // The missing value suppresses the missing argument.
        assert_eq!(
            matches.diagnostics,
            vec![Diagnostic::MissingValue {
                parameter: "foo".to_string(),
                offset,
            }]
        );
        assert_eq!(matches.binding.slots[0], Slot::Rejected);
    }

    #[test]
    fn missing_value_then_reference() {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &["--my-num", "--foo", "x"], false, false);

        // Verify
        assert_eq!(
            matches.diagnostics,
            vec![Diagnostic::MissingValue {
                parameter: "my-num".to_string(),
                offset: 0,
            }]
        );
        assert_eq!(matches.binding.slots[0], supplied(&[(2, "x")]));
    }

    #[test]
    fn negative_value() {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &["--foo", "x", "--my-num", "-3"], false, false);

        // Verify
        assert_eq!(matches.diagnostics, vec![]);
        assert_eq!(matches.binding.slots[1], supplied(&[(3, "-3")]));
    }

    #[test]
    fn repeatable() {
        // Setup
        let command = command(vec![ParameterSpec::repeated("k", TypeTag::INT).short('k')]);

        // Execute
        let matches = run(&command, &["-k", "3", "--k", "1", "-k=2"], false, false);

        // Verify
        assert_eq!(matches.diagnostics, vec![]);
        assert_eq!(
            matches.binding.slots,
            vec![supplied(&[(1, "3"), (3, "1"), (4, "2")])]
        );
    }

    #[test]
    fn duplicate() {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &["--foo", "1", "-f", "2", "--bool", "--bool"], false, false);

        // Verify
        assert_eq!(
            matches.diagnostics,
            vec![
                Diagnostic::DuplicateArgument {
                    parameter: "foo".to_string(),
                    values: vec!["1".to_string(), "2".to_string()],
                },
                Diagnostic::DuplicateArgument {
                    parameter: "bool".to_string(),
                    values: vec!["true".to_string(), "true".to_string()],
                },
            ]
        );
    }

    #[test]
    fn duplicate_allowed() {
        // Setup
        let command = scenario();

        // Execute
        let matches = run(&command, &["--foo", "1", "-f", "2"], false, true);

        // Verify
        assert_eq!(matches.diagnostics, vec![]);
        assert_eq!(matches.binding.slots[0], supplied(&[(3, "2")]));
    }

    #[test]
    fn leftover() {
        // Setup
        let command = command(vec![
            ParameterSpec::option("first", TypeTag::STR),
            ParameterSpec::flag("verbose"),
            ParameterSpec::leftover("rest", TypeTag::STR),
        ]);

        // Execute
        let matches = run(&command, &["a", "--verbose", "b", "-", "c"], true, false);

        // Verify
        assert_eq!(matches.diagnostics, vec![]);
        assert_eq!(
            matches.binding.slots,
            vec![
                supplied(&[(0, "a")]),
                supplied(&[(1, "true")]),
                supplied(&[(2, "b"), (3, "-"), (4, "c")]),
            ]
        );
    }

    #[test]
    fn diagnostic_order() {
        // Setup
        let command = command(vec![
            ParameterSpec::option("a", TypeTag::STR),
            ParameterSpec::option("b", TypeTag::STR),
            ParameterSpec::option("c", TypeTag::STR),
            ParameterSpec::option("d", TypeTag::STR),
        ]);

        // Execute
        let matches = run(&command, &["--d", "--x", "--c", "1", "--c", "2", "y"], false, false);

        // Verify
        assert_eq!(
            matches.diagnostics,
            vec![
                Diagnostic::MissingArgument {
                    parameter: "a".to_string(),
                },
                Diagnostic::MissingArgument {
                    parameter: "b".to_string(),
                },
                Diagnostic::UnknownArgument {
                    token: "--x".to_string(),
                    offset: 1,
                },
                Diagnostic::UnknownArgument {
                    token: "y".to_string(),
                    offset: 6,
                },
                Diagnostic::DuplicateArgument {
                    parameter: "c".to_string(),
                    values: vec!["1".to_string(), "2".to_string()],
                },
                Diagnostic::MissingValue {
                    parameter: "d".to_string(),
                    offset: 0,
                },
            ]
        );
    }
}
