//! `argot` is a declarative, diagnostics-first command line argument resolution engine for Rust.
//!
//! Most command line parsers stop at the first problem they find.
//! `argot` instead resolves the whole input, and reports *every* problem it finds in a single pass.
//! Specifically, `argot` attempts to prioritize the following design concerns:
//! * *Declarative configuration*:
//! The user describes commands and their parameters as data; the parser is built (and validated) once, up front.
//! * *Diagnostics as data*:
//! Failures are returned as structured [`Diagnostic`]s, which may be inspected, rendered, or printed.
//! * *Pure resolution*:
//! [`GeneralParser::resolve`] never prints, and never exits the process.
//! The printing and exiting entry points are thin layers over it.
//! * *Pluggable conversion*:
//! Any type may be read from the Cli by registering a [`TypeReader`].
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! ```console
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer 1 blah
//! Invalid argument item <uint>... failed to parse "1" "blah" due to invalid digit found in string
//!
//! Expected Signature: summer
//!   Sum the items.
//!   item <uint>...  The items to sum.
//!   -v --verbose
//! ```
//!
//! # Commands
//! Configure `argot` by starting with a [`CommandLineParser`] and registering one or more [`CommandSpec`]s.
//! Each command holds an ordered list of [`ParameterSpec`]s.
//!
//! With a single command, every Cli token belongs to it.
//! With many commands, the first token selects the command, and the remaining tokens belong to it.
//!
//! ### Parameters
//! * [`ParameterSpec::option`]: a named parameter that takes exactly one value (ex: `--foo bar`, `-f bar`, `--foo=bar`).
//! Without a default, it must be supplied.
//! * [`ParameterSpec::optional`]: as above, but may be omitted, resolving to [`Value::Absent`].
//! * [`ParameterSpec::repeated`]: may be supplied any number of times, collecting a [`Value::Seq`].
//! * [`ParameterSpec::leftover`]: collects every bare value that no other parameter takes.
//! * [`ParameterSpec::flag`]: a no-value presence switch (ex: `--verbose`), resolving to `true` when present.
//!
//! Bare values (ex: `hello`) only bind when the parameter is [`ParameterSpec::positional`], or when the parser is configured with [`CommandLineParser::allow_positional`].
//! In both cases, values bind in declaration order to the first eligible parameter that has not yet received one.
//!
//! ### Shared groups
//! Commands may embed other commands (or [`CommandLineParser::group`]s), inlining their parameters at that position.
//!
//! ```no_run
#![doc = include_str!("../demos/sub_command.rs")]
//! ```
//!
//! ```console
//! $ sub_command foo 1 -i 2 -i 3
//! Used sub-command 'foo'.
//! Foo: 6
//!
//! $ sub_command --foo
//! To select a subcommand to run, you don't need --s.
//! Did you mean `foo` instead of `--foo`?
//!
//! Available subcommands:
//! <truncated>
//! ```
//!
//! # Types
//! Every parameter carries a [`TypeTag`], which selects the [`TypeReader`] used to convert its tokens.
//! The built-in tags are `str`, `int`, `uint`, `float`, `bool`, `char` and `flag`.
//! The composites `seq<T>` and `opt<T>` are available for any registered `T`.
//!
//! # Diagnostics
//! A failed resolution carries every [`Diagnostic`] found, ordered: missing arguments, unknown arguments, duplicates, missing values, then conversion errors.
//! ```
//! use argot::{CommandLineParser, CommandSpec, Diagnostic, ParameterSpec, TypeTag};
//!
//! let parser = CommandLineParser::new()
//!     .command(CommandSpec::new("program")
//!         .add(ParameterSpec::option("foo", TypeTag::STR))
//!         .add(ParameterSpec::option("num", TypeTag::INT)))
//!     .build()
//!     .unwrap();
//!
//! let diagnostics = parser.resolve(&["--num", "x", "--what"]).unwrap_err();
//! assert_eq!(diagnostics.len(), 3);
//! assert!(matches!(diagnostics.items()[0], Diagnostic::MissingArgument { .. }));
//! assert!(matches!(diagnostics.items()[1], Diagnostic::UnknownArgument { .. }));
//! assert!(matches!(diagnostics.items()[2], Diagnostic::ConversionError { .. }));
//! ```
//!
//! # Features
//! * `tracing_debug`: emit debug logs of the resolution via [`tracing`](https://docs.rs/tracing/latest/tracing/).

pub use argot_engine::*;
