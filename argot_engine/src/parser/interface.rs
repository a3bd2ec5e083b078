use crate::parser::ParseError;

/// The output boundary of a [`GeneralParser`](crate::GeneralParser).
///
/// Help and failures are printed through this interface; the default is [`Console`].
pub trait UserInterface: Send + Sync {
    /// Print a message (ex: help).
    fn print(&self, message: String);

    /// Print a failed parse.
    fn print_error(&self, error: ParseError);
}

/// Prints messages to stdout, and errors to stderr.
#[derive(Debug, Default)]
pub struct Console {}

impl UserInterface for Console {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{}", error.message());
    }
}
