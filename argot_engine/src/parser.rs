mod base;
mod column;
mod interface;
mod middleware;
mod printer;
#[cfg(test)]
pub(crate) mod util;

pub use base::{ConfigError, ParseError};
pub use interface::{Console, UserInterface};
pub use middleware::GeneralParser;
pub(crate) use printer::Printer;
