//! Resolution engine for `argot`.
//! See the `argot` crate root for an overview.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod outcome;
mod parser;

pub use api::*;
pub use model::*;
pub use outcome::*;
pub use parser::{ConfigError, Console, GeneralParser, ParseError, UserInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
