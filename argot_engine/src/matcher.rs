mod core;
mod group;
mod model;
mod token;

pub(crate) use self::core::*;
pub(crate) use group::flatten;
pub(crate) use model::*;
pub(crate) use token::*;

#[cfg(test)]
pub(crate) use self::core::tests::{command, scenario};
