mod command;
mod core;
mod parameter;
mod reader;

pub use self::core::*;
pub use command::*;
pub use parameter::*;
pub use reader::*;
