pub(crate) const DEFAULT_TOTAL_WIDTH: usize = 95;

// The raw token recorded for a flag that was present.
pub(crate) const FLAG_VALUE: &str = "true";

pub(crate) const PADDING_WIDTH: usize = 2;
pub(crate) const ARGUMENT_INDENT: usize = 2;
pub(crate) const SUB_COMMAND_INDENT: usize = 2;
pub(crate) const NEW_LINE_DOC_INDENT: usize = 4;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

pub(crate) const EXPECTED_SIGNATURE: &str = "Expected Signature: ";
pub(crate) const AVAILABLE_SUB_COMMANDS: &str = "Available subcommands:";
