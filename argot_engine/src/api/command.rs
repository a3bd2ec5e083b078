use crate::api::ParameterSpec;

/// One entry of a [`CommandSpec`], in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A parameter declared directly on the command.
    Parameter(ParameterSpec),
    /// The parameters of another registered command or group, by name.
    Embed(String),
}

/// The immutable description of a command (or a shared parameter group).
///
/// ### Example
/// ```
/// # use argot_engine as argot;
/// use argot::{CommandSpec, ParameterSpec, TypeTag};
///
/// let shared = CommandSpec::new("logging")
///     .add(ParameterSpec::flag("verbose").short('v'));
/// let command = CommandSpec::new("build")
///     .about("Build the project.")
///     .add(ParameterSpec::option("target", TypeTag::STR))
///     .embed("logging");
///
/// assert_eq!(command.name(), "build");
/// assert_eq!(command.entries().len(), 2);
/// # let _ = shared;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    name: String,
    doc: Option<String>,
    entries: Vec<Entry>,
}

impl CommandSpec {
    /// Create a command.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            entries: Vec::default(),
        }
    }

    /// Document the about message for this command.
    /// If repeated, only the final message will apply.
    pub fn about(mut self, doc: impl Into<String>) -> Self {
        self.doc.replace(doc.into());
        self
    }

    /// Add a parameter to the command.
    ///
    /// The order of parameters corresponds to their positional order during parsing.
    pub fn add(mut self, parameter: ParameterSpec) -> Self {
        self.entries.push(Entry::Parameter(parameter));
        self
    }

    /// Embed the parameters of another command or group, at this point in the declaration order.
    pub fn embed(mut self, name: impl Into<String>) -> Self {
        self.entries.push(Entry::Embed(name.into()));
        self
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The about message.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// The entries, in declaration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
