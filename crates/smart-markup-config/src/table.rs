use crate::{ConfigError, MarkupCommand};
use serde::{Deserialize, Serialize};

/// Immutable, ordered set of commands keyed by id.
///
/// Built once and handed to the engine; lookups never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MarkupCommand>", into = "Vec<MarkupCommand>")]
pub struct CommandTable {
    commands: Vec<MarkupCommand>,
}

impl CommandTable {
    /// Build a table, rejecting duplicate ids and malformed commands.
    pub fn new(commands: Vec<MarkupCommand>) -> Result<Self, ConfigError> {
        for (idx, cmd) in commands.iter().enumerate() {
            if commands[..idx].iter().any(|other| other.id == cmd.id) {
                return Err(ConfigError::DuplicateCommand(cmd.id.clone()));
            }
            if cmd.before.is_empty() {
                return Err(ConfigError::EmptyDelimiter(cmd.id.clone()));
            }
            if cmd.before == "heading" && !cmd.is_sentinel() {
                return Err(ConfigError::InvalidHeadingDirection {
                    id: cmd.id.clone(),
                    direction: cmd.after.clone(),
                });
            }
        }
        Ok(Self { commands })
    }

    /// Look a command up by id.
    pub fn get(&self, id: &str) -> Option<&MarkupCommand> {
        self.commands.iter().find(|cmd| cmd.id == id)
    }

    /// Iterate commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &MarkupCommand> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl TryFrom<Vec<MarkupCommand>> for CommandTable {
    type Error = ConfigError;

    fn try_from(commands: Vec<MarkupCommand>) -> Result<Self, Self::Error> {
        Self::new(commands)
    }
}

impl From<CommandTable> for Vec<MarkupCommand> {
    fn from(table: CommandTable) -> Self {
        table.commands
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        let defaults = [
            ("smarter-asterisk-bold", "Smarter Bold", "**", "**"),
            ("smarter-underscore-bold", "Smarter Underscore Bold", "__", "__"),
            ("smarter-asterisk-italics", "Smarter Italics", "*", "*"),
            ("smarter-underscore-italics", "Smarter Underscore Italics", "_", "_"),
            ("smarter-comments", "Smarter Comments", "%%", "%%"),
            ("smarter-html-comments", "Smarter HTML Comments", "<!--", "-->"),
            ("smarter-inline-code", "Smarter Inline Code", "`", "`"),
            ("smarter-math", "Smarter Math", "$", "$"),
            ("smarter-highlight", "Smarter Highlight", "==", "=="),
            ("smarter-strikethrough", "Smarter Strikethrough", "~~", "~~"),
            ("smarter-wikilink", "Smarter wikilink (internal link)", "[[", "]]"),
            ("smarter-md-link", "Smarter Markdown Link/Image", "[", "]()"),
            ("smarter-delete", "Smarter Delete", "delete", ""),
            ("smarter-upper-lower", "Smarter Upper/Lower Case", "upper-lower", ""),
            ("smarter-new-line", "New Line without list continuation", "new-line", ""),
            ("smarter-heading-increase", "Increase Heading Level", "heading", "increase"),
            ("smarter-heading-decrease", "Decrease Heading Level", "heading", "decrease"),
        ];

        Self {
            commands: defaults
                .into_iter()
                .map(|(id, name, before, after)| MarkupCommand::new(id, name, before, after))
                .collect(),
        }
    }
}
