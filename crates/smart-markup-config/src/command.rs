use serde::{Deserialize, Serialize};

/// A registered command: a delimiter pair, or a sentinel verb in `before`.
///
/// The pair is fixed for the lifetime of the table. The engine works on copies of the
/// delimiters when it needs to promote or substitute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupCommand {
    /// Stable identifier used by hosts to bind hotkeys.
    pub id: String,
    /// Human readable name.
    pub name: String,
    /// Opening delimiter, or a sentinel verb.
    pub before: String,
    /// Closing delimiter; for `heading` the direction.
    #[serde(default)]
    pub after: String,
}

/// Direction of a heading level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingDirection {
    /// One more `#`.
    Increase,
    /// One fewer `#`.
    Decrease,
}

/// What the engine does when a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Toggle the `before`/`after` delimiters.
    Markup,
    /// Delete the expanded selection.
    Delete,
    /// Cycle lower → sentence → upper case.
    CaseCycle,
    /// Insert a bare line break at each cursor.
    NewLine,
    /// Change the heading level of the cursor lines.
    Heading(HeadingDirection),
}

impl MarkupCommand {
    /// Create a command.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            before: before.into(),
            after: after.into(),
        }
    }

    /// Classify the command by its sentinel verb.
    ///
    /// A `heading` command with an unknown direction is reported as markup; the table rejects
    /// such commands when it is built.
    pub fn kind(&self) -> CommandKind {
        match self.before.as_str() {
            "delete" => CommandKind::Delete,
            "upper-lower" | "case-switch" => CommandKind::CaseCycle,
            "new-line" => CommandKind::NewLine,
            "heading" => match self.after.as_str() {
                "increase" => CommandKind::Heading(HeadingDirection::Increase),
                "decrease" => CommandKind::Heading(HeadingDirection::Decrease),
                _ => CommandKind::Markup,
            },
            _ => CommandKind::Markup,
        }
    }

    /// Returns `true` for commands that bypass the toggle state machine.
    pub fn is_sentinel(&self) -> bool {
        self.kind() != CommandKind::Markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_sentinel_verbs() {
        assert_eq!(
            MarkupCommand::new("a", "A", "**", "**").kind(),
            CommandKind::Markup
        );
        assert_eq!(
            MarkupCommand::new("d", "D", "delete", "").kind(),
            CommandKind::Delete
        );
        assert_eq!(
            MarkupCommand::new("c", "C", "upper-lower", "").kind(),
            CommandKind::CaseCycle
        );
        assert_eq!(
            MarkupCommand::new("c", "C", "case-switch", "").kind(),
            CommandKind::CaseCycle
        );
        assert_eq!(
            MarkupCommand::new("n", "N", "new-line", "").kind(),
            CommandKind::NewLine
        );
        assert_eq!(
            MarkupCommand::new("h", "H", "heading", "decrease").kind(),
            CommandKind::Heading(HeadingDirection::Decrease)
        );
    }

    #[test]
    fn test_heading_with_unknown_direction_is_not_sentinel() {
        let cmd = MarkupCommand::new("h", "H", "heading", "sideways");
        assert!(!cmd.is_sentinel());
    }
}
