//! Command dispatch and the multi-cursor pass.

use crate::clipboard::Clipboard;
use crate::error::EngineError;
use crate::files::{self, ActiveFile};
use crate::host::EditorHost;
use crate::ledger::ShiftLedger;
use crate::position::Range;
use crate::selection::{SelectionKind, classify, normalize_ranges};
use crate::session::Session;
use crate::special::link_delimiters;
use crate::toggle::LineMode;
use regex::Regex;
use smart_markup_config::{CommandKind, HeadingDirection, MarkupCommand, MarkupConfig};

/// Id of the copy-path command.
pub const COPY_PATH_ID: &str = "smarter-copy-path";
/// Id of the copy-file-name command.
pub const COPY_FILE_NAME_ID: &str = "smarter-copy-file-name";

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The buffer was processed; `cursors` are the selections handed back to the host.
    Applied {
        /// Final selection per processed cursor, in document order.
        cursors: Vec<Range>,
    },
    /// Nothing in the buffer changed; the message is meant for the user.
    Notice(String),
    /// Nothing to do (no cursors).
    NoOp,
}

/// The toggle engine.
///
/// Holds the immutable configuration. Every invocation reads the host's cursors once,
/// processes them in document order against the live buffer, and hands one final selection per
/// cursor back to the host.
pub struct MarkupEngine {
    config: MarkupConfig,
    url_pattern: Regex,
}

impl MarkupEngine {
    /// Create an engine. Fails if the configured URL pattern does not compile.
    pub fn new(config: MarkupConfig) -> Result<Self, EngineError> {
        let url_pattern = Regex::new(&config.url_pattern)?;
        Ok(Self {
            config,
            url_pattern,
        })
    }

    /// Look up a registered command.
    pub fn command(&self, id: &str) -> Result<&MarkupCommand, EngineError> {
        self.config
            .commands
            .get(id)
            .ok_or_else(|| EngineError::UnknownCommand(id.to_string()))
    }

    /// Run a registered command by id.
    ///
    /// Link commands read the clipboard first; if it cannot be read a notice is returned and
    /// the buffer is left untouched.
    pub async fn run<H: EditorHost, C: Clipboard>(
        &self,
        id: &str,
        host: &mut H,
        clipboard: &C,
    ) -> Result<Outcome, EngineError> {
        let command = self.command(id)?;
        log::debug!("run {id}");

        if command.kind() != CommandKind::Markup || command.after != self.config.link_placeholder {
            return Ok(self.run_toggle(command, host));
        }

        let text = match clipboard.read_text().await {
            Ok(text) => text,
            Err(EngineError::ClipboardUnavailable(reason)) => {
                let notice = format!("Clipboard unavailable: {reason}");
                log::info!("{notice}");
                return Ok(Outcome::Notice(notice));
            }
            Err(err) => return Err(err),
        };

        let link = link_delimiters(
            &self.config,
            &self.url_pattern,
            &text,
            host.something_selected(),
        );
        Ok(match link {
            Some(link) => self.toggle_markup(host, &link.before, &link.after),
            None => self.run_toggle(command, host),
        })
    }

    /// Run a command without clipboard access.
    pub fn run_toggle<H: EditorHost>(&self, command: &MarkupCommand, host: &mut H) -> Outcome {
        match command.kind() {
            CommandKind::Markup => self.toggle_markup(host, &command.before, &command.after),
            CommandKind::Delete => self.smart_delete(host),
            CommandKind::CaseCycle => self.cycle_case(host),
            CommandKind::NewLine => self.newline_only(host),
            CommandKind::Heading(direction) => self.toggle_heading(host, direction),
        }
    }

    /// Delete the word or selection at every cursor together with one separator before it.
    pub fn smart_delete<H: EditorHost>(&self, host: &mut H) -> Outcome {
        self.for_each_cursor(host, "delete", "", true, |session| session.smart_delete())
    }

    /// Cycle the case of the word or selection at every cursor.
    pub fn cycle_case<H: EditorHost>(&self, host: &mut H) -> Outcome {
        self.for_each_cursor(host, "case-switch", "", true, |session| session.cycle_case())
    }

    /// Raise or lower the heading level at every cursor.
    pub fn toggle_heading<H: EditorHost>(
        &self,
        host: &mut H,
        direction: HeadingDirection,
    ) -> Outcome {
        let after = match direction {
            HeadingDirection::Increase => "increase",
            HeadingDirection::Decrease => "decrease",
        };
        self.for_each_cursor(host, "heading", after, true, |session| {
            session.trim_selection();
            session.toggle_heading(direction);
        })
    }

    /// Replace every selection with a bare line break.
    pub fn newline_only<H: EditorHost>(&self, host: &mut H) -> Outcome {
        self.for_each_cursor(host, "new-line", "", true, |session| session.newline_only())
    }

    /// Run one of the file commands ([`COPY_PATH_ID`], [`COPY_FILE_NAME_ID`]).
    pub async fn run_file_command<C: Clipboard>(
        &self,
        id: &str,
        file: Option<&ActiveFile>,
        clipboard: &C,
    ) -> Result<Outcome, EngineError> {
        if id != COPY_PATH_ID && id != COPY_FILE_NAME_ID {
            return Err(EngineError::UnknownCommand(id.to_string()));
        }
        let file = file.ok_or(EngineError::NoActiveDocument)?;

        if id == COPY_PATH_ID {
            files::copy_path(file, clipboard).await
        } else {
            files::copy_file_name(file, clipboard).await
        }
    }

    fn toggle_markup<H: EditorHost>(&self, host: &mut H, before: &str, after: &str) -> Outcome {
        self.for_each_cursor(host, before, after, false, |session| {
            // Keeps triple-click line selections from counting as multi-line.
            session.trim_selection();
            match classify(&session.selected_text()) {
                SelectionKind::MultiLine if session.is_block() => session.wrap_multi_line(),
                SelectionKind::MultiLine => session.wrap_each_line(),
                SelectionKind::Empty | SelectionKind::PartialToken | SelectionKind::MultiToken => {
                    let pre = session.expand_selection();
                    session.apply_markup(pre, LineMode::Single);
                }
            }
        })
    }

    fn for_each_cursor<H, F>(
        &self,
        host: &mut H,
        before: &str,
        after: &str,
        sentinel: bool,
        mut handler: F,
    ) -> Outcome
    where
        H: EditorHost,
        F: FnMut(&mut Session<'_, H>),
    {
        let cursors = normalize_ranges(host.list_selections());
        if cursors.is_empty() {
            return Outcome::NoOp;
        }

        let mut ledger = ShiftLedger::new();
        let mut finals = Vec::with_capacity(cursors.len());
        for cursor in cursors {
            let sel = Range::new(
                ledger.recalibrate(cursor.anchor),
                ledger.recalibrate(cursor.head),
            );
            let mut session = Session::new(
                &mut *host,
                &self.config,
                &mut ledger,
                before,
                after,
                sentinel,
                sel,
            );
            handler(&mut session);
            let sel = session.sel;
            finals.push((sel, ledger.len()));
        }

        // Later cursors may have edited in front of earlier results.
        let finals: Vec<Range> = finals
            .into_iter()
            .map(|(sel, mark)| {
                Range::new(
                    ledger.recalibrate_from(mark, sel.anchor),
                    ledger.recalibrate_from(mark, sel.head),
                )
            })
            .collect();

        log::debug!("{} cursor(s), {} ledger entries", finals.len(), ledger.len());
        host.set_selections(&finals);
        Outcome::Applied { cursors: finals }
    }
}
