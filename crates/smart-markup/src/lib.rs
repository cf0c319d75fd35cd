#![warn(missing_docs)]
//! Smart Markup - Context-Aware Markdown Toggle Engine
//!
//! # Overview
//!
//! `smart-markup` decides, from the text around each cursor, whether a delimiter pair such as
//! `**`/`**` or `[[`/`]]` has to be inserted or removed. There is no mode flag: a selection is
//! trimmed of list markers and whitespace, grown to whole words or tokens, grown over an
//! enclosing pair, and then the delimiters are toggled.
//!
//! The engine does not own a document. It drives an editor through the [`EditorHost`] trait;
//! [`TextBuffer`] is a rope-backed host for tests, tools and headless use.
//!
//! # Core Features
//!
//! - **Toggle Without Modes**: inserts or removes delimiters depending on what is already there
//! - **Noise Trimming**: list, task, quote and heading markers never end up inside markup
//! - **Word/Token Expansion**: bare cursors act on the word under them
//! - **Block Wrapping**: code, math and comment delimiters get their own lines for multi-line
//!   selections
//! - **Multi-Cursor**: a shift ledger keeps later cursors on their text while earlier ones edit
//! - **Special Commands**: smart delete, case cycling, heading levels, clipboard links
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  MarkupEngine (dispatch, multi-cursor pass) │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Toggle / Block / Special handlers          │  ← Edits
//! ├─────────────────────────────────────────────┤
//! │  Trim → Expand → Outside rules              │  ← Canonical selection
//! ├─────────────────────────────────────────────┤
//! │  Session + Shift Ledger                     │  ← Per-cursor state
//! ├─────────────────────────────────────────────┤
//! │  EditorHost (TextBuffer on ropey)           │  ← Text access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use smart_markup::{EditorHost, MarkupConfig, MarkupEngine, Position, Range, TextBuffer};
//!
//! let engine = MarkupEngine::new(MarkupConfig::default()).unwrap();
//! let mut buffer = TextBuffer::new("say hello");
//! buffer.set_selection(Position::new(0, 6), Position::new(0, 6));
//!
//! let bold = engine.command("smarter-asterisk-bold").unwrap();
//! engine.run_toggle(bold, &mut buffer);
//!
//! assert_eq!(buffer.text(), "say **hello**");
//! assert_eq!(buffer.primary(), Some(Range::caret(Position::new(0, 8))));
//! ```
//!
//! # Module Description
//!
//! - [`position`] - Line/column positions and anchor/head ranges
//! - [`host`] - The editor operations the engine consumes
//! - [`buffer`] - Rope-backed in-memory host
//! - [`ledger`] - Position shifts recorded during a multi-cursor pass
//! - [`selection`] - Selection classification and normalization
//! - [`trim`] - Noise trimming
//! - [`expand`] - Word and token expansion
//! - [`special`] - Case, heading and link helpers
//! - [`clipboard`] - Asynchronous clipboard access
//! - [`files`] - Active-file clipboard commands
//! - [`engine`] - Command dispatch

pub mod buffer;
pub mod clipboard;
pub mod engine;
pub mod error;
pub mod expand;
pub mod files;
pub mod host;
pub mod ledger;
pub mod position;
pub mod selection;
pub mod special;
pub mod trim;

mod block;
mod session;
mod toggle;

pub use buffer::TextBuffer;
pub use clipboard::{Clipboard, MemoryClipboard};
pub use engine::{COPY_FILE_NAME_ID, COPY_PATH_ID, MarkupEngine, Outcome};
pub use error::EngineError;
pub use files::ActiveFile;
pub use host::{EditorHost, WordAt};
pub use ledger::{ContentChange, LedgerEntry, ShiftLedger};
pub use position::{Position, Range};
pub use selection::{SelectionKind, classify, normalize_ranges};
pub use session::outside_sel;

pub use smart_markup_config::{
    BlockPromotion, CommandKind, CommandTable, ConfigError, HeadingDirection, MarkupCommand,
    MarkupConfig, OutsideRule,
};
