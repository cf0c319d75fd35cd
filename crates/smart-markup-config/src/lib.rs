#![warn(missing_docs)]
//! `smart-markup-config` - data-driven command and delimiter configuration for `smart-markup`.
//!
//! This crate stays lightweight and does **not** depend on the engine. It provides the
//! immutable command table and the noise/expansion lists the engine is constructed with, plus
//! TOML loading so hosts can ship their own delimiter sets.
//!
//! ```rust
//! use smart_markup_config::{CommandKind, MarkupConfig};
//!
//! let config = MarkupConfig::default();
//! let bold = config.commands.get("smarter-asterisk-bold").unwrap();
//! assert_eq!(bold.before, "**");
//! assert_eq!(bold.kind(), CommandKind::Markup);
//! ```

mod command;
mod table;

pub use command::{CommandKind, HeadingDirection, MarkupCommand};
pub use table::CommandTable;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        /// Path of the file that failed to load.
        config_path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file could not be parsed as TOML.
    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        /// Path of the file that failed to parse.
        config_path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// In-memory TOML text could not be parsed.
    #[error("Failed to parse config: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Two commands share the same id.
    #[error("Duplicate command id: {0}")]
    DuplicateCommand(String),

    /// A markup command has an empty opening delimiter.
    #[error("Command {0} has an empty opening delimiter")]
    EmptyDelimiter(String),

    /// A heading command whose `after` is neither `increase` nor `decrease`.
    #[error("Command {id} has an unknown heading direction {direction:?}")]
    InvalidHeadingDirection {
        /// Offending command id.
        id: String,
        /// The direction string found in `after`.
        direction: String,
    },
}

/// An enclosing pair the engine may grow a selection over before toggling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutsideRule {
    /// Text expected immediately before the selection.
    pub open: String,
    /// Text expected immediately after the selection.
    pub close: String,
    /// When set, the last character of `close` is tested but not absorbed.
    #[serde(default)]
    pub keep_trailing_space: bool,
}

impl OutsideRule {
    /// Create a rule that absorbs both markers.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            keep_trailing_space: false,
        }
    }

    /// Create a rule whose trailing character is only used for matching.
    pub fn keeping_trailing_space(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            keep_trailing_space: true,
            ..Self::new(open, close)
        }
    }
}

/// Maps an inline delimiter to its block form for multi-line selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPromotion {
    /// Inline delimiter, e.g. `` ` ``.
    pub inline: String,
    /// Delimiter used on dedicated lines, e.g. `` ``` ``.
    pub block: String,
}

/// Full engine configuration: the command table plus every list the engine consults.
///
/// All fields have defaults, so a TOML file only needs to override what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Registered commands, keyed by id.
    pub commands: CommandTable,
    /// Substrings stripped from the start of a selection, in order.
    pub leading_noise: Vec<String>,
    /// Substrings stripped from the end of a selection, in order.
    pub trailing_noise: Vec<String>,
    /// Enclosing pairs the selection may grow over, in precedence order.
    pub outside_rules: Vec<OutsideRule>,
    /// Opening delimiters that wrap multi-line selections with dedicated lines.
    pub block_markers: Vec<String>,
    /// Opening delimiters whose inner text is padded with a space on each side.
    pub comment_markers: Vec<String>,
    /// Opening delimiters that expand over whitespace-delimited tokens instead of words.
    pub token_markers: Vec<String>,
    /// Inline-to-block delimiter promotions.
    pub block_promotions: Vec<BlockPromotion>,
    /// `after` value that triggers clipboard URL substitution.
    pub link_placeholder: String,
    /// Regex a trimmed clipboard text must match to count as a URL.
    pub url_pattern: String,
    /// Extensions (lowercase, without the dot) that turn a link into an image embed.
    pub image_extensions: Vec<String>,
    /// Maximum number of clipboard characters used as link text.
    pub link_text_limit: usize,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            commands: CommandTable::default(),
            leading_noise: strings(&[
                "###### ", "##### ", "#### ", "### ", "## ", "# ", "- [ ] ", "- [x] ", "- ",
                "* ", "+ ", ">", " ", "\n", "\t",
            ]),
            trailing_noise: strings(&[" ", "\n", "\t"]),
            outside_rules: vec![
                OutsideRule::new("#", ""),
                OutsideRule::new("[[", "]]"),
                OutsideRule::new("\"", "\""),
                OutsideRule::new("'", "'"),
                OutsideRule::new("(", ")"),
                OutsideRule::keeping_trailing_space("[", "] "),
                OutsideRule::new("$", ""),
            ],
            block_markers: strings(&["`", "%%", "<!--", "$"]),
            comment_markers: strings(&["%%", "<!--"]),
            token_markers: strings(&["`", "$"]),
            block_promotions: vec![
                BlockPromotion {
                    inline: "`".to_string(),
                    block: "```".to_string(),
                },
                BlockPromotion {
                    inline: "$".to_string(),
                    block: "$$".to_string(),
                },
            ],
            link_placeholder: "]()".to_string(),
            url_pattern: r"^(?:(?:https?|ftp|file|obsidian)://|www\.)\S+$".to_string(),
            image_extensions: strings(&["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"]),
            link_text_limit: 800,
        }
    }
}

impl MarkupConfig {
    /// Parse a configuration from TOML text. Missing fields keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file. Returns `Ok(None)` when the file does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: MarkupConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Returns `true` if `before` wraps multi-line selections with dedicated lines.
    pub fn is_block_marker(&self, before: &str) -> bool {
        self.block_markers.iter().any(|m| m == before)
    }

    /// Returns `true` if `before` is a comment delimiter that pads its content.
    pub fn is_comment_marker(&self, before: &str) -> bool {
        self.comment_markers.iter().any(|m| m == before)
    }

    /// Returns `true` if `before` expands over whitespace-delimited tokens.
    pub fn is_token_marker(&self, before: &str) -> bool {
        self.token_markers.iter().any(|m| m == before)
    }

    /// Block form of an inline delimiter, if one is configured.
    pub fn promote(&self, inline: &str) -> Option<&str> {
        self.block_promotions
            .iter()
            .find(|p| p.inline == inline)
            .map(|p| p.block.as_str())
    }
}
