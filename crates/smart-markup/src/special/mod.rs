//! Handlers for the sentinel commands and the clipboard-driven link delimiters.

mod case;
mod delete;
mod heading;
mod link;
mod newline;

pub use case::{cycle_case, sentence_case};
pub use heading::retitle;
pub use link::{LinkDelimiters, link_delimiters};
