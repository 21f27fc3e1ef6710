//! Doc IR for width-aware pretty printing.
//!
//! This crate holds the document algebra the docscript DSL compiles to and
//! the printer that lays it out. It works in two steps:
//!
//! 1. Build a [`Doc`] tree from the builders in [`doc`] (`group`, `indent`,
//!    `fill`, `if_break`, ...)
//! 2. Print it with [`print_doc_to_string`], which decides for every group
//!    whether it renders flat or broken within the configured width
//!
//! A Doc also prints back as builder source through `Display`, and serializes
//! to the JSON shape of the JavaScript pretty-printer's doc objects.

pub mod doc;
mod display;
mod json;
pub mod printer;
pub mod propagate;

pub use doc::{AlignKind, Doc, DocError, LineKind};
pub use printer::{print_doc_to_string, PrintOptions};
pub use propagate::propagate_breaks;

/// Print `doc` with the default options (width 80, two-space indent).
///
/// # Example
///
/// ```
/// use docscript_doc::doc::{concat, group, text, LINE};
///
/// let doc = group(concat([text("foo"), LINE, text("bar")]));
/// assert_eq!(docscript_doc::print(&doc), "foo bar");
/// ```
pub fn print(doc: &Doc) -> String {
    print_doc_to_string(doc, &PrintOptions::default())
}
