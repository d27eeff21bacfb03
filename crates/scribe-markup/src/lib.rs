//! Markup compiler for the Substack editor document format.
//!
//! Turns pipe-delimited, human-writable markup into the JSON document tree the
//! Substack post editor stores as a draft body.
//!
//! # Architecture
//!
//! - [`compile`] splits markup into `Tag:: body` blocks and builds one
//!   [`Node`] per block.
//! - [`format`] handles inline markers (`**bold**`, `*italic*`,
//!   `~~strike~~`, `` `code` ``, `[link](url)`) inside text-bearing blocks.
//! - [`Document`] and [`Node`] are the typed tree; their `Serialize`
//!   implementations produce the editor's wire JSON.
//!
//! The compiler is lenient: it never fails, and blocks it cannot build are
//! skipped. Use [`compile_with_warnings`] to see what was skipped.
//!
//! # Example
//!
//! ```
//! use scribe_markup::compile;
//!
//! let doc = compile("Title:: Hello | Text:: Some **bold** text | Button:: Read -> https://example.com");
//! assert_eq!(doc.len(), 3);
//!
//! let json = doc.to_json().unwrap();
//! assert!(json.starts_with(r#"{"type":"doc","content":[{"type":"heading""#));
//! ```

mod compiler;
mod inline;
mod node;
mod showcase;

pub use compiler::{
    CompileResult, DEFAULT_SHARE_CAPTION, DEFAULT_SUBSCRIBE_CAPTION, compile, compile_block,
    compile_with_warnings,
};
pub use inline::format;
pub use node::{
    AttrValue, CHECKOUT_URL, COMMENTS_URL, Document, Inline, LINK_REL, LINK_TARGET, Node,
    SHARE_URL, StyleMark, TextRun,
};
pub use showcase::showcase;
