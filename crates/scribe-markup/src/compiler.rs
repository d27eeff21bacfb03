//! Block compiler.
//!
//! Markup is a sequence of blocks separated by `|`. Each block is
//! `Tag:: body`; a block without `::` is read as `Text:: block`.
//!
//! ```text
//! Title:: Weekly notes | Text:: Some **bold** words | List:: • one • two | Rule:: - |
//! Button:: Read more -> https://example.com
//! ```
//!
//! Compilation never fails. Blocks with an empty body, an unknown tag or a
//! malformed footnote are skipped and reported through
//! [`CompileResult::warnings`].

use std::sync::LazyLock;

use regex::Regex;

use crate::inline;
use crate::node::{CHECKOUT_URL, COMMENTS_URL, Document, Node, SHARE_URL};

/// Block separator.
const BLOCK_SEPARATOR: char = '|';

/// Separator between a block's tag and body.
const TAG_SEPARATOR: &str = "::";

/// Bullet character separating `List::` items.
const BULLET: char = '•';

/// Separator between button text and URL.
const BUTTON_URL_SEPARATOR: &str = "->";

/// Separator between widget button text and caption.
const CAPTION_SEPARATOR: &str = ">>";

/// Caption of a `SubscribeWidget::` block without `>>`.
pub const DEFAULT_SUBSCRIBE_CAPTION: &str = "Subscribe for more content!";

/// Caption of a `ShareWidget::` block without `>>`.
pub const DEFAULT_SHARE_CAPTION: &str = "Share this post!";

static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.").unwrap());

static FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([0-9]+)\]\s*(.*)").unwrap());

/// Result of compiling markup.
#[derive(Clone, Debug)]
pub struct CompileResult {
    /// Compiled document.
    pub document: Document,
    /// One entry per skipped block, in block order.
    pub warnings: Vec<String>,
}

/// Compile markup into a document, discarding warnings.
///
/// # Example
///
/// ```
/// use scribe_markup::{Node, compile};
///
/// let doc = compile("H3:: hi");
/// assert_eq!(doc.content, vec![Node::heading(3, "hi")]);
/// ```
pub fn compile(markup: &str) -> Document {
    compile_with_warnings(markup).document
}

/// Compile markup into a document and report skipped blocks.
pub fn compile_with_warnings(markup: &str) -> CompileResult {
    // `;` collides with the platform's own delimiters.
    let markup = markup.replace(';', ",");

    let mut compiler = BlockCompiler::new();
    let content = markup
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .enumerate()
        .filter_map(|(index, block)| compiler.compile_block(index + 1, block))
        .collect();

    CompileResult {
        document: Document::new(content),
        warnings: compiler.warnings,
    }
}

/// Per-call compiler state.
struct BlockCompiler {
    /// Numbering for LaTeX equation ids. Starts at 1, advanced by each `LaTeX::` block.
    footnote_counter: u64,
    warnings: Vec<String>,
}

impl BlockCompiler {
    fn new() -> Self {
        Self {
            footnote_counter: 1,
            warnings: Vec::new(),
        }
    }

    /// Build the node for one trimmed, non-empty block. `position` is 1-based.
    fn compile_block(&mut self, position: usize, block: &str) -> Option<Node> {
        let Some((tag, body)) = block.split_once(TAG_SEPARATOR) else {
            return Some(Node::paragraph(inline::format(block)));
        };
        let tag = tag.trim().to_lowercase();
        let body = body.trim();

        if body.is_empty() {
            self.warn(position, &format!("`{tag}::` has no content"));
            return None;
        }

        if let Some(level) = heading_level(&tag) {
            return Some(Node::heading(level, body));
        }

        let node = match tag.as_str() {
            "text" => Node::paragraph(inline::format(body)),
            "quote" => Node::Blockquote {
                content: vec![Node::plain_paragraph(body)],
            },
            "pullquote" => Node::Pullquote {
                content: vec![Node::plain_paragraph(body)],
            },
            "list" => Node::BulletList {
                items: list_items(body.split(BULLET)),
            },
            "numberlist" => Node::OrderedList {
                start: 1,
                items: list_items(NUMBERED_ITEM.split(body).skip(1)),
            },
            "code" => code_block(body),
            "rule" => Node::HorizontalRule,
            "button" => {
                let (text, url) = match body.split_once(BUTTON_URL_SEPARATOR) {
                    Some((text, url)) => (text.trim(), url.trim()),
                    None => (body, "#"),
                };
                button(text, url)
            }
            "subscribe" => button(body, CHECKOUT_URL),
            "share" => button(body, SHARE_URL),
            "comment" => button(body, COMMENTS_URL),
            "subscribewidget" => {
                let (text, caption) = split_caption(body, DEFAULT_SUBSCRIBE_CAPTION);
                Node::SubscribeWidget { text, caption }
            }
            "sharewidget" => {
                let (text, caption) = split_caption(body, DEFAULT_SHARE_CAPTION);
                Node::ShareWidget { text, caption }
            }
            "latex" => {
                let id = format!("EQUATION_{}", self.footnote_counter);
                self.footnote_counter += 1;
                Node::LatexBlock {
                    expression: body.to_owned(),
                    id,
                }
            }
            "footnote" => return self.footnote(position, body),
            "break" => Node::empty_paragraph(),
            _ => {
                self.warn(position, &format!("unknown block type `{tag}::`"));
                return None;
            }
        };
        Some(node)
    }

    fn footnote(&mut self, position: usize, body: &str) -> Option<Node> {
        let Some(caps) = FOOTNOTE.captures(body) else {
            self.warn(position, "footnote must start with `[number]`");
            return None;
        };
        let Ok(number) = caps[1].parse::<u64>() else {
            self.warn(position, &format!("footnote number `{}` is too large", &caps[1]));
            return None;
        };
        Some(Node::FootnoteDefinition {
            number,
            content: vec![Node::plain_paragraph(&caps[2])],
        })
    }

    fn warn(&mut self, position: usize, message: &str) {
        self.warnings.push(format!("block {position}: {message}"));
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "title" | "h1" => Some(1),
        "subtitle" | "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn list_items<'a>(segments: impl Iterator<Item = &'a str>) -> Vec<Node> {
    segments
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| Node::list_item(inline::format(item)))
        .collect()
}

/// `language | code` or just `code`.
fn code_block(body: &str) -> Node {
    match body.split_once(BLOCK_SEPARATOR) {
        Some((language, code)) => {
            let language = language.trim();
            Node::CodeBlock {
                language: (!language.is_empty()).then(|| language.to_owned()),
                code: code.trim().to_owned(),
            }
        }
        None => Node::CodeBlock {
            language: None,
            code: body.to_owned(),
        },
    }
}

fn button(text: &str, url: &str) -> Node {
    Node::Button {
        text: text.to_owned(),
        url: url.to_owned(),
    }
}

fn split_caption(body: &str, default_caption: &str) -> (String, String) {
    match body.split_once(CAPTION_SEPARATOR) {
        Some((text, caption)) => (text.trim().to_owned(), caption.trim().to_owned()),
        None => (body.to_owned(), default_caption.to_owned()),
    }
}

/// Compile a single block as if it were the only block in the markup.
///
/// Useful for callers that assemble blocks themselves and therefore can pass
/// bodies containing `|`, such as `Code:: rust | fn main() {}`.
pub fn compile_block(block: &str) -> Option<Node> {
    let block = block.trim();
    if block.is_empty() {
        return None;
    }
    BlockCompiler::new().compile_block(1, block)
}
