//! Document tree model and its editor JSON wire format.
//!
//! The editor stores posts as a ProseMirror-style tree: every node is an
//! object with a `type`, an optional `attrs` map and an optional `content`
//! array. The types here mirror that shape with one Rust variant per node
//! kind, so the attribute set of a node is always the one its kind requires.
//!
//! Serialization is hand-written rather than derived because the wire format
//! mixes fixed attributes (`action: null`, `language: "en"`) with the data the
//! compiler produced, and omits `content` on some kinds but not others.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// `target` attribute of every link mark.
pub const LINK_TARGET: &str = "_blank";

/// `rel` attribute of every link mark.
pub const LINK_REL: &str = "noopener noreferrer nofollow";

/// Button URL placeholder the platform replaces with the checkout page.
pub const CHECKOUT_URL: &str = "%%checkout_url%%";

/// Button URL placeholder the platform replaces with the post's share link.
pub const SHARE_URL: &str = "%%share_url%%";

/// Button URL placeholder the platform replaces with the comments page.
pub const COMMENTS_URL: &str = "%%half_magic_comments_url%%";

/// Formatting mark applied to a [`TextRun`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleMark {
    Bold,
    Italic,
    Strikethrough,
    Code,
    /// Hyperlink. Target and rel attributes are fixed on the wire.
    Link { href: String },
}

impl StyleMark {
    /// Mark type understood by the editor.
    #[must_use]
    pub fn wire_type(&self) -> &'static str {
        match self {
            Self::Bold => "strong",
            Self::Italic => "em",
            Self::Strikethrough => "strikethrough",
            Self::Code => "code",
            Self::Link { .. } => "link",
        }
    }
}

impl Serialize for StyleMark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.wire_type())?;
        if let Self::Link { href } = self {
            let attrs = [
                ("href", AttrValue::Text(href)),
                ("target", AttrValue::Text(LINK_TARGET)),
                ("rel", AttrValue::Text(LINK_REL)),
                ("class", AttrValue::Null),
            ];
            map.serialize_entry("attrs", &AttrMap(&attrs))?;
        }
        map.end()
    }
}

/// A span of text sharing one set of marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub marks: Vec<StyleMark>,
}

impl TextRun {
    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// Create a run carrying a single mark.
    pub fn styled(text: impl Into<String>, mark: StyleMark) -> Self {
        Self {
            text: text.into(),
            marks: vec![mark],
        }
    }

    /// Whether the run has no visible characters.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl Serialize for TextRun {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RunRef {
            text: &self.text,
            marks: &self.marks,
        }
        .serialize(serializer)
    }
}

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(TextRun),
    /// Superscript reference to a [`Node::FootnoteDefinition`] with the same number.
    FootnoteAnchor { number: u64 },
}

impl From<TextRun> for Inline {
    fn from(run: TextRun) -> Self {
        Self::Text(run)
    }
}

impl Serialize for Inline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(run) => run.serialize(serializer),
            Self::FootnoteAnchor { number } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "footnoteAnchor")?;
                map.serialize_entry("attrs", &AttrMap(&[("number", AttrValue::Number(*number))]))?;
                map.end()
            }
        }
    }
}

/// Block-level node of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading {
        level: u8,
        content: Vec<TextRun>,
    },
    /// Paragraph. An empty paragraph is a visual line break.
    Paragraph {
        content: Vec<Inline>,
    },
    Blockquote {
        content: Vec<Node>,
    },
    Pullquote {
        content: Vec<Node>,
    },
    BulletList {
        items: Vec<Node>,
    },
    OrderedList {
        start: u64,
        items: Vec<Node>,
    },
    ListItem {
        content: Vec<Node>,
    },
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    HorizontalRule,
    Button {
        text: String,
        url: String,
    },
    /// Subscribe call-to-action with a caption below the button.
    SubscribeWidget {
        text: String,
        caption: String,
    },
    /// Share call-to-action with a caption below the button.
    ShareWidget {
        text: String,
        caption: String,
    },
    DirectMessage {
        user_id: u64,
        user_name: String,
    },
    LatexBlock {
        expression: String,
        id: String,
    },
    FootnoteDefinition {
        number: u64,
        content: Vec<Node>,
    },
}

impl Node {
    /// Heading holding `text` verbatim.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            content: vec![TextRun::plain(text)],
        }
    }

    /// Paragraph made of the given runs.
    pub fn paragraph(runs: Vec<TextRun>) -> Self {
        Self::Paragraph {
            content: runs.into_iter().map(Inline::from).collect(),
        }
    }

    /// Paragraph holding `text` verbatim.
    pub fn plain_paragraph(text: impl Into<String>) -> Self {
        Self::paragraph(vec![TextRun::plain(text)])
    }

    /// Paragraph with no content.
    #[must_use]
    pub fn empty_paragraph() -> Self {
        Self::Paragraph {
            content: Vec::new(),
        }
    }

    /// List item wrapping a paragraph made of the given runs.
    pub fn list_item(runs: Vec<TextRun>) -> Self {
        Self::ListItem {
            content: vec![Self::paragraph(runs)],
        }
    }

    /// Node type understood by the editor.
    #[must_use]
    pub fn wire_type(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Paragraph { .. } => "paragraph",
            Self::Blockquote { .. } => "blockquote",
            Self::Pullquote { .. } => "pullquote",
            Self::BulletList { .. } => "bullet_list",
            Self::OrderedList { .. } => "ordered_list",
            Self::ListItem { .. } => "list_item",
            Self::CodeBlock { .. } => "code_block",
            Self::HorizontalRule => "horizontal_rule",
            Self::Button { .. } => "button",
            Self::SubscribeWidget { .. } => "subscribeWidget",
            Self::ShareWidget { .. } => "captionedShareButton",
            Self::DirectMessage { .. } => "directMessage",
            Self::LatexBlock { .. } => "latex_block",
            Self::FootnoteDefinition { .. } => "footnote",
        }
    }

    /// Attributes in wire order. Empty for kinds without an `attrs` object.
    #[must_use]
    pub fn attrs(&self) -> Vec<(&'static str, AttrValue<'_>)> {
        match self {
            Self::Heading { level, .. } => vec![("level", AttrValue::Number(u64::from(*level)))],
            Self::Pullquote { .. } => vec![("align", AttrValue::Null), ("color", AttrValue::Null)],
            Self::OrderedList { start, .. } => vec![
                ("start", AttrValue::Number(*start)),
                ("order", AttrValue::Number(1)),
            ],
            Self::CodeBlock { language, .. } => vec![(
                "language",
                language.as_deref().map_or(AttrValue::Null, AttrValue::Text),
            )],
            Self::Button { text, url } => vec![
                ("url", AttrValue::Text(url)),
                ("text", AttrValue::Text(text)),
                ("action", AttrValue::Null),
                ("class", AttrValue::Null),
            ],
            Self::SubscribeWidget { text, .. } => vec![
                ("url", AttrValue::Text(CHECKOUT_URL)),
                ("text", AttrValue::Text(text)),
                ("language", AttrValue::Text("en")),
            ],
            Self::ShareWidget { text, .. } => vec![
                ("url", AttrValue::Text(SHARE_URL)),
                ("text", AttrValue::Text(text)),
            ],
            Self::DirectMessage { user_id, user_name } => vec![
                ("userId", AttrValue::Number(*user_id)),
                ("userName", AttrValue::Text(user_name)),
                ("canDm", AttrValue::Null),
                ("dmUpgradeOptions", AttrValue::Null),
                ("isEditorNode", AttrValue::Bool(true)),
                ("isEditor", AttrValue::Bool(true)),
            ],
            Self::LatexBlock { expression, id } => vec![
                ("persistentExpression", AttrValue::Text(expression)),
                ("id", AttrValue::Text(id)),
            ],
            Self::FootnoteDefinition { number, .. } => {
                vec![("number", AttrValue::Number(*number))]
            }
            Self::Paragraph { .. }
            | Self::Blockquote { .. }
            | Self::BulletList { .. }
            | Self::ListItem { .. }
            | Self::HorizontalRule => Vec::new(),
        }
    }

    /// Child content, or `None` when the wire object has no `content` key.
    fn content(&self) -> Option<Content<'_>> {
        match self {
            Self::Heading { content, .. } => Some(Content::Runs(content)),
            Self::Paragraph { content } if content.is_empty() => None,
            Self::Paragraph { content } => Some(Content::Inlines(content)),
            Self::Blockquote { content }
            | Self::Pullquote { content }
            | Self::ListItem { content }
            | Self::FootnoteDefinition { content, .. } => Some(Content::Blocks(content)),
            Self::BulletList { items } | Self::OrderedList { items, .. } => {
                Some(Content::Blocks(items))
            }
            Self::CodeBlock { code, .. } => Some(Content::Code(code)),
            Self::SubscribeWidget { caption, .. } | Self::ShareWidget { caption, .. } => {
                Some(Content::Caption(caption))
            }
            Self::HorizontalRule
            | Self::Button { .. }
            | Self::DirectMessage { .. }
            | Self::LatexBlock { .. } => None,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let attrs = self.attrs();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.wire_type())?;
        if !attrs.is_empty() {
            map.serialize_entry("attrs", &AttrMap(&attrs))?;
        }
        if let Some(content) = self.content() {
            map.serialize_entry("content", &content)?;
        }
        map.end()
    }
}

/// Root of a compiled post body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub content: Vec<Node>,
}

impl Document {
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self { content }
    }

    /// Number of top-level blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Serialize to the compact JSON string stored in a draft body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "doc")?;
        map.serialize_entry("content", &self.content)?;
        map.end()
    }
}

/// Scalar attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum AttrValue<'a> {
    Null,
    Bool(bool),
    Number(u64),
    Text(&'a str),
}

struct AttrMap<'a, 'b>(&'b [(&'static str, AttrValue<'a>)]);

impl Serialize for AttrMap<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct RunRef<'a> {
    text: &'a str,
    marks: &'a [StyleMark],
}

impl Serialize for RunRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", "text")?;
        map.serialize_entry("text", self.text)?;
        if !self.marks.is_empty() {
            map.serialize_entry("marks", self.marks)?;
        }
        map.end()
    }
}

enum Content<'a> {
    Blocks(&'a [Node]),
    Inlines(&'a [Inline]),
    Runs(&'a [TextRun]),
    Code(&'a str),
    Caption(&'a str),
}

impl Serialize for Content<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Blocks(nodes) => nodes.serialize(serializer),
            Self::Inlines(inlines) => inlines.serialize(serializer),
            Self::Runs(runs) => runs.serialize(serializer),
            Self::Code(code) => [RunRef {
                text: code,
                marks: &[],
            }]
            .serialize(serializer),
            Self::Caption(caption) => [CaptionRef(caption)].serialize(serializer),
        }
    }
}

/// `ctaCaption` child of the subscribe and share widgets.
struct CaptionRef<'a>(&'a str);

impl Serialize for CaptionRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "ctaCaption")?;
        map.serialize_entry(
            "content",
            &[RunRef {
                text: self.0,
                marks: &[],
            }],
        )?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn to_value<T: Serialize>(value: &T) -> Value {
        serde_json::to_value(value).unwrap()
    }

    #[test]
    fn test_plain_run_has_no_marks_key() {
        assert_eq!(
            to_value(&TextRun::plain("hi")),
            json!({"type": "text", "text": "hi"})
        );
    }

    #[test]
    fn test_link_mark_fixed_attrs() {
        let run = TextRun::styled(
            "x",
            StyleMark::Link {
                href: "http://y".to_owned(),
            },
        );
        assert_eq!(
            to_value(&run),
            json!({
                "type": "text",
                "text": "x",
                "marks": [{
                    "type": "link",
                    "attrs": {
                        "href": "http://y",
                        "target": "_blank",
                        "rel": "noopener noreferrer nofollow",
                        "class": null
                    }
                }]
            })
        );
    }

    #[test]
    fn test_mark_wire_types() {
        assert_eq!(to_value(&StyleMark::Bold), json!({"type": "strong"}));
        assert_eq!(to_value(&StyleMark::Italic), json!({"type": "em"}));
        assert_eq!(
            to_value(&StyleMark::Strikethrough),
            json!({"type": "strikethrough"})
        );
        assert_eq!(to_value(&StyleMark::Code), json!({"type": "code"}));
    }

    #[test]
    fn test_empty_paragraph_omits_content() {
        assert_eq!(
            to_value(&Node::empty_paragraph()),
            json!({"type": "paragraph"})
        );
    }

    #[test]
    fn test_empty_list_keeps_content() {
        let list = Node::BulletList { items: Vec::new() };
        assert_eq!(to_value(&list), json!({"type": "bullet_list", "content": []}));
    }

    #[test]
    fn test_ordered_list_attrs() {
        let list = Node::OrderedList {
            start: 1,
            items: vec![Node::list_item(vec![TextRun::plain("a")])],
        };
        assert_eq!(
            to_value(&list),
            json!({
                "type": "ordered_list",
                "attrs": {"start": 1, "order": 1},
                "content": [{
                    "type": "list_item",
                    "content": [{
                        "type": "paragraph",
                        "content": [{"type": "text", "text": "a"}]
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_code_block_null_language() {
        let code = Node::CodeBlock {
            language: None,
            code: "x = 1".to_owned(),
        };
        assert_eq!(
            to_value(&code),
            json!({
                "type": "code_block",
                "attrs": {"language": null},
                "content": [{"type": "text", "text": "x = 1"}]
            })
        );
    }

    #[test]
    fn test_button_attrs() {
        let button = Node::Button {
            text: "Go".to_owned(),
            url: "#".to_owned(),
        };
        assert_eq!(
            to_value(&button),
            json!({
                "type": "button",
                "attrs": {"url": "#", "text": "Go", "action": null, "class": null}
            })
        );
    }

    #[test]
    fn test_share_widget_caption_child() {
        let widget = Node::ShareWidget {
            text: "Share".to_owned(),
            caption: "Tell a friend".to_owned(),
        };
        assert_eq!(
            to_value(&widget),
            json!({
                "type": "captionedShareButton",
                "attrs": {"url": "%%share_url%%", "text": "Share"},
                "content": [{
                    "type": "ctaCaption",
                    "content": [{"type": "text", "text": "Tell a friend"}]
                }]
            })
        );
    }

    #[test]
    fn test_subscribe_widget_language() {
        let widget = Node::SubscribeWidget {
            text: "Join".to_owned(),
            caption: "Weekly".to_owned(),
        };
        let value = to_value(&widget);
        assert_eq!(value["type"], "subscribeWidget");
        assert_eq!(value["attrs"]["url"], CHECKOUT_URL);
        assert_eq!(value["attrs"]["language"], "en");
    }

    #[test]
    fn test_direct_message_attrs() {
        let dm = Node::DirectMessage {
            user_id: 42,
            user_name: "writer".to_owned(),
        };
        assert_eq!(
            to_value(&dm),
            json!({
                "type": "directMessage",
                "attrs": {
                    "userId": 42,
                    "userName": "writer",
                    "canDm": null,
                    "dmUpgradeOptions": null,
                    "isEditorNode": true,
                    "isEditor": true
                }
            })
        );
    }

    #[test]
    fn test_footnote_anchor_inline() {
        let paragraph = Node::Paragraph {
            content: vec![
                Inline::Text(TextRun::plain("claim")),
                Inline::FootnoteAnchor { number: 3 },
            ],
        };
        assert_eq!(
            to_value(&paragraph)["content"][1],
            json!({"type": "footnoteAnchor", "attrs": {"number": 3}})
        );
    }

    #[test]
    fn test_empty_document_keeps_content() {
        assert_eq!(
            Document::default().to_json().unwrap(),
            r#"{"type":"doc","content":[]}"#
        );
    }

    #[test]
    fn test_attrs_match_wire_keys() {
        let latex = Node::LatexBlock {
            expression: "E = mc^2".to_owned(),
            id: "EQUATION_1".to_owned(),
        };
        let names: Vec<_> = latex.attrs().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["persistentExpression", "id"]);
        assert!(Node::HorizontalRule.attrs().is_empty());
    }

    static_assertions::assert_impl_all!(Document: Send, Sync);
}
