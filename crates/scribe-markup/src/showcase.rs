//! Reference document exercising every supported node type.

use crate::node::{
    CHECKOUT_URL, COMMENTS_URL, Document, Inline, Node, SHARE_URL, StyleMark, TextRun,
};

/// Build a document containing one of every node and mark the editor accepts.
///
/// Useful for checking what a publication renders before writing markup.
/// `user_id` and `user_name` address the direct-message button.
pub fn showcase(user_id: u64, user_name: &str) -> Document {
    let formatting = Node::paragraph(vec![
        TextRun::plain("Text formatting examples: "),
        TextRun::styled("bold", StyleMark::Bold),
        TextRun::plain(", "),
        TextRun::styled("italic", StyleMark::Italic),
        TextRun::plain(", "),
        TextRun::styled("strikethrough", StyleMark::Strikethrough),
        TextRun::plain(", "),
        TextRun::styled("inline code", StyleMark::Code),
        TextRun::plain(", and "),
        TextRun::styled(
            "a link",
            StyleMark::Link {
                href: "https://example.com".to_owned(),
            },
        ),
        TextRun::plain("."),
    ]);

    Document::new(vec![
        Node::heading(1, "H1: Main Heading"),
        Node::heading(2, "H2: Section Heading"),
        Node::heading(3, "H3: Subsection"),
        formatting,
        Node::empty_paragraph(),
        Node::Blockquote {
            content: vec![Node::plain_paragraph("This is a block quote example.")],
        },
        Node::Pullquote {
            content: vec![Node::plain_paragraph(
                "This is an emphasized pull quote.",
            )],
        },
        Node::BulletList {
            items: ["First bullet point", "Second bullet point", "Third bullet point"]
                .into_iter()
                .map(|item| Node::list_item(vec![TextRun::plain(item)]))
                .collect(),
        },
        Node::OrderedList {
            start: 1,
            items: ["First numbered item", "Second numbered item"]
                .into_iter()
                .map(|item| Node::list_item(vec![TextRun::plain(item)]))
                .collect(),
        },
        Node::CodeBlock {
            language: Some("python".to_owned()),
            code: "print(\"Hello, Substack!\")\nfor i in range(3):\n    print(f\"Item {i}\")"
                .to_owned(),
        },
        Node::HorizontalRule,
        Node::plain_paragraph("Content above and below the horizontal rule."),
        Node::HorizontalRule,
        button("Subscribe Now", CHECKOUT_URL),
        Node::SubscribeWidget {
            text: "Subscribe".to_owned(),
            caption: "Thanks for reading! Subscribe for more content like this.".to_owned(),
        },
        button("Share this post", SHARE_URL),
        Node::ShareWidget {
            text: "Share".to_owned(),
            caption: "If you found this helpful, please share it with others!".to_owned(),
        },
        button("Visit GitHub", "https://github.com"),
        button("Leave a comment", COMMENTS_URL),
        Node::DirectMessage {
            user_id,
            user_name: user_name.to_owned(),
        },
        Node::LatexBlock {
            expression: "E = mc^2".to_owned(),
            id: "EINSTEIN_EQUATION".to_owned(),
        },
        Node::Paragraph {
            content: vec![
                Inline::Text(TextRun::plain("This statement needs a footnote")),
                Inline::FootnoteAnchor { number: 1 },
                Inline::Text(TextRun::plain(" to support it.")),
            ],
        },
        Node::empty_paragraph(),
        Node::empty_paragraph(),
        Node::FootnoteDefinition {
            number: 1,
            content: vec![Node::plain_paragraph(
                "This is the footnote explaining the statement above.",
            )],
        },
    ])
}

fn button(text: &str, url: &str) -> Node {
    Node::Button {
        text: text.to_owned(),
        url: url.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_showcase_covers_every_node_type() {
        let json: serde_json::Value = serde_json::to_value(showcase(1, "me")).unwrap();
        let types: BTreeSet<&str> = json["content"]
            .as_array()
            .unwrap()
            .iter()
            .map(|node| node["type"].as_str().unwrap())
            .collect();

        for expected in [
            "heading",
            "paragraph",
            "blockquote",
            "pullquote",
            "bullet_list",
            "ordered_list",
            "code_block",
            "horizontal_rule",
            "button",
            "subscribeWidget",
            "captionedShareButton",
            "directMessage",
            "latex_block",
            "footnote",
        ] {
            assert!(types.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_showcase_direct_message_target() {
        let doc = showcase(370_411_012, "writer");
        assert!(doc.content.contains(&Node::DirectMessage {
            user_id: 370_411_012,
            user_name: "writer".to_owned(),
        }));
    }
}
