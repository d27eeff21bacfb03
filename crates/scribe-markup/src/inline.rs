//! Inline formatting inside a single text span.
//!
//! Recognised markers:
//!
//! | syntax        | mark            |
//! |---------------|-----------------|
//! | `**x**`       | bold            |
//! | `*x*`         | italic          |
//! | `~~x~~`       | strikethrough   |
//! | `` `x` ``     | code            |
//! | `[x](url)`    | link to `url`   |
//!
//! Every pattern is matched over the whole span on its own, and the matches
//! are merged by start offset. Matches are never reconciled with each other:
//! a `*x*` nested inside a `**...**` span is emitted as a second, italic run
//! after the bold one. Markers are never nested into multi-mark runs.

use std::sync::LazyLock;

use regex::Regex;

use crate::node::{StyleMark, TextRun};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Bold,
    Italic,
    Strikethrough,
    Code,
    Link,
}

/// Marker patterns in declaration order. Ties on start offset keep this order.
static MARKERS: LazyLock<[(Marker, Regex); 5]> = LazyLock::new(|| {
    [
        (Marker::Bold, Regex::new(r"\*\*(.*?)\*\*").unwrap()),
        (Marker::Italic, Regex::new(r"\*(.*?)\*").unwrap()),
        (Marker::Strikethrough, Regex::new(r"~~(.*?)~~").unwrap()),
        (Marker::Code, Regex::new(r"`(.*?)`").unwrap()),
        (
            Marker::Link,
            Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap(),
        ),
    ]
});

struct MarkerMatch<'t> {
    start: usize,
    end: usize,
    marker: Marker,
    inner: &'t str,
    href: &'t str,
}

impl MarkerMatch<'_> {
    fn to_run(&self) -> TextRun {
        let mark = match self.marker {
            Marker::Bold => StyleMark::Bold,
            Marker::Italic => StyleMark::Italic,
            Marker::Strikethrough => StyleMark::Strikethrough,
            Marker::Code => StyleMark::Code,
            Marker::Link => StyleMark::Link {
                href: self.href.to_owned(),
            },
        };
        TextRun::styled(self.inner, mark)
    }
}

/// Split `text` into plain and styled runs.
///
/// Never fails: unterminated or malformed markers stay in the output as
/// literal text. Runs with no visible characters are dropped; when nothing
/// visible is left, the whole input comes back as one unstyled run.
///
/// # Example
///
/// ```
/// use scribe_markup::{StyleMark, TextRun, format};
///
/// let runs = format("a **b** c");
/// assert_eq!(
///     runs,
///     vec![
///         TextRun::plain("a "),
///         TextRun::styled("b", StyleMark::Bold),
///         TextRun::plain(" c"),
///     ]
/// );
/// ```
pub fn format(text: &str) -> Vec<TextRun> {
    let mut matches = find_markers(text);
    // Stable: equal offsets keep pattern order.
    matches.sort_by_key(|m| m.start);

    let mut runs = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;
    for m in &matches {
        if m.start > cursor {
            runs.push(TextRun::plain(&text[cursor..m.start]));
        }
        runs.push(m.to_run());
        cursor = cursor.max(m.end);
    }
    if cursor < text.len() {
        runs.push(TextRun::plain(&text[cursor..]));
    }

    // The editor rejects text nodes without visible content.
    runs.retain(|run| !run.is_blank());
    if runs.is_empty() {
        runs.push(TextRun::plain(text));
    }
    runs
}

fn find_markers(text: &str) -> Vec<MarkerMatch<'_>> {
    MARKERS
        .iter()
        .flat_map(|(marker, pattern)| {
            pattern.captures_iter(text).filter_map(move |caps| {
                let whole = caps.get(0)?;
                Some(MarkerMatch {
                    start: whole.start(),
                    end: whole.end(),
                    marker: *marker,
                    inner: caps.get(1).map_or("", |m| m.as_str()),
                    href: caps.get(2).map_or("", |m| m.as_str()),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn link(text: &str, href: &str) -> TextRun {
        TextRun::styled(
            text,
            StyleMark::Link {
                href: href.to_owned(),
            },
        )
    }

    #[test]
    fn test_no_markers_single_plain_run() {
        assert_eq!(format("no markers"), vec![TextRun::plain("no markers")]);
    }

    #[test]
    fn test_bold_span() {
        assert_eq!(
            format("a **b** c"),
            vec![
                TextRun::plain("a "),
                TextRun::styled("b", StyleMark::Bold),
                TextRun::plain(" c"),
            ]
        );
    }

    #[test]
    fn test_link_only() {
        assert_eq!(format("[x](http://y)"), vec![link("x", "http://y")]);
    }

    #[test]
    fn test_every_marker_in_order() {
        assert_eq!(
            format("*i*, ~~s~~, `c` and [l](u)."),
            vec![
                TextRun::styled("i", StyleMark::Italic),
                TextRun::plain(", "),
                TextRun::styled("s", StyleMark::Strikethrough),
                TextRun::plain(", "),
                TextRun::styled("c", StyleMark::Code),
                TextRun::plain(" and "),
                link("l", "u"),
                TextRun::plain("."),
            ]
        );
    }

    #[test]
    fn test_nested_italic_duplicates_text() {
        // The italic match inside the bold span is kept as its own run.
        assert_eq!(
            format("**a *b* c**"),
            vec![
                TextRun::styled("a *b* c", StyleMark::Bold),
                TextRun::styled("b", StyleMark::Italic),
            ]
        );
    }

    #[test]
    fn test_whitespace_gap_between_markers_dropped() {
        assert_eq!(
            format("`a` `b`"),
            vec![
                TextRun::styled("a", StyleMark::Code),
                TextRun::styled("b", StyleMark::Code),
            ]
        );
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        assert_eq!(format("~~open"), vec![TextRun::plain("~~open")]);
        assert_eq!(
            format("[text](no-close"),
            vec![TextRun::plain("[text](no-close")]
        );
    }

    #[test]
    fn test_lone_double_star_is_empty_italic() {
        // `**` alone matches `*(.*?)*` with an empty capture, which is dropped.
        assert_eq!(format("**open"), vec![TextRun::plain("open")]);
    }

    #[test]
    fn test_empty_capture_falls_back_to_input() {
        assert_eq!(format("****"), vec![TextRun::plain("****")]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format(""), vec![TextRun::plain("")]);
    }

    #[test]
    fn test_markers_do_not_cross_lines() {
        assert_eq!(format("*a\nb*"), vec![TextRun::plain("*a\nb*")]);
    }

    #[test]
    fn test_multibyte_text_around_markers() {
        assert_eq!(
            format("café **naïve** ünïcode"),
            vec![
                TextRun::plain("café "),
                TextRun::styled("naïve", StyleMark::Bold),
                TextRun::plain(" ünïcode"),
            ]
        );
    }

    #[test]
    fn test_concatenation_drops_only_delimiters() {
        let runs = format("x *y* z");
        let joined: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(joined, "x y z");
    }
}
