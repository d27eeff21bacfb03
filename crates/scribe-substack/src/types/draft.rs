//! Draft types.

use scribe_config::Audience;
use scribe_markup::Document;
use serde::{Deserialize, Serialize, Serializer};

/// Draft as returned by the drafts endpoints.
///
/// Only the fields scribe reads are declared; serde skips the rest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Draft {
    /// Draft ID.
    pub id: u64,
    /// Title.
    #[serde(default)]
    pub draft_title: Option<String>,
    /// Subtitle.
    #[serde(default)]
    pub draft_subtitle: Option<String>,
    /// Body as a JSON-encoded document string.
    #[serde(default)]
    pub draft_body: Option<String>,
    /// Whether the draft has been published.
    #[serde(default)]
    pub is_published: bool,
    /// Creation time (ISO 8601).
    #[serde(default)]
    pub draft_created_at: Option<String>,
    /// Last save time (ISO 8601).
    #[serde(default)]
    pub draft_updated_at: Option<String>,
    /// Scheduled or actual publish time.
    #[serde(default)]
    pub post_date: Option<String>,
    /// Owning publication.
    #[serde(default)]
    pub publication_id: Option<u64>,
    /// Post type, usually `newsletter`.
    #[serde(rename = "type", default)]
    pub post_type: Option<String>,
    /// Audience as stored by the platform.
    #[serde(default)]
    pub audience: Option<String>,
    /// Authors.
    #[serde(rename = "postBylines", default)]
    pub post_bylines: Vec<Byline>,
    /// URL slug, set once published.
    #[serde(default)]
    pub slug: Option<String>,
}

impl Draft {
    /// Title or a placeholder for untitled drafts.
    #[must_use]
    pub fn title_or_untitled(&self) -> &str {
        self.draft_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled")
    }

    /// First text run of the body, cut to `max_chars` characters.
    ///
    /// Returns `None` when the body is missing, not a document, or starts
    /// with a block that holds no text.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> Option<String> {
        let body: serde_json::Value = serde_json::from_str(self.draft_body.as_deref()?).ok()?;
        let text = body
            .get("content")?
            .get(0)?
            .get("content")?
            .get(0)?
            .get("text")?
            .as_str()?;
        Some(text.chars().take(max_chars).collect())
    }
}

/// Author entry on an existing draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Byline {
    /// Author user ID.
    pub user_id: u64,
    /// Whether the author is a guest.
    #[serde(default)]
    pub is_guest: bool,
}

/// Author entry sent when creating a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftByline {
    /// Author user ID.
    pub user_id: u64,
    /// Always true for new drafts.
    pub is_draft: bool,
    /// Whether the author is a guest.
    pub is_guest: bool,
    /// Same as `user_id`.
    pub id: u64,
}

impl From<&Byline> for DraftByline {
    fn from(byline: &Byline) -> Self {
        Self {
            user_id: byline.user_id,
            is_draft: true,
            is_guest: byline.is_guest,
            id: byline.user_id,
        }
    }
}

/// Optional post settings applied when creating a draft.
///
/// Loadable from TOML:
///
/// ```toml
/// audience = "paid"
/// description = "A short summary"
/// search_engine_title = "Title for search results"
/// section_id = 1234
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DraftMetadata {
    /// Audience; the reference draft's audience when unset.
    pub audience: Option<Audience>,
    /// Marks the post as explicit.
    pub explicit: bool,
    /// Hides the post from the Substack feed.
    pub hide_from_feed: bool,
    /// Who may comment; `everyone` when unset.
    pub write_comment_permissions: Option<String>,
    /// Comment ordering; `best_first` when unset.
    pub default_comment_sort: Option<String>,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Post description.
    pub description: Option<String>,
    /// Title shown in search results.
    pub search_engine_title: Option<String>,
    /// Description shown in search results.
    pub search_engine_description: Option<String>,
    /// Title shown when shared on social media.
    pub social_title: Option<String>,
    /// Publication section to file the draft under.
    pub section_id: Option<u64>,
}

/// Payload for `POST /drafts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)] // Mirrors the API payload
pub struct NewDraft {
    pub draft_title: String,
    pub draft_subtitle: Option<String>,
    pub publication_id: Option<u64>,
    #[serde(rename = "type")]
    pub post_type: String,
    pub audience: String,
    pub editor_v2: bool,
    pub section_chosen: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_section_id: Option<u64>,
    pub subscriber_set_id: u64,
    pub should_send_email: bool,
    pub free_unlock_required: bool,
    pub exempt_from_archive_paywall: bool,
    pub explicit: bool,
    pub meter_type: Option<String>,
    pub hide_from_feed: bool,
    pub should_send_free_preview: bool,
    pub show_guest_bios: bool,
    pub write_comment_permissions: String,
    pub default_comment_sort: String,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub search_engine_title: Option<String>,
    pub search_engine_description: Option<String>,
    pub social_title: Option<String>,
    #[serde(serialize_with = "document_as_string")]
    pub draft_body: Document,
    pub draft_bylines: Vec<DraftByline>,
}

impl NewDraft {
    /// Build a creation payload that copies publication, type, audience and
    /// bylines from an existing `reference` draft.
    ///
    /// An empty subtitle is sent as null.
    #[must_use]
    pub fn from_reference(
        reference: &Draft,
        title: &str,
        subtitle: Option<&str>,
        body: Document,
        metadata: &DraftMetadata,
    ) -> Self {
        let audience = metadata.audience.map_or_else(
            || {
                reference
                    .audience
                    .clone()
                    .unwrap_or_else(|| Audience::Everyone.as_str().to_owned())
            },
            |a| a.as_str().to_owned(),
        );

        Self {
            draft_title: title.to_owned(),
            draft_subtitle: subtitle.filter(|s| !s.is_empty()).map(str::to_owned),
            publication_id: reference.publication_id,
            post_type: reference
                .post_type
                .clone()
                .unwrap_or_else(|| "newsletter".to_owned()),
            audience,
            editor_v2: true,
            section_chosen: metadata.section_id.is_some(),
            draft_section_id: metadata.section_id,
            subscriber_set_id: 1,
            should_send_email: true,
            free_unlock_required: false,
            exempt_from_archive_paywall: false,
            explicit: metadata.explicit,
            meter_type: None,
            hide_from_feed: metadata.hide_from_feed,
            should_send_free_preview: false,
            show_guest_bios: false,
            write_comment_permissions: metadata
                .write_comment_permissions
                .clone()
                .unwrap_or_else(|| "everyone".to_owned()),
            default_comment_sort: metadata
                .default_comment_sort
                .clone()
                .unwrap_or_else(|| "best_first".to_owned()),
            cover_image: metadata.cover_image.clone(),
            description: metadata.description.clone(),
            search_engine_title: metadata.search_engine_title.clone(),
            search_engine_description: metadata.search_engine_description.clone(),
            social_title: metadata.social_title.clone(),
            draft_body: body,
            draft_bylines: reference.post_bylines.iter().map(DraftByline::from).collect(),
        }
    }
}

/// Auto-save payload for `PUT /drafts/{id}`. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftUpdate {
    #[serde(rename = "draft_title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "draft_subtitle", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(
        rename = "draft_body",
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_document_as_string"
    )]
    pub body: Option<Document>,
}

impl DraftUpdate {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.subtitle.is_none() && self.body.is_none()
    }
}

/// The API stores draft bodies as a JSON string inside the JSON payload.
fn document_as_string<S: Serializer>(document: &Document, serializer: S) -> Result<S::Ok, S::Error> {
    let json = serde_json::to_string(document).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&json)
}

#[allow(clippy::ref_option)] // Signature required by serde
fn optional_document_as_string<S: Serializer>(
    document: &Option<Document>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match document {
        Some(document) => document_as_string(document, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scribe_markup::compile;
    use serde_json::json;

    fn reference() -> Draft {
        serde_json::from_value(json!({
            "id": 42,
            "draft_title": "Reference",
            "is_published": false,
            "publication_id": 7,
            "type": "podcast",
            "audience": "only_paid",
            "postBylines": [
                {"user_id": 100, "is_guest": false, "name": "Writer"},
                {"user_id": 200}
            ],
            "unknown_field": {"ignored": true}
        }))
        .unwrap()
    }

    #[test]
    fn test_draft_deserialize_minimal() {
        let draft: Draft = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(draft.id, 1);
        assert!(!draft.is_published);
        assert!(draft.post_bylines.is_empty());
        assert_eq!(draft.title_or_untitled(), "Untitled");
    }

    #[test]
    fn test_draft_deserialize_nulls() {
        let draft: Draft = serde_json::from_value(json!({
            "id": 1,
            "draft_title": null,
            "draft_body": null,
            "draft_updated_at": "2026-03-01T10:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(draft.draft_title, None);
        assert_eq!(
            draft.draft_updated_at.as_deref(),
            Some("2026-03-01T10:00:00.000Z")
        );
    }

    #[test]
    fn test_preview_first_text() {
        let draft = Draft {
            draft_body: Some(compile("Text:: Hello there | Text:: second").to_json().unwrap()),
            ..Default::default()
        };
        assert_eq!(draft.preview(100), Some("Hello there".to_owned()));
        assert_eq!(draft.preview(5), Some("Hello".to_owned()));
    }

    #[test]
    fn test_preview_unreadable_body() {
        let draft = Draft {
            draft_body: Some("not json".to_owned()),
            ..Default::default()
        };
        assert_eq!(draft.preview(100), None);
        assert_eq!(Draft::default().preview(100), None);
    }

    #[test]
    fn test_new_draft_copies_reference() {
        let payload = NewDraft::from_reference(
            &reference(),
            "My post",
            Some(""),
            compile("Text:: hi"),
            &DraftMetadata::default(),
        );
        assert_eq!(payload.draft_subtitle, None);
        assert_eq!(payload.publication_id, Some(7));
        assert_eq!(payload.post_type, "podcast");
        assert_eq!(payload.audience, "only_paid");
        assert!(!payload.section_chosen);
        assert_eq!(
            payload.draft_bylines,
            vec![
                DraftByline {
                    user_id: 100,
                    is_draft: true,
                    is_guest: false,
                    id: 100
                },
                DraftByline {
                    user_id: 200,
                    is_draft: true,
                    is_guest: false,
                    id: 200
                },
            ]
        );
    }

    #[test]
    fn test_new_draft_defaults_without_reference_fields() {
        let reference = Draft {
            id: 1,
            ..Default::default()
        };
        let payload = NewDraft::from_reference(
            &reference,
            "T",
            Some("Sub"),
            Document::default(),
            &DraftMetadata::default(),
        );
        assert_eq!(payload.draft_subtitle.as_deref(), Some("Sub"));
        assert_eq!(payload.post_type, "newsletter");
        assert_eq!(payload.audience, "everyone");
        assert_eq!(payload.write_comment_permissions, "everyone");
        assert_eq!(payload.default_comment_sort, "best_first");
    }

    #[test]
    fn test_new_draft_metadata_overrides() {
        let metadata = DraftMetadata {
            audience: Some(Audience::Paid),
            explicit: true,
            description: Some("Summary".to_owned()),
            section_id: Some(9),
            ..Default::default()
        };
        let payload =
            NewDraft::from_reference(&reference(), "T", None, Document::default(), &metadata);
        assert_eq!(payload.audience, "paid");
        assert!(payload.explicit);
        assert!(payload.section_chosen);
        assert_eq!(payload.draft_section_id, Some(9));
        assert_eq!(payload.description.as_deref(), Some("Summary"));
    }

    #[test]
    fn test_new_draft_wire_format() {
        let payload = NewDraft::from_reference(
            &reference(),
            "My post",
            None,
            compile("Text:: hi"),
            &DraftMetadata::default(),
        );
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["type"], "podcast");
        assert_eq!(value["editor_v2"], true);
        assert_eq!(value["subscriber_set_id"], 1);
        assert_eq!(value["meter_type"], serde_json::Value::Null);
        assert_eq!(value["cover_image"], serde_json::Value::Null);
        assert!(value.get("draft_section_id").is_none());
        assert_eq!(
            value["draft_body"],
            r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"hi"}]}]}"#
        );
        assert_eq!(value["draft_bylines"][0]["is_draft"], true);
    }

    #[test]
    fn test_draft_update_serializes_only_set_fields() {
        let update = DraftUpdate {
            title: Some("New title".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"draft_title": "New title"})
        );
    }

    #[test]
    fn test_draft_update_body_is_json_string() {
        let update = DraftUpdate {
            body: Some(Document::default()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"draft_body": r#"{"type":"doc","content":[]}"#})
        );
    }

    #[test]
    fn test_draft_update_is_empty() {
        assert!(DraftUpdate::default().is_empty());
        assert!(
            !DraftUpdate {
                subtitle: Some(String::new()),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_metadata_from_toml_shape() {
        let metadata: DraftMetadata =
            serde_json::from_value(json!({"audience": "paid", "hide_from_feed": true})).unwrap();
        assert_eq!(metadata.audience, Some(Audience::Paid));
        assert!(metadata.hide_from_feed);
        assert_eq!(metadata.section_id, None);
    }
}
