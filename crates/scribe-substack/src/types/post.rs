//! Published post types.

use scribe_config::Audience;
use serde::{Deserialize, Serialize};

/// Published post as returned by `GET /posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Post {
    /// Post ID.
    pub id: u64,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Publish time (ISO 8601).
    #[serde(default)]
    pub post_date: Option<String>,
    /// Audience as stored by the platform.
    #[serde(default)]
    pub audience: Option<String>,
}

/// Options for publishing a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PublishOptions {
    /// Email subscribers about the post.
    #[serde(rename = "should_send_email")]
    pub send_email: bool,
    /// Who can read the post.
    pub audience: Audience,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            send_email: true,
            audience: Audience::Everyone,
        }
    }
}

/// Result of publishing a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPost {
    /// Post ID, when the API returned one.
    pub id: Option<u64>,
    /// URL slug, when the API returned one.
    pub slug: Option<String>,
    /// Public post URL, derived from the slug.
    pub url: Option<String>,
}

/// Raw `POST /drafts/{id}/publish` response.
#[derive(Debug, Deserialize)]
pub(crate) struct PublishResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_publish_options_wire_format() {
        let options = PublishOptions {
            send_email: false,
            audience: Audience::Paid,
        };
        assert_eq!(
            serde_json::to_value(options).unwrap(),
            json!({"should_send_email": false, "audience": "paid"})
        );
    }

    #[test]
    fn test_publish_options_default() {
        assert_eq!(
            serde_json::to_value(PublishOptions::default()).unwrap(),
            json!({"should_send_email": true, "audience": "everyone"})
        );
    }

    #[test]
    fn test_post_deserialize() {
        let post: Post = serde_json::from_value(json!({
            "id": 5,
            "title": "Hello",
            "slug": "hello",
            "post_date": "2026-01-02T03:04:05.000Z",
            "reactions": {"❤": 3}
        }))
        .unwrap();
        assert_eq!(post.slug.as_deref(), Some("hello"));
        assert_eq!(post.audience, None);
    }
}
