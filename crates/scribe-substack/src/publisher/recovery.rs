//! Finding a draft the server created despite answering 500.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::types::Draft;

/// Drafts saved more than this long before the create request are not ours.
const CLOCK_SKEW: TimeDelta = TimeDelta::seconds(30);

/// Pick the draft most likely created by a request sent at `requested_at`.
///
/// Candidates carry exactly `title` and were saved no earlier than
/// `CLOCK_SKEW` before the request. A draft whose timestamp is missing or
/// unreadable is kept as a candidate. When the first candidate has a
/// timestamp the most recently saved one wins, otherwise the first one does.
pub(super) fn find_created_draft(
    drafts: Vec<Draft>,
    title: &str,
    requested_at: DateTime<Utc>,
) -> Option<Draft> {
    let earliest = requested_at - CLOCK_SKEW;
    let mut candidates = drafts
        .into_iter()
        .filter(|draft| draft.draft_title.as_deref() == Some(title))
        .filter_map(|draft| {
            let saved_at = draft.draft_updated_at.as_deref().and_then(parse_timestamp);
            match saved_at {
                Some(at) if at <= earliest => None,
                _ => Some((draft, saved_at)),
            }
        });

    let first = candidates.next()?;
    if first.1.is_none() {
        return Some(first.0);
    }
    let newest = candidates.fold(first, |best, candidate| {
        if candidate.1 > best.1 { candidate } else { best }
    });
    Some(newest.0)
}

/// Parse an ISO 8601 timestamp; one without offset is taken as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|at| at.and_utc())
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(id: u64, title: &str, updated_at: Option<&str>) -> Draft {
        Draft {
            id,
            draft_title: Some(title.to_owned()),
            draft_updated_at: updated_at.map(str::to_owned),
            ..Default::default()
        }
    }

    fn requested_at() -> DateTime<Utc> {
        parse_timestamp("2026-05-01T12:00:00Z").unwrap()
    }

    fn found(drafts: Vec<Draft>) -> Option<u64> {
        find_created_draft(drafts, "Post", requested_at()).map(|d| d.id)
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = requested_at();
        assert_eq!(parse_timestamp("2026-05-01T12:00:00.000Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-05-01T14:00:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-05-01T12:00:00"), Some(expected));
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_no_drafts() {
        assert_eq!(found(vec![]), None);
    }

    #[test]
    fn test_title_must_match_exactly() {
        assert_eq!(
            found(vec![
                draft(1, "post", Some("2026-05-01T12:00:01Z")),
                draft(2, "Post ", Some("2026-05-01T12:00:01Z")),
            ]),
            None
        );
    }

    #[test]
    fn test_old_draft_with_same_title_ignored() {
        assert_eq!(
            found(vec![draft(1, "Post", Some("2026-05-01T11:59:30Z"))]),
            None
        );
        assert_eq!(
            found(vec![draft(2, "Post", Some("2026-05-01T11:59:31Z"))]),
            Some(2)
        );
    }

    #[test]
    fn test_most_recent_wins() {
        assert_eq!(
            found(vec![
                draft(1, "Post", Some("2026-05-01T12:00:01Z")),
                draft(2, "Post", Some("2026-05-01T12:00:05Z")),
                draft(3, "Post", Some("2026-05-01T12:00:03Z")),
                draft(4, "Other", Some("2026-05-01T12:00:09Z")),
            ]),
            Some(2)
        );
    }

    #[test]
    fn test_unparseable_timestamp_is_candidate() {
        assert_eq!(found(vec![draft(7, "Post", Some("garbage"))]), Some(7));
        assert_eq!(found(vec![draft(8, "Post", None)]), Some(8));
    }

    #[test]
    fn test_first_without_timestamp_wins() {
        assert_eq!(
            found(vec![
                draft(1, "Post", None),
                draft(2, "Post", Some("2026-05-01T12:00:05Z")),
            ]),
            Some(1)
        );
    }

    #[test]
    fn test_timestamped_beats_unparseable() {
        assert_eq!(
            found(vec![
                draft(1, "Post", Some("2026-05-01T12:00:05Z")),
                draft(2, "Post", Some("garbage")),
            ]),
            Some(1)
        );
    }
}
