//! Substack API types.

mod draft;
mod post;

pub use draft::{Byline, Draft, DraftByline, DraftMetadata, DraftUpdate, NewDraft};
pub use post::{Post, PublishOptions, PublishedPost};
pub(crate) use post::PublishResponse;
