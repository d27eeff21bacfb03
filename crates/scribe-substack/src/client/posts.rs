//! Published post operations for the Substack API.

use tracing::info;

use super::SubstackClient;
use crate::error::SubstackError;
use crate::types::{Draft, Post};

impl SubstackClient {
    /// List published posts.
    pub fn list_posts(&self) -> Result<Vec<Post>, SubstackError> {
        let url = format!("{}/posts", self.api_url());

        let response = self.with_session(self.agent.get(&url)).call()?;
        let posts: Vec<Post> = Self::read_json(response)?;

        info!("Found {} published posts", posts.len());
        Ok(posts)
    }

    /// Turn a published post back into a draft.
    pub fn unpublish_post(&self, post_id: u64) -> Result<Draft, SubstackError> {
        let url = format!("{}/posts/{post_id}/unpublish", self.api_url());

        info!("Unpublishing post {}", post_id);

        let response = self
            .with_session(self.agent.post(&url))
            .send(&b"{}"[..])?;
        Self::read_json(response)
    }
}
