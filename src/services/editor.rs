use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::common::{DraftError, SubmitError};
use crate::models::{BlogPost, BlogStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub cover_image: String,
}

impl BlogDraft {
    pub fn add_tag(&mut self, input: &str) -> Result<String, DraftError> {
        add_tag(&mut self.tags, input)
    }

    pub fn remove_tag(&mut self, tag: &str) {
        remove_tag(&mut self.tags, tag);
    }

    pub fn has_cover(&self) -> bool {
        !self.cover_image.trim().is_empty()
    }

    /// The draft as a record awaiting review. Nothing is validated.
    pub fn submission(&self) -> BlogPost {
        BlogPost {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
            cover_image: self.has_cover().then(|| self.cover_image.clone()),
            word_count: Some(word_count(&self.content)),
            status: BlogStatus::Pending,
            ..Default::default()
        }
    }
}

/// Appends the trimmed `input` unless it is blank or already present.
pub fn add_tag(tags: &mut Vec<String>, input: &str) -> Result<String, DraftError> {
    let tag = input.trim();
    if tag.is_empty() {
        return Err(DraftError::EmptyTag);
    }
    if tags.iter().any(|t| t == tag) {
        return Err(DraftError::DuplicateTag(tag.to_string()));
    }

    tags.push(tag.to_string());
    Ok(tag.to_string())
}

pub fn remove_tag(tags: &mut Vec<String>, tag: &str) {
    tags.retain(|t| t != tag);
}

pub fn word_count(content: &str) -> u32 {
    content.split_whitespace().count() as u32
}

/// Simulated round trip standing in for a submission request.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

pub const SUBMITTED_TITLE: &str = "Blog submitted for review!";
pub const SUBMITTED_DESCRIPTION: &str =
    "Your blog post has been submitted and is pending admin approval.";
pub const SUBMIT_FAILED_TITLE: &str = "Failed to submit blog";
pub const SUBMIT_FAILED_DESCRIPTION: &str = "Please try again later.";
pub const PREVIEW_TITLE: &str = "Preview feature coming soon!";
pub const PREVIEW_DESCRIPTION: &str = "Preview functionality will be available in the next update.";
pub const DRAFT_SAVED: &str = "Draft saved.";

/// Hands a draft over for review. Always succeeds while submissions stay
/// in memory; the error arm is what the create page reports on failure.
pub fn submit_for_review(draft: &BlogDraft) -> Result<BlogPost, SubmitError> {
    let post = draft.submission();
    log::info!("submitted {:?} with {} tags for review", post.title, post.tags.len());
    Ok(post)
}
