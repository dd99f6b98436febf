use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Author, BlogStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub author: Author,
    pub published_at: Option<NaiveDate>,
    pub submitted_at: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub views: u32,
    pub is_liked: bool,
    pub status: BlogStatus,
    pub rejection_reason: Option<String>,
    pub word_count: Option<u32>,
}

impl BlogPost {
    /// Publication date, falling back to the submission date for posts that
    /// never went live.
    pub fn display_date(&self) -> Option<NaiveDate> {
        self.published_at.or(self.submitted_at)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Layout of a feed card.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    #[default]
    Default,
    Featured,
    Compact,
}
