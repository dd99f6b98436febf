use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_blogs: u32,
    pub pending_review: u32,
    pub published_this_month: u32,
    pub total_authors: u32,
    pub total_views: u64,
    pub average_read_time: String,
}
