use std::collections::BTreeSet;

use crate::common::ModerationError;
use crate::models::BlogPost;

/// Decision an admin takes on a pending submission.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn toast_title(&self) -> &'static str {
        match self {
            Self::Approve => "Blog approved and published!",
            Self::Reject => "Blog rejected and author notified.",
        }
    }
}

/// In-memory list of submissions awaiting review.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModerationQueue {
    pending: Vec<BlogPost>,
}

impl ModerationQueue {
    pub fn new(pending: Vec<BlogPost>) -> Self {
        Self { pending }
    }

    pub fn pending(&self) -> &[BlogPost] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn approve(&mut self, id: &str) -> Result<BlogPost, ModerationError> {
        self.decide(id, Decision::Approve)
    }

    pub fn reject(&mut self, id: &str) -> Result<BlogPost, ModerationError> {
        self.decide(id, Decision::Reject)
    }

    /// Removes exactly the entry with `id`. The queue is untouched on error.
    pub fn decide(&mut self, id: &str, decision: Decision) -> Result<BlogPost, ModerationError> {
        let Some(idx) = self.pending.iter().position(|p| p.id == id) else {
            log::warn!("{:?} requested for unknown submission {}", decision, id);
            return Err(ModerationError::NotFound(id.to_string()));
        };

        let post = self.pending.remove(idx);
        log::info!("{:?}: {} ({})", decision, post.title, post.id);
        Ok(post)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum VisibilityChange {
    Hidden,
    Visible,
}

impl VisibilityChange {
    pub fn toast_title(&self) -> &'static str {
        match self {
            Self::Hidden => "Blog hidden from public view.",
            Self::Visible => "Blog made visible to public.",
        }
    }
}

/// Hide flags for published cards. The published list itself is never
/// changed; only the ids flagged here render as hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityFlags {
    hidden: BTreeSet<String>,
}

impl VisibilityFlags {
    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }

    pub fn toggle(&mut self, id: &str) -> VisibilityChange {
        if self.hidden.remove(id) {
            VisibilityChange::Visible
        } else {
            self.hidden.insert(id.to_string());
            VisibilityChange::Hidden
        }
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }
}

/// Width in percent of the bar for the `index`-th top category.
pub fn category_bar_width(index: usize) -> u32 {
    100u32.saturating_sub(index as u32 * 15)
}
