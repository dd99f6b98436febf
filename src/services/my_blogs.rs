use crate::models::{BlogPost, BlogStatus};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum StatusTab {
    #[default]
    All,
    Published,
    Pending,
    Rejected,
    Hidden,
}

impl StatusTab {
    pub const ALL: [StatusTab; 5] = [
        Self::All,
        Self::Published,
        Self::Pending,
        Self::Rejected,
        Self::Hidden,
    ];

    pub fn status(&self) -> Option<BlogStatus> {
        match self {
            Self::All => None,
            Self::Published => Some(BlogStatus::Approved),
            Self::Pending => Some(BlogStatus::Pending),
            Self::Rejected => Some(BlogStatus::Rejected),
            Self::Hidden => Some(BlogStatus::Hidden),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Published => "Published",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
            Self::Hidden => "Hidden",
        }
    }

    /// Message shown when the tab has no posts. All and Published show an
    /// empty grid instead.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            Self::All | Self::Published => None,
            Self::Pending => Some("No pending blog posts."),
            Self::Rejected => Some("No rejected blog posts."),
            Self::Hidden => Some("No hidden blog posts."),
        }
    }
}

pub fn posts_for(posts: &[BlogPost], tab: StatusTab) -> Vec<BlogPost> {
    match tab.status() {
        None => posts.to_vec(),
        Some(status) => posts.iter().filter(|p| p.status == status).cloned().collect(),
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct StatusCounts {
    pub all: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    pub hidden: usize,
}

impl StatusCounts {
    pub fn from_posts(posts: &[BlogPost]) -> Self {
        posts.iter().fold(
            Self {
                all: posts.len(),
                ..Default::default()
            },
            |mut acc, p| {
                match p.status {
                    BlogStatus::Approved => acc.approved += 1,
                    BlogStatus::Pending => acc.pending += 1,
                    BlogStatus::Rejected => acc.rejected += 1,
                    BlogStatus::Hidden => acc.hidden += 1,
                }
                acc
            },
        )
    }

    pub fn for_tab(&self, tab: StatusTab) -> usize {
        match tab {
            StatusTab::All => self.all,
            StatusTab::Published => self.approved,
            StatusTab::Pending => self.pending,
            StatusTab::Rejected => self.rejected,
            StatusTab::Hidden => self.hidden,
        }
    }

    pub fn tab_label(&self, tab: StatusTab) -> String {
        format!("{} ({})", tab.label(), self.for_tab(tab))
    }
}
