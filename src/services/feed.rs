use crate::common::{format_date, format_count};
use crate::data::ALL_CATEGORIES;
use crate::models::BlogPost;

/// Feed cards list at most this many tags.
pub const CARD_TAG_LIMIT: usize = 3;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum HomeTab {
    Featured,
    Trending,
    #[default]
    Latest,
}

impl HomeTab {
    pub const ALL: [HomeTab; 3] = [Self::Featured, Self::Trending, Self::Latest];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::Trending => "Trending",
            Self::Latest => "Latest",
        }
    }
}

/// Posts tagged with `category`, in feed order. "All" keeps every post.
pub fn filter_by_category(posts: &[BlogPost], category: &str) -> Vec<BlogPost> {
    if category == ALL_CATEGORIES {
        return posts.to_vec();
    }

    posts
        .iter()
        .filter(|p| p.has_tag(category))
        .cloned()
        .collect()
}

fn window(posts: &[BlogPost], start: usize, end: usize) -> Vec<BlogPost> {
    let end = end.min(posts.len());
    let start = start.min(end);
    posts[start..end].to_vec()
}

pub fn featured(posts: &[BlogPost]) -> Option<BlogPost> {
    posts.first().cloned()
}

pub fn trending(posts: &[BlogPost]) -> Vec<BlogPost> {
    window(posts, 1, 4)
}

/// Display strings for a feed card, derived once from the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub author_name: String,
    pub author_initial: String,
    pub date: String,
    pub tags: Vec<String>,
    pub likes: String,
    pub comments: String,
    pub views: String,
}

impl CardView {
    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            href: format!("/blog/{}", post.id),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author_name: post.author.name.clone(),
            author_initial: post.author.initial(),
            date: post.display_date().map(format_date).unwrap_or_default(),
            tags: post.tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
            likes: format_count(post.likes.into()),
            comments: format_count(post.comments.into()),
            views: format_count(post.views.into()),
        }
    }
}
