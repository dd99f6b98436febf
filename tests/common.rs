#![allow(dead_code)]

use devnovate::common::date;
use devnovate::models::*;
use devnovate::services::BlogDraft;

pub fn get_seed_author() -> Author {
    Author::new("Jane Tester").with_email("jane@test.com")
}

pub fn get_seed_post(id: &str, status: BlogStatus, tags: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: format!("Post {}", id),
        excerpt: format!("Excerpt for post {}", id),
        author: get_seed_author(),
        published_at: Some(date(2026, 1, 4)),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        status,
        ..Default::default()
    }
}

/// One post per status, in lifecycle order.
pub fn get_seed_posts_mixed() -> Vec<BlogPost> {
    vec![
        get_seed_post("a", BlogStatus::Approved, &["Rust"]),
        get_seed_post("b", BlogStatus::Pending, &["Rust", "CSS"]),
        get_seed_post("c", BlogStatus::Rejected, &["CSS"]),
        get_seed_post("d", BlogStatus::Hidden, &[]),
        get_seed_post("e", BlogStatus::Approved, &["AI"]),
    ]
}

pub fn get_seed_draft() -> BlogDraft {
    BlogDraft {
        title: "Ownership in practice".to_string(),
        content: "Borrowing rules keep aliasing and mutation apart".to_string(),
        excerpt: "A short tour".to_string(),
        tags: vec!["Rust".to_string()],
        cover_image: String::new(),
    }
}
