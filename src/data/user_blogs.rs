use crate::common::date;
use crate::models::{BlogPost, BlogStatus};

use super::tags;

/// Posts written by the signed-in user, one in each review state.
pub fn user_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".into(),
            title: "Getting Started with React Hooks".into(),
            excerpt: "A comprehensive guide to understanding and using React Hooks in your applications.".into(),
            status: BlogStatus::Approved,
            published_at: Some(date(2024, 1, 15)),
            views: 1234,
            likes: 56,
            comments: 12,
            tags: tags(&["React", "JavaScript", "Hooks"]),
            ..Default::default()
        },
        BlogPost {
            id: "2".into(),
            title: "Building RESTful APIs with Express.js".into(),
            excerpt: "Learn how to create robust APIs using Express.js and best practices for backend development.".into(),
            status: BlogStatus::Pending,
            submitted_at: Some(date(2024, 1, 12)),
            tags: tags(&["Node.js", "Express", "API"]),
            ..Default::default()
        },
        BlogPost {
            id: "3".into(),
            title: "CSS Grid Layout Masterclass".into(),
            excerpt: "Master CSS Grid with practical examples and real-world layouts.".into(),
            status: BlogStatus::Rejected,
            submitted_at: Some(date(2024, 1, 10)),
            rejection_reason: Some(
                "Content needs more detailed examples and better formatting.".into(),
            ),
            tags: tags(&["CSS", "Layout", "Design"]),
            ..Default::default()
        },
        BlogPost {
            id: "4".into(),
            title: "Introduction to TypeScript".into(),
            excerpt: "Getting started with TypeScript for better JavaScript development.".into(),
            status: BlogStatus::Hidden,
            published_at: Some(date(2024, 1, 5)),
            views: 789,
            likes: 23,
            comments: 5,
            tags: tags(&["TypeScript", "JavaScript"]),
            ..Default::default()
        },
    ]
}
