use crate::common::date;
use crate::models::{Author, BlogPost, BlogStatus, PlatformStats};

use super::tags;

pub const TOP_CATEGORIES: [&str; 5] = ["React", "JavaScript", "Node.js", "TypeScript", "CSS"];

/// Submissions waiting for an admin decision.
pub fn pending_submissions() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".into(),
            title: "Advanced React Patterns and Best Practices".into(),
            excerpt: "Exploring advanced React patterns including render props, compound components, and custom hooks.".into(),
            author: Author::new("John Doe").with_email("john@example.com"),
            submitted_at: Some(date(2024, 1, 12)),
            tags: tags(&["React", "JavaScript", "Patterns"]),
            word_count: Some(2500),
            status: BlogStatus::Pending,
            ..Default::default()
        },
        BlogPost {
            id: "2".into(),
            title: "Building Microservices with Docker and Kubernetes".into(),
            excerpt: "A comprehensive guide to containerizing applications and orchestrating microservices.".into(),
            author: Author::new("Jane Smith").with_email("jane@example.com"),
            submitted_at: Some(date(2024, 1, 11)),
            tags: tags(&["Docker", "Kubernetes", "Microservices"]),
            word_count: Some(3200),
            status: BlogStatus::Pending,
            ..Default::default()
        },
        BlogPost {
            id: "3".into(),
            title: "GraphQL vs REST: When to Use Each".into(),
            excerpt: "Comparing GraphQL and REST APIs with practical examples and use cases.".into(),
            author: Author::new("Alex Johnson").with_email("alex@example.com"),
            submitted_at: Some(date(2024, 1, 10)),
            tags: tags(&["GraphQL", "REST", "API"]),
            word_count: Some(1800),
            status: BlogStatus::Pending,
            ..Default::default()
        },
    ]
}

pub fn published_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "4".into(),
            title: "Getting Started with React Server Components".into(),
            author: Author::new("Sarah Chen"),
            published_at: Some(date(2024, 1, 15)),
            views: 2341,
            likes: 124,
            comments: 18,
            tags: tags(&["React", "JavaScript", "Frontend"]),
            status: BlogStatus::Approved,
            ..Default::default()
        },
        BlogPost {
            id: "5".into(),
            title: "Building Scalable APIs with Node.js".into(),
            author: Author::new("Mike Wilson"),
            published_at: Some(date(2024, 1, 12)),
            views: 1876,
            likes: 89,
            comments: 12,
            tags: tags(&["Node.js", "API", "Backend"]),
            status: BlogStatus::Approved,
            ..Default::default()
        },
    ]
}

pub fn platform_stats() -> PlatformStats {
    PlatformStats {
        total_blogs: 156,
        pending_review: 3,
        published_this_month: 24,
        total_authors: 48,
        total_views: 89_234,
        average_read_time: "4.2 min".into(),
    }
}
