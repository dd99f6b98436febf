use crate::common::date;
use crate::models::{Author, BlogPost, BlogStatus};

use super::tags;

pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: [&str; 10] = [
    ALL_CATEGORIES,
    "React",
    "JavaScript",
    "TypeScript",
    "Node.js",
    "CSS",
    "Backend",
    "Frontend",
    "AI",
    "Design",
];

const UNSPLASH_COVER: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80";

fn cover(photo: &str) -> Option<String> {
    Some(format!("https://images.unsplash.com/{photo}{UNSPLASH_COVER}"))
}

fn avatar(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?w=100")
}

/// Published posts shown on the home feed, newest first.
pub fn feed_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".into(),
            title: "Getting Started with React Server Components".into(),
            excerpt: "Learn how to use React Server Components to build faster, more efficient web applications with better SEO and performance.".into(),
            cover_image: cover("photo-1633356122544-f134324a6cee"),
            author: Author::new("Sarah Chen").with_avatar(avatar("photo-1494790108755-2616b612b5bc")),
            published_at: Some(date(2024, 1, 15)),
            tags: tags(&["React", "JavaScript", "Frontend"]),
            likes: 124,
            comments: 18,
            views: 2341,
            status: BlogStatus::Approved,
            ..Default::default()
        },
        BlogPost {
            id: "2".into(),
            title: "Building Scalable APIs with Node.js and Express".into(),
            excerpt: "A comprehensive guide to creating robust, scalable APIs using Node.js, Express, and modern best practices for backend development.".into(),
            cover_image: cover("photo-1558494949-ef010cbdcc31"),
            author: Author::new("Alex Rodriguez").with_avatar(avatar("photo-1472099645785-5658abf4ff4e")),
            published_at: Some(date(2024, 1, 12)),
            tags: tags(&["Node.js", "API", "Backend"]),
            likes: 89,
            comments: 12,
            views: 1876,
            is_liked: true,
            status: BlogStatus::Approved,
            ..Default::default()
        },
        BlogPost {
            id: "3".into(),
            title: "The Future of Web Development: AI and Machine Learning Integration".into(),
            excerpt: "Exploring how artificial intelligence and machine learning are reshaping the web development landscape and what developers need to know.".into(),
            cover_image: cover("photo-1485827404703-89b55fcc595e"),
            author: Author::new("Dr. Emily Watson").with_avatar(avatar("photo-1438761681033-6461ffad8d80")),
            published_at: Some(date(2024, 1, 10)),
            tags: tags(&["AI", "Machine Learning", "Future Tech"]),
            likes: 201,
            comments: 34,
            views: 4523,
            status: BlogStatus::Approved,
            ..Default::default()
        },
        BlogPost {
            id: "4".into(),
            title: "CSS Grid vs Flexbox: When to Use Each".into(),
            excerpt: "A detailed comparison of CSS Grid and Flexbox, including practical examples and best practices for layout design.".into(),
            cover_image: cover("photo-1507003211169-0a1dd7228f2d"),
            author: Author::new("Mike Johnson").with_avatar(avatar("photo-1500648767791-00dcc994a43e")),
            published_at: Some(date(2024, 1, 8)),
            tags: tags(&["CSS", "Layout", "Design"]),
            likes: 67,
            comments: 9,
            views: 1234,
            status: BlogStatus::Approved,
            ..Default::default()
        },
        BlogPost {
            id: "5".into(),
            title: "Mastering TypeScript: Advanced Types and Patterns".into(),
            excerpt: "Deep dive into TypeScript's advanced features, including utility types, conditional types, and design patterns for type-safe applications.".into(),
            cover_image: cover("photo-1516116216624-53e697fedbea"),
            author: Author::new("Lisa Park").with_avatar(avatar("photo-1534528741775-53994a69daeb")),
            published_at: Some(date(2024, 1, 5)),
            tags: tags(&["TypeScript", "JavaScript", "Programming"]),
            likes: 156,
            comments: 23,
            views: 2987,
            is_liked: true,
            status: BlogStatus::Approved,
            ..Default::default()
        },
    ]
}

pub fn find_feed_post(id: &str) -> Option<BlogPost> {
    feed_posts().into_iter().find(|p| p.id == id)
}
