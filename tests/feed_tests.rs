mod common;

#[cfg(test)]
pub mod feed_tests {
    use rstest::rstest;

    use super::common::*;

    use devnovate::data::*;
    use devnovate::models::*;
    use devnovate::services::*;

    fn ids(posts: &[BlogPost]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_filter_all_keeps_every_post() {
        let posts = feed_posts();
        assert_eq!(filter_by_category(&posts, ALL_CATEGORIES), posts);
    }

    #[rstest]
    #[case("JavaScript", vec!["1", "5"])]
    #[case("Backend", vec!["2"])]
    #[case("AI", vec!["3"])]
    #[case("Design", vec!["4"])]
    #[case("React", vec!["1"])]
    #[case("Frontend", vec!["1"])]
    #[case("CSS", vec!["4"])]
    fn test_filter_by_category_seed_feed(#[case] category: &str, #[case] expected: Vec<&str>) {
        let posts = feed_posts();
        assert_eq!(ids(&filter_by_category(&posts, category)), expected);
    }

    #[test]
    fn test_filter_is_exactly_the_tagged_subset() {
        let posts = get_seed_posts_mixed();
        for category in ["Rust", "CSS", "AI", "Go"] {
            let filtered = filter_by_category(&posts, category);
            let expected: Vec<BlogPost> =
                posts.iter().filter(|p| p.has_tag(category)).cloned().collect();
            assert_eq!(filtered, expected, "category {}", category);
        }
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        assert!(filter_by_category(&feed_posts(), "Haskell").is_empty());
    }

    #[test]
    fn test_featured_and_trending_windows() {
        let posts = feed_posts();
        assert_eq!(featured(&posts).map(|p| p.id), Some("1".to_string()));
        assert_eq!(ids(&trending(&posts)), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_windows_on_short_lists() {
        let one = vec![get_seed_post("x", BlogStatus::Approved, &[])];
        assert_eq!(featured(&one).map(|p| p.id), Some("x".to_string()));
        assert!(trending(&one).is_empty());

        assert!(featured(&[]).is_none());
        assert!(trending(&[]).is_empty());
    }

    #[test]
    fn test_filter_keeps_long_lists_whole() {
        let posts: Vec<BlogPost> = (0..9)
            .map(|i| get_seed_post(&i.to_string(), BlogStatus::Approved, &["Rust"]))
            .collect();
        assert_eq!(filter_by_category(&posts, "Rust").len(), 9);
        assert_eq!(filter_by_category(&posts, ALL_CATEGORIES).len(), 9);
    }

    #[test]
    fn test_card_view_renders_fields_verbatim() {
        let post = get_seed_post("42", BlogStatus::Approved, &["A", "B", "C", "D"]);
        let card = CardView::from_post(&post);

        assert_eq!(card.href, "/blog/42");
        assert_eq!(card.title, post.title);
        assert_eq!(card.excerpt, post.excerpt);
        assert_eq!(card.author_name, "Jane Tester");
        assert_eq!(card.author_initial, "J");
        assert_eq!(card.tags, vec!["A", "B", "C"]);
        assert_eq!(card.date, "Jan 4, 2026");
    }

    #[test]
    fn test_card_view_formats_counts() {
        let post = feed_posts().remove(2);
        let card = CardView::from_post(&post);

        assert_eq!(card.views, "4,523");
        assert_eq!(card.likes, "201");
        assert_eq!(card.comments, "34");
        assert_eq!(card.date, "Jan 10, 2024");
    }

    #[test]
    fn test_card_view_keeps_short_tag_lists() {
        let post = get_seed_post("1", BlogStatus::Approved, &["Only"]);
        assert_eq!(CardView::from_post(&post).tags, vec!["Only"]);
    }

    #[test]
    fn test_find_feed_post() {
        assert_eq!(
            find_feed_post("5").map(|p| p.title),
            Some("Mastering TypeScript: Advanced Types and Patterns".to_string())
        );
        assert!(find_feed_post("99").is_none());
    }

    #[test]
    fn test_home_tab_defaults_to_latest() {
        assert_eq!(HomeTab::default(), HomeTab::Latest);
        let labels: Vec<&str> = HomeTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Featured", "Trending", "Latest"]);
    }
}
