mod common;

#[cfg(test)]
pub mod models_tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::common::*;

    use devnovate::common::*;
    use devnovate::models::*;

    #[rstest]
    #[case("pending", BlogStatus::Pending)]
    #[case("approved", BlogStatus::Approved)]
    #[case("REJECTED", BlogStatus::Rejected)]
    #[case("Hidden", BlogStatus::Hidden)]
    fn test_blog_status_from_str_success(#[case] input: &str, #[case] expected: BlogStatus) {
        assert_eq!(BlogStatus::from_str(input), Ok(expected));
    }

    #[test]
    fn test_blog_status_from_str_fails_on_unknown() {
        let err = BlogStatus::from_str("archived").unwrap_err();
        assert_eq!(err, "invalid blog status: archived");
    }

    #[test]
    fn test_blog_status_approved_reads_as_published() {
        assert_eq!(BlogStatus::Approved.label(), "Published");
        assert_eq!(BlogStatus::Approved.to_string(), "approved");
        assert!(BlogStatus::Approved == "approved");
    }

    #[test]
    fn test_blog_status_default_is_pending() {
        assert_eq!(BlogStatus::default(), BlogStatus::Pending);
    }

    #[test]
    fn test_blog_status_serializes_lowercase() {
        let json = serde_json::to_string(&BlogStatus::Hidden).unwrap();
        assert_eq!(json, "\"hidden\"");
    }

    #[test]
    fn test_author_initial_success() {
        assert_eq!(get_seed_author().initial(), "J");
    }

    #[test]
    fn test_author_initial_falls_back_on_empty_name() {
        assert_eq!(Author::new("").initial(), "?");
    }

    #[test]
    fn test_display_date_prefers_published() {
        let mut post = get_seed_post("1", BlogStatus::Approved, &[]);
        post.submitted_at = Some(date(2025, 12, 30));
        assert_eq!(post.display_date(), Some(date(2026, 1, 4)));

        post.published_at = None;
        assert_eq!(post.display_date(), Some(date(2025, 12, 30)));
    }

    #[test]
    fn test_has_tag_is_exact_match() {
        let post = get_seed_post("1", BlogStatus::Approved, &["Node.js"]);
        assert!(post.has_tag("Node.js"));
        assert!(!post.has_tag("node.js"));
        assert!(!post.has_tag("Node"));
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_234, "1,234")]
    #[case(89_234, "89,234")]
    #[case(1_000_000, "1,000,000")]
    fn test_format_count(#[case] n: u64, #[case] expected: &str) {
        assert_eq!(format_count(n), expected);
    }

    #[test]
    fn test_format_dates() {
        let day = date(2024, 1, 15);
        assert_eq!(format_date(day), "Jan 15, 2024");
        assert_eq!(format_short_date(day), "1/15/2024");
    }

    #[test]
    fn test_date_out_of_range_does_not_panic() {
        assert_eq!(date(2024, 13, 40), chrono::NaiveDate::default());
    }

    #[test]
    fn test_classes_skips_empty_parts() {
        assert_eq!(classes(["a", "", "b c", ""]), "a b c");
    }

    #[rstest]
    #[case("light", Theme::Light)]
    #[case("DARK", Theme::Dark)]
    #[case("system", Theme::System)]
    fn test_theme_from_str_success(#[case] input: &str, #[case] expected: Theme) {
        assert_eq!(Theme::from_str(input), Ok(expected));
    }

    #[test]
    fn test_notification_defaults() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.get(NotificationKind::Email));
        assert!(prefs.get(NotificationKind::Comment));
        assert!(!prefs.get(NotificationKind::Like));
        assert!(prefs.get(NotificationKind::Follow));
    }

    #[test]
    fn test_notification_set_touches_one_kind() {
        let mut prefs = NotificationPreferences::default();
        prefs.set(NotificationKind::Like, true);
        prefs.set(NotificationKind::Email, false);

        assert_eq!(
            prefs,
            NotificationPreferences {
                email: false,
                comment: true,
                like: true,
                follow: true,
            }
        );
    }
}
