mod common;

#[cfg(test)]
pub mod moderation_tests {
    use rstest::rstest;

    use super::common::*;

    use devnovate::common::*;
    use devnovate::data::*;
    use devnovate::models::*;
    use devnovate::services::*;

    fn pending_ids(queue: &ModerationQueue) -> Vec<String> {
        queue.pending().iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_queue_seed_has_three_pending() {
        let queue = ModerationQueue::new(pending_submissions());
        assert_eq!(queue.len(), 3);
        assert!(queue.pending().iter().all(|p| p.status == BlogStatus::Pending));
    }

    #[rstest]
    #[case(Decision::Approve)]
    #[case(Decision::Reject)]
    fn test_decide_removes_exactly_one(#[case] decision: Decision) {
        let mut queue = ModerationQueue::new(pending_submissions());

        let removed = queue.decide("2", decision).unwrap();

        assert_eq!(removed.id, "2");
        assert_eq!(pending_ids(&queue), vec!["1", "3"]);
    }

    #[test]
    fn test_decide_unknown_id_leaves_queue_unchanged() {
        let mut queue = ModerationQueue::new(pending_submissions());
        let before = queue.clone();

        let err = queue.approve("404").unwrap_err();

        assert_eq!(err, ModerationError::NotFound("404".to_string()));
        assert_eq!(queue, before);
    }

    #[test]
    fn test_decide_twice_fails_second_time() {
        let mut queue = ModerationQueue::new(pending_submissions());
        assert!(queue.reject("1").is_ok());
        assert!(queue.reject("1").is_err());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_drain_queue() {
        let mut queue = ModerationQueue::new(vec![
            get_seed_post("a", BlogStatus::Pending, &[]),
            get_seed_post("b", BlogStatus::Pending, &[]),
        ]);
        queue.approve("b").unwrap();
        queue.reject("a").unwrap();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_decision_toast_titles() {
        assert_eq!(Decision::Approve.toast_title(), "Blog approved and published!");
        assert_eq!(Decision::Reject.toast_title(), "Blog rejected and author notified.");
    }

    #[test]
    fn test_visibility_toggle_round() {
        let mut flags = VisibilityFlags::default();
        assert!(!flags.is_hidden("4"));

        assert_eq!(flags.toggle("4"), VisibilityChange::Hidden);
        assert!(flags.is_hidden("4"));
        assert!(!flags.is_hidden("5"));
        assert_eq!(flags.hidden_count(), 1);

        assert_eq!(flags.toggle("4"), VisibilityChange::Visible);
        assert!(!flags.is_hidden("4"));
        assert_eq!(flags.hidden_count(), 0);
    }

    #[test]
    fn test_visibility_does_not_touch_published_list() {
        let published = published_posts();
        let mut flags = VisibilityFlags::default();
        flags.toggle("4");
        assert_eq!(published, published_posts());
        assert_eq!(published.len(), 2);
    }

    #[test]
    fn test_visibility_toast_titles() {
        assert_eq!(VisibilityChange::Hidden.toast_title(), "Blog hidden from public view.");
        assert_eq!(VisibilityChange::Visible.toast_title(), "Blog made visible to public.");
    }

    #[rstest]
    #[case(0, 100)]
    #[case(1, 85)]
    #[case(4, 40)]
    #[case(7, 0)]
    #[case(100, 0)]
    fn test_category_bar_width(#[case] index: usize, #[case] expected: u32) {
        assert_eq!(category_bar_width(index), expected);
    }

    #[test]
    fn test_platform_stats_seed() {
        let stats = platform_stats();
        assert_eq!(stats.total_blogs, 156);
        assert_eq!(format_count(stats.total_views), "89,234");
        assert_eq!(stats.average_read_time, "4.2 min");
    }
}
