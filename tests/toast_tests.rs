mod common;

#[cfg(test)]
pub mod toast_tests {
    use devnovate::models::*;
    use devnovate::services::*;

    fn seeded_queue() -> (ToastQueue, Vec<u64>) {
        let mut queue = ToastQueue::default();
        let ids = vec![
            queue.push(ToastKind::Success, "saved", None),
            queue.push(ToastKind::Error, "failed", Some("try again".to_string())),
            queue.push(ToastKind::Info, "heads up", None),
        ];
        (queue, ids)
    }

    #[test]
    fn test_push_ids_increase() {
        let (_, ids) = seeded_queue();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let (mut queue, ids) = seeded_queue();
        assert!(queue.dismiss(ids[2]));
        let next = queue.push(ToastKind::Info, "again", None);
        assert!(next > ids[2]);
    }

    #[test]
    fn test_dismiss_removes_only_named_toast() {
        let (mut queue, ids) = seeded_queue();

        assert!(queue.dismiss(ids[1]));

        let left: Vec<u64> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(left, vec![ids[0], ids[2]]);
    }

    #[test]
    fn test_dismiss_unknown_id() {
        let (mut queue, _) = seeded_queue();
        let before = queue.clone();
        assert!(!queue.dismiss(999));
        assert_eq!(queue, before);
    }

    #[test]
    fn test_push_keeps_description() {
        let (queue, ids) = seeded_queue();
        let toast = &queue.toasts()[1];
        assert_eq!(toast.id, ids[1]);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "failed");
        assert_eq!(toast.description.as_deref(), Some("try again"));
    }

    #[test]
    fn test_empty_after_dismissing_all() {
        let (mut queue, ids) = seeded_queue();
        for id in ids {
            queue.dismiss(id);
        }
        assert!(queue.is_empty());
    }
}
