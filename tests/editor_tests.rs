mod common;

#[cfg(test)]
pub mod editor_tests {
    use rstest::rstest;

    use super::common::*;

    use devnovate::common::*;
    use devnovate::models::*;
    use devnovate::services::*;

    #[test]
    fn test_add_tag_success() {
        let mut draft = get_seed_draft();
        assert_eq!(draft.add_tag("  Ownership "), Ok("Ownership".to_string()));
        assert_eq!(draft.tags, vec!["Rust", "Ownership"]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_add_tag_fails_on_blank(#[case] input: &str) {
        let mut draft = get_seed_draft();
        assert_eq!(draft.add_tag(input), Err(DraftError::EmptyTag));
        assert_eq!(draft.tags, vec!["Rust"]);
    }

    #[test]
    fn test_add_tag_fails_on_duplicate() {
        let mut draft = get_seed_draft();
        assert_eq!(
            draft.add_tag(" Rust"),
            Err(DraftError::DuplicateTag("Rust".to_string()))
        );
        assert_eq!(draft.tags.len(), 1);
    }

    #[test]
    fn test_add_tag_is_case_sensitive() {
        let mut tags = vec!["Rust".to_string()];
        assert!(add_tag(&mut tags, "rust").is_ok());
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_remove_tag() {
        let mut draft = get_seed_draft();
        draft.add_tag("Async").unwrap();
        draft.remove_tag("Rust");
        assert_eq!(draft.tags, vec!["Async"]);

        draft.remove_tag("Missing");
        assert_eq!(draft.tags, vec!["Async"]);
    }

    #[rstest]
    #[case("", 0)]
    #[case("one", 1)]
    #[case("  spaced   out\nwords\t", 3)]
    fn test_word_count(#[case] content: &str, #[case] expected: u32) {
        assert_eq!(word_count(content), expected);
    }

    #[test]
    fn test_submission_is_pending_with_word_count() {
        let post = get_seed_draft().submission();

        assert_eq!(post.status, BlogStatus::Pending);
        assert_eq!(post.title, "Ownership in practice");
        assert_eq!(post.word_count, Some(7));
        assert_eq!(post.cover_image, None);
        assert_eq!(post.tags, vec!["Rust"]);
    }

    #[test]
    fn test_submission_keeps_cover() {
        let mut draft = get_seed_draft();
        draft.cover_image = "https://example.com/cover.jpg".to_string();
        assert!(draft.has_cover());
        assert_eq!(
            draft.submission().cover_image.as_deref(),
            Some("https://example.com/cover.jpg")
        );
    }

    #[test]
    fn test_submit_for_review_accepts_empty_draft() {
        let post = submit_for_review(&BlogDraft::default()).unwrap();
        assert_eq!(post.status, BlogStatus::Pending);
        assert_eq!(post.word_count, Some(0));
    }

    #[test]
    fn test_submit_delay_is_one_second() {
        assert_eq!(SUBMIT_DELAY.as_millis(), 1000);
    }

    #[test]
    fn test_create_flow_toast_texts() {
        assert_eq!(SUBMITTED_TITLE, "Blog submitted for review!");
        assert_eq!(
            SUBMITTED_DESCRIPTION,
            "Your blog post has been submitted and is pending admin approval."
        );
        assert_eq!(SUBMIT_FAILED_TITLE, "Failed to submit blog");
        assert_eq!(SUBMIT_FAILED_DESCRIPTION, "Please try again later.");
        assert_eq!(PREVIEW_TITLE, "Preview feature coming soon!");
        assert_eq!(
            PREVIEW_DESCRIPTION,
            "Preview functionality will be available in the next update."
        );
        assert_eq!(DRAFT_SAVED, "Draft saved.");
    }
}
