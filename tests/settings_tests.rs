mod common;

#[cfg(test)]
pub mod settings_tests {
    use rstest::rstest;

    use devnovate::data::*;
    use devnovate::models::*;
    use devnovate::services::*;

    #[rstest]
    #[case(Theme::Dark, false, true)]
    #[case(Theme::Dark, true, true)]
    #[case(Theme::Light, false, false)]
    #[case(Theme::Light, true, false)]
    #[case(Theme::System, true, true)]
    #[case(Theme::System, false, false)]
    fn test_resolve_dark(#[case] theme: Theme, #[case] system: bool, #[case] expected: bool) {
        assert_eq!(resolve_dark(theme, system), expected);
    }

    #[test]
    fn test_theme_defaults_to_system() {
        assert_eq!(Theme::default(), Theme::System);
    }

    #[rstest]
    #[case("", "0/500 characters")]
    #[case("hello", "5/500 characters")]
    #[case("héllo", "5/500 characters")]
    fn test_bio_counter(#[case] bio: &str, #[case] expected: &str) {
        assert_eq!(bio_counter(bio), expected);
    }

    #[test]
    fn test_bio_counter_over_limit_is_reported_as_is() {
        let bio = "x".repeat(BIO_LIMIT + 1);
        assert_eq!(bio_counter(&bio), "501/500 characters");
    }

    #[test]
    fn test_default_profile() {
        let profile = default_profile();
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.email, "john.doe@example.com");
        assert!(profile.avatar.is_some());
    }

    #[test]
    fn test_notification_kind_ids_are_unique() {
        let mut ids: Vec<&str> = NotificationKind::ALL.iter().map(|k| k.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NotificationKind::ALL.len());
    }

    #[test]
    fn test_toast_texts() {
        assert_eq!(THEME_UPDATED, "Theme updated successfully!");
        assert_eq!(NOTIFICATIONS_UPDATED, "Notification settings updated!");
        assert_eq!(PROFILE_UPDATED, "Profile updated successfully!");
        assert_eq!(PASSWORD_CHANGED, "Password changed successfully!");
    }

    #[test]
    fn test_settings_state_defaults() {
        let state = SettingsState::default();
        assert_eq!(state.theme, Theme::System);
        assert_eq!(state.notifications, NotificationPreferences::default());
        assert_eq!(state.profile, default_profile());
    }

    #[rstest]
    #[case(Theme::Dark, false, true)]
    #[case(Theme::Light, true, false)]
    #[case(Theme::System, true, true)]
    fn test_choose_theme_records_choice(
        #[case] theme: Theme,
        #[case] system: bool,
        #[case] expected: bool,
    ) {
        let mut state = SettingsState::default();
        assert_eq!(state.choose_theme(theme, system), expected);
        assert_eq!(state.theme, theme);
    }

    #[test]
    fn test_settings_state_keeps_every_section_across_edits() {
        let mut state = SettingsState::default();

        state.set_notification(NotificationKind::Like, true);
        state.choose_theme(Theme::Dark, false);
        state.save_profile(
            "Jane Tester".to_string(),
            "jane@test.com".to_string(),
            "Writes about Rust".to_string(),
        );

        // Touching one section leaves the others as they were.
        assert!(state.notifications.get(NotificationKind::Like));
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.profile.name, "Jane Tester");
        assert_eq!(state.profile.email, "jane@test.com");
        assert_eq!(state.profile.bio, "Writes about Rust");
        assert_eq!(state.profile.avatar, default_profile().avatar);

        state.set_notification(NotificationKind::Email, false);
        assert!(state.notifications.get(NotificationKind::Like));
        assert!(!state.notifications.get(NotificationKind::Email));
        assert_eq!(state.theme, Theme::Dark);
    }
}
