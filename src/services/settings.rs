use crate::data::{BIO_LIMIT, default_profile};
use crate::models::{NotificationKind, NotificationPreferences, Profile, Theme};

/// Whether the dark palette applies, given the OS preference.
pub fn resolve_dark(theme: Theme, system_prefers_dark: bool) -> bool {
    match theme {
        Theme::Dark => true,
        Theme::Light => false,
        Theme::System => system_prefers_dark,
    }
}

pub fn bio_counter(bio: &str) -> String {
    format!("{}/{} characters", bio.chars().count(), BIO_LIMIT)
}

pub const THEME_UPDATED: &str = "Theme updated successfully!";
pub const NOTIFICATIONS_UPDATED: &str = "Notification settings updated!";
pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const PASSWORD_CHANGED: &str = "Password changed successfully!";

/// Everything the settings page remembers while it is mounted. Tabs read and
/// write this; switching tabs does not reset it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    pub theme: Theme,
    pub notifications: NotificationPreferences,
    pub profile: Profile,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            notifications: NotificationPreferences::default(),
            profile: default_profile(),
        }
    }
}

impl SettingsState {
    /// Records the chosen theme and returns whether it renders dark.
    pub fn choose_theme(&mut self, theme: Theme, system_prefers_dark: bool) -> bool {
        self.theme = theme;
        resolve_dark(theme, system_prefers_dark)
    }

    pub fn set_notification(&mut self, kind: NotificationKind, enabled: bool) {
        self.notifications.set(kind, enabled);
    }

    /// Replaces the editable profile fields. The avatar is kept.
    pub fn save_profile(&mut self, name: String, email: String, bio: String) {
        self.profile.name = name;
        self.profile.email = email;
        self.profile.bio = bio;
    }
}
