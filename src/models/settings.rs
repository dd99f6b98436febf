use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(format!("invalid theme: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum NotificationKind {
    Email,
    Comment,
    Like,
    Follow,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [Self::Email, Self::Comment, Self::Like, Self::Follow];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Email => "email-notifications",
            Self::Comment => "comment-notifications",
            Self::Like => "like-notifications",
            Self::Follow => "follow-notifications",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Email => "Email Notifications",
            Self::Comment => "Comment Notifications",
            Self::Like => "Like Notifications",
            Self::Follow => "Follow Notifications",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Email => "Receive email updates about your blog posts and activities",
            Self::Comment => "Get notified when someone comments on your posts",
            Self::Like => "Receive notifications when someone likes your posts",
            Self::Follow => "Get notified when someone follows you",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub comment: bool,
    pub like: bool,
    pub follow: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            comment: true,
            like: false,
            follow: true,
        }
    }
}

impl NotificationPreferences {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Comment => self.comment,
            NotificationKind::Like => self.like,
            NotificationKind::Follow => self.follow,
        }
    }

    pub fn set(&mut self, kind: NotificationKind, value: bool) {
        let slot = match kind {
            NotificationKind::Email => &mut self.email,
            NotificationKind::Comment => &mut self.comment,
            NotificationKind::Like => &mut self.like,
            NotificationKind::Follow => &mut self.follow,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub avatar: Option<String>,
}
