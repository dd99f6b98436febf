use crate::models::Profile;

pub const BIO_LIMIT: usize = 500;

pub fn default_profile() -> Profile {
    Profile {
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
        bio: "Full-stack developer passionate about React and Node.js. Love sharing knowledge through blogging.".into(),
        avatar: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100".into()),
    }
}
