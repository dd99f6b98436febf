//! Hard-coded records standing in for a content store.

pub use admin::*;
pub use feed::*;
pub use profile::*;
pub use user_blogs::*;

mod admin;
mod feed;
mod profile;
mod user_blogs;

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}
