use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModerationError {
    #[error("Blog with id {0:?} is not awaiting review")]
    NotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Tag must not be empty")]
    EmptyTag,

    #[error("Tag {0:?} has already been added")]
    DuplicateTag(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Submission was interrupted before it completed")]
    Interrupted,
}
