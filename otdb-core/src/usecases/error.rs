use thiserror::Error;

use otdb_entities::email::EmailAddressParseError;

use crate::{repositories, util::validate::EntryInvalidation};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The description is invalid")]
    Description,
    #[error("Too many images")]
    ImageCount,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The position is outside the supported region")]
    OutsideRegion,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Empty comment")]
    EmptyComment,
    #[error("This entry kind has no comments")]
    CommentsUnsupported,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Users must not delete themselves")]
    SelfDeletion,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Missing id list")]
    EmptyIdList,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<EmailAddressParseError> for Error {
    fn from(_: EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<EntryInvalidation> for Error {
    fn from(err: EntryInvalidation) -> Self {
        match err {
            EntryInvalidation::Title => Self::Title,
            EntryInvalidation::Description => Self::Description,
            EntryInvalidation::ImageCount => Self::ImageCount,
            EntryInvalidation::Position => Self::OutsideRegion,
        }
    }
}
