use crate::IdeaId;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Permission denied")]
    PermissionDenied,

    #[error("Content is empty")]
    EmptyContent,

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),

    #[error("Unknown idea {0:?}")]
    UnknownIdea(IdeaId),

    #[error("Id already used {0}")]
    IdAlreadyUsed(String),

    #[error("Tag already added {0:?}")]
    TagAlreadyAdded(String),

    #[error("Too many tags")]
    TooManyTags,

    #[error("No reply is being composed")]
    NotComposing,

    #[error("Nobody is listening for replies")]
    NoReplyTarget,
}
