use chrono::Utc;

pub use uuid::Uuid;
pub type Time = chrono::DateTime<Utc>;

mod comment;
pub use comment::{Comment, CommentId};

mod dataset;
pub use dataset::Dataset;

mod error;
pub use error::Error;

mod idea;
pub use idea::{Idea, IdeaId, TrendingTag};

mod user;
pub use user::{User, UserId};

pub fn validate_string(s: &str) -> Result<(), Error> {
    if s.contains('\0') {
        return Err(Error::NullByteInString(String::from(s)));
    }
    Ok(())
}
