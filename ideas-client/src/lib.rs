mod comment;
pub use comment::{find_in, find_in_mut, indents_replies, CommentExt, PreOrder, MAX_INDENT_LEVEL};

mod composer;
pub use composer::Composer;

mod controls;
pub use controls::CommentControls;

mod draft;
pub use draft::{IdeaDraft, MAX_TAGS};

mod feed;
pub use feed::Feed;

mod idea;
pub use idea::{excerpt, has_tag, tag_slug, visible_tags, CardVariant};

mod like;
pub use like::LikeToggle;

pub mod mock;

mod notification;
pub use notification::{Notification, NotificationKind, Notifier};

mod session;
pub use session::Session;

mod thread;
pub use thread::CommentThread;

mod time;
pub use time::format_relative;

#[cfg(test)]
mod fixtures;

pub mod api {
    pub use ideas_api::*;
}

pub mod prelude {
    pub use crate::{CommentExt, Notifier};
}
