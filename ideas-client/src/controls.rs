use crate::{
    api::{Comment, CommentId, Error},
    Composer, LikeToggle, Notification, Notifier, Session,
};

/// Local interaction state of one rendered comment: its like toggle and its
/// reply composer
///
/// Every interaction receives the session and the notifier explicitly. The
/// comment tree itself is never touched: submitted replies are handed to the
/// `on_reply` callback of whoever owns the tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentControls {
    like: LikeToggle,
    composer: Composer,
}

impl CommentControls {
    pub fn new(comment: &Comment) -> CommentControls {
        CommentControls {
            like: LikeToggle::new(comment.likes),
            composer: Composer::Idle,
        }
    }

    pub fn like_count(&self) -> u32 {
        self.like.count()
    }

    pub fn is_liked(&self) -> bool {
        self.like.is_liked()
    }

    pub fn is_composing(&self) -> bool {
        self.composer.is_composing()
    }

    pub fn draft(&self) -> Option<&str> {
        self.composer.draft()
    }

    pub fn toggle_like(
        &mut self,
        session: &Session,
        notifier: &mut impl Notifier,
    ) -> Result<(), Error> {
        session.require("like comments", notifier)?;
        let count = self.like.toggle();
        tracing::debug!(count, liked = self.like.is_liked(), "toggled comment like");
        Ok(())
    }

    pub fn toggle_reply(
        &mut self,
        session: &Session,
        notifier: &mut impl Notifier,
    ) -> Result<(), Error> {
        session.require("reply to comments", notifier)?;
        self.composer.toggle();
        Ok(())
    }

    pub fn edit_reply(&mut self, text: String) -> Result<(), Error> {
        self.composer.edit(text)
    }

    pub fn cancel_reply(&mut self) {
        self.composer.cancel();
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self, session: &Session) -> bool {
        session.is_authenticated() && self.composer.trimmed().is_some()
    }

    /// Hands the trimmed draft to `on_reply` as a reply to `parent`
    ///
    /// On success the composer goes back to idle. On failure nothing changes
    /// and `on_reply` is not called.
    pub fn submit_reply<F>(
        &mut self,
        session: &Session,
        parent: &CommentId,
        on_reply: Option<F>,
        notifier: &mut impl Notifier,
    ) -> Result<(), Error>
    where
        F: FnOnce(CommentId, String),
    {
        if !session.is_authenticated() {
            return Err(Error::PermissionDenied);
        }
        let on_reply = on_reply.ok_or(Error::NoReplyTarget)?;
        let content = self.composer.take()?;
        tracing::debug!(?parent, "submitting reply");
        on_reply(parent.clone(), content);
        notifier.notify(Notification::reply_submitted());
        Ok(())
    }
}
